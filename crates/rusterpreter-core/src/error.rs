use std::io;

use thiserror::Error;

/// Erreurs fatales (ou configurables) de la session.
///
/// Un échec de compilation n'en fait pas partie : c'est un résultat normal,
/// récupéré par rollback de l'historique.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Error: Rust compiler ('{program}') not found on system.")]
    CompilerNotFound { program: String },

    #[error("fichier temporaire: {0}")]
    Scratch(#[from] io::Error),

    #[error("impossible de lancer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("lecture de l'entrée: {0}")]
    Input(String),
}

pub type Result<T, E = ReplError> = std::result::Result<T, E>;
