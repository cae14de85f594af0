use camino::Utf8PathBuf;

/// Règle qui décide si une compilation a échoué.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    /// Échec si stderr contient la sous-chaîne `"error"` (sensible à la casse).
    #[default]
    ErrorSubstring,
    /// Échec si le compilateur sort avec un statut non nul.
    ExitStatus,
}

/// Que faire quand l'artefact compilé ne peut pas être lancé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecFailurePolicy {
    /// Termine la session (comportement de base).
    #[default]
    Abort,
    /// Affiche l'erreur comme diagnostic et continue.
    Report,
}

/// Configuration du compilateur externe.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Binaire du compilateur (nom cherché dans PATH, ou chemin explicite)
    pub compiler: Utf8PathBuf,
    /// Arguments insérés avant le fichier source
    pub extra_args: Vec<String>,
    pub classification: Classification,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            compiler: Utf8PathBuf::from("rustc"),
            extra_args: Vec::new(),
            classification: Classification::default(),
        }
    }
}

/// Configuration de la boucle de session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: String,
    pub exit_token: String,
    pub clear_token: String,
    /// Affiche le programme assemblé à chaque cycle
    pub show_source: bool,
    pub exec_failure: ExecFailurePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "rust> ".into(),
            exit_token: "exit".into(),
            clear_token: "clear".into(),
            show_source: true,
            exec_failure: ExecFailurePolicy::default(),
        }
    }
}
