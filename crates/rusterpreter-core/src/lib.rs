//! rusterpreter-core — cœur d'un REPL Rust compilé.
//! - Accumule les fragments saisis dans un historique
//! - Assemble l'historique en programme (`fn main` + valeur de queue affichée en `{:?}`)
//! - Compile via `rustc` (fichiers temporaires non prédictibles), rollback si erreur
//! - Exécute le binaire et rapporte sorties et temps écoulé
//!
//! Le terminal (readline, couleurs, bannière) reste hors du cœur : la session
//! ne voit qu'un [`LineSource`] et un [`Sink`].

pub mod assemble;
pub mod backends;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod history;
pub mod io;
pub mod session;
mod util;

pub use assemble::assemble;
pub use backends::{BuildKind, BuildOutcome, Compile, ExecutionOutcome, Native, Run, Rustc};
pub use config::{Classification, CompilerConfig, ExecFailurePolicy, SessionConfig};
pub use error::{ReplError, Result};
pub use history::{Fragment, History};
pub use io::{Channel, LineSource, Recorder, Scripted, Sink};
pub use session::{Session, Step};
