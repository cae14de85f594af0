//! Lecture grossière des diagnostics rustc, pour les logs.
//!
//! La classification succès/échec ne dépend pas de ce module (voir
//! [`crate::config::Classification`]).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Reconnaît l'en-tête d'un diagnostic rustc (`error[E0425]: ...`, `warning: ...`).
    fn of_header(line: &str) -> Option<Self> {
        let head = line.split_once(':').map(|(h, _)| h)?;
        let head = head.split('[').next().unwrap_or(head);
        match head {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "note" | "help" => Some(Severity::Info),
            _ => None,
        }
    }
}

/// Nombre de diagnostics par sévérité.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_stderr(stderr: &str) -> Self {
        let mut s = Summary::default();
        for line in stderr.lines() {
            match Severity::of_header(line) {
                Some(Severity::Error) => s.errors += 1,
                Some(Severity::Warning) => s.warnings += 1,
                _ => {}
            }
        }
        // rustc résume lui-même: "error: aborting due to ..." n'est pas un diagnostic
        if stderr.lines().any(|l| l.starts_with("error: aborting due to")) {
            s.errors = s.errors.saturating_sub(1);
        }
        s
    }
}
