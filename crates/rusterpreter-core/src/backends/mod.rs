//! Collaborateurs externes : le compilateur et le binaire produit.
//!
//! La session ne connaît que les traits [`Compile`] et [`Run`] ; les
//! implémentations réelles passent par des sous-processus, les tests
//! substituent des fakes.

pub mod native;
pub mod rustc;

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

use crate::config::Classification;
use crate::error::Result;

pub use native::Native;
pub use rustc::Rustc;

/// Compile un programme assemblé.
pub trait Compile {
    fn compile(&self, source: &str) -> Result<BuildOutcome>;
}

/// Exécute un artefact compilé.
pub trait Run {
    fn run(&self, artifact: &Path) -> Result<ExecutionOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    CompileSuccess,
    CompileFailure,
}

/// Exécutable produit par un cycle. Si l'artefact possède son répertoire
/// temporaire, les deux disparaissent au drop.
#[derive(Debug)]
pub struct Artifact {
    path: PathBuf,
    _dir: Option<TempDir>,
}

impl Artifact {
    pub(crate) fn in_dir(dir: TempDir, path: PathBuf) -> Self {
        Self { path, _dir: Some(dir) }
    }

    /// Artefact géré ailleurs (pas de nettoyage au drop).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), _dir: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub kind: BuildKind,
    /// Présent seulement pour `CompileSuccess`
    pub artifact: Option<Artifact>,
    pub stdout: String,
    pub stderr: String,
    /// Code de sortie du compilateur (`None` si tué par un signal)
    pub status: Option<i32>,
}

impl BuildOutcome {
    pub fn is_failure(&self) -> bool {
        self.kind == BuildKind::CompileFailure
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub status: Option<i32>,
}

impl From<Output> for ExecutionOutcome {
    fn from(out: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            status: out.status.code(),
        }
    }
}

/// Décide du résultat d'une compilation selon la règle configurée.
pub fn classify(rule: Classification, success: bool, stderr: &str) -> BuildKind {
    let failed = match rule {
        Classification::ErrorSubstring => stderr.contains("error"),
        Classification::ExitStatus => !success,
    };
    if failed {
        BuildKind::CompileFailure
    } else {
        BuildKind::CompileSuccess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_rule_is_case_sensitive() {
        let rule = Classification::ErrorSubstring;
        assert_eq!(
            classify(rule, false, "error[E0425]: cannot find value"),
            BuildKind::CompileFailure
        );
        assert_eq!(classify(rule, true, "ERROR in caps"), BuildKind::CompileSuccess);
        assert_eq!(
            classify(rule, true, "warning: unused variable: `x`"),
            BuildKind::CompileSuccess
        );
        assert_eq!(classify(rule, true, ""), BuildKind::CompileSuccess);
    }

    #[test]
    fn substring_rule_ignores_exit_status() {
        assert_eq!(
            classify(Classification::ErrorSubstring, false, ""),
            BuildKind::CompileSuccess
        );
    }

    #[test]
    fn exit_status_rule() {
        let rule = Classification::ExitStatus;
        assert_eq!(classify(rule, false, ""), BuildKind::CompileFailure);
        assert_eq!(
            classify(rule, true, "warning: unused `error_code`"),
            BuildKind::CompileSuccess
        );
    }

    #[test]
    fn external_artifact_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin");
        std::fs::write(&path, b"").unwrap();
        drop(Artifact::at(&path));
        assert!(path.exists());
    }
}
