use std::path::Path;
use std::process::Command;

use crate::backends::{ExecutionOutcome, Run};
use crate::error::{ReplError, Result};

/// Lance l'artefact compilé, sans argument ni shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

impl Run for Native {
    fn run(&self, artifact: &Path) -> Result<ExecutionOutcome> {
        log::debug!("exec {}", artifact.display());
        let out = Command::new(artifact).output().map_err(|source| ReplError::Spawn {
            program: artifact.display().to_string(),
            source,
        })?;
        // un statut non nul n'est pas une erreur ici : seule la sortie compte
        log::debug!("exit status: {:?}", out.status.code());
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_is_spawn_error() {
        let err = Native.run(Path::new("/nonexistent/rusterp/bin")).unwrap_err();
        assert!(matches!(err, ReplError::Spawn { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn captures_streams_and_status() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("prog");
        std::fs::write(&script, "#!/bin/sh\necho out\necho err >&2\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o700)).unwrap();

        let out = Native.run(&script).unwrap();
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
        assert_eq!(out.status, Some(3));
    }
}
