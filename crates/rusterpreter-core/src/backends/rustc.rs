use std::path::PathBuf;
use std::process::Command;

use crate::backends::{classify, Artifact, BuildKind, BuildOutcome, Compile};
use crate::config::{Classification, CompilerConfig};
use crate::diagnostics::Summary;
use crate::error::{ReplError, Result};
use crate::util::fs;

/// Build runner qui appelle `rustc <src> -o <bin>` (sans shell).
#[derive(Debug, Clone)]
pub struct Rustc {
    program: PathBuf,
    extra_args: Vec<String>,
    classification: Classification,
}

impl Rustc {
    /// Vérifie une fois au démarrage que le compilateur est disponible.
    pub fn probe(cfg: &CompilerConfig) -> Result<Self> {
        let program = fs::find_on_path(cfg.compiler.as_std_path()).ok_or_else(|| {
            ReplError::CompilerNotFound { program: cfg.compiler.to_string() }
        })?;
        log::debug!("compilateur: {}", program.display());
        Ok(Self {
            program,
            extra_args: cfg.extra_args.clone(),
            classification: cfg.classification,
        })
    }

    fn name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Compile for Rustc {
    fn compile(&self, source: &str) -> Result<BuildOutcome> {
        let scratch = fs::scratch_source(source)?;
        let dir = fs::artifact_dir()?;
        let bin = dir.path().join(fs::BIN_NAME);

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.extra_args).arg(scratch.path()).arg("-o").arg(&bin);
        log::debug!("spawn {cmd:?}");
        let output = cmd
            .output()
            .map_err(|source| ReplError::Spawn { program: self.name(), source })?;

        // le compilateur a fini de lire la source
        if let Err(e) = scratch.close() {
            log::warn!("suppression du fichier source temporaire: {e}");
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let kind = classify(self.classification, output.status.success(), &stderr);

        let summary = Summary::from_stderr(&stderr);
        log::info!(
            "{kind:?} (status {:?}, {} error(s), {} warning(s))",
            output.status.code(),
            summary.errors,
            summary.warnings
        );

        let artifact = match kind {
            BuildKind::CompileSuccess => Some(Artifact::in_dir(dir, bin)),
            BuildKind::CompileFailure => None,
        };
        Ok(BuildOutcome { kind, artifact, stdout, stderr, status: output.status.code() })
    }
}
