//! Boucle de session : lire → assembler → compiler → (rollback | exécuter) → rapporter.

use std::time::Instant;

use crate::assemble::assemble;
use crate::backends::{Compile, Run};
use crate::config::{ExecFailurePolicy, SessionConfig};
use crate::error::{ReplError, Result};
use crate::history::History;
use crate::io::{Channel, LineSource, Sink};

/// Issue d'un cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// État d'une session interactive : l'historique et les deux collaborateurs externes.
pub struct Session<C, R> {
    history: History,
    compiler: C,
    runner: R,
    cfg: SessionConfig,
}

impl<C: Compile, R: Run> Session<C, R> {
    pub fn new(compiler: C, runner: R, cfg: SessionConfig) -> Self {
        Self { history: History::new(), compiler, runner, cfg }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Lit des lignes jusqu'à `exit` ou la fin de l'entrée.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Sink) -> Result<()> {
        loop {
            let Some(line) = input.read_line(&self.cfg.prompt)? else {
                return Ok(());
            };
            if self.step(&line, out)? == Step::Exit {
                return Ok(());
            }
        }
    }

    /// Traite une ligne déjà lue. Le chronomètre démarre ici.
    pub fn step(&mut self, line: &str, out: &mut dyn Sink) -> Result<Step> {
        let started = Instant::now();
        let line = line.trim();

        if line == self.cfg.exit_token {
            return Ok(Step::Exit);
        }
        if line == self.cfg.clear_token {
            self.history.clear();
            out.emit(Channel::Notice, "history cleared");
            return Ok(Step::Continue);
        }

        let appended = !line.is_empty();
        if appended {
            self.history.append(line);
        }
        let Some(unit) = assemble(&self.history) else {
            return Ok(Step::Continue);
        };
        if self.cfg.show_source {
            out.emit(Channel::Source, &unit);
        }

        let build = self.compiler.compile(&unit)?;
        if !build.stdout.trim().is_empty() {
            out.emit(Channel::Notice, build.stdout.trim());
        }
        if !build.stderr.trim().is_empty() {
            out.emit(Channel::Diagnostic, build.stderr.trim());
        }

        if build.is_failure() {
            if appended {
                self.history.pop_last();
            }
        } else if let Some(artifact) = &build.artifact {
            self.execute(artifact.path(), out)?;
        }

        let secs = started.elapsed().as_secs_f64();
        out.emit(Channel::Timing, &format!("Elapsed time: {secs:.2} seconds."));
        Ok(Step::Continue)
    }

    fn execute(&self, artifact: &std::path::Path, out: &mut dyn Sink) -> Result<()> {
        match self.runner.run(artifact) {
            Ok(exec) => {
                if !exec.stdout.trim().is_empty() {
                    out.emit(Channel::Output, exec.stdout.trim());
                }
                if !exec.stderr.trim().is_empty() {
                    out.emit(Channel::Diagnostic, exec.stderr.trim());
                }
                Ok(())
            }
            Err(e @ ReplError::Spawn { .. })
                if self.cfg.exec_failure == ExecFailurePolicy::Report =>
            {
                out.emit(Channel::Diagnostic, &e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
