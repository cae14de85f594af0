//! Terminal : lecture via rustyline, affichage coloré via yansi.

use rusterpreter_core::{Channel, LineSource, ReplError, Result, Sink};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use yansi::Paint;

/// Lecture de lignes avec édition et rappel d'historique.
pub struct Readline {
    editor: DefaultEditor,
}

impl Readline {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| ReplError::Input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for Readline {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line);
                }
                Ok(Some(line.to_string()))
            }
            // ctrl+c / ctrl+d : fin de session, comme `exit`
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(ReplError::Input(e.to_string())),
        }
    }
}

/// Tout part sur stdout ; seule la couleur distingue les canaux.
pub struct Console;

impl Sink for Console {
    fn emit(&mut self, channel: Channel, text: &str) {
        match channel {
            Channel::Source => println!("{}", text.dim()),
            Channel::Diagnostic => println!("{}", text.yellow()),
            Channel::Output => println!("{text}"),
            Channel::Notice => println!("{}", text.cyan()),
            Channel::Timing => println!("{}", text.green()),
        }
    }
}
