//! Entrée ligne par ligne et sortie texte de la session.

use crate::error::Result;

/// Source de lignes utilisateur (readline, script, tests...).
pub trait LineSource {
    /// Affiche `prompt` et lit une ligne. `Ok(None)` signale la fin de l'entrée.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Nature d'un texte émis, pour que l'affichage puisse le styliser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Programme assemblé
    Source,
    /// stderr du compilateur ou du binaire
    Diagnostic,
    /// stdout du binaire
    Output,
    /// Messages de la session (historique vidé, stdout inattendu du compilateur...)
    Notice,
    /// Temps écoulé du cycle
    Timing,
}

pub trait Sink {
    fn emit(&mut self, channel: Channel, text: &str);
}

/// Rejoue une liste de lignes, puis signale la fin de l'entrée.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    lines: std::collections::VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl LineSource for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Sink qui conserve tout ce qui est émis.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<(Channel, String)>,
}

impl Recorder {
    pub fn on(&self, channel: Channel) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, t)| t.as_str())
            .collect()
    }
}

impl Sink for Recorder {
    fn emit(&mut self, channel: Channel, text: &str) {
        self.events.push((channel, text.to_string()));
    }
}
