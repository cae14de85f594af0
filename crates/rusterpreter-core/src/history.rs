//! Historique des fragments acceptés pendant la session.

/// Une ligne de code acceptée. Immuable une fois stockée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Séquence ordonnée de fragments ; l'ordre d'insertion est l'ordre d'évaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    fragments: Vec<Fragment>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: impl Into<Fragment>) {
        let fragment = fragment.into();
        log::trace!("history += {:?}", fragment.as_str());
        self.fragments.push(fragment);
    }

    /// Retire le dernier fragment. Sans effet si l'historique est vide.
    pub fn pop_last(&mut self) -> Option<Fragment> {
        let popped = self.fragments.pop();
        if let Some(f) = &popped {
            log::trace!("history -= {:?}", f.as_str());
        }
        popped
    }

    pub fn clear(&mut self) {
        log::trace!("history cleared ({} fragment(s))", self.fragments.len());
        self.fragments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn last(&self) -> Option<&Fragment> {
        self.fragments.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut h = History::new();
        for s in ["let a = 1", "let b = 2", "a + b"] {
            h.append(s);
        }
        assert_eq!(h.len(), 3);
        let texts: Vec<_> = h.iter().map(Fragment::as_str).collect();
        assert_eq!(texts, ["let a = 1", "let b = 2", "a + b"]);
    }

    #[test]
    fn pop_last_on_empty_is_noop() {
        let mut h = History::new();
        assert_eq!(h.pop_last(), None);
        assert!(h.is_empty());
    }

    #[test]
    fn pop_last_removes_most_recent() {
        let mut h = History::new();
        h.append("1");
        h.append("2");
        assert_eq!(h.pop_last(), Some(Fragment::from("2")));
        assert_eq!(h.last(), Some(&Fragment::from("1")));
    }

    #[test]
    fn clear_always_empties() {
        let mut h = History::new();
        h.clear();
        assert!(h.is_empty());
        for i in 0..5 {
            h.append(i.to_string().as_str());
        }
        h.clear();
        assert!(h.is_empty());
        h.clear();
        assert!(h.is_empty());
    }
}
