//! Showing listings grouped by film.

use serde::{Deserialize, Serialize};

/// Display lines grouped by film name, in first-encounter order.
///
/// Built by [`Cinema::all_showings`](super::Cinema::all_showings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowingReport {
    groups: Vec<(String, Vec<String>)>,
}

impl ShowingReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line to a film's group, opening the group if needed.
    pub fn push(&mut self, film: &str, line: String) {
        match self.groups.iter_mut().find(|(name, _)| name.as_str() == film) {
            Some((_, lines)) => lines.push(line),
            None => self.groups.push((film.to_string(), vec![line])),
        }
    }

    /// Lines for a film, if it has any showings.
    pub fn get(&self, film: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(name, _)| name.as_str() == film)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Film names in group order.
    pub fn film_names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterates `(film, lines)` in group order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Number of films with showings.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no showings at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_groups_in_first_seen_order() {
        let mut r = ShowingReport::new();
        r.push("B", "b1".into());
        r.push("A", "a1".into());
        r.push("B", "b2".into());

        assert_eq!(r.film_names(), vec!["B", "A"]);
        assert_eq!(r.get("B").unwrap(), ["b1", "b2"]);
        assert_eq!(r.get("A").unwrap(), ["a1"]);
        assert!(r.get("C").is_none());
    }

    #[test]
    fn test_iter() {
        let mut r = ShowingReport::new();
        r.push("A", "a1".into());
        r.push("B", "b1".into());
        let collected: Vec<(&str, usize)> = r.iter().map(|(f, l)| (f, l.len())).collect();
        assert_eq!(collected, vec![("A", 1), ("B", 1)]);
    }

    #[test]
    fn test_empty() {
        let r = ShowingReport::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }
}
