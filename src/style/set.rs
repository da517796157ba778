use std::collections::HashMap;

use super::{Style, StyleIdGenerator};

/// The styles of one subtitle document, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: Vec<Style>,
    by_id: HashMap<String, usize>,
    ids: StyleIdGenerator,
}

impl StyleSet {
    pub fn new() -> StyleSet {
        StyleSet::default()
    }

    /// Adds a style and returns it as stored.
    ///
    /// A style without an identifier gets the next unused default one. A
    /// style whose identifier is already taken replaces the earlier style in
    /// place.
    pub fn insert(&mut self, mut style: Style) -> &Style {
        if style.id.is_empty() {
            style.id = self.next_default_id();
        }
        let index = match self.by_id.get(&style.id) {
            Some(&index) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(id = %style.id, "replacing style");
                self.styles[index] = style;
                index
            }
            None => {
                self.by_id.insert(style.id.clone(), self.styles.len());
                self.styles.push(style);
                self.styles.len() - 1
            }
        };
        &self.styles[index]
    }

    /// Copies the style `base_id` under `new_name` and adds the copy.
    ///
    /// Returns `None` if there is no style `base_id`.
    pub fn derive(&mut self, new_name: &str, base_id: &str) -> Option<&Style> {
        let style = Style::copy(new_name, self.get(base_id)?);
        Some(self.insert(style))
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.by_id.get(id).map(|&index| &self.styles[index])
    }

    /// The next default identifier not yet used by a style in this set.
    pub fn next_default_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
