//! Selection state for the tabbed code panel.

use super::{CodeSample, SampleCatalog};

/// Which sample is currently displayed.
///
/// The selected key is always a key present in the catalog the selection
/// was created against: `select` refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSelection {
    selected: &'static str,
}

impl SampleSelection {
    /// Starts at the catalog's default (first) entry.
    pub fn new(catalog: &SampleCatalog) -> Self {
        Self {
            selected: catalog.default_key(),
        }
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    /// Switches to `key` if the catalog contains it.
    ///
    /// Unknown keys leave the selection untouched and return `false`;
    /// no error is surfaced because the UI only offers catalog keys.
    pub fn select(&mut self, catalog: &SampleCatalog, key: &str) -> bool {
        match catalog.get(key) {
            Some(sample) => {
                self.selected = sample.key;
                true
            }
            None => false,
        }
    }

    /// The sample currently displayed.
    pub fn current<'a>(&self, catalog: &'a SampleCatalog) -> Option<&'a CodeSample> {
        catalog.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::super::replica_samples;
    use super::*;

    #[test]
    fn starts_at_default_key() {
        let catalog = replica_samples();
        let selection = SampleSelection::new(catalog);
        assert_eq!(selection.selected(), catalog.default_key());
    }

    #[test]
    fn every_valid_key_is_selectable() {
        let catalog = replica_samples();
        let mut selection = SampleSelection::new(catalog);
        for sample in catalog.iter() {
            assert!(selection.select(catalog, sample.key));
            assert_eq!(selection.selected(), sample.key);
            assert_eq!(selection.current(catalog).unwrap().source, sample.source);
        }
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let catalog = replica_samples();
        let mut selection = SampleSelection::new(catalog);
        assert!(selection.select(catalog, "distributed"));

        assert!(!selection.select(catalog, "quantum"));
        assert_eq!(selection.selected(), "distributed");
        assert!(!selection.select(catalog, ""));
        assert_eq!(selection.selected(), "distributed");
    }

    #[test]
    fn switching_back_and_forth_restores_the_displayed_source() {
        let catalog = replica_samples();
        let mut selection = SampleSelection::new(catalog);
        assert!(selection.current(catalog).unwrap().source.contains("actor User"));

        selection.select(catalog, "distributed");
        assert!(selection
            .current(catalog)
            .unwrap()
            .source
            .contains("actor Counter"));

        selection.select(catalog, "basic");
        assert!(selection.current(catalog).unwrap().source.contains("actor User"));
    }
}
