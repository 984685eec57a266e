//! Core data types: object references, layer records, extraction results.

/// Reference to a numbered object body elsewhere in the buffer.
///
/// The generation number is parsed but never used for disambiguation:
/// layer metadata lives in single-generation documents in practice, so
/// references resolve by object id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjRef {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl ObjRef {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

/// A named layer and its default visibility.
///
/// The name is always non-empty: entries whose name cannot be resolved are
/// dropped during extraction, never emitted as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    pub name: String,
    pub visible: bool,
}

impl LayerRecord {
    pub fn new(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
        }
    }
}

/// Ordered sequence of extracted layers.
///
/// The total count and the visible subsequence are views computed on
/// demand from the one stored sequence, so they cannot diverge from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    layers: Vec<LayerRecord>,
}

impl ExtractionResult {
    pub fn new(layers: Vec<LayerRecord>) -> Self {
        Self { layers }
    }

    /// All records, in extraction order.
    pub fn layers(&self) -> &[LayerRecord] {
        &self.layers
    }

    /// Number of records.
    pub fn total(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Records with `visible == true`, preserving relative order.
    pub fn visible(&self) -> impl Iterator<Item = &LayerRecord> {
        self.layers.iter().filter(|layer| layer.visible)
    }

    /// Names of the visible layers, in order.
    pub fn visible_names(&self) -> Vec<&str> {
        self.visible().map(|layer| layer.name.as_str()).collect()
    }

    /// Consume the result, yielding the underlying records.
    pub fn into_layers(self) -> Vec<LayerRecord> {
        self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_derive_from_layers() {
        let result = ExtractionResult::new(vec![
            LayerRecord::new("a", true),
            LayerRecord::new("b", false),
            LayerRecord::new("c", true),
        ]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.visible().count(), 2);
        assert_eq!(result.visible_names(), vec!["a", "c"]);
    }

    #[test]
    fn test_empty_result() {
        let result = ExtractionResult::default();
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
        assert_eq!(result.visible_names(), Vec::<&str>::new());
    }
}
