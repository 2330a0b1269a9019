//! Vocabulary model types.
//!
//! These types describe the classes and browse indices that Quilt publishes
//! as typed Rust data. All instances are `'static`; the top-level entry
//! point is [`quilt_indices()`](crate::quilt_indices).

/// An RDF class the Spindle stack recognises (e.g. `foaf:Person`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Class {
    /// Full IRI (e.g., `"http://xmlns.com/foaf/0.1/Person"`).
    pub iri: &'static str,
    /// Compact name used in logs and reports (e.g., `"foaf:Person"`).
    pub curie: &'static str,
}

impl Class {
    /// Creates a class from its full IRI and compact name.
    #[must_use]
    pub const fn new(iri: &'static str, curie: &'static str) -> Self {
        Self { iri, curie }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.curie)
    }
}

/// One of Quilt's browse indices (e.g. `/people`).
///
/// Each index lists the entities of one class. `/everything` is the only
/// index without a class: it lists every entity Quilt holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuiltIndex {
    /// Request path of the index, with a leading slash.
    pub path: &'static str,
    /// Human-readable title of the index.
    pub label: &'static str,
    /// The class the index is restricted to, or `None` for `/everything`.
    pub class: Option<Class>,
}

impl QuiltIndex {
    /// Returns true if this index lists every entity regardless of class.
    #[must_use]
    pub fn is_everything(&self) -> bool {
        self.class.is_none()
    }
}
