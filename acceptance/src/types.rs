//! The ordered set of classes the entity counter looks for.

use url::Url;

use crate::error::{AcceptanceError, Result};

/// An ordered, immutable list of class IRIs.
///
/// Order is evaluation order and also the order of a tally's rows. Entries
/// are not deduplicated: a class listed twice is counted twice, the same way
/// a subject carrying two listed classes is counted once per class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSet {
    classes: Vec<String>,
}

impl TypeSet {
    /// Builds a class set from absolute IRIs.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::InvalidTypeSet`] if the list is empty or
    /// any entry is not an absolute IRI.
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(AcceptanceError::InvalidTypeSet(
                "at least one class is required".to_string(),
            ));
        }
        for class in &classes {
            if Url::parse(class).is_err() {
                return Err(AcceptanceError::InvalidTypeSet(format!(
                    "{class:?} is not an absolute IRI"
                )));
            }
        }
        Ok(Self { classes })
    }

    /// The persons-and-creative-works set: `frbr:Work`, then `foaf:Person`.
    #[must_use]
    pub fn persons_and_works() -> Self {
        Self {
            classes: spindle_vocab::default_entity_classes()
                .iter()
                .map(|class| class.iri.to_string())
                .collect(),
        }
    }

    /// Iterates over the class IRIs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::persons_and_works()
    }
}

/// Short display name for a class IRI: its CURIE when the vocabulary knows
/// it, the full IRI otherwise.
#[must_use]
pub fn class_label(iri: &str) -> String {
    spindle_vocab::find_class(iri)
        .map(|class| class.curie.to_string())
        .unwrap_or_else(|| iri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_work_then_person() {
        let set = TypeSet::default();
        let classes: Vec<_> = set.iter().collect();
        assert_eq!(
            classes,
            vec![
                "http://purl.org/vocab/frbr/core#Work",
                "http://xmlns.com/foaf/0.1/Person"
            ]
        );
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = TypeSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, AcceptanceError::InvalidTypeSet(_)));
    }

    #[test]
    fn relative_iri_is_rejected() {
        assert!(TypeSet::new(["Person"]).is_err());
    }

    #[test]
    fn duplicates_are_kept() {
        let set = TypeSet::new(["http://ex.org/A", "http://ex.org/A"]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn labels_prefer_curies() {
        assert_eq!(class_label("http://xmlns.com/foaf/0.1/Person"), "foaf:Person");
        assert_eq!(class_label("http://ex.org/Play"), "http://ex.org/Play");
    }
}
