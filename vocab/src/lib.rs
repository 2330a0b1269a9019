//! Spindle vocabulary encoded as typed Rust data.
//!
//! The `spindle-vocab` crate holds the RDF terms the acceptance harness
//! counts against: the `rdf:type` predicate, the classes Quilt builds its
//! browse indices from, and the default set of "persons and creative works"
//! classes used by the entity counter.
//!
//! # Entry Point
//!
//! ```
//! let indices = spindle_vocab::quilt_indices();
//! assert_eq!(indices[0].path, "/everything");
//! assert_eq!(spindle_vocab::default_entity_classes().len(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;

pub use model::{Class, QuiltIndex};
pub use namespaces::foaf::PERSON as FOAF_PERSON;
pub use namespaces::frbr::WORK as FRBR_WORK;
pub use namespaces::rdf::TYPE as RDF_TYPE;

use namespaces::{crm, dcmitype, event, foaf, frbr, geo, skos};

/// Quilt's browse indices, in the order Quilt lists them on its home page.
static QUILT_INDICES: [QuiltIndex; 11] = [
    QuiltIndex {
        path: "/everything",
        label: "Everything",
        class: None,
    },
    QuiltIndex {
        path: "/people",
        label: "People",
        class: Some(foaf::PERSON),
    },
    QuiltIndex {
        path: "/groups",
        label: "Groups",
        class: Some(foaf::GROUP),
    },
    QuiltIndex {
        path: "/agents",
        label: "Agents",
        class: Some(foaf::AGENT),
    },
    QuiltIndex {
        path: "/places",
        label: "Places",
        class: Some(geo::SPATIAL_THING),
    },
    QuiltIndex {
        path: "/events",
        label: "Events",
        class: Some(event::EVENT),
    },
    QuiltIndex {
        path: "/things",
        label: "Physical things",
        class: Some(crm::PHYSICAL_THING),
    },
    QuiltIndex {
        path: "/collections",
        label: "Collections",
        class: Some(dcmitype::COLLECTION),
    },
    QuiltIndex {
        path: "/works",
        label: "Creative works",
        class: Some(frbr::WORK),
    },
    QuiltIndex {
        path: "/assets",
        label: "Digital assets",
        class: Some(foaf::DOCUMENT),
    },
    QuiltIndex {
        path: "/concepts",
        label: "Concepts",
        class: Some(skos::CONCEPT),
    },
];

/// The classes counted as "persons and creative works", in evaluation order.
static DEFAULT_ENTITY_CLASSES: [Class; 2] = [frbr::WORK, foaf::PERSON];

/// Returns Quilt's browse indices.
#[must_use]
pub fn quilt_indices() -> &'static [QuiltIndex] {
    &QUILT_INDICES
}

/// Returns the index listing every entity (`/everything`).
#[must_use]
pub fn everything_index() -> &'static QuiltIndex {
    &QUILT_INDICES[0]
}

/// Returns the default ordered class set for entity counting:
/// `frbr:Work` followed by `foaf:Person`.
#[must_use]
pub fn default_entity_classes() -> &'static [Class] {
    &DEFAULT_ENTITY_CLASSES
}

/// Looks up the class behind a browse index path. Returns `None` for
/// unknown paths and for `/everything`.
#[must_use]
pub fn class_for_index(path: &str) -> Option<Class> {
    QUILT_INDICES
        .iter()
        .find(|index| index.path == path)
        .and_then(|index| index.class)
}

/// Looks up a known class by its full IRI.
#[must_use]
pub fn find_class(iri: &str) -> Option<Class> {
    QUILT_INDICES
        .iter()
        .filter_map(|index| index.class)
        .find(|class| class.iri == iri)
}

/// Looks up a known class by its compact name (e.g. `"foaf:Person"`).
#[must_use]
pub fn find_curie(curie: &str) -> Option<Class> {
    QUILT_INDICES
        .iter()
        .filter_map(|index| index.class)
        .find(|class| class.curie == curie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_first_and_unclassed() {
        let everything = everything_index();
        assert_eq!(everything.path, "/everything");
        assert!(everything.is_everything());
        assert_eq!(
            quilt_indices().iter().filter(|i| i.is_everything()).count(),
            1
        );
    }

    #[test]
    fn default_classes_are_work_then_person() {
        let classes = default_entity_classes();
        assert_eq!(classes[0].iri, "http://purl.org/vocab/frbr/core#Work");
        assert_eq!(classes[1].iri, "http://xmlns.com/foaf/0.1/Person");
    }

    #[test]
    fn index_lookup() {
        assert_eq!(class_for_index("/people"), Some(foaf::PERSON));
        assert_eq!(class_for_index("/works"), Some(frbr::WORK));
        assert_eq!(class_for_index("/everything"), None);
        assert_eq!(class_for_index("/nowhere"), None);
    }

    #[test]
    fn class_lookup_by_curie() {
        assert_eq!(find_curie("foaf:Person"), Some(foaf::PERSON));
        assert_eq!(find_curie("frbr:Work"), Some(frbr::WORK));
        assert_eq!(find_curie("ex:Play"), None);
    }

    #[test]
    fn class_lookup_by_iri() {
        assert_eq!(
            find_class("http://www.w3.org/2004/02/skos/core#Concept").map(|c| c.curie),
            Some("skos:Concept")
        );
        assert!(find_class("http://example.org/Unknown").is_none());
    }

    #[test]
    fn index_paths_are_unique() {
        let mut paths: Vec<_> = quilt_indices().iter().map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), quilt_indices().len());
    }

    #[test]
    fn rdf_type_is_in_rdf_namespace() {
        assert!(RDF_TYPE.starts_with(namespaces::rdf::NS));
    }
}
