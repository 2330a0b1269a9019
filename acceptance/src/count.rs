//! Entity counting over typed triples.
//!
//! The count of a graph is the number of `(?, rdf:type, C)` triples summed
//! over every class `C` in a [`TypeSet`]. Classes are evaluated one at a
//! time and the results added, so a subject typed with two listed classes
//! contributes two. That total is the figure two graphs are compared on.

use sophia_api::graph::Graph as _;
use sophia_api::ns::rdf;
use sophia_api::term::matcher::Any;
use sophia_api::term::IriRef;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, GraphLoader};
use crate::types::{class_label, TypeSet};

/// Number of typed triples matching a class set.
pub type EntityCount = usize;

/// Counts `(?, rdf:type, class)` triples in `graph`.
#[must_use]
pub fn count_class(graph: &Graph, class: &str) -> EntityCount {
    graph
        .triples_matching(Any, [rdf::type_], [IriRef::new_unchecked(class)])
        .count()
}

/// Sums [`count_class`] over every class in `types`, in order.
#[must_use]
pub fn count_entities(graph: &Graph, types: &TypeSet) -> EntityCount {
    types.iter().map(|class| count_class(graph, class)).sum()
}

/// Per-class breakdown of an entity count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EntityTally {
    /// `(class IRI, matching triples)` in class-set order.
    pub rows: Vec<(String, EntityCount)>,
}

impl EntityTally {
    /// Tallies `graph` against `types`.
    #[must_use]
    pub fn of(graph: &Graph, types: &TypeSet) -> Self {
        Self {
            rows: types
                .iter()
                .map(|class| (class.to_string(), count_class(graph, class)))
                .collect(),
        }
    }

    /// Sum of all rows; equal to [`count_entities`] on the same inputs.
    #[must_use]
    pub fn total(&self) -> EntityCount {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// One `label: n` line per row, for report details.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|(class, n)| format!("{}: {}", class_label(class), n))
            .collect()
    }
}

/// Loads graphs and counts the entities of a fixed class set in them.
#[derive(Debug, Clone)]
pub struct EntityCounter {
    loader: GraphLoader,
    types: TypeSet,
}

impl EntityCounter {
    /// Creates a counter for `types` that fetches through `loader`.
    #[must_use]
    pub fn new(loader: GraphLoader, types: TypeSet) -> Self {
        Self { loader, types }
    }

    /// The class set this counter evaluates.
    #[must_use]
    pub fn types(&self) -> &TypeSet {
        &self.types
    }

    /// Fetches the graph at `uri` and returns its entity count.
    ///
    /// The graph is fetched again on every call.
    ///
    /// # Errors
    ///
    /// Propagates any retrieval or parse error from [`GraphLoader::load`];
    /// an unreachable graph is never reported as zero.
    pub fn count(&self, uri: &str) -> Result<EntityCount> {
        let graph = self.loader.load(uri)?;
        let n = count_entities(&graph, &self.types);
        debug!(uri, count = n, "entities counted");
        Ok(n)
    }

    /// Fetches the graph at `uri` and returns its per-class tally.
    ///
    /// # Errors
    ///
    /// Same as [`EntityCounter::count`].
    pub fn tally(&self, uri: &str) -> Result<EntityTally> {
        let graph = self.loader.load(uri)?;
        Ok(EntityTally::of(&graph, &self.types))
    }
}
