//! Shared fixtures for the acceptance integration tests: N-Triples
//! documents with known entity counts and a harness wired to mock servers.

#![allow(dead_code)]

use std::path::Path;

use spindle_acceptance::{AcceptanceConfig, Harness};

pub const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";
pub const WORK: &str = "<http://purl.org/vocab/frbr/core#Work>";
pub const PERSON: &str = "<http://xmlns.com/foaf/0.1/Person>";
pub const NAME: &str = "<http://xmlns.com/foaf/0.1/name>";

/// One `rdf:type` statement.
pub fn typed(subject: &str, class: &str) -> String {
    format!("<http://example.com/{subject}> {RDF_TYPE} {class} .\n")
}

/// A graph with `persons` Persons and `works` Works, plus a name triple per
/// person so the graph is not only type statements.
pub fn people_and_works(persons: usize, works: usize) -> String {
    let mut doc = String::new();
    for i in 0..persons {
        doc.push_str(&typed(&format!("person/{i}"), PERSON));
        doc.push_str(&format!(
            "<http://example.com/person/{i}> {NAME} \"Person {i}\" .\n"
        ));
    }
    for i in 0..works {
        doc.push_str(&typed(&format!("work/{i}"), WORK));
    }
    doc
}

/// The N-Quads fixture ingested by the equivalence scenario: 3 persons and
/// 2 works in one named graph.
pub fn ingest_fixture() -> String {
    people_and_works(3, 2)
        .lines()
        .map(|line| {
            let triple = line.trim_end_matches(" .");
            format!("{triple} <http://example.com/graph> .\n")
        })
        .collect()
}

/// Harness pointed at the given Twine and Quilt base URLs, resolving
/// relative ingest paths against `data_dir`.
pub fn harness(twine: &str, quilt: &str, data_dir: &Path) -> Harness {
    let mut config = AcceptanceConfig::default();
    config.twine.base_url = twine.to_string();
    config.quilt.base_url = quilt.to_string();
    config.timeouts.http_secs = 5;
    config.timeouts.probe_secs = 2;
    config.data_dir = Some(data_dir.to_path_buf());
    Harness::new(config).unwrap()
}
