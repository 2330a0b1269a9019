//! Namespace IRIs and the class terms used by Quilt's indices.

use crate::model::Class;

/// RDF 1.1 syntax namespace (`rdf:`).
pub mod rdf {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// FRBR core (`frbr:`).
pub mod frbr {
    use super::Class;

    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/vocab/frbr/core#";
    /// `frbr:Work`: creative works.
    pub const WORK: Class = Class::new("http://purl.org/vocab/frbr/core#Work", "frbr:Work");
}

/// Friend of a Friend (`foaf:`).
pub mod foaf {
    use super::Class;

    /// Namespace IRI.
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    /// `foaf:Person`
    pub const PERSON: Class = Class::new("http://xmlns.com/foaf/0.1/Person", "foaf:Person");
    /// `foaf:Group`
    pub const GROUP: Class = Class::new("http://xmlns.com/foaf/0.1/Group", "foaf:Group");
    /// `foaf:Agent`
    pub const AGENT: Class = Class::new("http://xmlns.com/foaf/0.1/Agent", "foaf:Agent");
    /// `foaf:Document`: digital assets.
    pub const DOCUMENT: Class = Class::new("http://xmlns.com/foaf/0.1/Document", "foaf:Document");
}

/// WGS84 positioning (`geo:`).
pub mod geo {
    use super::Class;

    /// `geo:SpatialThing`: places.
    pub const SPATIAL_THING: Class = Class::new(
        "http://www.w3.org/2003/01/geo/wgs84_pos#SpatialThing",
        "geo:SpatialThing",
    );
}

/// The Event ontology (`event:`).
pub mod event {
    use super::Class;

    /// `event:Event`
    pub const EVENT: Class = Class::new("http://purl.org/NET/c4dm/event.owl#Event", "event:Event");
}

/// CIDOC CRM (`crm:`).
pub mod crm {
    use super::Class;

    /// `crm:E18_Physical_Thing`
    pub const PHYSICAL_THING: Class = Class::new(
        "http://www.cidoc-crm.org/cidoc-crm/E18_Physical_Thing",
        "crm:E18_Physical_Thing",
    );
}

/// DCMI type vocabulary (`dcmitype:`).
pub mod dcmitype {
    use super::Class;

    /// `dcmitype:Collection`
    pub const COLLECTION: Class =
        Class::new("http://purl.org/dc/dcmitype/Collection", "dcmitype:Collection");
}

/// SKOS core (`skos:`).
pub mod skos {
    use super::Class;

    /// `skos:Concept`
    pub const CONCEPT: Class =
        Class::new("http://www.w3.org/2004/02/skos/core#Concept", "skos:Concept");
}
