//! Step definitions.
//!
//! Step text is matched against a [`StepRegistry`] of anchored patterns,
//! each producing a typed [`Step`]. The [`Harness`] executes steps against
//! the services, threading a [`ScenarioContext`] through one scenario.

use std::path::PathBuf;

use regex::{Captures, Regex};
use tracing::{info, warn};

use crate::config::AcceptanceConfig;
use crate::count::{EntityCount, EntityCounter};
use crate::error::{AcceptanceError, Result};
use crate::graph::GraphLoader;
use crate::probe::probe;
use crate::quilt::QuiltClient;
use crate::twine::TwineClient;

/// What a step asks the harness to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Assert a TCP service accepts connections.
    ProbeService {
        /// Host name or address.
        host: String,
        /// Port number.
        port: u16,
    },
    /// Post a file to Twine.
    IngestFile {
        /// File to ingest, relative paths resolved against the data dir.
        path: PathBuf,
    },
    /// Count entities in Quilt's `/everything` graph.
    CountEverything,
    /// Resolve a collection through Quilt.
    ResolveCollection {
        /// Identifying URI of the collection.
        uri: String,
    },
    /// Compare the resolved collection's count with the everything count.
    AssertCountsEqual,
    /// Assert a number of proxies of a class exist. Not implemented.
    AssertProxiesExist {
        /// Expected number of proxies.
        count: usize,
        /// Class IRI of the proxies.
        class: String,
    },
}

type Build = fn(&Captures<'_>) -> Option<Step>;

/// Maps step text to [`Step`] values.
pub struct StepRegistry {
    definitions: Vec<(Regex, Build)>,
}

impl StepRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Creates a registry holding the suite's step definitions.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.define(r#"^"([^"]*)" is listening on port (\d+)$"#, |c| {
            Some(Step::ProbeService {
                host: c[1].to_string(),
                port: c[2].parse().ok()?,
            })
        });
        registry.define(r#"^"([^"]*)" is ingested into Twine$"#, |c| {
            Some(Step::IngestFile {
                path: PathBuf::from(&c[1]),
            })
        });
        registry.define(
            r"^I count the amount of persons and creative works that are ingested$",
            |_| Some(Step::CountEverything),
        );
        registry.define(r#"^A collection exists for "([^"]*)"$"#, |c| {
            Some(Step::ResolveCollection {
                uri: c[1].to_string(),
            })
        });
        registry.define(
            r"^The number of persons and creative works in the collection should be the same$",
            |_| Some(Step::AssertCountsEqual),
        );
        registry.define(
            r#"^(\d+) proxies of type "([^"]*)" should exist in the database$"#,
            |c| {
                Some(Step::AssertProxiesExist {
                    count: c[1].parse().ok()?,
                    class: c[2].to_string(),
                })
            },
        );
        registry
    }

    /// Adds a definition. Patterns are compiled once, here.
    ///
    /// Invalid patterns are programming errors in the definition table and
    /// are dropped with a warning rather than aborting the run.
    pub fn define(&mut self, pattern: &str, build: Build) {
        match Regex::new(pattern) {
            Ok(regex) => self.definitions.push((regex, build)),
            Err(err) => warn!(pattern, error = %err, "invalid step pattern ignored"),
        }
    }

    /// Returns the step for `text`, or `None` if no definition matches.
    ///
    /// The first matching definition wins.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<Step> {
        self.definitions.iter().find_map(|(regex, build)| {
            let captures = regex.captures(text)?;
            build(&captures)
        })
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the registry has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// State carried between the steps of one scenario.
///
/// A fresh context is created for every scenario and dropped after it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScenarioContext {
    /// Entity count of the `/everything` graph.
    pub entities: Option<EntityCount>,
    /// `Location` of the last resolved collection.
    pub collection: Option<String>,
}

/// How a step ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did what it says.
    Passed(String),
    /// The step has no implementation yet.
    Pending(String),
}

/// Executes steps against Twine and Quilt.
#[derive(Debug, Clone)]
pub struct Harness {
    config: AcceptanceConfig,
    twine: TwineClient,
    quilt: QuiltClient,
    counter: EntityCounter,
}

impl Harness {
    /// Builds the service clients described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL does not parse, the class set is
    /// invalid, or an HTTP client cannot be built.
    pub fn new(config: AcceptanceConfig) -> anyhow::Result<Self> {
        let timeout = config.timeouts.http();
        let twine = TwineClient::new(&config.twine.base_url, timeout)?;
        let quilt = QuiltClient::new(&config.quilt.base_url, config.quilt.limit, timeout)?;
        let counter = EntityCounter::new(GraphLoader::new(timeout)?, config.type_set()?);
        Ok(Self {
            config,
            twine,
            quilt,
            counter,
        })
    }

    /// The configuration this harness was built from.
    #[must_use]
    pub fn config(&self) -> &AcceptanceConfig {
        &self.config
    }

    /// Runs one step.
    ///
    /// # Errors
    ///
    /// Any failure ends the step; see [`AcceptanceError::kind`] for how an
    /// environment problem is told apart from a failed assertion.
    pub fn execute(&self, step: &Step, ctx: &mut ScenarioContext) -> Result<StepOutcome> {
        match step {
            Step::ProbeService { host, port } => {
                let timeout = self.config.timeouts.probe();
                let addr = probe(host, *port, timeout).map_err(|err| {
                    AcceptanceError::assertion(
                        format!("{host}:{port} did not accept a connection"),
                        vec![err.to_string()],
                    )
                })?;
                Ok(StepOutcome::Passed(format!("{host}:{port} accepted a connection ({addr})")))
            }
            Step::IngestFile { path } => {
                let path = self.config.resolve_data_path(path);
                self.twine.ingest(&path)?;
                Ok(StepOutcome::Passed(format!("ingested {}", path.display())))
            }
            Step::CountEverything => {
                let uri = self.quilt.everything_uri()?;
                let n = self.counter.count(uri.as_str())?;
                ctx.entities = Some(n);
                info!(uri = %uri, count = n, "everything counted");
                Ok(StepOutcome::Passed(format!("{n} entities in {uri}")))
            }
            Step::ResolveCollection { uri } => {
                let location = self.quilt.resolve(uri)?;
                let message = format!("{uri} resolved to {location}");
                ctx.collection = Some(location);
                Ok(StepOutcome::Passed(message))
            }
            Step::AssertCountsEqual => self.assert_counts_equal(ctx),
            Step::AssertProxiesExist { count, class } => Ok(StepOutcome::Pending(format!(
                "checking for {count} proxies of {class} is not implemented"
            ))),
        }
    }

    fn assert_counts_equal(&self, ctx: &ScenarioContext) -> Result<StepOutcome> {
        let expected = ctx
            .entities
            .ok_or(AcceptanceError::MissingContext("entity count"))?;
        let location = ctx
            .collection
            .as_deref()
            .ok_or(AcceptanceError::MissingContext("collection location"))?;

        let collection_uri = self.quilt.collection_uri(location)?;
        let actual = self.counter.count(collection_uri.as_str())?;
        if actual == expected {
            return Ok(StepOutcome::Passed(format!(
                "collection holds the same {actual} entities"
            )));
        }

        // Both graphs are fetched again for the breakdown; a failure there
        // must not hide the mismatch itself.
        let mut details = vec![format!("collection graph: {collection_uri}")];
        match self.counter.tally(collection_uri.as_str()) {
            Ok(tally) => details.extend(tally.lines().into_iter().map(|l| format!("  {l}"))),
            Err(err) => details.push(format!("  breakdown unavailable: {err}")),
        }
        if let Ok(everything) = self.quilt.everything_uri() {
            details.push(format!("everything graph: {everything}"));
            match self.counter.tally(everything.as_str()) {
                Ok(tally) => details.extend(tally.lines().into_iter().map(|l| format!("  {l}"))),
                Err(err) => details.push(format!("  breakdown unavailable: {err}")),
            }
        }
        Err(AcceptanceError::assertion(
            format!("collection has {actual} persons and creative works, expected {expected}"),
            details,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_every_step() {
        let registry = StepRegistry::standard();
        assert_eq!(registry.len(), 6);

        assert_eq!(
            registry.parse(r#""twine" is listening on port 8000"#),
            Some(Step::ProbeService {
                host: "twine".into(),
                port: 8000
            })
        );
        assert_eq!(
            registry.parse(r#""data/a.nq" is ingested into Twine"#),
            Some(Step::IngestFile {
                path: PathBuf::from("data/a.nq")
            })
        );
        assert_eq!(
            registry.parse("I count the amount of persons and creative works that are ingested"),
            Some(Step::CountEverything)
        );
        assert_eq!(
            registry.parse(r#"A collection exists for "http://ex.org/c#id""#),
            Some(Step::ResolveCollection {
                uri: "http://ex.org/c#id".into()
            })
        );
        assert_eq!(
            registry.parse(
                "The number of persons and creative works in the collection should be the same"
            ),
            Some(Step::AssertCountsEqual)
        );
        assert_eq!(
            registry.parse(
                r#"3 proxies of type "http://xmlns.com/foaf/0.1/Person" should exist in the database"#
            ),
            Some(Step::AssertProxiesExist {
                count: 3,
                class: "http://xmlns.com/foaf/0.1/Person".into()
            })
        );
    }

    #[test]
    fn patterns_are_anchored() {
        let registry = StepRegistry::standard();
        assert_eq!(
            registry
                .parse("then I count the amount of persons and creative works that are ingested"),
            None
        );
        assert_eq!(registry.parse(r#""a.nq" is ingested into Twine twice"#), None);
    }

    #[test]
    fn out_of_range_port_does_not_match() {
        let registry = StepRegistry::standard();
        assert_eq!(registry.parse(r#""twine" is listening on port 99999"#), None);
    }

    #[test]
    fn invalid_pattern_is_skipped() {
        let mut registry = StepRegistry::empty();
        registry.define("(unclosed", |_| Some(Step::CountEverything));
        assert!(registry.is_empty());
    }

    fn offline_harness() -> Harness {
        let mut config = AcceptanceConfig::default();
        config.twine.base_url = "http://127.0.0.1:9".into();
        config.quilt.base_url = "http://127.0.0.1:9".into();
        config.timeouts.http_secs = 1;
        Harness::new(config).unwrap()
    }

    #[test]
    fn proxies_step_is_pending() {
        let outcome = offline_harness()
            .execute(
                &Step::AssertProxiesExist {
                    count: 1,
                    class: "http://ex.org/C".into(),
                },
                &mut ScenarioContext::default(),
            )
            .unwrap();
        assert!(matches!(outcome, StepOutcome::Pending(_)));
    }

    #[test]
    fn comparing_without_a_count_is_a_setup_error() {
        let err = offline_harness()
            .execute(&Step::AssertCountsEqual, &mut ScenarioContext::default())
            .unwrap_err();
        assert!(matches!(err, AcceptanceError::MissingContext("entity count")));
    }

    #[test]
    fn comparing_without_a_collection_is_a_setup_error() {
        let mut ctx = ScenarioContext {
            entities: Some(5),
            collection: None,
        };
        let err = offline_harness()
            .execute(&Step::AssertCountsEqual, &mut ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            AcceptanceError::MissingContext("collection location")
        ));
    }

    #[test]
    fn unreachable_quilt_is_not_a_zero_count() {
        let mut ctx = ScenarioContext::default();
        let err = offline_harness()
            .execute(&Step::CountEverything, &mut ctx)
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Transport);
        assert_eq!(ctx.entities, None);
    }
}
