//! Feature file parsing.
//!
//! Supports the Gherkin subset the suite is written in: one `Feature:` per
//! file, an optional `Background:`, any number of `Scenario:` blocks, step
//! lines introduced by `Given`/`When`/`Then`/`And`/`But`/`*`, `#` comments
//! and `@tag` lines. Free text under `Feature:` is treated as description.
//! Background steps are copied to the front of every scenario.

use std::path::{Path, PathBuf};

use crate::error::{AcceptanceError, Result};

const STEP_KEYWORDS: [&str; 6] = ["Given", "When", "Then", "And", "But", "*"];

/// One step line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLine {
    /// Keyword the line starts with.
    pub keyword: String,
    /// Text after the keyword; what step patterns match against.
    pub text: String,
    /// 1-based line number in the feature file.
    pub line: usize,
}

impl StepLine {
    /// The step as written, keyword included.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.keyword, self.text)
    }
}

/// A scenario with its background steps already prepended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario title.
    pub name: String,
    /// Steps in execution order.
    pub steps: Vec<StepLine>,
}

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Feature title.
    pub name: String,
    /// Where the feature was read from.
    pub path: PathBuf,
    /// Scenarios in file order.
    pub scenarios: Vec<Scenario>,
}

enum Block {
    Description,
    Background,
    Scenario,
}

impl Feature {
    /// Reads and parses a feature file.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::Read`] if the file cannot be read and
    /// [`AcceptanceError::Feature`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| AcceptanceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, path)
    }

    /// Parses feature source text; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::Feature`] for a missing `Feature:` line,
    /// a second `Feature:`, a step outside a scenario or background, or
    /// stray text inside a scenario.
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        let error = |line: usize, message: &str| AcceptanceError::Feature {
            path: path.to_path_buf(),
            line,
            message: message.to_string(),
        };

        let mut name: Option<String> = None;
        let mut background: Vec<StepLine> = Vec::new();
        let mut scenarios: Vec<Scenario> = Vec::new();
        let mut block = Block::Description;

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('@') {
                continue;
            }

            if let Some(title) = trimmed.strip_prefix("Feature:") {
                if name.is_some() {
                    return Err(error(line, "only one Feature per file"));
                }
                name = Some(title.trim().to_string());
                continue;
            }
            if name.is_none() {
                return Err(error(line, "expected a Feature: line first"));
            }

            if trimmed.starts_with("Background:") {
                if !scenarios.is_empty() {
                    return Err(error(line, "Background must come before any Scenario"));
                }
                block = Block::Background;
                continue;
            }
            if let Some(title) = trimmed.strip_prefix("Scenario:") {
                scenarios.push(Scenario {
                    name: title.trim().to_string(),
                    steps: background.clone(),
                });
                block = Block::Scenario;
                continue;
            }

            match (parse_step(trimmed, line), &block) {
                (Some(step), Block::Background) => background.push(step),
                (Some(step), Block::Scenario) => {
                    if let Some(scenario) = scenarios.last_mut() {
                        scenario.steps.push(step);
                    }
                }
                (Some(_), Block::Description) => {
                    return Err(error(line, "step outside of a Scenario or Background"));
                }
                (None, Block::Description) => {}
                (None, _) => return Err(error(line, "expected a step keyword")),
            }
        }

        let name = name.ok_or_else(|| error(1, "no Feature: line found"))?;
        Ok(Self {
            name,
            path: path.to_path_buf(),
            scenarios,
        })
    }
}

fn parse_step(trimmed: &str, line: usize) -> Option<StepLine> {
    STEP_KEYWORDS.iter().find_map(|keyword| {
        let rest = trimmed.strip_prefix(keyword)?;
        if *keyword != "*" && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(StepLine {
            keyword: (*keyword).to_string(),
            text: rest.trim().to_string(),
            line,
        })
    })
}
