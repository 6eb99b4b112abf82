//! Fixture sources and JSON parsing.

use std::borrow::Cow;

use serde_json::Value;
use thiserror::Error;

use crate::{BlockQuestion, Fixture};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while reading a fixture document.
pub enum FixtureError {
    /// The document is not valid JSON.
    #[error("fixture is not valid JSON: {0}")]
    Malformed(String),
    /// The document parsed, but its root is not an array of records.
    #[error("fixture root must be a JSON array, found {found}")]
    NotAnArray {
        /// JSON kind found at the root.
        found: &'static str,
    },
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses a fixture document whose root is a JSON array of records.
///
/// # Errors
///
/// Returns [`FixtureError::Malformed`] for invalid JSON and [`FixtureError::NotAnArray`] when
/// the root is any other JSON kind.
pub fn parse_fixture(raw: &str) -> Result<Fixture, FixtureError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| FixtureError::Malformed(err.to_string()))?;
    match value {
        Value::Array(records) => Ok(records.into_iter().map(BlockQuestion::new).collect()),
        other => Err(FixtureError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Source of the fixture read once by the bootstrap.
///
/// Every call must yield a deep-equal sequence.
pub trait FixtureSource {
    /// Reads the fixture.
    fn load(&self) -> Result<Fixture, FixtureError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Fixture held in memory.
pub struct StaticFixture(pub Fixture);

impl FixtureSource for StaticFixture {
    fn load(&self) -> Result<Fixture, FixtureError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixture parsed from a JSON document on every load.
pub struct JsonFixture {
    raw: Cow<'static, str>,
}

impl JsonFixture {
    /// Wraps a JSON document. Parsing is deferred to [`FixtureSource::load`].
    pub fn new(raw: impl Into<Cow<'static, str>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw document.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FixtureSource for JsonFixture {
    fn load(&self) -> Result<Fixture, FixtureError> {
        parse_fixture(&self.raw)
    }
}
