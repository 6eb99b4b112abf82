//! Fixture bundled into the binary at build time.

use quiz_app_contract::{parse_fixture, Fixture, FixtureError, FixtureSource};

include!(concat!(env!("OUT_DIR"), "/fixture_generated.rs"));

#[derive(Debug, Clone, Copy, Default)]
/// Block question fixture from `static/block_questions.json`, validated by `build.rs`.
pub struct BundledFixture;

impl BundledFixture {
    /// Returns the embedded JSON document.
    pub const fn raw(self) -> &'static str {
        BLOCK_QUESTIONS_JSON
    }

    /// Number of bundled records.
    pub const fn len(self) -> usize {
        BLOCK_QUESTION_COUNT
    }

    /// Whether the bundle has no records.
    pub const fn is_empty(self) -> bool {
        BLOCK_QUESTION_COUNT == 0
    }
}

impl FixtureSource for BundledFixture {
    fn load(&self) -> Result<Fixture, FixtureError> {
        parse_fixture(BLOCK_QUESTIONS_JSON)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_fixture_parses_to_the_counted_records() {
        let fixture = BundledFixture.load().expect("bundled fixture");
        assert_eq!(fixture.len(), BundledFixture.len());
        assert!(!BundledFixture.is_empty());
        assert_eq!(
            fixture.as_slice()[0].as_value().get("id"),
            Some(&serde_json::json!(1))
        );
    }

    #[test]
    fn bundled_fixture_reads_are_deep_equal() {
        assert_eq!(
            BundledFixture.load().expect("first"),
            BundledFixture.load().expect("second")
        );
    }
}
