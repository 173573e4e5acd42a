//! Core domain types for the extraction pipeline.

// ---------------------------------------------------------------------------
// DocumentVersion
// ---------------------------------------------------------------------------

/// One format version found in the source document, paired with the engine
/// implementation its fixtures must be exercised against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVersion {
    /// Normalized version identifier (e.g., `2d0`), prefix already stripped.
    pub identifier: String,
    /// Engine type name in the downstream harness prelude (e.g., `V2`).
    pub engine: String,
}

// ---------------------------------------------------------------------------
// ExpectedValue
// ---------------------------------------------------------------------------

/// Expected decoded value for a fixture.
///
/// The generator never infers native values; every fixture it emits carries
/// `Unspecified`, and humans replace it in the generated file. An explicit
/// sentinel keeps "not yet filled in" distinguishable from a deliberate null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpectedValue {
    /// Not yet filled in by hand.
    #[default]
    Unspecified,
}

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

/// One extracted, validated example payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Static identifier derived from the component name (`Foo Bar` → `FOO_BAR`).
    pub identifier: String,
    /// The payload, parsed as JSON after repair.
    pub serial: serde_json::Value,
    /// Placeholder expected value.
    pub expected: ExpectedValue,
}

// ---------------------------------------------------------------------------
// FixtureGroup
// ---------------------------------------------------------------------------

/// All fixtures and registrations belonging to one document version.
///
/// `seen` records every component name once, in first-seen order, whether or
/// not its payload later validated; `fixtures` is the validated subset in
/// extraction order. A seen name without a matching fixture is an accepted
/// outcome, so registrations may reference identifiers with no declaration.
#[derive(Debug, Clone)]
pub struct FixtureGroup {
    pub version: DocumentVersion,
    pub seen: Vec<String>,
    pub fixtures: Vec<Fixture>,
}

// ---------------------------------------------------------------------------
// Identifier derivation
// ---------------------------------------------------------------------------

/// Derive the static fixture identifier from a component name.
pub fn static_ident(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// Derive the test function name from a component name.
pub fn test_fn_ident(name: &str) -> String {
    static_ident(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_ident_uppercases_and_underscores() {
        assert_eq!(static_ident("Foo Bar"), "FOO_BAR");
        assert_eq!(static_ident("Class"), "CLASS");
        assert_eq!(static_ident("Vertex Property"), "VERTEX_PROPERTY");
    }

    #[test]
    fn test_fn_ident_lowercases() {
        assert_eq!(test_fn_ident("Foo Bar"), "foo_bar");
        assert_eq!(test_fn_ident("BulkSet"), "bulkset");
    }

    #[test]
    fn expected_value_defaults_to_unspecified() {
        assert_eq!(ExpectedValue::default(), ExpectedValue::Unspecified);
    }
}
