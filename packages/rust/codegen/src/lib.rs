//! Text templating for the generated fixture artifact.
//!
//! Everything here is substitution into fixed templates; no computation
//! beyond identifier derivation happens at render time. The artifact is one
//! Rust source file: a fixed prologue (fixture record, `Expected` sentinel,
//! round-trip runner, registration macro) followed by one `mod v_<id>` block
//! per document version.

use fixgen_shared::{Fixture, FixtureGroup, static_ident, test_fn_ident};

/// Fixed harness scaffolding emitted once at the top of the artifact.
///
/// The runner asserts every payload deserializes; the equality comparisons
/// (both directions) only engage once a fixture's `Expected::Unspecified`
/// has been replaced with a concrete value by hand.
const PROLOGUE: &str = r#"//! Round-trip fixtures generated from the GraphSON reference page.
//!
//! Generated by fixgen — do not edit the structure by hand. Each fixture
//! starts out with `Expected::Unspecified`; replace it with a concrete
//! value to enable the equality assertions in both directions.

use serde_json::Value;

use gremlin_client::prelude::*;

/// One example payload and the native value it should decode to.
pub struct TestCase {
    pub serial: Value,
    pub object: Expected,
}

/// Expected decoded value for a fixture.
///
/// `Unspecified` marks fixtures whose native value has not been filled in
/// yet, as opposed to a value that is deliberately empty. The runner still
/// asserts the payload deserializes, but skips both comparisons until a
/// value is provided.
pub enum Expected {
    /// Not yet filled in by hand.
    Unspecified,
    /// The concrete value the payload must round-trip through.
    Value(GValue),
}

impl TestCase {
    pub fn test<E: GraphSON>(&self) {
        self.deserialize::<E>();
        self.serialize::<E>();
    }

    pub fn deserialize<E: GraphSON>(&self) {
        let result = E::deserialize(&self.serial);
        assert!(result.is_ok(), "deserialization failed");
        if let Expected::Value(expected) = &self.object {
            assert_eq!(
                expected,
                &result.unwrap(),
                "deserialized value does not match expectation"
            );
        }
    }

    pub fn serialize<E: GraphSON>(&self) {
        if let Expected::Value(expected) = &self.object {
            let result = E::serialize(expected);
            assert!(result.is_ok(), "serialization failed");
            assert_eq!(
                self.serial,
                result.unwrap(),
                "serialized value does not match expectation"
            );
        }
    }
}

macro_rules! test {
    ($fun:ident, $engine:ident, $case:ident) => {
        #[test]
        fn $fun() {
            $case.test::<gremlin_client::prelude::$engine>();
        }
    };
}

pub(self) use test;
"#;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Module name for a version identifier (`2d0` → `v_2d0`).
pub fn module_name(identifier: &str) -> String {
    format!("v_{identifier}")
}

/// Render the complete artifact: prologue plus one module per group, in the
/// order the versions appeared in the document.
pub fn render_artifact(groups: &[FixtureGroup]) -> String {
    tracing::debug!(groups = groups.len(), "rendering artifact");

    let mut out = String::from(PROLOGUE);
    for group in groups {
        out.push('\n');
        out.push_str(&render_module(group));
    }
    out
}

/// Render one version-scoped module block.
///
/// Registration statements come first, one per seen component name in
/// first-seen order; static fixture declarations follow in extraction
/// order. A seen name with no surviving fixture still gets its
/// registration — that asymmetry is part of the design.
pub fn render_module(group: &FixtureGroup) -> String {
    let mut out = String::new();

    out.push_str(&format!("mod {} {{\n", module_name(&group.version.identifier)));
    out.push_str("    use std::sync::LazyLock;\n\n");
    out.push_str("    use serde_json::json;\n\n");
    out.push_str("    use super::{Expected, TestCase};\n\n");

    for name in &group.seen {
        out.push_str(&render_registration(name, &group.version.engine));
        out.push('\n');
    }

    for fixture in &group.fixtures {
        out.push('\n');
        out.push_str(&render_fixture(fixture));
    }

    out.push_str("}\n");
    out
}

/// Render one registration statement binding a test function to an engine
/// and a fixture identifier.
fn render_registration(name: &str, engine: &str) -> String {
    format!(
        "    super::test!({fun}, {engine}, {case});",
        fun = test_fn_ident(name),
        case = static_ident(name),
    )
}

/// Render one static fixture declaration.
fn render_fixture(fixture: &Fixture) -> String {
    format!(
        "    pub static {ident}: LazyLock<TestCase> = LazyLock::new(|| TestCase {{\n\
         \x20       serial: json!({json}),\n\
         \x20       object: Expected::Unspecified,\n\
         \x20   }});\n",
        ident = fixture.identifier,
        json = fixture.serial,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fixgen_shared::{DocumentVersion, ExpectedValue};

    fn fixture(identifier: &str, json: serde_json::Value) -> Fixture {
        Fixture {
            identifier: identifier.into(),
            serial: json,
            expected: ExpectedValue::Unspecified,
        }
    }

    fn group(identifier: &str, engine: &str, seen: &[&str], fixtures: Vec<Fixture>) -> FixtureGroup {
        FixtureGroup {
            version: DocumentVersion {
                identifier: identifier.into(),
                engine: engine.into(),
            },
            seen: seen.iter().map(|s| s.to_string()).collect(),
            fixtures,
        }
    }

    #[test]
    fn module_name_prefixes_version() {
        assert_eq!(module_name("2d0"), "v_2d0");
    }

    #[test]
    fn renders_registration_and_declaration() {
        let g = group(
            "Xd0",
            "E",
            &["Foo Bar"],
            vec![fixture("FOO_BAR", serde_json::json!({"a": 1}))],
        );

        let out = render_module(&g);
        assert!(out.contains("mod v_Xd0 {"));
        assert!(out.contains("super::test!(foo_bar, E, FOO_BAR);"));
        assert!(out.contains("pub static FOO_BAR: LazyLock<TestCase>"));
        assert!(out.contains(r#"serial: json!({"a":1})"#));
        assert!(out.contains("object: Expected::Unspecified"));
    }

    #[test]
    fn seen_without_fixture_still_registers() {
        // The payload failed validation, so no declaration exists — the
        // registration is rendered anyway.
        let g = group("Xd0", "E", &["Foo Bar"], vec![]);

        let out = render_module(&g);
        assert!(out.contains("super::test!(foo_bar, E, FOO_BAR);"));
        assert!(!out.contains("pub static FOO_BAR"));
    }

    #[test]
    fn registrations_keep_first_seen_order() {
        let g = group(
            "2d0",
            "V2",
            &["Date", "Class", "Vertex Property"],
            vec![],
        );

        let out = render_module(&g);
        let date = out.find("test!(date,").unwrap();
        let class = out.find("test!(class,").unwrap();
        let vp = out.find("test!(vertex_property,").unwrap();
        assert!(date < class && class < vp);
    }

    #[test]
    fn artifact_starts_with_prologue_and_orders_modules() {
        let groups = vec![
            group("2d0", "V2", &["Class"], vec![fixture("CLASS", serde_json::json!({}))]),
            group("3d0", "V3", &["Class"], vec![fixture("CLASS", serde_json::json!({}))]),
        ];

        let out = render_artifact(&groups);
        assert!(out.starts_with("//! Round-trip fixtures"));
        assert!(out.contains("pub struct TestCase"));
        assert!(out.contains("macro_rules! test"));

        let v2 = out.find("mod v_2d0 {").unwrap();
        let v3 = out.find("mod v_3d0 {").unwrap();
        assert!(v2 < v3);
    }

    #[test]
    fn rendering_is_deterministic() {
        let groups = vec![group(
            "2d0",
            "V2",
            &["Class", "Date"],
            vec![
                fixture("CLASS", serde_json::json!({"@type": "g:Class"})),
                fixture("DATE", serde_json::json!({"@type": "g:Date", "@value": 1})),
            ],
        )];

        assert_eq!(render_artifact(&groups), render_artifact(&groups));
    }
}
