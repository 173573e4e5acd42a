//! Fixture extraction: repair, validate, and deduplicate component payloads.

use tracing::{debug, instrument};

use fixgen_parser::VersionSection;
use fixgen_shared::{ExpectedValue, Fixture, FixgenError, Result, static_ident};

/// Extraction output for one version: the ordered seen-list and the
/// validated fixtures. Engine resolution happens later, in the assembler.
#[derive(Debug, Clone)]
pub struct ExtractedSection {
    pub identifier: String,
    /// Every component name, once, in first-seen order — recorded before
    /// validation so registration output never depends on parse success.
    pub seen: Vec<String>,
    /// Validated fixtures in extraction order.
    pub fixtures: Vec<Fixture>,
}

/// Extract fixtures from one version section, in document order.
///
/// Duplicate names within the version are dropped silently (first
/// occurrence wins). A component without a JSON code block is a structural
/// error that fails the run: the document's shape is assumed stable, and
/// degrading quietly there would hide a page-format change. A payload that
/// fails to parse even after repair only loses its fixture; its name stays
/// on the seen-list.
#[instrument(skip_all, fields(version = %section.identifier))]
pub fn extract_section(section: &VersionSection) -> Result<ExtractedSection> {
    let mut seen: Vec<String> = Vec::new();
    let mut fixtures: Vec<Fixture> = Vec::new();

    for component in &section.components {
        if component.name.is_empty() || seen.contains(&component.name) {
            debug!(component = %component.name, "skipping duplicate component");
            continue;
        }
        seen.push(component.name.clone());

        let payload = component.payload.as_deref().ok_or_else(|| {
            FixgenError::parse(format!(
                "component '{}' in version '{}' has no JSON code block",
                component.name, section.identifier
            ))
        })?;

        let repaired = fixgen_repair::repair(payload);
        match serde_json::from_str::<serde_json::Value>(&repaired) {
            Ok(serial) => fixtures.push(Fixture {
                identifier: static_ident(&component.name),
                serial,
                expected: ExpectedValue::Unspecified,
            }),
            Err(e) => {
                debug!(
                    component = %component.name,
                    error = %e,
                    "payload invalid after repair, dropping fixture"
                );
            }
        }
    }

    debug!(
        seen = seen.len(),
        fixtures = fixtures.len(),
        "extracted version section"
    );

    Ok(ExtractedSection {
        identifier: section.identifier.clone(),
        seen,
        fixtures,
    })
}
