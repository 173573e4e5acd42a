//! Section-hierarchy parser for the serialization reference page.
//!
//! The page is rendered with nested structural containers: `div.sect1` per
//! format version, `div.sect2` per type category, `div.sect3` per component,
//! each component carrying at most one `code[data-lang="json"]` example.
//! The document's shape is assumed stable; when it doesn't match, we fail
//! with a structural error instead of guessing.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use fixgen_shared::{FixgenError, Result, SourceConfig};

// ---------------------------------------------------------------------------
// Parser output
// ---------------------------------------------------------------------------

/// One surviving top-level section, tagged with its normalized version
/// identifier. Purely structural; not retained past extraction.
#[derive(Debug, Clone)]
pub struct VersionSection {
    /// Version identifier with the configured prefix stripped (e.g., `2d0`).
    pub identifier: String,
    /// Components in document order.
    pub components: Vec<RawComponent>,
}

/// One leaf component: a heading name and the example payload under it.
#[derive(Debug, Clone)]
pub struct RawComponent {
    /// Heading text of the component, trimmed.
    pub name: String,
    /// Text of the component's JSON code block, when one exists.
    pub payload: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse options
// ---------------------------------------------------------------------------

/// Structural knobs for the section walk.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Prefix stripped from each top-level section's id attribute.
    pub version_id_prefix: String,
    /// Version identifiers dropped entirely.
    pub excluded_versions: Vec<String>,
    /// Trailing top-level sections dropped unconditionally — a positional
    /// rule tied to the pinned document revision, kept visible as config.
    pub drop_trailing_sections: usize,
}

impl From<&SourceConfig> for ParseOptions {
    fn from(source: &SourceConfig) -> Self {
        Self {
            version_id_prefix: source.version_id_prefix.clone(),
            excluded_versions: source.excluded_versions.clone(),
            drop_trailing_sections: source.drop_trailing_sections,
        }
    }
}

// ---------------------------------------------------------------------------
// Document walk
// ---------------------------------------------------------------------------

/// Parse the raw page markup into version-tagged section subtrees.
///
/// Top-level sections are taken in document order with the trailing
/// `drop_trailing_sections` removed, then filtered against
/// `excluded_versions`. A top-level section whose heading has no id
/// attribute is a fatal structural error.
#[instrument(skip_all, fields(html_len = html.len()))]
pub fn parse_document(html: &str, opts: &ParseOptions) -> Result<Vec<VersionSection>> {
    let doc = Html::parse_document(html);

    let sect1_sel = Selector::parse("div.sect1").unwrap();
    let sect2_sel = Selector::parse("div.sect2").unwrap();
    let sect3_sel = Selector::parse("div.sect3").unwrap();

    let sections: Vec<ElementRef> = doc.select(&sect1_sel).collect();
    let keep = sections.len().saturating_sub(opts.drop_trailing_sections);

    let mut versions = Vec::new();

    for section in &sections[..keep] {
        let identifier = version_identifier(section, &opts.version_id_prefix)?;

        if opts.excluded_versions.contains(&identifier) {
            debug!(%identifier, "skipping excluded version");
            continue;
        }

        let mut components = Vec::new();
        for sub in section.select(&sect2_sel) {
            for leaf in sub.select(&sect3_sel) {
                if let Some(component) = parse_component(&leaf) {
                    components.push(component);
                }
            }
        }

        debug!(
            %identifier,
            components = components.len(),
            "parsed version section"
        );

        versions.push(VersionSection {
            identifier,
            components,
        });
    }

    Ok(versions)
}

/// Read the version identifier from a top-level section's first child
/// element and strip the configured prefix.
fn version_identifier(section: &ElementRef, prefix: &str) -> Result<String> {
    let heading = first_child_element(section).ok_or_else(|| {
        FixgenError::parse("top-level section has no element children")
    })?;

    let id = heading.value().attr("id").ok_or_else(|| {
        FixgenError::parse(format!(
            "top-level section heading <{}> has no id attribute",
            heading.value().name()
        ))
    })?;

    Ok(id.strip_prefix(prefix).unwrap_or(id).to_string())
}

/// Extract a component's name and payload. Components with no qualifying
/// name are skipped without error.
fn parse_component(leaf: &ElementRef) -> Option<RawComponent> {
    let json_code_sel = Selector::parse(r#"code[data-lang="json"]"#).unwrap();

    let heading = first_child_element(leaf)?;
    let name = heading.text().collect::<String>().trim().to_string();
    if name.is_empty() {
        debug!("skipping component with empty heading");
        return None;
    }

    let payload = leaf
        .select(&json_code_sel)
        .next()
        .map(|code| code.text().collect::<String>());

    Some(RawComponent { name, payload })
}

/// First child of an element that is itself an element, skipping the
/// whitespace text nodes the renderer puts between tags.
fn first_child_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.children().find_map(ElementRef::wrap)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
