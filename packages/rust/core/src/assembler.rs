//! Group assembly and artifact writing.
//!
//! The assembler binds each extracted section to its engine via the
//! configured version→engine table and hands the groups to the codegen
//! renderer; the writer puts the rendered artifact on disk atomically.

use std::path::Path;

use tracing::{debug, info, instrument};

use fixgen_shared::{AppConfig, DocumentVersion, FixgenError, FixtureGroup, Result};

use crate::extractor::ExtractedSection;

/// Resolve engines and build one [`FixtureGroup`] per extracted section,
/// preserving document order.
///
/// A version identifier with no entry in the engine table aborts the run;
/// registering fixtures against a guessed engine would be worse than
/// failing.
#[instrument(skip_all, fields(sections = sections.len()))]
pub fn assemble_groups(
    sections: Vec<ExtractedSection>,
    config: &AppConfig,
) -> Result<Vec<FixtureGroup>> {
    sections
        .into_iter()
        .map(|section| {
            let engine = config.engine_for(&section.identifier)?.to_string();
            debug!(version = %section.identifier, %engine, "assembled fixture group");
            Ok(FixtureGroup {
                version: DocumentVersion {
                    identifier: section.identifier,
                    engine,
                },
                seen: section.seen,
                fixtures: section.fixtures,
            })
        })
        .collect()
}

/// Write the rendered artifact to `path` (write to temp, then rename).
///
/// Truncates/creates exactly one output file; there is no append mode.
#[instrument(skip_all, fields(path = %path.display(), bytes = content.len()))]
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            FixgenError::validation(format!("output path has no file name: {}", path.display()))
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FixgenError::io(parent, e))?;
    }

    let temp = path.with_file_name(format!(".{file_name}.tmp"));
    std::fs::write(&temp, content).map_err(|e| FixgenError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| FixgenError::io(path, e))?;

    info!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}
