//! End-to-end `generate` pipeline: fetch → parse → extract → assemble → write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};
use url::Url;

use fixgen_parser::ParseOptions;
use fixgen_shared::{AppConfig, FixgenError, Result};

use crate::assembler::{assemble_groups, write_artifact};
use crate::extractor::extract_section;

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the written artifact.
    pub output_path: PathBuf,
    /// SHA-256 of the fetched source document. Identical input hashes
    /// produce byte-identical artifacts.
    pub source_hash: String,
    /// Number of fixture groups rendered.
    pub versions: usize,
    /// Total registration statements (seen components across versions).
    pub registrations: usize,
    /// Total validated fixture declarations.
    pub fixtures: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full pipeline: one fetch, one linear extraction pass, one write.
///
/// Structural mismatches, unmapped versions, and transport failures abort
/// with an error; an invalid payload only costs its fixture.
#[instrument(skip_all, fields(url = %config.source.url))]
pub async fn generate(
    config: &AppConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();

    let url = Url::parse(&config.source.url)
        .map_err(|e| FixgenError::config(format!("invalid source URL '{}': {e}", config.source.url)))?;

    progress.phase("Fetching source document");
    let doc = fixgen_fetcher::fetch_document(&url).await?;

    progress.phase("Parsing section hierarchy");
    let opts = ParseOptions::from(&config.source);
    let sections = fixgen_parser::parse_document(&doc.body, &opts)?;

    progress.phase("Extracting fixtures");
    let extracted = sections
        .iter()
        .map(extract_section)
        .collect::<Result<Vec<_>>>()?;

    progress.phase("Assembling fixture groups");
    let groups = assemble_groups(extracted, config)?;
    let rendered = fixgen_codegen::render_artifact(&groups);

    progress.phase("Writing artifact");
    let output_path = PathBuf::from(&config.output.path);
    write_artifact(&output_path, &rendered)?;

    let result = GenerateResult {
        output_path,
        source_hash: doc.content_hash,
        versions: groups.len(),
        registrations: groups.iter().map(|g| g.seen.len()).sum(),
        fixtures: groups.iter().map(|g| g.fixtures.len()).sum(),
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        versions = result.versions,
        registrations = result.registrations,
        fixtures = result.fixtures,
        source_hash = %result.source_hash,
        elapsed_ms = result.elapsed.as_millis(),
        "generate pipeline complete"
    );

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
