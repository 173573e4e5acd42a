//! Core extraction pipeline for fixgen.
//!
//! Ties the leaf crates together: fetch the reference page, walk its
//! section hierarchy, extract and validate fixtures, bind versions to
//! engines, render, and write the artifact.

pub mod assembler;
pub mod extractor;
pub mod pipeline;

pub use assembler::{assemble_groups, write_artifact};
pub use extractor::{ExtractedSection, extract_section};
pub use pipeline::{GenerateResult, ProgressReporter, SilentProgress, generate};
