//! headerpatch-core: bulk key replace/delete over JSON documents
//!
//! This crate focuses on a small, well-factored surface:
//! - Tree mutation (`replace_key`, `delete_key`) over any `serde_json::Value`
//! - Batch runner applying one operation across many parsed documents
//! - Package directory scan, document read/write, and the end-to-end pipeline
//!   used by the CLI
//!
pub mod batch;
pub mod document;
pub mod error;
pub mod mutate;
pub mod pipeline;
pub mod scan;

pub use batch::{Operation, run_delete, run_replace, split_keys};
pub use document::{read_document, write_document};
pub use error::{Error, Result};
pub use mutate::{delete_key, replace_key};
pub use pipeline::{RunConfig, RunSummary, default_package_dir, execute};
pub use scan::find_json_files;
