// End-to-end run used by the CLI: scan the package directory, then
// read → mutate → write each JSON file in turn. The first failing file aborts
// the run; files rewritten before it stay rewritten.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::batch::{Operation, SEPARATOR};
use crate::document::{read_document, write_document};
use crate::error::Result;
use crate::scan::find_json_files;

/// Directory scanned when `--package` is not given, relative to the service root.
pub const DEFAULT_PACKAGE_DIR: &str = ".serverless";

/// `<service_path>/.serverless`, the package directory used when none is given.
pub fn default_package_dir(service_path: &Path) -> PathBuf {
    service_path.join(DEFAULT_PACKAGE_DIR)
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub package_dir: PathBuf,
    pub operation: Operation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files rewritten, in processing order.
    pub files: Vec<PathBuf>,
}

/// Run `config.operation` over every JSON file of `config.package_dir`.
pub fn execute(config: &RunConfig, mut notify: impl FnMut(&str)) -> Result<RunSummary> {
    let command = config.operation.command_name();
    notify(&format!("Running {command}"));
    if let Operation::Replace(_) = config.operation {
        notify(&format!("headers : {}", config.operation));
    }

    let files = find_json_files(&config.package_dir)?;
    debug!(dir = %config.package_dir.display(), count = files.len(), "scanned package");

    let mut summary = RunSummary::default();
    for path in files {
        let mut doc = read_document(&path)?;
        config.operation.apply(&path, &mut doc, &mut notify);
        write_document(&path, &doc)?;
        summary.files.push(path);
    }

    notify(SEPARATOR);
    notify(&format!("Completed {command}"));
    Ok(summary)
}
