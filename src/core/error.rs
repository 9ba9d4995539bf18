use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole analysis run.
///
/// Per-file problems (unreadable or syntactically invalid sources) are not
/// represented here; they are logged and the file is skipped.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("cannot traverse root directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
