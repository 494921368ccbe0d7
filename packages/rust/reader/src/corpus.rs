//! Corpus enumeration.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use papertally_shared::{PaperTallyError, Result};

/// List the files directly inside `dir` whose name ends in `.{extension}`.
///
/// The match is case-sensitive and not recursive. Paths come back sorted so
/// repeated runs visit documents in the same order.
#[instrument(skip_all, fields(dir = %dir.display(), %extension))]
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));

    let entries = std::fs::read_dir(dir).map_err(|e| PaperTallyError::io(dir, e))?;
    let mut paths = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| PaperTallyError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&suffix));
        if matches {
            paths.push(path);
        }
    }

    paths.sort();
    debug!(count = paths.len(), "corpus enumerated");
    Ok(paths)
}
