//! Source file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

const JAVA_EXTENSION: &str = "java";

/// Every regular `.java` file under `root`, recursively.
///
/// Entries are sorted by file name within each directory so the order, and
/// with it the first reported violation, is stable between runs. Symlinked
/// directories are followed. Only a failure to read `root` itself is an
/// error; entries below it that cannot be read (or that close a symlink
/// loop) are logged and skipped.
pub(crate) fn java_files(root: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = vec![];
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_java_source(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_java_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == JAVA_EXTENSION)
}
