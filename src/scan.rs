//! Reverse pipeline: sweep a file tree for generated state tables and
//! drop one Mermaid document pair per table into a `docs/` directory.
//!
//! Traversal goes through `ignore::WalkBuilder`, so `.gitignore` rules
//! apply and build trees stay out of the sweep. The walk is sequential:
//! a run is one bounded batch over the tree, and tables are rendered
//! independently as they are found.

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info};

use crate::error::{FsmError, Result};
use crate::extract;
use crate::fsio;
use crate::render::diagram;
use crate::render::template::TEMPLATE_SUFFIXES;

/// Source extensions considered by the sweep.
const SOURCE_EXTENSIONS: [&str; 2] = ["c", "h"];

/// True for files the extractor should look at: C sources that are not
/// themselves members of the template set.
fn is_candidate(path: &Path) -> bool {
    let by_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
    let is_template = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| TEMPLATE_SUFFIXES.contains(&name));
    by_ext && !is_template
}

/// Sweep the tree under `root`, writing `<docs_dir>/<tableName>.txt` and
/// `<docs_dir>/<tableName>.html` per discovered table. Returns the number
/// of tables found. `docs_dir` is only created once the first table shows
/// up.
pub fn scan_tree(root: &Path, docs_dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in WalkBuilder::new(root).build() {
        let entry = entry.map_err(|e| FsmError::Io(std::io::Error::other(e)))?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) || !is_candidate(path) {
            continue;
        }

        debug!(file = %path.display(), "scanning");
        let contents = fsio::read_to_string(path)?;
        for table in extract::extract_tables(&contents)? {
            info!(table = %table.name, file = %path.display(), "generating diagram");
            count += 1;

            fsio::create_dir_all(docs_dir)?;
            let graph = diagram::to_mermaid(&table);
            fsio::write_atomic(
                &docs_dir.join(format!("{}.html", table.name)),
                diagram::to_viewer_html(&graph).as_bytes(),
            )?;
            fsio::write_atomic(
                &docs_dir.join(format!("{}.txt", table.name)),
                graph.as_bytes(),
            )?;
        }
    }

    Ok(count)
}
