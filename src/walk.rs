use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::bumpers::FileRule;

/// A version file found during the walk, paired with the rule that owns
/// its basename. Tasks are consumed once, after the walk completes.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub path: PathBuf,
    pub rule: FileRule,
}

/// Recursively collects every file under `root` whose basename matches one
/// of `rules`, in discovery order. Collection is separate from processing:
/// the caller runs the bump functions only after the full walk finishes.
pub fn collect_tasks(root: impl AsRef<Path>, rules: &[FileRule]) -> Result<Vec<FileTask>> {
    let root = root.as_ref();
    debug!("Walking '{}' for version files", root.display());

    let mut tasks = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(rule) = rules.iter().find(|rule| rule.basename == name) {
            tasks.push(FileTask {
                path: entry.into_path(),
                rule: *rule,
            });
        }
    }

    debug!("Found {} version files: {:?}", tasks.len(), tasks);
    Ok(tasks)
}
