use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::bump::{BumpMode, LineChange, VersionBumper};

pub mod appx_manifest;
pub mod assembly_info;
pub mod nuspec;

pub use appx_manifest::AppxManifestBumper;
pub use assembly_info::AssemblyInfoBumper;
pub use nuspec::NuspecBumper;

/// One entry of the basename -> handler table. The table is built once by
/// [`rules`] and handed to the walk; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy)]
pub struct FileRule {
    pub basename: &'static str,
    pub bump: fn(&Path, BumpMode) -> Result<Vec<LineChange>>,
}

/// The complete set of recognized version files.
pub fn rules() -> [FileRule; 3] {
    [
        FileRule {
            basename: AssemblyInfoBumper::basename(),
            bump: AssemblyInfoBumper::bump_file,
        },
        FileRule {
            basename: AppxManifestBumper::basename(),
            bump: AppxManifestBumper::bump_file,
        },
        FileRule {
            basename: NuspecBumper::basename(),
            bump: NuspecBumper::bump_file,
        },
    ]
}

pub trait Bumper {
    /// Exact filename this rule applies to.
    fn basename() -> &'static str;

    /// Literal substrings that mark a line as carrying a version. Markers
    /// are checked in sequence against the possibly-already-bumped line, so
    /// a line containing more than one marker is bumped once per marker.
    fn markers() -> &'static [&'static str];

    /// Bumps every marker-bearing line of `path` and rewrites the file in
    /// place. The whole file is written back even when nothing matched.
    fn bump_file(path: &Path, mode: BumpMode) -> Result<Vec<LineChange>> {
        println!("{}", path.display());
        debug!("Processing '{}'", path.display());

        let bumper = VersionBumper::new(mode)?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut changes = Vec::new();
        let mut output = String::with_capacity(contents.len());
        for raw in contents.split_inclusive('\n') {
            let mut line = raw.to_string();
            for marker in Self::markers() {
                if line.contains(marker) {
                    let bumped = bumper.bump_line(&line)?;
                    line = bumped.line;
                    if let Some(change) = bumped.change {
                        changes.push(change);
                    }
                }
            }
            output.push_str(&line);
        }

        fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(changes)
    }
}
