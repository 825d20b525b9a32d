use anyhow::Result;
use log::debug;
use regex::Regex;
use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Version component '{0}' is too large to parse")]
    ComponentOutOfRange(String),
}

/// Which component of the version triplet gets incremented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BumpMode {
    #[default]
    Patch,
    Minor,
}

impl BumpMode {
    pub fn apply(self, version: &Version) -> Version {
        match self {
            BumpMode::Minor => Version::new(version.major, version.minor + 1, 0),
            BumpMode::Patch => Version::new(version.major, version.minor, version.patch + 1),
        }
    }
}

/// A single version substitution made on one line. `old` keeps the raw
/// matched text, so leading zeros show up in the report as they appeared
/// in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    pub old: String,
    pub new: Version,
}

/// Result of running a line through [`VersionBumper::bump_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpedLine {
    pub line: String,
    pub change: Option<LineChange>,
}

/// Rewrites the first dotted-triplet version found on a line.
pub struct VersionBumper {
    regex: Regex,
    mode: BumpMode,
}

impl VersionBumper {
    pub fn new(mode: BumpMode) -> Result<Self> {
        Ok(VersionBumper {
            regex: Regex::new(r"(\d+)\.(\d+)\.(\d+)")?,
            mode,
        })
    }

    /// Bumps the first `major.minor.patch` substring of `line`. Lines with
    /// no triplet come back unchanged. Integer parsing strips any leading
    /// zeros from the rewritten components.
    pub fn bump_line(&self, line: &str) -> Result<BumpedLine> {
        let caps = match self.regex.captures(line) {
            Some(caps) => caps,
            None => {
                return Ok(BumpedLine {
                    line: line.to_string(),
                    change: None,
                });
            }
        };
        let (Some(span), Some(major), Some(minor), Some(patch)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            return Ok(BumpedLine {
                line: line.to_string(),
                change: None,
            });
        };

        let current = Version::new(
            parse_component(major.as_str())?,
            parse_component(minor.as_str())?,
            parse_component(patch.as_str())?,
        );
        let next = self.mode.apply(&current);

        println!("  {} -> {}", span.as_str(), next);
        debug!("Bumped version {} -> {}", span.as_str(), next);

        Ok(BumpedLine {
            line: format!("{}{}{}", &line[..span.start()], next, &line[span.end()..]),
            change: Some(LineChange {
                old: span.as_str().to_string(),
                new: next,
            }),
        })
    }
}

fn parse_component(digits: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| BumpError::ComponentOutOfRange(digits.to_string()).into())
}
