use clap::Parser;

use crate::bump::BumpMode;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bumpver")]
pub struct Arguments {
    /// Version component to bump. The literal value "minor" bumps the minor
    /// component and resets patch to zero; anything else (or nothing) bumps
    /// the patch component.
    pub component: Option<String>,
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}

impl Arguments {
    /// Only an exact "minor" selects the minor bump; every other value
    /// falls through to the patch bump.
    pub fn bump_mode(&self) -> BumpMode {
        match self.component.as_deref() {
            Some("minor") => BumpMode::Minor,
            _ => BumpMode::Patch,
        }
    }
}
