use anyhow::Result;
use bumpver::{arguments::Arguments, bumpers, walk};
use clap::Parser;
use log::{LevelFilter, debug};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let mode = args.bump_mode();
    debug!("Bump mode: {:?}", mode);

    // Collect every matching file first, then rewrite them in discovery
    // order. Any failure aborts the run; files already rewritten stay as-is.
    let rules = bumpers::rules();
    let tasks = walk::collect_tasks(&args.path, &rules)?;
    for task in &tasks {
        (task.rule.bump)(&task.path, mode)?;
    }

    Ok(())
}
