use clap::Parser;
use pool_cli::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    run(Args::parse())
}
