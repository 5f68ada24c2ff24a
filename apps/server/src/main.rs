use clap::Parser;
use mona_server::Cli;

fn main() -> anyhow::Result<()> {
    mona_server::run(Cli::parse())
}
