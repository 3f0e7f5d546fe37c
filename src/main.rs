use std::path::PathBuf;

use clap::Parser;

use phrase_lsp::lsp::server;

#[derive(Parser)]
#[command(name = "phrase-lsp")]
#[command(version)]
#[command(about = "Language server flagging banned phrases in open documents")]
struct Args {
    /// Write logs to this file instead of the default data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    server::run(args.log_file)
}
