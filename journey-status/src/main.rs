use std::io::Write;

use clap::Parser;
use tracing::debug;

use journey_status::config::{Cli, Command};
use journey_status::logging;
use journey_status::lookup;
use journey_status::trainsets::lookup_trainset;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();
    debug!(?cli, "starting");

    // Lookup failures are part of the document; the exit status stays 0.
    let output = match &cli.command {
        Command::Journey { id } => lookup::run(&cli, id).await.to_json(),
        Command::Trainset { id, names } => lookup_trainset(id, names.as_deref()).to_json(),
    };

    // A closed stdout (e.g. piped into `head`) is not worth a panic.
    let _ = writeln!(std::io::stdout().lock(), "{output}");
}
