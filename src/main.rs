// Entrypoint for the CLI application.
// - Keeps `main` small: parse flags, build the reporter, run the pipeline.
// - Every failure path maps to exit code 1; the cause chain is shown at
//   debug level when --verbose is set.

use clap::Parser;
use csvpost::{app, cli::Cli, report::Reporter};
use std::process;

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.verbose);

    if let Err(err) = app::run(&cli, &reporter) {
        reporter.error(&err.to_string());
        for cause in err.chain().skip(1) {
            reporter.debug(&format!("caused by: {}", cause));
        }
        process::exit(1);
    }
}
