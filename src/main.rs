use clap::Parser;

use stampli::cli::Cli;
use stampli::commands::run;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}
