use clap::Parser;

use toll_inference::cli::args::Cli;
use toll_inference::cli::predict::run_prediction;

fn main() {
    let cli = Cli::parse();
    run_prediction(&cli);
}
