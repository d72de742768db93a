//! # Values
//!
//! Strings, integers, floats and booleans, printed one per line.

use clap::Parser;

#[derive(Parser)]
#[command(name = "values", version, about = "Values by example")]
struct Cli {
    /// Print the annotated example source instead of running it.
    #[arg(short, long)]
    listing: bool,
    /// Log debug diagnostics to stderr unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    values::logging::init(cli.verbose);
    std::process::exit(values::term::main(cli.listing));
}
