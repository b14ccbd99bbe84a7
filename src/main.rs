use clap::Parser;
use todosync::cli::{Cli, init_tracing, run};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.verbose, cli.quiet) {
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
