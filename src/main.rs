use clap::Parser;

use zone_report::cli::{Cli, Commands};
use zone_report::commands::{run_categories, run_export, run_init};
use zone_report::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Export(args) => run_export(args, cli.quiet),
        Commands::Init(args) => run_init(args),
        Commands::Categories => run_categories(),
    };

    std::process::exit(exit_code);
}
