use clap::Parser;

use termgraph::cli::{self, Args, Command};

fn main() {
    let args = Args::parse();

    let result = match &args.command {
        Some(Command::ListFunctions) => {
            cli::list_functions();
            Ok(())
        }
        Some(Command::Config { action }) => cli::handle_config_action(action.clone(), &args),
        None => cli::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
