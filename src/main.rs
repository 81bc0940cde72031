use dirtree::cli::Cli;
use env_logger::Env;

fn main() {
    let cli = Cli::new();

    let default_filter = if cli.args().verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
