use clap::Parser;
use dayplan::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dayplan::tui::run(cli.data_dir.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
