use clap::Parser;

#[derive(Parser)]
#[command(name = "dp", about = concat!("[*] dayplan v", env!("CARGO_PKG_VERSION"), " - your day in one list"), version)]
pub struct Cli {
    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<String>,
}
