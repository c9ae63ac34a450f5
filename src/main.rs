//! tktfwd_bundler - RPM packaging for the ticket forwarder tools.

use std::process;
use tktfwd_bundler::cli::{self, Args};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    // Initialize logging; RUST_LOG overrides -v/-q
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let exit_code = match cli::run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
