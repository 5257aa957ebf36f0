use clap::Parser;
use theme_sample_lib::cli::{self, Cli};

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run(Cli::parse()).await {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}
