use clap::Parser;

use gitfetch::core::config::ProvisionConfig;
use gitfetch::core::download::HttpFetcher;
use gitfetch::core::provision::Provisioner;

/// Everything is driven by the host platform and the embedded release table;
/// the CLI surface is just --help and --version.
#[derive(Parser)]
#[clap(name = "gitfetch")]
#[clap(about = "Downloads, verifies, and unpacks a prebuilt Git distribution")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result = ProvisionConfig::for_host()
        .and_then(|config| Provisioner::new(config, HttpFetcher::new()).run());

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
