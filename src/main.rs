use clap::Parser;

use playview::{
    config::{self, Config},
    error, info,
    server::{AppState, start_server},
};

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:3000; overrides SERVER_ADDRESS
    #[clap(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();
    let config = Config::from_env(cli.bind);
    let state = AppState::new(config);

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = start_server(state).await {
        error!("Server terminated: {}", e);
    }
}
