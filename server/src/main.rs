use std::net::SocketAddr;

use clap::Parser;
use server::GreetingServer;
use shared::net::SERVER_PORT;
use tracing::info;

#[derive(Parser)]
struct Cli {
    /// Address to accept connections on
    #[arg(long, default_value_t = SocketAddr::from(([0, 0, 0, 0], SERVER_PORT)))]
    addr: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // a bind failure is reported once, by anyhow, as main's error.
    let server = GreetingServer::bind(cli.addr)?;
    info!("server started on {}", cli.addr);
    server.serve_forever()
}
