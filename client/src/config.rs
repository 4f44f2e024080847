use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use shared::net::SERVER_PORT;

use crate::input::KeyBindings;

#[derive(Parser)]
#[command(about = "Pong in the terminal, against the computer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Keys that move the paddle
    #[arg(long, value_enum, default_value_t)]
    pub bindings: KeyBindings,
    /// Address the start menu's server listens on
    #[arg(long, default_value_t = SocketAddr::from((Ipv4Addr::UNSPECIFIED, SERVER_PORT)))]
    pub listen_addr: SocketAddr,
    /// Address the start menu's client connects to
    #[arg(long, default_value_t = SocketAddr::from((Ipv4Addr::LOCALHOST, SERVER_PORT)))]
    pub server_addr: SocketAddr,
    /// Write logs to this file. Logs are discarded otherwise, since the game owns the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Skip the start menu and play straight away
    Play,
}
