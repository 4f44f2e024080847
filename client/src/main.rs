use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use config::{Cli, Command};
use menu::{MenuExit, StartMenu};
use terminal::TerminalGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

mod app;
mod config;
mod input;
mod menu;
mod render;
mod tcp_client;
mod terminal;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    terminal::install_panic_hook();

    let game = {
        let _terminal = TerminalGuard::enter().context("failed to set up terminal")?;
        let exit = match cli.command {
            Some(Command::Play) => MenuExit::Play,
            None => StartMenu::new(cli.listen_addr, cli.server_addr).run()?,
        };
        match exit {
            MenuExit::Play => Some(app::play(cli.bindings)?),
            MenuExit::Quit => None,
        }
    };
    // the terminal is restored by now, so this lands in the normal scrollback.
    if let Some(game) = game {
        println!(
            "you {} - {} computer",
            game.player.score, game.opponent.score
        );
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(())
}
