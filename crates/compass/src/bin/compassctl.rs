use clap::{Parser, Subcommand};
use compass::sys::SOCKET_PATH;
use compass::sys::protocol::{self, Command};
use compass_core::{ItemId, Orientation};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "compassctl", version, about = "Drive a running compass panel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the compass panel
    Show,
    /// Hide the compass panel
    Hide,
    /// Report the section currently in view
    Active {
        /// Item id, as listed in the config
        id: String,
    },
    /// Switch layouts (primary/right or secondary/top)
    Orientation { orientation: Orientation },
    /// Print every section the compass navigates to, one id per line
    Watch,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => send_command(&Command::Show),
        Commands::Hide => send_command(&Command::Hide),
        Commands::Active { id } => send_command(&Command::Active(ItemId::new(id))),
        Commands::Orientation { orientation } => {
            send_command(&Command::Orientation(orientation))
        }
        Commands::Watch => watch(),
    }
}

fn connect() -> anyhow::Result<UnixStream> {
    UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to compass at {}: {}. Is compass running?",
            SOCKET_PATH,
            e
        )
    })
}

fn send_command(command: &Command) -> anyhow::Result<()> {
    let mut stream = connect()?;
    writeln!(stream, "{}", command)?;
    Ok(())
}

fn watch() -> anyhow::Result<()> {
    let mut stream = connect()?;
    writeln!(stream, "{}", Command::Subscribe)?;

    let stdout = std::io::stdout();
    for line in BufReader::new(stream).lines() {
        let line = line?;
        match protocol::parse_navigation(&line) {
            Some(id) => writeln!(stdout.lock(), "{}", id)?,
            None => log::debug!("Unexpected line from compass: {}", line),
        }
    }
    Ok(())
}
