mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::DaemonClient;
use shared::ipc::{Command, Response};

#[derive(Parser)]
#[command(name = "handvol")]
#[command(about = "CLI tool for the handvol gesture volume-control daemon")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Begin ingesting detector frames and driving the audio endpoint
    Start,
    /// Stop frame ingest and release the audio sink
    Stop,
    /// Show daemon activity, mute state, and last volume level
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = DaemonClient::new();

    let command = match cli.command {
        Commands::Start => Command::Start,
        Commands::Stop => Command::Stop,
        Commands::Status => Command::Status,
    };

    match client.send_command(command).await {
        Ok(Response::Ok) => {
            println!("Success");
        }
        Ok(Response::Status(info)) => {
            println!("Status:");
            println!("  Running: {}", info.is_running);
            println!("  Active: {}", info.is_active);
            println!("  Muted: {}", info.is_muted);
            match info.volume_level {
                Some(level) => println!("  Volume: {:.1}", level),
                None => println!("  Volume: (no hand seen yet)"),
            }
            if let Some(bar) = info.bar_level {
                println!("  Bar: {:.0}", bar);
            }
        }
        Ok(Response::Error(msg)) => {
            eprintln!("Error: {}", msg);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to connect to handvold: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
