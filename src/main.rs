//! Command-line client (default binary).
//!
//! Talks to a running world server through the library: post chat, send raw
//! commands, read the player position, poll events.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mcpi_link::api::Minecraft;
use mcpi_link::channel::{BlockingChannel, Endpoint};
use mcpi_link::protocol::Arg;

#[derive(Debug, Parser)]
#[command(name = "mcpi-link", version, about = "Control a world server over its text socket")]
struct Cli {
    /// Server host (default: JRP_API_HOST or localhost)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Server port (default: JRP_API_PORT or 4711)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Echo every line sent and received
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Post a chat message
    Chat { message: String },
    /// Send a raw command line
    Raw {
        name: String,
        args: Vec<String>,
        /// Wait for and print the reply line
        #[arg(long)]
        reply: bool,
    },
    /// Print the player's position and tile
    Pos,
    /// Poll and print buffered events
    Events {
        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },
}

fn endpoint(cli: &Cli) -> Endpoint {
    let mut endpoint = Endpoint::from_env().with_debug(cli.debug);
    if let Some(host) = cli.host.clone() {
        endpoint.host = host;
    }
    if let Some(port) = cli.port {
        endpoint.port = port;
    }
    endpoint
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let endpoint = endpoint(&cli);
    let channel = BlockingChannel::connect(&endpoint)
        .with_context(|| format!("connecting to {}", endpoint.addr()))?;
    let mut mc = Minecraft::new(channel);

    let result = run(&mut mc, cli.command);
    let closed = mc.into_inner().close();
    result?;
    closed.context("closing connection")?;
    Ok(())
}

fn run(mc: &mut Minecraft<BlockingChannel>, command: Command) -> Result<()> {
    match command {
        Command::Chat { message } => {
            mc.post_to_chat(&message)?;
        }
        Command::Raw { name, args, reply } => {
            let args: Vec<Arg> = args.into_iter().map(Arg::from).collect();
            let channel = mc.sink_mut();
            if reply {
                let line = channel.send_receive(&name, &args)?;
                println!("{}", line);
            } else {
                channel.send(&name, &args)?;
            }
        }
        Command::Pos => {
            let mut player = mc.player();
            let pos = player.get_pos()?;
            let tile = player.get_tile_pos()?;
            println!("pos  {:.2} {:.2} {:.2}", pos.x, pos.y, pos.z);
            println!("tile {} {} {}", tile.x, tile.y, tile.z);
        }
        Command::Events { json } => {
            let mut events = mc.events();
            let blocks = events.poll_block_hits()?;
            let chats = events.poll_chat_posts()?;
            let projectiles = events.poll_projectile_hits()?;
            if json {
                for ev in &blocks {
                    println!("{}", serde_json::to_string(ev)?);
                }
                for ev in &chats {
                    println!("{}", serde_json::to_string(ev)?);
                }
                for ev in &projectiles {
                    println!("{}", serde_json::to_string(ev)?);
                }
            } else {
                blocks.iter().for_each(|ev| println!("{}", ev));
                chats.iter().for_each(|ev| println!("{}", ev));
                projectiles.iter().for_each(|ev| println!("{}", ev));
            }
        }
    }
    Ok(())
}
