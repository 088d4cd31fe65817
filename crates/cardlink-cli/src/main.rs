mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::card::CardSubcommand;
use std::path::PathBuf;

const DEFAULT_STORE_URL: &str = "http://localhost:4170";

#[derive(Parser)]
#[command(
    name = "cardlink",
    about = "Digital business-card lead capture — manage cards, render QR links, run visit sequences",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (default: auto-detect from .cardlink/)
    #[arg(long, global = true, env = "CARDLINK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage business cards and their action sequences
    Card {
        #[command(subcommand)]
        subcommand: CardSubcommand,
    },

    /// Render a card's visit URL as a unicode QR code
    Qr {
        id: String,
        /// Base URL embedded in the QR link
        #[arg(long, default_value = DEFAULT_STORE_URL)]
        base_url: String,
    },

    /// Resolve a visit target and execute its action sequence
    Visit {
        /// 24-hex card id or percent-encoded absolute URL
        target: String,
        /// Card store to fetch configurations from
        #[arg(long, default_value = DEFAULT_STORE_URL)]
        store_url: String,
        /// Print the schedule without executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the card store service
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "4170")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } | Commands::Visit { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Card { subcommand } => cmd::card::run(&root, subcommand, cli.json),
        Commands::Qr { id, base_url } => cmd::qr::run(&root, &id, &base_url),
        Commands::Visit {
            target,
            store_url,
            dry_run,
        } => cmd::visit::run(&root, &target, &store_url, dry_run),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
