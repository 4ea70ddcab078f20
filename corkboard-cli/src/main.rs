//! Corkboard CLI - headless client for a corkboard server.
//!
//! Commands:
//! - `corkboard board <id>`: Fetch a board and print its lists and cards
//! - `corkboard move <card-id> <to-list-id> <to-position>`: Move a card
//!
//! The endpoint defaults to the local dev server's GraphQL route and can
//! be overridden with `--endpoint`.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::{Parser, Subcommand};
use corkboard::{
    sort_by_position, BoardError, BoardGateway, BoardId, CardId, GraphqlGateway, ListId, MoveCard,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "corkboard", about = "Headless client for a corkboard server")]
struct Cli {
    /// GraphQL endpoint of the board server
    #[arg(long, default_value = "http://localhost:3000/api/graphql")]
    endpoint: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a board and print its lists and cards
    Board {
        /// Board id
        id: String,

        /// Print the raw board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move a card to a list at a 1-based position
    Move {
        /// Card id
        card_id: String,
        /// Destination list id
        to_list_id: String,
        /// Destination position (1-based)
        to_position: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("corkboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err);
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<(), BoardError> {
    let gateway = GraphqlGateway::new(&cli.endpoint)?;
    tracing::debug!(endpoint = %gateway.endpoint(), "connecting");

    match cli.command {
        Commands::Board { id, json } => {
            let board_id = BoardId::from_string(&id);
            let board = gateway
                .board(&board_id)
                .await?
                .ok_or_else(|| BoardError::board_not_found(&id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
                return Ok(());
            }

            println!("{} ({})", board.name, board.id);
            for list in sort_by_position(&board.lists) {
                println!(
                    "  {} [{} card{}]",
                    list.title,
                    list.cards.len(),
                    if list.cards.len() == 1 { "" } else { "s" }
                );
                for card in sort_by_position(&list.cards) {
                    println!("    {}. {} ({})", card.position, card.title, card.id);
                }
            }
            Ok(())
        }
        Commands::Move {
            card_id,
            to_list_id,
            to_position,
        } => {
            let request = MoveCard::new(
                CardId::from_string(card_id),
                ListId::from_string(to_list_id),
                to_position,
            );
            let moved = gateway.move_card(&request).await?;
            println!("{}", serde_json::to_string_pretty(&moved)?);
            Ok(())
        }
    }
}
