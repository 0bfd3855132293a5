//! ring-lottery entry point.
//!
//! # Architecture Overview
//! ```text
//!  CLI ──▶ config ──▶ wallet (env key) ──▶ session (challenge/response)
//!                                               │
//!                                               ▼
//!                    orchestrator: batches of concurrent draws
//!                    ┌────────────────────────────────────────┐
//!   per draw:        │ build-tx → sign + broadcast → register │
//!                    │          → poll winner                 │
//!                    └────────────────────────────────────────┘
//! ```
//!
//! Exit behavior: a missing credential or broken config ends the
//! process with a failure status; a run that started always exits
//! cleanly, whatever the per-draw outcomes were.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use ring_lottery::api::auth::Authenticator;
use ring_lottery::api::client::ApiClient;
use ring_lottery::api::lottery::LotteryClient;
use ring_lottery::api::session::SessionHandle;
use ring_lottery::blockchain::client::ChainClient;
use ring_lottery::blockchain::transaction::TxSubmitter;
use ring_lottery::blockchain::wallet::Wallet;
use ring_lottery::config::{load_config, BotConfig};
use ring_lottery::draws::orchestrator::{parse_draw_count, Orchestrator};
use ring_lottery::observability::logging;

#[derive(Parser)]
#[command(name = "ring-lottery")]
#[command(about = "Automated Sonic ring lottery participation", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lottery draws in concurrent batches
    Run {
        /// Number of draws to perform; unparseable input means 1
        #[arg(short, long, default_value = "1")]
        draws: String,
    },
    /// Print the wallet address and its balance in lamports
    Balance,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BotConfig::default(),
    };

    logging::init(&config.observability.log_level);
    tracing::info!("ring-lottery v0.1.0 starting");

    let wallet = Arc::new(Wallet::from_env()?);
    tracing::info!(wallet = %wallet.short_address(), "Wallet loaded");

    let chain = ChainClient::new(&config.chain);

    match cli.command {
        Commands::Run { draws } => {
            let count = parse_draw_count(&draws);

            match chain.balance(&wallet.pubkey()).await {
                Ok(lamports) => tracing::info!(lamports, "Wallet balance"),
                Err(err) => tracing::warn!(error = %err, "Balance check failed, continuing"),
            }

            let api = Arc::new(ApiClient::new(&config.service)?);
            let authenticator = Arc::new(Authenticator::new(api.clone(), wallet.clone()));

            let initial = match authenticator.authenticate().await {
                Ok(token) => token,
                Err(err) => {
                    tracing::error!(error = %err, "Initial authentication failed, aborting run");
                    return Ok(());
                }
            };

            let session = Arc::new(SessionHandle::new(initial, Some(authenticator)));
            let submitter = TxSubmitter::new(chain, wallet);
            let orchestrator =
                Orchestrator::new(LotteryClient::new(api), submitter, session, config.draws);

            orchestrator.run(count).await;
        }
        Commands::Balance => {
            let lamports = chain.balance(&wallet.pubkey()).await?;
            println!("{} {} lamports", wallet.address(), lamports);
        }
    }

    Ok(())
}
