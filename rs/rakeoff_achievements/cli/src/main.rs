//! A command-line tool to check and claim RakeoffAchievements rewards.

mod identity;
mod network;
mod output;

use crate::network::Network;
use anyhow::Context;
use candid::Principal;
use clap::{Args, Parser, Subcommand};
use rakeoff_achievements_client::{
    make_agent, AgentConfig, AgentRuntime, RakeoffAchievementsClient,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "rakeoff-achievements",
    about = "Check and claim RakeoffAchievements rewards.",
    version
)]
struct CliArgs {
    /// The network to call. This can be "local", "ic", or the URL of an IC network.
    #[arg(long, default_value = "local", global = true)]
    network: Network,

    /// The principal of the RakeoffAchievements canister.
    #[arg(long, global = true)]
    canister_id: Option<Principal>,

    /// PEM file of the identity to sign calls with. Calls are anonymous without it.
    #[arg(long, global = true)]
    identity_pem: Option<PathBuf>,

    /// Fetch the root key from the network instead of using the mainnet key.
    /// Implied for local networks.
    #[arg(long, global = true)]
    fetch_root_key: bool,

    /// HTTP timeout of a single request to the network, in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    /// Print debug messages. `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    sub_command: SubCommand,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    /// List the reward tiers.
    Levels,
    /// Show the reward eligibility of one or more neurons.
    Check(CheckArgs),
    /// Claim the reward a neuron is due. Never retried.
    Claim(ClaimArgs),
    /// Show the canister's ledger account and payout counters.
    Account,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[arg(long = "neuron-id", required = true, num_args = 1..)]
    neuron_ids: Vec<u64>,
}

#[derive(Debug, Args)]
struct ClaimArgs {
    #[arg(long)]
    neuron_id: u64,
}

/// How a command ended, from best to worst.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Outcome {
    Done,
    /// The canister answered with an error.
    Refused,
    /// No valid reply was obtained.
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Refused => ExitCode::from(1),
            Outcome::Failed => ExitCode::from(2),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            Outcome::Failed.into()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: CliArgs) -> anyhow::Result<Outcome> {
    let canister_id = args
        .canister_id
        .context("--canister-id is required")?;
    let identity = identity::load_identity(args.identity_pem.as_deref())?;
    let agent = make_agent(AgentConfig {
        url: args.network.url.clone(),
        identity,
        timeout: Some(Duration::from_secs(args.timeout_secs)),
        root_key: args.network.root_key(args.fetch_root_key),
    })
    .await
    .with_context(|| format!("failed to connect to {}", args.network.url))?;
    let client = RakeoffAchievementsClient::new(AgentRuntime::new(agent), canister_id);

    match args.sub_command {
        SubCommand::Levels => {
            let levels = client.show_available_levels().await?;
            print!("{}", output::Levels(&levels));
            Ok(Outcome::Done)
        }
        SubCommand::Check(CheckArgs { neuron_ids }) => {
            let mut outcome = Outcome::Done;
            for (neuron_id, result) in client.check_achievement_level_rewards(&neuron_ids).await {
                match result {
                    Ok(Ok(details)) => print!("{}", output::Details(&details)),
                    Ok(Err(message)) => {
                        eprintln!("neuron {neuron_id}: {message}");
                        outcome = outcome.max(Outcome::Refused);
                    }
                    Err(err) => {
                        eprintln!("neuron {neuron_id}: {err}");
                        outcome = outcome.max(Outcome::Failed);
                    }
                }
            }
            Ok(outcome)
        }
        SubCommand::Claim(ClaimArgs { neuron_id }) => {
            info!(neuron_id, "Claiming achievement reward");
            match client.claim_achievement_level_reward(neuron_id).await? {
                Ok(confirmation) => {
                    println!("{confirmation}");
                    Ok(Outcome::Done)
                }
                Err(message) => {
                    eprintln!("neuron {neuron_id}: {message}");
                    Ok(Outcome::Refused)
                }
            }
        }
        SubCommand::Account => match client.get_canister_account_and_stats().await? {
            Ok(account) => {
                print!("{}", output::Account(&account));
                Ok(Outcome::Done)
            }
            Err(message) => {
                eprintln!("{message}");
                Ok(Outcome::Refused)
            }
        },
    }
}
