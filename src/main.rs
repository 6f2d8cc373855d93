/// The main function serves as the entry point for the schedule submitter.
/// It parses command-line arguments using Clap and executes the corresponding subcommand.
///
/// # Commands:
///
/// - `insert-schedule`: Signs a task schedule with the given account seed, submits it to the node and reports
///   its status until it is finalized (or included, with `--wait-for in-block`).
/// - `encode-schedule`: Prints the SCALE-encoded call data of a task schedule without submitting it.
///
/// # Errors:
///
/// Returns an `Error` if the node cannot be reached, the seed cannot be turned into a keypair, or the
/// node rejects the submission.
mod builder;
mod cli;
mod config;
mod error;
mod log;
mod node_interactor;
mod traits;
mod types;
mod utils;

use clap::Parser;
use cli::{submitter_config, Cli, Commands};
use config::run_config;
use error::Result;
use node_interactor::connection::SubxtConnector;
use node_interactor::submission;
use traits::Connector;
use utils::hex::bytes_to_hex;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = run_config(cli.log_dir.clone());
    log::init_logger(&log_dir)?;

    match &cli.command {
        Some(Commands::InsertSchedule {
            node_url,
            account_seed,
            scheme,
            wait_for,
            schedule,
        }) => {
            let record = schedule.to_record()?;
            let config = submitter_config(node_url, account_seed, *scheme, *wait_for);

            submission::insert_schedule(&SubxtConnector, &config, &record, |status| {
                println!("Current status is {status}");
            })
            .await?;
        }

        Some(Commands::EncodeSchedule { node_url, schedule }) => {
            let record = schedule.to_record()?;
            config::parse_node_url(node_url)?;

            let connection = SubxtConnector.connect(node_url).await?;
            let call_data = submission::encode(connection.as_ref(), &record).await?;

            println!("{}", bytes_to_hex(&call_data));
        }

        None => {
            println!("No command provided. Exiting.");
        }
    }

    Ok(())
}
