use crate::config::{SubmitterConfig, DEFAULT_ACCOUNT_SEED, DEFAULT_NODE_URL};
use crate::error::Result;
use crate::types::{ScheduleDefinition, SignatureScheme, TaskRecord, WaitFor};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "schedule-submitter",
    about = "Submits task schedules to a timechain node as signed extrinsics"
)]
pub struct Cli {
    /// Directory the log file is written to (falls back to SUBMITTER_LOG_DIR, then ./logs)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Signs and submits a `TaskSchedule::insert_schedule` extrinsic, then reports its status
    InsertSchedule {
        #[arg(long, default_value = DEFAULT_NODE_URL)]
        node_url: String,

        /// Secret URI of the signing account
        #[arg(long, default_value = DEFAULT_ACCOUNT_SEED)]
        account_seed: String,

        #[arg(long, value_enum, default_value_t = SignatureScheme::Sr25519)]
        scheme: SignatureScheme,

        #[arg(long, value_enum, default_value_t = WaitFor::Finalized)]
        wait_for: WaitFor,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },
    /// Prints the SCALE-encoded `insert_schedule` call data without submitting it
    EncodeSchedule {
        #[arg(long, default_value = DEFAULT_NODE_URL)]
        node_url: String,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },
}

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// JSON schedule definition; replaces the individual schedule flags
    #[arg(long)]
    pub schedule_file: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    pub network: u32,

    #[arg(long, default_value_t = 1)]
    pub cycle: u64,

    /// Omit to run the task once
    #[arg(long)]
    pub frequency: Option<u64>,

    #[arg(long, default_value = "QmWVZN1S6Yhygt35gQej6e3VbEEffbrVuqZZCQc772uRt7")]
    pub hash: String,

    #[arg(long, default_value = "0x3de7086ce750513ef79d14eacbd1282c4e4b0cea")]
    pub contract_address: String,

    #[arg(
        long,
        default_value = "function get_votes_stats() external view returns (uint, uint)"
    )]
    pub function_signature: String,

    #[arg(long, default_value_t = 2)]
    pub input: u32,
}

impl ScheduleArgs {
    pub fn to_record(&self) -> Result<TaskRecord> {
        let definition = match &self.schedule_file {
            Some(path) => ScheduleDefinition::from_json(&fs::read_to_string(path)?)?,
            None => ScheduleDefinition {
                network: self.network,
                cycle: self.cycle,
                frequency: self.frequency,
                hash: self.hash.clone(),
                contract_address: self.contract_address.clone(),
                function_signature: self.function_signature.clone(),
                input: self.input,
            },
        };

        Ok(definition.into_record())
    }
}

pub fn submitter_config(
    node_url: &str,
    account_seed: &str,
    scheme: SignatureScheme,
    wait_for: WaitFor,
) -> SubmitterConfig {
    SubmitterConfig {
        node_url: node_url.to_string(),
        account_seed: account_seed.to_string(),
        scheme,
        wait_for,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TaskFunction, STATUS_PENDING};
    use crate::utils::hex::string_to_hex;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_reproduce_local_schedule() {
        let cli = Cli::parse_from(["schedule-submitter", "insert-schedule"]);

        let Some(Commands::InsertSchedule {
            node_url,
            account_seed,
            scheme,
            wait_for,
            schedule,
        }) = cli.command
        else {
            panic!("expected insert-schedule");
        };

        assert_eq!(node_url, "ws://127.0.0.1:9943");
        assert_eq!(account_seed, "//Alice");
        assert_eq!(scheme, SignatureScheme::Sr25519);
        assert_eq!(wait_for, WaitFor::Finalized);

        let record = schedule.to_record().unwrap();
        assert_eq!(record.network(), 1);
        assert_eq!(record.cycle(), 1);
        assert_eq!(record.frequency(), 0);
        assert_eq!(record.status(), STATUS_PENDING);
        assert_eq!(
            record.function(),
            &TaskFunction::EVMViewWithoutAbi {
                address: string_to_hex("0x3de7086ce750513ef79d14eacbd1282c4e4b0cea"),
                function_signature: "function get_votes_stats() external view returns (uint, uint)"
                    .to_string(),
                input: 2,
            }
        );
    }

    #[test]
    fn test_schedule_flags() {
        let cli = Cli::parse_from([
            "schedule-submitter",
            "--log-dir",
            "/tmp/submitter",
            "encode-schedule",
            "--node-url",
            "wss://node.example.org",
            "--network",
            "3",
            "--frequency",
            "10",
        ]);

        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/submitter")));
        let Some(Commands::EncodeSchedule { node_url, schedule }) = cli.command else {
            panic!("expected encode-schedule");
        };
        assert_eq!(node_url, "wss://node.example.org");

        let record = schedule.to_record().unwrap();
        assert_eq!(record.network(), 3);
        assert_eq!(record.frequency(), 10);
        assert_eq!(record.status(), STATUS_PENDING);
    }

    #[test]
    fn test_missing_schedule_file() {
        let cli = Cli::parse_from([
            "schedule-submitter",
            "encode-schedule",
            "--schedule-file",
            "/nonexistent/schedule.json",
        ]);
        let Some(Commands::EncodeSchedule { schedule, .. }) = cli.command else {
            panic!("expected encode-schedule");
        };

        assert!(schedule.to_record().is_err());
    }
}
