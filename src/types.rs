use crate::error::Result;
use crate::traits::BoxedConnection;
use crate::utils::hex::string_to_hex;
use clap::ValueEnum;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use subxt::utils::{AccountId32, H256};
use subxt_signer::sr25519::Keypair;

/// Status code of a schedule that has not been picked up yet.
pub const STATUS_PENDING: u32 = 0;

/// Frequency of a schedule that runs exactly once.
pub const FREQUENCY_ONCE: u64 = 0;

/// The remote call a schedule performs.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFunction {
    EVMViewWithoutAbi {
        /// Hex encoding of the contract address text, as the pallet expects it.
        address: String,
        function_signature: String,
        input: u32,
    },
}

impl TaskFunction {
    pub fn evm_view_without_abi(contract_address: &str, function_signature: &str, input: u32) -> Self {
        TaskFunction::EVMViewWithoutAbi {
            address: string_to_hex(contract_address),
            function_signature: function_signature.to_string(),
            input,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            TaskFunction::EVMViewWithoutAbi { .. } => "EVMViewWithoutAbi",
        }
    }
}

/// A task schedule as it is handed to `TaskSchedule::insert_schedule`.
///
/// Fields are private: once built, a record is only ever read. The status always starts as
/// [`STATUS_PENDING`], and a frequency of [`FREQUENCY_ONCE`] runs the task a single time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    network: u32,
    cycle: u64,
    frequency: u64,
    hash: String,
    status: u32,
    function: TaskFunction,
}

impl TaskRecord {
    pub fn new(network: u32, cycle: u64, frequency: u64, hash: &str, function: TaskFunction) -> Self {
        Self {
            network,
            cycle,
            frequency,
            hash: hash.to_string(),
            status: STATUS_PENDING,
            function,
        }
    }

    /// A record that runs its task a single time.
    pub fn one_shot(network: u32, cycle: u64, hash: &str, function: TaskFunction) -> Self {
        Self::new(network, cycle, FREQUENCY_ONCE, hash, function)
    }

    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    pub fn function(&self) -> &TaskFunction {
        &self.function
    }
}

// JSON layout of a schedule file. A missing frequency means the task runs once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleDefinition {
    pub network: u32,
    pub cycle: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u64>,
    pub hash: String,
    pub contract_address: String,
    pub function_signature: String,
    pub input: u32,
}

impl ScheduleDefinition {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_record(self) -> TaskRecord {
        let function = TaskFunction::evm_view_without_abi(
            &self.contract_address,
            &self.function_signature,
            self.input,
        );

        match self.frequency {
            Some(frequency) => TaskRecord::new(self.network, self.cycle, frequency, &self.hash, function),
            None => TaskRecord::one_shot(self.network, self.cycle, &self.hash, function),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SignatureScheme {
    #[default]
    Sr25519,
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureScheme::Sr25519 => write!(f, "sr25519"),
        }
    }
}

/// The point in the inclusion pipeline at which watching a submission stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WaitFor {
    InBlock,
    #[default]
    Finalized,
}

/// Keypair used to sign extrinsics.
#[derive(Clone)]
pub struct SigningIdentity(pub Keypair);

impl SigningIdentity {
    pub fn account_id(&self) -> AccountId32 {
        self.0.public_key().to_account_id()
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningIdentity")
            .field(&self.account_id().to_string())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Success,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inclusion {
    pub block_hash: H256,
    pub extrinsic_hash: H256,
    pub outcome: DispatchOutcome,
}

/// A status notification for a submitted extrinsic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Validated,
    Broadcasted,
    NoLongerInBestBlock,
    InBlock(Inclusion),
    Finalized(Inclusion),
    Error { message: String },
    Invalid { message: String },
    Dropped { message: String },
}

impl SubmissionStatus {
    /// Whether watching should stop after this status.
    pub fn is_terminal(&self, wait_for: WaitFor) -> bool {
        match self {
            SubmissionStatus::Finalized(_)
            | SubmissionStatus::Error { .. }
            | SubmissionStatus::Invalid { .. }
            | SubmissionStatus::Dropped { .. } => true,
            SubmissionStatus::InBlock(_) => wait_for == WaitFor::InBlock,
            _ => false,
        }
    }

    pub fn inclusion(&self) -> Option<&Inclusion> {
        match self {
            SubmissionStatus::InBlock(inclusion) | SubmissionStatus::Finalized(inclusion) => {
                Some(inclusion)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Validated => write!(f, "Validated"),
            SubmissionStatus::Broadcasted => write!(f, "Broadcasted"),
            SubmissionStatus::NoLongerInBestBlock => write!(f, "NoLongerInBestBlock"),
            SubmissionStatus::InBlock(inclusion) => write!(f, "InBlock({inclusion})"),
            SubmissionStatus::Finalized(inclusion) => write!(f, "Finalized({inclusion})"),
            SubmissionStatus::Error { message } => write!(f, "Error: {message}"),
            SubmissionStatus::Invalid { message } => write!(f, "Invalid: {message}"),
            SubmissionStatus::Dropped { message } => write!(f, "Dropped: {message}"),
        }
    }
}

impl fmt::Display for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.block_hash)?;
        if let DispatchOutcome::Failed(reason) = &self.outcome {
            write!(f, ", dispatch failed: {reason}")?;
        }
        Ok(())
    }
}

/// Handle to a submitted extrinsic and the notifications the node reports for it.
pub struct SubmissionHandle {
    pub extrinsic_hash: H256,
    pub statuses: BoxStream<'static, Result<SubmissionStatus>>,
}

impl SubmissionHandle {
    pub fn new(extrinsic_hash: H256, statuses: BoxStream<'static, Result<SubmissionStatus>>) -> Self {
        Self {
            extrinsic_hash,
            statuses,
        }
    }
}

/// A connected node client together with the identity that signs its submissions.
pub struct Submitter {
    pub(crate) connection: BoxedConnection,
    pub(crate) identity: SigningIdentity,
    pub node_url: String,
}
