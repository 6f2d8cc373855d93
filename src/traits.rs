use crate::{
    error::Result,
    node_interactor::submission,
    types::{SigningIdentity, SubmissionHandle, Submitter, TaskRecord},
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

pub type BoxedConnection = Box<dyn Connection + Send + Sync>;

/// Opens connections to a ledger node. Kept behind a trait so the submission flow can run against a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Connector {
    /// Opens a persistent connection to the node at `url`.
    ///
    /// # Arguments
    /// * `url` - A `&str` holding the WebSocket URL of the node.
    ///
    /// # Returns
    /// A `Result` containing the open connection, or `Error::Connection` if the node cannot be reached.
    async fn connect(&self, url: &str) -> Result<BoxedConnection>;
}

/// An open connection to a ledger node.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Connection {
    /// Encodes the `insert_schedule` call for `record` against the node's metadata.
    ///
    /// # Returns
    /// A `Result` containing the SCALE-encoded call data.
    async fn call_data(&self, record: &TaskRecord) -> Result<Vec<u8>>;

    /// Signs the `insert_schedule` call for `record` with `identity` and submits it.
    ///
    /// # Arguments
    /// * `identity` - The `SigningIdentity` that signs the extrinsic.
    /// * `record` - The `TaskRecord` to schedule.
    ///
    /// # Returns
    /// A `Result` containing a `SubmissionHandle` that yields status notifications, or `Error::Submission`.
    async fn submit(&self, identity: &SigningIdentity, record: &TaskRecord) -> Result<SubmissionHandle>;
}

#[async_trait]
pub trait ScheduleSubmitter {
    /// Submits `record` as a signed `TaskSchedule::insert_schedule` extrinsic.
    ///
    /// # Returns
    /// A `Result` containing the `SubmissionHandle` of the extrinsic.
    async fn submit_schedule(&self, record: &TaskRecord) -> Result<SubmissionHandle>;

    fn identity(&self) -> &SigningIdentity;
}

#[async_trait]
impl ScheduleSubmitter for Submitter {
    async fn submit_schedule(&self, record: &TaskRecord) -> Result<SubmissionHandle> {
        submission::submit(self.connection.as_ref(), &self.identity, record).await
    }

    fn identity(&self) -> &SigningIdentity {
        &self.identity
    }
}
