use crate::error::{Error, Result};
use crate::traits::{BoxedConnection, Connection, Connector};
use crate::types::{
    DispatchOutcome, Inclusion, SigningIdentity, SubmissionHandle, SubmissionStatus, TaskRecord,
};
use crate::utils::call_builder;
use async_trait::async_trait;
use futures::StreamExt;
use subxt::tx::{TxInBlock, TxStatus};
use subxt::{OnlineClient, PolkadotConfig};
use tracing::{debug, info};

type NodeClient = OnlineClient<PolkadotConfig>;

/// Connects to nodes over WebSocket with `subxt`.
pub struct SubxtConnector;

#[async_trait]
impl Connector for SubxtConnector {
    async fn connect(&self, url: &str) -> Result<BoxedConnection> {
        let client = NodeClient::from_url(url)
            .await
            .map_err(|e| Error::connection(url, e))?;

        info!(
            url,
            spec_version = client.runtime_version().spec_version,
            "Connected to node"
        );

        Ok(Box::new(NodeConnection { client }))
    }
}

pub struct NodeConnection {
    client: NodeClient,
}

#[async_trait]
impl Connection for NodeConnection {
    async fn call_data(&self, record: &TaskRecord) -> Result<Vec<u8>> {
        let tx = call_builder::insert_schedule_tx(record)?;

        Ok(self.client.tx().call_data(&tx)?)
    }

    async fn submit(&self, identity: &SigningIdentity, record: &TaskRecord) -> Result<SubmissionHandle> {
        let tx = call_builder::insert_schedule_tx(record)?;

        debug!(
            pallet = tx.pallet_name(),
            call = tx.call_name(),
            parameters = ?tx.call_data(),
            "Transaction details"
        );

        let mut progress = self
            .client
            .tx()
            .sign_and_submit_then_watch_default(&tx, &identity.0)
            .await
            .map_err(Error::Submission)?;

        let extrinsic_hash = progress.extrinsic_hash();

        let statuses = async_stream::stream! {
            while let Some(status) = progress.next().await {
                let report = match status {
                    Ok(status) => report_status(status).await,
                    Err(e) => Err(Error::Submission(e)),
                };
                yield report;
            }
        };

        Ok(SubmissionHandle::new(extrinsic_hash, statuses.boxed()))
    }
}

async fn report_status(status: TxStatus<PolkadotConfig, NodeClient>) -> Result<SubmissionStatus> {
    let report = match status {
        TxStatus::Validated { .. } => SubmissionStatus::Validated,
        TxStatus::Broadcasted { .. } => SubmissionStatus::Broadcasted,
        TxStatus::NoLongerInBestBlock { .. } => SubmissionStatus::NoLongerInBestBlock,
        TxStatus::InBestBlock(in_block) => SubmissionStatus::InBlock(inclusion(&in_block).await?),
        TxStatus::InFinalizedBlock(in_block) => {
            SubmissionStatus::Finalized(inclusion(&in_block).await?)
        }
        TxStatus::Error { message } => SubmissionStatus::Error { message },
        TxStatus::Invalid { message } => SubmissionStatus::Invalid { message },
        TxStatus::Dropped { message } => SubmissionStatus::Dropped { message },
    };

    Ok(report)
}

// A failed dispatch is still an included extrinsic, so it is reported rather than raised
async fn inclusion(in_block: &TxInBlock<PolkadotConfig, NodeClient>) -> Result<Inclusion> {
    let outcome = match in_block.wait_for_success().await {
        Ok(_) => DispatchOutcome::Success,
        Err(subxt::Error::Runtime(dispatch_error)) => DispatchOutcome::Failed(dispatch_error.to_string()),
        Err(e) => return Err(Error::Submission(e)),
    };

    Ok(Inclusion {
        block_hash: in_block.block_hash(),
        extrinsic_hash: in_block.extrinsic_hash(),
        outcome,
    })
}
