use crate::builder::SubmitterBuilder;
use crate::config::SubmitterConfig;
use crate::error::Result;
use crate::traits::{Connection, Connector, ScheduleSubmitter};
use crate::types::{
    DispatchOutcome, SigningIdentity, SubmissionHandle, SubmissionStatus, TaskRecord, WaitFor,
};
use crate::utils::call_builder::{INSERT_SCHEDULE_CALL, TASK_SCHEDULE_PALLET};
use futures::StreamExt;
use tracing::{info, warn};

/// Signs `record` with `identity` and hands it to the node behind `connection`.
pub async fn submit(
    connection: &(dyn Connection + Send + Sync),
    identity: &SigningIdentity,
    record: &TaskRecord,
) -> Result<SubmissionHandle> {
    info!(
        network = record.network(),
        cycle = record.cycle(),
        hash = record.hash(),
        signer = %identity.account_id(),
        "Submitting {}::{}",
        TASK_SCHEDULE_PALLET,
        INSERT_SCHEDULE_CALL
    );

    let handle = connection.submit(identity, record).await?;

    info!(extrinsic_hash = ?handle.extrinsic_hash, "Schedule submitted, watching status");

    Ok(handle)
}

/// Returns the SCALE-encoded call data for `record` without signing or submitting it.
pub async fn encode(connection: &(dyn Connection + Send + Sync), record: &TaskRecord) -> Result<Vec<u8>> {
    connection.call_data(record).await
}

/// Feeds every status notification of `handle` to `callback` until a terminal one arrives.
///
/// # Returns
/// The last status observed, or `None` if the node closed the stream without reporting anything.
pub async fn on_status<F>(
    handle: SubmissionHandle,
    wait_for: WaitFor,
    mut callback: F,
) -> Result<Option<SubmissionStatus>>
where
    F: FnMut(&SubmissionStatus),
{
    let mut statuses = handle.statuses;
    let mut last_status = None;

    while let Some(status) = statuses.next().await {
        let status = status?;
        callback(&status);

        match &status {
            SubmissionStatus::Error { message }
            | SubmissionStatus::Invalid { message }
            | SubmissionStatus::Dropped { message } => {
                warn!(%status, message = message.as_str(), "Submission rejected by node");
            }
            _ => {}
        }

        if let Some(inclusion) = status.inclusion() {
            if let DispatchOutcome::Failed(reason) = &inclusion.outcome {
                warn!(
                    block_hash = ?inclusion.block_hash,
                    extrinsic_hash = ?inclusion.extrinsic_hash,
                    reason = reason.as_str(),
                    "Dispatch failed"
                );
            }
        }

        let terminal = status.is_terminal(wait_for);
        last_status = Some(status);

        if terminal {
            break;
        }
    }

    Ok(last_status)
}

/// Connects, derives the signer, submits `record` and reports its statuses, strictly in that order.
pub async fn insert_schedule<C, F>(
    connector: &C,
    config: &SubmitterConfig,
    record: &TaskRecord,
    callback: F,
) -> Result<Option<SubmissionStatus>>
where
    C: Connector + Sync + ?Sized,
    F: FnMut(&SubmissionStatus),
{
    let submitter = SubmitterBuilder::default()
        .node_url(config.node_url.clone())
        .account_seed(&config.account_seed, config.scheme)
        .build(connector)
        .await?;

    let handle = submitter.submit_schedule(record).await?;

    println!(
        "Submitted {}::{} from {} as {:?}",
        TASK_SCHEDULE_PALLET,
        INSERT_SCHEDULE_CALL,
        submitter.identity().account_id(),
        handle.extrinsic_hash
    );

    let last_status = on_status(handle, config.wait_for, callback).await?;
    info!(
        node_url = submitter.node_url.as_str(),
        status = ?last_status,
        "Stopped watching submission"
    );

    Ok(last_status)
}
