// Turns a `TaskRecord` into the dynamic `TaskSchedule::insert_schedule` call. The call is built against the
// node's metadata at submission time, so no generated runtime interface is needed.

use crate::error::Result;
use crate::types::{TaskFunction, TaskRecord};
use crate::utils::hex::hex_to_bytes;
use subxt::dynamic::Value;
use subxt::tx::DynamicPayload;

pub const TASK_SCHEDULE_PALLET: &str = "TaskSchedule";
pub const INSERT_SCHEDULE_CALL: &str = "insert_schedule";

/// Builds the `schedule` argument of `insert_schedule`.
pub fn schedule_value(record: &TaskRecord) -> Result<Value> {
    Ok(Value::named_composite([
        ("network", Value::u128(record.network().into())),
        ("cycle", Value::u128(record.cycle().into())),
        ("frequency", Value::u128(record.frequency().into())),
        ("hash", Value::string(record.hash())),
        ("status", Value::u128(record.status().into())),
        ("function", function_value(record.function())?),
    ]))
}

fn function_value(function: &TaskFunction) -> Result<Value> {
    match function {
        TaskFunction::EVMViewWithoutAbi {
            address,
            function_signature,
            input,
        } => Ok(Value::named_variant(
            function.variant_name(),
            [
                ("address", Value::from_bytes(hex_to_bytes(address)?)),
                ("function_signature", Value::string(function_signature.as_str())),
                ("input", Value::u128((*input).into())),
            ],
        )),
    }
}

pub fn insert_schedule_tx(record: &TaskRecord) -> Result<DynamicPayload> {
    Ok(subxt::dynamic::tx(
        TASK_SCHEDULE_PALLET,
        INSERT_SCHEDULE_CALL,
        vec![schedule_value(record)?],
    ))
}
