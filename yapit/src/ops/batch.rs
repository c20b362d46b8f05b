//! Batch operation - generate every configured interface concurrently.

use futures::future::join_all;
use yapit_manifest::Invocation;

use super::generate::{WriteMode, generate};
use crate::reports::{BatchFailure, BatchReport};

/// Execute the batch operation.
///
/// Each invocation gets its own generator, so name allocation never leaks
/// between interfaces. One failure does not cancel the others; results come
/// back in input order.
pub async fn batch(invocations: Vec<Invocation>, mode: WriteMode) -> BatchReport {
    let results = join_all(invocations.iter().map(|inv| generate(inv, mode))).await;

    let mut report = BatchReport::default();
    for (invocation, result) in invocations.iter().zip(results) {
        match result {
            Ok(generated) => report.generated.push(generated),
            Err(e) => {
                tracing::warn!(
                    interface_id = %invocation.interface_id,
                    error = %e,
                    "interface failed"
                );
                report.failures.push(BatchFailure {
                    interface_id: invocation.interface_id.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    report
}
