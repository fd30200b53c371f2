//! Scheduled group assignment.
//!
//! Runs the assignment batch on a fixed interval so themes get their groups
//! shortly after voting closes without an admin triggering it.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::state::GroupEngine;

/// Run the batch loop until `cancel` is triggered.
///
/// The first run happens one full `interval` after start.
pub async fn run(engine: Arc<GroupEngine>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Group assignment scheduler started"
    );

    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Group assignment scheduler stopping");
                break;
            }
            _ = ticker.tick() => {
                match engine.run_batch(Utc::now()).await {
                    Ok(report) if report.eligible == 0 => {
                        tracing::debug!("Group assignment: no eligible themes");
                    }
                    Ok(report) => {
                        tracing::info!(
                            eligible = report.eligible,
                            completed = report.completed,
                            failed = report.failed,
                            "Group assignment: scheduled batch finished"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Group assignment: scheduled batch failed");
                    }
                }
            }
        }
    }
}
