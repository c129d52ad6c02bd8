//! Recurring feed runs.
//!
//! Registers the feed run on the configured cron schedule. A failed run is
//! logged and the next tick runs as usual.

use std::sync::Arc;

use adfeed_core::AppConfig;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::runner::{run_once, RunOptions};

/// Builds and starts the job scheduler.
///
/// The returned handle must be kept alive for as long as runs should happen.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if `config.schedule` is not a valid cron
/// expression or the scheduler fails to start.
pub(crate) async fn build_scheduler(
    config: Arc<AppConfig>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_feed_job(&scheduler, config).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_feed_job(
    scheduler: &JobScheduler,
    config: Arc<AppConfig>,
) -> Result<(), JobSchedulerError> {
    let schedule = config.schedule.clone();
    let options = Arc::new(RunOptions {
        output: config.feed_path.clone(),
        dry_run: false,
    });

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&config);
        let options = Arc::clone(&options);

        Box::pin(async move {
            tracing::info!("scheduler: starting feed run");
            match run_once(&config, &options).await {
                Ok(summary) => tracing::info!(
                    emitted = summary.diagnostics.emitted,
                    written = ?summary.written,
                    "scheduler: feed run complete"
                ),
                Err(e) => tracing::error!(error = %format!("{e:#}"), "scheduler: feed run failed"),
            }
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(schedule = %schedule, "scheduler: feed job registered");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on unix.
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping scheduler");
}
