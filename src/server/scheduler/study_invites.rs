use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::study::StudyService};

/// Top of every hour.
const EXPIRY_SCHEDULE: &str = "0 0 * * * *";

/// Starts the job that deactivates study invites older than 24 hours.
///
/// Returns the running scheduler, which must be kept alive for the job to keep firing.
///
/// # Arguments
/// - `db` - Database connection
/// - `room_prefix` - Meeting room prefix, needed to construct the service
pub async fn start_scheduler(
    db: DatabaseConnection,
    room_prefix: String,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(EXPIRY_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let room_prefix = room_prefix.clone();

        Box::pin(async move {
            match StudyService::new(&db, &room_prefix)
                .expire_stale(Utc::now())
                .await
            {
                Ok(0) => {}
                Ok(expired) => tracing::info!("Expired {} stale study invites", expired),
                Err(e) => tracing::error!("Error expiring study invites: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Study invite expiry scheduler started");

    Ok(scheduler)
}
