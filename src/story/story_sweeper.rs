use tokio_cron_scheduler::{Job, JobScheduler};

use crate::story::story_repository::StoryRepository;

/// Periodic sweep that hard-deletes expired stories. The read path already
/// filters on `expires_at`, so the sweep only reclaims rows; a missed run
/// never surfaces an expired story.
///
/// The returned scheduler must stay alive for the lifetime of the server.
pub async fn start_story_sweeper(repo: StoryRepository) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    // Every 15 minutes
    let job = Job::new_async("0 */15 * * * *", move |_uuid, _lock| {
        let repo = repo.clone();
        Box::pin(async move {
            match repo.delete_expired().await {
                Ok(0) => {}
                Ok(count) => tracing::info!("Cleaned {} expired stories", count),
                Err(e) => tracing::error!("Story sweep failed: {:?}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    Ok(scheduler)
}
