//! Background cleanup scheduling
//!
//! The engine itself owns no long-lived tasks; the server shell spawns this
//! at startup when cleanup is enabled.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::service::AlertService;

impl AlertService {
    /// Spawn the periodic cleanup task.
    ///
    /// Each tick runs one best-effort cleanup pass; a failing pass logs and
    /// the loop keeps going. The first tick fires immediately, so stale
    /// records left over from downtime are purged on startup.
    pub fn start_cleanup_task(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(&self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);

            loop {
                interval.tick().await;

                let purged = service.cleanup_old_alerts().await;
                debug!("Cleanup tick completed, {} alerts purged", purged);
            }
        })
    }
}
