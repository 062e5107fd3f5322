//! StatusWatcher: supervised polling loop
//!
//! One sequential cycle: fetch with the current cursor, validate the payload
//! shape, diff each homework against the known-status table, notify the chat
//! about changes, then sleep. Any cycle error is logged, reported through the
//! same chat, and answered with backoff; only startup configuration failures
//! are terminal.

use anyhow::Result;
use chrono::Utc;
use hwbot_rust_core::models::StatusReport;
use hwbot_rust_core::PracticumClient;
use log::{debug, error, info, warn};

use crate::config::Config;
use crate::formatters;
use crate::scheduler::PollScheduler;
use crate::telegram::TelegramClient;
use crate::tracker::StatusTracker;

pub struct StatusWatcher {
    config: Config,
    api: PracticumClient,
    telegram: TelegramClient,
    tracker: StatusTracker,
    scheduler: PollScheduler,
    /// Lower bound of the next fetch window (Unix timestamp); advanced to the
    /// server's `current_date` after each successful cycle.
    cursor: i64,
    /// Last failure text actually delivered to the chat.
    last_failure: Option<String>,
}

impl StatusWatcher {
    pub fn new(config: Config) -> Self {
        let api = PracticumClient::new(
            config.endpoint.clone(),
            config.practicum_token.clone(),
            config.http_timeout,
        );
        let telegram = TelegramClient::new(
            config.telegram_api_base_url.clone(),
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
        );
        let scheduler = PollScheduler::new(
            config.poll_interval,
            config.error_backoff_base,
            config.error_backoff_max,
        );

        Self {
            api,
            telegram,
            tracker: StatusTracker::new(),
            scheduler,
            cursor: Utc::now().timestamp(),
            last_failure: None,
            config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Watching {} (poll_interval: {}s, backoff: {}s..{}s)",
            self.api.endpoint(),
            self.config.poll_interval.as_secs(),
            self.config.error_backoff_base.as_secs(),
            self.config.error_backoff_max.as_secs(),
        );

        loop {
            match self.cycle().await {
                Ok(()) => {
                    self.scheduler.record_success();
                    self.last_failure = None;
                }
                Err(e) => {
                    error!("Polling cycle failed: {e:#}");
                    self.scheduler.record_failure();
                    self.report_failure(&e).await;
                }
            }

            let delay = self.scheduler.next_delay();
            debug!("Sleeping {}s until next cycle", delay.as_secs());
            tokio::time::sleep(delay).await;
        }
    }

    /// One fetch → validate → diff → notify pass. Any error aborts the cycle
    /// before the cursor advances, so the same window is re-fetched next time.
    async fn cycle(&mut self) -> Result<()> {
        let payload = self.api.homework_statuses(self.cursor).await?;
        let report = StatusReport::from_value(payload)?;

        if report.homeworks.is_empty() {
            debug!("No homework updates since {}", self.cursor);
        }

        for homework in &report.homeworks {
            let status = homework.review_status()?;
            if let Some(change) = self.tracker.record(&homework.homework_name, status) {
                info!(
                    "Status change: \"{}\" {} -> {}",
                    change.homework,
                    change
                        .previous
                        .map(|p| p.as_str())
                        .unwrap_or("<unseen>"),
                    status.as_str(),
                );
                let message = formatters::status_change(&change);
                if let Err(e) = self.telegram.send(&message).await {
                    warn!("Failed to send status notification: {e:#}");
                }
            }
        }

        self.cursor = report.current_date;
        Ok(())
    }

    /// Report a cycle failure to the chat, skipping a repeat of the failure
    /// text that was already delivered.
    async fn report_failure(&mut self, error: &anyhow::Error) {
        let message = formatters::failure(error);
        if is_repeat_failure(self.last_failure.as_deref(), &message) {
            debug!("Suppressing repeated failure report");
            return;
        }
        match self.telegram.send(&message).await {
            Ok(()) => {
                self.last_failure = Some(message);
            }
            Err(e) => warn!("Failed to send failure notification: {e:#}"),
        }
    }
}

/// A failure is only re-reported when its text differs from the one already
/// delivered; `last_sent` is cleared by any healthy cycle.
fn is_repeat_failure(last_sent: Option<&str>, message: &str) -> bool {
    last_sent == Some(message)
}
