use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use crate::scores::ScoreboardService;
use crate::transport::{DeliveryError, MessageSink};

use super::Clock;

/// The first midnight in `tz` strictly after `now`.
///
/// When DST skips midnight the first valid local time after it is used.
pub fn next_midnight<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let fallback = now + TimeDelta::hours(24);
    let local = now.with_timezone(tz);
    let Some(tomorrow) = local.date_naive().succ_opt() else {
        return fallback;
    };

    let midnight = tomorrow.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or(fallback)
}

/// Time left until the next midnight in `tz`, measured from `now`.
pub fn until_next_midnight<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Duration {
    (next_midnight(now, tz) - now)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

/// Posts the daily summary to one channel at every local midnight
pub struct DailyScheduler<Tz: TimeZone> {
    service: Arc<ScoreboardService>,
    sink: Arc<dyn MessageSink>,
    clock: Arc<dyn Clock>,
    channel: String,
    timezone: Tz,
}

impl<Tz> DailyScheduler<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    pub fn new(
        service: Arc<ScoreboardService>,
        sink: Arc<dyn MessageSink>,
        channel: impl Into<String>,
        timezone: Tz,
    ) -> Self {
        let clock = service.clock();
        Self {
            service,
            sink,
            clock,
            channel: channel.into(),
            timezone,
        }
    }

    /// Renders the summary and hands it to the sink
    #[instrument(skip(self), fields(channel = %self.channel))]
    pub async fn deliver(&self) -> Result<(), DeliveryError> {
        let summary = self.service.render_daily_summary().await;
        self.sink.send(&self.channel, &summary).await?;
        info!("Daily summary delivered");
        Ok(())
    }

    /// Waits for midnight, delivers, repeats until `shutdown` turns true or
    /// its sender goes away.
    ///
    /// Each midnight is delivered at most once, and never before the clock
    /// has reached it.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(channel = %self.channel, "Starting daily summary task");
        let mut last_delivered: Option<DateTime<Utc>> = None;

        'cycle: loop {
            let mut target = next_midnight(self.clock.now(), &self.timezone);
            if let Some(previous) = last_delivered {
                if target <= previous {
                    target = next_midnight(previous, &self.timezone);
                }
            }
            debug!(%target, "Waiting for midnight");

            loop {
                if *shutdown.borrow() {
                    break 'cycle;
                }

                let now = self.clock.now();
                if now >= target {
                    break;
                }
                let wait = (target - now).to_std().unwrap_or(Duration::ZERO);

                tokio::select! {
                    biased;
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break 'cycle;
                        }
                    }
                    _ = self.clock.sleep(wait) => {}
                }
            }

            last_delivered = Some(target);
            if let Err(err) = self.deliver().await {
                error!(channel = %self.channel, error = %err, "Failed to deliver daily summary");
            }
        }

        info!(channel = %self.channel, "Daily summary task stopped");
    }
}
