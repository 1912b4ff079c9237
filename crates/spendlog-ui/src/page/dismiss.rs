//! Timed dismissal of notice banners.

use crate::page::config::{DEFAULT_DISMISS_DELAY_MS, MAX_DISMISS_DELAY_MS};
use crate::page::error::UiError;
use crate::page::ports::{DismissibleNotice, NoticeSource, Scheduler};
use std::time::Duration;

/// Milliseconds to hand `setTimeout`, clamped so the value never wraps negative.
#[must_use]
pub fn timer_millis(delay: Duration) -> u32 {
    let millis = delay.as_millis().min(u128::from(MAX_DISMISS_DELAY_MS));
    u32::try_from(millis).unwrap_or(u32::MAX >> 1)
}

/// Summary of one sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Notices present when the sweep ran.
    pub found: usize,
    /// Notices closed successfully.
    pub closed: usize,
    /// Close failures, in document order.
    pub failures: Vec<UiError>,
}

/// Closes every notice on the page once, after a fixed delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeDismisser {
    delay: Duration,
}

impl Default for NoticeDismisser {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DISMISS_DELAY_MS))
    }
}

impl NoticeDismisser {
    /// Dismisser firing `delay` after it is scheduled.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Close every notice present right now. A failed close does not stop the rest.
    ///
    /// # Errors
    ///
    /// Returns an error only when the notices cannot be enumerated.
    pub fn sweep<N: NoticeSource>(source: &N) -> Result<SweepReport, UiError> {
        let notices = source.collect()?;
        let mut report = SweepReport {
            found: notices.len(),
            ..SweepReport::default()
        };
        for notice in &notices {
            match notice.close() {
                Ok(()) => report.closed += 1,
                Err(err) => report.failures.push(err),
            }
        }
        Ok(report)
    }

    /// Schedule exactly one sweep; `on_done` receives its result.
    pub fn schedule<N, F>(self, scheduler: &dyn Scheduler, source: N, on_done: F)
    where
        N: NoticeSource + 'static,
        F: FnOnce(Result<SweepReport, UiError>) + 'static,
    {
        scheduler.schedule_once(
            self.delay,
            Box::new(move || on_done(Self::sweep(&source))),
        );
    }
}
