//! In-memory plan budget tracking.

use genframes_core::{Plan, UsageSnapshot};
use genframes_error::{ServerError, ServerErrorKind};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

/// Counts shots and frames served by this process against a plan.
///
/// Requests take a [`Reservation`] before calling a model. Taking one is a
/// single atomic step, so concurrent requests can never be admitted past the
/// budget. A reservation that is dropped without being committed gives its
/// slot back.
///
/// When enforcement is off the counters still run and are reported by
/// `GET /usage`, but no request is refused.
#[derive(Debug)]
pub struct UsageTracker {
    plan: Plan,
    enforce: bool,
    shots: AtomicU32,
    frames: AtomicU32,
}

impl UsageTracker {
    /// Tracker for `plan`, refusing requests over budget when `enforce` is set.
    pub fn new(plan: Plan, enforce: bool) -> Self {
        Self {
            plan,
            enforce,
            shots: AtomicU32::new(0),
            frames: AtomicU32::new(0),
        }
    }

    /// Tracker that never refuses.
    pub fn unlimited() -> Self {
        Self::new(Plan::Pro, false)
    }

    /// Current counters, including slots held by requests in flight.
    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot::new(
            self.plan,
            self.shots.load(Ordering::Acquire),
            self.frames.load(Ordering::Acquire),
        )
    }

    /// Reserve a parse.
    ///
    /// A parse is admitted while at least one shot remains and holds one
    /// shot slot until it finishes. The shot count it produces is settled
    /// with [`Reservation::commit_as`], so the last admitted parse may take
    /// the counter past the limit. Every later parse is refused.
    #[track_caller]
    pub fn reserve_parse(&self) -> Result<Reservation<'_>, ServerError> {
        let limit = *self.plan.limits().shots();
        if self.try_take(&self.shots, limit) {
            return Ok(Reservation::new(&self.shots));
        }
        warn!(plan = %self.plan, "Shot budget exhausted");
        Err(ServerError::new(ServerErrorKind::UsageLimit(format!(
            "{} plan allows {} shots per month",
            self.plan, limit
        ))))
    }

    /// Reserve one frame.
    #[track_caller]
    pub fn reserve_frame(&self) -> Result<Reservation<'_>, ServerError> {
        let limit = *self.plan.limits().frames();
        if self.try_take(&self.frames, limit) {
            return Ok(Reservation::new(&self.frames));
        }
        warn!(plan = %self.plan, "Frame budget exhausted");
        Err(ServerError::new(ServerErrorKind::UsageLimit(format!(
            "{} plan allows {} frames per month",
            self.plan, limit
        ))))
    }

    fn try_take(&self, counter: &AtomicU32, limit: u32) -> bool {
        if !self.enforce {
            counter.fetch_add(1, Ordering::AcqRel);
            return true;
        }
        counter
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                (used < limit).then_some(used + 1)
            })
            .is_ok()
    }
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// One budget slot held by a request in flight.
///
/// Dropping it without committing, because the model call failed or the
/// request was cancelled, returns the slot.
#[derive(Debug)]
#[must_use = "dropping a reservation releases it"]
pub struct Reservation<'a> {
    counter: &'a AtomicU32,
    held: bool,
}

impl<'a> Reservation<'a> {
    fn new(counter: &'a AtomicU32) -> Self {
        Self {
            counter,
            held: true,
        }
    }

    /// Keep the slot.
    pub fn commit(self) {
        self.commit_as(1);
    }

    /// Settle the reservation as `amount` units instead of one.
    pub fn commit_as(mut self, amount: usize) {
        let amount = u32::try_from(amount).unwrap_or(u32::MAX);
        match amount {
            0 => {
                self.counter.fetch_sub(1, Ordering::AcqRel);
            }
            1 => {}
            n => {
                let _ = self
                    .counter
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                        Some(used.saturating_add(n - 1))
                    });
            }
        }
        self.held = false;
        debug!(
            total = self.counter.load(Ordering::Acquire),
            amount, "Committed usage"
        );
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if self.held {
            self.counter.fetch_sub(1, Ordering::AcqRel);
            debug!("Released usage reservation");
        }
    }
}
