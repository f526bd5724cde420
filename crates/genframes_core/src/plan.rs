//! Subscription plans and monthly usage limits.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Subscription tier of an account.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Plan {
    /// Free tier
    #[default]
    Free,
    /// Paid tier
    Pro,
}

impl Plan {
    /// Limits that apply to this plan.
    pub fn limits(&self) -> PlanLimits {
        match self {
            Plan::Free => PlanLimits {
                projects: Some(1),
                shots: 10,
                frames: 20,
                hi_res: false,
            },
            Plan::Pro => PlanLimits {
                projects: None,
                shots: 300,
                frames: 300,
                hi_res: true,
            },
        }
    }
}

/// Monthly allowance for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PlanLimits {
    /// Maximum projects, `None` when unlimited
    projects: Option<u32>,
    /// Shots parsed per month
    shots: u32,
    /// Frames rendered per month
    frames: u32,
    /// Whether high-resolution export is available
    hi_res: bool,
}

/// Usage counters for the current billing period.
///
/// # Examples
///
/// ```
/// use genframes_core::{Plan, UsageSnapshot};
///
/// let usage = UsageSnapshot::new(Plan::Free, 3, 5);
/// assert_eq!(usage.remaining_shots(), 7);
/// assert_eq!(usage.remaining_frames(), 15);
/// assert!(usage.can_render_frame());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    /// Plan the counters are measured against
    pub plan: Plan,
    /// Shots parsed this month
    pub shots_used_month: u32,
    /// Frames rendered this month
    pub frames_used_month: u32,
}

impl UsageSnapshot {
    /// Snapshot of the given counters.
    pub fn new(plan: Plan, shots_used_month: u32, frames_used_month: u32) -> Self {
        Self {
            plan,
            shots_used_month,
            frames_used_month,
        }
    }

    /// Shots still available this month.
    pub fn remaining_shots(&self) -> u32 {
        self.plan.limits().shots().saturating_sub(self.shots_used_month)
    }

    /// Frames still available this month.
    pub fn remaining_frames(&self) -> u32 {
        self.plan.limits().frames().saturating_sub(self.frames_used_month)
    }

    /// Whether a parse request can be served.
    pub fn can_parse_script(&self) -> bool {
        self.remaining_shots() > 0
    }

    /// Whether another frame can be rendered.
    pub fn can_render_frame(&self) -> bool {
        self.remaining_frames() > 0
    }
}
