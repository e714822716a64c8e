//! Freeze leniency policy and raw-value sanitizers.
//!
//! The streak engine assumes non-negative, already-clamped leniency
//! parameters and does not re-validate them. Raw numbers coming from user
//! configuration go through the `resolve_*` sanitizers first: missing, NaN
//! or negative values fall back to the (clamped) default, and the two
//! integer parameters floor fractional input.

use serde::{Deserialize, Serialize};

/// Leniency parameters for streak evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FreezePolicy {
    /// Longest gap, in missed days, eligible for bridging. Zero disables
    /// freezes entirely.
    pub freeze_days: u32,

    /// Cap on freeze days within any trailing 7-day window. Zero means
    /// no cap.
    pub max_freezes_per_week: u32,

    /// Streak-length cost charged per frozen day inside a bridged gap.
    pub freeze_penalty: f64,
}

impl FreezePolicy {
    /// Create a policy from already-sanitized values.
    pub fn new(freeze_days: u32, max_freezes_per_week: u32, freeze_penalty: f64) -> Self {
        Self {
            freeze_days,
            max_freezes_per_week,
            freeze_penalty,
        }
    }

    /// Whether any gap can ever be bridged under this policy.
    pub fn allows_freezes(&self) -> bool {
        self.freeze_days > 0
    }
}

/// Sanitize a raw "freeze days" value: non-negative integer, floored.
pub fn resolve_freeze_days(value: Option<f64>, default_value: u32) -> u32 {
    match value {
        Some(v) if !v.is_nan() && v >= 0.0 => v.floor() as u32,
        _ => default_value,
    }
}

/// Sanitize a raw "max freezes per week" value: non-negative integer, floored.
pub fn resolve_max_freezes_per_week(value: Option<f64>, default_value: u32) -> u32 {
    match value {
        Some(v) if !v.is_nan() && v >= 0.0 => v.floor() as u32,
        _ => default_value,
    }
}

/// Sanitize a raw "freeze penalty" value: non-negative real, not floored.
pub fn resolve_freeze_penalty(value: Option<f64>, default_value: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() && v >= 0.0 => v,
        _ => default_value.max(0.0),
    }
}
