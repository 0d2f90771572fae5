//! Metric count-up animation.
//!
//! A marked element carries a numeric target plus optional prefix/suffix
//! strings. On its first 50%-visibility intersection the displayed value is
//! interpolated from zero to the target over a fixed two-second run at
//! ~60 frames per second:
//!
//! ```text
//! frame f of N:  value = round(target * ease(f / N) * 10) / 10
//!                ease(t) = t * (2 - t)          (ease-out quadratic)
//! ```
//!
//! Intermediate frames render with at most one decimal digit (integers
//! without a decimal point). The final frame writes the exact target value
//! instead, eliminating any accumulated rounding drift. Targets with more
//! than one significant decimal therefore jump to full precision on the
//! last frame only; that matches the shipped site and stays as-is.

#[cfg(target_arch = "wasm32")]
pub(crate) mod driver;

use crate::error::DomError;
use crate::observe::WatchOptions;

/// Observer settings for metric elements.
pub const OPTIONS: WatchOptions = WatchOptions::threshold(0.5);

// ============================================================================
// Frame schedule
// ============================================================================

/// Fixed-duration, fixed-cadence tick plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSchedule {
    duration_ms: f64,
    frames_per_second: f64,
}

impl FrameSchedule {
    /// 2000 ms at 60 fps: 120 frames of ~16.7 ms.
    pub const DEFAULT: Self = Self {
        duration_ms: 2000.0,
        frames_per_second: 60.0,
    };

    /// Milliseconds between ticks.
    pub fn frame_interval_ms(self) -> f64 {
        1000.0 / self.frames_per_second
    }

    /// Total tick count for the run.
    pub fn total_frames(self) -> u32 {
        (self.duration_ms / self.frame_interval_ms()).round() as u32
    }

    /// Linear progress of a 1-based frame, clamped to `0.0..=1.0`.
    pub fn progress(self, frame: u32) -> f64 {
        (f64::from(frame) / f64::from(self.total_frames())).clamp(0.0, 1.0)
    }
}

/// Ease-out quadratic: fast start, settling finish.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

// ============================================================================
// Counter
// ============================================================================

/// One metric element's animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: f64,
    prefix: String,
    suffix: String,
    schedule: FrameSchedule,
}

impl Counter {
    pub fn new(target: f64, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            target,
            prefix: prefix.into(),
            suffix: suffix.into(),
            schedule: FrameSchedule::DEFAULT,
        }
    }

    /// Build from the raw marker attributes. The target is required and
    /// must parse as a finite number.
    pub fn from_markers(
        target: &str,
        prefix: Option<String>,
        suffix: Option<String>,
    ) -> Result<Self, DomError> {
        let parsed: f64 = target.trim().parse().map_err(|_| DomError::InvalidMarker {
            attr: crate::markers::metric::TARGET_ATTR,
            value: target.to_string(),
        })?;
        if !parsed.is_finite() {
            return Err(DomError::InvalidMarker {
                attr: crate::markers::metric::TARGET_ATTR,
                value: target.to_string(),
            });
        }
        Ok(Self::new(
            parsed,
            prefix.unwrap_or_default(),
            suffix.unwrap_or_default(),
        ))
    }

    pub fn schedule(&self) -> FrameSchedule {
        self.schedule
    }

    pub fn total_frames(&self) -> u32 {
        self.schedule.total_frames()
    }

    /// Display text for a 1-based frame. The final frame yields the exact
    /// target value; earlier frames round to one decimal place.
    pub fn text_at(&self, frame: u32) -> String {
        if frame >= self.total_frames() {
            return self.final_text();
        }
        let eased = ease_out_quad(self.schedule.progress(frame));
        let value = (self.target * eased * 10.0).round() / 10.0;
        format!("{}{}{}", self.prefix, format_frame_value(value), self.suffix)
    }

    /// Exact settled text: `prefix + target + suffix`, target in its
    /// shortest native form.
    pub fn final_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.target, self.suffix)
    }
}

/// Intermediate-frame formatting: integers without a decimal point,
/// everything else with exactly one decimal digit.
fn format_frame_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.1}")
    }
}

// ============================================================================
// Tests
// ============================================================================
