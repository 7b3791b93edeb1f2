//! Scheduled-deletion countdown
//!
//! Turns an installation's absolute deletion time into the remaining-time
//! text shown next to it, together with how loudly it should be rendered.
//! Anything under a day is urgent.

use crate::install::Installation;
use std::fmt;

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// How imminent a scheduled deletion is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Urgent,
}

/// Color token for the countdown label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Default,
    Danger,
}

/// Weight token for the countdown label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub color: ColorToken,
    pub weight: FontWeight,
}

/// Remaining time until deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub text: String,
    pub urgency: Urgency,
}

impl Countdown {
    pub fn style(&self) -> LabelStyle {
        match self.urgency {
            Urgency::Normal => LabelStyle {
                color: ColorToken::Default,
                weight: FontWeight::Normal,
            },
            Urgency::Urgent => LabelStyle {
                color: ColorToken::Danger,
                weight: FontWeight::Bold,
            },
        }
    }

    pub fn label(&self) -> String {
        format!("Deleting: {}", self.text)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Countdown for `install` at `now` (epoch ms).
///
/// Returns `None` when the installation is locked against deletion or has
/// no deletion scheduled. A deadline already in the past reads "0 hours".
pub fn deletion_countdown(install: &Installation, now: i64) -> Option<Countdown> {
    if install.deletion_locked {
        return None;
    }
    let scheduled = install.scheduled_for_deletion()?;
    Some(countdown_until(scheduled, now))
}

/// Format the time left between `now` and `deadline` (both epoch ms)
pub fn countdown_until(deadline: i64, now: i64) -> Countdown {
    let remaining = deadline.saturating_sub(now);

    if remaining >= DAY_MS {
        Countdown {
            text: quantity(remaining as f64 / DAY_MS as f64, "day"),
            urgency: Urgency::Normal,
        }
    } else {
        Countdown {
            text: quantity(remaining.max(0) as f64 / HOUR_MS as f64, "hour"),
            urgency: Urgency::Urgent,
        }
    }
}

// One decimal place, trailing ".0" dropped
fn quantity(value: f64, unit: &str) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let number = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    };
    if rounded == 1.0 {
        format!("{} {}", number, unit)
    } else {
        format!("{} {}s", number, unit)
    }
}
