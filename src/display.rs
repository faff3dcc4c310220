//! Countdown strings for quest and reward cards

use crate::Timestamp;
use crate::clock::{DAY_MS, HOUR_MS, MINUTE_MS};

/// Time left until a quest closes, e.g. "2d 4h", "3h 15m", "12m"
pub fn time_remaining(end: Timestamp, now: Timestamp) -> String {
    let diff = end - now;
    if diff <= 0 {
        return "Expired".to_string();
    }

    let days = diff / DAY_MS;
    let hours = (diff % DAY_MS) / HOUR_MS;
    let minutes = (diff % HOUR_MS) / MINUTE_MS;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// How long a reward stays valid, e.g. "3 months", "20 days"
pub fn validity_period(valid_until: Timestamp, now: Timestamp) -> String {
    let diff = valid_until - now;
    if diff <= 0 {
        return "Expired".to_string();
    }

    let days = diff / DAY_MS;
    if days > 30 {
        let months = days / 30;
        return format!("{} month{}", months, if months > 1 { "s" } else { "" });
    }
    format!("{} day{}", days, if days > 1 { "s" } else { "" })
}
