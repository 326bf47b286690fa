//! Relative-age labels for public feed timestamps.

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now`.
///
/// "Just now" under a minute, then minutes, hours and days; beyond 30 days
/// the absolute date is shown instead.
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3600 {
        format!("{} min ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} hr ago", secs / 3600)
    } else if secs < 2_592_000 {
        format!("{} days ago", secs / 86_400)
    } else {
        then.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2025-08-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_now_under_a_minute() {
        assert_eq!(relative_age(now() - Duration::seconds(59), now()), "Just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(relative_age(now() - Duration::seconds(60), now()), "1 min ago");
        assert_eq!(relative_age(now() - Duration::minutes(59), now()), "59 min ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(relative_age(now() - Duration::hours(1), now()), "1 hr ago");
        assert_eq!(relative_age(now() - Duration::hours(23), now()), "23 hr ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(relative_age(now() - Duration::days(1), now()), "1 days ago");
        assert_eq!(relative_age(now() - Duration::days(29), now()), "29 days ago");
    }

    #[test]
    fn test_absolute_date_beyond_thirty_days() {
        assert_eq!(relative_age(now() - Duration::days(31), now()), "Jul 1, 2025");
    }

    #[test]
    fn test_future_timestamps_clamp_to_just_now() {
        assert_eq!(relative_age(now() + Duration::minutes(5), now()), "Just now");
    }
}
