//! Display formatting for practice times and durations.

use chrono::{DateTime, Utc};

/// Format a timestamp relative to now (e.g., "2 minutes ago").
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let seconds = Utc::now().signed_duration_since(timestamp).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    match hours / 24 {
        1 => "yesterday".to_string(),
        days if days < 30 => format!("{} days ago", days),
        days if days < 365 => plural(days / 30, "month"),
        days => plural(days / 365, "year"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Format a practice duration given in minutes.
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.0} min", minutes)
    } else {
        format!("{:.1} min", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_time_just_now() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
        assert_eq!(
            format_relative_time(Utc::now() - Duration::seconds(30)),
            "just now"
        );
    }

    #[test]
    fn relative_time_future_shows_just_now() {
        assert_eq!(
            format_relative_time(Utc::now() + Duration::hours(1)),
            "just now"
        );
    }

    #[test]
    fn relative_time_minutes() {
        assert_eq!(
            format_relative_time(Utc::now() - Duration::minutes(1)),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::minutes(15)),
            "15 minutes ago"
        );
    }

    #[test]
    fn relative_time_hours() {
        assert_eq!(
            format_relative_time(Utc::now() - Duration::hours(5)),
            "5 hours ago"
        );
    }

    #[test]
    fn relative_time_days() {
        assert_eq!(
            format_relative_time(Utc::now() - Duration::days(1)),
            "yesterday"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::days(5)),
            "5 days ago"
        );
    }

    #[test]
    fn relative_time_months_and_years() {
        assert_eq!(
            format_relative_time(Utc::now() - Duration::days(90)),
            "3 months ago"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::days(400)),
            "1 year ago"
        );
    }

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(5.0), "5 min");
        assert_eq!(format_minutes(2.5), "2.5 min");
        assert_eq!(format_minutes(0.0), "0 min");
    }
}
