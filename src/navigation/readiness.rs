//! Advisory check run before a quick start.

use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::store::{record_duration, record_time};

/// Limits that trigger a readiness warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessThresholds {
    /// Warn once today's minutes exceed this.
    pub daily_limit_minutes: f64,
    /// Warn when the last practice today was fewer than this many minutes ago.
    pub cooldown_minutes: i64,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            daily_limit_minutes: 30.0,
            cooldown_minutes: 5,
        }
    }
}

/// Why practicing now is discouraged.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadinessWarning {
    DailyLimit { minutes_today: f64, limit: f64 },
    Cooldown { minutes_since: i64 },
}

impl ReadinessWarning {
    pub fn message(&self) -> String {
        match self {
            Self::DailyLimit { limit, .. } => format!(
                "You've already practiced {} minutes today. Rest matters too.",
                limit
            ),
            Self::Cooldown { .. } => {
                "You just finished a practice. Consider a short break first.".to_string()
            }
        }
    }
}

/// Result of [`check_readiness`].
#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    Ready,
    Warning(ReadinessWarning),
}

impl Readiness {
    pub fn needs_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }
}

/// Decide whether to warn before starting another practice.
///
/// "Today" is the calendar date of `now` in its own time zone. The daily
/// limit is checked first; the cooldown uses the last of today's records in
/// stored order.
pub fn check_readiness<Tz: TimeZone>(
    practices: &[Value],
    now: &DateTime<Tz>,
    thresholds: &ReadinessThresholds,
) -> Readiness {
    let zone = now.timezone();
    let today = now.date_naive();

    let todays: Vec<(&Value, DateTime<Tz>)> = practices
        .iter()
        .filter_map(|record| {
            let at = record_time(record)?.with_timezone(&zone);
            (at.date_naive() == today).then_some((record, at))
        })
        .collect();

    let minutes_today: f64 = todays.iter().map(|(record, _)| record_duration(record)).sum();
    if minutes_today > thresholds.daily_limit_minutes {
        return Readiness::Warning(ReadinessWarning::DailyLimit {
            minutes_today,
            limit: thresholds.daily_limit_minutes,
        });
    }

    if let Some((_, last)) = todays.last() {
        let minutes_since = now.clone().signed_duration_since(last.clone()).num_minutes();
        if minutes_since < thresholds.cooldown_minutes {
            return Readiness::Warning(ReadinessWarning::Cooldown { minutes_since });
        }
    }

    Readiness::Ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, hour, minute, 0).unwrap()
    }

    fn record(when: DateTime<Utc>, duration: f64) -> Value {
        json!({
            "id": when.timestamp_millis().to_string(),
            "duration": duration,
            "timestamp": when.to_rfc3339(),
        })
    }

    #[test]
    fn empty_history_is_ready() {
        let readiness = check_readiness(&[], &at(12, 0), &ReadinessThresholds::default());
        assert_eq!(readiness, Readiness::Ready);
    }

    #[test]
    fn over_daily_limit_warns() {
        let practices = vec![record(at(8, 0), 20.0), record(at(9, 0), 15.0)];

        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());

        match readiness {
            Readiness::Warning(ReadinessWarning::DailyLimit { minutes_today, .. }) => {
                assert_eq!(minutes_today, 35.0)
            }
            other => panic!("expected daily limit warning, got {:?}", other),
        }
    }

    #[test]
    fn exactly_at_limit_does_not_warn() {
        let practices = vec![record(at(8, 0), 30.0)];
        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());
        assert!(!readiness.needs_warning());
    }

    #[test]
    fn earlier_days_do_not_count() {
        let yesterday = at(8, 0) - Duration::days(1);
        let practices = vec![record(yesterday, 120.0)];
        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());
        assert_eq!(readiness, Readiness::Ready);
    }

    #[test]
    fn recent_practice_triggers_cooldown() {
        let practices = vec![record(at(11, 57), 3.0)];

        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());

        assert_eq!(
            readiness,
            Readiness::Warning(ReadinessWarning::Cooldown { minutes_since: 3 })
        );
    }

    #[test]
    fn five_minutes_later_is_ready() {
        let practices = vec![record(at(11, 55), 3.0)];
        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());
        assert_eq!(readiness, Readiness::Ready);
    }

    #[test]
    fn legacy_date_field_counts() {
        let practices = vec![json!({"id": "a", "duration": 40, "date": "2024-01-05T07:00:00Z"})];
        let readiness = check_readiness(&practices, &at(12, 0), &ReadinessThresholds::default());
        assert!(readiness.needs_warning());
    }

    #[test]
    fn custom_thresholds_apply() {
        let practices = vec![record(at(8, 0), 10.0)];
        let thresholds = ReadinessThresholds {
            daily_limit_minutes: 5.0,
            cooldown_minutes: 0,
        };
        assert!(check_readiness(&practices, &at(12, 0), &thresholds).needs_warning());
    }

    #[test]
    fn warning_messages_are_readable() {
        let daily = ReadinessWarning::DailyLimit {
            minutes_today: 35.0,
            limit: 30.0,
        };
        assert!(daily.message().contains("30 minutes"));
        assert!(ReadinessWarning::Cooldown { minutes_since: 1 }
            .message()
            .contains("break"));
    }
}
