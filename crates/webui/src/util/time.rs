use chrono::NaiveDateTime;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Human age of a timestamp relative to `now`, coarsest unit only.
pub fn age(created_at: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = now.signed_duration_since(created_at).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }
    if seconds < MINUTE {
        return "just now".to_string();
    }
    let (amount, unit) = if seconds < HOUR {
        (seconds / MINUTE, "min")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < MONTH {
        (seconds / DAY, "day")
    } else if seconds < YEAR {
        (seconds / MONTH, "month")
    } else {
        (seconds / YEAR, "year")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> NaiveDateTime {
        "2026-08-06T12:00:00".parse().unwrap()
    }

    #[test]
    fn sub_minute_is_just_now() {
        assert_eq!(age(now() - Duration::seconds(59), now()), "just now");
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(age(now() - Duration::minutes(1), now()), "1 min ago");
        assert_eq!(age(now() - Duration::hours(5), now()), "5 hours ago");
        assert_eq!(age(now() - Duration::days(1), now()), "1 day ago");
    }

    #[test]
    fn coarse_units() {
        assert_eq!(age(now() - Duration::days(45), now()), "1 month ago");
        assert_eq!(age(now() - Duration::days(800), now()), "2 years ago");
    }

    #[test]
    fn future_timestamps() {
        assert_eq!(age(now() + Duration::minutes(5), now()), "in the future");
    }
}
