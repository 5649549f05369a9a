//! Text formatting for the lines printed on a card.

use chrono::NaiveDate;
use itertools::Itertools;

/// Placeholder used for the session owner when the name is unknown.
pub const DEFAULT_OWNER: &str = "User";

/// Formats a date the way US locales print short dates: `Jan 5, 2024`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a duration as `1h 30m`, `2h` or `45m`. Zero minutes is omitted.
pub fn duration(minutes: u32) -> Option<String> {
    if minutes == 0 {
        return None;
    }
    let (hours, mins) = (minutes / 60, minutes % 60);
    let label = match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    };
    Some(label)
}

pub fn sets(sets_completed: u32) -> String {
    format!("{sets_completed} sets")
}

/// Builds the participants line of a shared session, owner first.
pub fn group_line(owner: Option<&str>, partners: &[String]) -> Option<String> {
    let owner = owner
        .filter(|o| !o.trim().is_empty())
        .unwrap_or(DEFAULT_OWNER);
    match partners {
        [] => None,
        [partner] => Some(format!("Workout Partners: {owner} & {partner}")),
        _ => {
            let names = std::iter::once(owner)
                .chain(partners.iter().map(String::as_str))
                .join(", ");
            Some(format!("Group Session: {names}"))
        }
    }
}

/// Prefixes the date with the workout type, `Push • Jan 5, 2024`.
pub fn kind_and_date(kind: Option<&str>, date: &str) -> String {
    match kind {
        Some(kind) if !kind.trim().is_empty() => format!("{kind} • {date}"),
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations() {
        assert_eq!(duration(0), None);
        assert_eq!(duration(45).as_deref(), Some("45m"));
        assert_eq!(duration(90).as_deref(), Some("1h 30m"));
        assert_eq!(duration(120).as_deref(), Some("2h"));
        assert_eq!(duration(61).as_deref(), Some("1h 1m"));
    }

    #[test]
    fn formats_short_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(short_date(d), "Jan 5, 2024");
        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(short_date(d), "Dec 31, 2023");
    }

    #[test]
    fn formats_group_lines() {
        let one = vec!["Sam".to_string()];
        let two = vec!["Sam".to_string(), "Jo".to_string()];
        assert_eq!(group_line(Some("Alex"), &[]), None);
        assert_eq!(
            group_line(Some("Alex"), &one).as_deref(),
            Some("Workout Partners: Alex & Sam")
        );
        assert_eq!(
            group_line(Some("Alex"), &two).as_deref(),
            Some("Group Session: Alex, Sam, Jo")
        );
        assert_eq!(
            group_line(None, &one).as_deref(),
            Some("Workout Partners: User & Sam")
        );
        assert_eq!(
            group_line(Some(""), &one).as_deref(),
            Some("Workout Partners: User & Sam")
        );
        assert_eq!(
            group_line(Some("  "), &two).as_deref(),
            Some("Group Session: User, Sam, Jo")
        );
    }

    #[test]
    fn formats_sets_and_kind() {
        assert_eq!(sets(0), "0 sets");
        assert_eq!(sets(4), "4 sets");
        assert_eq!(kind_and_date(Some("Push"), "Jan 5, 2024"), "Push • Jan 5, 2024");
        assert_eq!(kind_and_date(Some(" "), "Jan 5, 2024"), "Jan 5, 2024");
        assert_eq!(kind_and_date(None, "Jan 5, 2024"), "Jan 5, 2024");
    }
}
