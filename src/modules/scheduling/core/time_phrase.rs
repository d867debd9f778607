// Turns a free-text time phrase into an absolute UTC instant.
//
// Accepted shapes
// - Absolute: RFC 3339, "YYYY-MM-DD HH:MM[:SS]" with an optional " UTC" or "+HHMM" suffix.
// - Relative: "now", "in 2h30m", "in 1 day and 3 hours".
// - Day and time of day in either order: "tomorrow 18:00", "6pm friday", "next monday at noon",
//   "2026-10-20 6:30pm". A day alone means midnight, a time alone means today.
//
// Boundaries
// - Pure. The caller supplies "now" and decides what an instant in the past means.

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc, Weekday,
};
use regex::Regex;
use std::sync::LazyLock;

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?(?::(\d{2}))?(am|pm)?$").expect("valid time of day pattern")
});

static OFFSET_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+)\s*(weeks|week|w|days|day|d|hours|hour|hrs|hr|h|minutes|minute|mins|min|m|seconds|second|secs|sec|s)",
    )
    .expect("valid offset pattern")
});

pub fn parse_time_phrase(phrase: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return None;
    }
    if let Some(instant) = parse_absolute(phrase) {
        return Some(instant);
    }

    let lowered = phrase.to_ascii_lowercase();
    if lowered == "now" {
        return Some(now);
    }
    if let Some(offset) = lowered.strip_prefix("in ") {
        return now.checked_add_signed(parse_offset(offset)?);
    }
    parse_day_and_time(&lowered, now)
}

fn parse_absolute(phrase: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(phrase) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"] {
        if let Ok(instant) = DateTime::parse_from_str(phrase, format) {
            return Some(instant.with_timezone(&Utc));
        }
    }

    let naive = phrase
        .strip_suffix(" UTC")
        .or_else(|| phrase.strip_suffix(" utc"))
        .unwrap_or(phrase);
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|datetime| Utc.from_utc_datetime(&datetime))
}

fn parse_offset(text: &str) -> Option<TimeDelta> {
    let mut total = TimeDelta::zero();
    let mut cursor = 0;
    let mut found = false;

    for capture in OFFSET_TERM.captures_iter(text) {
        let term = capture.get(0)?;
        if !is_filler(&text[cursor..term.start()]) {
            return None;
        }
        cursor = term.end();

        let value: i64 = capture[1].parse().ok()?;
        let delta = match capture[2].as_bytes()[0] {
            b'w' => TimeDelta::try_weeks(value)?,
            b'd' => TimeDelta::try_days(value)?,
            b'h' => TimeDelta::try_hours(value)?,
            b'm' => TimeDelta::try_minutes(value)?,
            _ => TimeDelta::try_seconds(value)?,
        };
        total = total.checked_add(&delta)?;
        found = true;
    }

    (found && is_filler(&text[cursor..])).then_some(total)
}

fn is_filler(text: &str) -> bool {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .all(|word| word.is_empty() || word == "and")
}

fn parse_day_and_time(lowered: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .filter(|token| !matches!(*token, "at" | "on"))
        .collect();
    if tokens.is_empty() {
        return None;
    }
    let today = now.date_naive();

    let (day, time_tokens) = if let Some((day, used)) = parse_day(&tokens, today) {
        (Some(day), &tokens[used..])
    } else if let Some((day, used)) = parse_trailing_day(&tokens, today) {
        (Some(day), &tokens[..tokens.len() - used])
    } else {
        (None, &tokens[..])
    };

    let time = match time_tokens {
        [] => NaiveTime::MIN,
        [clock] => parse_time_of_day(clock)?,
        [clock, meridiem @ ("am" | "pm")] => parse_time_of_day(&format!("{clock}{meridiem}"))?,
        _ => return None,
    };
    let date = day.unwrap_or(today);
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Day named by the leading tokens, and how many tokens it took.
fn parse_day(tokens: &[&str], today: NaiveDate) -> Option<(NaiveDate, usize)> {
    match tokens {
        ["next", name, ..] => {
            let weekday = name.parse::<Weekday>().ok()?;
            Some((upcoming(today, weekday, 1), 2))
        }
        ["today", ..] => Some((today, 1)),
        ["tomorrow", ..] => Some((today.succ_opt()?, 1)),
        [token, ..] => {
            if let Ok(weekday) = token.parse::<Weekday>() {
                return Some((upcoming(today, weekday, 0), 1));
            }
            NaiveDate::parse_from_str(token, "%Y-%m-%d")
                .ok()
                .map(|date| (date, 1))
        }
        [] => None,
    }
}

fn parse_trailing_day(tokens: &[&str], today: NaiveDate) -> Option<(NaiveDate, usize)> {
    [2, 1].into_iter().find_map(|width| {
        let start = tokens.len().checked_sub(width)?;
        match parse_day(&tokens[start..], today) {
            Some((day, used)) if used == width => Some((day, width)),
            _ => None,
        }
    })
}

/// First date on or after `today + min_days_ahead` that falls on `weekday`.
fn upcoming(today: NaiveDate, weekday: Weekday, min_days_ahead: u32) -> NaiveDate {
    let current = today.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let mut ahead = (target + 7 - current) % 7;
    if ahead < min_days_ahead {
        ahead += 7;
    }
    today + TimeDelta::days(i64::from(ahead))
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    match text {
        "noon" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return Some(NaiveTime::MIN),
        _ => {}
    }

    let capture = TIME_OF_DAY.captures(text)?;
    let hour: u32 = capture[1].parse().ok()?;
    let minute: u32 = match capture.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let second: u32 = match capture.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    let hour = match capture.get(4).map(|m| m.as_str()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            (hour % 12) + if meridiem == "pm" { 12 } else { 0 }
        }
        // a bare number such as "18" could be a date, an hour or a duration
        None if capture.get(2).is_none() => return None,
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

#[cfg(test)]
mod time_phrase_tests {
    use super::*;
    use crate::tests::fixtures::events::fixed_now;
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    // fixed_now() is Monday 2026-10-19 12:00:00 UTC
    #[rstest]
    #[case("2026-10-20T18:00:00Z", at(2026, 10, 20, 18, 0))]
    #[case("2026-10-20T20:00:00+02:00", at(2026, 10, 20, 18, 0))]
    #[case("2026-10-20 18:00", at(2026, 10, 20, 18, 0))]
    #[case("2026-10-20 18:00:00 +0000", at(2026, 10, 20, 18, 0))]
    #[case("2026-10-20 18:00:00 UTC", at(2026, 10, 20, 18, 0))]
    #[case("2026-10-20", at(2026, 10, 20, 0, 0))]
    #[case("2026-10-20 6:30pm", at(2026, 10, 20, 18, 30))]
    #[case("now", at(2026, 10, 19, 12, 0))]
    #[case("in 2h30m", at(2026, 10, 19, 14, 30))]
    #[case("in 90 minutes", at(2026, 10, 19, 13, 30))]
    #[case("in 1 day and 3 hours", at(2026, 10, 20, 15, 0))]
    #[case("In 1w", at(2026, 10, 26, 12, 0))]
    #[case("tomorrow 18:00", at(2026, 10, 20, 18, 0))]
    #[case("Tomorrow at 6pm", at(2026, 10, 20, 18, 0))]
    #[case("6 pm tomorrow", at(2026, 10, 20, 18, 0))]
    #[case("6:30 pm", at(2026, 10, 19, 18, 30))]
    #[case("tomorrow", at(2026, 10, 20, 0, 0))]
    #[case("18:30", at(2026, 10, 19, 18, 30))]
    #[case("noon", at(2026, 10, 19, 12, 0))]
    #[case("12am", at(2026, 10, 19, 0, 0))]
    #[case("friday 8pm", at(2026, 10, 23, 20, 0))]
    #[case("monday 13:00", at(2026, 10, 19, 13, 0))]
    #[case("next monday", at(2026, 10, 26, 0, 0))]
    #[case("9:15am on next fri", at(2026, 10, 23, 9, 15))]
    fn it_should_understand_the_phrase(#[case] phrase: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(parse_time_phrase(phrase, fixed_now()), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("whenever")]
    #[case("in")]
    #[case("in 5 months")]
    #[case("in soon")]
    #[case("25:00")]
    #[case("13pm")]
    #[case("18")]
    #[case("tomorrow maybe")]
    #[case("2026-13-40")]
    #[case("tomorrow 1 8:00")]
    #[case("today 1 2pm")]
    #[case("friday 1 1am")]
    #[case("6 30 pm")]
    fn it_should_not_understand_the_phrase(#[case] phrase: &str) {
        assert_eq!(parse_time_phrase(phrase, fixed_now()), None);
    }

    #[rstest]
    fn it_should_return_past_instants_unchanged() {
        let parsed = parse_time_phrase("2020-01-01 00:00", fixed_now());
        assert_eq!(parsed, Some(at(2020, 1, 1, 0, 0)));
    }
}
