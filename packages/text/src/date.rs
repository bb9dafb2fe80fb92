//! Date formatting with `{...}` placeholders.

use crate::{fill_template, pad_left, TextError};

/// Calendar and clock fields of a local date-time.
///
/// `month` runs 1..=12 and `weekday` 0..=6 starting from Sunday.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateTimeParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub weekday: u32,
}

impl DateTimeParts {
    /// Midnight on the given day, with the weekday filled in.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        DateTimeParts {
            year,
            month,
            day,
            weekday: weekday(year, month, day),
            ..Default::default()
        }
    }

    /// The same day at the given time.
    #[must_use]
    pub fn at(self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        DateTimeParts {
            hour,
            minute,
            second,
            millisecond,
            ..self
        }
    }
}

/// Day of the week for a proleptic Gregorian date, 0 being Sunday.
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = month.clamp(1, 12);
    let year = i64::from(year) - i64::from(month < 3);
    let offset = OFFSETS[(month - 1) as usize];
    let days = year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
        + offset
        + i64::from(day);
    days.rem_euclid(7) as u32
}

/// Month and weekday names used by `{MMM}` and `{wd}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateNames {
    /// January first.
    pub months: Vec<String>,
    /// Sunday first.
    pub weekdays: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for DateNames {
    fn default() -> Self {
        DateNames {
            months: owned(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            weekdays: owned(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }
}

fn name(names: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| names.get(i))
        .map_or("", String::as_str)
}

/// Render `parts` through `template`.
///
/// | Placeholder | Field |
/// |---|---|
/// | `{Y}` / `{YYYY}` | year / zero-padded to 4 |
/// | `{M}` / `{MM}` / `{MMM}` | month / padded to 2 / name |
/// | `{D}` / `{DD}` | day / padded to 2 |
/// | `{h}` / `{hh}` | hour / padded to 2 |
/// | `{m}` / `{mm}` | minute / padded to 2 |
/// | `{s}` / `{ss}` | second / padded to 2 |
/// | `{ms}` / `{0ms}` | millisecond / padded to 3 |
/// | `{wd}` | weekday name |
///
/// Out-of-range months and weekdays render empty names.
///
/// ```rust
/// use kitbag_text::{format_date, DateNames, DateTimeParts};
///
/// let parts = DateTimeParts::date(2024, 3, 9).at(7, 5, 0, 42);
/// let text = format_date(&parts, "{wd} {MMM} {D}, {YYYY} {hh}:{mm}.{0ms}", &DateNames::default());
/// assert_eq!(text.unwrap(), "Sat Mar 9, 2024 07:05.042");
/// ```
pub fn format_date(
    parts: &DateTimeParts,
    template: &str,
    names: &DateNames,
) -> Result<String, TextError> {
    let two = |n: u32| pad_left(&n.to_string(), 2, '0');
    let month_index = (parts.month as usize).checked_sub(1);

    let replacements = [
        ("{Y}", parts.year.to_string()),
        ("{YYYY}", pad_left(&parts.year.to_string(), 4, '0')),
        ("{M}", parts.month.to_string()),
        ("{MM}", two(parts.month)),
        ("{MMM}", name(&names.months, month_index).to_string()),
        ("{D}", parts.day.to_string()),
        ("{DD}", two(parts.day)),
        ("{h}", parts.hour.to_string()),
        ("{hh}", two(parts.hour)),
        ("{m}", parts.minute.to_string()),
        ("{mm}", two(parts.minute)),
        ("{s}", parts.second.to_string()),
        ("{ss}", two(parts.second)),
        ("{ms}", parts.millisecond.to_string()),
        ("{0ms}", pad_left(&parts.millisecond.to_string(), 3, '0')),
        (
            "{wd}",
            name(&names.weekdays, Some(parts.weekday as usize)).to_string(),
        ),
    ];
    fill_template(template, replacements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTimeParts {
        DateTimeParts::date(2023, 1, 5).at(9, 3, 7, 8)
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(weekday(1970, 1, 1), 4);
        assert_eq!(weekday(2000, 2, 29), 2);
        assert_eq!(weekday(2023, 1, 5), 4);
        assert_eq!(weekday(2024, 12, 25), 3);
        assert_eq!(weekday(1600, 3, 1), 3);
    }

    #[test]
    fn numeric_placeholders() {
        let text = format_date(&sample(), "{Y}-{M}-{D} {h}:{m}:{s}.{ms}", &DateNames::default());
        assert_eq!(text.unwrap(), "2023-1-5 9:3:7.8");
    }

    #[test]
    fn padded_placeholders() {
        let text = format_date(
            &sample(),
            "{YYYY}-{MM}-{DD} {hh}:{mm}:{ss}.{0ms}",
            &DateNames::default(),
        );
        assert_eq!(text.unwrap(), "2023-01-05 09:03:07.008");
    }

    #[test]
    fn short_years_pad_to_four() {
        let parts = DateTimeParts::date(42, 6, 1);
        let text = format_date(&parts, "{YYYY}/{Y}", &DateNames::default()).unwrap();
        assert_eq!(text, "0042/42");
    }

    #[test]
    fn names_use_defaults() {
        let text = format_date(&sample(), "{wd}, {MMM}", &DateNames::default());
        assert_eq!(text.unwrap(), "Thu, Jan");
    }

    #[test]
    fn custom_names() {
        let names = DateNames {
            months: (1..=12).map(|m| format!("month{}", m)).collect(),
            weekdays: vec!["sun".into(), "mon".into(), "tue".into(), "wed".into(), "thu".into()],
        };
        let text = format_date(&sample(), "{wd} {MMM}", &names).unwrap();
        assert_eq!(text, "thu month1");
    }

    #[test]
    fn out_of_range_names_are_empty() {
        let parts = DateTimeParts {
            month: 0,
            weekday: 9,
            ..sample()
        };
        let text = format_date(&parts, "[{MMM}][{wd}]", &DateNames::default()).unwrap();
        assert_eq!(text, "[][]");
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        let text = format_date(&sample(), "{Q} {D}", &DateNames::default()).unwrap();
        assert_eq!(text, "{Q} 5");
    }
}
