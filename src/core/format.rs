//! Date and geography formatting for chart chrome.

use chrono::{Local, NaiveDate};

const GEO_NAMES: [(&str, &str); 11] = [
    ("", "WORLDWIDE"),
    ("US", "UNITED STATES"),
    ("GB", "UNITED KINGDOM"),
    ("CA", "CANADA"),
    ("AU", "AUSTRALIA"),
    ("DE", "GERMANY"),
    ("FR", "FRANCE"),
    ("JP", "JAPAN"),
    ("IN", "INDIA"),
    ("BR", "BRAZIL"),
    ("MX", "MEXICO"),
];

/// `2021-11-14` → `Nov 14, 2021`
#[must_use]
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%b %d, %Y").to_string()
}

/// First and last date → `Feb 2021 – Feb 2026`; empty input gives `""`.
#[must_use]
pub fn fmt_date_range(dates: &[NaiveDate]) -> String {
    match (dates.first(), dates.last()) {
        (Some(start), Some(end)) => {
            format!("{} – {}", start.format("%b %Y"), end.format("%b %Y"))
        }
        _ => String::new(),
    }
}

/// `us` → `UNITED STATES`; unknown codes are echoed upper-cased.
#[must_use]
pub fn fmt_geo(geo: &str) -> String {
    let code = geo.trim().to_ascii_uppercase();
    GEO_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| (*name).to_owned())
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn formats_dates() {
        assert_eq!(fmt_date(d(2021, 11, 14)), "Nov 14, 2021");
        assert_eq!(
            fmt_date_range(&[d(2021, 2, 7), d(2023, 1, 1), d(2026, 2, 1)]),
            "Feb 2021 – Feb 2026"
        );
        assert_eq!(fmt_date_range(&[]), "");
    }

    #[test]
    fn geo_names() {
        assert_eq!(fmt_geo("us"), "UNITED STATES");
        assert_eq!(fmt_geo(""), "WORLDWIDE");
        assert_eq!(fmt_geo("nz"), "NZ");
    }
}
