//! Row index types: arbitrary labels or timestamps.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A single non-temporal index label.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// Integer label. Coerced as nanoseconds since the Unix epoch.
    Int(i64),
    /// Floating-point label. Coerced as nanoseconds since the Unix epoch.
    Float(f64),
    /// Free text label. Coerced by trying a list of common date formats.
    Text(String),
}

impl Label {
    /// Best-effort conversion to a timestamp. Returns `None` when the label
    /// cannot be interpreted.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Label::Int(ns) => Some(DateTime::from_timestamp_nanos(*ns).naive_utc()),
            Label::Float(ns) => {
                if !ns.is_finite() || *ns < i64::MIN as f64 || *ns > i64::MAX as f64 {
                    return None;
                }
                Some(DateTime::from_timestamp_nanos(*ns as i64).naive_utc())
            }
            Label::Text(s) => parse_datetime(s),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{v}"),
            Label::Float(v) => write!(f, "{v}"),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<f64> for Label {
    fn from(v: f64) -> Self {
        Label::Float(v)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Text(v.to_string())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Text(v)
    }
}

/// Formats with a time component, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-only formats, tried in order after [`DATETIME_FORMATS`].
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Parses a timestamp from free text.
///
/// Accepts RFC 3339 (converted to UTC), the formats in [`DATETIME_FORMATS`]
/// and [`DATE_FORMATS`], `YYYY-MM` (first of the month) and `YYYY`
/// (1 January).
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0);
    }
    None
}

/// An ordered sequence of timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DatetimeIndex(Vec<NaiveDateTime>);

impl DatetimeIndex {
    /// Wraps a vector of timestamps.
    pub fn new(dates: Vec<NaiveDateTime>) -> Self {
        Self(dates)
    }

    /// Returns the timestamps as a slice.
    pub fn as_slice(&self) -> &[NaiveDateTime] {
        &self.0
    }

    /// Consumes the index and returns the timestamps.
    pub fn into_inner(self) -> Vec<NaiveDateTime> {
        self.0
    }

    /// Returns the number of timestamps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the index holds no timestamps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the timestamps.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDateTime> {
        self.0.iter()
    }
}

impl AsRef<[NaiveDateTime]> for DatetimeIndex {
    fn as_ref(&self) -> &[NaiveDateTime] {
        &self.0
    }
}

impl From<Vec<NaiveDateTime>> for DatetimeIndex {
    fn from(dates: Vec<NaiveDateTime>) -> Self {
        Self(dates)
    }
}

impl FromIterator<NaiveDateTime> for DatetimeIndex {
    fn from_iter<I: IntoIterator<Item = NaiveDateTime>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DatetimeIndex {
    type Item = &'a NaiveDateTime;
    type IntoIter = std::slice::Iter<'a, NaiveDateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Row index of a [`Series`](crate::Series) or [`Frame`](crate::Frame).
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    /// A proper temporal index.
    Datetime(DatetimeIndex),
    /// Arbitrary labels that may still be coercible to timestamps.
    Labels(Vec<Label>),
}

impl Index {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            Index::Datetime(d) => d.len(),
            Index::Labels(l) => l.len(),
        }
    }

    /// Returns `true` if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the temporal index, if this is one.
    pub fn as_datetime(&self) -> Option<&DatetimeIndex> {
        match self {
            Index::Datetime(d) => Some(d),
            Index::Labels(_) => None,
        }
    }

    /// Short description of the index type, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Index::Datetime(_) => "DatetimeIndex",
            Index::Labels(labels) => {
                if labels.iter().all(|l| matches!(l, Label::Int(_))) {
                    "Index[int64]"
                } else if labels.iter().all(|l| matches!(l, Label::Float(_))) {
                    "Index[float64]"
                } else {
                    "Index[object]"
                }
            }
        }
    }
}

impl From<DatetimeIndex> for Index {
    fn from(d: DatetimeIndex) -> Self {
        Index::Datetime(d)
    }
}

impl From<Vec<NaiveDateTime>> for Index {
    fn from(d: Vec<NaiveDateTime>) -> Self {
        Index::Datetime(DatetimeIndex(d))
    }
}

impl From<Vec<Label>> for Index {
    fn from(l: Vec<Label>) -> Self {
        Index::Labels(l)
    }
}

impl From<Vec<i64>> for Index {
    fn from(v: Vec<i64>) -> Self {
        Index::Labels(v.into_iter().map(Label::Int).collect())
    }
}

impl From<Vec<&str>> for Index {
    fn from(v: Vec<&str>) -> Self {
        Index::Labels(v.into_iter().map(Label::from).collect())
    }
}
