//! Sampling-cadence detection for temporal indexes.
//!
//! Labels follow the pandas offset aliases (`D`, `H`, `W-SUN`, `M`, `MS`,
//! `Q-DEC`, `A-DEC`, ...), so they can be handed to tools that expect them.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::info;

use crate::index::DatetimeIndex;

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Fixed-length sub-weekly units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedUnit {
    /// Calendar day (`D`).
    Day,
    /// Hour (`H`).
    Hour,
    /// Minute (`T`).
    Minute,
    /// Second (`S`).
    Second,
    /// Millisecond (`L`).
    Milli,
    /// Microsecond (`U`).
    Micro,
    /// Nanosecond (`N`).
    Nano,
}

impl FixedUnit {
    const ALL: [FixedUnit; 7] = [
        FixedUnit::Day,
        FixedUnit::Hour,
        FixedUnit::Minute,
        FixedUnit::Second,
        FixedUnit::Milli,
        FixedUnit::Micro,
        FixedUnit::Nano,
    ];

    /// Length of one unit in nanoseconds.
    pub fn nanos(self) -> i64 {
        match self {
            FixedUnit::Day => NANOS_PER_DAY,
            FixedUnit::Hour => 3_600 * 1_000_000_000,
            FixedUnit::Minute => 60 * 1_000_000_000,
            FixedUnit::Second => 1_000_000_000,
            FixedUnit::Milli => 1_000_000,
            FixedUnit::Micro => 1_000,
            FixedUnit::Nano => 1,
        }
    }

    fn alias(self) -> &'static str {
        match self {
            FixedUnit::Day => "D",
            FixedUnit::Hour => "H",
            FixedUnit::Minute => "T",
            FixedUnit::Second => "S",
            FixedUnit::Milli => "L",
            FixedUnit::Micro => "U",
            FixedUnit::Nano => "N",
        }
    }
}

/// Whether calendar-based periods are stamped at their first or last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// First day of the period.
    Start,
    /// Last day of the period.
    End,
}

/// A detected sampling cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Constant spacing of `count` units.
    Fixed {
        /// Number of units between entries.
        count: i64,
        /// The unit.
        unit: FixedUnit,
    },
    /// Every `count` weeks on `weekday`.
    Weekly {
        /// Number of weeks between entries.
        count: i64,
        /// Weekday of every entry.
        weekday: Weekday,
    },
    /// Every `count` months.
    Monthly {
        /// Number of months between entries.
        count: u32,
        /// Start or end of month.
        anchor: Anchor,
    },
    /// Every `count` quarters.
    Quarterly {
        /// Number of quarters between entries.
        count: u32,
        /// Start or end of quarter.
        anchor: Anchor,
        /// Month (1..=12) naming the quarter convention, e.g. 12 for `Q-DEC`.
        month: u32,
    },
    /// Every `count` years.
    Annual {
        /// Number of years between entries.
        count: u32,
        /// Start or end of year.
        anchor: Anchor,
        /// Month (1..=12) on which the year starts or ends.
        month: u32,
    },
}

impl Frequency {
    /// Month-end cadence, the fallback of [`infer_frequency`].
    pub const MONTHLY: Frequency = Frequency::Monthly {
        count: 1,
        anchor: Anchor::End,
    };

    /// Returns the alias string, e.g. `"D"` or `"A-DEC"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::MONTHLY
    }
}

fn month_abbrev(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    NAMES[((month + 11) % 12) as usize]
}

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

fn write_count<C: PartialOrd + From<u8> + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    count: C,
) -> fmt::Result {
    if count > C::from(1) {
        write!(f, "{count}")?;
    }
    Ok(())
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Frequency::Fixed { count, unit } => {
                write_count(f, count)?;
                f.write_str(unit.alias())
            }
            Frequency::Weekly { count, weekday } => {
                write_count(f, count)?;
                write!(f, "W-{}", weekday_abbrev(weekday))
            }
            Frequency::Monthly { count, anchor } => {
                write_count(f, count)?;
                f.write_str(match anchor {
                    Anchor::Start => "MS",
                    Anchor::End => "M",
                })
            }
            Frequency::Quarterly {
                count,
                anchor,
                month,
            } => {
                write_count(f, count)?;
                let prefix = match anchor {
                    Anchor::Start => "QS",
                    Anchor::End => "Q",
                };
                write!(f, "{prefix}-{}", month_abbrev(month))
            }
            Frequency::Annual {
                count,
                anchor,
                month,
            } => {
                write_count(f, count)?;
                let prefix = match anchor {
                    Anchor::Start => "AS",
                    Anchor::End => "A",
                };
                write!(f, "{prefix}-{}", month_abbrev(month))
            }
        }
    }
}

/// Infers the sampling cadence of `index`.
///
/// Requires at least three strictly increasing entries. Calendar cadences
/// (annual, quarterly, monthly) are tried before fixed spacing so that,
/// for example, yearly 1 January stamps read as `AS-JAN` rather than
/// `365D`. When nothing regular is found the month-end cadence is returned
/// and an info message is logged.
pub fn infer_frequency(index: &DatetimeIndex) -> Frequency {
    match detect(index.as_slice()) {
        Some(freq) => freq,
        None => {
            info!("Could not infer frequency from index, using monthly frequency");
            Frequency::MONTHLY
        }
    }
}

fn detect(dates: &[NaiveDateTime]) -> Option<Frequency> {
    if dates.len() < 3 {
        return None;
    }
    let deltas = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_nanoseconds())
        .collect::<Option<Vec<i64>>>()?;
    if deltas.iter().any(|&d| d <= 0) {
        return None;
    }
    let unique_delta = deltas.iter().all(|&d| d == deltas[0]).then_some(deltas[0]);

    match unique_delta {
        Some(delta) if delta % NANOS_PER_DAY != 0 => Some(fixed(delta)),
        _ => calendar(dates).or_else(|| unique_delta.map(|delta| daily(delta, dates[0]))),
    }
}

fn fixed(delta: i64) -> Frequency {
    let unit = FixedUnit::ALL
        .into_iter()
        .find(|u| delta % u.nanos() == 0)
        .unwrap_or(FixedUnit::Nano);
    Frequency::Fixed {
        count: delta / unit.nanos(),
        unit,
    }
}

fn daily(delta: i64, first: NaiveDateTime) -> Frequency {
    let week = 7 * NANOS_PER_DAY;
    if delta % week == 0 {
        Frequency::Weekly {
            count: delta / week,
            weekday: first.weekday(),
        }
    } else {
        fixed(delta)
    }
}

fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

fn calendar(dates: &[NaiveDateTime]) -> Option<Frequency> {
    let time = dates[0].time();
    if dates.iter().any(|d| d.time() != time) {
        return None;
    }

    let ordinals: Vec<i64> = dates
        .iter()
        .map(|d| i64::from(d.year()) * 12 + i64::from(d.month0()))
        .collect();
    let step = ordinals[1] - ordinals[0];
    if step <= 0 || ordinals.windows(2).any(|w| w[1] - w[0] != step) {
        return None;
    }

    let anchor = if dates.iter().all(|d| d.day() == 1) {
        Anchor::Start
    } else if dates.iter().all(|d| is_month_end(d.date())) {
        Anchor::End
    } else {
        return None;
    };

    let step = u32::try_from(step).ok()?;
    let month = dates[0].month();
    Some(if step % 12 == 0 {
        Frequency::Annual {
            count: step / 12,
            anchor,
            month,
        }
    } else if step % 3 == 0 {
        // Name the quarter convention by its last (Q) or first (QS) month.
        let month = match (anchor, month % 3) {
            (Anchor::End, 0) => 12,
            (Anchor::End, r) => 9 + r,
            (Anchor::Start, 0) => 3,
            (Anchor::Start, r) => r,
        };
        Frequency::Quarterly {
            count: step / 3,
            anchor,
            month,
        }
    } else {
        Frequency::Monthly {
            count: step,
            anchor,
        }
    })
}
