use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use spei_series::{
    Anchor, DatetimeIndex, FixedUnit, Frequency, Index, infer_frequency, validate_index,
};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn daily_range_over_leap_day() {
    let idx: DatetimeIndex = (0..60).map(|i| at(2020, 2, 1) + Duration::days(i)).collect();
    assert_eq!(
        infer_frequency(&idx),
        Frequency::Fixed {
            count: 1,
            unit: FixedUnit::Day,
        }
    );
}

#[test]
fn month_end_range_over_several_years() {
    // Last day of each month, 2019-01 through 2021-12.
    let idx: DatetimeIndex = (0..36)
        .map(|i| {
            let (y, m) = (2019 + i / 12, (i % 12) as u32 + 1);
            let first_of_next = if m == 12 {
                NaiveDate::from_ymd_opt(y + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(y, m + 1, 1)
            };
            first_of_next
                .unwrap()
                .pred_opt()
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        })
        .collect();
    assert_eq!(infer_frequency(&idx), Frequency::MONTHLY);
}

#[test]
fn month_start_labels_after_coercion() {
    let idx = validate_index(&Index::from(vec![
        "2000-01-01",
        "2000-02-01",
        "2000-03-01",
        "2000-04-01",
    ]))
    .unwrap();
    assert_eq!(
        infer_frequency(&idx),
        Frequency::Monthly {
            count: 1,
            anchor: Anchor::Start,
        }
    );
}

#[test]
fn every_other_month_start() {
    let idx: DatetimeIndex = [1, 3, 5, 7].iter().map(|&m| at(2000, m, 1)).collect();
    assert_eq!(infer_frequency(&idx).label(), "2MS");
}

#[test]
fn weekly_on_wednesday() {
    // 2020-01-01 is a Wednesday
    let idx: DatetimeIndex = (0..8).map(|i| at(2020, 1, 1) + Duration::weeks(i)).collect();
    assert_eq!(
        infer_frequency(&idx),
        Frequency::Weekly {
            count: 1,
            weekday: Weekday::Wed,
        }
    );
    assert_eq!(infer_frequency(&idx).label(), "W-WED");
}

#[test]
fn six_hourly() {
    let idx: DatetimeIndex = (0..12).map(|i| at(2020, 1, 1) + Duration::hours(6 * i)).collect();
    assert_eq!(infer_frequency(&idx).label(), "6H");
}

#[test]
fn seconds_and_millis() {
    let idx: DatetimeIndex = (0..5).map(|i| at(2020, 1, 1) + Duration::seconds(30 * i)).collect();
    assert_eq!(infer_frequency(&idx).label(), "30S");
    let idx: DatetimeIndex = (0..5)
        .map(|i| at(2020, 1, 1) + Duration::milliseconds(250 * i))
        .collect();
    assert_eq!(infer_frequency(&idx).label(), "250L");
}

#[test]
fn decadal_year_ends() {
    let idx: DatetimeIndex = [1990, 2000, 2010, 2020].iter().map(|&y| at(y, 12, 31)).collect();
    assert_eq!(
        infer_frequency(&idx),
        Frequency::Annual {
            count: 10,
            anchor: Anchor::End,
            month: 12,
        }
    );
    assert_eq!(infer_frequency(&idx).label(), "10A-DEC");
}

#[test]
fn irregular_dates_fall_back_to_month_end() {
    let idx: DatetimeIndex = vec![at(2020, 1, 1), at(2020, 1, 3), at(2020, 2, 17), at(2021, 6, 1)].into();
    assert_eq!(infer_frequency(&idx), Frequency::MONTHLY);
}

#[test]
fn empty_and_single_entry_fall_back() {
    assert_eq!(infer_frequency(&DatetimeIndex::default()), Frequency::MONTHLY);
    assert_eq!(infer_frequency(&vec![at(2020, 1, 1)].into()), Frequency::MONTHLY);
}

#[test]
fn duplicate_stamps_fall_back() {
    let idx: DatetimeIndex = vec![at(2020, 1, 1), at(2020, 1, 1), at(2020, 1, 2)].into();
    assert_eq!(infer_frequency(&idx), Frequency::MONTHLY);
}

#[test]
fn default_frequency_is_monthly() {
    assert_eq!(Frequency::default(), Frequency::MONTHLY);
}
