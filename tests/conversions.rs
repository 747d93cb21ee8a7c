use bikram_sambat::{
    BS_MAX_YEAR, BS_MIN_YEAR, BsDate, CalendarError, EPOCH_AD_DATE, EPOCH_BS_DATE, GregorianDate,
    NATIVE_DIGITS, Script, Weekday, advance, day_offset, days_in_month, epoch, format,
    from_native_digits, month_name, supported_years, to_ad, to_bs, to_native_digits, weekday_name,
};

fn ad(y: u16, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn bs(y: u16, m: u8, d: u8) -> BsDate {
    BsDate::new(y, m, d).unwrap()
}

/// Every Gregorian day covered by the table, in order.
fn covered_gregorian_days() -> impl Iterator<Item = GregorianDate> {
    let first = to_ad(BS_MIN_YEAR, 1, 1).unwrap().day_number();
    let last = to_ad(BS_MAX_YEAR, 12, days_in_month(BS_MAX_YEAR, 12).unwrap())
        .unwrap()
        .day_number();
    (first..=last).map(|jdn| GregorianDate::from_day_number(jdn).unwrap())
}

#[test]
fn round_trip_every_gregorian_day() {
    for d in covered_gregorian_days() {
        let converted = to_bs(d).unwrap();
        assert_eq!(converted.to_gregorian().unwrap(), d, "{d} -> {converted}");
    }
}

#[test]
fn inverse_round_trip_every_bs_day() {
    for year in supported_years() {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month).unwrap() {
                let gregorian = to_ad(year, month, day).unwrap();
                assert_eq!(to_bs(gregorian), Ok(bs(year, month, day)), "{gregorian}");
            }
        }
    }
}

#[test]
fn consecutive_gregorian_days_are_consecutive_bs_days() {
    let mut days = covered_gregorian_days();
    let mut prev = to_bs(days.next().unwrap()).unwrap();
    for d in days {
        let current = to_bs(d).unwrap();
        assert_eq!(day_offset(prev, current), 1, "{prev} -> {current}");
        prev = current;
    }
}

#[test]
fn month_lengths_step_to_next_month() {
    for year in supported_years() {
        for month in 1..=12u8 {
            let len = i64::from(days_in_month(year, month).unwrap());
            let next = advance(bs(year, month, 1), len);
            match (year, month) {
                (BS_MAX_YEAR, 12) => {
                    assert_eq!(next, Err(CalendarError::UnknownYear { year: BS_MAX_YEAR + 1 }));
                },
                (_, 12) => assert_eq!(next, Ok(bs(year + 1, 1, 1))),
                _ => assert_eq!(next, Ok(bs(year, month + 1, 1))),
            }
        }
    }
}

#[test]
fn epoch_is_a_fixed_point() {
    let (epoch_bs, epoch_ad) = epoch();
    assert_eq!(to_bs(epoch_ad), Ok(epoch_bs));
    assert_eq!(epoch_bs.to_gregorian(), Ok(epoch_ad));
}

#[test]
fn gregorian_boundaries_around_epoch() {
    let (_, epoch_ad) = epoch();
    let day_before = epoch_ad.add_days(-1).unwrap();
    assert_eq!(to_bs(day_before), Ok(bs(2080, 12, days_in_month(2080, 12).unwrap())));

    // A year and a day back lands on the last day of BS 2079
    let year_before = ad(2023, 4, 13);
    assert_eq!(to_bs(year_before), Ok(bs(2079, 12, days_in_month(2079, 12).unwrap())));
}

#[test]
fn errors_are_never_fabricated_values() {
    assert_eq!(days_in_month(2081, 13), Err(CalendarError::InvalidMonth { month: 13 }));
    assert_eq!(days_in_month(2200, 1), Err(CalendarError::UnknownYear { year: 2200 }));
    assert_eq!(
        to_ad(2081, 9, 30),
        Err(CalendarError::InvalidBsDate { year: 2081, month: 9, day: 30 })
    );
    assert_eq!(to_bs(ad(1900, 1, 1)), Err(CalendarError::UnknownYear { year: BS_MIN_YEAR - 1 }));
}

#[test]
fn out_of_range_months_are_invalid_bs_dates() {
    for month in [0u8, 13, 255] {
        assert_eq!(
            to_ad(2082, month, 1),
            Err(CalendarError::InvalidBsDate { year: 2082, month, day: 1 })
        );
        assert_eq!(days_in_month(2082, month), Err(CalendarError::InvalidMonth { month }));
    }
}

#[test]
fn epoch_constants_agree() {
    assert_eq!(epoch(), (EPOCH_BS_DATE, EPOCH_AD_DATE));
    assert_eq!(EPOCH_AD_DATE, ad(2024, 4, 13));
    assert_eq!(EPOCH_BS_DATE, bs(2081, 1, 1));
}

#[test]
fn gregorian_extremes_do_not_panic() {
    assert!(GregorianDate::from_day_number(i64::MAX).is_err());
    assert!(GregorianDate::from_day_number(i64::MIN).is_err());
    assert!(EPOCH_AD_DATE.add_days(i64::MAX).is_err());
    assert!(EPOCH_AD_DATE.add_days(i64::MIN).is_err());
}

#[test]
fn presentation_helpers_at_crate_root() {
    assert_eq!(month_name(10, Script::Latin), Some("Magh"));
    assert_eq!(month_name(10, Script::Devanagari), Some("माघ"));
    assert_eq!(weekday_name(Weekday::Saturday, Script::Devanagari), "शनिबार");
    assert_eq!(NATIVE_DIGITS[8], '८');
    assert_eq!(to_native_digits("2082"), "२०८२");
    assert_eq!(from_native_digits("२०८२"), "2082");
}

#[test]
fn formatter_renders_magh_2082() {
    let date = bs(2082, 10, 1);
    let native = format(&date, true);
    assert_eq!(native, "१ माघ २०८२");
    assert!(native.chars().all(|c| !c.is_ascii_digit()));
    assert_eq!(format(&date, false), "1 Magh 2082");
}
