use chrono::{Datelike, NaiveDate};

/// Whole years elapsed from `birthdate` to `reference_date`.
///
/// One year is subtracted while `(month, day)` of the reference date is
/// still before the birthday. A birthday falling on the reference date
/// counts as reached. A 29 February birthday is reached on 1 March in
/// non-leap years.
pub fn calculate_age(birthdate: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut years = reference_date.year() - birthdate.year();
    if (reference_date.month(), reference_date.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_on_reference_date() {
        assert_eq!(calculate_age(date(1990, 1, 1), date(2024, 1, 1)), 34);
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        assert_eq!(calculate_age(date(1990, 1, 1), date(2023, 12, 31)), 33);
    }

    #[test]
    fn test_same_month_compares_day() {
        let birth = date(1985, 6, 20);
        assert_eq!(calculate_age(birth, date(2024, 6, 19)), 38);
        assert_eq!(calculate_age(birth, date(2024, 6, 20)), 39);
        assert_eq!(calculate_age(birth, date(2024, 6, 21)), 39);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);
        assert_eq!(calculate_age(birth, date(2023, 2, 28)), 22);
        assert_eq!(calculate_age(birth, date(2023, 3, 1)), 23);
        assert_eq!(calculate_age(birth, date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_reference_before_birth_goes_negative() {
        assert_eq!(calculate_age(date(2030, 5, 1), date(2024, 6, 15)), -6);
    }
}
