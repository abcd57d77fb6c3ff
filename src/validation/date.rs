use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Converts a `D/M/Y` date as printed on the card to `Y-MM-DD`.
/// Strings that are not in slash form are returned unchanged.
pub fn iso_date_of_birth(dob: &str) -> String {
    if !dob.contains('/') {
        return dob.to_string();
    }
    let parts: Vec<&str> = dob.split('/').collect();
    match parts.as_slice() {
        [day, month, year] => format!("{}-{:0>2}-{:0>2}", year, month, day),
        _ => dob.to_string(),
    }
}

/// True when `date` is `YYYY-MM-DD` and names a real calendar day.
pub fn is_valid_iso_date(date: &str) -> bool {
    ISO_DATE.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
