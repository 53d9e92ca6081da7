use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// One day's row from the yearly timetable, carried verbatim from the
/// JSON document. Times are pre-formatted "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PrayerDay {
    /// Day of month, 1-based.
    pub date: u32,
    pub sehri_end: String,
    pub sunrise: String,
    pub dhuhr_begins: String,
    pub dhuhr_jamaat: String,
    pub asr_begins: String,
    pub asr_jamaat: String,
    pub maghrib: String,
    pub isha_begins: String,
    pub isha_jamaat: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct TimetableMetadata {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub source: String,
}

/// data/prayer-times-2025.json: a metadata block plus twelve
/// month-name-keyed day arrays at the top level.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Timetable {
    #[serde(default)]
    pub metadata: TimetableMetadata,
    #[serde(flatten)]
    pub months: HashMap<String, Vec<PrayerDay>>,
}

const MONTH_KEYS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Lowercase month-name key for a 1-based month index.
pub fn month_key(month: u32) -> Option<&'static str> {
    MONTH_KEYS.get(month as usize - 1).copied()
}

impl Timetable {
    /// The month array a date falls in, if the document carries it.
    pub fn month_for_date(&self, date: NaiveDate) -> Option<&[PrayerDay]> {
        self.months.get(month_key(date.month())?).map(Vec::as_slice)
    }

    /// Linear search of the month's day array for the day-of-month.
    pub fn times_for_date(&self, date: NaiveDate) -> Option<&PrayerDay> {
        self.month_for_date(date)?
            .iter()
            .find(|d| d.date == date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> PrayerDay {
        PrayerDay {
            date: n,
            sehri_end: "04:32".to_string(),
            sunrise: "06:10".to_string(),
            dhuhr_begins: "12:15".to_string(),
            dhuhr_jamaat: "13:00".to_string(),
            asr_begins: "15:45".to_string(),
            asr_jamaat: "16:30".to_string(),
            maghrib: "18:02".to_string(),
            isha_begins: "19:30".to_string(),
            isha_jamaat: "20:00".to_string(),
        }
    }

    fn timetable() -> Timetable {
        let mut months = HashMap::new();
        months.insert("march".to_string(), vec![day(14), day(15), day(16)]);
        Timetable {
            metadata: TimetableMetadata::default(),
            months,
        }
    }

    #[test]
    fn lookup_returns_exact_day_record() {
        let tt = timetable();
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let record = tt.times_for_date(date).unwrap();
        assert_eq!(record, &day(15));
    }

    #[test]
    fn lookup_misses_absent_day() {
        let tt = timetable();
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert!(tt.times_for_date(date).is_none());
    }

    #[test]
    fn lookup_misses_absent_month() {
        let tt = timetable();
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert!(tt.times_for_date(date).is_none());
    }

    #[test]
    fn month_keys_cover_the_year() {
        assert_eq!(month_key(1), Some("january"));
        assert_eq!(month_key(12), Some("december"));
        assert_eq!(month_key(13), None);
    }

    #[test]
    fn timetable_parses_flattened_month_keys() {
        let json = r#"{
            "metadata": {"location": "Bradford, UK", "year": 2025, "source": "local moonsighting committee"},
            "january": [{
                "date": 1, "sehri_end": "06:21", "sunrise": "08:06",
                "dhuhr_begins": "12:12", "dhuhr_jamaat": "12:45",
                "asr_begins": "14:08", "asr_jamaat": "14:30",
                "maghrib": "15:59", "isha_begins": "17:31", "isha_jamaat": "19:30"
            }]
        }"#;
        let tt: Timetable = serde_json::from_str(json).unwrap();
        assert_eq!(tt.metadata.year, 2025);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(tt.times_for_date(date).unwrap().maghrib, "15:59");
    }
}
