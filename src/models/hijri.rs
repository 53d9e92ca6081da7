use chrono::{Datelike, NaiveDate};

/// data/hijri-calendar.json: the lunar month in progress and the one
/// after it, each anchored to its Gregorian start date.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriCalendar {
    pub current_month: HijriMonthRecord,
    pub next_month: HijriMonthRecord,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriMonthRecord {
    pub gregorian_start_date: NaiveDate,
    pub hijri_month: String,
    pub hijri_year: i32,
}

/// Which lunar-date computation to use. CalendarRecord follows the
/// maintained calendar document and is the canonical mode; StaticTable
/// is the legacy hardcoded mapping kept only as an alternate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HijriStrategy {
    CalendarRecord,
    StaticTable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HijriLabel {
    pub day: i64,
    pub month: String,
    pub year: i32,
}

impl HijriLabel {
    pub fn formatted(&self) -> String {
        format!("{} {} {} AH", self.day, self.month, self.year)
    }
}

/// Today's lunar label under the chosen strategy. CalendarRecord needs
/// the calendar document; a date before the recorded current month
/// yields None, which callers surface as "could not load".
pub fn hijri_label(
    today: NaiveDate,
    calendar: Option<&HijriCalendar>,
    strategy: HijriStrategy,
) -> Option<HijriLabel> {
    match strategy {
        HijriStrategy::CalendarRecord => from_calendar_record(today, calendar?),
        HijriStrategy::StaticTable => static_table_label(today),
    }
}

fn from_calendar_record(today: NaiveDate, cal: &HijriCalendar) -> Option<HijriLabel> {
    let record = if today >= cal.next_month.gregorian_start_date {
        &cal.next_month
    } else {
        &cal.current_month
    };
    let offset = (today - record.gregorian_start_date).num_days();
    if offset < 0 {
        return None;
    }
    Some(HijriLabel {
        day: offset + 1,
        month: record.hijri_month.clone(),
        year: record.hijri_year,
    })
}

/// Legacy mapping, Gregorian month to lunar month/year for 2025. It
/// ignores the calendar document and the day number is the Gregorian
/// one, so it drifts over a month; kept only behind StaticTable.
const STATIC_MONTH_TABLE: [(&str, i32); 12] = [
    ("Rajab", 1446),
    ("Sha'ban", 1446),
    ("Ramadan", 1446),
    ("Shawwal", 1446),
    ("Dhu al-Qi'dah", 1446),
    ("Dhu al-Hijjah", 1446),
    ("Muharram", 1447),
    ("Safar", 1447),
    ("Rabi' al-Awwal", 1447),
    ("Rabi' al-Thani", 1447),
    ("Jumada al-Awwal", 1447),
    ("Jumada al-Thani", 1447),
];

fn static_table_label(today: NaiveDate) -> Option<HijriLabel> {
    let (month, year) = STATIC_MONTH_TABLE.get(today.month0() as usize)?;
    Some(HijriLabel {
        day: today.day() as i64,
        month: (*month).to_string(),
        year: *year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> HijriCalendar {
        HijriCalendar {
            current_month: HijriMonthRecord {
                gregorian_start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                hijri_month: "Ramadan".to_string(),
                hijri_year: 1446,
            },
            next_month: HijriMonthRecord {
                gregorian_start_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                hijri_month: "Shawwal".to_string(),
                hijri_year: 1446,
            },
        }
    }

    #[test]
    fn before_next_month_start_uses_current_record() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let label =
            hijri_label(today, Some(&calendar()), HijriStrategy::CalendarRecord).unwrap();
        assert_eq!(label.month, "Ramadan");
        assert_eq!(label.day, 30);
    }

    #[test]
    fn at_next_month_start_switches_to_next_record() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let label =
            hijri_label(today, Some(&calendar()), HijriStrategy::CalendarRecord).unwrap();
        assert_eq!(label.month, "Shawwal");
        assert_eq!(label.day, 1);
    }

    #[test]
    fn past_next_month_start_counts_from_its_start() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        let label =
            hijri_label(today, Some(&calendar()), HijriStrategy::CalendarRecord).unwrap();
        assert_eq!(label.month, "Shawwal");
        assert_eq!(label.day, 6);
        assert_eq!(label.formatted(), "6 Shawwal 1446 AH");
    }

    #[test]
    fn date_before_current_month_yields_none() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        assert!(hijri_label(today, Some(&calendar()), HijriStrategy::CalendarRecord).is_none());
    }

    #[test]
    fn record_strategy_without_calendar_yields_none() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert!(hijri_label(today, None, HijriStrategy::CalendarRecord).is_none());
    }

    #[test]
    fn static_table_ignores_calendar_document() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let label = hijri_label(today, None, HijriStrategy::StaticTable).unwrap();
        assert_eq!(label.month, "Muharram");
        assert_eq!(label.year, 1447);
        assert_eq!(label.day, 14);
    }
}
