//! Trip activities and their per-day grouping

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// A scheduled activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub occurs_at: NaiveDateTime,
}

/// One activity prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: String,
    pub title: String,
    /// Time of day, e.g. "08:00h"
    pub hour: String,
    /// Already happened relative to the reference time
    pub is_past: bool,
}

/// One trip day and its scheduled activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub date: NaiveDate,
    /// English weekday name, e.g. "Monday"
    pub day_name: String,
    pub entries: Vec<ActivityEntry>,
}

/// Turn the backend's per-day activity groups into display sections.
/// Groups keep the order the backend returns (one per trip day).
pub fn day_sections(groups: Vec<(NaiveDate, Vec<Activity>)>, now: NaiveDateTime) -> Vec<DaySection> {
    groups
        .into_iter()
        .map(|(date, activities)| DaySection {
            date,
            day_name: date.format("%A").to_string(),
            entries: activities
                .into_iter()
                .map(|activity| ActivityEntry {
                    hour: format!(
                        "{:02}:{:02}h",
                        activity.occurs_at.hour(),
                        activity.occurs_at.minute()
                    ),
                    is_past: activity.occurs_at < now,
                    id: activity.id,
                    title: activity.title,
                })
                .collect(),
        })
        .collect()
}
