//! Output formatting utilities

use crate::domain::{DaySection, DateSelection, Participant, Trip, TripLink};
use chrono::{Datelike, NaiveDate};

/// Format the current trip: header, status and a calendar of its dates
pub fn format_trip_overview(trip: &Trip) -> String {
    let status = if trip.is_confirmed {
        "confirmed"
    } else {
        "not confirmed yet"
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", trip.header()));
    output.push_str(&format!("Trip {} ({})\n", trip.id, status));
    output.push('\n');
    output.push_str(&render_calendar(&trip.selection()));
    output
}

/// Render one month grid per month covered by the selection. Selected days
/// are dotted, the range endpoints are bracketed.
pub fn render_calendar(selection: &DateSelection) -> String {
    let marks = selection.marked_dates();

    let Some(start) = selection.starts_at() else {
        return String::new();
    };
    let end = selection.ends_at().unwrap_or(start);

    let mut output = String::new();
    let mut cursor = (start.year(), start.month());
    let last = (end.year(), end.month());

    loop {
        output.push_str(&render_month(cursor.0, cursor.1, |date| {
            marks.get(&date).map(|mark| mark.starts_range || mark.ends_range)
        }));

        if cursor == last {
            break;
        }
        output.push('\n');
        cursor = if cursor.1 == 12 {
            (cursor.0 + 1, 1)
        } else {
            (cursor.0, cursor.1 + 1)
        };
    }

    output
}

/// Render a single month. `marking` returns None for unselected days,
/// Some(false) for days inside the range and Some(true) for endpoints.
fn render_month<F>(year: i32, month: u32, marking: F) -> String
where
    F: Fn(NaiveDate) -> Option<bool>,
{
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };

    let title = format!("{} {}", first.format("%B"), year);
    let mut output = format!("{:^28}\n", title).trim_end().to_string();
    output.push('\n');
    output.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    let mut row = String::new();
    for _ in 0..first.weekday().num_days_from_monday() {
        row.push_str("    ");
    }

    let mut day = first;
    loop {
        let cell = match marking(day) {
            None => format!(" {:>2} ", day.day()),
            Some(false) => format!(".{:>2}.", day.day()),
            Some(true) => format!("[{:>2}]", day.day()),
        };
        row.push_str(&cell);

        if day.weekday() == chrono::Weekday::Sun {
            output.push_str(row.trim_end());
            output.push('\n');
            row.clear();
        }

        match day.succ_opt() {
            Some(next) if next.month() == month => day = next,
            _ => break,
        }
    }

    if !row.trim().is_empty() {
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output
}

/// Format activity sections, one block per trip day
pub fn format_day_sections(sections: &[DaySection]) -> String {
    if sections.is_empty() {
        return "No activities yet".to_string();
    }

    let mut output = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        output.push_str(&format!(
            "Day {} • {}\n",
            section.date.day(),
            section.day_name
        ));

        if section.entries.is_empty() {
            output.push_str("  no activities scheduled\n");
        } else {
            for entry in &section.entries {
                let done = if entry.is_past { "  (done)" } else { "" };
                output.push_str(&format!("  {}  {}{}\n", entry.hour, entry.title, done));
            }
        }
    }

    output
}

/// Format the trip's shared links
pub fn format_links(links: &[TripLink]) -> String {
    if links.is_empty() {
        return "No links added".to_string();
    }

    let mut output = String::new();
    for link in links {
        output.push_str(&format!("{}\n  {}\n", link.title, link.url));
    }

    output
}

/// Format the participant list with confirmation status
pub fn format_participants(participants: &[Participant]) -> String {
    if participants.is_empty() {
        return "No participants yet".to_string();
    }

    let mut output = String::new();
    for participant in participants {
        let status = if participant.is_confirmed {
            "confirmed"
        } else {
            "pending"
        };

        match &participant.name {
            Some(name) => {
                output.push_str(&format!("{} <{}>  {}\n", name, participant.email, status));
            }
            None => {
                output.push_str(&format!("{}  {}\n", participant.email, status));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_marks_endpoints_and_interior() {
        let selection = DateSelection::from_range(date(2024, 3, 12), date(2024, 3, 18));
        let calendar = render_calendar(&selection);

        assert!(calendar.contains("March 2024"));
        assert!(calendar.contains("[12]"));
        assert!(calendar.contains("[18]"));
        assert!(calendar.contains(".15."));
        // Days outside the range stay plain.
        assert!(calendar.contains(" 11 "));
        assert!(!calendar.contains("[11]"));
    }

    #[test]
    fn test_calendar_spans_months() {
        let selection = DateSelection::from_range(date(2024, 3, 30), date(2024, 4, 2));
        let calendar = render_calendar(&selection);

        assert!(calendar.contains("March 2024"));
        assert!(calendar.contains("April 2024"));
        assert!(calendar.contains("[30]"));
        assert!(calendar.contains(".31."));
        assert!(calendar.contains(". 1."));
        assert!(calendar.contains("[ 2]"));
    }

    #[test]
    fn test_calendar_single_day() {
        let selection = DateSelection::empty().select_day(date(2024, 3, 12));
        let calendar = render_calendar(&selection);

        assert!(calendar.contains("[12]"));
        assert!(!calendar.contains("."));
    }

    #[test]
    fn test_calendar_empty_selection() {
        assert_eq!(render_calendar(&DateSelection::empty()), "");
    }

    #[test]
    fn test_calendar_has_weekday_header() {
        let selection = DateSelection::empty().select_day(date(2024, 3, 12));
        let calendar = render_calendar(&selection);
        assert!(calendar.contains(" Mo  Tu  We  Th  Fr  Sa  Su"));
    }

    #[test]
    fn test_month_starts_on_correct_weekday() {
        // March 1, 2024 is a Friday: four leading blank cells.
        let rendered = render_month(2024, 3, |_| None);
        let first_days_row = rendered.lines().nth(2).unwrap();
        assert_eq!(first_days_row, "                  1   2   3");
    }

    #[test]
    fn test_trip_overview_combines_header_and_calendar() {
        let trip = Trip {
            id: "trip-1".to_string(),
            destination: "Paris".to_string(),
            starts_at: date(2024, 3, 12),
            ends_at: date(2024, 3, 18),
            is_confirmed: true,
        };

        let overview = format_trip_overview(&trip);
        assert!(overview.contains("Paris, 12 to 18 of Mar."));
        assert!(overview.contains("Trip trip-1 (confirmed)"));
        assert!(overview.contains("[12]"));
    }

    #[test]
    fn test_format_empty_sections() {
        assert_eq!(format_day_sections(&[]), "No activities yet");
    }

    #[test]
    fn test_format_day_sections() {
        let sections = vec![
            DaySection {
                date: date(2024, 3, 12),
                day_name: "Tuesday".to_string(),
                entries: vec![
                    ActivityEntry {
                        id: "a1".to_string(),
                        title: "Museum tour".to_string(),
                        hour: "10:00h".to_string(),
                        is_past: true,
                    },
                    ActivityEntry {
                        id: "a2".to_string(),
                        title: "Dinner".to_string(),
                        hour: "20:00h".to_string(),
                        is_past: false,
                    },
                ],
            },
            DaySection {
                date: date(2024, 3, 13),
                day_name: "Wednesday".to_string(),
                entries: vec![],
            },
        ];

        let output = format_day_sections(&sections);
        assert!(output.contains("Day 12 • Tuesday"));
        assert!(output.contains("  10:00h  Museum tour  (done)"));
        assert!(output.contains("  20:00h  Dinner\n"));
        assert!(output.contains("Day 13 • Wednesday"));
        assert!(output.contains("  no activities scheduled"));
    }

    #[test]
    fn test_format_empty_links() {
        assert_eq!(format_links(&[]), "No links added");
    }

    #[test]
    fn test_format_links() {
        let links = vec![TripLink {
            id: "l1".to_string(),
            title: "Hotel booking".to_string(),
            url: "https://example.com/booking".to_string(),
        }];

        let output = format_links(&links);
        assert!(output.contains("Hotel booking"));
        assert!(output.contains("  https://example.com/booking"));
    }

    #[test]
    fn test_format_participants() {
        let participants = vec![
            Participant {
                id: "p1".to_string(),
                name: Some("Ana".to_string()),
                email: "ana@example.com".to_string(),
                is_confirmed: true,
            },
            Participant {
                id: "p2".to_string(),
                name: None,
                email: "bruno@example.com".to_string(),
                is_confirmed: false,
            },
        ];

        let output = format_participants(&participants);
        assert!(output.contains("Ana <ana@example.com>  confirmed"));
        assert!(output.contains("bruno@example.com  pending"));
    }

    #[test]
    fn test_format_empty_participants() {
        assert_eq!(format_participants(&[]), "No participants yet");
    }
}
