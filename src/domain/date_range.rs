//! Calendar date-range selection
//!
//! Converts a sequence of single-day calendar taps into a coherent start/end
//! range. The same selection state backs trip creation, trip editing and the
//! calendar rendering in the CLI.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Marking metadata for one day of a selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMarking {
    /// This day is the first day of the range
    pub starts_range: bool,
    /// This day is the last day of the range
    pub ends_range: bool,
}

/// A start/end pair of calendar dates built from single-day taps
///
/// Invariant: when `ends_at` is set, `starts_at` is also set and
/// `starts_at <= ends_at`. The fields are private so every mutation goes
/// through [`DateSelection::select_day`], which preserves the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    starts_at: Option<NaiveDate>,
    ends_at: Option<NaiveDate>,
}

impl DateSelection {
    /// An empty selection (no days tapped yet)
    pub const fn empty() -> Self {
        DateSelection {
            starts_at: None,
            ends_at: None,
        }
    }

    /// Build a selection covering an existing range, such as a stored trip's
    /// dates. Applies the tap rules, so a reversed pair still comes out
    /// ordered.
    pub fn from_range(first: NaiveDate, last: NaiveDate) -> Self {
        Self::empty().select_day(first).select_day(last)
    }

    pub fn starts_at(&self) -> Option<NaiveDate> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<NaiveDate> {
        self.ends_at
    }

    /// Both endpoints chosen
    pub fn is_complete(&self) -> bool {
        self.starts_at.is_some() && self.ends_at.is_some()
    }

    /// Apply one calendar tap.
    ///
    /// - First tap sets the start.
    /// - Second tap sets the end, swapping with the start if it lands on an
    ///   earlier day.
    /// - A tap on a completed range discards it and starts a new one.
    pub fn select_day(&self, tapped: NaiveDate) -> Self {
        match (self.starts_at, self.ends_at) {
            (None, _) | (Some(_), Some(_)) => DateSelection {
                starts_at: Some(tapped),
                ends_at: None,
            },
            (Some(start), None) => {
                if tapped < start {
                    DateSelection {
                        starts_at: Some(tapped),
                        ends_at: Some(start),
                    }
                } else {
                    DateSelection {
                        starts_at: Some(start),
                        ends_at: Some(tapped),
                    }
                }
            }
        }
    }

    /// Marking entries for every day of the selection, keyed by date.
    ///
    /// Each day between the endpoints (inclusive) gets an entry; the
    /// endpoints carry the `starts_range`/`ends_range` flags. A start-only
    /// selection marks that single day as both endpoints. An empty selection
    /// yields an empty map.
    pub fn marked_dates(&self) -> BTreeMap<NaiveDate, DayMarking> {
        let mut marks = BTreeMap::new();

        let Some(start) = self.starts_at else {
            return marks;
        };
        let end = self.ends_at.unwrap_or(start);

        let mut day = start;
        while day <= end {
            marks.insert(
                day,
                DayMarking {
                    starts_range: day == start,
                    ends_range: day == end,
                },
            );
            day += Duration::days(1);
        }

        marks
    }

    /// Human-readable label for the selection, e.g. "12 to 18 of March."
    pub fn label(&self) -> String {
        match (self.starts_at, self.ends_at) {
            (None, _) => String::new(),
            (Some(start), None) => format!("{} of {}.", start.day(), month_name(start)),
            (Some(start), Some(end)) => {
                if start.year() == end.year() && start.month() == end.month() {
                    format!("{} to {} of {}.", start.day(), end.day(), month_name(end))
                } else {
                    format!(
                        "{} of {} to {} of {}.",
                        start.day(),
                        month_name(start),
                        end.day(),
                        month_name(end)
                    )
                }
            }
        }
    }
}

fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
