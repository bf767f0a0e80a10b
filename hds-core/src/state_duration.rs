//! How long has the reservoir been in its current drought state?
//!
//! The answer comes from the trailing run of identical classification labels
//! at the end of a chronologically ordered history: the run's first entry is
//! the date the state was entered.

use crate::models::HistoryEntry;
use chrono::NaiveDate;
use hds_utils::dates::calendar_days_between;
use log::warn;
use serde::Serialize;
use std::borrow::Cow;

/// Result of resolving the current state's duration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StateDuration {
    /// Label of the most recent entry; empty for an empty history.
    pub current_label: String,
    /// Whole calendar days between `since_date` and the reference day.
    pub days_in_state: u32,
    /// The run's first date exactly as delivered, for display.
    pub since: String,
    pub since_date: Option<NaiveDate>,
}

impl StateDuration {
    pub fn is_empty(&self) -> bool {
        self.current_label.is_empty() && self.since.is_empty()
    }

    /// `"<N> dias desde <date>"`, or `"<N> dias"` when no start date is known.
    pub fn display(&self) -> String {
        if self.since.is_empty() {
            format!("{} dias", self.days_in_state)
        } else {
            format!("{} dias desde {}", self.days_in_state, self.since)
        }
    }
}

/// True when every parsable date is not earlier than the parsable date before it.
///
/// Unparsable dates are ignored by the check.
pub fn is_chronological(history: &[HistoryEntry]) -> bool {
    let mut previous: Option<NaiveDate> = None;
    for date in history.iter().filter_map(HistoryEntry::parsed_date) {
        if previous.is_some_and(|p| date < p) {
            return false;
        }
        previous = Some(date);
    }
    true
}

/// Resolve the current state and the date it was entered, counting days up to `today`.
///
/// The history is expected oldest first. Out-of-order input is logged and
/// scanned over a stably re-sorted copy; entries without a parsable date sort
/// first, as the oldest. Never fails: an empty history gives the default result
/// and an unparsable start date gives a zero day count.
pub fn resolve_state_duration(history: &[HistoryEntry], today: NaiveDate) -> StateDuration {
    let ordered: Cow<'_, [HistoryEntry]> = if is_chronological(history) {
        Cow::Borrowed(history)
    } else {
        warn!(
            "history of {} entries is not in ascending date order; re-sorting before scan",
            history.len()
        );
        let mut sorted = history.to_vec();
        sorted.sort_by_key(HistoryEntry::parsed_date);
        Cow::Owned(sorted)
    };

    let Some((current, earlier)) = ordered.split_last() else {
        return StateDuration::default();
    };

    let current_label = current.state_label.as_str();
    let mut since = current;
    for entry in earlier.iter().rev() {
        if entry.state_label != current_label {
            break;
        }
        since = entry;
    }

    let since_date = since.parsed_date();
    let days_in_state = since_date
        .map(|date| calendar_days_between(&date, &today))
        .unwrap_or(0);

    StateDuration {
        current_label: current_label.to_string(),
        days_in_state,
        since: since.date.clone(),
        since_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let result = resolve_state_duration(&[], day(2024, 1, 1));
        assert_eq!(result, StateDuration::default());
        assert_eq!(result.days_in_state, 0);
        assert!(result.since.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_entry_same_day() {
        let history = vec![HistoryEntry::new("01/01/2024", "Alerta")];
        let result = resolve_state_duration(&history, day(2024, 1, 1));
        assert_eq!(result.current_label, "Alerta");
        assert_eq!(result.days_in_state, 0);
        assert_eq!(result.since, "01/01/2024");
        assert_eq!(result.since_date, Some(day(2024, 1, 1)));
    }

    #[test]
    fn test_single_entry_ages_with_today() {
        let history = vec![HistoryEntry::new("01/01/2024", "Alerta")];
        let result = resolve_state_duration(&history, day(2024, 1, 31));
        assert_eq!(result.days_in_state, 30);
        assert_eq!(result.display(), "30 dias desde 01/01/2024");
    }

    #[test]
    fn test_trailing_run_detection() {
        let history = vec![
            HistoryEntry::new("01/03/2024", "Normal"),
            HistoryEntry::new("02/03/2024", "Normal"),
            HistoryEntry::new("03/03/2024", "Alerta"),
            HistoryEntry::new("04/03/2024", "Alerta"),
        ];
        let result = resolve_state_duration(&history, day(2024, 3, 10));
        assert_eq!(result.current_label, "Alerta");
        assert_eq!(result.since, "03/03/2024");
        assert_eq!(result.days_in_state, 7);
    }

    #[test]
    fn test_earlier_run_of_same_label_is_not_counted() {
        let history = vec![
            HistoryEntry::new("2024-01-01", "Seca"),
            HistoryEntry::new("2024-01-02", "Alerta"),
            HistoryEntry::new("2024-01-03", "Seca"),
            HistoryEntry::new("2024-01-04", "Seca"),
        ];
        let result = resolve_state_duration(&history, day(2024, 1, 4));
        assert_eq!(result.since, "2024-01-03");
        assert_eq!(result.days_in_state, 1);
    }

    #[test]
    fn test_single_label_covers_whole_history() {
        let history = vec![
            HistoryEntry::new("10/02/2024", "Normal"),
            HistoryEntry::new("11/02/2024", "Normal"),
            HistoryEntry::new("12/02/2024", "Normal"),
        ];
        let result = resolve_state_duration(&history, day(2024, 2, 12));
        assert_eq!(result.since, "10/02/2024");
        assert_eq!(result.days_in_state, 2);
    }

    #[test]
    fn test_today_before_since_uses_absolute_difference() {
        let history = vec![HistoryEntry::new("20/05/2024", "Seca")];
        let result = resolve_state_duration(&history, day(2024, 5, 15));
        assert_eq!(result.days_in_state, 5);
    }

    #[test]
    fn test_day_first_dates_are_not_swapped() {
        let history = vec![HistoryEntry::new("05/03/2024", "Seca")];
        let result = resolve_state_duration(&history, day(2024, 3, 6));
        assert_eq!(result.since_date, Some(day(2024, 3, 5)));
        assert_eq!(result.days_in_state, 1);
    }

    #[test]
    fn test_newest_first_delivery_is_resorted() {
        let history = vec![
            HistoryEntry::new("04/03/2024", "Alerta"),
            HistoryEntry::new("03/03/2024", "Alerta"),
            HistoryEntry::new("02/03/2024", "Normal"),
            HistoryEntry::new("01/03/2024", "Normal"),
        ];
        assert!(!is_chronological(&history));
        let result = resolve_state_duration(&history, day(2024, 3, 4));
        assert_eq!(result.current_label, "Alerta");
        assert_eq!(result.since, "03/03/2024");
        assert_eq!(result.days_in_state, 1);
    }

    #[test]
    fn test_unparsable_since_date_gives_zero_days() {
        let history = vec![
            HistoryEntry::new("sem data", "Seca"),
            HistoryEntry::new("02/03/2024", "Seca"),
        ];
        let result = resolve_state_duration(&history, day(2024, 3, 10));
        assert_eq!(result.since, "sem data");
        assert_eq!(result.since_date, None);
        assert_eq!(result.days_in_state, 0);
    }

    #[test]
    fn test_display_without_date() {
        let result = StateDuration {
            days_in_state: 3,
            ..StateDuration::default()
        };
        assert_eq!(result.display(), "3 dias");
    }
}
