//! Toggle based day selection.

use chrono::NaiveDate;

/// Position of `date` in the selection, if it was chosen.
pub fn is_selected(selection: &[NaiveDate], date: NaiveDate) -> Option<usize> {
    selection.iter().position(|selected| *selected == date)
}

/// Returns the selection after the user picks `date`.
///
/// Picking a chosen day removes it. Otherwise `multi` appends the day,
/// and a single selection replaces whatever was there.
pub fn set_selected(selection: &[NaiveDate], date: NaiveDate, multi: bool) -> Vec<NaiveDate> {
    if let Some(idx) = is_selected(selection, date) {
        let mut next = selection.to_vec();
        next.remove(idx);
        return next;
    }

    if multi {
        let mut next = Vec::with_capacity(selection.len() + 1);
        next.extend_from_slice(selection);
        next.push(date);
        next
    } else {
        vec![date]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_year_month_day;
    use pretty_assertions::assert_eq;

    fn day(s: &str) -> NaiveDate {
        parse_year_month_day(s).unwrap()
    }

    #[test]
    fn test_is_selected() {
        let selection = vec![day("2020-01-01"), day("2020-01-05")];

        assert_eq!(is_selected(&selection, day("2020-01-05")), Some(1));
        assert_eq!(is_selected(&selection, day("2020-01-02")), None);
        assert_eq!(is_selected(&[], day("2020-01-02")), None);
    }

    #[test]
    fn test_single_select_replaces() {
        let selection = vec![day("2020-01-01"), day("2020-01-05")];

        let next = set_selected(&selection, day("2020-01-09"), false);
        assert_eq!(next, vec![day("2020-01-09")]);
        // input untouched
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let selection = vec![day("2020-01-01"), day("2020-01-05")];
        let d = day("2020-01-03");

        for multi in [false, true] {
            let once = set_selected(&selection, d, true);
            let twice = set_selected(&once, d, multi);
            assert_eq!(twice, selection);
        }

        let single = set_selected(&[], d, false);
        assert_eq!(set_selected(&single, d, false), Vec::<NaiveDate>::new());
    }

    #[test]
    fn test_multi_select_appends_and_removes() {
        let first = set_selected(&[], day("2020-01-01"), true);
        let both = set_selected(&first, day("2020-01-02"), true);
        assert_eq!(both, vec![day("2020-01-01"), day("2020-01-02")]);

        let removed = set_selected(&both, day("2020-01-02"), true);
        assert_eq!(removed, vec![day("2020-01-01")]);
    }

    #[test]
    fn test_present_date_removed_even_in_single_mode() {
        let selection = vec![day("2020-01-01"), day("2020-01-02")];

        let next = set_selected(&selection, day("2020-01-01"), false);
        assert_eq!(next, vec![day("2020-01-02")]);
    }
}
