//! Pure read-only projection over accumulated launch records.
//!
//! No I/O and no filtering happens here: filters are applied server-side
//! when pages are fetched, so the projection only orders what has already
//! been accumulated.

use crate::models::{Launch, SortOrder};

/// Produces an ordered view of the accumulated records.
///
/// Sorts by the UTC launch timestamp; ties keep their original arrival
/// order (the sort is stable).
pub fn project(launches: &[Launch], order: SortOrder) -> Vec<Launch> {
    let mut view = launches.to_vec();
    match order {
        SortOrder::Ascending => view.sort_by(|a, b| a.date_utc.cmp(&b.date_utc)),
        SortOrder::Descending => view.sort_by(|a, b| b.date_utc.cmp(&a.date_utc)),
    }
    view
}

/// Distinct launch years present in the accumulated records, latest first.
pub fn available_years(launches: &[Launch]) -> Vec<i32> {
    let mut years: Vec<i32> = launches.iter().map(Launch::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn launch(id: &str, y: i32, m: u32, d: u32) -> Launch {
        let date = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        Launch {
            id: id.into(),
            flight_number: 1,
            name: format!("Mission {id}"),
            date_utc: date,
            date_unix: date.timestamp(),
            date_local: date.fixed_offset(),
            date_precision: "hour".into(),
            static_fire_date_utc: None,
            static_fire_date_unix: None,
            net: false,
            window: None,
            rocket: None,
            success: Some(true),
            failures: None,
            upcoming: false,
            details: None,
            fairings: None,
            crew: None,
            ships: None,
            capsules: None,
            payloads: None,
            launchpad: None,
            cores: None,
            links: None,
            auto_update: true,
        }
    }

    #[test]
    fn ascending_orders_earliest_first() {
        let records = vec![launch("a", 2023, 6, 1), launch("b", 2023, 1, 1)];
        let view = project(&records, SortOrder::Ascending);
        let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn descending_orders_latest_first() {
        let records = vec![launch("a", 2022, 3, 1), launch("b", 2023, 1, 1)];
        let view = project(&records, SortOrder::Descending);
        let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn equal_dates_keep_arrival_order() {
        let records = vec![
            launch("first", 2023, 5, 5),
            launch("second", 2023, 5, 5),
            launch("third", 2023, 5, 5),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let view = project(&records, order);
            let ids: Vec<&str> = view.iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids, vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn projection_does_not_mutate_input() {
        let records = vec![launch("a", 2023, 6, 1), launch("b", 2023, 1, 1)];
        let _ = project(&records, SortOrder::Ascending);
        assert_eq!(records[0].id, "a");
    }

    #[test]
    fn years_are_distinct_and_descending() {
        let records = vec![
            launch("a", 2021, 1, 1),
            launch("b", 2023, 1, 1),
            launch("c", 2021, 6, 1),
            launch("d", 2022, 1, 1),
        ];
        assert_eq!(available_years(&records), vec![2023, 2022, 2021]);
    }
}
