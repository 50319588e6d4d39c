//! Output formatting tests.

use chrono::{TimeZone, Utc};
use launchdeck_core::{Company, CompanyLinks, Headquarters, Launch};

use super::{JsonFormatter, TextFormatter};

fn company() -> Company {
    Company {
        id: "c1".into(),
        name: "SpaceX".into(),
        founder: "Elon Musk".into(),
        founded: 2002,
        employees: 9500,
        vehicles: 4,
        launch_sites: 3,
        test_sites: 3,
        ceo: "Elon Musk".into(),
        cto: "Elon Musk".into(),
        coo: "Gwynne Shotwell".into(),
        cto_propulsion: "Tom Mueller".into(),
        valuation: 74_000_000_000,
        headquarters: Headquarters {
            address: "Rocket Road".into(),
            city: "Hawthorne".into(),
            state: "California".into(),
        },
        links: CompanyLinks {
            website: "https://www.spacex.com/".into(),
            flickr: String::new(),
            twitter: String::new(),
            elon_twitter: String::new(),
        },
        summary: "Rockets.".into(),
    }
}

fn launch(name: &str, success: Option<bool>) -> Launch {
    let date = Utc.with_ymd_and_hms(2023, 6, 1, 14, 30, 0).unwrap();
    Launch {
        id: "l1".into(),
        flight_number: 42,
        name: name.into(),
        date_utc: date,
        date_unix: date.timestamp(),
        date_local: date.fixed_offset(),
        date_precision: "hour".into(),
        static_fire_date_utc: None,
        static_fire_date_unix: None,
        net: false,
        window: None,
        rocket: None,
        success,
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
fn text_company_includes_name_and_hq() {
    let formatter = TextFormatter::with_colors(false);
    let out = formatter.format_company(&company());
    assert!(out.contains("SpaceX"));
    assert!(out.contains("Hawthorne"));
    assert!(out.contains("2002"));
}

#[test]
fn text_launches_summarizes_accumulation() {
    let formatter = TextFormatter::with_colors(false);
    let out = formatter.format_launches(&[launch("Starlink", Some(true))], 205);
    assert!(out.contains("1 of 205 launches"));
    assert!(out.contains("Starlink"));
    assert!(out.contains("2023-06-01 14:30 UTC"));
    assert!(out.contains("[ok]"));
}

#[test]
fn text_outcome_labels() {
    let formatter = TextFormatter::with_colors(false);
    assert!(formatter
        .format_launches(&[launch("X", Some(false))], 1)
        .contains("[failed]"));
    assert!(formatter
        .format_launches(&[launch("X", None)], 1)
        .contains("[unknown]"));
}

#[test]
fn no_colors_means_no_escape_codes() {
    let formatter = TextFormatter::with_colors(false);
    let out = formatter.format_launches(&[launch("Starlink", Some(true))], 1);
    assert!(!out.contains('\x1b'));
}

#[test]
fn json_company_is_valid_and_keyed_like_the_api() {
    let out = JsonFormatter::company(&company());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["name"], "SpaceX");
    assert_eq!(value["launch_sites"], 3);
}

#[test]
fn json_launches_is_an_array() {
    let out = JsonFormatter::launches(&[launch("Starlink", Some(true))]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["flight_number"], 42);
}
