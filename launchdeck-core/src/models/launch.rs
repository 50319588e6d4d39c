//! Launch record types (v5 launches resource).

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A single launch record.
///
/// The v5 API leaves most fields nullable; each of those is an explicit
/// `Option` here rather than a defaulted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Stable resource identifier.
    pub id: String,
    /// Sequential flight number.
    pub flight_number: u32,
    /// Mission name.
    pub name: String,
    /// Launch timestamp, UTC.
    pub date_utc: DateTime<Utc>,
    /// Launch timestamp as a Unix epoch.
    pub date_unix: i64,
    /// Launch timestamp in launch-site local time.
    pub date_local: DateTime<FixedOffset>,
    /// Precision of the date fields (`hour`, `day`, `month`, ...).
    pub date_precision: String,
    /// Static fire timestamp, UTC, if one was performed.
    pub static_fire_date_utc: Option<DateTime<Utc>>,
    /// Static fire timestamp as a Unix epoch.
    pub static_fire_date_unix: Option<i64>,
    /// Whether the launch date is NET (no earlier than).
    pub net: bool,
    /// Launch window in seconds.
    pub window: Option<u32>,
    /// Rocket resource id.
    pub rocket: Option<String>,
    /// Mission outcome; `None` for upcoming launches.
    pub success: Option<bool>,
    /// Recorded failures, if any.
    pub failures: Option<Vec<LaunchFailure>>,
    /// Whether the launch is still upcoming.
    pub upcoming: bool,
    /// Mission details.
    pub details: Option<String>,
    /// Fairing recovery information.
    pub fairings: Option<Fairings>,
    /// Crew assignments.
    pub crew: Option<Vec<CrewAssignment>>,
    /// Ship resource ids.
    pub ships: Option<Vec<String>>,
    /// Capsule resource ids.
    pub capsules: Option<Vec<String>>,
    /// Payload resource ids.
    pub payloads: Option<Vec<String>>,
    /// Launchpad resource id.
    pub launchpad: Option<String>,
    /// First-stage core details.
    pub cores: Option<Vec<LaunchCore>>,
    /// Media and documentation links.
    pub links: Option<LaunchLinks>,
    /// Whether the record is auto-updated upstream.
    pub auto_update: bool,
}

impl Launch {
    /// Calendar year of the launch, UTC.
    pub fn year(&self) -> i32 {
        self.date_utc.year()
    }

    /// Human-readable launch date, e.g. `2023-06-01 14:30 UTC`.
    pub fn formatted_date(&self) -> String {
        self.date_utc.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Signed whole days between `now` and the launch date.
    ///
    /// Positive for upcoming launches, negative for past ones.
    pub fn days_from(&self, now: DateTime<Utc>) -> i64 {
        (self.date_utc - now).num_days()
    }

    /// Relative-time description of the launch date.
    pub fn days_text(&self, now: DateTime<Utc>) -> String {
        match self.days_from(now) {
            d if d > 0 => format!("in {d} days"),
            d if d < 0 => format!("{} days ago", -d),
            _ => "today".to_string(),
        }
    }
}

/// A recorded launch failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchFailure {
    /// Seconds after liftoff.
    pub time: Option<i32>,
    /// Altitude at failure, km.
    pub altitude: Option<i32>,
    /// Failure description.
    pub reason: Option<String>,
}

/// Fairing recovery information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fairings {
    /// Whether the fairings were reused.
    pub reused: Option<bool>,
    /// Whether a recovery was attempted.
    pub recovery_attempt: Option<bool>,
    /// Whether the fairings were recovered.
    pub recovered: Option<bool>,
    /// Recovery ship resource ids.
    pub ships: Option<Vec<String>>,
}

/// First-stage core flight details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchCore {
    /// Core resource id.
    pub core: Option<String>,
    /// Flight number of this core.
    pub flight: Option<u32>,
    /// Whether grid fins were fitted.
    pub gridfins: Option<bool>,
    /// Whether landing legs were fitted.
    pub legs: Option<bool>,
    /// Whether the core was reused.
    pub reused: Option<bool>,
    /// Whether a landing was attempted.
    pub landing_attempt: Option<bool>,
    /// Whether the landing succeeded.
    pub landing_success: Option<bool>,
    /// Landing type (`ASDS`, `RTLS`, ...).
    pub landing_type: Option<String>,
    /// Landing pad resource id.
    pub landpad: Option<String>,
}

/// A crew member's assignment on a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewAssignment {
    /// Crew member resource id.
    pub crew: Option<String>,
    /// Role on this flight.
    pub role: Option<String>,
}

/// Media and documentation links for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Mission patch images.
    pub patch: Option<PatchLinks>,
    /// Reddit threads.
    pub reddit: Option<RedditLinks>,
    /// Flickr photo sets.
    pub flickr: Option<FlickrLinks>,
    /// Press kit URL.
    pub presskit: Option<String>,
    /// Webcast URL.
    pub webcast: Option<String>,
    /// YouTube video id.
    pub youtube_id: Option<String>,
    /// News article URL.
    pub article: Option<String>,
    /// Wikipedia URL.
    pub wikipedia: Option<String>,
}

/// Mission patch image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchLinks {
    /// Small patch image.
    pub small: Option<String>,
    /// Large patch image.
    pub large: Option<String>,
}

/// Reddit thread URLs for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditLinks {
    /// Campaign thread.
    pub campaign: Option<String>,
    /// Launch thread.
    pub launch: Option<String>,
    /// Media thread.
    pub media: Option<String>,
    /// Recovery thread.
    pub recovery: Option<String>,
}

/// Flickr photo URLs for a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlickrLinks {
    /// Small-size photo URLs.
    pub small: Option<Vec<String>>,
    /// Original-size photo URLs.
    pub original: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch_at(date: DateTime<Utc>) -> Launch {
        Launch {
            id: "abc".into(),
            flight_number: 1,
            name: "Demo".into(),
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
    fn year_uses_utc_date() {
        let launch = launch_at(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap());
        assert_eq!(launch.year(), 2023);
    }

    #[test]
    fn days_text_relative_to_reference() {
        let now = Utc.with_ymd_and_hms(2023, 6, 10, 0, 0, 0).unwrap();
        let past = launch_at(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());
        let future = launch_at(Utc.with_ymd_and_hms(2023, 6, 15, 0, 0, 0).unwrap());
        let today = launch_at(Utc.with_ymd_and_hms(2023, 6, 10, 12, 0, 0).unwrap());

        assert_eq!(past.days_text(now), "9 days ago");
        assert_eq!(future.days_text(now), "in 5 days");
        assert_eq!(today.days_text(now), "today");
    }
}
