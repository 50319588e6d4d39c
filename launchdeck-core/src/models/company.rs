//! Company profile types (v4 company resource).

use serde::{Deserialize, Serialize};

/// The company profile returned by `GET /v4/company`.
///
/// A single JSON object; decoded as-is with no internal invariants enforced
/// beyond a successful decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Stable resource identifier.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Founder name.
    pub founder: String,
    /// Year founded.
    pub founded: i32,
    /// Headcount.
    pub employees: u32,
    /// Number of launch vehicles.
    pub vehicles: u32,
    /// Number of launch sites.
    pub launch_sites: u32,
    /// Number of test sites.
    pub test_sites: u32,
    /// Chief executive officer.
    pub ceo: String,
    /// Chief technology officer.
    pub cto: String,
    /// Chief operating officer.
    pub coo: String,
    /// CTO of propulsion.
    pub cto_propulsion: String,
    /// Company valuation in USD.
    pub valuation: i64,
    /// Headquarters address.
    pub headquarters: Headquarters,
    /// Public web presence.
    pub links: CompanyLinks,
    /// Free-text company summary.
    pub summary: String,
}

/// Headquarters address block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headquarters {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
}

/// Company link collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyLinks {
    /// Company website.
    pub website: String,
    /// Flickr photo stream.
    pub flickr: String,
    /// Company Twitter account.
    pub twitter: String,
    /// Founder's Twitter account.
    pub elon_twitter: String,
}
