//! Static endpoint and pinning configuration.
//!
//! The pin is bound to exactly one domain; both values are fixed
//! configuration, not runtime-discovered.

/// Base URL for the SpaceX API.
pub const BASE_URL: &str = "https://api.spacexdata.com";

/// Company profile endpoint (v4).
pub const COMPANY_ENDPOINT: &str = "/v4/company";

/// Unpaginated launches endpoint (v5).
pub const LAUNCHES_ENDPOINT: &str = "/v5/launches";

/// Paginated launch query endpoint (v5).
pub const LAUNCHES_QUERY_ENDPOINT: &str = "/v5/launches/query";

/// Domain the public-key pin applies to.
pub const PINNED_DOMAIN: &str = "api.spacexdata.com";

/// Expected base64 SHA-256 digest of the pinned domain's leaf SPKI.
pub const PINNED_KEY_FINGERPRINT: &str = "LYxvphGUb0VsJBc/HOOF6GlcfnrtsnEz3cSqrurjDt0=";
