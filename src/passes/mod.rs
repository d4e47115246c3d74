mod client;
mod error;
mod types;

pub use client::PassClient;
pub use error::PassError;
pub use types::Pass;

/// NORAD catalog number of the ISS, the only object this tool tracks.
pub const ISS_NORAD_ID: u32 = 25544;

pub const N2YO_BASE_URL: &str = "https://api.n2yo.com/rest/v1/satellite";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "N2YO_API_KEY";
