pub mod messages;
pub use messages::*;

pub mod codec;

pub mod error;
pub use error::WireError;

/// Path of the endpoint that accepts new expressions.
pub const CALCULATE_PATH: &str = "/calculate";

/// Path of the endpoint that lists every known expression.
pub const EXPRESSIONS_PATH: &str = "/expressions";

/// Joins an API base URL and an endpoint path.
///
/// Trailing slashes on the base are dropped so that both
/// `http://host/api/v1` and `http://host/api/v1/` produce the same URL.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
