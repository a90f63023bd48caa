use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: unset, every origin is allowed)
///
/// Methods and headers are not restricted. Credentials are enabled.
pub fn init_cors() -> Cors {
    let origins = env::var("CORS_ALLOWED_ORIGINS")
        .map(|value| parse_origins(&value))
        .unwrap_or_default();

    // poem treats empty allow lists as "allow any".
    Cors::new()
        .allow_origins(origins.iter().map(String::as_str))
        .allow_credentials(true)
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
