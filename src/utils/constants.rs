/// Backend base path.
/// Configured at compile time:
/// - Development: http://127.0.0.1:5000/api (default)
/// - Production: via API_BASE env var (see build.rs)
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:5000/api",
};

/// localStorage key holding the raw session token.
pub const STORAGE_KEY_TOKEN: &str = "dukani_token";

/// localStorage key holding the JSON-serialized logged-in user.
pub const STORAGE_KEY_USER: &str = "dukani_user";
