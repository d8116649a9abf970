//! Fixed demo configuration
//!
//! The demo deliberately has no flag or environment surface; everything is
//! a constant here.

/// Application (client) id of the App Registration
pub const CLIENT_ID: &str = "0ade3d5c-b527-46ad-adac-af00003a111b";

/// Authorities tried in order: personal MSA only, then any org + personal
pub const AUTHORITIES: [&str; 2] = [
    "https://login.microsoftonline.com/consumers",
    "https://login.microsoftonline.com/common",
];

/// Delegated Graph scopes (do not include offline_access)
pub const SCOPES: [&str; 2] = ["User.Read", "Mail.ReadWrite"];

/// Mail folder the demo reads from and seeds into
pub const DEMO_FOLDER_NAME: &str = "DEMO for PNC";

/// Messages fetched per run
pub const TOP: u32 = 50;

pub const TEMPLATE_FILE: &str = "assets/dashboard_template.html";
pub const OUT_FILE: &str = "assets/dashboard.html";
pub const CSV_FILE: &str = "assets/test_emails.csv";
pub const TOKEN_CACHE_FILE: &str = ".mailfiler_token_cache.json";
