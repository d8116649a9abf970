//! Core logic for mailfiler
//!
//! Decision and formatting code: the keyword classifier, the HTML dashboard
//! renderer, and the CSV seed-row model. Makes no network calls itself; the
//! dependency on mailfiler-graph is for its payload types only.

mod classify;
mod error;
mod render;
mod seed;

pub use classify::{classify, Classification};
pub use error::{CoreError, CoreResult};
pub use render::{
    escape_html, format_received, read_template, render_dashboard, render_rows, ReportRow,
    REPORT_DATA_MARKER, RUN_TIME_MARKER,
};
pub use seed::{read_seed_rows, tally_seed_outcomes, SeedReport, SeedRow};
