//! CSV seed rows for creating synthetic test messages

use crate::CoreResult;
use mailfiler_graph::NewMessage;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// CSV dates carry no time component; seeded messages all land at 09:00 UTC
const RECEIVED_TIME_SUFFIX: &str = "T09:00:00Z";

/// One row of the seed CSV
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "From Email")]
    pub from_email: String,
    #[serde(rename = "From Name")]
    pub from_name: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Email Body Preview")]
    pub body: String,
}

impl SeedRow {
    /// The row's date with the fixed time-of-day suffix applied
    pub fn received_date_time(&self) -> String {
        format!("{}{}", self.date, RECEIVED_TIME_SUFFIX)
    }

    /// Build the Graph creation payload for this row
    pub fn to_message(&self) -> NewMessage {
        NewMessage::received_text(
            self.subject.clone(),
            self.body.clone(),
            self.from_email.clone(),
            self.from_name.clone(),
            self.received_date_time(),
        )
    }
}

/// Outcome counters for a seeding batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: u32,
    pub failed: u32,
}

impl SeedReport {
    /// Rows processed in total; always equals the input row count
    pub fn total(&self) -> u32 {
        self.created + self.failed
    }
}

/// Tally per-row creation outcomes.
///
/// Consumes every outcome: a failed row is counted and never stops the
/// batch.
pub fn tally_seed_outcomes<T, E>(outcomes: impl IntoIterator<Item = Result<T, E>>) -> SeedReport {
    let mut report = SeedReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(_) => report.created += 1,
            Err(_) => report.failed += 1,
        }
    }
    report
}

/// Read all seed rows from a CSV file with the expected header columns
pub fn read_seed_rows(path: &Path) -> CoreResult<Vec<SeedRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: SeedRow = record?;
        rows.push(row);
    }
    debug!("Read {} seed rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,From Email,From Name,Subject,Email Body Preview
2024-05-01,jane@example.com,Jane Doe,Auto Policy Renewal Quote,Your renewal quote is ready.
2024-05-02,bob@example.com,Bob Roe,Lunch next week,Want to grab lunch?
";

    fn parse(sample: &str) -> Vec<SeedRow> {
        csv::Reader::from_reader(sample.as_bytes())
            .deserialize()
            .collect::<Result<Vec<SeedRow>, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_seed_rows() {
        let rows = parse(SAMPLE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].from_email, "jane@example.com");
        assert_eq!(rows[0].from_name, "Jane Doe");
        assert_eq!(rows[0].subject, "Auto Policy Renewal Quote");
        assert_eq!(rows[1].body, "Want to grab lunch?");
    }

    #[test]
    fn test_received_date_time_suffix() {
        let rows = parse(SAMPLE);
        assert_eq!(rows[0].received_date_time(), "2024-05-01T09:00:00Z");
    }

    #[test]
    fn test_tally_continues_past_failures() {
        // Mid-batch failures must not short the remaining rows
        let outcomes: Vec<Result<(), &str>> =
            vec![Ok(()), Err("409 conflict"), Ok(()), Err("503"), Ok(())];
        let total = outcomes.len() as u32;

        let report = tally_seed_outcomes(outcomes);
        assert_eq!(report.created, 3);
        assert_eq!(report.failed, 2);
        assert_eq!(report.total(), total);
    }

    #[test]
    fn test_tally_all_failures_counts_every_row() {
        let outcomes: Vec<Result<(), &str>> = vec![Err("a"), Err("b")];
        let report = tally_seed_outcomes(outcomes);
        assert_eq!(report.created, 0);
        assert_eq!(report.failed, 2);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_tally_empty_batch() {
        let report = tally_seed_outcomes(Vec::<Result<(), &str>>::new());
        assert_eq!(report, SeedReport::default());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_to_message_is_not_a_draft() {
        let rows = parse(SAMPLE);
        let msg = rows[0].to_message();
        assert!(!msg.is_draft);
        assert_eq!(msg.received_date_time, "2024-05-01T09:00:00Z");
        assert_eq!(msg.body.content_type, "Text");
        assert_eq!(
            msg.from.email_address.address.as_deref(),
            Some("jane@example.com")
        );
        assert_eq!(msg.from.email_address.name.as_deref(), Some("Jane Doe"));
    }
}
