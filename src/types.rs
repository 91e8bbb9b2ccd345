use serde::Serialize;

/// A single discovered account, serialized as one output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    #[serde(rename = "IP")]
    pub ip: String,
    #[serde(rename = "Username")]
    pub username: String,
}

/// Counters accumulated over one run and reported in the final summary.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunSummary {
    /// Input rows consumed, including skipped ones
    pub rows_processed: usize,
    /// Output rows written
    pub accounts_found: usize,
    /// Rows dropped for a missing host identifier or an empty results field
    pub rows_skipped: usize,
    /// Rows processed to completion that still yielded no accounts
    pub rows_without_accounts: usize,
}
