//! I/O shell around the text layer: header validation, the row-processing
//! loop, and CSV reading/writing.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info, warn};

use crate::constants::{IP_COLUMN, OUTPUT_HEADER, RESULTS_COLUMN};
use crate::error::{ExtractError, Result};
use crate::parser;
use crate::types::{AccountRecord, RunSummary};

/// Positions of the two required columns within the header row. Fields are
/// read by position so that ragged rows degrade to empty values instead of
/// failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub ip: usize,
    pub results: usize,
}

/// Checks the header row for the required `IP` and `Results` columns.
///
/// A UTF-8 BOM on the first header cell is stripped before comparison.
pub fn validate_headers(headers: &StringRecord) -> Result<ColumnLayout> {
    let names: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            }
        })
        .collect();

    let ip = names.iter().position(|name| *name == IP_COLUMN);
    let results = names.iter().position(|name| *name == RESULTS_COLUMN);

    match (ip, results) {
        (Some(ip), Some(results)) => Ok(ColumnLayout { ip, results }),
        _ => Err(ExtractError::MissingColumns {
            found: names.iter().map(|name| name.to_string()).collect(),
        }),
    }
}

/// Handles one input record, writing any discovered accounts.
///
/// Row-level problems are warnings, never errors: a bad row is skipped and
/// the run continues.
fn process_row<W: Write>(
    row_number: usize,
    record: &StringRecord,
    layout: ColumnLayout,
    writer: &mut csv::Writer<W>,
    summary: &mut RunSummary,
) -> Result<()> {
    let ip = record.get(layout.ip).unwrap_or("").trim();
    let results = record.get(layout.results).unwrap_or("");

    if ip.is_empty() {
        warn!("Row {} has no IP address", row_number);
        summary.rows_skipped += 1;
        return Ok(());
    }
    if results.is_empty() {
        warn!("Row {} ({}) has no results", row_number, ip);
        summary.rows_skipped += 1;
        return Ok(());
    }

    let usernames = parser::extract_usernames(results);
    if usernames.is_empty() {
        warn!("No valid usernames found for {}", ip);
        summary.rows_without_accounts += 1;
        return Ok(());
    }

    for username in usernames {
        writer.serialize(AccountRecord {
            ip: ip.to_string(),
            username,
        })?;
        summary.accounts_found += 1;
    }
    Ok(())
}

/// Runs the whole extraction: open the input, validate the header, stream
/// every row through the processor, and flush the output.
///
/// The output handle is only created once the header has validated, so a
/// structural failure leaves no partial file behind.
pub fn run(input: &Path, output: Option<&Path>) -> Result<RunSummary> {
    let contents = fs::read_to_string(input).map_err(|source| ExtractError::Open {
        path: input.display().to_string(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_bytes());
    let layout = validate_headers(reader.headers()?)?;
    debug!("header validated: {:?}", layout);

    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(OUTPUT_HEADER)?;

    let mut summary = RunSummary::default();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        summary.rows_processed += 1;
        process_row(index + 1, &record, layout, &mut writer, &mut summary)?;
    }
    writer.flush()?;

    info!(
        "Processed {} IPs, found {} user accounts",
        summary.rows_processed, summary.accounts_found
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_both_columns_validates() {
        let headers = StringRecord::from(vec!["IP", "Results"]);
        let layout = validate_headers(&headers).unwrap();
        assert_eq!(layout, ColumnLayout { ip: 0, results: 1 });
    }

    #[test]
    fn test_columns_found_by_name_not_position() {
        let headers = StringRecord::from(vec!["Hostname", "Results", "IP"]);
        let layout = validate_headers(&headers).unwrap();
        assert_eq!(layout, ColumnLayout { ip: 2, results: 1 });
    }

    #[test]
    fn test_bom_on_first_header_cell_is_ignored() {
        let headers = StringRecord::from(vec!["\u{feff}IP", "Results"]);
        let layout = validate_headers(&headers).unwrap();
        assert_eq!(layout, ColumnLayout { ip: 0, results: 1 });
    }

    #[test]
    fn test_missing_results_column_is_structural() {
        let headers = StringRecord::from(vec!["IP", "Host"]);
        match validate_headers(&headers) {
            Err(ExtractError::MissingColumns { found }) => {
                assert_eq!(found, vec!["IP".to_string(), "Host".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let headers = StringRecord::from(vec!["ip", "results"]);
        assert!(validate_headers(&headers).is_err());
    }
}
