/// Column names and filter tokens shared across the pipeline.
/// These constants keep the input contract and the noise filter consistent
/// between the validator, the row processor, and the tests.
// Required input columns (matched exactly, case-sensitive)
pub const IP_COLUMN: &str = "IP";
pub const RESULTS_COLUMN: &str = "Results";

// Output header, written once before any data rows
pub const OUTPUT_HEADER: [&str; 2] = ["IP", "Username"];

// Header artifacts that show up inside results blobs; compared
// case-insensitively and never emitted as usernames
pub const NOISE_TOKENS: [&str; 4] = ["username", "results", "user", "name"];

// Longest legal local account name, enforced independently of the pattern
pub const MAX_USERNAME_LEN: usize = 32;
