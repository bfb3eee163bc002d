use std::path::PathBuf;

use gamelink_link::LinkSummary;
use gamelink_model::Source;

#[derive(Debug)]
pub struct NormalizeResult {
    pub source: Source,
    pub input: PathBuf,
    pub output: PathBuf,
    pub raw_records: usize,
    pub records: usize,
}

#[derive(Debug)]
pub struct LinkResult {
    pub output: PathBuf,
    pub summary: LinkSummary,
}
