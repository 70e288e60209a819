//! Shared fixtures for infra integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use talentdesk_core::{AvailabilityQuery, MockClock};
use talentdesk_domain::OfficeHoursPolicy;
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Availability query over the default policy with today pinned.
pub fn query_at(today: NaiveDate) -> AvailabilityQuery {
    AvailabilityQuery::new(OfficeHoursPolicy::default(), Arc::new(MockClock::at_date(today)))
}

/// Write `contents` to a temporary file with the given extension.
pub fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}
