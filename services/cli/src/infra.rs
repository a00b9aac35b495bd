use brsr_core::error::AppError;
use brsr_core::record::DisclosureRecord;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read a record from `path`, or from stdin when the path is `-`.
pub(crate) fn read_record(path: &Path) -> Result<DisclosureRecord, AppError> {
    let record = if path == Path::new("-") {
        DisclosureRecord::from_reader(io::stdin().lock())?
    } else {
        DisclosureRecord::from_reader(BufReader::new(File::open(path)?))?
    };
    debug!(input = %path.display(), "loaded disclosure record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2024-03-31 "),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date"))
        );
        assert!(parse_date("March 31").is_err());
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = read_record(Path::new("does/not/exist.json")).expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)), "got {err:?}");
    }
}
