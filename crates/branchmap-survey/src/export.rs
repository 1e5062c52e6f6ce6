//! CSV export of enriched branch records.

use std::fs::File;
use std::io::Write;

use chrono::Local;

use crate::enrich::BranchRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize record: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the enriched records as a UTF-8 CSV with a byte order mark, so
/// spreadsheet tools render the Thai text correctly.
///
/// Returns the filename written, or `Ok(None)` without touching the
/// filesystem when there is nothing to export. When `filename` is not given,
/// a timestamped default is used.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or a record fails
/// to serialize.
pub fn write_csv(
    records: &[BranchRecord],
    filename: Option<&str>,
) -> Result<Option<String>, ExportError> {
    if records.is_empty() {
        tracing::warn!("no records to export; skipping file creation");
        return Ok(None);
    }

    let filename = match filename {
        Some(name) => name.to_string(),
        None => format!("branchmap_{}.csv", Local::now().format("%Y%m%d_%H%M%S")),
    };

    let mut file = File::create(&filename)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(file = %filename, rows = records.len(), "export written");
    Ok(Some(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, place_id: &str) -> BranchRecord {
        BranchRecord {
            branch_name: name.to_string(),
            address: "123 ถนนสุขุมวิท กรุงเทพมหานคร".to_string(),
            latitude: 13.668,
            longitude: 100.634,
            average_rating: 4.3,
            review_count: 211,
            location_type: "secondary road/urban",
            audience: Some("motorists/travelers".to_string()),
            branches_within_2km: 1,
            nearest_branch_km: 1.8,
            place_id: place_id.to_string(),
            business_status: Some("OPERATIONAL".to_string()),
        }
    }

    #[test]
    fn writes_bom_header_and_rows() {
        let path = std::env::temp_dir().join("branchmap_export_test.csv");
        let path_str = path.to_str().unwrap();

        let records = vec![
            record("Cafe Amazon สาขาบางนา", "a"),
            record("Cafe Amazon ปตท. รังสิต", "b"),
        ];
        let written = write_csv(&records, Some(path_str)).unwrap();
        assert_eq!(written.as_deref(), Some(path_str));

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xef\xbb\xbf");

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("branch_name,address,latitude"));
        assert!(lines[0].ends_with("place_id"));
        assert!(lines[1].contains("สาขาบางนา"));
        assert!(!lines[0].contains("business_status"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_audience_serializes_as_empty_cell() {
        let path = std::env::temp_dir().join("branchmap_export_empty_audience.csv");
        let path_str = path.to_str().unwrap();

        let mut r = record("Cafe Amazon เชียงใหม่", "c");
        r.audience = None;
        write_csv(&[r], Some(path_str)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains(",secondary road/urban,,1,"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_input_writes_nothing() {
        let result = write_csv(&[], None).unwrap();
        assert!(result.is_none());
    }
}
