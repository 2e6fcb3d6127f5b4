//! CSV export for derived table views.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::table::view::TableView;

/// Exports a derived view to a CSV file at the given path.
///
/// Writes the visible column labels as the header row followed by one data
/// row per derived table row. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(view: &TableView, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(view, buf)
}

/// Writes a derived view as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(view: &TableView, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(&view.headers)?;
    for row in &view.rows {
        wtr.write_record(&row.cells)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::table::view::TableView;

    fn routes_view() -> TableView {
        let (columns, rows, spec) = BoardConfig::routes().build();
        TableView::derive(&columns, &rows, &spec)
    }

    #[test]
    fn header_uses_visible_column_labels() {
        let mut buf = Vec::new();
        write_csv(&routes_view(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "No,Code,Location,Delivery,Longitude,Latitude,Route,Status"
        );
    }

    #[test]
    fn row_count_matches_view() {
        let view = routes_view();
        let mut buf = Vec::new();
        write_csv(&view, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 6 data rows
        assert_eq!(lines.len(), 1 + view.rows.len());
        assert_eq!(view.rows.len(), 6);
    }

    #[test]
    fn deterministic_output() {
        let view = routes_view();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&view, &mut buf1).ok();
        write_csv(&view, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let view = routes_view();
        let mut buf = Vec::new();
        write_csv(&view, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(8));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            // Longitude column parses as f64
            let lon: Result<f64, _> = rec.as_ref().map_or("", |r| &r[4]).parse();
            assert!(lon.is_ok(), "longitude should parse as f64");
            row_count += 1;
        }
        assert_eq!(row_count, 6);
    }

    #[test]
    fn hidden_columns_are_not_exported() {
        let (mut columns, rows, spec) = BoardConfig::routes().build();
        columns.set_visibility("longitude", false);
        columns.set_visibility("latitude", false);
        let view = TableView::derive(&columns, &rows, &spec);

        let mut buf = Vec::new();
        write_csv(&view, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let first_line = output.lines().next().unwrap_or("");
        assert_eq!(first_line, "No,Code,Location,Delivery,Route,Status");
    }
}
