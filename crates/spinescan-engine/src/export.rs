//! CSV export of accumulated results.

use std::fs::File;
use std::io;
use std::path::Path;

use spinescan_types::{ImageResult, Record, RowLayout};
use tracing::info;

use crate::error::ScanError;

/// Flatten per-image results into table rows, in input order.
pub fn records(layout: RowLayout, results: &[ImageResult]) -> Vec<Record> {
    let row = |image: &str, artist: &str, album: &str| Record {
        image: image.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
    };

    match layout {
        RowLayout::PerLine => results
            .iter()
            .flat_map(|r| {
                r.fields
                    .iter()
                    .map(move |f| row(&r.filename, &f.artist, &f.album))
            })
            .collect(),
        RowLayout::PerImage => results
            .iter()
            .filter_map(|r| {
                r.fields
                    .first()
                    .filter(|f| !f.is_empty())
                    .map(|f| row(&r.filename, &f.artist, &f.album))
            })
            .collect(),
    }
}

/// Write the header and rows to `writer`. Returns the number of data rows.
pub fn write_records<W: io::Write>(
    writer: W,
    layout: RowLayout,
    results: &[ImageResult],
) -> Result<usize, csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(layout.header())?;

    let rows = records(layout, results);
    for record in &rows {
        wtr.write_record([&record.image, &record.artist, &record.album])?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

/// Write results to `path`, replacing any existing file.
pub fn write_csv(path: &Path, layout: RowLayout, results: &[ImageResult]) -> Result<usize, ScanError> {
    let export_err = |source: csv::Error| ScanError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| export_err(e.into()))?;
    let rows = write_records(file, layout, results).map_err(export_err)?;

    info!("Results written to {} ({} rows)", path.display(), rows);
    Ok(rows)
}
