//! Output formatting for CLI results.

use spinescan_engine::Inspection;
use spinescan_types::{BatchSummary, RowLayout};

/// Output formatter.
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output formatter.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print the outcome of a scan.
    pub fn print_summary(&self, summary: &BatchSummary) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(summary)?);
        } else {
            print!("{}", render_summary(summary));
        }
        Ok(())
    }

    /// Print the intermediate products for one image.
    pub fn print_inspection(&self, inspection: &Inspection) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(inspection)?);
        } else {
            print!("{}", render_inspection(inspection));
        }
        Ok(())
    }
}

fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let layout = match summary.layout {
        RowLayout::PerLine => "one row per line",
        RowLayout::PerImage => "one row per image",
    };

    out.push_str(&format!(
        "Processed {} images from {} ({} without text)\n",
        summary.images_processed, summary.input_dir, summary.images_without_text
    ));
    out.push_str(&format!(
        "Wrote {} rows to {} ({})\n",
        summary.rows_written, summary.output_file, layout
    ));

    if !summary.skipped.is_empty() {
        out.push_str(&format!("Skipped {} images:\n", summary.skipped.len()));
        for skipped in &summary.skipped {
            out.push_str(&format!("  {}: {}\n", skipped.filename, skipped.message));
        }
    }
    out
}

fn render_inspection(inspection: &Inspection) -> String {
    let mut out = format!(
        "{} ({}x{}): {} detections, {} lines\n",
        inspection.filename,
        inspection.width,
        inspection.height,
        inspection.detections.len(),
        inspection.lines.len()
    );

    if inspection.lines.is_empty() {
        out.push_str("No text detected\n");
    }
    for line in &inspection.lines {
        out.push_str(&format!("  [y={:.0}] {}\n", line.mid_y, line.text()));
    }

    for fields in &inspection.fields {
        out.push_str(&format!(
            "Artist: {:?}, Album: {:?}\n",
            fields.artist, fields.album
        ));
    }
    out
}
