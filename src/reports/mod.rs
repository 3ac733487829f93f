// ===== phigauge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use phigauge::batch::BatchEntry;
use phigauge::config::ScoringParams;
use phigauge::imaging::ImageInfo;
use phigauge::report::Report;
use phigauge::scorer::{Status, GOLDEN_RATIO};
use strum::IntoEnumIterator;

fn status_color(status: Status) -> Color {
    match status {
        Status::Excellent => Color::Green,
        Status::Good => Color::Cyan,
        Status::Fair => Color::Yellow,
        Status::NotClose => Color::Red,
    }
}

pub fn print_measurement(report: &Report, image: Option<&ImageInfo>) {
    let m = &report.measurement;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Golden Ratio Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{}/100", m.score))
            .fg(status_color(m.status))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(m.status.label()).fg(status_color(m.status)),
    ]);
    table.add_row(vec![
        Cell::new("Measured Ratio"),
        Cell::new(format!("{:.4}", m.ratio)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Difference from φ"),
        Cell::new(format!("{:.4}", m.difference)),
    ]);
    table.add_row(vec![
        Cell::new("Dimensions"),
        Cell::new(format!("Long: {}, Short: {} px", m.long_side, m.short_side)),
    ]);

    if let Some(sel) = &report.selection {
        table.add_row(vec![
            Cell::new("From Selection"),
            Cell::new(format!("{} ({}×{} px)", sel, sel.width(), sel.height())),
        ]);
    }
    if let Some(img) = image {
        let name = img
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new("Image"),
            Cell::new(format!("{} ({}×{} px)", name, img.width, img.height)),
        ]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn print_status_legend(params: &ScoringParams) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new(format!("|ratio - φ|  (φ = {:.10})", GOLDEN_RATIO)),
        Cell::new("Status"),
    ]);

    for status in Status::iter() {
        let band = match status {
            Status::Excellent => format!("< {}", params.threshold_excellent),
            Status::Good => format!(
                "{} .. {}",
                params.threshold_excellent, params.threshold_good
            ),
            Status::Fair => format!("{} .. {}", params.threshold_good, params.threshold_fair),
            Status::NotClose => format!(">= {}", params.threshold_fair),
        };
        table.add_row(vec![
            Cell::new(band),
            Cell::new(status.label()).fg(status_color(status)),
        ]);
    }
    println!("{}", table);
}

pub fn print_batch_report(entries: &[BatchEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Line"),
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Selection"),
        Cell::new("Ratio"),
        Cell::new("Diff"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Status"),
    ]);

    for i in [0, 3, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for e in entries {
        match &e.outcome {
            Ok(report) => {
                let m = &report.measurement;
                let sel = report
                    .selection
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(e.line),
                    Cell::new(&e.label).add_attribute(Attribute::Bold),
                    Cell::new(sel),
                    Cell::new(format!("{:.4}", m.ratio)),
                    Cell::new(format!("{:.4}", m.difference)),
                    Cell::new(m.score).fg(status_color(m.status)),
                    Cell::new(m.status.label()),
                ]);
            }
            Err(err) => {
                table.add_row(vec![
                    Cell::new(e.line),
                    Cell::new(&e.label).add_attribute(Attribute::Bold),
                    Cell::new(err.to_string()).fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("ERROR").fg(Color::Red),
                ]);
            }
        }
    }
    println!("\n{}", table);
}
