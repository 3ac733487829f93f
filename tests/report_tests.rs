use phigauge::geometry::Selection;
use phigauge::report::{Report, DEFAULT_REPORT_NAME};
use phigauge::scorer::evaluate;

fn sample() -> Report {
    let sel = Selection::new(56, 14, 150, 96).unwrap();
    let m = evaluate(sel.width(), sel.height()).unwrap();
    Report::new(m, Some(sel))
}

#[test]
fn test_text_report_layout() {
    let expected = "Golden Ratio Analysis\n\
                    Ratio: 1.1463\n\
                    Score: 24/100\n\
                    Dimensions: 94 × 82 px\n\
                    Selection: X 56-150, Y 14-96";
    assert_eq!(sample().to_text(), expected);
    assert!(!sample().to_text().ends_with('\n'));
}

#[test]
fn test_text_report_without_selection() {
    let report = Report::new(evaluate(162, 100).unwrap(), None);
    let text = report.to_text();
    assert!(text.contains("Ratio: 1.6200"));
    assert!(text.contains("Score: 99/100"));
    assert!(!text.contains("Selection"));
    assert!(text.ends_with("Dimensions: 162 × 100 px"));
}

#[test]
fn test_json_report_fields() {
    let json = sample().with_label("door").to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["label"], "door");
    assert_eq!(v["score"], 24);
    assert_eq!(v["long_side"], 94);
    assert_eq!(v["short_side"], 82);
    assert_eq!(v["status"], "not_close");
    assert_eq!(v["selection"]["x_start"], 56);

    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back.label.as_deref(), Some("door"));
    assert_eq!(back.selection, sample().selection);
}

#[test]
fn test_write_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_REPORT_NAME);

    sample().write_text(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Golden Ratio Analysis\n"));

    let json_path = dir.path().join("golden_ratio.json");
    sample().write_json(&json_path).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(v["score"], 24);
}
