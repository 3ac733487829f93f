use phigauge::error::PhiError;
use phigauge::geometry::Selection;
use phigauge::imaging::ImageInfo;
use phigauge::scorer::{Scorer, Status};
use phigauge::session::Session;

fn sel(x0: u32, y0: u32, x1: u32, y1: u32) -> Selection {
    Selection::new(x0, y0, x1, y1).unwrap()
}

fn session_with_image(w: u32, h: u32) -> Session {
    let mut s = Session::new(Scorer::default());
    s.load_image(ImageInfo::from_size(w, h));
    s
}

#[test]
fn test_calculate_without_selection() {
    let mut s = session_with_image(400, 300);
    assert!(matches!(s.calculate(), Err(PhiError::NoSelection)));
    assert!(s.measurement().is_none());
}

#[test]
fn test_calculate_uses_actual_selection() {
    let mut s = session_with_image(400, 300);
    s.select(sel(10, 20, 172, 120)).unwrap();

    let report = s.calculate().unwrap();
    assert_eq!(report.measurement.long_side, 162);
    assert_eq!(report.measurement.short_side, 100);
    assert_eq!(report.measurement.status, Status::Excellent);
    assert_eq!(report.selection, Some(sel(10, 20, 172, 120)));

    assert_eq!(s.measurement().unwrap().score, 99);
}

#[test]
fn test_new_selection_drops_stale_measurement() {
    let mut s = session_with_image(400, 300);
    s.select(sel(0, 0, 162, 100)).unwrap();
    s.calculate().unwrap();
    assert!(s.measurement().is_some());

    s.select(sel(0, 0, 100, 100)).unwrap();
    assert!(s.measurement().is_none());
    assert_eq!(s.calculate().unwrap().measurement.score, 16);
}

#[test]
fn test_selection_outside_image_is_refused() {
    let mut s = session_with_image(100, 100);
    assert!(matches!(
        s.select(sel(50, 50, 120, 90)),
        Err(PhiError::SelectionOutOfBounds { .. })
    ));
    assert!(s.selection().is_none());
}

#[test]
fn test_too_small_selection_reports_error() {
    let mut s = session_with_image(100, 100);
    s.select(sel(0, 0, 9, 50)).unwrap();
    assert!(matches!(
        s.calculate(),
        Err(PhiError::SelectionTooSmall { width: 9, height: 50, .. })
    ));
    assert!(s.measurement().is_none());
}

#[test]
fn test_new_image_resets_work() {
    let mut s = session_with_image(400, 300);
    s.select(sel(0, 0, 162, 100)).unwrap();
    s.calculate().unwrap();

    assert!(s.load_image(ImageInfo::from_size(640, 480)));
    assert!(s.selection().is_none());
    assert!(s.measurement().is_none());
    assert_eq!(s.image().unwrap().size(), (640, 480));
}

#[test]
fn test_same_size_image_keeps_work() {
    let mut s = session_with_image(400, 300);
    s.select(sel(0, 0, 162, 100)).unwrap();
    s.calculate().unwrap();

    assert!(!s.load_image(ImageInfo::from_size(400, 300)));
    assert!(s.selection().is_some());
    assert!(s.measurement().is_some());
}

#[test]
fn test_clear_keeps_image() {
    let mut s = session_with_image(400, 300);
    s.select(sel(0, 0, 162, 100)).unwrap();
    s.calculate().unwrap();

    s.clear();
    assert!(s.selection().is_none());
    assert!(s.report().is_none());
    assert!(s.image().is_some());
}

#[test]
fn test_select_without_image_skips_bounds() {
    let mut s = Session::default();
    s.select(sel(5000, 5000, 6618, 6000)).unwrap();
    assert_eq!(s.calculate().unwrap().measurement.score, 100);
}
