//! Tests for breakpoint names that arrive as text.
//!
//! An unknown name is reported and the wrapper keeps the visibility it had
//! before the change, instead of forcing it either way.

use floem_responsive_test::prelude::*;

#[test]
fn test_valid_names_behave_like_typed() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let by_name = Responsive::new()
        .hidden_from_name("md")
        .mount(viewport.viewport());
    let typed = Responsive::new()
        .hidden_from(Breakpoint::Md)
        .mount(viewport.viewport());
    assert_eq!(by_name.is_visible(), typed.is_visible());
    assert!(!by_name.is_visible());
}

#[test]
fn test_invalid_name_at_mount_stays_visible() {
    let viewport = TestViewport::new(4000.0, 800.0);
    let handle = Responsive::new()
        .hidden_from_name("huge")
        .mount(viewport.viewport());
    assert!(handle.is_visible());
    assert!(handle.render().is_some());

    // Resizes re-run the evaluation, which keeps failing on the same name.
    viewport.resize_width(100.0);
    assert!(handle.is_visible());
}

#[test]
fn test_invalid_name_keeps_hidden_state() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let handle = Responsive::new()
        .hidden_from(Breakpoint::Md)
        .mount(viewport.viewport());
    let tracker = VisibilityTracker::track(&handle);
    assert!(!handle.is_visible());

    handle.set_hidden_from_name(Some("MD"));
    assert!(!handle.is_visible());

    viewport.resize_width(300.0);
    assert!(!handle.is_visible());
    assert!(tracker.transitions().is_empty());
}

#[test]
fn test_invalid_visible_from_after_valid_hidden_from() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let handle = Responsive::new()
        .hidden_from(Breakpoint::Lg)
        .mount(viewport.viewport());
    assert!(handle.is_visible());

    // `hidden_from` alone would hide at 1300px, but the bad name aborts evaluation.
    handle.set_visible_from_name(Some("tablet"));
    viewport.resize_width(1300.0);
    assert!(handle.is_visible());
}

#[test]
fn test_recovers_once_name_is_fixed() {
    let viewport = TestViewport::new(1300.0, 800.0);
    let handle = Responsive::new()
        .visible_from_name("desktop")
        .mount(viewport.viewport());
    assert!(handle.is_visible());

    handle.set_visible_from_name(Some("xl"));
    assert!(!handle.is_visible());

    handle.set_visible_from_name(Some("lg"));
    assert!(handle.is_visible());
}

#[test]
fn test_evaluate_reports_field_and_name() {
    let query = VisibilityQuery {
        visible_from: Some("xxxl".to_string()),
        ..Default::default()
    };
    let err = evaluate(&query, &Breakpoints::default(), 1000.0).unwrap_err();
    assert_eq!(err.field, QueryField::VisibleFrom);
    assert_eq!(err.name, "xxxl");
    assert!(!Breakpoint::is_valid_name(&err.name));
}
