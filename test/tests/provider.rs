//! Tests for providing breakpoints to wrappers.

use floem_responsive_test::prelude::*;

#[test]
fn test_wrapper_without_provider_uses_defaults() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let handle = Responsive::new()
        .hidden_from(Breakpoint::Md)
        .mount(viewport.viewport());
    assert_eq!(handle.breakpoints(), Breakpoints::default());
    assert!(!handle.is_visible());
}

#[test]
fn test_wrapper_reads_provider_set_at_mount() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let wide_md = Breakpoints::default().with(Breakpoint::Md, 1100);

    let handle = ResponsiveProvider::new(wide_md).provide(|| {
        Responsive::new()
            .hidden_from(Breakpoint::Md)
            .mount(viewport.viewport())
    });
    assert_eq!(handle.breakpoints(), wide_md);
    assert!(handle.is_visible());

    // The provider is gone, the wrapper keeps the set it was mounted with.
    viewport.resize_width(1050.0);
    assert!(handle.is_visible());
    viewport.resize_width(1101.0);
    assert!(!handle.is_visible());
}

#[test]
fn test_sibling_subtrees_get_their_own_provider() {
    let viewport = TestViewport::new(900.0, 800.0);
    let narrow = Breakpoints::default().with(Breakpoint::Sm, 600);
    let wide = Breakpoints::default().with(Breakpoint::Sm, 1000);

    let left = ResponsiveProvider::new(narrow).provide(|| {
        Responsive::new()
            .hidden_from(Breakpoint::Sm)
            .mount(viewport.viewport())
    });
    let right = ResponsiveProvider::new(wide).provide(|| {
        Responsive::new()
            .hidden_from(Breakpoint::Sm)
            .mount(viewport.viewport())
    });
    let outside = Responsive::new()
        .hidden_from(Breakpoint::Sm)
        .mount(viewport.viewport());

    assert!(!left.is_visible());
    assert!(right.is_visible());
    assert!(!outside.is_visible());
    assert_eq!(outside.breakpoints(), Breakpoints::default());
}

#[test]
fn test_nested_provider_shadows_outer() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let outer = Breakpoints::default().with(Breakpoint::Lg, 900);
    let inner = Breakpoints::default().with(Breakpoint::Lg, 1100);

    let (outer_handle, inner_handle, after_inner) = ResponsiveProvider::new(outer).provide(|| {
        let outer_handle = Responsive::new()
            .hidden_from(Breakpoint::Lg)
            .mount(viewport.viewport());
        let inner_handle = ResponsiveProvider::new(inner).provide(|| {
            Responsive::new()
                .hidden_from(Breakpoint::Lg)
                .mount(viewport.viewport())
        });
        let after_inner = Responsive::new()
            .hidden_from(Breakpoint::Lg)
            .mount(viewport.viewport());
        (outer_handle, inner_handle, after_inner)
    });

    assert!(!outer_handle.is_visible());
    assert!(inner_handle.is_visible());
    assert!(!after_inner.is_visible());
    assert_eq!(after_inner.breakpoints(), outer);
}

#[test]
fn test_explicit_breakpoints_win_over_provider() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let provided = Breakpoints::default().with(Breakpoint::Md, 2000);
    let explicit = Breakpoints::default().with(Breakpoint::Md, 500);

    let handle = ResponsiveProvider::new(provided).provide(|| {
        Responsive::new()
            .breakpoints(explicit)
            .hidden_from(Breakpoint::Md)
            .mount(viewport.viewport())
    });
    assert_eq!(handle.breakpoints(), explicit);
    assert!(!handle.is_visible());
}

#[test]
fn test_replacing_breakpoints_recomputes() {
    let viewport = TestViewport::new(1000.0, 800.0);
    let handle = Responsive::new()
        .visible_from(Breakpoint::Xl)
        .mount(viewport.viewport());
    assert!(!handle.is_visible());

    handle.set_breakpoints(Breakpoints::default().with(Breakpoint::Xl, 1000));
    assert!(handle.is_visible());
}
