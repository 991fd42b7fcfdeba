//! # Floem Responsive
//! Named breakpoints and a wrapper that shows or hides content depending on the
//! size of the viewport.
//!
//! ## Example
//! ```rust
//! use floem_responsive::prelude::*;
//!
//! let viewport = WindowViewport::new((1000.0, 800.0));
//! let breakpoints = Breakpoints::default().with(Breakpoint::Md, 1024);
//!
//! let (mobile_menu, sidebar) = ResponsiveProvider::new(breakpoints).provide(|| {
//!     (
//!         Responsive::new()
//!             .hidden_from(Breakpoint::Md)
//!             .text("☰")
//!             .mount(viewport.clone()),
//!         Responsive::new()
//!             .tag("aside")
//!             .visible_from(Breakpoint::Md)
//!             .attr("class", "sidebar")
//!             .mount(viewport.clone()),
//!     )
//! });
//!
//! assert!(mobile_menu.is_visible());
//! assert!(!sidebar.is_visible());
//!
//! viewport.resize((1280.0, 800.0));
//! assert!(!mobile_menu.is_visible());
//! assert!(sidebar.render().is_some());
//! ```
//!
//! ## Breakpoints
//! A [`Breakpoints`] set maps `xs`, `sm`, `md`, `lg`, `xl` and `xxl` to pixel
//! thresholds. The defaults are 480, 768, 992, 1200, 1600 and 1920.
//! [`ResponsiveProvider`] makes a custom set ambient while a subtree is built;
//! without one every wrapper uses the defaults.
//!
//! ## Visibility
//! - `hidden_from(b)`: visible while the viewport is at most `b` pixels.
//! - `visible_from(b)`: visible while the viewport is at least `b` pixels.
//! - Both set: visible only when both hold.
//!
//! Wrappers measure the width by default; [`Axis::Height`] switches to the height.
//! A breakpoint name that does not parse is logged and the wrapper keeps
//! whatever visibility it had before.
//!
//! ## Viewports
//! The host owns the window. It implements [`Viewport`], or feeds a
//! [`WindowViewport`] with its resize events, and each mounted wrapper keeps one
//! resize listener until its [`ResponsiveHandle`] is dropped.

pub mod breakpoints;
pub mod element;
pub mod provider;
pub mod responsive;
pub mod viewport;
pub mod visibility;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use element::{Attributes, Element, Node, Tag};
pub use provider::{ResponsiveProvider, use_breakpoints};
pub use responsive::{Responsive, ResponsiveHandle};
pub use viewport::{Axis, ListenerId, ResizeCallback, ResizeSubscription, Viewport, WindowViewport};
pub use visibility::{InvalidBreakpoint, QueryField, VisibilityQuery, evaluate};

pub use floem_reactive as reactive;
pub use peniko;

pub mod prelude {
    pub use crate::{
        Axis, Breakpoint, Breakpoints, Element, Node, Responsive, ResponsiveHandle,
        ResponsiveProvider, Tag, Viewport, WindowViewport, use_breakpoints,
    };
    pub use floem_reactive::{SignalGet, SignalUpdate};
}
