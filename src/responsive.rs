//! # Responsive
//!
//! [`Responsive`] shows or hides its children depending on where the viewport
//! sits relative to a named breakpoint.
//!
//! ```rust
//! use floem_responsive::{Breakpoint, Responsive, WindowViewport};
//!
//! let viewport = WindowViewport::new((1000.0, 800.0));
//!
//! // Desktop navigation, shown from `lg` (1200px) upwards.
//! let nav = Responsive::new()
//!     .tag("nav")
//!     .visible_from(Breakpoint::Lg)
//!     .attr("class", "desktop-nav")
//!     .text("Home | Docs | Blog")
//!     .mount(viewport.clone());
//! assert!(nav.render().is_none());
//!
//! viewport.resize((1300.0, 800.0));
//! assert_eq!(nav.render().unwrap().tag.as_str(), "nav");
//! ```
//!
//! A mounted wrapper is a [`ResponsiveHandle`]. It holds its own measurement and
//! resize subscription; dropping the handle removes the subscription and
//! disposes its reactive state.

use std::{fmt, rc::Rc};

use floem_reactive::{RwSignal, Scope, SignalGet, SignalUpdate};
use peniko::kurbo::Size;

use crate::{
    breakpoints::{Breakpoint, Breakpoints},
    element::{Attributes, Element, Node, Tag},
    provider::use_breakpoints,
    viewport::{Axis, ResizeSubscription, Viewport},
    visibility::{VisibilityQuery, evaluate},
};

/// Configuration for a conditional visibility wrapper.
///
/// Nothing is measured until [`Responsive::mount`] is called.
#[derive(Clone, Debug, Default)]
pub struct Responsive {
    tag: Tag,
    attributes: Attributes,
    children: Vec<Node>,
    query: VisibilityQuery,
    breakpoints: Option<Breakpoints>,
}

impl Responsive {
    pub fn new() -> Self {
        Self::default()
    }

    /// The host element to render, `div` by default.
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Hide the content once the viewport is larger than `breakpoint`.
    pub fn hidden_from(mut self, breakpoint: Breakpoint) -> Self {
        self.query = self.query.hidden_from(breakpoint);
        self
    }

    /// Like [`hidden_from`](Self::hidden_from), with a name that is validated on mount.
    pub fn hidden_from_name(mut self, name: impl Into<String>) -> Self {
        self.query.hidden_from = Some(name.into());
        self
    }

    /// Hide the content while the viewport is smaller than `breakpoint`.
    pub fn visible_from(mut self, breakpoint: Breakpoint) -> Self {
        self.query = self.query.visible_from(breakpoint);
        self
    }

    /// Like [`visible_from`](Self::visible_from), with a name that is validated on mount.
    pub fn visible_from_name(mut self, name: impl Into<String>) -> Self {
        self.query.visible_from = Some(name.into());
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.query.axis = axis;
        self
    }

    /// Use these breakpoints instead of the ambient ones.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Measures `viewport`, subscribes to its resizes and evaluates visibility.
    ///
    /// Ambient breakpoints are read here, so mount inside
    /// [`ResponsiveProvider::provide`](crate::ResponsiveProvider::provide) to pick
    /// up a provider's set.
    pub fn mount(self, viewport: impl Viewport + 'static) -> ResponsiveHandle {
        let viewport: Rc<dyn Viewport> = Rc::new(viewport);
        let Responsive {
            tag,
            attributes,
            children,
            query,
            breakpoints,
        } = self;
        let breakpoints = breakpoints.unwrap_or_else(use_breakpoints);

        let scope = Scope::new();
        let hidden_from = scope.create_rw_signal(query.hidden_from);
        let visible_from = scope.create_rw_signal(query.visible_from);
        let axis = scope.create_rw_signal(query.axis);
        let breakpoints = scope.create_rw_signal(breakpoints);
        let measurement = scope.create_rw_signal(query.axis.of(viewport.size()));
        let visible = scope.create_rw_signal(true);

        // Re-sample when the axis changes, the first run already has the value.
        scope.create_effect({
            let viewport = viewport.clone();
            move |prev: Option<Axis>| {
                let axis = axis.get();
                if prev.is_some_and(|prev| prev != axis) {
                    measurement.set(axis.of(viewport.size()));
                }
                axis
            }
        });

        scope.create_effect(move |_| {
            let query = VisibilityQuery {
                hidden_from: hidden_from.get(),
                visible_from: visible_from.get(),
                axis: axis.get_untracked(),
            };
            let measurement = measurement.get();
            match evaluate(&query, &breakpoints.get(), measurement) {
                Ok(next) => {
                    if next != visible.get_untracked() {
                        tracing::trace!(visible = next, measurement, "responsive visibility changed");
                        visible.set(next);
                    }
                }
                Err(err) => {
                    tracing::error!(%err, "invalid breakpoint, keeping previous visibility");
                }
            }
        });

        let subscription = ResizeSubscription::new(
            viewport,
            Rc::new(move |size: Size| {
                measurement.set(axis.get_untracked().of(size));
            }),
        );

        ResponsiveHandle {
            scope,
            tag,
            attributes,
            children,
            hidden_from,
            visible_from,
            axis,
            breakpoints,
            measurement,
            visible,
            subscription: Some(subscription),
        }
    }
}

/// A mounted [`Responsive`] wrapper.
pub struct ResponsiveHandle {
    scope: Scope,
    tag: Tag,
    attributes: Attributes,
    children: Vec<Node>,
    hidden_from: RwSignal<Option<String>>,
    visible_from: RwSignal<Option<String>>,
    axis: RwSignal<Axis>,
    breakpoints: RwSignal<Breakpoints>,
    measurement: RwSignal<f64>,
    visible: RwSignal<bool>,
    subscription: Option<ResizeSubscription>,
}

impl ResponsiveHandle {
    /// Whether the content is currently shown. Tracked when read inside an effect.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// A reader for the visibility that does not borrow the handle.
    ///
    /// Reading it inside an effect subscribes the effect to visibility changes.
    /// Once the handle is dropped the reader keeps returning the last value it saw.
    pub fn visibility(&self) -> impl Fn() -> bool + use<> {
        let visible = self.visible;
        let last = std::cell::Cell::new(visible.get_untracked());
        move || {
            if let Some(value) = visible.try_get() {
                last.set(value);
            }
            last.get()
        }
    }

    /// The cached viewport size along the configured axis. Tracked when read
    /// inside an effect.
    pub fn measurement(&self) -> f64 {
        self.measurement.get()
    }

    pub fn axis(&self) -> Axis {
        self.axis.get_untracked()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints.get_untracked()
    }

    /// The host element wrapping the children, or `None` while hidden.
    pub fn render(&self) -> Option<Element> {
        self.is_visible().then(|| Element {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            children: self.children.clone(),
        })
    }

    pub fn set_hidden_from(&self, breakpoint: impl Into<Option<Breakpoint>>) {
        self.hidden_from
            .set(breakpoint.into().map(|bp| bp.name().to_owned()));
    }

    pub fn set_hidden_from_name(&self, name: Option<&str>) {
        self.hidden_from.set(name.map(str::to_owned));
    }

    pub fn set_visible_from(&self, breakpoint: impl Into<Option<Breakpoint>>) {
        self.visible_from
            .set(breakpoint.into().map(|bp| bp.name().to_owned()));
    }

    pub fn set_visible_from_name(&self, name: Option<&str>) {
        self.visible_from.set(name.map(str::to_owned));
    }

    /// Switches the measured dimension and re-samples the viewport.
    pub fn set_axis(&self, axis: Axis) {
        self.axis.set(axis);
    }

    pub fn set_breakpoints(&self, breakpoints: Breakpoints) {
        self.breakpoints.set(breakpoints);
    }

    /// Tears the wrapper down. Equivalent to dropping the handle.
    pub fn unmount(self) {}
}

impl Drop for ResponsiveHandle {
    fn drop(&mut self) {
        // The listener writes into the scope's signals, remove it first.
        drop(self.subscription.take());
        self.scope.dispose();
        tracing::debug!("responsive wrapper unmounted");
    }
}

impl fmt::Debug for ResponsiveHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveHandle")
            .field("tag", &self.tag)
            .field("visible", &self.visible.get_untracked())
            .field("axis", &self.axis.get_untracked())
            .field("measurement", &self.measurement.get_untracked())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
