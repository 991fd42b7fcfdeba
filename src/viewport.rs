//! # Viewport
//!
//! The viewport is the display area a [`Responsive`](crate::Responsive) wrapper measures.
//! It is owned by the host, which reports the current size and notifies
//! listeners whenever the window is resized.
//!
//! [`WindowViewport`] is the host side of that contract: the embedding
//! application forwards its window resize events to [`WindowViewport::resize`]
//! and every mounted wrapper sees the new size synchronously.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use peniko::kurbo::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use strum::{Display, EnumString};

pub type ResizeCallback = dyn Fn(Size);

new_key_type! {
    /// Identifies a resize listener registered on a [`Viewport`].
    pub struct ListenerId;
}

/// The viewport dimension a wrapper compares against its breakpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    #[default]
    Width,
    Height,
}

impl Axis {
    pub fn of(self, size: Size) -> f64 {
        match self {
            Axis::Width => size.width,
            Axis::Height => size.height,
        }
    }
}

/// A display area that can be measured and observed for resizes.
pub trait Viewport {
    /// The current size of the display area.
    fn size(&self) -> Size;

    /// Registers `listener` to be called with the new size after every resize.
    fn add_resize_listener(&self, listener: Rc<ResizeCallback>) -> ListenerId;

    /// Removes a listener. Removing an unknown id does nothing.
    fn remove_resize_listener(&self, id: ListenerId);
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn add_resize_listener(&self, listener: Rc<ResizeCallback>) -> ListenerId {
        (**self).add_resize_listener(listener)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        (**self).remove_resize_listener(id)
    }
}

/// A resize listener that stays registered for as long as this value lives.
///
/// Dropping the subscription removes the listener, so every exit path of the
/// owner releases it.
#[derive(educe::Educe)]
#[educe(Debug)]
#[must_use = "dropping a ResizeSubscription removes the listener immediately"]
pub struct ResizeSubscription {
    #[educe(Debug(ignore))]
    viewport: Rc<dyn Viewport>,
    id: ListenerId,
}

impl ResizeSubscription {
    pub fn new(viewport: Rc<dyn Viewport>, listener: Rc<ResizeCallback>) -> Self {
        let id = viewport.add_resize_listener(listener);
        tracing::debug!(?id, "resize listener added");
        Self { viewport, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.viewport.remove_resize_listener(self.id);
        tracing::debug!(id = ?self.id, "resize listener removed");
    }
}

#[derive(educe::Educe)]
#[educe(Debug)]
struct WindowViewportState {
    size: Cell<Size>,
    #[educe(Debug(ignore))]
    listeners: RefCell<SlotMap<ListenerId, Rc<ResizeCallback>>>,
}

/// A viewport driven by the host window.
///
/// Clones share the same size and listener set.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    state: Rc<WindowViewportState>,
}

impl WindowViewport {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            state: Rc::new(WindowViewportState {
                size: Cell::new(size.into()),
                listeners: RefCell::new(SlotMap::with_key()),
            }),
        }
    }

    /// Records the new window size and notifies every listener.
    ///
    /// Listeners may add or remove listeners while being notified; those
    /// changes take effect for the next resize.
    pub fn resize(&self, size: impl Into<Size>) {
        let size = size.into();
        self.state.size.set(size);

        let listeners: SmallVec<[Rc<ResizeCallback>; 4]> =
            self.state.listeners.borrow().values().cloned().collect();
        tracing::trace!(
            width = size.width,
            height = size.height,
            listeners = listeners.len(),
            "viewport resized"
        );
        for listener in listeners {
            listener(size);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl Viewport for WindowViewport {
    fn size(&self) -> Size {
        self.state.size.get()
    }

    fn add_resize_listener(&self, listener: Rc<ResizeCallback>) -> ListenerId {
        self.state.listeners.borrow_mut().insert(listener)
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.state.listeners.borrow_mut().remove(id);
    }
}
