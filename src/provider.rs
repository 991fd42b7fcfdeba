//! # Providing breakpoints
//!
//! A [`ResponsiveProvider`] makes a [`Breakpoints`] set available to every
//! wrapper built inside [`ResponsiveProvider::provide`], without threading it
//! through each constructor.
//!
//! Wrappers read the ambient set when they are mounted and keep it, so a
//! provider only has to be installed while its subtree is being built. Outside
//! any provider, [`use_breakpoints`] returns [`Breakpoints::default`].
//!
//! ```rust
//! use floem_responsive::{Breakpoint, Breakpoints, ResponsiveProvider, use_breakpoints};
//!
//! let custom = Breakpoints::default().with(Breakpoint::Md, 900);
//! let inside = ResponsiveProvider::new(custom).provide(use_breakpoints);
//! assert_eq!(inside[Breakpoint::Md], 900);
//! assert_eq!(use_breakpoints(), Breakpoints::default());
//! ```

use floem_reactive::{provide_context, use_context};

use crate::breakpoints::Breakpoints;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResponsiveProvider {
    breakpoints: Breakpoints,
}

impl ResponsiveProvider {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Runs `children` with this provider's breakpoints installed, then
    /// reinstalls whatever was ambient before, even if `children` unwinds.
    pub fn provide<T>(self, children: impl FnOnce() -> T) -> T {
        let _restore = RestoreBreakpoints(use_context::<Breakpoints>());
        provide_context(self.breakpoints);
        children()
    }
}

struct RestoreBreakpoints(Option<Breakpoints>);

impl Drop for RestoreBreakpoints {
    fn drop(&mut self) {
        provide_context(self.0.unwrap_or_default());
    }
}

/// The breakpoints of the innermost active provider, or the defaults.
pub fn use_breakpoints() -> Breakpoints {
    use_context::<Breakpoints>().unwrap_or_else(|| {
        tracing::debug!("no responsive provider installed, using default breakpoints");
        Breakpoints::default()
    })
}
