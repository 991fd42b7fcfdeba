//! # Breakpoints
//!
//! A [`Breakpoints`] set maps the six named [`Breakpoint`]s to pixel thresholds.
//! Wrappers compare the live viewport size against these thresholds to decide
//! whether their content is shown.
//!
//! ```rust
//! use floem_responsive::{Breakpoint, Breakpoints};
//!
//! let breakpoints = Breakpoints::default().with(Breakpoint::Md, 1024);
//! assert_eq!(breakpoints[Breakpoint::Md], 1024);
//! assert_eq!(breakpoints[Breakpoint::Lg], 1200);
//! ```

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the six named breakpoints.
///
/// The wire names are `xs`, `sm`, `md`, `lg`, `xl` and `xxl`. Parsing is exact
/// and case sensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Returns `true` if `name` is one of the six recognized breakpoint names.
    pub fn is_valid_name(name: &str) -> bool {
        name.parse::<Breakpoint>().is_ok()
    }

    /// The wire name of this breakpoint.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Pixel thresholds for every [`Breakpoint`].
///
/// All six keys are always present. Values are not required to be ordered, a set
/// where `sm` is larger than `md` is accepted as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 480,
            sm: 768,
            md: 992,
            lg: 1200,
            xl: 1600,
            xxl: 1920,
        }
    }
}

impl Breakpoints {
    pub fn get(&self, breakpoint: Breakpoint) -> u32 {
        self[breakpoint]
    }

    /// Returns a copy of this set with one threshold replaced.
    pub fn with(mut self, breakpoint: Breakpoint, px: u32) -> Self {
        self[breakpoint] = px;
        self
    }

    /// Iterates `(breakpoint, threshold)` pairs from `xs` to `xxl`.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::iter().map(move |bp| (bp, self[bp]))
    }
}

impl Index<Breakpoint> for Breakpoints {
    type Output = u32;

    fn index(&self, breakpoint: Breakpoint) -> &Self::Output {
        match breakpoint {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
            Breakpoint::Xxl => &self.xxl,
        }
    }
}

impl IndexMut<Breakpoint> for Breakpoints {
    fn index_mut(&mut self, breakpoint: Breakpoint) -> &mut Self::Output {
        match breakpoint {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }
}
