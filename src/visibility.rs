//! Visibility rules for a wrapper.
//!
//! A wrapper starts visible. `hidden_from` hides it once the viewport grows past
//! the named threshold, `visible_from` hides it while the viewport is still
//! below the named threshold. When both are set, either one can hide it.

use std::fmt;

use crate::{
    breakpoints::{Breakpoint, Breakpoints},
    viewport::Axis,
};

/// The per-instance configuration that decides visibility.
///
/// Breakpoint references are kept as names so configuration that arrives as
/// text can be validated at evaluation time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityQuery {
    pub hidden_from: Option<String>,
    pub visible_from: Option<String>,
    pub axis: Axis,
}

impl VisibilityQuery {
    pub fn hidden_from(mut self, breakpoint: Breakpoint) -> Self {
        self.hidden_from = Some(breakpoint.name().to_owned());
        self
    }

    pub fn visible_from(mut self, breakpoint: Breakpoint) -> Self {
        self.visible_from = Some(breakpoint.name().to_owned());
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}

/// The query field that carried a bad breakpoint name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryField {
    HiddenFrom,
    VisibleFrom,
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryField::HiddenFrom => "hidden_from",
            QueryField::VisibleFrom => "visible_from",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidBreakpoint {
    pub field: QueryField,
    pub name: String,
    source: strum::ParseError,
}

impl fmt::Display for InvalidBreakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a breakpoint name for {}, expected one of xs, sm, md, lg, xl, xxl",
            self.name, self.field
        )
    }
}

impl std::error::Error for InvalidBreakpoint {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn resolve(field: QueryField, name: &str) -> Result<Breakpoint, InvalidBreakpoint> {
    name.parse().map_err(|source| InvalidBreakpoint {
        field,
        name: name.to_owned(),
        source,
    })
}

/// Decides whether content is visible at `measurement` pixels along the query's axis.
///
/// `hidden_from` is checked before `visible_from`; the first invalid name is
/// returned as the error and nothing else is evaluated.
pub fn evaluate(
    query: &VisibilityQuery,
    breakpoints: &Breakpoints,
    measurement: f64,
) -> Result<bool, InvalidBreakpoint> {
    let mut visible = true;

    if let Some(name) = &query.hidden_from {
        let breakpoint = resolve(QueryField::HiddenFrom, name)?;
        if f64::from(breakpoints[breakpoint]) < measurement {
            visible = false;
        }
    }

    if let Some(name) = &query.visible_from {
        let breakpoint = resolve(QueryField::VisibleFrom, name)?;
        if f64::from(breakpoints[breakpoint]) > measurement {
            visible = false;
        }
    }

    Ok(visible)
}
