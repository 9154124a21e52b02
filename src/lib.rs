//! # spark-styled
//!
//! Pre-bound style props for terminal UI components.
//!
//! Wrap any [`Component`] with a set of default props and get back a new
//! component. Every render overlays the props it is given on those defaults
//! (instance props win) and renders the original component with the result.
//!
//! ```text
//! create_component(target) → Styler → bind(defaults) → Styled
//! Styled::render(props)    → target.render(merge(defaults, props))
//! ```
//!
//! Props are reactive the way spark-tui props are: a
//! [`spark_signals::Signal`] bound as a default stays connected.
//!
//! ## Modules
//!
//! - [`types`] - Style value types (Rgba, Dimension, Attr, etc.)
//! - [`component`] - Component trait, property sets, the styling factory

pub mod component;
pub mod types;

pub use types::*;

pub use component::{
    component, create_component, resolve_name, short_type_name, styled_name, Children,
    Component, FnComponent, MergeProps, Prop, PropertySet, Styled, Styler, Value, CHILDREN,
    DISPLAY_NAME_PREFIX, FALLBACK_NAME,
};
