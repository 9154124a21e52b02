//! Styler - pre-bind default props to a component.
//!
//! `create_component(target)` returns a [`Styler`]; binding defaults through
//! it yields a [`Styled`] component. Each render of a `Styled` overlays the
//! instance props on the bound defaults and renders the target with the
//! result.
//!
//! # Example
//!
//! ```
//! use spark_styled::{create_component, Component, PropertySet, Value};
//!
//! struct Button;
//!
//! impl Component for Button {
//!     type Props = PropertySet;
//!     type Output = PropertySet;
//!
//!     fn render(&self, props: PropertySet) -> PropertySet {
//!         props
//!     }
//!
//!     fn display_name(&self) -> Option<&str> {
//!         Some("Button")
//!     }
//! }
//!
//! let danger = create_component(Button)
//!     .bind(Some(PropertySet::new().with("color", "red")));
//!
//! let rendered = danger.render(PropertySet::new().with("size", "large"));
//! assert_eq!(rendered.value("color"), Some(Value::from("red")));
//! assert_eq!(rendered.value("size"), Some(Value::from("large")));
//! assert_eq!(danger.name(), "CustomButton");
//! ```

use std::fmt;

use super::name::styled_name;
use super::{Component, MergeProps};

// =============================================================================
// Styler
// =============================================================================

/// Start styling `target`. Accepts any component without validation.
pub fn create_component<C: Component>(target: C) -> Styler<C> {
    Styler { target }
}

/// Binder returned by [`create_component`].
#[derive(Debug, Clone)]
pub struct Styler<C> {
    target: C,
}

impl<C: Component> Styler<C> {
    /// Bind default props. `None` binds no defaults.
    pub fn bind(self, defaults: Option<C::Props>) -> Styled<C> {
        Styled::new(self.target, defaults)
    }

    /// Reusable binder: every call clones the target and binds its own
    /// defaults. Wrap the target in `Rc` to share it instead of copying it.
    pub fn binder(self) -> impl Fn(Option<C::Props>) -> Styled<C>
    where
        C: Clone,
    {
        move |defaults: Option<C::Props>| Styled::new(self.target.clone(), defaults)
    }
}

// =============================================================================
// Styled
// =============================================================================

/// A component with default props bound to it.
pub struct Styled<C: Component> {
    target: C,
    defaults: C::Props,
    display_name: String,
}

impl<C: Component> Styled<C> {
    fn new(target: C, defaults: Option<C::Props>) -> Self {
        let display_name = styled_name(&target);
        tracing::debug!(
            component = %display_name,
            has_defaults = defaults.is_some(),
            "styled component created"
        );

        Self {
            target,
            defaults: defaults.unwrap_or_default(),
            display_name,
        }
    }

    /// Props a render with `instance` passes to the target.
    pub fn effective_props(&self, instance: C::Props) -> C::Props {
        C::Props::merge(&self.defaults, instance)
    }

    pub fn defaults(&self) -> &C::Props {
        &self.defaults
    }

    pub fn target(&self) -> &C {
        &self.target
    }

    /// Derived display name, `"Custom" + <target name>`.
    pub fn name(&self) -> &str {
        &self.display_name
    }
}

impl<C: Component> Component for Styled<C> {
    type Props = C::Props;
    type Output = C::Output;

    fn render(&self, props: Self::Props) -> Self::Output {
        tracing::trace!(component = %self.display_name, "rendering styled component");
        self.target.render(self.effective_props(props))
    }

    fn display_name(&self) -> Option<&str> {
        Some(self.display_name.as_str())
    }
}

impl<C> Clone for Styled<C>
where
    C: Component + Clone,
    C::Props: Clone,
{
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            defaults: self.defaults.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl<C> fmt::Debug for Styled<C>
where
    C: Component + fmt::Debug,
    C::Props: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("name", &self.display_name)
            .field("target", &self.target)
            .field("defaults", &self.defaults)
            .finish()
    }
}
