//! Components and the styling factory.
//!
//! - [`Component`] - what a host framework can render
//! - [`create_component`] - bind default props to a component
//! - [`component`] - lift a closure or fn into a component
//!
//! # Example
//!
//! ```
//! use spark_styled::{component, create_component, Component, PropertySet, Value};
//!
//! let label = component(|props: PropertySet| props.value("color"));
//!
//! let red_label = create_component(label)
//!     .bind(Some(PropertySet::new().with("color", "red")));
//!
//! assert_eq!(red_label.render(PropertySet::new()), Some(Value::from("red")));
//! assert_eq!(
//!     red_label.render(PropertySet::new().with("color", "blue")),
//!     Some(Value::from("blue")),
//! );
//! assert_eq!(red_label.name(), "CustomComponent");
//! ```

mod function;
mod merge;
mod name;
mod styler;
mod types;

use std::rc::Rc;

pub use function::{component, FnComponent};
pub use merge::MergeProps;
pub use name::{resolve_name, short_type_name, styled_name, DISPLAY_NAME_PREFIX, FALLBACK_NAME};
pub use styler::{create_component, Styled, Styler};
pub use types::*;

/// A renderable UI element.
///
/// The host framework calls [`render`](Component::render) with a prop set
/// and gets back whatever it renders to. Failures from the host travel in
/// `Output` (e.g. `Output = Result<Node, HostError>`).
pub trait Component {
    type Props: MergeProps;
    type Output;

    fn render(&self, props: Self::Props) -> Self::Output;

    /// Human-readable name for diagnostics.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Name of the implementing type. Defaults to its short Rust type name.
    fn implementation_name(&self) -> Option<&str> {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<C: Component + ?Sized> Component for Rc<C> {
    type Props = C::Props;
    type Output = C::Output;

    fn render(&self, props: Self::Props) -> Self::Output {
        (**self).render(props)
    }

    fn display_name(&self) -> Option<&str> {
        (**self).display_name()
    }

    fn implementation_name(&self) -> Option<&str> {
        (**self).implementation_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Button;

    impl Component for Button {
        type Props = PropertySet;
        type Output = PropertySet;

        fn render(&self, props: PropertySet) -> PropertySet {
            props
        }
    }

    #[test]
    fn test_implementation_name_defaults_to_type_name() {
        assert_eq!(Button.implementation_name(), Some("Button"));
        assert_eq!(Button.display_name(), None);
    }

    #[test]
    fn test_rc_forwards_names_and_render() {
        let shared = Rc::new(Button);
        assert_eq!(shared.implementation_name(), Some("Button"));

        let rendered = shared.render(PropertySet::new().with("size", "large"));
        assert_eq!(rendered.value("size"), Some(Value::from("large")));
    }
}
