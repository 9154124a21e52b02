//! Closures and fns as components.

use std::fmt;
use std::marker::PhantomData;

use super::name::short_type_name;
use super::{Component, MergeProps};

/// A component backed by a render function.
pub struct FnComponent<F, P, O> {
    render: F,
    name: Option<String>,
    _marker: PhantomData<fn(P) -> O>,
}

/// Lift a render function into a [`Component`].
///
/// A named `fn` reports its own name as the implementation name; a closure
/// is anonymous until given a name with [`FnComponent::named`].
pub fn component<F, P, O>(render: F) -> FnComponent<F, P, O>
where
    F: Fn(P) -> O,
    P: MergeProps,
{
    FnComponent {
        render,
        name: None,
        _marker: PhantomData,
    }
}

impl<F, P, O> FnComponent<F, P, O> {
    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<F, P, O> Component for FnComponent<F, P, O>
where
    F: Fn(P) -> O,
    P: MergeProps,
{
    type Props = P;
    type Output = O;

    fn render(&self, props: P) -> O {
        (self.render)(props)
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn implementation_name(&self) -> Option<&str> {
        short_type_name(std::any::type_name::<F>())
    }
}

impl<F: Clone, P, O> Clone for FnComponent<F, P, O> {
    fn clone(&self) -> Self {
        Self {
            render: self.render.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, P, O> fmt::Debug for FnComponent<F, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent")
            .field("name", &self.name)
            .field("render", &std::any::type_name::<F>())
            .finish()
    }
}
