//! Right-biased shallow merge of property sets.
//!
//! Every key present in the instance props wins. Keys only in the defaults
//! are kept as they are. Values are never merged recursively: a nested
//! structured prop in the instance replaces the default one whole.

use super::types::PropertySet;

/// Props that can be overlaid on a set of defaults.
///
/// `Default` is the empty set, used when no defaults are bound.
pub trait MergeProps: Default {
    /// Overlay `instance` on `defaults`. `defaults` is only read.
    fn merge(defaults: &Self, instance: Self) -> Self;
}

impl MergeProps for PropertySet {
    fn merge(defaults: &Self, instance: Self) -> Self {
        if defaults.is_empty() {
            return instance;
        }
        let mut merged = defaults.clone();
        merged.extend(instance);
        merged
    }
}

impl MergeProps for () {
    fn merge(_defaults: &Self, _instance: Self) -> Self {}
}

/// Implement [`MergeProps`] for a props struct whose fields are all `Option`.
///
/// `None` counts as an absent key. Every field must be listed, so adding a
/// field to the struct without listing it here is a compile error.
///
/// ```
/// use spark_styled::{merge_props, MergeProps};
///
/// #[derive(Default, Clone, Debug, PartialEq)]
/// struct ButtonProps {
///     label: Option<String>,
///     width: Option<u16>,
/// }
///
/// merge_props!(ButtonProps { label, width });
///
/// let defaults = ButtonProps { width: Some(10), ..Default::default() };
/// let merged = ButtonProps::merge(&defaults, ButtonProps {
///     label: Some("OK".into()),
///     ..Default::default()
/// });
/// assert_eq!(merged, ButtonProps { label: Some("OK".into()), width: Some(10) });
/// ```
#[macro_export]
macro_rules! merge_props {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::MergeProps for $ty {
            fn merge(defaults: &Self, instance: Self) -> Self {
                Self {
                    $($field: instance.$field.or_else(|| defaults.$field.clone()),)*
                }
            }
        }
    };
}
