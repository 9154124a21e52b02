//! Property types - values, props and property sets.
//!
//! A property set maps a property name to a [`Prop`]. Props support static
//! values, signals and getters, so a reactive value bound as a default stays
//! connected after the merge.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use spark_signals::Signal;

use crate::types::{Attr, BorderStyle, Dimension, Rgba, TextAlign};

/// Property key under which nested content travels.
pub const CHILDREN: &str = "children";

/// Nested content renderer (Rc so it can be cloned out of a default set).
pub type Children = Rc<dyn Fn()>;

// =============================================================================
// Value
// =============================================================================

/// A plain property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Color(Rgba),
    Dimension(Dimension),
    Attrs(Attr),
    Border(BorderStyle),
    Align(TextAlign),
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }

            impl From<$ty> for Prop {
                fn from(value: $ty) -> Self {
                    Prop::Static(Value::from(value))
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    f64 => Float,
    &str => Text,
    String => Text,
    Rgba => Color,
    Dimension => Dimension,
    Attr => Attrs,
    BorderStyle => Border,
    TextAlign => Align,
}

// =============================================================================
// Prop
// =============================================================================

/// A single property: static, reactive, or nested content.
#[derive(Clone)]
pub enum Prop {
    /// Static value (not reactive).
    Static(Value),
    /// Reactive signal, read at use time.
    Signal(Signal<Value>),
    /// Getter function, called each time the value is needed.
    Getter(Rc<dyn Fn() -> Value>),
    /// Nested content.
    Children(Children),
}

impl Prop {
    /// Create a getter prop.
    pub fn getter(f: impl Fn() -> Value + 'static) -> Self {
        Prop::Getter(Rc::new(f))
    }

    /// Current value. `None` for children, which carry no value.
    pub fn get(&self) -> Option<Value> {
        match self {
            Prop::Static(v) => Some(v.clone()),
            Prop::Signal(s) => Some(s.get()),
            Prop::Getter(f) => Some(f()),
            Prop::Children(_) => None,
        }
    }

    pub fn is_reactive(&self) -> bool {
        matches!(self, Prop::Signal(_) | Prop::Getter(_))
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Prop::Static(value)
    }
}

impl From<Signal<Value>> for Prop {
    fn from(signal: Signal<Value>) -> Self {
        Prop::Signal(signal)
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Prop::Signal(_) => f.write_str("Signal(..)"),
            Prop::Getter(_) => f.write_str("Getter(..)"),
            Prop::Children(_) => f.write_str("Children(..)"),
        }
    }
}

// =============================================================================
// PropertySet
// =============================================================================

/// A mapping from property name to [`Prop`].
///
/// # Example
///
/// ```
/// use spark_styled::{PropertySet, Rgba};
///
/// let props = PropertySet::new()
///     .with("color", Rgba::RED)
///     .with("size", "large");
///
/// assert_eq!(props.len(), 2);
/// assert!(props.contains_key("color"));
/// ```
#[derive(Clone, Default, Debug)]
pub struct PropertySet {
    props: BTreeMap<String, Prop>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, prop: impl Into<Prop>) -> Self {
        self.insert(key, prop);
        self
    }

    /// Builder-style insert of nested content under [`CHILDREN`].
    pub fn with_children(self, children: impl Fn() + 'static) -> Self {
        self.with(CHILDREN, Prop::Children(Rc::new(children)))
    }

    /// Insert a prop, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, prop: impl Into<Prop>) -> Option<Prop> {
        self.props.insert(key.into(), prop.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Prop> {
        self.props.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Prop> {
        self.props.get(key)
    }

    /// Current value of a prop (reads signals and getters).
    pub fn value(&self, key: &str) -> Option<Value> {
        self.props.get(key).and_then(Prop::get)
    }

    pub fn children(&self) -> Option<&Children> {
        match self.props.get(CHILDREN) {
            Some(Prop::Children(children)) => Some(children),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Current values of every valued prop. Children are skipped.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.props
            .iter()
            .filter_map(|(k, prop)| prop.get().map(|v| (k.clone(), v)))
            .collect()
    }

    /// Overlay `other` on top of `self`: keys in `other` replace keys here.
    pub fn extend(&mut self, other: PropertySet) {
        self.props.extend(other.props);
    }
}

impl<K: Into<String>, P: Into<Prop>> FromIterator<(K, P)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for (key, prop) in iter {
            set.insert(key, prop);
        }
        set
    }
}

impl IntoIterator for PropertySet {
    type Item = (String, Prop);
    type IntoIter = std::collections::btree_map::IntoIter<String, Prop>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;
    use std::cell::Cell;

    #[test]
    fn test_value_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from("red"), Value::Text("red".to_string()));
        assert_eq!(Value::from(Attr::BOLD), Value::Attrs(Attr::BOLD));
    }

    #[test]
    fn test_prop_get_static() {
        let prop = Prop::from("large");
        assert_eq!(prop.get(), Some(Value::Text("large".to_string())));
        assert!(!prop.is_reactive());
    }

    #[test]
    fn test_prop_get_signal_tracks_updates() {
        let color = signal(Value::Color(Rgba::RED));
        let prop = Prop::from(color.clone());

        assert_eq!(prop.get(), Some(Value::Color(Rgba::RED)));
        color.set(Value::Color(Rgba::BLUE));
        assert_eq!(prop.get(), Some(Value::Color(Rgba::BLUE)));
        assert!(prop.is_reactive());
    }

    #[test]
    fn test_prop_getter_called_each_read() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let prop = Prop::getter(move || {
            counter.set(counter.get() + 1);
            Value::Int(counter.get())
        });

        assert_eq!(prop.get(), Some(Value::Int(1)));
        assert_eq!(prop.get(), Some(Value::Int(2)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_children_have_no_value() {
        let props = PropertySet::new().with_children(|| {});
        assert!(props.children().is_some());
        assert_eq!(props.value(CHILDREN), None);
        assert!(props.snapshot().is_empty());
    }

    #[test]
    fn test_property_set_insert_replaces() {
        let mut props = PropertySet::new().with("color", "red");
        let old = props.insert("color", "blue");

        assert_eq!(old.and_then(|p| p.get()), Some(Value::from("red")));
        assert_eq!(props.value("color"), Some(Value::from("blue")));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_property_set_remove() {
        let mut props = PropertySet::new().with("color", "red").with("size", "large");

        assert_eq!(props.remove("color").and_then(|p| p.get()), Some(Value::from("red")));
        assert!(props.remove("color").is_none());
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["size"]);
    }

    #[test]
    fn test_property_set_iter_sorted() {
        let props = PropertySet::new().with("size", 2).with("color", "red");
        let pairs: Vec<(&str, Option<Value>)> = props.iter().map(|(k, p)| (k, p.get())).collect();

        assert_eq!(
            pairs,
            vec![("color", Some(Value::from("red"))), ("size", Some(Value::Int(2)))]
        );
    }

    #[test]
    fn test_property_set_from_iter_and_keys() {
        let props: PropertySet = [("size", "large"), ("color", "red")].into_iter().collect();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["color", "size"]);
    }
}
