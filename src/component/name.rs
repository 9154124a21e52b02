//! Display names for styled components.
//!
//! A styled component is named `"Custom" + <name>`, where `<name>` is the
//! first non-empty of: the target's display name, the target's
//! implementation name, then [`FALLBACK_NAME`]. An empty string counts as
//! missing at every step.

use super::Component;

/// Prefix of every styled component's display name.
pub const DISPLAY_NAME_PREFIX: &str = "Custom";

/// Name used when the target exposes none.
pub const FALLBACK_NAME: &str = "Component";

/// Resolve the base name from the two optional sources.
pub fn resolve_name<'a>(display: Option<&'a str>, implementation: Option<&'a str>) -> &'a str {
    display
        .filter(|name| !name.is_empty())
        .or_else(|| implementation.filter(|name| !name.is_empty()))
        .unwrap_or(FALLBACK_NAME)
}

/// Display name for a styled wrapper around `target`.
pub fn styled_name<C: Component + ?Sized>(target: &C) -> String {
    let base = resolve_name(target.display_name(), target.implementation_name());
    format!("{DISPLAY_NAME_PREFIX}{base}")
}

/// Short name of a Rust type: the last path segment, generics stripped.
///
/// Anonymous render functions yield `None`: closures, fn pointers, and
/// `dyn Fn` trait objects (bare, or behind `&`, `Box`, `Rc` or `Arc`).
/// Smart pointers around a named type report the inner type's name.
pub fn short_type_name(full: &'static str) -> Option<&'static str> {
    let full = full.trim_start_matches('&').trim_start_matches("mut ");
    if full.starts_with("dyn ") {
        return None;
    }

    let base = full.split('<').next().unwrap_or(full);
    let last = base.rsplit("::").next().unwrap_or(base);

    if matches!(last, "Box" | "Rc" | "Arc") && full.ends_with('>') {
        let inner = &full[base.len() + 1..full.len() - 1];
        return short_type_name(inner);
    }

    let is_ident = !last.is_empty()
        && !last.starts_with(|c: char| c.is_ascii_digit())
        && last.chars().all(|c| c == '_' || c.is_alphanumeric());
    is_ident.then_some(last)
}
