//! URL-safe identifiers derived from display names

use regex::Regex;
use std::sync::OnceLock;

/// Derive a slug from a display name.
///
/// The name is lowercased, every maximal run of characters outside
/// `[a-z0-9]` becomes a single `-`, and leading or trailing hyphens are
/// stripped. Applying the function to its own output returns it unchanged.
///
/// ```
/// use shop_admin::engine::derive_slug;
///
/// assert_eq!(derive_slug("Men's T-Shirts!! "), "men-s-t-shirts");
/// ```
pub fn derive_slug(name: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let regex =
        NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

    let lowered = name.to_lowercase();
    regex
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
