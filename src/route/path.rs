use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Character class a shorthand token name (and its matched value) may use.
const TOKEN_CLASS: &str = "[@a-zA-Z0-9&.?:\\-_=#]";

/// Paths made only of these characters are treated as shorthand and rewritten;
/// anything else is assumed to already be a full pattern.
static SHORTHAND_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-:/_{}()a-zA-Z0-9]+$").expect("failed to compile path guard"));

static SHORTHAND_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([@a-zA-Z0-9&.?:\-_=#]+)\}|:([@a-zA-Z0-9&.?\-_=#]+)")
        .expect("failed to compile token pattern")
});

/// Normalize a route path for storage.
///
/// Shorthand paths get a leading `/` and their `:name` / `{name}` tokens
/// rewritten to named capture groups. A path containing any character outside
/// the shorthand set (an anchor, a custom class, an already-rewritten group)
/// is returned untouched.
pub(crate) fn format_path(path: &str) -> String {
    if !SHORTHAND_PATH.is_match(path) {
        return path.to_string();
    }

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    SHORTHAND_TOKEN
        .replace_all(&path, |captures: &Captures| {
            let name = captures
                .get(1)
                .or_else(|| captures.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            format!("(?P<{name}>{TOKEN_CLASS}+)")
        })
        .into_owned()
}
