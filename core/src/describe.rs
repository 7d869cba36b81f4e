//! Description field formatting.
//!
//! Catalog descriptions mix prose with cross references such as
//! `= \mitalpha, # \upalpha (upgreek)`. [`format_description`] pulls each
//! reference out into its own markdown bullet and keeps whatever prose is
//! left as a leading bullet.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// SAFETY: These regexes are compile-time constants and are validated by tests.
/// A reference marker (`=`, `#`, `x`, `t`) followed by a backslash command
/// with optional `{...}` and `(...)` groups and an optional trailing comma.
/// Capture 1 is the command with its groups.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[=#xt]\s*(\\\w+(?:\{[\\\w\{\}]+\})?\s*(?:\(.*?\))?)\s*,?")
        .expect("static regex must compile")
});
static UPPERCASE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+").expect("static regex must compile"));

/// Formats a raw description into completion documentation.
///
/// Every reference becomes a `- <command>` line. The remaining prose is
/// trimmed, has each run of capitals reduced to a leading capital, and is
/// placed first as its own bullet.
///
/// # Examples
///
/// ```
/// use unimath_table_core::format_description;
///
/// assert_eq!(
///     format_description(r"see =\cmd, more TEXT here"),
///     "- see  more Text here\n- \\cmd"
/// );
/// assert_eq!(format_description(""), "");
/// ```
pub fn format_description(raw: &str) -> String {
    let bullets: Vec<String> = REFERENCE_RE
        .captures_iter(raw)
        .map(|caps| format!("- {}", &caps[1]))
        .collect();

    let residual = REFERENCE_RE.replace_all(raw, "");
    let prose = capitalize_runs(residual.trim());

    if prose.is_empty() {
        bullets.join("\n")
    } else {
        format!("- {prose}\n{}", bullets.join("\n"))
    }
}

/// Rewrites every run of ASCII capitals as one capital plus lowercase
/// (`GREEK` becomes `Greek`, `A` stays `A`).
fn capitalize_runs(text: &str) -> String {
    UPPERCASE_RUN_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let run = &caps[0];
            let (head, tail) = run.split_at(1);
            format!("{head}{}", tail.to_ascii_lowercase())
        })
        .into_owned()
}
