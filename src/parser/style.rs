const IMPORTANT: &str = "!important";

/// What `backgroundColor` reports when a `background` shorthand names no color.
const INITIAL: &str = "initial";

const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla(", "hwb("];
const NON_COLOR_KEYWORDS: &[&str] = &["none", "initial", "inherit", "unset", "revert"];

/// Read `background-color` out of an inline `style` attribute the way the
/// CSSOM getter reports it. The `background` shorthand sets it too, and the
/// last of the two wins. `!important` is dropped, hex colors are serialized
/// as `rgb(R, G, B)`, and empty declarations are ignored.
pub fn background_color(style: &str) -> Option<String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter_map(|(prop, value)| {
            let value = strip_important(value.trim());
            if value.is_empty() {
                return None;
            }
            match prop.trim().to_ascii_lowercase().as_str() {
                "background-color" => Some(value),
                "background" => Some(shorthand_color(value).unwrap_or(INITIAL)),
                _ => None,
            }
        })
        .last()
        .map(serialize_color)
}

fn strip_important(value: &str) -> &str {
    let cut = value.len().saturating_sub(IMPORTANT.len());
    match (value.get(..cut), value.get(cut..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(IMPORTANT) => head.trim_end(),
        _ => value,
    }
}

/// Color component of a `background` shorthand. Only the final layer may carry one.
fn shorthand_color(value: &str) -> Option<&str> {
    let layer = split_top_level(value, |c| c == ',').pop()?;
    split_top_level(layer, char::is_whitespace)
        .into_iter()
        .find(|token| is_color_token(token))
}

fn is_color_token(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    if lower.starts_with('#') || COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f)) {
        return true;
    }
    lower.chars().all(|c| c.is_ascii_alphabetic())
        && !NON_COLOR_KEYWORDS.contains(&lower.as_str())
        && csscolorparser::parse(&lower).is_ok()
}

/// Split on `sep` outside parentheses, dropping empty pieces.
fn split_top_level(s: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && sep(c) => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts.into_iter().map(str::trim).filter(|p| !p.is_empty()).collect()
}

/// Opaque hex colors come back as `rgb(...)`; everything else passes through.
fn serialize_color(value: &str) -> String {
    if value.starts_with('#') {
        if let Ok(color) = csscolorparser::parse(value) {
            if let [r, g, b, 255] = color.to_rgba8() {
                return format!("rgb({}, {}, {})", r, g, b);
            }
        }
    }
    value.to_string()
}
