//! Output grammar.
//!
//! ```text
//! line  = "color_gel!(" '"' name '"' ", [" chan ", " chan ", " chan "]),"
//! chan  = digit "." digit digit digit digit
//! ```
//!
//! Lines are joined with `\n` and carry no trailing newline. The macro name is
//! what the downstream gel tables expect and must not change.

use anyhow::Result;

use crate::parser::color::format_channel;
use crate::swatch::Swatch;

/// How swatch names are placed inside the string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameEscaping {
    /// Inserted as-is. A `"` in a name breaks the emitted literal.
    #[default]
    Verbatim,
    /// `\` and `"` are backslash-escaped so the literal always parses.
    Rust,
}

pub fn format_line(swatch: &Swatch, escaping: NameEscaping) -> String {
    let [r, g, b] = swatch.color.normalized().map(format_channel);
    format!(
        "color_gel!(\"{}\", [{}, {}, {}]),",
        escape_name(&swatch.name, escaping),
        r,
        g,
        b
    )
}

pub fn render_lines(swatches: &[Swatch], escaping: NameEscaping) -> String {
    swatches
        .iter()
        .map(|s| format_line(s, escaping))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines wrapped in a `pub const` gel table, ready to paste into a gel module.
pub fn render_const(const_name: &str, swatches: &[Swatch], escaping: NameEscaping) -> String {
    let body: String = swatches
        .iter()
        .map(|s| format!("    {}\n", format_line(s, escaping)))
        .collect();
    format!("pub const {}: &[ColorGel] = &[\n{}];", const_name, body)
}

pub fn render_json(swatches: &[Swatch]) -> Result<String> {
    Ok(serde_json::to_string_pretty(swatches)?)
}

fn escape_name(name: &str, escaping: NameEscaping) -> String {
    match escaping {
        NameEscaping::Verbatim => name.to_string(),
        NameEscaping::Rust => name.replace('\\', "\\\\").replace('"', "\\\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::color::Rgb;

    fn swatch(name: &str, r: u8, g: u8, b: u8) -> Swatch {
        Swatch {
            name: name.into(),
            color: Rgb { r, g, b },
        }
    }

    fn pair() -> Vec<Swatch> {
        vec![swatch("Red Filter", 255, 0, 0), swatch("Soft Blue", 0, 128, 255)]
    }

    #[test]
    fn two_swatch_output() {
        assert_eq!(
            render_lines(&pair(), NameEscaping::Verbatim),
            "color_gel!(\"Red Filter\", [1.0000, 0.0000, 0.0000]),\n\
             color_gel!(\"Soft Blue\", [0.0000, 0.5020, 1.0000]),"
        );
    }

    #[test]
    fn no_swatches_is_empty_string() {
        assert_eq!(render_lines(&[], NameEscaping::Verbatim), "");
    }

    #[test]
    fn line_count_matches_swatches() {
        let out = render_lines(&pair(), NameEscaping::Verbatim);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn quotes_verbatim_by_default() {
        let s = swatch(r#"5" Gel"#, 0, 0, 0);
        assert_eq!(
            format_line(&s, NameEscaping::Verbatim),
            r#"color_gel!("5" Gel", [0.0000, 0.0000, 0.0000]),"#
        );
    }

    #[test]
    fn quotes_and_backslashes_escaped_on_request() {
        let s = swatch(r#"5" \ Gel"#, 0, 0, 0);
        assert_eq!(
            format_line(&s, NameEscaping::Rust),
            r#"color_gel!("5\" \\ Gel", [0.0000, 0.0000, 0.0000]),"#
        );
    }

    #[test]
    fn const_table() {
        let out = render_const("LEE_COLOR_GELS", &pair()[..1], NameEscaping::Verbatim);
        assert_eq!(
            out,
            "pub const LEE_COLOR_GELS: &[ColorGel] = &[\n    \
             color_gel!(\"Red Filter\", [1.0000, 0.0000, 0.0000]),\n];"
        );
    }

    #[test]
    fn empty_const_table() {
        assert_eq!(
            render_const("NO_GELS", &[], NameEscaping::Verbatim),
            "pub const NO_GELS: &[ColorGel] = &[\n];"
        );
    }

    #[test]
    fn json_uses_normalized_channels() {
        let json = render_json(&pair()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["name"], "Red Filter");
        assert_eq!(v[0]["color"][0], 1.0);
        assert!((v[1]["color"][1].as_f64().unwrap() - 128.0 / 255.0).abs() < 1e-12);
    }
}
