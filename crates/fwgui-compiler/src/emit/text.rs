//! C text helpers: identifier naming and byte array dumping.

use std::fmt::Write;

use crate::config::BuildConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    /// `FONT_ID_BIG_FONT`
    UpperSnake,
    /// `font_data_big_font`
    LowerSnake,
}

/// Build a C identifier from a prefix and a project object name.
///
/// camelCase boundaries and non-alphanumeric characters become underscores.
pub fn c_name(prefix: &str, name: &str, convention: NamingConvention) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in name.chars() {
        if !ch.is_ascii_alphanumeric() {
            snake.push('_');
        } else {
            if ch.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                snake.push('_');
            }
            snake.push(ch);
        }
        prev = Some(ch);
    }

    let snake = match convention {
        NamingConvention::UpperSnake => snake.to_ascii_uppercase(),
        NamingConvention::LowerSnake => snake.to_ascii_lowercase(),
    };
    format!("{prefix}{snake}")
}

/// Byte values for an array initializer, `bytes_per_line` per indented line.
pub fn dump_data(data: &[u8], config: &BuildConfig) -> String {
    let tab = config.tab();
    let per_line = config.bytes_per_line.max(1);
    let mut out = String::with_capacity(data.len() * 5);

    for (i, value) in data.iter().enumerate() {
        if i % per_line == 0 {
            if i > 0 {
                out.push(',');
            }
            out.push('\n');
            out.push_str(&tab);
        } else {
            out.push_str(", ");
        }
        write!(out, "{value}").expect("String write never fails");
    }

    if !data.is_empty() {
        out.push('\n');
    }
    out
}

/// `const uint8_t name[N] = {...};`
pub fn byte_array(name: &str, data: &[u8], config: &BuildConfig) -> String {
    format!(
        "const uint8_t {name}[{}] = {{{}}};",
        data.len(),
        dump_data(data, config)
    )
}

/// `enum Name {\n    A,\n    B\n};`
pub fn enum_decl(name: &str, items: &[String], config: &BuildConfig) -> String {
    let tab = config.tab();
    let body = items
        .iter()
        .map(|item| format!("{tab}{item}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("enum {name} {{\n{body}\n}};")
}

/// Wrap `text` so it is only compiled for one display orientation.
pub fn orientation_guard(orientation: &str, text: &str) -> String {
    format!("#if DISPLAY_ORIENTATION == DISPLAY_ORIENTATION_{orientation}\n{text}\n#endif")
}
