//! Styles, inheritance, and value conversions.

use serde::Deserialize;

/// A named style as written in the project.
///
/// Every property is optional; unset properties come from the `inheritFrom`
/// chain and finally from the defaults in [`ResolvedStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub name: String,
    #[serde(default)]
    pub inherit_from: Option<String>,
    #[serde(default)]
    pub font_name: Option<String>,
    #[serde(default)]
    pub border_size: Option<Sides>,
    #[serde(default)]
    pub align_horizontal: Option<HorizontalAlign>,
    #[serde(default)]
    pub align_vertical: Option<VerticalAlign>,
    #[serde(default)]
    pub blink: Option<bool>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub padding: Option<Sides>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Right,
    #[default]
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Bottom,
    #[default]
    Center,
}

/// A style with every property settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle<'a> {
    pub font_name: Option<&'a str>,
    pub border_size: Sides,
    pub align_horizontal: HorizontalAlign,
    pub align_vertical: VerticalAlign,
    pub blink: bool,
    /// RGB565, 0 when unset or unparsable.
    pub background_color: u16,
    pub color: u16,
    pub border_color: u16,
    pub padding: Sides,
}

impl<'a> ResolvedStyle<'a> {
    /// Resolve from a chain ordered child first, root ancestor last.
    pub(crate) fn from_chain(chain: &[&'a Style]) -> Self {
        fn pick<'s, T>(chain: &[&'s Style], f: impl Fn(&'s Style) -> Option<T>) -> Option<T> {
            chain.iter().find_map(|s| f(*s))
        }

        let color = |f: fn(&'a Style) -> Option<&'a String>| {
            pick(chain, f).and_then(|c| rgb565(c)).unwrap_or(0)
        };

        Self {
            font_name: pick(chain, |s| s.font_name.as_deref()).filter(|n| !n.is_empty()),
            border_size: pick(chain, |s| s.border_size).unwrap_or_default(),
            align_horizontal: pick(chain, |s| s.align_horizontal).unwrap_or_default(),
            align_vertical: pick(chain, |s| s.align_vertical).unwrap_or_default(),
            blink: pick(chain, |s| s.blink).unwrap_or(false),
            background_color: color(|s| s.background_color.as_ref()),
            color: color(|s| s.color.as_ref()),
            border_color: color(|s| s.border_color.as_ref()),
            padding: pick(chain, |s| s.padding).unwrap_or_default(),
        }
    }
}

/// Convert `#rrggbb` or `#rgb` to RGB565.
pub fn rgb565(color: &str) -> Option<u16> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
            (nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?)
        }
        _ => return None,
    };
    Some((u16::from(r & 0xf8) << 8) | (u16::from(g & 0xfc) << 3) | u16::from(b >> 3))
}

/// Per-edge sizes written with CSS box shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "SidesRepr")]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    pub const fn uniform(v: i32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SidesParseError {
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),
    #[error("expected 1 to 4 values, found {0}")]
    WrongArity(usize),
}

impl std::str::FromStr for Sides {
    type Err = SidesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|part| {
                part.trim_end_matches("px")
                    .parse::<i32>()
                    .map_err(|_| SidesParseError::NotAnInteger(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (top, right, bottom, left) = match values.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(SidesParseError::WrongArity(other.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SidesRepr {
    Number(i32),
    Text(String),
}

impl TryFrom<SidesRepr> for Sides {
    type Error = SidesParseError;

    fn try_from(repr: SidesRepr) -> Result<Self, Self::Error> {
        match repr {
            SidesRepr::Number(v) => Ok(Self::uniform(v)),
            SidesRepr::Text(s) => s.parse(),
        }
    }
}
