//! Color resolution: hex codes, palette names, and component tuples to RGBA.
//!
//! [`resolve`] is a pure function. Strings are tried as `#rgb` / `#rrggbb`
//! hex codes first, then as CSS4 or Tableau (`tab:*`) palette names. Component
//! tuples carry three (RGB) or four (RGBA) bytes. Anything else is
//! [`PlotError::InvalidColor`].
//!
//! [`ColorMapper`] turns a scalar into a color by sampling a named colormap
//! over `[vmin, vmax]`.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A color as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex code or palette name.
    Text(String),
    /// RGB or RGBA components.
    Components(Vec<u8>),
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Rgba> for ColorSpec {
    fn from(c: Rgba) -> Self {
        Self::Components(vec![c.r, c.g, c.b, c.a])
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Components(vec![r, g, b])
    }
}

impl FromStr for ColorSpec {
    type Err = PlotError;

    /// Parse a config string. A leading `[` reads a JSON component array;
    /// anything else is kept as text for [`resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('[') {
            let components: Vec<u8> =
                serde_json::from_str(s).map_err(|_| PlotError::InvalidColor(s.to_owned()))?;
            return Ok(Self::Components(components));
        }
        Ok(Self::Text(s.to_owned()))
    }
}

/// Resolve a color spec to RGBA.
///
/// `alpha` in `[0, 1]` sets the alpha channel for hex codes, names, and
/// three-component tuples. Four-component tuples keep their own alpha.
///
/// # Errors
///
/// Returns [`PlotError::InvalidColor`] for an unknown string or a tuple that
/// is not three or four components long.
pub fn resolve(spec: &ColorSpec, alpha: f64) -> Result<Rgba, PlotError> {
    let a = alpha_byte(alpha);
    match spec {
        ColorSpec::Text(text) => {
            if let Some(c) = parse_hex(text) {
                return Ok(c.with_alpha(a));
            }
            named(text)
                .map(|c| c.with_alpha(a))
                .ok_or_else(|| PlotError::InvalidColor(text.clone()))
        }
        ColorSpec::Components(parts) => match parts.as_slice() {
            &[r, g, b] => Ok(Rgba::new(r, g, b, a)),
            &[r, g, b, alpha] => Ok(Rgba::new(r, g, b, alpha)),
            _ => Err(PlotError::InvalidColor(format!(
                "tuple of length {} (must be RGB or RGBA)",
                parts.len()
            ))),
        },
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_byte(alpha: f64) -> u8 {
    (255.0 * alpha.clamp(0.0, 1.0)) as u8
}

/// Parse `#rgb` or `#rrggbb`.
#[allow(clippy::cast_possible_truncation)]
fn parse_hex(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let Ok(v) = u32::from_str_radix(digits, 16) else {
        return None;
    };
    match digits.len() {
        3 => {
            let nibble = |shift: u32| (((v >> shift) & 0xf) * 17) as u8;
            Some(Rgba::rgb(nibble(8), nibble(4), nibble(0)))
        }
        6 => {
            let byte = |shift: u32| ((v >> shift) & 0xff) as u8;
            Some(Rgba::rgb(byte(16), byte(8), byte(0)))
        }
        _ => None,
    }
}

/// Look up a CSS4 or Tableau palette name, ignoring ASCII case.
fn named(name: &str) -> Option<Rgba> {
    let lower = name.to_ascii_lowercase();
    TABLEAU
        .iter()
        .chain(CSS4.iter())
        .find(|(n, _)| *n == lower)
        .and_then(|(_, hex)| parse_hex(hex))
}

// =============================================================
// Colormaps
// =============================================================

/// Named colormaps available to [`ColorMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Full hue sweep at maximum saturation and value: red → green → blue → red.
    Hsv,
    /// Black to white.
    Gray,
}

impl FromStr for Colormap {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hsv" => Ok(Self::Hsv),
            "gray" | "grey" => Ok(Self::Gray),
            other => Err(PlotError::UnknownColormap(other.to_owned())),
        }
    }
}

impl Colormap {
    /// Sample the map at `t` in `[0, 1]`.
    #[must_use]
    pub fn sample(self, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Hsv => hue_to_rgb(t),
            Self::Gray => {
                let v = unit_byte(t);
                Rgba::rgb(v, v, v)
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_byte(v: f64) -> u8 {
    (255.0 * v.clamp(0.0, 1.0)).round() as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hue_to_rgb(h: f64) -> Rgba {
    let h6 = (h * 6.0) % 6.0;
    let f = h6 - h6.floor();
    let (r, g, b) = match h6.floor() as u8 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };
    Rgba::rgb(unit_byte(r), unit_byte(g), unit_byte(b))
}

/// Maps scalars in `[vmin, vmax]` onto a colormap with a fixed alpha.
///
/// Values outside the range clamp to the ends. A zero-width range maps
/// everything to the low end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMapper {
    map: Colormap,
    vmin: f64,
    vmax: f64,
    alpha: u8,
}

impl ColorMapper {
    /// # Errors
    ///
    /// Returns [`PlotError::UnknownColormap`] if `name` is not a known map.
    pub fn new(name: &str, vmin: f64, vmax: f64, alpha: f64) -> Result<Self, PlotError> {
        Ok(Self { map: name.parse()?, vmin, vmax, alpha: alpha_byte(alpha) })
    }

    #[must_use]
    pub fn map(&self, value: f64) -> Rgba {
        let span = self.vmax - self.vmin;
        let t = if span == 0.0 { 0.0 } else { (value - self.vmin) / span };
        self.map.sample(t).with_alpha(self.alpha)
    }
}

// =============================================================
// Palettes
// =============================================================

const TABLEAU: &[(&str, &str)] = &[
    ("tab:blue", "#1f77b4"),
    ("tab:orange", "#ff7f0e"),
    ("tab:green", "#2ca02c"),
    ("tab:red", "#d62728"),
    ("tab:purple", "#9467bd"),
    ("tab:brown", "#8c564b"),
    ("tab:pink", "#e377c2"),
    ("tab:gray", "#7f7f7f"),
    ("tab:olive", "#bcbd22"),
    ("tab:cyan", "#17becf"),
];

const CSS4: &[(&str, &str)] = &[
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aqua", "#00ffff"),
    ("aquamarine", "#7fffd4"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("bisque", "#ffe4c4"),
    ("black", "#000000"),
    ("blanchedalmond", "#ffebcd"),
    ("blue", "#0000ff"),
    ("blueviolet", "#8a2be2"),
    ("brown", "#a52a2a"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkorchid", "#9932cc"),
    ("darkred", "#8b0000"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("goldenrod", "#daa520"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("greenyellow", "#adff2f"),
    ("grey", "#808080"),
    ("honeydew", "#f0fff0"),
    ("hotpink", "#ff69b4"),
    ("indianred", "#cd5c5c"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("lime", "#00ff00"),
    ("limegreen", "#32cd32"),
    ("linen", "#faf0e6"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("navy", "#000080"),
    ("oldlace", "#fdf5e6"),
    ("olive", "#808000"),
    ("olivedrab", "#6b8e23"),
    ("orange", "#ffa500"),
    ("orangered", "#ff4500"),
    ("orchid", "#da70d6"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("peru", "#cd853f"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("powderblue", "#b0e0e6"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#ff0000"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("salmon", "#fa8072"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("sienna", "#a0522d"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#fffafa"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("thistle", "#d8bfd8"),
    ("tomato", "#ff6347"),
    ("turquoise", "#40e0d0"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
    ("yellowgreen", "#9acd32"),
];
