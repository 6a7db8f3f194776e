//! Colour parsing for caption text and letterbox fill.

/// An RGB colour as `(r, g, b)`.
pub type Rgb = (u8, u8, u8);

/// Parse a colour string into an RGB tuple.
///
/// Supports:
/// - Named colours: black, white, red, green, blue, yellow, cyan, magenta,
///   gray/grey, orange, purple, pink, brown
/// - Hex: `#RGB` (expanded to `#RRGGBB`), `#RRGGBB`
/// - Case-insensitive, trims whitespace
pub fn parse_color(s: &str) -> Option<Rgb> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_named(s),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => Some((channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

fn parse_named(s: &str) -> Option<Rgb> {
    match s.to_lowercase().as_str() {
        "black"         => Some((0, 0, 0)),
        "white"         => Some((255, 255, 255)),
        "red"           => Some((255, 0, 0)),
        "green"         => Some((0, 128, 0)),
        "blue"          => Some((0, 0, 255)),
        "yellow"        => Some((255, 255, 0)),
        "cyan"          => Some((0, 255, 255)),
        "magenta"       => Some((255, 0, 255)),
        "gray" | "grey" => Some((128, 128, 128)),
        "orange"        => Some((255, 165, 0)),
        "purple"        => Some((128, 0, 128)),
        "pink"          => Some((255, 192, 203)),
        "brown"         => Some((139, 69, 19)),
        _               => None,
    }
}

/// Format an RGB tuple as a CSS `rgb(r,g,b)` string.
pub fn css(color: Rgb) -> String {
    let (r, g, b) = color;
    format!("rgb({r},{g},{b})")
}

/// Caption and letterbox colours used when drawing a meme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemeColors {
    /// Fill colour of the caption text
    pub caption: Rgb,
    /// Fill colour of the canvas behind the image
    pub letterbox: Rgb,
}

impl Default for MemeColors {
    fn default() -> Self {
        Self {
            caption: (255, 255, 255),
            letterbox: (0, 0, 0),
        }
    }
}

impl MemeColors {
    /// Parse caption and letterbox colour strings.
    /// Falls back to white captions on a black letterbox for invalid values.
    pub fn from_strings(caption: &str, letterbox: &str) -> Self {
        let defaults = Self::default();
        Self {
            caption: parse_color(caption).unwrap_or(defaults.caption),
            letterbox: parse_color(letterbox).unwrap_or(defaults.letterbox),
        }
    }
}
