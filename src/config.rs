use crate::color::MemeColors;

/// Settings for the meme canvas, caption style and page controls.
///
/// Every field has a default matching a 400×400 canvas with white 75px
/// Impact captions, so a TOML file only needs to list what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemeConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub caption: CaptionStyle,
    /// Background colour behind letterboxed images
    pub letterbox_color: String,
    /// Directory holding the `volume-level-N.svg` icons
    pub icon_dir: String,
    pub elements: ElementIds,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 400.0,
            caption: CaptionStyle::default(),
            letterbox_color: "black".to_string(),
            icon_dir: "icons".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl MemeConfig {
    /// Parse a TOML string into `MemeConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parsed caption and letterbox colours, falling back to white on black.
    pub fn colors(&self) -> MemeColors {
        MemeColors::from_strings(&self.caption.color, &self.letterbox_color)
    }
}

/// Font and placement of the top and bottom captions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaptionStyle {
    /// Font size in pixels
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    /// Baseline of the top caption, measured from the top edge
    pub top_baseline: f64,
    /// Distance of the bottom caption baseline from the bottom edge
    pub bottom_margin: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_size: 75.0,
            font_family: "Impact".to_string(),
            color: "white".to_string(),
            top_baseline: 75.0,
            bottom_margin: 25.0,
        }
    }
}

impl CaptionStyle {
    /// CSS font shorthand, e.g. `75px Impact`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// DOM element ids of the page controls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementIds {
    pub image_input: String,
    pub canvas: String,
    pub form: String,
    pub text_top: String,
    pub text_bottom: String,
    pub voice_selection: String,
    pub volume_group: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            image_input: "image-input".to_string(),
            canvas: "user-image".to_string(),
            form: "generate-meme".to_string(),
            text_top: "text-top".to_string(),
            text_bottom: "text-bottom".to_string(),
            voice_selection: "voice-selection".to_string(),
            volume_group: "volume-group".to_string(),
        }
    }
}
