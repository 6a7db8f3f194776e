//! Draw commands for the meme canvas.
//!
//! The editor produces a platform-agnostic list of [`DrawCommand`]s; each
//! consumer interprets them for its rendering backend. With the `web`
//! feature, [`web::execute`] replays them onto a 2D canvas context.

use crate::color::{css, MemeColors, Rgb};
use crate::config::CaptionStyle;
use crate::fit::{fit_image, FitGeometry};
use crate::error::Result;

/// A single drawing operation on the meme canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole canvas to transparent
    Clear,
    /// Fill the whole canvas with a colour
    Fill(Rgb),
    /// Draw the loaded image into the given rectangle
    DrawImage(FitGeometry),
    /// Draw centre-aligned text with its baseline at `(x, y)`
    Text(TextCommand),
}

/// Caption text with resolved position and style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// CSS font shorthand
    pub font: String,
    pub color: Rgb,
}

impl TextCommand {
    /// Get the colour as a CSS-compatible string "rgb(r,g,b)"
    pub fn color_string(&self) -> String {
        css(self.color)
    }
}

/// Commands that replace the canvas contents with a freshly loaded image.
///
/// The canvas is cleared, filled with the letterbox colour so non-matching
/// aspect ratios get borders, and the image is drawn centred on top.
pub fn image_commands(canvas_width: f64, canvas_height: f64, image_width: f64, image_height: f64, colors: &MemeColors) -> Result<Vec<DrawCommand>> {
    let geometry = fit_image(canvas_width, canvas_height, image_width, image_height)?;
    Ok(vec![
        DrawCommand::Clear,
        DrawCommand::Fill(colors.letterbox),
        DrawCommand::DrawImage(geometry),
    ])
}

/// Commands that draw the top and bottom captions.
///
/// Both captions are horizontally centred. Empty captions produce no command.
///
/// ## Example
///
/// ```rust
/// use meme_core_view::{CaptionStyle, DrawCommand, MemeColors};
/// use meme_core_view::render::caption_commands;
///
/// let commands = caption_commands(400.0, 400.0, "TOP", "BOTTOM", &CaptionStyle::default(), &MemeColors::default());
/// assert_eq!(commands.len(), 2);
/// if let DrawCommand::Text(bottom) = &commands[1] {
///     assert_eq!((bottom.x, bottom.y), (200.0, 375.0));
/// }
/// ```
pub fn caption_commands(canvas_width: f64, canvas_height: f64, top: &str, bottom: &str, style: &CaptionStyle, colors: &MemeColors) -> Vec<DrawCommand> {
    let x = canvas_width / 2.0;
    let font = style.font();

    [(top, style.top_baseline), (bottom, canvas_height - style.bottom_margin)]
        .into_iter()
        .filter(|(text, _)| !text.is_empty())
        .map(|(text, y)| {
            DrawCommand::Text(TextCommand {
                text: text.to_string(),
                x,
                y,
                font: font.clone(),
                color: colors.caption,
            })
        })
        .collect()
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    /// Get the 2D context of a canvas element.
    pub fn context_2d(canvas: &HtmlCanvasElement) -> std::result::Result<CanvasRenderingContext2d, String> {
        canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d".to_string())
    }

    /// Replay draw commands onto a canvas.
    ///
    /// `image` is the source for [`DrawCommand::DrawImage`]; commands that
    /// need it are skipped when it is `None`.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use meme_core_view::render::web::execute;
    ///
    /// let canvas: web_sys::HtmlCanvasElement = // ... get canvas element
    /// execute(&canvas, Some(&image), &commands)?;
    /// ```
    pub fn execute(canvas: &HtmlCanvasElement, image: Option<&HtmlImageElement>, commands: &[DrawCommand]) -> std::result::Result<(), String> {
        let ctx = context_2d(canvas)?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        for command in commands {
            match command {
                DrawCommand::Clear => ctx.clear_rect(0.0, 0.0, width, height),
                DrawCommand::Fill(color) => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.fill_rect(0.0, 0.0, width, height);
                }
                DrawCommand::DrawImage(fit) => {
                    if let Some(image) = image {
                        ctx.draw_image_with_html_image_element_and_dw_and_dh(
                            image,
                            fit.start_x,
                            fit.start_y,
                            fit.width,
                            fit.height,
                        )
                        .map_err(|_| "Failed to draw image")?;
                    }
                }
                DrawCommand::Text(text) => {
                    ctx.set_fill_style_str(&text.color_string());
                    ctx.set_font(&text.font);
                    ctx.set_text_align("center");
                    ctx.fill_text(&text.text, text.x, text.y)
                        .map_err(|_| "Failed to fill text")?;
                }
            }
        }

        Ok(())
    }
}
