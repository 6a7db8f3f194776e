//! # meme-core-view
//!
//! Core logic for canvas meme generators.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Fitting an arbitrary image inside a fixed canvas, letterboxed and centred
//! - Laying out top and bottom captions as draw commands
//! - Tracking which page controls (generate, clear, read) are enabled
//! - Choosing a speech voice and volume for reading captions aloud
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`MemeConfig`] from TOML
//! - `web` - Enable web/WASM canvas rendering and speech synthesis support
//!
//! ## Example
//!
//! ```rust
//! use meme_core_view::{fit_image, MemeEditor, Volume};
//!
//! // Where an 800x400 image lands on the default 400x400 canvas
//! let fit = fit_image(400.0, 400.0, 800.0, 400.0)?;
//! assert_eq!((fit.start_x, fit.start_y), (0.0, 100.0));
//!
//! // Drive the editor through a load, generate and clear cycle
//! let mut editor = MemeEditor::default();
//! let draw_image = editor.load_image(800.0, 400.0)?;
//! let draw_captions = editor.generate("TOP TEXT", "BOTTOM TEXT")?;
//! assert_eq!(draw_image.len() + draw_captions.len(), 5);
//! editor.clear()?;
//!
//! assert_eq!(Volume::new(50)?.gain(), 0.5);
//! # Ok::<(), meme_core_view::MemeError>(())
//! ```

mod color;
mod config;
mod error;
mod fit;
pub mod render;
mod speech;
mod state;
mod volume;

#[cfg(feature = "web")]
mod app;

pub use color::{parse_color, MemeColors, Rgb};
pub use config::{CaptionStyle, ElementIds, MemeConfig};
pub use error::{MemeError, Result};
pub use fit::{fit_image, FitGeometry, Orientation};
pub use render::{DrawCommand, TextCommand};
pub use speech::{Utterance, Voice, VoiceCatalog};
pub use state::{ControlState, EditorAction, ImageSize, MemeEditor, MemePhase};
pub use volume::{Volume, VolumeLevel, MAX_VOLUME};

#[cfg(feature = "web")]
pub use app::MemeApp;
#[cfg(feature = "web")]
pub use render::web::execute;
