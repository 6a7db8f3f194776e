//! Editor state: which controls are enabled and what to draw next.
//!
//! This module drives the meme page in three phases:
//! 1. Empty - no usable image yet
//! 2. Ready - an image is on the canvas, captions can be generated
//! 3. Generated - captions are drawn, they can be cleared or read aloud

use std::fmt;

use crate::config::MemeConfig;
use crate::error::{MemeError, Result};
use crate::fit::Orientation;
use crate::render::{caption_commands, image_commands, DrawCommand};
use crate::speech::{Utterance, VoiceCatalog};
use crate::volume::Volume;

/// Editor phase indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemePhase {
    /// No image loaded, or the last image was rejected
    Empty,
    /// Image loaded or canvas cleared; waiting for captions
    Ready,
    /// Captions drawn
    Generated,
}

/// User actions gated by the page buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorAction {
    Generate,
    Clear,
    Read,
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorAction::Generate => "generate",
            EditorAction::Clear => "clear",
            EditorAction::Read => "read",
        };
        f.write_str(name)
    }
}

/// Enabled flags of the generate, clear and read buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub generate: bool,
    pub clear: bool,
    pub read: bool,
}

impl ControlState {
    /// Controls enabled in the given phase.
    pub fn for_phase(phase: MemePhase) -> Self {
        match phase {
            MemePhase::Empty => Self::default(),
            MemePhase::Ready => Self { generate: true, clear: false, read: false },
            MemePhase::Generated => Self { generate: false, clear: true, read: true },
        }
    }

    /// Whether the button for `action` is enabled.
    pub fn allows(&self, action: EditorAction) -> bool {
        match action {
            EditorAction::Generate => self.generate,
            EditorAction::Clear => self.clear,
            EditorAction::Read => self.read,
        }
    }
}

/// Natural size of the loaded image in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

/// UI state for a single meme canvas.
///
/// The editor does not touch the platform: every operation returns the
/// draw commands (or utterance) the caller should apply.
///
/// ## Example
///
/// ```rust
/// use meme_core_view::{MemeConfig, MemeEditor, MemePhase};
///
/// let mut editor = MemeEditor::new(MemeConfig::default());
/// editor.load_image(800.0, 400.0).unwrap();
/// assert!(editor.controls().generate);
///
/// let commands = editor.generate("TOP", "BOTTOM").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(editor.phase(), MemePhase::Generated);
/// ```
#[derive(Clone, Debug)]
pub struct MemeEditor {
    config: MemeConfig,
    phase: MemePhase,
    image: Option<ImageSize>,
    error: Option<MemeError>,
}

impl Default for MemeEditor {
    fn default() -> Self {
        Self::new(MemeConfig::default())
    }
}

impl MemeEditor {
    /// Create an editor with no image loaded.
    pub fn new(config: MemeConfig) -> Self {
        Self {
            config,
            phase: MemePhase::Empty,
            image: None,
            error: None,
        }
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> MemePhase {
        self.phase
    }

    #[inline]
    pub fn controls(&self) -> ControlState {
        ControlState::for_phase(self.phase)
    }

    /// Size of the currently loaded image.
    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    /// Error from the last rejected image, if any.
    pub fn error(&self) -> Option<&MemeError> {
        self.error.as_ref()
    }

    /// Accept a newly decoded image and return the commands that draw it.
    ///
    /// An image (or canvas) with an invalid dimension is rejected: the
    /// editor drops back to [`MemePhase::Empty`] so generation is disabled,
    /// and the error is kept for display.
    pub fn load_image(&mut self, width: f64, height: f64) -> Result<Vec<DrawCommand>> {
        let colors = self.config.colors();
        match image_commands(self.config.canvas_width, self.config.canvas_height, width, height, &colors) {
            Ok(commands) => {
                log::debug!("image loaded: {width}x{height} ({:?})", Orientation::of(width, height));
                self.image = Some(ImageSize { width, height });
                self.error = None;
                self.set_phase(MemePhase::Ready);
                Ok(commands)
            }
            Err(err) => {
                log::warn!("image rejected: {err}");
                self.image = None;
                self.error = Some(err.clone());
                self.set_phase(MemePhase::Empty);
                Err(err)
            }
        }
    }

    /// Draw the captions onto the canvas.
    pub fn generate(&mut self, top: &str, bottom: &str) -> Result<Vec<DrawCommand>> {
        self.require(EditorAction::Generate)?;

        let commands = caption_commands(
            self.config.canvas_width,
            self.config.canvas_height,
            top,
            bottom,
            &self.config.caption,
            &self.config.colors(),
        );
        self.set_phase(MemePhase::Generated);
        Ok(commands)
    }

    /// Wipe the canvas and re-enable generation.
    ///
    /// The loaded image is kept, so generating again does not need a new file.
    pub fn clear(&mut self) -> Result<Vec<DrawCommand>> {
        self.require(EditorAction::Clear)?;
        self.set_phase(MemePhase::Ready);
        Ok(vec![DrawCommand::Clear])
    }

    /// Build the utterance that reads the current captions aloud.
    pub fn read_aloud(&self, top: &str, bottom: &str, voices: &VoiceCatalog, voice_name: Option<&str>, volume: Volume) -> Result<Utterance> {
        self.require(EditorAction::Read)?;
        Ok(Utterance::for_captions(top, bottom, voices, voice_name, volume))
    }

    fn require(&self, action: EditorAction) -> Result<()> {
        if self.controls().allows(action) {
            Ok(())
        } else {
            log::warn!("{action} requested while {:?}", self.phase);
            Err(MemeError::ActionUnavailable(action))
        }
    }

    fn set_phase(&mut self, phase: MemePhase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FitGeometry;
    use crate::speech::Voice;

    #[test]
    fn test_control_states() {
        assert_eq!(ControlState::for_phase(MemePhase::Empty), ControlState::default());
        let ready = ControlState::for_phase(MemePhase::Ready);
        assert!(ready.generate && !ready.clear && !ready.read);
        let generated = ControlState::for_phase(MemePhase::Generated);
        assert!(!generated.generate && generated.clear && generated.read);
    }

    #[test]
    fn test_editor_phases() {
        let mut editor = MemeEditor::default();
        assert_eq!(editor.phase(), MemePhase::Empty);
        assert_eq!(editor.generate("a", "b"), Err(MemeError::ActionUnavailable(EditorAction::Generate)));

        let commands = editor.load_image(400.0, 400.0).unwrap();
        assert_eq!(commands[2], DrawCommand::DrawImage(FitGeometry { width: 400.0, height: 400.0, start_x: 0.0, start_y: 0.0 }));
        assert_eq!(editor.phase(), MemePhase::Ready);

        editor.generate("a", "b").unwrap();
        assert_eq!(editor.phase(), MemePhase::Generated);
        assert_eq!(editor.generate("a", "b"), Err(MemeError::ActionUnavailable(EditorAction::Generate)));

        assert_eq!(editor.clear().unwrap(), vec![DrawCommand::Clear]);
        assert_eq!(editor.phase(), MemePhase::Ready);
        assert!(editor.image().is_some());
        assert_eq!(editor.clear(), Err(MemeError::ActionUnavailable(EditorAction::Clear)));
    }

    #[test]
    fn test_new_image_resets_generated() {
        let mut editor = MemeEditor::default();
        editor.load_image(800.0, 400.0).unwrap();
        editor.generate("a", "b").unwrap();

        editor.load_image(200.0, 800.0).unwrap();
        assert_eq!(editor.phase(), MemePhase::Ready);
        assert_eq!(editor.image(), Some(ImageSize { width: 200.0, height: 800.0 }));
    }

    #[test]
    fn test_invalid_image_disables_generation() {
        let mut editor = MemeEditor::default();
        editor.load_image(800.0, 400.0).unwrap();

        let err = editor.load_image(0.0, 400.0).unwrap_err();
        assert!(matches!(err, MemeError::InvalidDimension { name: "image width", .. }));
        assert_eq!(editor.phase(), MemePhase::Empty);
        assert!(!editor.controls().generate);
        assert_eq!(editor.error(), Some(&err));
        assert!(editor.image().is_none());

        editor.load_image(10.0, 10.0).unwrap();
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_degenerate_image_stays_empty() {
        let mut editor = MemeEditor::default();
        assert!(matches!(
            editor.load_image(1e-300, 1e300),
            Err(MemeError::InvalidDimension { name: "aspect ratio", .. })
        ));
        assert_eq!(editor.phase(), MemePhase::Empty);
        assert!(!editor.controls().generate);
    }

    #[test]
    fn test_invalid_canvas_config() {
        let config = MemeConfig { canvas_height: 0.0, ..Default::default() };
        let mut editor = MemeEditor::new(config);
        assert!(matches!(
            editor.load_image(10.0, 10.0),
            Err(MemeError::InvalidDimension { name: "canvas height", .. })
        ));
    }

    #[test]
    fn test_read_aloud() {
        let mut voices = VoiceCatalog::new();
        voices.replace(vec![Voice::new("Alex", "en-US", true)]);

        let mut editor = MemeEditor::default();
        editor.load_image(400.0, 400.0).unwrap();
        assert_eq!(
            editor.read_aloud("a", "b", &voices, None, Volume::default()),
            Err(MemeError::ActionUnavailable(EditorAction::Read))
        );

        editor.generate("a", "b").unwrap();
        let utterance = editor.read_aloud("a", "b", &voices, Some("Alex"), Volume::new(25).unwrap()).unwrap();
        assert_eq!(utterance.text, "a b");
        assert_eq!(utterance.voice.map(|v| v.name), Some("Alex".to_string()));
        assert_eq!(utterance.volume, 0.25);
    }
}
