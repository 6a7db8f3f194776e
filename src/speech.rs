//! Voice catalogue and utterances for reading captions aloud.

use crate::volume::Volume;

/// A speech synthesis voice reported by the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`
    pub lang: String,
    /// Whether the platform marks this voice as its default
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>, is_default: bool) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default,
        }
    }

    /// Label shown in the voice dropdown.
    pub fn label(&self) -> String {
        if self.is_default {
            format!("{} ({}) -- DEFAULT", self.name, self.lang)
        } else {
            format!("{} ({})", self.name, self.lang)
        }
    }
}

/// The list of available voices.
///
/// The platform may report voices late or more than once, so the list is
/// replaced wholesale on every update.
#[derive(Clone, Debug, Default)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalogue with a fresh voice list.
    pub fn replace(&mut self, voices: Vec<Voice>) {
        log::debug!("voice catalogue updated: {} voices", voices.len());
        self.voices = voices;
    }

    /// Find a voice by its exact name.
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.name == name)
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

/// A request to speak text with a chosen voice and volume.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` lets the platform pick its default voice
    pub voice: Option<Voice>,
    /// Volume in 0.0..=1.0
    pub volume: f32,
}

impl Utterance {
    /// Build the utterance for a pair of captions.
    ///
    /// The captions are joined with a single space. A selected voice name
    /// that is not in the catalogue falls back to the platform default.
    pub fn for_captions(top: &str, bottom: &str, catalog: &VoiceCatalog, voice_name: Option<&str>, volume: Volume) -> Self {
        let voice = voice_name.and_then(|name| catalog.find(name)).cloned();
        if voice.is_none() {
            if let Some(name) = voice_name {
                log::warn!("voice {name:?} not available, using platform default");
            }
        }
        Self {
            text: format!("{top} {bottom}"),
            voice,
            volume: volume.gain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VoiceCatalog {
        let mut catalog = VoiceCatalog::new();
        catalog.replace(vec![
            Voice::new("Alex", "en-US", true),
            Voice::new("Amelie", "fr-CA", false),
        ]);
        catalog
    }

    #[test]
    fn test_labels() {
        let catalog = catalog();
        assert_eq!(catalog.voices()[0].label(), "Alex (en-US) -- DEFAULT");
        assert_eq!(catalog.voices()[1].label(), "Amelie (fr-CA)");
    }

    #[test]
    fn test_replace_does_not_duplicate() {
        let mut catalog = catalog();
        catalog.replace(vec![Voice::new("Alex", "en-US", true)]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("Amelie").is_none());
        assert!(catalog.voices()[0].is_default);
    }

    #[test]
    fn test_utterance_with_voice() {
        let utterance = Utterance::for_captions("top", "bottom", &catalog(), Some("Amelie"), Volume::new(40).unwrap());
        assert_eq!(utterance.text, "top bottom");
        assert_eq!(utterance.voice.as_ref().map(|v| v.lang.as_str()), Some("fr-CA"));
        assert!((utterance.volume - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_utterance_unknown_voice() {
        let utterance = Utterance::for_captions("a", "", &catalog(), Some("Nobody"), Volume::default());
        assert_eq!(utterance.text, "a ");
        assert_eq!(utterance.voice, None);
        assert_eq!(utterance.volume, 1.0);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = VoiceCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.find("Alex").is_none());
    }
}
