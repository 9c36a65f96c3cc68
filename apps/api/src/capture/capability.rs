/// Warning surfaced whenever recording is requested without a usable
/// speech-to-text provider.
pub const SPEECH_UNSUPPORTED_WARNING: &str =
    "Speech recognition is not supported in this environment. Please use Google Chrome.";

/// Speech relay providers this service knows how to drive.
/// "web-speech" is the browser Web Speech API relayed by the client.
const KNOWN_PROVIDERS: &[&str] = &["web-speech"];

/// Whether speech-to-text is available to this process.
/// Probed once at startup; every capture session inherits the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechCapability {
    Supported,
    Unsupported,
}

impl SpeechCapability {
    /// Checks the configured provider against the known set. Anything
    /// unrecognized (including an operator disabling capture outright)
    /// degrades to `Unsupported` instead of failing startup.
    pub fn probe(provider: &str) -> Self {
        if KNOWN_PROVIDERS.contains(&provider) {
            SpeechCapability::Supported
        } else {
            SpeechCapability::Unsupported
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, SpeechCapability::Supported)
    }

    /// The static warning to show users, if recording is unavailable.
    pub fn warning(self) -> Option<&'static str> {
        match self {
            SpeechCapability::Supported => None,
            SpeechCapability::Unsupported => Some(SPEECH_UNSUPPORTED_WARNING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_recognizes_web_speech() {
        assert_eq!(SpeechCapability::probe("web-speech"), SpeechCapability::Supported);
    }

    #[test]
    fn test_probe_degrades_on_unknown_provider() {
        assert_eq!(SpeechCapability::probe("none"), SpeechCapability::Unsupported);
        assert_eq!(SpeechCapability::probe(""), SpeechCapability::Unsupported);
    }

    #[test]
    fn test_warning_only_when_unsupported() {
        assert!(SpeechCapability::Supported.warning().is_none());
        let warning = SpeechCapability::Unsupported.warning().unwrap();
        assert!(warning.contains("Google Chrome"));
    }
}
