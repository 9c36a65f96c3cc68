use serde::Serialize;

use crate::capture::accumulator::TranscriptAccumulator;
use crate::capture::capability::SpeechCapability;

/// Minimum transcript length (in characters) for a stopped take to be
/// submitted for scoring. Shorter takes are kept so the user can resume.
pub const MIN_TRANSCRIPT_CHARS: usize = 10;

/// Lifecycle of one question's capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureState {
    /// Not recording; fragments are dropped.
    Idle,
    /// Recording; fragments are accumulated.
    Recording,
    /// A submission is running; toggles are refused until it settles.
    Submitting,
}

/// What a toggle call decided.
#[derive(Debug, PartialEq)]
pub enum ToggleOutcome {
    /// Capture started; fragments will now be accepted.
    Started,
    /// Capture stopped below the length guard. The transcript is retained
    /// and recording can resume where it left off.
    TooShort,
    /// Capture stopped at or above the guard. The caller must now run the
    /// submission with this transcript and then call `finish_submission`.
    Submit { transcript: String },
    /// Speech recognition is unavailable; nothing changed.
    Unsupported,
    /// A previous submission has not settled yet; nothing changed.
    InFlight,
}

/// State machine for capturing one spoken answer.
///
/// Drives idle -> recording -> submitting -> idle. Stopping auto-submits
/// when enough was said; the accumulator survives short takes so a second
/// toggle continues the same answer.
#[derive(Debug)]
pub struct CaptureController {
    capability: SpeechCapability,
    state: CaptureState,
    accumulator: TranscriptAccumulator,
}

impl CaptureController {
    pub fn new(capability: SpeechCapability) -> Self {
        Self {
            capability,
            state: CaptureState::Idle,
            accumulator: TranscriptAccumulator::new(),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Characters accumulated so far for this question.
    pub fn transcript_chars(&self) -> usize {
        self.accumulator.len()
    }

    /// The single start/stop entry point.
    ///
    /// Starting is refused when the environment cannot capture speech.
    /// Stopping compares the accumulated length against
    /// `MIN_TRANSCRIPT_CHARS`: at or above, the transcript is handed to the
    /// caller for submission; below, the session returns to idle with the
    /// text retained.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if !self.capability.is_supported() {
            return ToggleOutcome::Unsupported;
        }

        match self.state {
            CaptureState::Idle => {
                self.state = CaptureState::Recording;
                ToggleOutcome::Started
            }
            CaptureState::Recording => {
                if self.accumulator.len() >= MIN_TRANSCRIPT_CHARS {
                    self.state = CaptureState::Submitting;
                    ToggleOutcome::Submit {
                        transcript: self.accumulator.take(),
                    }
                } else {
                    self.state = CaptureState::Idle;
                    ToggleOutcome::TooShort
                }
            }
            CaptureState::Submitting => ToggleOutcome::InFlight,
        }
    }

    /// Appends a relayed fragment. Fragments arriving outside the recording
    /// state are dropped. Returns whether the fragment was accepted.
    pub fn push_fragment(&mut self, fragment: &str) -> bool {
        if self.state == CaptureState::Recording {
            self.accumulator.append(fragment);
            true
        } else {
            false
        }
    }

    /// Settles a submission, successful or not: the accumulator is cleared
    /// and the session returns to idle, ready for the next take. A session
    /// that is not mid-submission is left untouched, preserving any text
    /// retained from a short take. Returns whether the session settled.
    pub fn finish_submission(&mut self) -> bool {
        if self.state != CaptureState::Submitting {
            return false;
        }
        self.accumulator.reset();
        self.state = CaptureState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported() -> CaptureController {
        CaptureController::new(SpeechCapability::Supported)
    }

    #[test]
    fn test_toggle_from_idle_starts_recording() {
        let mut ctl = supported();
        assert_eq!(ctl.toggle(), ToggleOutcome::Started);
        assert_eq!(ctl.state(), CaptureState::Recording);
    }

    #[test]
    fn test_stop_below_guard_retains_transcript() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("short"); // 5 chars, below the guard
        assert_eq!(ctl.toggle(), ToggleOutcome::TooShort);
        assert_eq!(ctl.state(), CaptureState::Idle);
        assert_eq!(ctl.transcript_chars(), 5);
    }

    #[test]
    fn test_stop_at_exactly_guard_submits() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("0123456789"); // exactly 10 chars
        match ctl.toggle() {
            ToggleOutcome::Submit { transcript } => assert_eq!(transcript, "0123456789"),
            other => panic!("expected Submit, got {other:?}"),
        }
        assert_eq!(ctl.state(), CaptureState::Submitting);
    }

    #[test]
    fn test_stop_one_below_guard_does_not_submit() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("012345678"); // 9 chars
        assert_eq!(ctl.toggle(), ToggleOutcome::TooShort);
    }

    #[test]
    fn test_fragments_concatenate_into_submission() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("Hello ");
        ctl.push_fragment("world, this works");
        match ctl.toggle() {
            ToggleOutcome::Submit { transcript } => {
                assert_eq!(transcript, "Hello world, this works");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_short_take_resumes_into_same_answer() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("short");
        assert_eq!(ctl.toggle(), ToggleOutcome::TooShort);

        // Second take continues the retained transcript.
        assert_eq!(ctl.toggle(), ToggleOutcome::Started);
        ctl.push_fragment(" but now longer");
        match ctl.toggle() {
            ToggleOutcome::Submit { transcript } => {
                assert_eq!(transcript, "short but now longer");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_fragment_outside_recording_is_dropped() {
        let mut ctl = supported();
        assert!(!ctl.push_fragment("ignored"));
        assert_eq!(ctl.transcript_chars(), 0);
    }

    #[test]
    fn test_toggle_while_submitting_is_refused() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("a long enough answer");
        assert!(matches!(ctl.toggle(), ToggleOutcome::Submit { .. }));

        // Rapid extra toggles while the submission runs change nothing.
        assert_eq!(ctl.toggle(), ToggleOutcome::InFlight);
        assert_eq!(ctl.toggle(), ToggleOutcome::InFlight);
        assert_eq!(ctl.state(), CaptureState::Submitting);
    }

    #[test]
    fn test_fragment_while_submitting_is_dropped() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("a long enough answer");
        assert!(matches!(ctl.toggle(), ToggleOutcome::Submit { .. }));
        assert!(!ctl.push_fragment("late fragment"));
        assert_eq!(ctl.transcript_chars(), 0);
    }

    #[test]
    fn test_finish_submission_returns_to_clean_idle() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("a long enough answer");
        assert!(matches!(ctl.toggle(), ToggleOutcome::Submit { .. }));

        assert!(ctl.finish_submission());
        assert_eq!(ctl.state(), CaptureState::Idle);
        assert_eq!(ctl.transcript_chars(), 0);

        // Next take starts fresh.
        assert_eq!(ctl.toggle(), ToggleOutcome::Started);
    }

    #[test]
    fn test_finish_outside_submission_changes_nothing() {
        let mut ctl = supported();
        ctl.toggle();
        ctl.push_fragment("short");
        assert_eq!(ctl.toggle(), ToggleOutcome::TooShort);

        // A stray settle must not wipe text retained for resumption.
        assert!(!ctl.finish_submission());
        assert_eq!(ctl.state(), CaptureState::Idle);
        assert_eq!(ctl.transcript_chars(), 5);
    }

    #[test]
    fn test_unsupported_environment_refuses_capture() {
        let mut ctl = CaptureController::new(SpeechCapability::Unsupported);
        assert_eq!(ctl.toggle(), ToggleOutcome::Unsupported);
        assert_eq!(ctl.state(), CaptureState::Idle);
        assert!(!ctl.push_fragment("never recorded"));
        // Repeated requests do not wedge the session.
        assert_eq!(ctl.toggle(), ToggleOutcome::Unsupported);
    }
}
