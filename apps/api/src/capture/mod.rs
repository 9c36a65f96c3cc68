// Speech capture: the per-question recording state machine.
// The browser runs speech-to-text locally and relays transcript fragments
// here; this module decides when a finished take becomes a submission.

pub mod accumulator;
pub mod capability;
pub mod controller;
pub mod handlers;
pub mod sessions;
