#![allow(dead_code)]

/// Accumulates transcript fragments for one answer take.
///
/// Fragments are appended in arrival order with no separator of their own;
/// the speech relay already includes whatever whitespace it heard. Length is
/// counted in characters, not bytes, because the guard threshold is defined
/// over what the user said, not its encoding.
#[derive(Debug, Default)]
pub struct TranscriptAccumulator {
    text: String,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fragment by plain concatenation.
    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// Discards everything accumulated so far.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Character count of the accumulated transcript.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Moves the accumulated transcript out, leaving the accumulator empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_concatenates_in_order() {
        let mut acc = TranscriptAccumulator::new();
        acc.append("Hello ");
        acc.append("world, this works");
        assert_eq!(acc.as_str(), "Hello world, this works");
    }

    #[test]
    fn test_append_adds_no_separator() {
        let mut acc = TranscriptAccumulator::new();
        acc.append("ab");
        acc.append("cd");
        assert_eq!(acc.as_str(), "abcd");
    }

    #[test]
    fn test_len_counts_characters_not_bytes() {
        let mut acc = TranscriptAccumulator::new();
        acc.append("héllo");
        assert_eq!(acc.len(), 5);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut acc = TranscriptAccumulator::new();
        acc.append("some words");
        acc.reset();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
    }

    #[test]
    fn test_take_moves_text_out() {
        let mut acc = TranscriptAccumulator::new();
        acc.append("finished take");
        let text = acc.take();
        assert_eq!(text, "finished take");
        assert!(acc.is_empty());
    }
}
