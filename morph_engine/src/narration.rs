//! Paragraph assembly for multi-part narration.

use crate::config::PARAGRAPH_WRAP;

/// Accumulates message fragments into soft-wrapped paragraphs.
///
/// Every fragment is followed by a space. Once the running length of the current
/// paragraph passes the wrap threshold a blank line is inserted and counting restarts.
#[derive(Debug, Clone)]
pub struct ParagraphBuffer {
    text: String,
    paragraph_len: usize,
    wrap: usize,
}

impl Default for ParagraphBuffer {
    fn default() -> Self {
        ParagraphBuffer::new(PARAGRAPH_WRAP)
    }
}

impl ParagraphBuffer {
    pub fn new(wrap: usize) -> ParagraphBuffer {
        ParagraphBuffer {
            text: String::new(),
            paragraph_len: 0,
            wrap,
        }
    }

    /// Append one message. Blank messages are ignored.
    pub fn push(&mut self, message: &str) {
        if message.trim().is_empty() {
            return;
        }
        self.text.push_str(message);
        self.paragraph_len += message.chars().count();
        if !message.ends_with(' ') {
            self.text.push(' ');
            self.paragraph_len += 1;
        }
        if self.paragraph_len > self.wrap {
            self.text.push_str("\n\n");
            self.paragraph_len = 0;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The assembled narration without trailing whitespace or breaks.
    pub fn finish(self) -> String {
        self.text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_stay_in_one_paragraph() {
        let mut buffer = ParagraphBuffer::default();
        buffer.push("One.");
        buffer.push("Two. ");
        buffer.push("Three.");
        assert_eq!(buffer.finish(), "One. Two. Three.");
    }

    #[test]
    fn long_runs_are_broken_up() {
        let mut buffer = ParagraphBuffer::new(20);
        for _ in 0..4 {
            buffer.push("Ten chars.");
        }
        let text = buffer.finish();
        assert_eq!(text.matches("\n\n").count(), 1);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn blank_messages_are_skipped() {
        let mut buffer = ParagraphBuffer::default();
        buffer.push("  ");
        assert!(buffer.is_empty());
        assert_eq!(buffer.finish(), "");
    }
}
