//! Plain text output formatter

use super::ScansionFormatter;
use anyhow::Result;
use scansio_core::{SentenceScansion, WeightGlyphs};
use std::io::{self, Write};

/// Plain text formatter - outputs one scansion line per sentence
pub struct TextFormatter<W: Write> {
    writer: W,
    show_syllables: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_syllables: bool) -> Self {
        Self {
            writer,
            show_syllables,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(show_syllables: bool) -> Self {
        Self::new(io::stdout(), show_syllables)
    }
}

impl<W: Write + Send + Sync> ScansionFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &SentenceScansion, glyphs: WeightGlyphs) -> Result<()> {
        if self.show_syllables {
            let syllables: Vec<&str> = sentence.syllables.iter().map(|s| s.as_str()).collect();
            writeln!(
                self.writer,
                "{}\t{}",
                sentence.render(glyphs),
                syllables.join(".")
            )?;
        } else {
            writeln!(self.writer, "{}", sentence.render(glyphs))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scansio_core::ScansionProcessor;

    fn scan_one(text: &str) -> SentenceScansion {
        let processor = ScansionProcessor::builder().sequential().build();
        processor.scan_text(text).sentences.remove(0)
    }

    #[test]
    fn test_one_line_per_sentence() {
        let sentence = scan_one("quam diū etiam.");
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, false);
            formatter.format_sentence(&sentence, WeightGlyphs::default()).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.chars().all(|c| "-u\n".contains(c)));
    }

    #[test]
    fn test_syllable_breakdown() {
        let sentence = scan_one("tandem abiit.");
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, true);
            formatter.format_sentence(&sentence, WeightGlyphs::default()).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let (scansion, syllables) = output.trim_end().split_once('\t').unwrap();
        assert_eq!(scansion.chars().count(), syllables.split('.').count());
    }
}
