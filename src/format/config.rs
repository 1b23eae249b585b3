//! Delimited text format configuration

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

/// Settings shared by the playlist reader and writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Field delimiter (a comma unless overridden)
    pub delimiter: u8,
}

impl FormatConfig {
    /// Create the default comma-delimited configuration
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reader settings: no header row, rows of any width
    ///
    /// Rows are allowed to vary in width so the loader can skip wrong-width
    /// records instead of failing on them.
    pub(crate) fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true);
        builder
    }

    /// Writer settings: no header row, quote only fields that need it
    pub(crate) fn writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary);
        builder
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma() {
        assert_eq!(FormatConfig::default().delimiter, b',');
    }

    #[test]
    fn test_with_delimiter() {
        let config = FormatConfig::new().with_delimiter(b';');
        assert_eq!(config.delimiter, b';');
    }
}
