/// Which characters make it into the printed report.
///
/// Classification is presentation-only: counting always covers every
/// character of the lowercased text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharClass {
    /// Alphabetic characters
    #[default]
    Alpha,
    /// Alphanumeric characters
    Alnum,
    /// Printable ASCII, space included
    Ascii,
    /// Numeric characters
    Numeric,
}

impl CharClass {
    #[must_use]
    pub fn includes(self, ch: char) -> bool {
        match self {
            Self::Alpha => ch.is_alphabetic(),
            Self::Alnum => ch.is_alphanumeric(),
            Self::Ascii => ch.is_ascii() && !ch.is_ascii_control(),
            Self::Numeric => ch.is_numeric(),
        }
    }
}

/// Sort key for report entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// By recurrence count, most frequent first by default
    #[default]
    ByCount,
    /// By code point value, lowest first by default
    ByCodepoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
