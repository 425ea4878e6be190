use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CharClass {
    Alpha,
    Alnum,
    Ascii,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// By recurrence count
    #[value(name = "num")]
    ByCount,
    /// By code point value
    #[value(name = "ascii")]
    ByCodepoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}
