//! Error type shared by every fallible operation in the crate.

/// Errors raised while computing, laying out or writing a calendar.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The year is outside the range the Gregorian date arithmetic supports.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A month value outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// Easter Sunday could not be computed for a year.
    #[error("cannot compute Easter for {year}: {reason}")]
    Easter {
        /// Year of the failed computation.
        year: i32,
        /// Message reported by the Easter algorithm.
        reason: String,
    },

    /// A renderer call addressed a cell outside the table.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} table")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A renderer call addressed a row outside the table.
    #[error("row {row} is outside a table with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// A renderer call was made before a table was added.
    #[error("no table has been added to the document")]
    NoTable,

    /// A color string that is not six hexadecimal digits.
    #[error("invalid color {value:?}: expected 6 hex digits like \"DCE9F5\"")]
    InvalidColor { value: String },

    /// The month palette does not hold exactly one color per month.
    #[error("palette must contain exactly 12 colors, got {len}")]
    InvalidPalette { len: usize },

    /// A layout setting is out of range.
    #[error("invalid layout setting `{field}`: {reason}")]
    InvalidLayout {
        field: &'static str,
        reason: String,
    },

    /// Extra holiday rules could not be parsed.
    #[error("invalid holiday rules: {0}")]
    Rules(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The document could not be packed.
    #[error("failed to pack document: {0}")]
    Docx(String),

    /// Filesystem failure while reading configuration or writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
