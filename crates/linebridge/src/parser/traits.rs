pub use super::model::{PartialRecord, ParseError};

pub trait FieldParser: Send + Sync {
    /// Extract zero or more partial records from a blob of log text.
    ///
    /// Any error aborts the whole blob: no partial output is returned.
    fn parse_fields(&self, text: &str) -> Result<Vec<PartialRecord>, ParseError>;
}
