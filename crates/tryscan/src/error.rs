use thiserror::Error;

/// Error returned by the `Result`-producing entry points
/// ([`Scanner::expect`](crate::Scanner::expect),
/// [`Scanner::finish`](crate::Scanner::finish) and
/// [`parse_str`](crate::parse_str)).
///
/// Individual matchers never produce this type; they return `None` and leave
/// the cursor where it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The requested construct is not present.
    #[error("expected {expected} at character {position}")]
    NoMatch {
        /// Name of the construct that was requested.
        expected: &'static str,
        /// Character offset at which it was looked for.
        position: usize,
    },
    /// A value was parsed but non-whitespace input follows it.
    #[error("unexpected trailing input at character {position}")]
    TrailingInput {
        /// Offset of the first character that was not consumed.
        position: usize,
    },
}

impl ScanError {
    /// Character offset the error refers to.
    pub fn position(&self) -> usize {
        match self {
            ScanError::NoMatch { position, .. } | ScanError::TrailingInput { position } => {
                *position
            }
        }
    }
}
