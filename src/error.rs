use std::fmt;

use crate::tag::TagKind;

/// Whether an error terminates the parse because of value-level corruption
/// (`Fatal`) or because it was encountered while descending into a list or
/// compound (`Structural`). Both are terminal for the current call; the
/// distinction exists to support better diagnostics (spec §4.3/§7).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Structural,
}

#[derive(Debug)]
pub enum NBTError {
    Io(std::io::Error),
    /// A fixed-width field needed more bytes than remained in the input.
    Truncated { needed: usize, available: usize },
    /// A kind octet outside 0..=12.
    InvalidTagKind(u8),
    /// A signed length field for a string/array/list came back negative.
    NegativeLength { field: &'static str, value: i32 },
    /// The root tag was not a Compound or List.
    InvalidRootKind(TagKind),
    /// Bytes remained after the root tag was fully parsed.
    TrailingData { extra: usize },
    /// A List element's kind did not match the list's declared element kind.
    InvalidList { found: TagKind, expecting: TagKind },
    /// Recursion nested deeper than the configured limit.
    DepthLimitExceeded { limit: usize },
    /// The textual (JSON-shaped) form was missing a field, had an unknown
    /// discriminator, or a value shape that didn't match its `type`.
    TextShapeMismatch(String),
    /// A string tag's bytes were not read as valid UTF-8/CESU-8.
    StringError,
    /// Context label attached to a structural failure (e.g. "in compound",
    /// "in list element 3"), wrapping the underlying cause.
    Context { label: String, source: Box<NBTError> },
    Custom(String),
}

impl NBTError {
    pub fn severity(&self) -> Severity {
        match self {
            NBTError::InvalidList { .. } | NBTError::Context { .. } => Severity::Structural,
            _ => Severity::Fatal,
        }
    }

    pub fn context(self, label: impl Into<String>) -> NBTError {
        NBTError::Context {
            label: label.into(),
            source: Box::new(self),
        }
    }
}

pub type NBTResult<T> = Result<T, NBTError>;

impl fmt::Display for NBTError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NBTError::Io(e) => write!(f, "I/O error: {}", e),
            NBTError::Truncated { needed, available } => write!(
                f,
                "data too short: needed {} bytes, had {}",
                needed, available
            ),
            NBTError::InvalidTagKind(id) => write!(f, "invalid tag kind identifier {}", id),
            NBTError::NegativeLength { field, value } => {
                write!(f, "negative length {} for {}", value, field)
            }
            NBTError::InvalidRootKind(kind) => {
                write!(f, "root tag is not a Compound or List (found {})", kind)
            }
            NBTError::TrailingData { extra } => {
                write!(f, "{} bytes of extra data after parsing NBT tag", extra)
            }
            NBTError::InvalidList { found, expecting } => write!(
                f,
                "list element kind mismatch: expected {} but found {}",
                expecting, found
            ),
            NBTError::DepthLimitExceeded { limit } => {
                write!(f, "nesting depth exceeded limit of {}", limit)
            }
            NBTError::TextShapeMismatch(msg) => write!(f, "textual form mismatch: {}", msg),
            NBTError::StringError => write!(f, "invalid UTF-8 in tag name"),
            NBTError::Context { label, source } => write!(f, "{}: {}", label, source),
            NBTError::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for NBTError {}

impl From<std::io::Error> for NBTError {
    fn from(e: std::io::Error) -> Self {
        NBTError::Io(e)
    }
}

impl From<serde_json::Error> for NBTError {
    fn from(e: serde_json::Error) -> Self {
        NBTError::TextShapeMismatch(e.to_string())
    }
}
