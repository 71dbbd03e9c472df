use thiserror::Error;

#[derive(Error, Debug)]
pub enum LvtError {
    #[error("Invalid LVT file: magic number mismatch")]
    BadMagic,

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Field name is not valid UTF-8")]
    InvalidEncoding {
        #[from]
        source: std::str::Utf8Error,
    },

    #[error("Unknown type tag {0:#04X}")]
    UnknownTag(u8),
}

pub type Result<T, E = LvtError> = std::result::Result<T, E>;

impl<I> nom::error::ParseError<I> for LvtError {
    fn from_error_kind(_input: I, _kind: nom::error::ErrorKind) -> Self {
        // The layout is fixed, so the only way a combinator itself fails is
        // by running out of input.
        Self::UnexpectedEof
    }

    fn append(_input: I, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<LvtError>> for LvtError {
    fn from(err: nom::Err<LvtError>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Self::UnexpectedEof,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
