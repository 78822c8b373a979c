#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    LexError(String),
    ParseError(String),
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
