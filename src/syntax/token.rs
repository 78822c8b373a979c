#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Mul,
}

impl Operator {
    /// The symbol used for this operator in the flattened tree output.
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Number(i64),
    Op(Operator),
    Id(&'src str),

    LParen,
    RParen,
    Comma,
}
