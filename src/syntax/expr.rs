use super::token::Operator;

/// An owned expression tree. Every non-leaf node exclusively owns its
/// children; the whole tree is dropped as a unit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Expression<'src> {
    Number(i64),
    Var(&'src str),
    /// Unary minus. Exactly one child.
    Unary(Box<Expression<'src>>),
    Binary {
        lhs: Box<Expression<'src>>,
        op: Operator,
        rhs: Box<Expression<'src>>,
    },
    /// Function call, always with at least one argument.
    Call {
        id: &'src str,
        args: Vec<Expression<'src>>,
    },
}
