mod expr;
mod lexer;
mod parser;
mod token;

pub(crate) use expr::Expression;
pub(crate) use lexer::tokenize;
pub(crate) use parser::parse;
pub(crate) use token::Operator;
