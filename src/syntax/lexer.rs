use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::token::{Operator, Token};

/// Scans the whole input into a token sequence. Fails with
/// [`ErrorKind::LexError`] on any character outside the expression alphabet
/// (digits, ASCII letters, `+ - * ( ) ,` and whitespace).
pub(crate) fn tokenize(src: &str) -> PResult<Vec<Token>> {
    Lexer::new(src).collect()
}

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some((_, '+')) => Some(Ok(Token::Op(Operator::Plus))),
            Some((_, '-')) => Some(Ok(Token::Op(Operator::Minus))),
            Some((_, '*')) => Some(Ok(Token::Op(Operator::Mul))),
            Some((_, '(')) => Some(Ok(Token::LParen)),
            Some((_, ')')) => Some(Ok(Token::RParen)),
            Some((_, ',')) => Some(Ok(Token::Comma)),
            Some((off, c)) => {
                if c.is_whitespace() {
                    return self.next();
                }
                if c.is_ascii_digit() {
                    return Some(self.read_number(off));
                }
                if c.is_ascii_alphabetic() {
                    return Some(Ok(self.read_word(off)));
                }

                Some(Err(ErrorKind::LexError(format!(
                    "Unexpected character {c:?}"
                ))))
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        match s.parse::<i64>() {
            Ok(v) => Ok(Token::Number(v)),
            Err(_) => Err(ErrorKind::LexError(format!(
                "Integer literal out of range: {s}"
            ))),
        }
    }

    // Identifiers are letters only. A digit ends the word and is scanned as
    // its own token.
    fn read_word(&mut self, from_off: usize) -> Token<'src> {
        Token::Id(self.slice_until(from_off, |c| !c.is_ascii_alphabetic()))
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, Token},
        tokenize,
    };
    use crate::error::ErrorKind;

    #[test]
    fn read_number() {
        let tokens = tokenize("12+3").unwrap();
        let expected = &[
            Token::Number(12),
            Token::Op(Operator::Plus),
            Token::Number(3),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn word_then_digits_splits() {
        let tokens = tokenize("ab12").unwrap();
        let expected = &[Token::Id("ab"), Token::Number(12)];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn whitespace_separates() {
        let tokens = tokenize(" foo ( 1024 ,\tbar )\n").unwrap();
        let expected = &[
            Token::Id("foo"),
            Token::LParen,
            Token::Number(1024),
            Token::Comma,
            Token::Id("bar"),
            Token::RParen,
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn invalid_character() {
        let err = tokenize("1 # 2").unwrap_err();

        assert!(matches!(err, ErrorKind::LexError(_)));
    }

    #[test]
    fn number_out_of_range() {
        let err = tokenize("99999999999999999999").unwrap_err();

        assert!(matches!(err, ErrorKind::LexError(_)));
    }
}
