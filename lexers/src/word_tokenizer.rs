#![deny(warnings)]

use crate::scanner::Scanner;

/// Splits a char stream on runs of whitespace.
///
/// Yields every maximal run of non-whitespace chars, in order. There is no
/// quoting or escaping, so an empty or all-blank input yields nothing.
pub struct WordTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> WordTokenizer<I> {
    pub fn new(source: I) -> Self {
        WordTokenizer{src: Scanner::new(source)}
    }

    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }
}

impl<I: Iterator<Item=char>> Iterator for WordTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        if self.src.until_ws() {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
