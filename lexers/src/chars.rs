#![deny(warnings)]

use crate::scanner::Scanner;

/// The C locale `isspace` set.
pub static WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITESPACE)
    }

    // skip whitespace and forget it, next lexeme starts clean
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    pub fn until_ws(&mut self) -> bool {
        self.until_any(WHITESPACE)
    }
}
