use super::Html5Tokenizer;
use crate::html5::shared::Token;

impl Iterator for Html5Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}
