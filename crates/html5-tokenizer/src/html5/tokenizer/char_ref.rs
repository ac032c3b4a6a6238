//! Character-reference (entity) resolution.
//!
//! Invoked from the Data/RCDATA `&` handling and from the attribute-value
//! states. Unlike the tag/comment/doctype state families this isn't modeled
//! as its own set of `TokenizerState` variants: because the whole document is
//! already buffered, resolving a reference is a single synchronous function
//! call rather than something that needs to survive a chunk boundary.

use super::Html5Tokenizer;
use crate::chars;
use crate::entities;
use crate::html5::shared::ParseErrorKind;

impl Html5Tokenizer {
    /// Resolve a character reference. The leading `&` has already been
    /// consumed by the caller; `start` is its byte offset. `allowed_char`, when
    /// set, is the attribute's quote character (or `>` when unquoted) — a
    /// reference immediately followed by it is not a reference at all.
    pub(crate) fn consume_character_reference(
        &mut self,
        from_attribute: bool,
        allowed_char: Option<char>,
        start: usize,
    ) {
        match self.input.char() {
            None => self.emit_literal_amp(from_attribute, start),
            Some(c)
                if chars::is_whitespace(c)
                    || c == '<'
                    || c == '&'
                    || Some(c) == allowed_char =>
            {
                self.input.unget(c);
                self.emit_literal_amp(from_attribute, start);
            }
            Some('#') => self.consume_numeric_character_reference(from_attribute, start),
            Some(c) => {
                self.input.unget(c);
                self.consume_named_character_reference(from_attribute, start);
            }
        }
    }

    fn emit_literal_amp(&mut self, from_attribute: bool, start: usize) {
        if from_attribute {
            self.append_attr_value('&');
        } else {
            self.emit_text("&".to_string(), start);
        }
    }

    fn emit_resolved(&mut self, from_attribute: bool, start: usize, text: &str) {
        if from_attribute {
            self.append_attr_value_str(text);
        } else {
            self.emit_text(text.to_string(), start);
        }
    }

    fn consume_numeric_character_reference(&mut self, from_attribute: bool, start: usize) {
        let mut marker = String::from("#");
        let is_hex = match self.input.char() {
            Some(c) if c == 'x' || c == 'X' => {
                marker.push(c);
                true
            }
            Some(c) => {
                self.input.unget(c);
                false
            }
            None => false,
        };

        let mut digits = String::new();
        loop {
            match self.input.char() {
                Some(c) if is_hex && chars::is_ascii_hex_digit(c) => digits.push(c),
                Some(c) if !is_hex && chars::is_ascii_digit(c) => digits.push(c),
                Some(c) => {
                    self.input.unget(c);
                    break;
                }
                None => break,
            }
        }

        if digits.is_empty() {
            self.error(ParseErrorKind::ExpectedNumericEntity);
            self.emit_resolved(from_attribute, start, &format!("&{marker}"));
            return;
        }

        let n = u32::from_str_radix(&digits, if is_hex { 16 } else { 10 }).unwrap_or(0x110000);

        if !self.consume_if(';') {
            self.error(ParseErrorKind::NumericEntityWithoutSemicolon);
        }

        let resolved = if let Some(rep) = chars::cp1252_replacement(n) {
            self.error(ParseErrorKind::IllegalCodepointForNumericEntity);
            rep
        } else if chars::is_invalid_numeric_reference(n) {
            self.error(ParseErrorKind::IllegalCodepointForNumericEntity);
            '\u{FFFD}'
        } else {
            if chars::is_disallowed_numeric_reference(n) {
                self.error(ParseErrorKind::IllegalCodepointForNumericEntity);
            }
            char::from_u32(n).unwrap_or('\u{FFFD}')
        };

        let mut out = String::new();
        out.push(resolved);
        self.emit_resolved(from_attribute, start, &out);
    }

    fn consume_named_character_reference(&mut self, from_attribute: bool, start: usize) {
        let Some(first) = self.input.peek() else {
            self.error(ParseErrorKind::ExpectedNamedEntity);
            self.emit_literal_amp(from_attribute, start);
            return;
        };
        let candidates = entities::names_starting_with(first);
        if candidates.is_empty() {
            self.error(ParseErrorKind::ExpectedNamedEntity);
            self.emit_literal_amp(from_attribute, start);
            return;
        }

        let max_len = candidates.iter().map(|s| s.len()).max().unwrap_or(0);
        let mut read: Vec<char> = Vec::with_capacity(max_len);
        while read.len() < max_len {
            match self.input.char() {
                Some(c) => read.push(c),
                None => break,
            }
        }

        let mut matched: Option<(usize, &'static str)> = None;
        for len in (1..=read.len()).rev() {
            let candidate: String = read[..len].iter().collect();
            if let Some(replacement) = entities::lookup(&candidate) {
                matched = Some((len, replacement));
                break;
            }
        }

        let Some((len, replacement)) = matched else {
            for c in read.into_iter().rev() {
                self.input.unget(c);
            }
            self.error(ParseErrorKind::ExpectedNamedEntity);
            self.emit_literal_amp(from_attribute, start);
            return;
        };

        for c in read[len..].iter().rev() {
            self.input.unget(*c);
        }
        let matched_text: String = read[..len].iter().collect();

        if !matched_text.ends_with(';') {
            self.error(ParseErrorKind::NamedEntityWithoutSemicolon);
            if from_attribute {
                if let Some(next) = self.input.peek() {
                    if next == '=' || next.is_ascii_alphanumeric() {
                        self.append_attr_value('&');
                        self.append_attr_value_str(&matched_text);
                        return;
                    }
                }
            }
        }

        self.emit_resolved(from_attribute, start, replacement);
    }
}
