//! Decoded input stream for the HTML5 tokenizer.
//!
//! The whole document is decoded up front into one buffer: newline
//! normalization and the one-shot `<meta charset>` preview both run once,
//! against that buffer, rather than incrementally across chunks. `unget` only
//! ever needs to push back the single scalar value just read, so it is
//! implemented as a byte-width rewind rather than a general pushback stack.

use super::error::{ErrorParam, ParseError, ParseErrorKind};
use super::span::Span;
use memchr::{memchr, memchr2, memchr3};
use tools::utf8::{finish_utf8, push_utf8_chunk};

/// Configuration for decoding raw bytes into an [`InputStream`].
#[derive(Clone, Debug, Default)]
pub struct InputStreamConfig {
    /// Explicit encoding name, overriding `<meta charset>` sniffing. Only
    /// UTF-8 (and its common aliases) is actually decoded; anything else is
    /// reported once via `invalid-codepoint` and decoding proceeds as UTF-8.
    pub encoding: Option<String>,
    /// Allow a one-shot encoding override sourced from a `<meta charset=...>`
    /// tag in the first few kilobytes of input.
    pub parse_meta: bool,
}

#[derive(Debug)]
pub struct InputStream {
    text: String,
    pos: usize,
    pub(crate) decode_errors: Vec<ParseError>,
}

impl InputStream {
    /// Build a stream directly from already-decoded text.
    pub fn from_str(text: &str) -> Self {
        Self {
            text: normalize_newlines(text),
            pos: 0,
            decode_errors: Vec::new(),
        }
    }

    /// Decode raw bytes as UTF-8 (lossily), honoring `config` for the
    /// declared-encoding / meta-sniffing contract described above.
    pub fn from_bytes(bytes: &[u8], config: &InputStreamConfig) -> Self {
        let mut decode_errors = Vec::new();

        if let Some(declared) = &config.encoding {
            if !is_utf8_compatible(declared) {
                decode_errors.push(ParseError::with_param(
                    ParseErrorKind::InvalidCodepoint,
                    0,
                    ErrorParam::Name(declared.clone()),
                ));
            }
        } else if config.parse_meta {
            if let Some(declared) = sniff_meta_charset(bytes) {
                if !is_utf8_compatible(&declared) {
                    decode_errors.push(ParseError::with_param(
                        ParseErrorKind::InvalidCodepoint,
                        0,
                        ErrorParam::Name(declared),
                    ));
                }
            }
        }

        let mut text = String::new();
        let mut carry = Vec::new();
        push_utf8_chunk(&mut text, &mut carry, bytes);
        finish_utf8(&mut text, &mut carry);
        for (offset, _) in text.match_indices('\u{FFFD}') {
            decode_errors.push(ParseError::new(ParseErrorKind::InvalidCodepoint, offset));
        }

        Self {
            text: normalize_newlines(&text),
            pos: 0,
            decode_errors,
        }
    }

    /// Drain any decode-time errors collected during construction. The
    /// tokenizer calls this exactly once, before stepping the state machine.
    pub fn take_decode_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.decode_errors)
    }

    /// Consume and return the next scalar value, or `None` at end of input.
    pub fn char(&mut self) -> Option<char> {
        let c = self.text[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Push `c` back onto the stream. Must be the scalar most recently
    /// returned by `char()`.
    pub fn unget(&mut self, c: char) {
        let width = c.len_utf8();
        debug_assert!(self.pos >= width, "unget past start of input");
        self.pos -= width;
        debug_assert!(
            self.text[self.pos..].starts_with(c),
            "unget does not match the character at the rewound position"
        );
    }

    /// Consume a maximal run of characters matching (or, if `invert`, *not*
    /// matching) `pred`, stopping at the first non-match or end of input
    /// without consuming it.
    pub fn chars_until(&mut self, mut pred: impl FnMut(char) -> bool, invert: bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.char() {
            let matches = pred(c);
            if matches == invert {
                self.unget(c);
                break;
            }
            out.push(c);
        }
        out
    }

    /// Fast path for `chars_until` when every delimiter is a single ASCII
    /// byte (true of every content-state delimiter set the tokenizer uses:
    /// `&`, `<`, NUL, `-`). Safe at the byte level because none of those
    /// values can occur as a continuation byte of a multi-byte UTF-8
    /// sequence.
    pub fn chars_until_bytes(&mut self, delims: &[u8]) -> String {
        let rest = &self.text.as_bytes()[self.pos..];
        let idx = match *delims {
            [a] => memchr(a, rest),
            [a, b] => memchr2(a, b, rest),
            [a, b, c] => memchr3(a, b, c, rest),
            _ => unreachable!("at most 3 delimiters supported"),
        }
        .unwrap_or(rest.len());
        let s = self.text[self.pos..self.pos + idx].to_string();
        self.pos += idx;
        s
    }

    /// One-character lookahead without consuming.
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Current byte offset into the decoded buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        debug_assert!(
            self.text.is_char_boundary(start) && self.text.is_char_boundary(end),
            "span must land on UTF-8 boundaries"
        );
        Span::new(start, end)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

fn is_utf8_compatible(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "utf-8" | "utf8" | "us-ascii" | "ascii"
    )
}

/// Best-effort scan for `<meta charset="...">` / `<meta http-equiv=... content="...;charset=...">`
/// within the first 1024 bytes, mirroring the bounded preview browsers perform
/// before committing to a decoder.
fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let window = &bytes[..bytes.len().min(1024)];
    let preview = String::from_utf8_lossy(window);
    let lower = preview.to_ascii_lowercase();
    let meta_pos = lower.find("<meta")?;
    let tag_end = lower[meta_pos..].find('>')? + meta_pos;
    let tag = &lower[meta_pos..tag_end];
    if let Some(idx) = tag.find("charset=") {
        let rest = &tag[idx + "charset=".len()..];
        let rest = rest.trim_start_matches(['"', '\'']);
        let end = rest
            .find(|c: char| c == '"' || c == '\'' || c == ' ' || c == '>')
            .unwrap_or(rest.len());
        let name = rest[..end].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_lone_cr_normalize_to_lf() {
        let s = InputStream::from_str("a\r\nb\rc\n");
        assert_eq!(s.as_str(), "a\nb\nc\n");
    }

    #[test]
    fn char_and_unget_round_trip() {
        let mut s = InputStream::from_str("ab");
        let c = s.char().unwrap();
        assert_eq!(c, 'a');
        s.unget(c);
        assert_eq!(s.char(), Some('a'));
        assert_eq!(s.char(), Some('b'));
        assert_eq!(s.char(), None);
    }

    #[test]
    fn chars_until_stops_before_delimiter() {
        let mut s = InputStream::from_str("abc<def");
        let run = s.chars_until(|c| c == '<', false);
        assert_eq!(run, "abc");
        assert_eq!(s.peek(), Some('<'));
    }

    #[test]
    fn invalid_utf8_bytes_report_a_decode_error() {
        let mut s = InputStream::from_bytes(&[b'a', 0xFF, b'b'], &InputStreamConfig::default());
        let errors = s.take_decode_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ParseErrorKind::InvalidCodepoint);
    }

    #[test]
    fn meta_charset_preview_is_recognized() {
        let html = b"<html><head><meta charset=\"iso-8859-1\"></head></html>";
        let cfg = InputStreamConfig {
            encoding: None,
            parse_meta: true,
        };
        let mut s = InputStream::from_bytes(html, &cfg);
        let errors = s.take_decode_errors();
        assert!(errors.iter().any(|e| e.kind == ParseErrorKind::InvalidCodepoint));
    }
}
