//! Token emission and current-token-accumulator helpers shared by every state
//! module.

use super::{is_void_element, DoctypeBuilder, Html5Tokenizer, PiBuilder, TagBuilder};
use crate::chars::ascii_lower;
use crate::html5::shared::{Attribute, ParseErrorKind, Token};

impl Html5Tokenizer {
    pub(crate) fn emit_token(&mut self, token: Token) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html5.tokenizer", "emit token: {token:?}");
        self.stats.tokens_emitted += 1;
        self.queue.push_back(token);
    }

    /// Emit a run of literal text as one token: `SpaceCharacters` if every
    /// character is HTML whitespace, `Characters` otherwise. Contiguous runs
    /// separated by an entity expansion are *not* fused together; each run
    /// is its own token (see the coalescing design note).
    pub(crate) fn emit_text(&mut self, text: String, start: usize) {
        if text.is_empty() {
            return;
        }
        let is_space = text.chars().all(crate::chars::is_whitespace);
        let span = self.make_span(start);
        if is_space {
            self.emit_token(Token::SpaceCharacters { text, span });
        } else {
            self.emit_token(Token::Characters { text, span });
        }
    }

    pub(crate) fn emit_null_replacement(&mut self) {
        let pos = self.pos();
        self.error(ParseErrorKind::InvalidCodepoint);
        self.emit_text("\u{FFFD}".to_string(), pos);
    }

    // --- tag accumulator -------------------------------------------------

    pub(crate) fn start_tag(&mut self, is_end: bool, start: usize) {
        self.tag = Some(TagBuilder {
            is_end,
            name: String::new(),
            attrs: Vec::new(),
            self_closing: false,
            start,
            cur_attr_name: String::new(),
            cur_attr_value: String::new(),
            cur_attr_start: start,
            has_cur_attr: false,
        });
    }

    pub(crate) fn tag_mut(&mut self) -> &mut TagBuilder {
        self.tag.as_mut().expect("current tag must exist in a tag state")
    }

    pub(crate) fn append_tag_name(&mut self, c: char) {
        self.tag_mut().name.push(c);
    }

    pub(crate) fn finish_current_attribute(&mut self) {
        let Some(tag) = self.tag.as_mut() else { return };
        if !tag.has_cur_attr {
            return;
        }
        let name = if self.config.lowercase_attr_name {
            ascii_lower(&tag.cur_attr_name)
        } else {
            std::mem::take(&mut tag.cur_attr_name)
        };
        let duplicate = tag.attrs.iter().any(|a| a.name == name);
        let value = std::mem::take(&mut tag.cur_attr_value);
        let start = tag.cur_attr_start;
        tag.has_cur_attr = false;
        tag.cur_attr_name.clear();
        if duplicate {
            self.error(ParseErrorKind::DuplicateAttribute);
        }
        let span = self.make_span(start);
        self.tag_mut().attrs.push(Attribute { name, value, span });
    }

    pub(crate) fn start_new_attribute(&mut self) {
        self.finish_current_attribute();
        let pos = self.pos();
        let tag = self.tag_mut();
        tag.has_cur_attr = true;
        tag.cur_attr_start = pos;
    }

    pub(crate) fn append_attr_name(&mut self, c: char) {
        self.tag_mut().cur_attr_name.push(c);
    }

    pub(crate) fn append_attr_value(&mut self, c: char) {
        self.tag_mut().cur_attr_value.push(c);
    }

    pub(crate) fn append_attr_value_str(&mut self, s: &str) {
        self.tag_mut().cur_attr_value.push_str(s);
    }

    /// Whether an end tag's name (built up in `temp_buffer`) matches the most
    /// recently emitted start tag's name. Only an "appropriate" end tag is
    /// allowed to terminate RCDATA/RAWTEXT/script-data content.
    pub(crate) fn is_appropriate_end_tag(&self) -> bool {
        match &self.last_start_tag_name {
            Some(name) => name.eq_ignore_ascii_case(&self.temp_buffer),
            None => false,
        }
    }

    pub(crate) fn emit_current_tag(&mut self) {
        self.finish_current_attribute();
        let tag = self.tag.take().expect("current tag must exist when emitting");
        let name = if self.config.lowercase_element_name {
            ascii_lower(&tag.name)
        } else {
            tag.name.clone()
        };
        let span = self.make_span(tag.start);

        if tag.is_end {
            if !tag.attrs.is_empty() {
                self.error(ParseErrorKind::AttributesInEndTag);
            }
            if tag.self_closing {
                self.error(ParseErrorKind::ThisClosingFlagOnEndTag);
            }
            self.emit_token(Token::EndTag { name, span });
            return;
        }

        self.last_start_tag_name = Some(name.clone());

        if tag.self_closing && !is_void_element(&name) && self.config.emit_synthetic_end_for_self_closing {
            self.emit_token(Token::StartTag {
                name: name.clone(),
                attrs: tag.attrs,
                self_closing: false,
                span,
            });
            self.emit_token(Token::EndTag { name, span: None });
        } else {
            self.emit_token(Token::StartTag {
                name,
                attrs: tag.attrs,
                self_closing: tag.self_closing,
                span,
            });
        }
    }

    /// Abandon the current tag without emitting it, re-emitting its raw text
    /// as character data. Used when `<` is followed by something that turns
    /// out not to be a tag after all (e.g. RCDATA end-tag-open lookahead that
    /// fails the appropriate-end-tag check).
    pub(crate) fn abandon_tag_as_text(&mut self, raw: String, start: usize) {
        self.tag = None;
        self.emit_text(raw, start);
    }

    // --- comment accumulator ----------------------------------------------

    pub(crate) fn start_comment(&mut self, start: usize) {
        self.comment.clear();
        self.comment_start = start;
    }

    pub(crate) fn append_comment(&mut self, c: char) {
        self.comment.push(c);
    }

    pub(crate) fn append_comment_str(&mut self, s: &str) {
        self.comment.push_str(s);
    }

    pub(crate) fn emit_comment(&mut self) {
        let span = self.make_span(self.comment_start);
        let data = std::mem::take(&mut self.comment);
        self.emit_token(Token::Comment { data, span });
    }

    // --- doctype accumulator ------------------------------------------------

    pub(crate) fn start_doctype(&mut self, start: usize) {
        self.doctype = Some(DoctypeBuilder {
            name: None,
            public_id: None,
            system_id: None,
            correct: true,
            start,
        });
    }

    pub(crate) fn doctype_mut(&mut self) -> &mut DoctypeBuilder {
        self.doctype.as_mut().expect("current doctype must exist")
    }

    pub(crate) fn force_quirks(&mut self) {
        self.doctype_mut().correct = false;
    }

    pub(crate) fn emit_doctype(&mut self) {
        let d = self.doctype.take().expect("current doctype must exist when emitting");
        let span = self.make_span(d.start);
        self.emit_token(Token::Doctype {
            name: d.name,
            public_id: d.public_id,
            system_id: d.system_id,
            correct: d.correct,
            span,
        });
    }

    // --- processing-instruction accumulator --------------------------------

    pub(crate) fn start_pi(&mut self, start: usize) {
        self.pi = Some(PiBuilder {
            target: String::new(),
            data: String::new(),
            correct: true,
            start,
        });
    }

    pub(crate) fn pi_mut(&mut self) -> &mut PiBuilder {
        self.pi.as_mut().expect("current processing instruction must exist")
    }

    pub(crate) fn emit_pi(&mut self) {
        let p = self.pi.take().expect("current processing instruction must exist when emitting");
        let span = self.make_span(p.start);
        self.emit_token(Token::ProcessingInstruction {
            target: p.target,
            data: p.data,
            correct: p.correct,
            span,
        });
    }

    // --- input helpers shared by several states ----------------------------

    /// Consume the next character only if it equals `expected`. On mismatch
    /// (or EOF) nothing is consumed.
    pub(crate) fn consume_if(&mut self, expected: char) -> bool {
        match self.input.char() {
            Some(c) if c == expected => true,
            Some(c) => {
                self.input.unget(c);
                false
            }
            None => false,
        }
    }

    /// Try to consume `seq` case-insensitively. On success all of `seq`'s
    /// characters have been consumed; on failure (including EOF partway
    /// through) every character consumed so far is pushed back and `false`
    /// is returned.
    pub(crate) fn consume_ascii_sequence_ci(&mut self, seq: &str) -> bool {
        let mut consumed = Vec::with_capacity(seq.len());
        for expected in seq.chars() {
            match self.input.char() {
                Some(c) if c.eq_ignore_ascii_case(&expected) => consumed.push(c),
                Some(c) => {
                    self.input.unget(c);
                    for c in consumed.into_iter().rev() {
                        self.input.unget(c);
                    }
                    return false;
                }
                None => {
                    for c in consumed.into_iter().rev() {
                        self.input.unget(c);
                    }
                    return false;
                }
            }
        }
        true
    }
}
