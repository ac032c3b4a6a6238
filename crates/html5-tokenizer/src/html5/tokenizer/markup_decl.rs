//! Markup declaration lookahead, comments, doctypes, and CDATA sections.

use super::states::TokenizerState::*;
use super::Html5Tokenizer;
use crate::chars;
use crate::html5::shared::ParseErrorKind::*;

impl Html5Tokenizer {
    fn append_doctype_name(&mut self, c: char) {
        self.doctype_mut().name.get_or_insert_with(String::new).push(c);
    }

    fn append_doctype_public_id(&mut self, c: char) {
        self.doctype_mut().public_id.get_or_insert_with(String::new).push(c);
    }

    fn append_doctype_system_id(&mut self, c: char) {
        self.doctype_mut().system_id.get_or_insert_with(String::new).push(c);
    }

    pub(crate) fn step_markup_declaration_open(&mut self) -> bool {
        let start = self.pending_lt_start;
        if self.consume_ascii_sequence_ci("--") {
            self.start_comment(start);
            self.transition_to(CommentStart);
            return true;
        }
        if self.consume_ascii_sequence_ci("DOCTYPE") {
            self.start_doctype(start);
            self.transition_to(Doctype);
            return true;
        }
        if self.cdata_ok && self.consume_ascii_sequence_ci("[CDATA[") {
            self.temp_buffer.clear();
            self.transition_to(CdataSection);
            return true;
        }
        self.error(ExpectedDashesOrDoctype);
        self.start_comment(start);
        self.transition_to(BogusComment);
        true
    }

    // --- comments -----------------------------------------------------------

    pub(crate) fn step_comment_start(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.transition_to(CommentStartDash);
                true
            }
            Some('>') => {
                self.error(IncorrectComment);
                self.emit_comment();
                self.transition_to(Data);
                true
            }
            Some('\0') => {
                self.error(InvalidCodepoint);
                self.append_comment('\u{FFFD}');
                self.transition_to(Comment);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.transition_to(Comment);
                true
            }
            None => {
                self.error(EofInComment);
                self.emit_comment();
                false
            }
        }
    }

    pub(crate) fn step_comment_start_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.transition_to(CommentEnd);
                true
            }
            Some('>') => {
                self.error(IncorrectComment);
                self.emit_comment();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.append_comment('-');
                self.input.unget(c);
                self.transition_to(Comment);
                true
            }
            None => {
                self.error(EofInCommentEndDash);
                self.emit_comment();
                false
            }
        }
    }

    pub(crate) fn step_comment(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some('-') => {
                    self.transition_to(CommentEndDash);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_comment('\u{FFFD}');
                }
                Some(c) => self.append_comment(c),
                None => {
                    self.error(EofInComment);
                    self.emit_comment();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_comment_end_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.transition_to(CommentEnd);
                true
            }
            Some(c) => {
                self.append_comment('-');
                self.input.unget(c);
                self.transition_to(Comment);
                true
            }
            None => {
                self.error(EofInCommentEndDash);
                self.emit_comment();
                false
            }
        }
    }

    pub(crate) fn step_comment_end(&mut self) -> bool {
        match self.input.char() {
            Some('>') => {
                self.emit_comment();
                self.transition_to(Data);
                true
            }
            Some('!') => {
                self.transition_to(CommentEndBang);
                true
            }
            Some('-') => {
                self.append_comment('-');
                true
            }
            Some(c) => {
                self.append_comment_str("--");
                self.input.unget(c);
                self.transition_to(Comment);
                true
            }
            None => {
                self.error(EofInCommentDoubleDash);
                self.emit_comment();
                false
            }
        }
    }

    pub(crate) fn step_comment_end_bang(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.append_comment_str("--!");
                self.transition_to(CommentEndDash);
                true
            }
            Some('>') => {
                self.error(UnexpectedBangAfterDoubleDashInComment);
                self.emit_comment();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.append_comment_str("--!");
                self.input.unget(c);
                self.transition_to(Comment);
                true
            }
            None => {
                self.error(EofInCommentEndBangState);
                self.emit_comment();
                false
            }
        }
    }

    pub(crate) fn step_bogus_comment(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some('>') => {
                    self.emit_comment();
                    self.transition_to(Data);
                    return true;
                }
                Some('\0') => self.append_comment('\u{FFFD}'),
                Some(c) => self.append_comment(c),
                None => {
                    self.emit_comment();
                    return false;
                }
            }
        }
    }

    // --- doctype --------------------------------------------------------------

    pub(crate) fn step_doctype(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => {
                self.transition_to(BeforeDoctypeName);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(NeedSpaceAfterDoctype);
                self.force_quirks();
                self.transition_to(BeforeDoctypeName);
                true
            }
            None => {
                self.error(ExpectedDoctypeNameButGotEof);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_before_doctype_name(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('\0') => {
                self.error(InvalidCodepoint);
                self.append_doctype_name('\u{FFFD}');
                self.transition_to(DoctypeName);
                true
            }
            Some('>') => {
                self.error(ExpectedDoctypeNameButGotRightBracket);
                self.force_quirks();
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.append_doctype_name(c.to_ascii_lowercase());
                self.transition_to(DoctypeName);
                true
            }
            None => {
                self.error(ExpectedDoctypeNameButGotEof);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_doctype_name(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some(c) if chars::is_whitespace(c) => {
                    self.transition_to(AfterDoctypeName);
                    return true;
                }
                Some('>') => {
                    self.emit_doctype();
                    self.transition_to(Data);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_doctype_name('\u{FFFD}');
                }
                Some(c) => self.append_doctype_name(c.to_ascii_lowercase()),
                None => {
                    self.error(EofInDoctypeName);
                    self.force_quirks();
                    self.emit_doctype();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_after_doctype_name(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('>') => {
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
            Some(c) => {
                self.input.unget(c);
                if self.consume_ascii_sequence_ci("PUBLIC") {
                    self.transition_to(AfterDoctypePublicKeyword);
                } else if self.consume_ascii_sequence_ci("SYSTEM") {
                    self.transition_to(AfterDoctypeSystemKeyword);
                } else {
                    self.error(ExpectedSpaceOrRightBracketInDoctype);
                    self.force_quirks();
                    self.transition_to(BogusDoctype);
                }
                true
            }
        }
    }

    pub(crate) fn step_after_doctype_public_keyword(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => {
                self.transition_to(BeforeDoctypePublicIdentifier);
                true
            }
            Some('"') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().public_id = Some(String::new());
                self.transition_to(DoctypePublicIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().public_id = Some(String::new());
                self.transition_to(DoctypePublicIdentifierSingleQuoted);
                true
            }
            Some('>') => {
                self.error(ExpectedDoctypeNameButGotRightBracket);
                self.force_quirks();
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_before_doctype_public_identifier(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('"') => {
                self.doctype_mut().public_id = Some(String::new());
                self.transition_to(DoctypePublicIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.doctype_mut().public_id = Some(String::new());
                self.transition_to(DoctypePublicIdentifierSingleQuoted);
                true
            }
            Some('>') => {
                self.error(ExpectedDoctypeNameButGotRightBracket);
                self.force_quirks();
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_doctype_public_identifier_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.input.char() {
                Some(c) if c == quote => {
                    self.transition_to(AfterDoctypePublicIdentifier);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_doctype_public_id('\u{FFFD}');
                }
                Some('>') => {
                    self.error(ExpectedDoctypeNameButGotRightBracket);
                    self.force_quirks();
                    self.emit_doctype();
                    self.transition_to(Data);
                    return true;
                }
                Some(c) => self.append_doctype_public_id(c),
                None => {
                    self.error(EofInDoctype);
                    self.force_quirks();
                    self.emit_doctype();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_after_doctype_public_identifier(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => {
                self.transition_to(BetweenDoctypePublicAndSystemIdentifiers);
                true
            }
            Some('>') => {
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some('"') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierSingleQuoted);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_between_doctype_public_and_system_identifiers(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('>') => {
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some('"') => {
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierSingleQuoted);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_after_doctype_system_keyword(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => {
                self.transition_to(BeforeDoctypeSystemIdentifier);
                true
            }
            Some('"') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.error(UnexpectedCharInDoctype);
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierSingleQuoted);
                true
            }
            Some('>') => {
                self.error(ExpectedDoctypeNameButGotRightBracket);
                self.force_quirks();
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_before_doctype_system_identifier(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('"') => {
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierDoubleQuoted);
                true
            }
            Some('\'') => {
                self.doctype_mut().system_id = Some(String::new());
                self.transition_to(DoctypeSystemIdentifierSingleQuoted);
                true
            }
            Some('>') => {
                self.error(ExpectedDoctypeNameButGotRightBracket);
                self.force_quirks();
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedCharInDoctype);
                self.force_quirks();
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_doctype_system_identifier_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.input.char() {
                Some(c) if c == quote => {
                    self.transition_to(AfterDoctypeSystemIdentifier);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_doctype_system_id('\u{FFFD}');
                }
                Some('>') => {
                    self.error(ExpectedDoctypeNameButGotRightBracket);
                    self.force_quirks();
                    self.emit_doctype();
                    self.transition_to(Data);
                    return true;
                }
                Some(c) => self.append_doctype_system_id(c),
                None => {
                    self.error(EofInDoctype);
                    self.force_quirks();
                    self.emit_doctype();
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_after_doctype_system_identifier(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('>') => {
                self.emit_doctype();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.error(UnexpectedEndOfDoctype);
                self.transition_to(BogusDoctype);
                true
            }
            None => {
                self.error(EofInDoctype);
                self.force_quirks();
                self.emit_doctype();
                false
            }
        }
    }

    pub(crate) fn step_bogus_doctype(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some('>') => {
                    self.emit_doctype();
                    self.transition_to(Data);
                    return true;
                }
                Some(_) => {}
                None => {
                    self.emit_doctype();
                    return false;
                }
            }
        }
    }

    // --- CDATA ------------------------------------------------------------

    pub(crate) fn step_cdata_section(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some(']') => {
                    if self.consume_if(']') {
                        if self.consume_if('>') {
                            let text = std::mem::take(&mut self.temp_buffer);
                            self.emit_text(text, self.pending_lt_start);
                            self.transition_to(Data);
                            return true;
                        }
                        self.temp_buffer.push_str("]]");
                    } else {
                        self.temp_buffer.push(']');
                    }
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.temp_buffer.push('\u{FFFD}');
                }
                Some(c) => self.temp_buffer.push(c),
                None => {
                    let text = std::mem::take(&mut self.temp_buffer);
                    self.emit_text(text, self.pending_lt_start);
                    return false;
                }
            }
        }
    }
}
