//! Data / RCDATA / RAWTEXT / script-data / PLAINTEXT content states, plus
//! their `<` lookahead and end-tag-name sub-machines, and the script-data
//! escape / double-escape family.

use super::states::TokenizerState;
use super::Html5Tokenizer;
use crate::chars;

impl Html5Tokenizer {
    pub(crate) fn step_data(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"&<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('&') => {
                let amp = self.pos() - 1;
                self.consume_character_reference(false, None, amp);
                true
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::TagOpen);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!("chars_until only stops on the requested delimiters"),
            None => false,
        }
    }

    pub(crate) fn step_rcdata(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"&<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('&') => {
                let amp = self.pos() - 1;
                self.consume_character_reference(false, None, amp);
                true
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::RcdataLessThanSign);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    pub(crate) fn step_rawtext(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::RawtextLessThanSign);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    pub(crate) fn step_script_data(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::ScriptDataLessThanSign);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    pub(crate) fn step_plaintext(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    // --- shared `<` / end-tag lookahead machinery --------------------------

    fn less_than_sign_common(&mut self, content_state: TokenizerState, end_tag_open_state: TokenizerState) {
        match self.input.char() {
            Some('/') => {
                self.temp_buffer.clear();
                self.transition_to(end_tag_open_state);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(content_state);
            }
        }
    }

    fn end_tag_open_common(&mut self, content_state: TokenizerState, tag_name_state: TokenizerState) {
        match self.input.char() {
            Some(c) if chars::is_ascii_letter(c) => {
                self.input.unget(c);
                let start = self.pending_lt_start;
                self.start_tag(true, start);
                self.transition_to(tag_name_state);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.emit_text("</".to_string(), self.pending_lt_start);
                self.transition_to(content_state);
            }
        }
    }

    /// `content_state` is where we fall back to if the buffered name turns
    /// out not to be an appropriate end tag.
    fn end_tag_name_common(&mut self, content_state: TokenizerState) {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) && self.is_appropriate_end_tag() => {
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') if self.is_appropriate_end_tag() => {
                self.transition_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') if self.is_appropriate_end_tag() => {
                self.emit_current_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(c) if chars::is_ascii_letter(c) => {
                self.append_tag_name(c);
                self.temp_buffer.push(c);
            }
            other => {
                self.tag = None;
                let raw = format!("</{}", self.temp_buffer);
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.emit_text(raw, self.pending_lt_start);
                self.transition_to(content_state);
            }
        }
    }

    pub(crate) fn step_rcdata_less_than_sign(&mut self) -> bool {
        self.less_than_sign_common(TokenizerState::Rcdata, TokenizerState::RcdataEndTagOpen);
        true
    }

    pub(crate) fn step_rcdata_end_tag_open(&mut self) -> bool {
        self.end_tag_open_common(TokenizerState::Rcdata, TokenizerState::RcdataEndTagName);
        true
    }

    pub(crate) fn step_rcdata_end_tag_name(&mut self) -> bool {
        self.end_tag_name_common(TokenizerState::Rcdata);
        true
    }

    pub(crate) fn step_rawtext_less_than_sign(&mut self) -> bool {
        self.less_than_sign_common(TokenizerState::Rawtext, TokenizerState::RawtextEndTagOpen);
        true
    }

    pub(crate) fn step_rawtext_end_tag_open(&mut self) -> bool {
        self.end_tag_open_common(TokenizerState::Rawtext, TokenizerState::RawtextEndTagName);
        true
    }

    pub(crate) fn step_rawtext_end_tag_name(&mut self) -> bool {
        self.end_tag_name_common(TokenizerState::Rawtext);
        true
    }

    // --- script data: plain, escaped and double-escaped --------------------

    pub(crate) fn step_script_data_less_than_sign(&mut self) -> bool {
        match self.input.char() {
            Some('/') => {
                self.temp_buffer.clear();
                self.transition_to(TokenizerState::ScriptDataEndTagOpen);
            }
            Some('!') => {
                self.emit_text("<!".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataEscapeStart);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptData);
            }
        }
        true
    }

    pub(crate) fn step_script_data_end_tag_open(&mut self) -> bool {
        self.end_tag_open_common(TokenizerState::ScriptData, TokenizerState::ScriptDataEndTagName);
        true
    }

    pub(crate) fn step_script_data_end_tag_name(&mut self) -> bool {
        self.end_tag_name_common(TokenizerState::ScriptData);
        true
    }

    pub(crate) fn step_script_data_escape_start(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataEscapeStartDash);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.transition_to(TokenizerState::ScriptData);
            }
        }
        true
    }

    pub(crate) fn step_script_data_escape_start_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataEscapedDashDash);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.transition_to(TokenizerState::ScriptData);
            }
        }
        true
    }

    pub(crate) fn step_script_data_escaped(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"-<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataEscapedDash);
                true
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::ScriptDataEscapedLessThanSign);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    pub(crate) fn step_script_data_escaped_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataEscapedDashDash);
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::ScriptDataEscapedLessThanSign);
            }
            Some('\0') => {
                self.emit_null_replacement();
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
            Some(c) => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
            None => return false,
        }
        true
    }

    pub(crate) fn step_script_data_escaped_dash_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.transition_to(TokenizerState::ScriptDataEscapedLessThanSign);
            }
            Some('>') => {
                self.emit_text(">".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptData);
            }
            Some('\0') => {
                self.emit_null_replacement();
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
            Some(c) => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
            None => return false,
        }
        true
    }

    pub(crate) fn step_script_data_escaped_less_than_sign(&mut self) -> bool {
        match self.input.char() {
            Some('/') => {
                self.temp_buffer.clear();
                self.transition_to(TokenizerState::ScriptDataEscapedEndTagOpen);
            }
            Some(c) if chars::is_ascii_letter(c) => {
                self.input.unget(c);
                self.temp_buffer.clear();
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapeStart);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
        }
        true
    }

    pub(crate) fn step_script_data_escaped_end_tag_open(&mut self) -> bool {
        self.end_tag_open_common(
            TokenizerState::ScriptDataEscaped,
            TokenizerState::ScriptDataEscapedEndTagName,
        );
        true
    }

    pub(crate) fn step_script_data_escaped_end_tag_name(&mut self) -> bool {
        self.end_tag_name_common(TokenizerState::ScriptDataEscaped);
        true
    }

    /// Entered with the first letter of the double-escape marker (`script`)
    /// already un-got so it's re-read here char by char.
    pub(crate) fn step_script_data_double_escape_start(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) || c == '/' || c == '>' => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                if self.temp_buffer.eq_ignore_ascii_case("script") {
                    self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
                } else {
                    self.transition_to(TokenizerState::ScriptDataEscaped);
                }
            }
            Some(c) if chars::is_ascii_letter(c) => {
                self.temp_buffer.push(c);
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.transition_to(TokenizerState::ScriptDataEscaped);
            }
        }
        true
    }

    pub(crate) fn step_script_data_double_escaped(&mut self) -> bool {
        let start = self.pos();
        let text = self.input.chars_until_bytes(b"-<\0");
        if !text.is_empty() {
            self.emit_text(text, start);
        }
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapedDash);
                true
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                true
            }
            Some('\0') => {
                self.emit_null_replacement();
                true
            }
            Some(_) => unreachable!(),
            None => false,
        }
    }

    pub(crate) fn step_script_data_double_escaped_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapedDashDash);
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('\0') => {
                self.emit_null_replacement();
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
            Some(c) => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
            None => return false,
        }
        true
    }

    /// Corrected per the design note: this transitions to `DashDash`, not
    /// back to a lone `Dash`, unlike an easy-to-make mistake in some ports.
    pub(crate) fn step_script_data_double_escaped_dash_dash(&mut self) -> bool {
        match self.input.char() {
            Some('-') => {
                self.emit_text("-".to_string(), self.pos() - 1);
            }
            Some('<') => {
                self.pending_lt_start = self.pos() - 1;
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('>') => {
                self.emit_text(">".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptData);
            }
            Some('\0') => {
                self.emit_null_replacement();
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
            Some(c) => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
            None => return false,
        }
        true
    }

    pub(crate) fn step_script_data_double_escaped_less_than_sign(&mut self) -> bool {
        match self.input.char() {
            Some('/') => {
                self.temp_buffer.clear();
                self.emit_text("/".to_string(), self.pos() - 1);
                self.transition_to(TokenizerState::ScriptDataDoubleEscapeEnd);
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
        true
    }

    pub(crate) fn step_script_data_double_escape_end(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) || c == '/' || c == '>' => {
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
                if self.temp_buffer.eq_ignore_ascii_case("script") {
                    self.transition_to(TokenizerState::ScriptDataEscaped);
                } else {
                    self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
                }
            }
            Some(c) if chars::is_ascii_letter(c) => {
                self.temp_buffer.push(c);
                self.emit_text(c.to_string(), self.pos() - c.len_utf8());
            }
            other => {
                if let Some(c) = other {
                    self.input.unget(c);
                }
                self.transition_to(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
        true
    }
}
