//! Tag-open lookahead, tag-name, and attribute states.

use super::states::TokenizerState::*;
use super::Html5Tokenizer;
use crate::chars;
use crate::html5::shared::ParseErrorKind::*;

impl Html5Tokenizer {
    pub(crate) fn step_tag_open(&mut self) -> bool {
        match self.input.char() {
            Some('!') => {
                self.transition_to(MarkupDeclarationOpen);
                true
            }
            Some('/') => {
                self.transition_to(CloseTagOpen);
                true
            }
            Some(c) if chars::is_ascii_letter(c) => {
                self.input.unget(c);
                self.start_tag(false, self.pending_lt_start);
                self.transition_to(TagName);
                true
            }
            Some('?') => {
                if self.config.allow_processing_instructions {
                    self.start_pi(self.pending_lt_start);
                    self.transition_to(ProcessingInstruction);
                } else {
                    self.error(ExpectedTagName);
                    self.start_comment(self.pending_lt_start);
                    self.append_comment('?');
                    self.transition_to(BogusComment);
                }
                true
            }
            Some('>') => {
                self.error(ExpectedTagNameButGotRightBracket);
                self.emit_text("<>".to_string(), self.pending_lt_start);
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.error(ExpectedTagName);
                self.input.unget(c);
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(Data);
                true
            }
            None => {
                self.error(ExpectedTagName);
                self.emit_text("<".to_string(), self.pending_lt_start);
                self.transition_to(Data);
                true
            }
        }
    }

    pub(crate) fn step_close_tag_open(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_ascii_letter(c) => {
                self.input.unget(c);
                self.start_tag(true, self.pending_lt_start);
                self.transition_to(TagName);
            }
            Some('>') => {
                self.error(ExpectedTagNameButGotRightBracket);
                self.transition_to(Data);
            }
            other => {
                if other.is_none() {
                    self.error(ExpectedClosingTagButGotEof);
                } else {
                    self.error(ExpectedClosingTagButGotChar);
                }
                self.start_comment(self.pending_lt_start);
                if let Some(c) = other {
                    self.append_comment(c);
                }
                self.transition_to(BogusComment);
            }
        }
        true
    }

    pub(crate) fn step_tag_name(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some(c) if chars::is_whitespace(c) => {
                    self.transition_to(BeforeAttributeName);
                    return true;
                }
                Some('/') => {
                    self.transition_to(SelfClosingStartTag);
                    return true;
                }
                Some('>') => {
                    self.emit_current_tag();
                    self.transition_to(Data);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_tag_name('\u{FFFD}');
                }
                Some(c) => self.append_tag_name(c),
                None => {
                    self.error(EofInTagName);
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_before_attribute_name(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('/') => {
                self.transition_to(SelfClosingStartTag);
                true
            }
            Some('>') => {
                self.emit_current_tag();
                self.transition_to(Data);
                true
            }
            Some('=') => {
                self.error(ExpectedAttributeValueButGotEqualsSign);
                self.start_new_attribute();
                self.append_attr_name('=');
                self.transition_to(AttributeName);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.start_new_attribute();
                self.transition_to(AttributeName);
                true
            }
            None => {
                self.error(ExpectedAttributeNameButGotEof);
                false
            }
        }
    }

    pub(crate) fn step_attribute_name(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) || c == '/' || c == '>' => {
                self.input.unget(c);
                self.transition_to(AfterAttributeName);
                true
            }
            Some('=') => {
                self.transition_to(BeforeAttributeValue);
                true
            }
            Some('\0') => {
                self.error(InvalidCodepoint);
                self.append_attr_name('\u{FFFD}');
                true
            }
            Some(c) if c == '"' || c == '\'' || c == '<' => {
                self.error(InvalidCharacterInAttributeName);
                self.append_attr_name(c);
                true
            }
            Some(c) => {
                self.append_attr_name(c);
                true
            }
            None => {
                self.error(EofInAttributeName);
                false
            }
        }
    }

    pub(crate) fn step_after_attribute_name(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('/') => {
                self.transition_to(SelfClosingStartTag);
                true
            }
            Some('=') => {
                self.transition_to(BeforeAttributeValue);
                true
            }
            Some('>') => {
                self.emit_current_tag();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.start_new_attribute();
                self.transition_to(AttributeName);
                true
            }
            None => {
                self.error(ExpectedAttributeNameButGotEof);
                false
            }
        }
    }

    pub(crate) fn step_before_attribute_value(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => true,
            Some('"') => {
                self.transition_to(AttributeValueDoubleQuoted);
                true
            }
            Some('\'') => {
                self.transition_to(AttributeValueSingleQuoted);
                true
            }
            Some('>') => {
                self.error(ExpectedAttributeValueButGotRightBracket);
                self.emit_current_tag();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.input.unget(c);
                self.transition_to(AttributeValueUnquoted);
                true
            }
            None => {
                self.error(ExpectedAttributeValueButGotEof);
                false
            }
        }
    }

    pub(crate) fn step_attribute_value_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.input.char() {
                Some(c) if c == quote => {
                    self.transition_to(AfterAttributeValue);
                    return true;
                }
                Some('&') => {
                    let amp = self.pos() - 1;
                    self.consume_character_reference(true, Some(quote), amp);
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_attr_value('\u{FFFD}');
                }
                Some(c) => self.append_attr_value(c),
                None => {
                    let kind = if quote == '"' {
                        EofInAttributeValueDoubleQuote
                    } else {
                        EofInAttributeValueSingleQuote
                    };
                    self.error(kind);
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_attribute_value_unquoted(&mut self) -> bool {
        loop {
            match self.input.char() {
                Some(c) if chars::is_whitespace(c) => {
                    self.transition_to(BeforeAttributeName);
                    return true;
                }
                Some('&') => {
                    let amp = self.pos() - 1;
                    self.consume_character_reference(true, Some('>'), amp);
                }
                Some('>') => {
                    self.emit_current_tag();
                    self.transition_to(Data);
                    return true;
                }
                Some('\0') => {
                    self.error(InvalidCodepoint);
                    self.append_attr_value('\u{FFFD}');
                }
                Some('=') => {
                    self.error(EqualsInUnquotedAttributeValue);
                    self.append_attr_value('=');
                }
                Some(c) if matches!(c, '"' | '\'' | '<' | '`') => {
                    self.error(UnexpectedCharacterInUnquotedAttributeValue);
                    self.append_attr_value(c);
                }
                Some(c) => self.append_attr_value(c),
                None => {
                    self.error(EofInAttributeValueNoQuotes);
                    return false;
                }
            }
        }
    }

    pub(crate) fn step_after_attribute_value(&mut self) -> bool {
        match self.input.char() {
            Some(c) if chars::is_whitespace(c) => {
                self.transition_to(BeforeAttributeName);
                true
            }
            Some('/') => {
                self.transition_to(SelfClosingStartTag);
                true
            }
            Some('>') => {
                self.emit_current_tag();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.error(UnexpectedCharacterAfterAttributeValue);
                self.input.unget(c);
                self.transition_to(BeforeAttributeName);
                true
            }
            None => {
                self.error(UnexpectedEofAfterAttributeValue);
                false
            }
        }
    }

    pub(crate) fn step_self_closing_start_tag(&mut self) -> bool {
        match self.input.char() {
            Some('>') => {
                self.tag_mut().self_closing = true;
                self.emit_current_tag();
                self.transition_to(Data);
                true
            }
            Some(c) => {
                self.error(UnexpectedCharacterAfterSoldiusInTag);
                self.input.unget(c);
                self.transition_to(BeforeAttributeName);
                true
            }
            None => {
                self.error(UnexpectedEofAfterSolidusInTag);
                false
            }
        }
    }
}
