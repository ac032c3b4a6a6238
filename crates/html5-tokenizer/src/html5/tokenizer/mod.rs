//! HTML5 tokenizer public API.
//!
//! The tokenizer is a pull-based state machine: nothing runs until the
//! consumer calls [`Html5Tokenizer::advance`] (or iterates). A tree-building
//! collaborator drives it and, between calls to `advance`, may set the active
//! content model (`set_content_model`) and whether CDATA sections are
//! currently permitted (`set_cdata_ok`) — see the crate-level docs for the
//! full contract.

mod char_ref;
mod data_states;
mod emit;
mod iterator;
mod markup_decl;
mod pi_states;
mod states;
mod tag_states;
pub mod token_fmt;

#[cfg(test)]
mod tests;

use crate::html5::shared::{Attribute, ErrorParam, ErrorPolicy, InputStream, ParseError, ParseErrorKind, Span, Token};
use states::TokenizerState;
use std::collections::VecDeque;

pub use states::ContentModel;
pub use token_fmt::{format_token, TokenFmt};

/// Configuration accepted at construction time. See the external-interfaces
/// contract for the meaning of every field.
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    pub lowercase_element_name: bool,
    pub lowercase_attr_name: bool,
    pub generate_spans: bool,
    pub allow_processing_instructions: bool,
    pub emit_synthetic_end_for_self_closing: bool,
    pub error_policy: ErrorPolicy,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase_element_name: true,
            lowercase_attr_name: true,
            generate_spans: false,
            allow_processing_instructions: true,
            emit_synthetic_end_for_self_closing: true,
            error_policy: ErrorPolicy::default(),
        }
    }
}

/// Lightweight counters, exposed for diagnostics/benchmarking only; no
/// tokenizer behavior depends on their values.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenizerStats {
    pub tokens_emitted: u64,
    pub errors_seen: u64,
    pub errors_dropped: u64,
}

/// Well-known HTML void elements, used to decide whether a `/>` on a non-void
/// element should synthesize a matching end tag (see
/// `emit_synthetic_end_for_self_closing`).
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

pub(crate) fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

#[derive(Debug)]
pub(crate) struct TagBuilder {
    pub is_end: bool,
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub self_closing: bool,
    pub start: usize,
    pub cur_attr_name: String,
    pub cur_attr_value: String,
    pub cur_attr_start: usize,
    pub has_cur_attr: bool,
}

#[derive(Debug, Default)]
pub(crate) struct DoctypeBuilder {
    pub name: Option<String>,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
    pub correct: bool,
    pub start: usize,
}

#[derive(Debug, Default)]
pub(crate) struct PiBuilder {
    pub target: String,
    pub data: String,
    pub correct: bool,
    pub start: usize,
}

/// A streaming HTML5 tokenizer over a complete, already-decoded input buffer.
pub struct Html5Tokenizer {
    pub(crate) input: InputStream,
    pub(crate) config: TokenizerConfig,
    pub(crate) state: TokenizerState,
    pub(crate) cdata_ok: bool,

    pub(crate) queue: VecDeque<Token>,
    pub(crate) done: bool,

    pub(crate) tag: Option<TagBuilder>,
    pub(crate) comment: String,
    pub(crate) comment_start: usize,
    pub(crate) doctype: Option<DoctypeBuilder>,
    pub(crate) pi: Option<PiBuilder>,
    pub(crate) temp_buffer: String,
    pub(crate) last_start_tag_name: Option<String>,
    /// Byte offset of the most recent unresolved `<` seen in RCDATA/RAWTEXT/
    /// script-data content, kept around while the less-than-sign/end-tag-open
    /// lookahead family decides whether it starts a real end tag.
    pub(crate) pending_lt_start: usize,

    pub(crate) stats: TokenizerStats,
    pub(crate) recent_errors: VecDeque<ParseError>,
}

impl Html5Tokenizer {
    pub fn new(input: InputStream, config: TokenizerConfig) -> Self {
        let mut decode_errors = Vec::new();
        let mut input = input;
        decode_errors.append(&mut input.take_decode_errors());

        let mut tokenizer = Self {
            input,
            config,
            state: TokenizerState::Data,
            cdata_ok: false,
            queue: VecDeque::new(),
            done: false,
            tag: None,
            comment: String::new(),
            comment_start: 0,
            doctype: None,
            pi: None,
            temp_buffer: String::new(),
            last_start_tag_name: None,
            pending_lt_start: 0,
            stats: TokenizerStats::default(),
            recent_errors: VecDeque::new(),
        };
        for err in decode_errors {
            tokenizer.emit_error_token(err);
        }
        tokenizer
    }

    pub fn from_str(text: &str, config: TokenizerConfig) -> Self {
        Self::new(InputStream::from_str(text), config)
    }

    /// Set the active content model. A tree-building collaborator calls this
    /// immediately after consuming a start-tag token whose element switches
    /// the tokenizer into RCDATA/RAWTEXT/script-data/PLAINTEXT.
    pub fn set_content_model(&mut self, model: ContentModel) {
        self.state = model.into();
    }

    /// Whether a `[CDATA[` markup declaration should be honored right now.
    /// The parser sets this based on whether the current insertion point is
    /// inside a foreign-namespace element.
    pub fn set_cdata_ok(&mut self, ok: bool) {
        self.cdata_ok = ok;
    }

    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    pub fn recent_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.recent_errors.iter()
    }

    /// Run the state machine until either a token is ready or input is
    /// exhausted. Returns `None` only once, when there is nothing left to
    /// produce.
    pub fn advance(&mut self) -> Option<Token> {
        const MAX_STEPS_WITHOUT_PROGRESS: u32 = 1_000_000;
        let mut steps = 0;
        while self.queue.is_empty() {
            if self.done {
                return None;
            }
            let progressed = self.step();
            if !progressed {
                self.done = true;
                if self.queue.is_empty() {
                    return None;
                }
                break;
            }
            steps += 1;
            debug_assert!(
                steps < MAX_STEPS_WITHOUT_PROGRESS,
                "tokenizer state machine made no progress; likely an infinite loop bug"
            );
        }
        self.queue.pop_front()
    }

    pub(crate) fn pos(&self) -> usize {
        self.input.position()
    }

    fn span_from(&self, start: usize) -> Option<Span> {
        if self.config.generate_spans {
            Some(self.input.span(start, self.pos()))
        } else {
            None
        }
    }

    pub(crate) fn make_span(&self, start: usize) -> Option<Span> {
        self.span_from(start)
    }

    /// One step of the state machine. Returns `false` only when the current
    /// state has observed end-of-input and has nothing further to produce
    /// (no more tokens will ever be queued).
    fn step(&mut self) -> bool {
        use TokenizerState::*;
        match self.state {
            Data => self.step_data(),
            Rcdata => self.step_rcdata(),
            Rawtext => self.step_rawtext(),
            ScriptData => self.step_script_data(),
            Plaintext => self.step_plaintext(),

            TagOpen => self.step_tag_open(),
            CloseTagOpen => self.step_close_tag_open(),
            TagName => self.step_tag_name(),

            RcdataLessThanSign => self.step_rcdata_less_than_sign(),
            RcdataEndTagOpen => self.step_rcdata_end_tag_open(),
            RcdataEndTagName => self.step_rcdata_end_tag_name(),
            RawtextLessThanSign => self.step_rawtext_less_than_sign(),
            RawtextEndTagOpen => self.step_rawtext_end_tag_open(),
            RawtextEndTagName => self.step_rawtext_end_tag_name(),

            ScriptDataLessThanSign => self.step_script_data_less_than_sign(),
            ScriptDataEndTagOpen => self.step_script_data_end_tag_open(),
            ScriptDataEndTagName => self.step_script_data_end_tag_name(),
            ScriptDataEscapeStart => self.step_script_data_escape_start(),
            ScriptDataEscapeStartDash => self.step_script_data_escape_start_dash(),
            ScriptDataEscaped => self.step_script_data_escaped(),
            ScriptDataEscapedDash => self.step_script_data_escaped_dash(),
            ScriptDataEscapedDashDash => self.step_script_data_escaped_dash_dash(),
            ScriptDataEscapedLessThanSign => self.step_script_data_escaped_less_than_sign(),
            ScriptDataEscapedEndTagOpen => self.step_script_data_escaped_end_tag_open(),
            ScriptDataEscapedEndTagName => self.step_script_data_escaped_end_tag_name(),
            ScriptDataDoubleEscapeStart => self.step_script_data_double_escape_start(),
            ScriptDataDoubleEscaped => self.step_script_data_double_escaped(),
            ScriptDataDoubleEscapedDash => self.step_script_data_double_escaped_dash(),
            ScriptDataDoubleEscapedDashDash => self.step_script_data_double_escaped_dash_dash(),
            ScriptDataDoubleEscapedLessThanSign => {
                self.step_script_data_double_escaped_less_than_sign()
            }
            ScriptDataDoubleEscapeEnd => self.step_script_data_double_escape_end(),

            BeforeAttributeName => self.step_before_attribute_name(),
            AttributeName => self.step_attribute_name(),
            AfterAttributeName => self.step_after_attribute_name(),
            BeforeAttributeValue => self.step_before_attribute_value(),
            AttributeValueDoubleQuoted => self.step_attribute_value_quoted('"'),
            AttributeValueSingleQuoted => self.step_attribute_value_quoted('\''),
            AttributeValueUnquoted => self.step_attribute_value_unquoted(),
            AfterAttributeValue => self.step_after_attribute_value(),
            SelfClosingStartTag => self.step_self_closing_start_tag(),

            BogusComment => self.step_bogus_comment(),
            MarkupDeclarationOpen => self.step_markup_declaration_open(),
            CommentStart => self.step_comment_start(),
            CommentStartDash => self.step_comment_start_dash(),
            Comment => self.step_comment(),
            CommentEndDash => self.step_comment_end_dash(),
            CommentEnd => self.step_comment_end(),
            CommentEndBang => self.step_comment_end_bang(),

            Doctype => self.step_doctype(),
            BeforeDoctypeName => self.step_before_doctype_name(),
            DoctypeName => self.step_doctype_name(),
            AfterDoctypeName => self.step_after_doctype_name(),
            AfterDoctypePublicKeyword => self.step_after_doctype_public_keyword(),
            BeforeDoctypePublicIdentifier => self.step_before_doctype_public_identifier(),
            DoctypePublicIdentifierDoubleQuoted => {
                self.step_doctype_public_identifier_quoted('"')
            }
            DoctypePublicIdentifierSingleQuoted => {
                self.step_doctype_public_identifier_quoted('\'')
            }
            AfterDoctypePublicIdentifier => self.step_after_doctype_public_identifier(),
            BetweenDoctypePublicAndSystemIdentifiers => {
                self.step_between_doctype_public_and_system_identifiers()
            }
            AfterDoctypeSystemKeyword => self.step_after_doctype_system_keyword(),
            BeforeDoctypeSystemIdentifier => self.step_before_doctype_system_identifier(),
            DoctypeSystemIdentifierDoubleQuoted => {
                self.step_doctype_system_identifier_quoted('"')
            }
            DoctypeSystemIdentifierSingleQuoted => {
                self.step_doctype_system_identifier_quoted('\'')
            }
            AfterDoctypeSystemIdentifier => self.step_after_doctype_system_identifier(),
            BogusDoctype => self.step_bogus_doctype(),

            CdataSection => self.step_cdata_section(),

            ProcessingInstruction => self.step_processing_instruction(),
            ProcessingInstructionTarget => self.step_processing_instruction_target(),
            AfterProcessingInstructionTarget => self.step_after_processing_instruction_target(),
            ProcessingInstructionData => self.step_processing_instruction_data(),
            ProcessingInstructionEnd => self.step_processing_instruction_end(),
        }
    }

    pub(crate) fn transition_to(&mut self, next: TokenizerState) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html5.tokenizer", "state {:?} -> {:?} @{}", self.state, next, self.pos());
        self.state = next;
    }

    fn emit_error_token(&mut self, error: ParseError) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html5.tokenizer", "parse error: {:?} @{}", error.kind, error.position);
        self.stats.errors_seen += 1;
        if self.config.error_policy.track
            && (!self.config.error_policy.debug_only || cfg!(debug_assertions))
        {
            if self.recent_errors.len() >= self.config.error_policy.max_stored {
                self.recent_errors.pop_front();
                self.stats.errors_dropped += 1;
            }
            self.recent_errors.push_back(error.clone());
        }
        self.queue.push_back(Token::ParseError(error));
    }

    pub(crate) fn error(&mut self, kind: ParseErrorKind) {
        let pos = self.pos();
        self.emit_error_token(ParseError::new(kind, pos));
    }

    pub(crate) fn error_with_char(&mut self, kind: ParseErrorKind, c: char) {
        let pos = self.pos();
        self.emit_error_token(ParseError::with_param(kind, pos, ErrorParam::Char(c)));
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn new_tokenizer_starts_in_data_state() {
        let t = Html5Tokenizer::from_str("hi", TokenizerConfig::default());
        assert_eq!(t.state, TokenizerState::Data);
    }
}
