//! Parse errors produced by the tokenizer.
//!
//! Parse errors are data, not control flow: every anomalous input has a
//! well-defined recovery path, and the tokenizer keeps emitting tokens. A
//! `ParseError` is simply interleaved into the token stream at the point the
//! anomaly was observed.

/// Stable string identifiers for every parse error the tokenizer can raise.
/// These match the WHATWG tokenizer's error names (including the historical
/// `soldius` typo in `unexpected-character-after-soldius-in-tag`, kept
/// verbatim since it is the stable identifier consumers may match on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidCodepoint,
    ExpectedTagName,
    ExpectedTagNameButGotRightBracket,
    EofInTagName,
    ExpectedClosingTagButGotEof,
    ExpectedClosingTagButGotChar,
    AttributesInEndTag,
    ThisClosingFlagOnEndTag,
    InvalidCharacterInAttributeName,
    EofInAttributeName,
    DuplicateAttribute,
    ExpectedAttributeNameButGotEof,
    ExpectedAttributeValueButGotEof,
    ExpectedAttributeValueButGotRightBracket,
    ExpectedAttributeValueButGotEqualsSign,
    EqualsInUnquotedAttributeValue,
    UnexpectedCharacterInUnquotedAttributeValue,
    EofInAttributeValueDoubleQuote,
    EofInAttributeValueSingleQuote,
    EofInAttributeValueNoQuotes,
    UnexpectedEofAfterAttributeValue,
    UnexpectedCharacterAfterAttributeValue,
    UnexpectedEofAfterSolidusInTag,
    UnexpectedCharacterAfterSoldiusInTag,
    IncorrectComment,
    EofInComment,
    EofInCommentEndDash,
    EofInCommentDoubleDash,
    EofInCommentEndBangState,
    UnexpectedBangAfterDoubleDashInComment,
    UnexpectedDashAfterDoubleDashInComment,
    UnexpectedCharInComment,
    NeedSpaceAfterDoctype,
    ExpectedDoctypeNameButGotEof,
    ExpectedDoctypeNameButGotRightBracket,
    EofInDoctypeName,
    ExpectedSpaceOrRightBracketInDoctype,
    EofInDoctype,
    UnexpectedCharInDoctype,
    UnexpectedEndOfDoctype,
    IllegalCodepointForNumericEntity,
    NumericEntityWithoutSemicolon,
    ExpectedNumericEntity,
    NamedEntityWithoutSemicolon,
    ExpectedNamedEntity,
    ExpectedDashesOrDoctype,
    EofInScriptInScript,
    ExpectedProcessingInstructionTarget,
    ExpectedProcessingInstructionData,
    EofInProcessingInstruction,
}

impl ParseErrorKind {
    /// The stable string identifier, as it appears in the external contract.
    pub fn as_str(self) -> &'static str {
        use ParseErrorKind::*;
        match self {
            InvalidCodepoint => "invalid-codepoint",
            ExpectedTagName => "expected-tag-name",
            ExpectedTagNameButGotRightBracket => "expected-tag-name-but-got-right-bracket",
            EofInTagName => "eof-in-tag-name",
            ExpectedClosingTagButGotEof => "expected-closing-tag-but-got-eof",
            ExpectedClosingTagButGotChar => "expected-closing-tag-but-got-char",
            AttributesInEndTag => "attributes-in-end-tag",
            ThisClosingFlagOnEndTag => "this-closing-flag-on-end-tag",
            InvalidCharacterInAttributeName => "invalid-character-in-attribute-name",
            EofInAttributeName => "eof-in-attribute-name",
            DuplicateAttribute => "duplicate-attribute",
            ExpectedAttributeNameButGotEof => "expected-attribute-name-but-got-eof",
            ExpectedAttributeValueButGotEof => "expected-attribute-value-but-got-eof",
            ExpectedAttributeValueButGotRightBracket => {
                "expected-attribute-value-but-got-right-bracket"
            }
            ExpectedAttributeValueButGotEqualsSign => {
                "expected-attribute-value-but-got-equals-sign"
            }
            EqualsInUnquotedAttributeValue => "equals-in-unquoted-attribute-value",
            UnexpectedCharacterInUnquotedAttributeValue => {
                "unexpected-character-in-unquoted-attribute-value"
            }
            EofInAttributeValueDoubleQuote => "eof-in-attribute-value-double-quote",
            EofInAttributeValueSingleQuote => "eof-in-attribute-value-single-quote",
            EofInAttributeValueNoQuotes => "eof-in-attribute-value-no-quotes",
            UnexpectedEofAfterAttributeValue => "unexpected-EOF-after-attribute-value",
            UnexpectedCharacterAfterAttributeValue => "unexpected-character-after-attribute-value",
            UnexpectedEofAfterSolidusInTag => "unexpected-EOF-after-solidus-in-tag",
            UnexpectedCharacterAfterSoldiusInTag => "unexpected-character-after-soldius-in-tag",
            IncorrectComment => "incorrect-comment",
            EofInComment => "eof-in-comment",
            EofInCommentEndDash => "eof-in-comment-end-dash",
            EofInCommentDoubleDash => "eof-in-comment-double-dash",
            EofInCommentEndBangState => "eof-in-comment-end-bang-state",
            UnexpectedBangAfterDoubleDashInComment => {
                "unexpected-bang-after-double-dash-in-comment"
            }
            UnexpectedDashAfterDoubleDashInComment => {
                "unexpected-dash-after-double-dash-in-comment"
            }
            UnexpectedCharInComment => "unexpected-char-in-comment",
            NeedSpaceAfterDoctype => "need-space-after-doctype",
            ExpectedDoctypeNameButGotEof => "expected-doctype-name-but-got-eof",
            ExpectedDoctypeNameButGotRightBracket => {
                "expected-doctype-name-but-got-right-bracket"
            }
            EofInDoctypeName => "eof-in-doctype-name",
            ExpectedSpaceOrRightBracketInDoctype => "expected-space-or-right-bracket-in-doctype",
            EofInDoctype => "eof-in-doctype",
            UnexpectedCharInDoctype => "unexpected-char-in-doctype",
            UnexpectedEndOfDoctype => "unexpected-end-of-doctype",
            IllegalCodepointForNumericEntity => "illegal-codepoint-for-numeric-entity",
            NumericEntityWithoutSemicolon => "numeric-entity-without-semicolon",
            ExpectedNumericEntity => "expected-numeric-entity",
            NamedEntityWithoutSemicolon => "named-entity-without-semicolon",
            ExpectedNamedEntity => "expected-named-entity",
            ExpectedDashesOrDoctype => "expected-dashes-or-doctype",
            EofInScriptInScript => "eof-in-script-in-script",
            ExpectedProcessingInstructionTarget => "expected-processing-instruction-target",
            ExpectedProcessingInstructionData => "expected-processing-instruction-data",
            EofInProcessingInstruction => "eof-in-processing-instruction",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single character-shaped parameter attached to some error kinds (for
/// instance the offending character in `unexpected-char-in-comment`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorParam {
    Char(char),
    CodePoint(u32),
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset into the decoded input buffer where the error was observed.
    pub position: usize,
    pub param: Option<ErrorParam>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            param: None,
        }
    }

    pub fn with_param(kind: ParseErrorKind, position: usize, param: ErrorParam) -> Self {
        Self {
            kind,
            position,
            param: Some(param),
        }
    }
}

/// Error tracking policy, mirroring the rest of this lineage's document parse
/// contexts: errors are cheap to produce but callers may not want to pay for
/// unbounded storage.
#[derive(Clone, Copy, Debug)]
pub struct ErrorPolicy {
    /// Whether to retain errors in a queue at all (counters are unaffected).
    pub track: bool,
    /// Maximum number of stored errors; oldest is dropped first on overflow.
    pub max_stored: usize,
    /// Store errors only in debug builds.
    pub debug_only: bool,
    /// Always increment `errors_seen`/`errors_dropped` even when storage is disabled.
    pub track_counters: bool,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            track: true,
            max_stored: 256,
            debug_only: false,
            track_counters: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_ids_match_the_external_contract() {
        assert_eq!(
            ParseErrorKind::UnexpectedCharacterAfterSoldiusInTag.as_str(),
            "unexpected-character-after-soldius-in-tag"
        );
        assert_eq!(ParseErrorKind::DuplicateAttribute.as_str(), "duplicate-attribute");
    }
}
