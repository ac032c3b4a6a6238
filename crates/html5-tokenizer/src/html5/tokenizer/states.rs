//! Tokenizer state machine states.

/// The tokenizer's internal position within the state machine. This is a
/// strict superset of the content-model states a parser collaborator can
/// request; `ContentModel` below is the small subset a parser is allowed to
/// set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenizerState {
    Data,
    Rcdata,
    Rawtext,
    ScriptData,
    Plaintext,

    TagOpen,
    CloseTagOpen,
    TagName,

    RcdataLessThanSign,
    RcdataEndTagOpen,
    RcdataEndTagName,
    RawtextLessThanSign,
    RawtextEndTagOpen,
    RawtextEndTagName,

    ScriptDataLessThanSign,
    ScriptDataEndTagOpen,
    ScriptDataEndTagName,
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscaped,
    ScriptDataEscapedDash,
    ScriptDataEscapedDashDash,
    ScriptDataEscapedLessThanSign,
    ScriptDataEscapedEndTagOpen,
    ScriptDataEscapedEndTagName,
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscaped,
    ScriptDataDoubleEscapedDash,
    ScriptDataDoubleEscapedDashDash,
    ScriptDataDoubleEscapedLessThanSign,
    ScriptDataDoubleEscapeEnd,

    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValue,
    SelfClosingStartTag,

    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,

    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    AfterDoctypePublicKeyword,
    BeforeDoctypePublicIdentifier,
    DoctypePublicIdentifierDoubleQuoted,
    DoctypePublicIdentifierSingleQuoted,
    AfterDoctypePublicIdentifier,
    BetweenDoctypePublicAndSystemIdentifiers,
    AfterDoctypeSystemKeyword,
    BeforeDoctypeSystemIdentifier,
    DoctypeSystemIdentifierDoubleQuoted,
    DoctypeSystemIdentifierSingleQuoted,
    AfterDoctypeSystemIdentifier,
    BogusDoctype,

    CdataSection,

    ProcessingInstruction,
    ProcessingInstructionTarget,
    AfterProcessingInstructionTarget,
    ProcessingInstructionData,
    ProcessingInstructionEnd,
}

/// The content-model states a tree-construction collaborator may request
/// between `advance()` calls (see the external-interfaces contract). This is
/// a subset of `TokenizerState`: the parser never gets to name, say,
/// `CommentEndDash` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentModel {
    Data,
    Rcdata,
    Rawtext,
    ScriptData,
    Plaintext,
}

impl From<ContentModel> for TokenizerState {
    fn from(value: ContentModel) -> Self {
        match value {
            ContentModel::Data => TokenizerState::Data,
            ContentModel::Rcdata => TokenizerState::Rcdata,
            ContentModel::Rawtext => TokenizerState::Rawtext,
            ContentModel::ScriptData => TokenizerState::ScriptData,
            ContentModel::Plaintext => TokenizerState::Plaintext,
        }
    }
}
