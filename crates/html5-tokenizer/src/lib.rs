//! A streaming HTML5 tokenizer: the WHATWG tokenization stage, decoupled from
//! tree construction so it can be driven by any collaborator that implements
//! the insertion-mode side of the parsing algorithm.
//!
//! The tokenizer consumes a complete, already-decoded document (see
//! [`InputStream`]) and is pulled one token at a time via
//! [`Html5Tokenizer::advance`] (or by iterating the tokenizer directly). A
//! tree-building collaborator steers it between calls by setting the active
//! content model ([`Html5Tokenizer::set_content_model`]) and whether CDATA
//! sections are currently legal ([`Html5Tokenizer::set_cdata_ok`]).
//!
//! Parse errors are ordinary tokens (`Token::ParseError`), interleaved into
//! the stream at the point they were observed, not exceptions — malformed
//! markup always has a well-defined recovery path.

mod chars;
mod entities;
mod html5;

pub use html5::{
    Attribute, ContentModel, ErrorParam, ErrorPolicy, Html5Tokenizer, InputStream,
    InputStreamConfig, ParseError, ParseErrorKind, Span, Token, TokenizerConfig, TokenizerStats,
};
pub use html5::tokenizer::{format_token, TokenFmt};
