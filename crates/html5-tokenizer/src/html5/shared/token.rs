//! HTML5 token model.

use super::{ParseError, Span};

/// A single HTML attribute as encountered in source order. Duplicate names
/// are reported (`duplicate-attribute`) but still appear here in encounter
/// order; it is the consumer's job to keep only the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub span: Option<Span>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype {
        name: Option<String>,
        public_id: Option<String>,
        system_id: Option<String>,
        /// `true` only if the doctype was parsed without hitting any of its
        /// error-recovery paths.
        correct: bool,
        span: Option<Span>,
    },
    StartTag {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
        span: Option<Span>,
    },
    EndTag {
        name: String,
        span: Option<Span>,
    },
    Comment {
        data: String,
        span: Option<Span>,
    },
    Characters {
        text: String,
        span: Option<Span>,
    },
    SpaceCharacters {
        text: String,
        span: Option<Span>,
    },
    ProcessingInstruction {
        target: String,
        data: String,
        correct: bool,
        span: Option<Span>,
    },
    ParseError(ParseError),
}

impl Token {
    /// Name of the tag, for start/end tags only. Used by the appropriate
    /// end-tag check and by tests.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Token::StartTag { name, .. } | Token::EndTag { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_reads_through_start_and_end_tags() {
        let start = Token::StartTag {
            name: "p".to_string(),
            attrs: vec![],
            self_closing: false,
            span: None,
        };
        assert_eq!(start.tag_name(), Some("p"));
        let end = Token::EndTag {
            name: "p".to_string(),
            span: None,
        };
        assert_eq!(end.tag_name(), Some("p"));
        assert_eq!(
            Token::Comment {
                data: String::new(),
                span: None
            }
            .tag_name(),
            None
        );
    }
}
