//! Deterministic token formatting for snapshot tests.
//!
//! Tokens own their text directly (no atom table / span resolver to thread
//! through), so formatting is a plain, allocation-only function.

use crate::html5::shared::{Attribute, Token};

/// Formatter for token snapshot strings. Currently stateless, but kept as a
/// type (rather than a bare function) so snapshot formatting options can grow
/// without changing every call site.
#[derive(Default)]
pub struct TokenFmt;

impl TokenFmt {
    pub fn format(&self, token: &Token) -> String {
        format_token(token)
    }
}

pub fn format_token(token: &Token) -> String {
    match token {
        Token::Doctype {
            name,
            public_id,
            system_id,
            correct,
            ..
        } => {
            let name = name.as_deref().unwrap_or("null").to_string();
            let public_id = public_id
                .as_ref()
                .map_or_else(|| "null".to_string(), |s| format!("\"{}\"", escape_text(s)));
            let system_id = system_id
                .as_ref()
                .map_or_else(|| "null".to_string(), |s| format!("\"{}\"", escape_text(s)));
            format!(
                "DOCTYPE name={name} public_id={public_id} system_id={system_id} correct={correct}"
            )
        }
        Token::StartTag {
            name,
            attrs,
            self_closing,
            ..
        } => {
            let mut out = String::new();
            out.push_str("START name=");
            out.push_str(name);
            out.push_str(" attrs=[");
            for (i, attr) in attrs.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&format_attr(attr));
            }
            out.push_str("] self_closing=");
            out.push_str(if *self_closing { "true" } else { "false" });
            out
        }
        Token::EndTag { name, .. } => format!("END name={name}"),
        Token::Comment { data, .. } => format!("COMMENT data=\"{}\"", escape_text(data)),
        Token::Characters { text, .. } => format!("CHAR text=\"{}\"", escape_text(text)),
        Token::SpaceCharacters { text, .. } => {
            format!("SPACECHAR text=\"{}\"", escape_text(text))
        }
        Token::ProcessingInstruction {
            target,
            data,
            correct,
            ..
        } => format!(
            "PI target=\"{}\" data=\"{}\" correct={correct}",
            escape_text(target),
            escape_text(data)
        ),
        Token::ParseError(err) => match &err.param {
            Some(param) => format!("ERROR {} @{} param={param:?}", err.kind, err.position),
            None => format!("ERROR {} @{}", err.kind, err.position),
        },
    }
}

fn format_attr(attr: &Attribute) -> String {
    format!("{}=\"{}\"", attr.name, escape_text(&attr.value))
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' || ch == '\u{7f}' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}
