use super::{ContentModel, Html5Tokenizer, TokenizerConfig};
use crate::html5::shared::Token;

fn tokenize(input: &str) -> Vec<Token> {
    let mut t = Html5Tokenizer::from_str(input, TokenizerConfig::default());
    let mut out = Vec::new();
    while let Some(tok) = t.advance() {
        out.push(tok);
    }
    out
}

fn tag_names(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().filter_map(Token::tag_name).collect()
}

fn has_error(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| matches!(t, Token::ParseError(_)))
}

#[test]
fn plain_element_roundtrip() {
    let tokens = tokenize("<p>hello</p>");
    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "p"));
    assert!(matches!(&tokens[1], Token::Characters { text, .. } if text == "hello"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "p"));
}

#[test]
fn attributes_are_collected_in_order_with_values() {
    let tokens = tokenize(r#"<a href="x" target='_blank' disabled>"#);
    let Token::StartTag { attrs, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attrs[0].name, "href");
    assert_eq!(attrs[0].value, "x");
    assert_eq!(attrs[1].name, "target");
    assert_eq!(attrs[1].value, "_blank");
    assert_eq!(attrs[2].name, "disabled");
    assert_eq!(attrs[2].value, "");
}

#[test]
fn duplicate_attribute_is_retained_in_source_order_and_reported() {
    let tokens = tokenize(r#"<div id="a" id="b">"#);
    let Token::StartTag { attrs, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].name, "id");
    assert_eq!(attrs[0].value, "a");
    assert_eq!(attrs[1].name, "id");
    assert_eq!(attrs[1].value, "b");
    assert!(has_error(&tokens));
}

#[test]
fn attribute_name_is_lowercased_by_default() {
    let tokens = tokenize(r#"<div ID="x">"#);
    let Token::StartTag { attrs, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attrs[0].name, "id");
}

#[test]
fn void_element_self_close_does_not_synthesize_end_tag() {
    let tokens = tokenize("<br/>after");
    assert_eq!(tag_names(&tokens), vec!["br"]);
    assert!(matches!(&tokens[1], Token::Characters { text, .. } if text == "after"));
}

#[test]
fn non_void_self_close_synthesizes_matching_end_tag() {
    let tokens = tokenize("<custom-elem/>after");
    let names = tag_names(&tokens);
    assert_eq!(names, vec!["custom-elem", "custom-elem"]);
    assert!(matches!(&tokens[2], Token::Characters { text, .. } if text == "after"));
}

#[test]
fn named_character_reference_resolves_in_data() {
    let tokens = tokenize("a&amp;b");
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Characters { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "a&b");
}

#[test]
fn unterminated_named_reference_is_reported_but_still_literal_amp() {
    let tokens = tokenize("a&ampb");
    assert!(has_error(&tokens));
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Characters { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    // &amp (no semicolon) still resolves outside of an attribute context.
    assert_eq!(text, "a&b");
}

#[test]
fn decimal_numeric_reference_resolves() {
    let tokens = tokenize("&#65;");
    assert!(matches!(&tokens[0], Token::Characters { text, .. } if text == "A"));
}

#[test]
fn hex_numeric_reference_resolves() {
    let tokens = tokenize("&#x41;");
    assert!(matches!(&tokens[0], Token::Characters { text, .. } if text == "A"));
}

#[test]
fn cp1252_numeric_reference_is_remapped_with_error() {
    let tokens = tokenize("&#128;");
    // &#128; is the Windows-1252 EURO SIGN remap, not literal U+0080.
    assert!(matches!(&tokens[0], Token::Characters { text, .. } if text == "\u{20AC}"));
    assert!(has_error(&tokens));
}

#[test]
fn null_byte_becomes_replacement_character_with_error() {
    let tokens = tokenize("a\0b");
    assert!(has_error(&tokens));
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Characters { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "a\u{FFFD}b");
}

#[test]
fn comment_round_trips() {
    let tokens = tokenize("<!-- hi -->");
    assert!(matches!(&tokens[0], Token::Comment { data, .. } if data == " hi "));
}

#[test]
fn abrupt_comment_close_reports_incorrect_comment() {
    let tokens = tokenize("<!-->");
    assert!(has_error(&tokens));
    assert!(matches!(&tokens[0], Token::Comment { data, .. } if data.is_empty()));
}

#[test]
fn bogus_comment_from_bang_without_dashes_or_doctype() {
    let tokens = tokenize("<!weird>rest");
    assert!(has_error(&tokens));
    assert!(matches!(&tokens[0], Token::Comment { data, .. } if data == "weird"));
}

#[test]
fn doctype_with_public_and_system_ids() {
    let input = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
    let tokens = tokenize(input);
    let Token::Doctype {
        name,
        public_id,
        system_id,
        correct,
        ..
    } = &tokens[0]
    else {
        panic!("expected doctype");
    };
    assert_eq!(name.as_deref(), Some("html"));
    assert_eq!(public_id.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
    assert_eq!(system_id.as_deref(), Some("http://www.w3.org/TR/html4/strict.dtd"));
    assert!(correct);
}

#[test]
fn bare_doctype_is_lowercased() {
    let tokens = tokenize("<!DOCTYPE HTML>");
    assert!(matches!(&tokens[0], Token::Doctype { name, correct: true, .. } if name.as_deref() == Some("html")));
}

#[test]
fn eof_in_doctype_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE html");
    assert!(has_error(&tokens));
    assert!(matches!(&tokens[0], Token::Doctype { correct: false, .. }));
}

#[test]
fn script_data_is_opaque_until_matching_end_tag() {
    let mut t = Html5Tokenizer::from_str("<script>1 < 2 && x</script>done", TokenizerConfig::default());
    let start = t.advance().unwrap();
    assert!(matches!(&start, Token::StartTag { name, .. } if name == "script"));
    t.set_content_model(ContentModel::ScriptData);
    let text = t.advance().unwrap();
    assert!(matches!(&text, Token::Characters { text, .. } if text == "1 < 2 && x"));
    let end = t.advance().unwrap();
    assert!(matches!(&end, Token::EndTag { name, .. } if name == "script"));
    let rest = t.advance().unwrap();
    assert!(matches!(&rest, Token::Characters { text, .. } if text == "done"));
}

#[test]
fn script_data_inappropriate_end_tag_is_literal_text() {
    let mut t = Html5Tokenizer::from_str("<script></b>real</script>", TokenizerConfig::default());
    let _start = t.advance().unwrap();
    t.set_content_model(ContentModel::ScriptData);
    let text = t.advance().unwrap();
    assert!(matches!(&text, Token::Characters { text, .. } if text == "</b>real"));
    let end = t.advance().unwrap();
    assert!(matches!(&end, Token::EndTag { name, .. } if name == "script"));
}

#[test]
fn script_data_escaped_nested_inside_comment_like_marker() {
    let mut t = Html5Tokenizer::from_str(
        "<script><!--not<script>inner</script>-->tail</script>",
        TokenizerConfig::default(),
    );
    let _start = t.advance().unwrap();
    t.set_content_model(ContentModel::ScriptData);
    let mut chars = String::new();
    loop {
        match t.advance() {
            Some(Token::Characters { text, .. }) => chars.push_str(&text),
            Some(Token::EndTag { name, .. }) if name == "script" => break,
            Some(_) => {}
            None => break,
        }
    }
    assert!(chars.contains("not"));
    assert!(chars.contains("tail"));
}

#[test]
fn rcdata_entities_resolve_but_tags_do_not() {
    let mut t = Html5Tokenizer::from_str("<textarea>a &lt; b</textarea>", TokenizerConfig::default());
    let _start = t.advance().unwrap();
    t.set_content_model(ContentModel::Rcdata);
    let text = t.advance().unwrap();
    assert!(matches!(&text, Token::Characters { text, .. } if text == "a < b"));
}

#[test]
fn rawtext_entities_do_not_resolve() {
    let mut t = Html5Tokenizer::from_str("<style>a &amp; b</style>", TokenizerConfig::default());
    let _start = t.advance().unwrap();
    t.set_content_model(ContentModel::Rawtext);
    let text = t.advance().unwrap();
    assert!(matches!(&text, Token::Characters { text, .. } if text == "a &amp; b"));
}

#[test]
fn cdata_section_emitted_verbatim_when_permitted() {
    let mut t = Html5Tokenizer::from_str("<svg><![CDATA[a<b>&c]]></svg>", TokenizerConfig::default());
    let _start = t.advance().unwrap();
    t.set_cdata_ok(true);
    let text = t.advance().unwrap();
    assert!(matches!(&text, Token::Characters { text, .. } if text == "a<b>&c"));
}

#[test]
fn cdata_falls_back_to_bogus_comment_when_not_permitted() {
    let mut t = Html5Tokenizer::from_str("<div><![CDATA[x]]></div>", TokenizerConfig::default());
    let _start = t.advance().unwrap();
    t.set_cdata_ok(false);
    let next = t.advance().unwrap();
    assert!(matches!(&next, Token::Comment { .. }));
}

#[test]
fn processing_instruction_is_emitted_by_default() {
    let tokens = tokenize("<?xml-stylesheet href=\"x.xsl\"?>rest");
    let Token::ProcessingInstruction { target, data, correct, .. } = &tokens[0] else {
        panic!("expected processing instruction, got {:?}", tokens[0]);
    };
    assert_eq!(target, "xml-stylesheet");
    assert!(data.contains("href"));
    assert!(correct);
}

#[test]
fn processing_instructions_disabled_fall_back_to_bogus_comment() {
    let mut config = TokenizerConfig::default();
    config.allow_processing_instructions = false;
    let mut t = Html5Tokenizer::from_str("<?pi?>", config);
    let tok = t.advance().unwrap();
    assert!(matches!(tok, Token::Comment { .. }));
}

#[test]
fn closing_tag_with_no_name_is_bogus_comment() {
    let tokens = tokenize("</>rest");
    assert!(has_error(&tokens));
    assert!(matches!(&tokens[0], Token::Comment { .. }));
}

#[test]
fn eof_mid_tag_name_still_terminates_cleanly() {
    let tokens = tokenize("<di");
    assert!(has_error(&tokens));
    assert!(tokens.iter().all(|t| !matches!(t, Token::StartTag { .. })));
}

#[test]
fn every_token_has_a_span_when_enabled() {
    let mut config = TokenizerConfig::default();
    config.generate_spans = true;
    let mut t = Html5Tokenizer::from_str("<p>hi</p>", config);
    let mut last_end = 0usize;
    while let Some(tok) = t.advance() {
        if let Token::ParseError(_) = tok {
            continue;
        }
        let span = match &tok {
            Token::StartTag { span, .. }
            | Token::EndTag { span, .. }
            | Token::Comment { span, .. }
            | Token::Characters { span, .. }
            | Token::SpaceCharacters { span, .. }
            | Token::Doctype { span, .. }
            | Token::ProcessingInstruction { span, .. } => *span,
            Token::ParseError(_) => None,
        };
        let span = span.expect("spans enabled");
        assert!(span.start >= last_end || last_end == 0);
        assert!(span.start <= span.end);
        last_end = span.end;
    }
}

#[test]
fn iterator_impl_matches_advance() {
    let t1 = Html5Tokenizer::from_str("<p>hi</p>", TokenizerConfig::default());
    let via_iter: Vec<Token> = t1.collect();
    let via_advance = tokenize("<p>hi</p>");
    assert_eq!(via_iter.len(), via_advance.len());
}

#[test]
fn stats_count_emitted_tokens() {
    let mut t = Html5Tokenizer::from_str("<p>hi</p>", TokenizerConfig::default());
    while t.advance().is_some() {}
    assert!(t.stats().tokens_emitted >= 3);
}

#[test]
fn error_policy_bounds_recent_errors_storage() {
    let mut config = TokenizerConfig::default();
    config.error_policy.max_stored = 2;
    let mut t = Html5Tokenizer::from_str("\0\0\0\0", config);
    while t.advance().is_some() {}
    assert_eq!(t.recent_errors().count(), 2);
    assert!(t.stats().errors_dropped >= 2);
}
