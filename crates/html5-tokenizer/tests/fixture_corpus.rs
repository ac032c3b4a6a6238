//! Integration test driving the tokenizer over a small curated corpus of
//! representative HTML5 fragments. Each fixture asserts the shape of the
//! token stream (kind and, where relevant, name/text) rather than full
//! `Token` equality, so the corpus stays readable as plain JSON.

use html5_tokenizer::{ContentModel, Html5Tokenizer, Token, TokenizerConfig};
use serde::Deserialize;

#[derive(Deserialize)]
struct Fixture {
    name: String,
    input: String,
    #[serde(default)]
    content_model: Option<String>,
    expect: Vec<ExpectedToken>,
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum ExpectedToken {
    StartTag { name: String },
    EndTag { name: String },
    Comment,
    Characters { text: String },
    Doctype { name: Option<String> },
    ParseError,
}

const CORPUS: &str = r#"
[
  {
    "name": "plain_paragraph",
    "input": "<p>hello</p>",
    "expect": [
      {"kind": "StartTag", "name": "p"},
      {"kind": "Characters", "text": "hello"},
      {"kind": "EndTag", "name": "p"}
    ]
  },
  {
    "name": "void_element_self_closes_without_synthetic_end",
    "input": "<br/>",
    "expect": [
      {"kind": "StartTag", "name": "br"}
    ]
  },
  {
    "name": "non_void_self_closing_synthesizes_end_tag",
    "input": "<div/>",
    "expect": [
      {"kind": "StartTag", "name": "div"},
      {"kind": "EndTag", "name": "div"}
    ]
  },
  {
    "name": "attribute_with_named_reference",
    "input": "<a href=\"x&amp;y\">z</a>",
    "expect": [
      {"kind": "StartTag", "name": "a"},
      {"kind": "Characters", "text": "z"},
      {"kind": "EndTag", "name": "a"}
    ]
  },
  {
    "name": "comment_round_trip",
    "input": "<!-- hi -->",
    "expect": [
      {"kind": "Comment"}
    ]
  },
  {
    "name": "bogus_comment_from_bang",
    "input": "<!weird>",
    "expect": [
      {"kind": "ParseError"},
      {"kind": "Comment"}
    ]
  },
  {
    "name": "bare_doctype",
    "input": "<!DOCTYPE html>",
    "expect": [
      {"kind": "Doctype", "name": "html"}
    ]
  },
  {
    "name": "null_byte_is_replaced",
    "input": "a\u0000b",
    "expect": [
      {"kind": "ParseError"},
      {"kind": "Characters", "text": "a�b"}
    ]
  },
  {
    "name": "script_data_opaque_until_matching_end_tag",
    "input": "<script>1 < 2</script>",
    "content_model": "ScriptData",
    "expect": [
      {"kind": "Characters", "text": "1 < 2"},
      {"kind": "EndTag", "name": "script"}
    ]
  },
  {
    "name": "closing_tag_with_no_name_reports_error_and_nothing_else",
    "input": "</>",
    "expect": [
      {"kind": "ParseError"}
    ]
  }
]
"#;

fn content_model_from_name(name: &str) -> ContentModel {
    match name {
        "Data" => ContentModel::Data,
        "Rcdata" => ContentModel::Rcdata,
        "Rawtext" => ContentModel::Rawtext,
        "ScriptData" => ContentModel::ScriptData,
        "Plaintext" => ContentModel::Plaintext,
        other => panic!("unknown content model in fixture: {other}"),
    }
}

fn run_fixture(fixture: &Fixture) {
    let mut tokenizer = Html5Tokenizer::from_str(&fixture.input, TokenizerConfig::default());
    if let Some(model) = &fixture.content_model {
        tokenizer.set_content_model(content_model_from_name(model));
    }

    let mut actual = Vec::new();
    while let Some(token) = tokenizer.advance() {
        actual.push(token);
    }

    assert_eq!(
        actual.len(),
        fixture.expect.len(),
        "fixture {:?}: token count mismatch, got {:?}",
        fixture.name,
        actual
    );

    for (got, want) in actual.iter().zip(fixture.expect.iter()) {
        match (got, want) {
            (Token::StartTag { name, .. }, ExpectedToken::StartTag { name: want_name }) => {
                assert_eq!(name, want_name, "fixture {:?}", fixture.name);
            }
            (Token::EndTag { name, .. }, ExpectedToken::EndTag { name: want_name }) => {
                assert_eq!(name, want_name, "fixture {:?}", fixture.name);
            }
            (Token::Comment { .. }, ExpectedToken::Comment) => {}
            (Token::Characters { text, .. }, ExpectedToken::Characters { text: want_text })
            | (Token::SpaceCharacters { text, .. }, ExpectedToken::Characters { text: want_text }) => {
                assert_eq!(text, want_text, "fixture {:?}", fixture.name);
            }
            (Token::Doctype { name, .. }, ExpectedToken::Doctype { name: want_name }) => {
                assert_eq!(name, want_name, "fixture {:?}", fixture.name);
            }
            (Token::ParseError(_), ExpectedToken::ParseError) => {}
            (got, _) => panic!("fixture {:?}: unexpected token {:?}", fixture.name, got),
        }
    }
}

#[test]
fn fixture_corpus() {
    let fixtures: Vec<Fixture> = serde_json::from_str(CORPUS).expect("corpus is valid JSON");
    for fixture in &fixtures {
        run_fixture(fixture);
    }
}
