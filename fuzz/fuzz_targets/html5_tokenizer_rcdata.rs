#![no_main]

use html5_tokenizer::{ContentModel, Html5Tokenizer, TokenizerConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut tokenizer = Html5Tokenizer::from_str(data, TokenizerConfig::default());
    tokenizer.set_content_model(ContentModel::Rcdata);
    while tokenizer.advance().is_some() {}
});
