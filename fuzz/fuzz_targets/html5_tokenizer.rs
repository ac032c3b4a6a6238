#![no_main]

use html5_tokenizer::{Html5Tokenizer, TokenizerConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = TokenizerConfig {
        generate_spans: true,
        ..TokenizerConfig::default()
    };
    let mut tokenizer = Html5Tokenizer::new(
        html5_tokenizer::InputStream::from_bytes(data, &html5_tokenizer::InputStreamConfig::default()),
        config,
    );
    while tokenizer.advance().is_some() {}
});
