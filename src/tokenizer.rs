use crate::error::CountError;
use log::{debug, info};
use once_cell::sync::Lazy;
use std::time::Instant;
use tiktoken_rs::{o200k_base, CoreBPE};
use unicode_normalization::UnicodeNormalization;

// Loaded on first use; a failed load is remembered and reported on every call.
static O200K_BASE: Lazy<Result<CoreBPE, String>> = Lazy::new(|| {
    info!("Loading o200k_base encoding");
    o200k_base().map_err(|e| e.to_string())
});

/// Maps text to the number of tokens it occupies.
pub trait Tokenizer: Send + Sync {
    fn count(&self, text: &str) -> Result<usize, CountError>;
}

/// The fixed `o200k_base` byte-pair encoding. Text is NFKC-normalized first, and
/// special-token text is counted as the special token it names.
#[derive(Debug, Default, Clone, Copy)]
pub struct BpeTokenizer;

impl BpeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for BpeTokenizer {
    fn count(&self, text: &str) -> Result<usize, CountError> {
        let bpe = match &*O200K_BASE {
            Ok(bpe) => bpe,
            Err(e) => return Err(CountError::Tokenizer(e.clone())),
        };
        let started = Instant::now();
        let normalized: String = text.nfkc().collect();
        let tokens = bpe.encode_with_special_tokens(&normalized).len();
        debug!(
            "Encoded {} bytes ({} after NFKC) into {} tokens in {:?}",
            text.len(),
            normalized.len(),
            tokens,
            started.elapsed()
        );
        Ok(tokens)
    }
}
