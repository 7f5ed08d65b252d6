pub mod stdin;
use crate::error::CountError;
use async_trait::async_trait;
use log::warn;

pub use stdin::ReaderSource;

/// Something that yields the whole text to be counted once it reaches end-of-stream.
#[async_trait]
pub trait InputSource: Send {
    async fn read_all(&mut self) -> Result<String, CountError>;
}

/// Decodes UTF-8, substituting U+FFFD for every invalid sequence.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let bytes = e.into_bytes();
            warn!(
                "Input is not valid UTF-8 after byte {} of {}, substituting replacement characters",
                valid_up_to,
                bytes.len()
            );
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }
}
