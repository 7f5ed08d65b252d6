use crate::error::CountError;
use crate::input::InputSource;
use crate::output::write_count;
use crate::tokenizer::Tokenizer;
use log::info;
use tokio::io::AsyncWrite;

/// Reads one input to end-of-stream, counts its tokens and writes the count.
pub struct TokenCounter<T> {
    tokenizer: T,
}

impl<T: Tokenizer> TokenCounter<T> {
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Nothing reaches `sink` unless reading and counting both succeed.
    pub async fn run<S, W>(&self, source: &mut S, sink: &mut W) -> Result<usize, CountError>
    where
        S: InputSource + ?Sized,
        W: AsyncWrite + Unpin + Send,
    {
        let count = {
            let text = source.read_all().await?;
            info!("Counting tokens for {} bytes of text", text.len());
            self.tokenizer.count(&text)?
        };
        info!("Token count: {}", count);
        write_count(sink, count).await?;
        Ok(count)
    }
}
