use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
