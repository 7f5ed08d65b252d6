use super::{decode_lossy, InputSource};
use crate::error::CountError;
use async_trait::async_trait;
use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt, Stdin};

const CHUNK_SIZE: usize = 8 * 1024;

pub struct ReaderSource<R> {
    reader: R,
}

impl ReaderSource<Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin + Send> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    async fn accumulate(&mut self) -> Result<Vec<u8>, CountError> {
        let mut buffer = Vec::new();
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut reads = 0usize;
        loop {
            let n = match self.reader.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CountError::Read(e)),
            };
            reads += 1;
            buffer.extend_from_slice(&chunk[..n]);
            debug!("Read chunk {} of {} bytes, {} bytes buffered", reads, n, buffer.len());
        }
        info!("End of input after {} reads, {} bytes total", reads, buffer.len());
        Ok(buffer)
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> InputSource for ReaderSource<R> {
    async fn read_all(&mut self) -> Result<String, CountError> {
        let bytes = self.accumulate().await?;
        Ok(decode_lossy(bytes))
    }
}
