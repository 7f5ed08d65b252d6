use crate::error::CountError;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes `count` as bare decimal digits, with no newline, and flushes.
pub async fn write_count<W>(writer: &mut W, count: usize) -> Result<(), CountError>
where
    W: AsyncWrite + Unpin + Send,
{
    writer
        .write_all(count.to_string().as_bytes())
        .await
        .map_err(CountError::Write)?;
    writer.flush().await.map_err(CountError::Write)?;
    Ok(())
}
