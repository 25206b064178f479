//! Newline-delimited JSON payload source
//!
//! Reads one push payload per line from any async reader. Stdin is the
//! production reader; tests feed an in-memory cursor.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

use crate::application::ports::{PayloadSource, SourceError};
use crate::domain::push::PushPayload;

/// Payload source reading NDJSON from an async reader
pub struct JsonLinesSource<R> {
    lines: Lines<BufReader<R>>,
}

impl JsonLinesSource<Stdin> {
    /// Create a source reading from stdin
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R> JsonLinesSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Create a source over any async reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

#[async_trait]
impl<R> PayloadSource for JsonLinesSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next(&mut self) -> Result<Option<PushPayload>, SourceError> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|e| SourceError::Read(e.to_string()))?;

            match line {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => {
                    let payload = PushPayload::from_json(&line)
                        .map_err(|e| SourceError::Malformed(e.message))?;
                    return Ok(Some(payload));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn reads_payloads_in_order() {
        let input = concat!(
            r#"{"notification":{"title":"First"}}"#,
            "\n",
            r#"{"notification":{"title":"Second"}}"#,
            "\n",
        );
        let mut source = JsonLinesSource::new(Cursor::new(input));

        assert_eq!(source.next().await.unwrap().unwrap().title(), Some("First"));
        assert_eq!(source.next().await.unwrap().unwrap().title(), Some("Second"));
        assert!(source.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn skips_blank_lines() {
        let input = "\n  \n{}\n\n";
        let mut source = JsonLinesSource::new(Cursor::new(input));

        assert_eq!(source.next().await.unwrap(), Some(PushPayload::empty()));
        assert!(source.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_input_yields_end_of_stream() {
        let mut source = JsonLinesSource::new(Cursor::new(""));
        assert!(source.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_line_is_classified() {
        let mut source = JsonLinesSource::new(Cursor::new("{not json}\n{}\n"));

        let err = source.next().await.unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));

        // The stream remains usable after a malformed line
        assert_eq!(source.next().await.unwrap(), Some(PushPayload::empty()));
    }
}
