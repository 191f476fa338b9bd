//! Server-Sent Events (SSE) processing for streaming responses.
//!
//! This module handles parsing and processing of SSE streams from the
//! Responses API, converting raw byte streams into structured
//! ResponseStreamEvent objects.

use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};

use crate::error::{Error, Result};
use crate::observability::{STREAM_CHUNKS, STREAM_ERRORS, STREAM_EVENTS};
use crate::types::ResponseStreamEvent;

/// Process a stream of bytes into a stream of server-sent events.
///
/// This function takes a byte stream from an HTTP response and converts it
/// into a stream of parsed ResponseStreamEvent objects, handling SSE
/// framing, buffering, and error conditions.
pub fn process_sse<S>(byte_stream: S) -> impl Stream<Item = Result<ResponseStreamEvent>>
where
    S: Stream<Item = std::result::Result<Bytes, reqwest::Error>> + Unpin + 'static,
{
    // Convert reqwest errors to our error type
    let stream = byte_stream.map(|result| {
        result
            .map_err(|e| Error::streaming(format!("Error in HTTP stream: {e}"), Some(Box::new(e))))
    });

    // Use a state machine to process the SSE stream
    let buffer = String::new();

    stream::unfold(
        (stream, buffer),
        move |(mut stream, mut buffer)| async move {
            loop {
                // First check if we have a complete event in the buffer
                if let Some((event, remaining)) = extract_event(&buffer) {
                    buffer = remaining;
                    count_event(&event);
                    return Some((event, (stream, buffer)));
                }

                // Read more data
                match stream.next().await {
                    Some(Ok(bytes)) => {
                        STREAM_CHUNKS.click();
                        match String::from_utf8(bytes.to_vec()) {
                            Ok(text) => buffer.push_str(&text),
                            Err(e) => {
                                STREAM_ERRORS.click();
                                return Some((
                                    Err(Error::encoding(
                                        format!("Invalid UTF-8 in stream: {e}"),
                                        Some(Box::new(e)),
                                    )),
                                    (stream, buffer),
                                ));
                            }
                        }
                    }
                    Some(Err(e)) => {
                        STREAM_ERRORS.click();
                        return Some((Err(e), (stream, buffer)));
                    }
                    None => {
                        // End of stream
                        if !buffer.is_empty() {
                            if let Some((event, _)) = extract_trailing_event(&buffer) {
                                buffer.clear();
                                count_event(&event);
                                return Some((event, (stream, buffer)));
                            }
                        }
                        return None;
                    }
                }
            }
        },
    )
}

fn count_event(event: &Result<ResponseStreamEvent>) {
    match event {
        Ok(_) => STREAM_EVENTS.click(),
        Err(_) => STREAM_ERRORS.click(),
    }
}

/// Extract a complete SSE event from a buffer string.
///
/// Events are delimited by a blank line; each carries one or more `data:`
/// lines whose concatenation is the JSON payload.
fn extract_event(buffer: &str) -> Option<(Result<ResponseStreamEvent>, String)> {
    let (event_text, rest) = buffer.split_once("\n\n")?;
    Some((parse_event(event_text), rest.to_string()))
}

/// Parse whatever remains in the buffer once the connection has ended.
fn extract_trailing_event(buffer: &str) -> Option<(Result<ResponseStreamEvent>, String)> {
    let event_text = buffer.trim_end_matches('\n');
    if event_text.is_empty() {
        return None;
    }
    Some((parse_event(event_text), String::new()))
}

fn parse_event(event_text: &str) -> Result<ResponseStreamEvent> {
    let mut data = Vec::new();
    for line in event_text.lines() {
        if let Some(value) = line.strip_prefix("data:") {
            data.push(value.trim());
        }
    }

    if data.is_empty() {
        // Comment-only or event-name-only frame; nothing to render.
        return Ok(ResponseStreamEvent::Unknown);
    }

    let data = data.join("\n");
    if data == "[DONE]" {
        return Ok(ResponseStreamEvent::Unknown);
    }

    serde_json::from_str::<ResponseStreamEvent>(&data).map_err(|e| {
        Error::serialization(
            format!("Failed to parse event JSON: {e}"),
            Some(Box::new(e)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputTextDeltaEvent;
    use futures::stream::iter;

    fn byte_stream(
        chunks: Vec<&'static str>,
    ) -> impl Stream<Item = std::result::Result<Bytes, reqwest::Error>> + Unpin {
        iter(
            chunks
                .into_iter()
                .map(|c| Ok(Bytes::from_static(c.as_bytes())))
                .collect::<Vec<_>>(),
        )
    }

    async fn collect_events(
        chunks: Vec<&'static str>,
    ) -> Vec<Result<ResponseStreamEvent>> {
        let stream = process_sse(byte_stream(chunks));
        futures::pin_mut!(stream);
        let mut events = Vec::new();
        while let Some(event) = stream.next().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn single_delta_event() {
        let events = collect_events(vec![
            "event: response.output_text.delta\ndata: {\"type\":\"response.output_text.delta\",\"delta\":\"Hel\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].as_ref().unwrap(),
            &ResponseStreamEvent::OutputTextDelta(OutputTextDeltaEvent::new("Hel"))
        );
    }

    #[tokio::test]
    async fn event_split_across_chunks() {
        let events = collect_events(vec![
            "data: {\"type\":\"response.output_text.delta\",",
            "\"delta\":\"lo\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].as_ref().unwrap(),
            &ResponseStreamEvent::OutputTextDelta(OutputTextDeltaEvent::new("lo"))
        );
    }

    #[tokio::test]
    async fn multiple_events_in_one_chunk() {
        let events = collect_events(vec![
            "data: {\"type\":\"response.output_text.delta\",\"delta\":\"a\"}\n\ndata: {\"type\":\"response.output_text.delta\",\"delta\":\"b\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn unknown_event_type_is_tolerated() {
        let events = collect_events(vec![
            "data: {\"type\":\"response.created\",\"response\":{}}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].as_ref().unwrap(), &ResponseStreamEvent::Unknown);
    }

    #[tokio::test]
    async fn done_marker_is_tolerated() {
        let events = collect_events(vec!["data: [DONE]\n\n"]).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].as_ref().unwrap(), &ResponseStreamEvent::Unknown);
    }

    #[tokio::test]
    async fn malformed_json_surfaces_error() {
        let events = collect_events(vec!["data: {not json}\n\n"]).await;
        assert_eq!(events.len(), 1);
        assert!(events[0].is_err());
    }

    #[tokio::test]
    async fn trailing_event_without_final_blank_line() {
        let events = collect_events(vec![
            "data: {\"type\":\"response.output_text.delta\",\"delta\":\"!\"}\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].as_ref().unwrap(),
            &ResponseStreamEvent::OutputTextDelta(OutputTextDeltaEvent::new("!"))
        );
    }

    #[tokio::test]
    async fn error_event_parses() {
        let events = collect_events(vec![
            "data: {\"type\":\"response.error\",\"error\":{\"message\":\"boom\"}}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        match events[0].as_ref().unwrap() {
            ResponseStreamEvent::Error(inner) => assert_eq!(inner.error["message"], "boom"),
            other => panic!("Expected Error variant, got {other:?}"),
        }
    }
}
