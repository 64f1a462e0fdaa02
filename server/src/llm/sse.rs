//! Incremental server-sent-events splitter.
//!
//! DESIGN
//! ======
//! Both providers stream answers as `text/event-stream`. HTTP body chunks
//! arrive at arbitrary byte boundaries, including inside a multi-byte UTF-8
//! character, so the splitter buffers raw bytes and only decodes once a
//! full `\n\n` (or `\r\n\r\n`) terminated event block is available.
//! Pure and synchronous; the HTTP wrappers feed it from `bytes_stream`.

/// One decoded SSE event block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Value of the `event:` field, when present.
    pub event: Option<String>,
    /// All `data:` lines joined with `\n`.
    pub data: String,
}

#[derive(Debug, Default)]
pub struct SseParser {
    buf: Vec<u8>,
}

impl SseParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw body bytes; returns every event completed by this chunk.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buf.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some((end, sep_len)) = find_block_end(&self.buf) {
            let block: Vec<u8> = self.buf.drain(..end + sep_len).collect();
            let text = String::from_utf8_lossy(&block[..end]);
            if let Some(event) = parse_block(&text) {
                events.push(event);
            }
        }
        events
    }
}

/// Locate the earliest blank-line separator. Returns (block end, separator length).
fn find_block_end(buf: &[u8]) -> Option<(usize, usize)> {
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|i| (i, 2));
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 < b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

/// Parse one event block into field values. Returns `None` for blocks with
/// no data (comments, keep-alives).
fn parse_block(block: &str) -> Option<SseEvent> {
    let mut event = None;
    let mut data_lines = Vec::new();

    for line in block.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with(':') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("event:") {
            event = Some(rest.trim_start().to_string());
        } else if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
        }
    }

    if data_lines.is_empty() {
        return None;
    }
    Some(SseEvent { event, data: data_lines.join("\n") })
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
