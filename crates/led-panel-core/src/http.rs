//! HTTP/1.1 framing pieces that do not touch a socket.

use core::fmt::{self, Write};

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        _ => "Unknown",
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "HEAD" => HttpMethod::Head,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            _ => return None,
        })
    }
}

/// Parse a request line (`GET /path?query HTTP/1.1`).
///
/// Returns the method and the raw request target. Anything after the first
/// line is ignored.
pub fn parse_request_line(head: &str) -> Option<(HttpMethod, &str)> {
    let line = head.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;
    Some((method, target))
}

/// Position just past the `\r\n\r\n` terminating the request head.
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

/// Length of the request line, without its `\r\n`.
pub fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextHtml,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
        }
    }
}

/// HTTP Content Headers.
#[derive(Debug, Clone, Copy)]
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
    utf8: bool,
}

impl ContentHeaders {
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
            utf8: false,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Declare a UTF-8 charset.
    #[must_use]
    pub const fn with_utf8(mut self) -> Self {
        self.utf8 = true;
        self
    }

    fn write_to(&self, writer: &mut impl Write) -> fmt::Result {
        write!(writer, "Content-Type: {}", self.content_type.as_str())?;
        if self.utf8 {
            writer.write_str("; charset=utf-8")?;
        }
        writer.write_str("\r\n")?;
        if let Some(length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", length)?;
        }
        Ok(())
    }
}

/// Response status line and headers. Connections are always closed after
/// the response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders {
    status: StatusCode,
    content: Option<ContentHeaders>,
}

impl ResponseHeaders {
    pub const fn from_code(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
        }
    }

    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }

    /// Write the full response head, including the blank line.
    pub fn write_to(&self, writer: &mut impl Write) -> fmt::Result {
        write!(
            writer,
            "HTTP/1.1 {} {}\r\n",
            self.status,
            reason_phrase(self.status)
        )?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }
        writer.write_str("Connection: close\r\n\r\n")
    }
}
