use embassy_net::tcp::TcpSocket;
use embassy_time::Duration;
use embedded_io_async::Write as _;
#[cfg(feature = "log")]
use esp_println::println;
use heapless::String;
use led_panel_core::http::{
    ContentHeaders,
    ContentType,
    HttpMethod,
    ResponseHeaders,
    find_head_end,
    find_line_end,
    parse_request_line,
};

use super::{Error, HttpResult};

const HEAD_BUFFER_SIZE: usize = 512;
const RESPONSE_HEAD_SIZE: usize = 160;
const STREAM_CHUNK_SIZE: usize = 1024;
const MAX_TARGET_LEN: usize = 128;

/// HTTP connection context
pub(crate) struct HttpConnection<'a> {
    pub method: HttpMethod,
    pub target: String<MAX_TARGET_LEN>,

    socket: TcpSocket<'a>,
}

impl<'a> HttpConnection<'a> {
    /// Read the request head from a freshly accepted socket.
    ///
    /// Only the request line is interpreted. Request bodies are not read.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut head = [0u8; HEAD_BUFFER_SIZE];
        let head_len = read_head(&mut head, &mut socket).await?;

        let line_end = find_line_end(&head[..head_len]).ok_or(Error::Parse)?;
        let line = core::str::from_utf8(&head[..line_end]).map_err(|_| Error::Parse)?;
        let (method, raw_target) = parse_request_line(line).ok_or(Error::Parse)?;

        let mut target = String::new();
        target.push_str(raw_target).map_err(|()| {
            #[cfg(feature = "log")]
            println!("http: request target too long ({} bytes)", raw_target.len());
            Error::Parse
        })?;

        Ok(Self {
            method,
            target,
            socket,
        })
    }

    /// Raw request target, path and query.
    pub(crate) fn target(&self) -> &str {
        self.target.as_str()
    }

    /// Set or clear the idle timeout of the socket.
    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.socket.set_timeout(timeout);
    }

    /// Write the headers to the connection
    pub(crate) async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        let mut head = String::<RESPONSE_HEAD_SIZE>::new();
        headers.write_to(&mut head)?;
        self.write_all(head.as_bytes()).await
    }

    /// Write the body to the connection
    pub(crate) async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.write_all(chunk).await?;
        }
        Ok(())
    }

    /// Write an HTML response
    ///
    /// Writes both headers and body.
    pub(crate) async fn write_html(
        &mut self,
        headers: ResponseHeaders,
        body: &str,
    ) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_utf8()
            .with_length(body.len());
        self.write_headers(&headers.with_content(content)).await?;
        if self.method != HttpMethod::Head {
            self.write_body(body.as_bytes()).await?;
        }
        Ok(())
    }

    /// Close the write half and wait until the peer has everything.
    pub(crate) async fn close(mut self) -> HttpResult {
        self.socket.close();
        self.socket.flush().await?;
        Ok(())
    }

    async fn write_all(&mut self, buf: &[u8]) -> HttpResult {
        self.socket.write_all(buf).await?;
        self.socket.flush().await?;
        Ok(())
    }
}

/// Read from the socket until the end of the request head or a full buffer.
///
/// Returns the number of bytes read.
async fn read_head(buf: &mut [u8], socket: &mut TcpSocket<'_>) -> Result<usize, Error> {
    let mut len = 0;
    loop {
        let n = socket.read(&mut buf[len..]).await?;
        if n == 0 {
            return Err(Error::Closed);
        }
        len += n;
        if find_head_end(&buf[..len]).is_some() || len >= buf.len() {
            return Ok(len);
        }
    }
}
