use core::convert::Infallible;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
#[cfg(feature = "log")]
use esp_println::println;
use led_panel_core::{PanelError, PanelState, Response, Route, http::ResponseHeaders};

use crate::{
    infrastructure::types::Panel,
    net::http::{Error as HttpError, HttpConnection, HttpHandler, HttpResult},
};

/// Routes requests to the LED panel and renders its page.
///
/// The panel lock is held for the whole handler, blink loop included, so the
/// main loop's pin sync waits for a running blink to finish.
pub struct PanelHttpController {
    panel: Mutex<CriticalSectionRawMutex, Panel>,
}

impl PanelHttpController {
    pub const fn new(panel: Panel) -> Self {
        Self {
            panel: Mutex::new(panel),
        }
    }

    /// Write the current LED state to both pins.
    pub async fn sync_pins(&self) -> Result<(), PanelError<Infallible>> {
        self.panel.lock().await.apply_pins()
    }
}

impl HttpHandler for PanelHttpController {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let route = Route::resolve(conn.target());
        #[cfg(feature = "log")]
        println!("panel_http: {:?} {} -> {:?}", conn.method, conn.target(), route);

        // No timeout while the client waits for a blink to finish
        if route.holds_connection() {
            conn.set_timeout(None);
        }

        let response = self
            .panel
            .lock()
            .await
            .handle(route)
            .await
            .map_err(|_| HttpError::Device)?;

        let headers = ResponseHeaders::from_code(response.status());
        match response {
            Response::Page(state) => serve_page(conn, headers, &state).await,
            Response::NotFound => serve_404(conn, headers).await,
        }
    }
}

async fn serve_page(
    conn: &mut HttpConnection<'_>,
    headers: ResponseHeaders,
    state: &PanelState,
) -> HttpResult {
    let page = led_panel_core::render(state)?;
    conn.write_html(headers, page.as_str()).await
}

async fn serve_404(conn: &mut HttpConnection<'_>, headers: ResponseHeaders) -> HttpResult {
    let mut body = heapless::String::<64>::new();
    led_panel_core::render_not_found(&mut body)?;
    conn.write_html(headers, body.as_str()).await
}
