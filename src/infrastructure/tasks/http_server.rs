//! Panel HTTP Server Task
//!
//! Serves the `PanelHttpController` on the configured port.

use embassy_net::Stack;

use crate::{config, controllers::PanelHttpController, net::http::HttpServer};

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, handler: &'static PanelHttpController) {
    let server = HttpServer::new(handler);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    server
        .listen_and_serve(stack, config::HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await
}
