//! LED panel core - hardware independent part of the panel firmware
//!
//! Layers:
//! - `state` - Pin state store and blink parameters
//! - `query` - Request target splitting and lenient integer parsing
//! - `route` - Fixed path table
//! - `page` - HTML control page renderer
//! - `panel` - Request handlers driving two [`embedded_hal`] output pins
//! - `http` - Minimal HTTP/1.1 request line parsing and response heads
//! - `dhcp` - Stateless DHCP server codec used in access point mode
//!
//! The panel is generic over `OutputPin` and the async `DelayNs`, so the
//! same handlers run against `esp-hal` pins on the device and mocks on the
//! host.

#![no_std]

pub mod dhcp;
pub mod http;
pub mod page;
pub mod panel;
pub mod query;
pub mod route;
pub mod state;

pub use page::{PAGE_CAPACITY, Page, render, render_not_found, render_page};
pub use panel::{LedPanel, PanelError, Response};
pub use route::Route;
pub use state::{BlinkParameters, Led, PanelState};
