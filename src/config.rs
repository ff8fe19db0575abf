//! Build-time configuration.
//!
//! `WIFI_SSID` and `WIFI_PASSWORD` are read from the environment or from a
//! `.env` file next to `Cargo.toml` (see `build.rs`). The same credentials are
//! used to join a network (default) or to create one (`ap` feature).

use embassy_net::Ipv4Address;

pub struct WifiCredentials {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub struct AccessPointConfig {
    pub address: Ipv4Address,
    pub gateway: Ipv4Address,
    pub prefix_len: u8,
}

pub static WIFI: WifiCredentials = WifiCredentials {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub const HOSTNAME: &str = "esp32-led-panel";

pub const ACCESS_POINT: AccessPointConfig = AccessPointConfig {
    address: Ipv4Address::new(192, 168, 1, 1),
    gateway: Ipv4Address::new(192, 168, 1, 1),
    prefix_len: 24,
};

pub const HTTP_PORT: u16 = 80;

/// Period of the main loop re-applying the LED state to the pins.
pub const PIN_SYNC_INTERVAL_MS: u64 = 10;

/// LED1 and LED2 output pins.
#[macro_export]
macro_rules! led_gpios {
    ($p:expr) => {
        ($p.GPIO2, $p.GPIO4)
    };
}
