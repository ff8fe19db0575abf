mod leds;
mod network;
pub mod wifi_ap;
pub mod wifi_sta;

pub use leds::init_led_panel;
pub use wifi_ap::start_wifi_ap;
pub use wifi_sta::start_wifi_sta;
