use embassy_time::Delay;
use esp_hal::gpio::Output;
use led_panel_core::LedPanel;

/// The panel as wired on the board: two GPIO outputs and the embassy timer
/// as blink delay.
pub type Panel = LedPanel<Output<'static>, Delay>;
