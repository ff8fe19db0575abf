use embassy_time::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};
use led_panel_core::LedPanel;

use crate::infrastructure::types::Panel;

/// Configure both LED pins as outputs, driven low, and build the panel.
pub fn init_led_panel(
    led1: impl OutputPin + 'static,
    led2: impl OutputPin + 'static,
) -> Panel {
    let led1 = Output::new(led1, Level::Low, OutputConfig::default());
    let led2 = Output::new(led2, Level::Low, OutputConfig::default());
    LedPanel::new(led1, led2, Delay)
}
