//! LED Panel Firmware
//!
//! Serves a control page for two LEDs:
//! - Joins the configured Wi-Fi network, or creates it with the `ap` feature
//! - Serves the panel over HTTP on port 80
//! - Re-applies the LED state to the pins on every main loop iteration

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;
use esp_led_panel::{
    config,
    controllers::init_panel_controller,
    infrastructure::{drivers::init_led_panel, tasks::http_server_task},
    led_gpios,
};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    println!("=================================");
    println!("  ESP32 LED Panel");
    println!("=================================");

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Heap for the radio driver (64 KB)
    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start RTOS
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // All state starts off on boot
    let (led1, led2) = led_gpios!(peripherals);
    let controller = init_panel_controller(init_led_panel(led1, led2));

    #[cfg(feature = "ap")]
    let stack = esp_led_panel::infrastructure::drivers::start_wifi_ap(
        spawner,
        peripherals.WIFI,
        &config::WIFI,
        &config::ACCESS_POINT,
    )
    .await;
    #[cfg(not(feature = "ap"))]
    let stack = esp_led_panel::infrastructure::drivers::start_wifi_sta(
        spawner,
        peripherals.WIFI,
        &config::WIFI,
        config::HOSTNAME,
    )
    .await;

    spawner.spawn(http_server_task(stack, controller)).ok();
    println!("HTTP server started");

    loop {
        if let Err(e) = controller.sync_pins().await {
            println!("panel: pin write failed: {:?}", e);
        }
        Timer::after(Duration::from_millis(config::PIN_SYNC_INTERVAL_MS)).await;
    }
}
