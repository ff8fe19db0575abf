use embassy_net::{Runner, Stack, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::rng::Rng;
use esp_radio::wifi::WifiDevice;

/// Sockets available to the stack: HTTP, DHCP server and DHCP client.
pub(super) const MAX_CONNECTIONS: usize = 4;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Random seed for the network stack.
pub(super) fn stack_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Background task for running the network stack
#[embassy_executor::task]
pub(super) async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Wait for the network link to become active
pub(super) async fn wait_for_link(stack: Stack<'_>) {
    while !stack.is_link_up() {
        Timer::after(POLL_INTERVAL).await;
    }
}

/// Wait for the stack to have an IPv4 configuration (DHCP lease or static)
pub(super) async fn wait_for_ip(stack: Stack<'_>) -> StaticConfigV4 {
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(POLL_INTERVAL).await;
    }
}
