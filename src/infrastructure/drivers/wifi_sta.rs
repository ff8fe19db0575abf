use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    Config,
    ModeConfig,
    WifiController,
    WifiEvent,
    WifiStaState,
};
use heapless::String;
use static_cell::make_static;

use super::network::{
    MAX_CONNECTIONS,
    network_runner_task,
    stack_seed,
    wait_for_ip,
    wait_for_link,
};
use crate::config::WifiCredentials;

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

const RECONNECT_DELAY: Duration = Duration::from_millis(2000);
const RETRY_DELAY: Duration = Duration::from_millis(5000);

/// Start the Wi-Fi STA (Station) mode
///
/// Joins the configured network and waits, without timeout, until DHCP has
/// assigned an address. If the connection is lost later, it reconnects in
/// the background.
pub async fn start_wifi_sta(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    credentials: &'static WifiCredentials,
    hostname: &str,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).unwrap();

    let mut dhcp_config = DhcpConfig::default();
    let mut dhcp_hostname = String::<MAX_HOSTNAME_LEN>::new();
    if dhcp_hostname.push_str(hostname).is_ok() {
        dhcp_config.hostname = Some(dhcp_hostname);
    }
    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.sta, net_config, network_resources, stack_seed());

    spawner
        .spawn(wifi_connection_task(controller, credentials))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    let ip_config = wait_for_connection(stack).await;
    println!("Connected to {}", credentials.ssid);
    println!("Got IP: {}", ip_config.address.address());

    stack
}

/// Background task for connecting to the `WiFi` network and reconnecting if needed
#[embassy_executor::task]
async fn wifi_connection_task(
    mut controller: WifiController<'static>,
    credentials: &'static WifiCredentials,
) {
    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            #[cfg(feature = "log")]
            println!("wifi_sta: disconnected");
            Timer::after(RECONNECT_DELAY).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if credentials.password.is_empty() {
                ClientConfig::default()
                    .with_ssid(credentials.ssid.into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(credentials.ssid.into())
                    .with_password(credentials.password.into())
            };
            controller
                .set_config(&ModeConfig::Client(client_config))
                .unwrap();
            controller.start_async().await.unwrap();
        }

        #[cfg(feature = "log")]
        println!("wifi_sta: connecting to '{}'", credentials.ssid);
        if let Err(_e) = controller.connect_async().await {
            #[cfg(feature = "log")]
            println!("wifi_sta: error connecting: {:?}", _e);
            Timer::after(RETRY_DELAY).await;
        }
    }
}

/// Wait for full network connectivity (link + IP address)
async fn wait_for_connection(stack: Stack<'_>) -> StaticConfigV4 {
    wait_for_link(stack).await;
    wait_for_ip(stack).await
}
