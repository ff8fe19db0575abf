use embassy_executor::Spawner;
use embassy_net::{
    Ipv4Address,
    Ipv4Cidr,
    Stack,
    StackResources,
    StaticConfigV4,
    udp::{PacketMetadata, UdpSocket},
};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{AccessPointConfig, AuthMethod, Config, ModeConfig, WifiController};
use led_panel_core::dhcp::{self, DhcpRequest, LeasePool, MAX_PACKET_SIZE};
use static_cell::make_static;

use super::network::{MAX_CONNECTIONS, network_runner_task, stack_seed, wait_for_link};
use crate::config::{self, WifiCredentials};

/// Start the Wi-Fi AP (Access Point) mode
///
/// Creates the configured network with a static address and serves DHCP
/// leases to clients from the same subnet.
pub async fn start_wifi_ap(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    credentials: &'static WifiCredentials,
    ap: &config::AccessPointConfig,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).unwrap();

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(ap.address, ap.prefix_len),
        gateway: Some(ap.gateway),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.ap, net_config, network_resources, stack_seed());

    spawner
        .spawn(wifi_ap_task(controller, credentials))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    wait_for_link(stack).await;
    println!("Access Point Created");
    // Give some extra time
    Timer::after(Duration::from_millis(100)).await;

    spawner
        .spawn(dhcp_server_task(stack, LeasePool::new(ap.address, ap.prefix_len)))
        .ok();

    stack
}

/// Background task for running the Wi-Fi AP
///
/// The network is open when the configured password is empty, WPA2
/// otherwise.
#[embassy_executor::task]
async fn wifi_ap_task(
    mut controller: WifiController<'static>,
    credentials: &'static WifiCredentials,
) {
    #[cfg(feature = "log")]
    println!("wifi_ap: starting AP with SSID '{}'", credentials.ssid);

    let ap_config = if credentials.password.is_empty() {
        AccessPointConfig::default()
            .with_ssid(credentials.ssid.into())
            .with_auth_method(AuthMethod::None)
    } else {
        AccessPointConfig::default()
            .with_ssid(credentials.ssid.into())
            .with_password(credentials.password.into())
            .with_auth_method(AuthMethod::Wpa2Personal)
    };

    controller
        .set_config(&ModeConfig::AccessPoint(ap_config))
        .unwrap();
    controller.start_async().await.unwrap();

    #[cfg(feature = "log")]
    println!("wifi_ap: AP started");

    // Keep the AP running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// DHCP server task
///
/// Answers DISCOVER with OFFER and REQUEST with ACK, broadcasting replies
/// to the client port.
#[embassy_executor::task]
async fn dhcp_server_task(stack: Stack<'static>, pool: LeasePool) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(_e) = socket.bind(dhcp::SERVER_PORT) {
        #[cfg(feature = "log")]
        println!(
            "dhcp_server: failed to bind port {}: {:?}",
            dhcp::SERVER_PORT,
            _e
        );
        return;
    }
    #[cfg(feature = "log")]
    println!("dhcp_server: serving leases from {}", pool.server());

    let mut packet = [0u8; MAX_PACKET_SIZE];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(_e) => {
                #[cfg(feature = "log")]
                println!("dhcp_server: recv error: {:?}", _e);
                continue;
            }
        };

        let Some(request) = DhcpRequest::parse(&packet[..len]) else {
            continue;
        };
        let Some(reply_type) = request.reply_type() else {
            #[cfg(feature = "log")]
            println!(
                "dhcp_server: ignoring {:?} message",
                request.message_type
            );
            continue;
        };

        let reply_len = pool.write_reply(&mut packet, &request, reply_type);
        #[cfg(feature = "log")]
        println!(
            "dhcp_server: {:?} {} to {:02X?}",
            reply_type,
            pool.allocate(&request.client_mac),
            request.client_mac
        );

        let dest = (Ipv4Address::BROADCAST, dhcp::CLIENT_PORT);
        if let Err(_e) = socket.send_to(&packet[..reply_len], dest).await {
            #[cfg(feature = "log")]
            println!("dhcp_server: send error: {:?}", _e);
        }
    }
}
