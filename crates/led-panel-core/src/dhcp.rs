//! Stateless DHCP server codec
//!
//! Enough of RFC 2131 to hand out addresses on the panel's own access point:
//! DISCOVER is answered with OFFER, REQUEST with ACK. Addresses are derived
//! from the client MAC, so no lease table is kept.

use core::net::Ipv4Addr;

pub const SERVER_PORT: u16 = 67;
pub const CLIENT_PORT: u16 = 68;

/// Largest packet a reply is built into.
pub const MAX_PACKET_SIZE: usize = 576;

/// BOOTP header plus magic cookie
const OPTIONS_OFFSET: usize = 240;
const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

const BOOTREQUEST: u8 = 1;
const BOOTREPLY: u8 = 2;

const OPTION_PAD: u8 = 0;
const OPTION_SUBNET_MASK: u8 = 1;
const OPTION_ROUTER: u8 = 3;
const OPTION_DNS: u8 = 6;
const OPTION_LEASE_TIME: u8 = 51;
const OPTION_MESSAGE_TYPE: u8 = 53;
const OPTION_SERVER_ID: u8 = 54;
const OPTION_END: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Decline,
    Ack,
    Nak,
    Release,
    Inform,
}

impl MessageType {
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            1 => MessageType::Discover,
            2 => MessageType::Offer,
            3 => MessageType::Request,
            4 => MessageType::Decline,
            5 => MessageType::Ack,
            6 => MessageType::Nak,
            7 => MessageType::Release,
            8 => MessageType::Inform,
            _ => return None,
        })
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            MessageType::Discover => 1,
            MessageType::Offer => 2,
            MessageType::Request => 3,
            MessageType::Decline => 4,
            MessageType::Ack => 5,
            MessageType::Nak => 6,
            MessageType::Release => 7,
            MessageType::Inform => 8,
        }
    }
}

/// Client message the server cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRequest {
    pub xid: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: MessageType,
}

impl DhcpRequest {
    /// Parse a BOOTREQUEST. Returns `None` for anything malformed.
    pub fn parse(packet: &[u8]) -> Option<Self> {
        if packet.len() < OPTIONS_OFFSET || packet[0] != BOOTREQUEST {
            return None;
        }
        if packet[236..OPTIONS_OFFSET] != MAGIC_COOKIE {
            return None;
        }

        let mut xid = [0u8; 4];
        xid.copy_from_slice(&packet[4..8]);
        let mut client_mac = [0u8; 6];
        client_mac.copy_from_slice(&packet[28..34]);

        let message_type = find_option(&packet[OPTIONS_OFFSET..], OPTION_MESSAGE_TYPE)
            .and_then(|data| data.first().copied())
            .and_then(MessageType::from_u8)?;

        Some(Self {
            xid,
            client_mac,
            message_type,
        })
    }

    /// Reply to send, if any.
    pub const fn reply_type(&self) -> Option<MessageType> {
        match self.message_type {
            MessageType::Discover => Some(MessageType::Offer),
            MessageType::Request => Some(MessageType::Ack),
            _ => None,
        }
    }
}

/// Address pool inside the server's subnet.
#[derive(Debug, Clone, Copy)]
pub struct LeasePool {
    server: Ipv4Addr,
    prefix_len: u8,
    first_host: u8,
    size: u8,
    lease_secs: u32,
}

impl LeasePool {
    /// Pool of hosts `.2` to `.50` with one hour leases.
    pub const fn new(server: Ipv4Addr, prefix_len: u8) -> Self {
        Self {
            server,
            prefix_len,
            first_host: 2,
            size: 49,
            lease_secs: 3600,
        }
    }

    pub const fn server(&self) -> Ipv4Addr {
        self.server
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        let mask = match self.prefix_len {
            0 => 0,
            len @ 1..=31 => u32::MAX << (32 - u32::from(len)),
            _ => u32::MAX,
        };
        Ipv4Addr::from(mask)
    }

    /// Address for a client, stable for a given MAC.
    pub fn allocate(&self, mac: &[u8; 6]) -> Ipv4Addr {
        let network = u32::from(self.server) & u32::from(self.subnet_mask());
        let host = self.first_host + mac[5] % self.size;
        Ipv4Addr::from(network | u32::from(host))
    }

    /// Build the OFFER or ACK for `request` into `buffer`.
    ///
    /// Returns the reply length. `buffer` must hold [`MAX_PACKET_SIZE`]
    /// bytes.
    pub fn write_reply(
        &self,
        buffer: &mut [u8],
        request: &DhcpRequest,
        reply_type: MessageType,
    ) -> usize {
        buffer.fill(0);

        buffer[0] = BOOTREPLY;
        buffer[1] = 1; // htype: Ethernet
        buffer[2] = 6; // hlen
        buffer[4..8].copy_from_slice(&request.xid);
        buffer[10] = 0x80; // broadcast flag
        buffer[16..20].copy_from_slice(&self.allocate(&request.client_mac).octets());
        buffer[20..24].copy_from_slice(&self.server.octets());
        buffer[28..34].copy_from_slice(&request.client_mac);
        buffer[236..OPTIONS_OFFSET].copy_from_slice(&MAGIC_COOKIE);

        let server = self.server.octets();
        let mut options = OptionWriter {
            buffer,
            pos: OPTIONS_OFFSET,
        };
        options.put(OPTION_MESSAGE_TYPE, &[reply_type.as_u8()]);
        options.put(OPTION_SERVER_ID, &server);
        options.put(OPTION_LEASE_TIME, &self.lease_secs.to_be_bytes());
        options.put(OPTION_SUBNET_MASK, &self.subnet_mask().octets());
        options.put(OPTION_ROUTER, &server);
        options.put(OPTION_DNS, &server);
        options.end()
    }
}

struct OptionWriter<'a> {
    buffer: &'a mut [u8],
    pos: usize,
}

impl OptionWriter<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn put(&mut self, code: u8, data: &[u8]) {
        self.buffer[self.pos] = code;
        self.buffer[self.pos + 1] = data.len() as u8;
        self.buffer[self.pos + 2..self.pos + 2 + data.len()].copy_from_slice(data);
        self.pos += 2 + data.len();
    }

    fn end(self) -> usize {
        self.buffer[self.pos] = OPTION_END;
        self.pos + 1
    }
}

/// Find an option in the section following the magic cookie.
fn find_option(options: &[u8], code: u8) -> Option<&[u8]> {
    let mut i = 0;
    while i < options.len() {
        match options[i] {
            OPTION_END => break,
            OPTION_PAD => i += 1,
            current => {
                let len = usize::from(*options.get(i + 1)?);
                let data = options.get(i + 2..i + 2 + len)?;
                if current == code {
                    return Some(data);
                }
                i += 2 + len;
            }
        }
    }
    None
}
