use crate::error::TransportError;
use rusb::{Direction, Recipient, RequestType};
use std::time::Duration;

/// The fixed control-transfer header fields the Dawn Pro expects, plus the
/// settle time the firmware needs between transfers. Built once at
/// construction and owned by the transport; nothing reads these from globals.
#[derive(Copy, Clone, Debug)]
pub struct UsbProtocol {
    pub request_type_out: u8,
    pub request_type_in: u8,
    pub command_request: u8,
    pub result_request: u8,
    pub value: u16,
    pub index: u16,
    pub command_interval: Duration,
}

impl Default for UsbProtocol {
    fn default() -> Self {
        Self {
            request_type_out: rusb::request_type(
                Direction::Out,
                RequestType::Vendor,
                Recipient::Other,
            ),
            request_type_in: rusb::request_type(
                Direction::In,
                RequestType::Vendor,
                Recipient::Other,
            ),
            command_request: 160,
            result_request: 161,
            value: 0x0000,
            index: 0x09A0,
            command_interval: Duration::from_millis(100),
        }
    }
}

/// The single seam between the session and the hardware. Implementations
/// must space transfers out by the protocol's command interval; issuing
/// back-to-back commands risks corrupting the firmware state. Faults are
/// reported as [`TransportError`] and are never retried here.
pub trait DawnTransport {
    /// Sends one host-to-device control transfer carrying `data`.
    fn write_control(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Reads `length` bytes from the device. A response shorter than
    /// `length` is a fault, not a partial result.
    fn read_control(&mut self, length: usize) -> Result<Vec<u8>, TransportError>;
}
