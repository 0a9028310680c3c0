use crate::error::{ConnectError, TransportError};
use crate::transport::{DawnTransport, UsbProtocol};
use log::{debug, info};
use rusb::{Device, DeviceHandle, GlobalContext};
use std::thread::sleep;
use std::time::Duration;

pub const VID_MOONDROP: u16 = 0x2fc6;
pub const PID_DAWN_PRO: u16 = 0xf06a;

/// rusb-backed transport for a single Dawn Pro. Owns the open handle for the
/// lifetime of the session; the device is matched on the exact VID/PID pair
/// with no further discovery.
pub struct DawnUsb {
    handle: DeviceHandle<GlobalContext>,
    device: Device<GlobalContext>,
    protocol: UsbProtocol,
    timeout: Duration,
}

impl DawnUsb {
    pub fn open() -> Result<Self, ConnectError> {
        Self::open_with(UsbProtocol::default())
    }

    pub fn open_with(protocol: UsbProtocol) -> Result<Self, ConnectError> {
        let handle = rusb::open_device_with_vid_pid(VID_MOONDROP, PID_DAWN_PRO)
            .ok_or(ConnectError::DeviceNotFound)?;
        let device = handle.device();

        info!("Connected to possible Dawn Pro device at {:?}", device);

        Ok(Self {
            handle,
            device,
            protocol,
            timeout: Duration::from_secs(1),
        })
    }

    pub fn usb_bus_number(&self) -> u8 {
        self.device.bus_number()
    }

    pub fn usb_address(&self) -> u8 {
        self.device.address()
    }

    // The firmware needs transfers spaced out, a command sent while the
    // previous one is still settling can corrupt the device state.
    fn settle(&self) {
        sleep(self.protocol.command_interval);
    }
}

impl DawnTransport for DawnUsb {
    fn write_control(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.settle();
        debug!("Sending control transfer: {:02X?}", data);
        self.handle.write_control(
            self.protocol.request_type_out,
            self.protocol.command_request,
            self.protocol.value,
            self.protocol.index,
            data,
            self.timeout,
        )?;
        Ok(())
    }

    fn read_control(&mut self, length: usize) -> Result<Vec<u8>, TransportError> {
        self.settle();
        let mut buf = vec![0; length];
        let received = self.handle.read_control(
            self.protocol.request_type_in,
            self.protocol.result_request,
            self.protocol.value,
            self.protocol.index,
            &mut buf,
            self.timeout,
        )?;
        if received < length {
            return Err(TransportError::ShortResponse {
                expected: length,
                received,
            });
        }
        debug!("Received control transfer: {:02X?}", buf);
        Ok(buf)
    }
}
