#[derive(thiserror::Error, Debug)]
pub enum ConnectError {
    #[error("No Dawn Pro device was found")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("USB error: {0}")]
    UsbError(#[from] rusb::Error),

    #[error("Short response from the device, expected {expected} bytes, received {received}")]
    ShortResponse { expected: usize, received: usize },
}
