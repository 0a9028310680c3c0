pub use rusb;
pub mod codec;
pub mod commands;
pub mod dawn;
pub mod device;
pub mod error;
pub mod session;
pub mod transport;
