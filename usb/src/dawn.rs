use crate::device::DawnUsb;
use crate::error::ConnectError;
use crate::session::{CachedSettings, DawnSession};
use dawnpro_types::{DacFilter, GainMode, LedStatus};

/// The object external callers hold. A thin pass-through over the single
/// [`DawnSession`] on the real USB transport; the GUI, CLI and configuration
/// loader all attach here.
pub struct DawnPro {
    session: DawnSession<DawnUsb>,
}

impl DawnPro {
    /// Locates the device by its fixed VID/PID pair and seeds the cache from
    /// the hardware. An absent device is fatal; there is no retry.
    pub fn open() -> Result<Self, ConnectError> {
        let transport = DawnUsb::open()?;
        let mut session = DawnSession::new(transport);
        session.sync();
        Ok(Self { session })
    }

    pub fn settings(&self) -> &CachedSettings {
        self.session.settings()
    }

    pub fn get_volume(&mut self) -> Option<u8> {
        self.session.get_volume()
    }

    pub fn get_led_status(&mut self) -> Option<String> {
        self.session.get_led_status()
    }

    pub fn get_gain(&mut self) -> Option<String> {
        self.session.get_gain()
    }

    pub fn get_filter(&mut self) -> Option<String> {
        self.session.get_filter()
    }

    pub fn set_volume(&mut self, percent: u8) -> bool {
        self.session.set_volume(percent)
    }

    pub fn set_led_status(&mut self, status: LedStatus) -> bool {
        self.session.set_led_status(status)
    }

    pub fn set_gain(&mut self, gain: GainMode) -> bool {
        self.session.set_gain(gain)
    }

    pub fn set_filter(&mut self, filter: DacFilter) -> bool {
        self.session.set_filter(filter)
    }

    pub fn refresh_volume(&mut self) -> bool {
        self.session.refresh_volume()
    }
}
