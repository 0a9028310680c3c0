use crate::codec;
use crate::commands::{Command, RESPONSE_LENGTH};
use crate::transport::DawnTransport;
use dawnpro_types::{DacFilter, GainMode, LedStatus};
use log::{debug, error, info};

/// The 7-byte response to the settings query. Byte 3 is the filter, byte 4
/// the gain, byte 5 the LED status.
#[derive(Copy, Clone, Debug)]
pub struct StateSnapshot([u8; RESPONSE_LENGTH]);

impl StateSnapshot {
    pub fn filter_code(&self) -> u8 {
        self.0[3]
    }

    pub fn gain_code(&self) -> u8 {
        self.0[4]
    }

    pub fn led_code(&self) -> u8 {
        self.0[5]
    }
}

/// The 7-byte response read after a volume refresh. The raw attenuator value
/// sits at byte 4, the same offset as the gain byte of [`StateSnapshot`], but
/// the two responses come from different command sequences and are not
/// interchangeable.
#[derive(Copy, Clone, Debug)]
pub struct VolumeReport([u8; RESPONSE_LENGTH]);

impl VolumeReport {
    pub fn raw_volume(&self) -> u8 {
        self.0[4]
    }
}

/// In-memory mirror of the last-known device settings. Updated optimistically
/// on a successful write and authoritatively on a successful read; a failed
/// operation leaves it untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedSettings {
    pub volume: u8,
    pub led_status: String,
    pub gain: String,
    pub filter: String,
}

impl Default for CachedSettings {
    fn default() -> Self {
        Self {
            volume: 0,
            led_status: LedStatus::Off.to_string(),
            gain: GainMode::Low.to_string(),
            filter: DacFilter::FastRollOffLowLatency.to_string(),
        }
    }
}

/// One open conversation with a Dawn Pro. Owns the sole transport, so all
/// transfers are serialised through `&mut self`; the firmware cannot cope
/// with overlapping commands.
pub struct DawnSession<T: DawnTransport> {
    transport: T,
    settings: CachedSettings,
}

impl<T: DawnTransport> DawnSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            settings: CachedSettings::default(),
        }
    }

    /// Last-known settings. Stale until [`DawnSession::sync`] or the
    /// individual reads have run.
    pub fn settings(&self) -> &CachedSettings {
        &self.settings
    }

    /// Re-reads all four settings from the hardware. Failures are logged by
    /// the individual reads and the affected cache entries keep their
    /// previous value.
    pub fn sync(&mut self) {
        self.get_volume();
        self.get_led_status();
        self.get_gain();
        self.get_filter();
    }

    /// Issues the settings query and reads the 7-byte snapshot. Transport
    /// faults are logged and reported as `None`, callers degrade to the
    /// cached state.
    pub fn query_state(&mut self) -> Option<StateSnapshot> {
        if let Err(error) = self.transport.write_control(&Command::QueryState.frame()) {
            error!("Failed to query the device state: {}", error);
            return None;
        }
        self.read_response().map(StateSnapshot)
    }

    /// Asks the firmware to recompute the volume curve. No response follows.
    pub fn refresh_volume(&mut self) -> bool {
        match self.transport.write_control(&Command::RefreshVolume.frame()) {
            Ok(()) => {
                debug!("Volume refreshed");
                true
            }
            Err(error) => {
                error!("Failed to refresh volume: {}", error);
                false
            }
        }
    }

    pub fn get_volume(&mut self) -> Option<u8> {
        if !self.refresh_volume() {
            return None;
        }
        let report = self.read_response().map(VolumeReport)?;
        let percent = codec::volume_to_percent(report.raw_volume());
        self.settings.volume = percent;
        info!("Current volume is {}%", percent);
        Some(percent)
    }

    pub fn get_led_status(&mut self) -> Option<String> {
        let snapshot = self.query_state()?;
        let status = codec::led_status_to_string(snapshot.led_code());
        self.settings.led_status = status.clone();
        info!("Current LED status: {}", status);
        Some(status)
    }

    pub fn get_gain(&mut self) -> Option<String> {
        let snapshot = self.query_state()?;
        let gain = codec::gain_to_string(snapshot.gain_code());
        self.settings.gain = gain.clone();
        info!("Current gain: {}", gain);
        Some(gain)
    }

    pub fn get_filter(&mut self) -> Option<String> {
        let snapshot = self.query_state()?;
        let filter = codec::filter_to_string(snapshot.filter_code());
        self.settings.filter = filter.clone();
        info!("Current filter: {}", filter);
        Some(filter)
    }

    pub fn set_volume(&mut self, percent: u8) -> bool {
        let raw = codec::volume_to_raw(percent);
        if !self.send_command(Command::SetVolume, raw) {
            return false;
        }
        // Cache before the confirmation refresh, so a read-through of the
        // cache sees the new value even while the refresh is outstanding.
        self.settings.volume = percent.min(100);
        self.refresh_volume();
        info!("Volume set to {}%", self.settings.volume);
        true
    }

    pub fn set_gain(&mut self, gain: GainMode) -> bool {
        if !self.send_command(Command::SetGain, gain.code()) {
            return false;
        }
        self.settings.gain = gain.to_string();
        // A gain change shifts the audible volume curve, so nudge the
        // firmware the same way a volume write does.
        self.refresh_volume();
        info!("Gain set to {}", gain);
        true
    }

    pub fn set_led_status(&mut self, status: LedStatus) -> bool {
        if !self.send_command(Command::SetLed, status.code()) {
            return false;
        }
        self.settings.led_status = status.to_string();
        info!("LED status set to {}", status);
        true
    }

    pub fn set_filter(&mut self, filter: DacFilter) -> bool {
        if !self.send_command(Command::SetFilter, filter.code()) {
            return false;
        }
        self.settings.filter = filter.to_string();
        info!("Filter set to {}", filter);
        true
    }

    fn send_command(&mut self, command: Command, value: u8) -> bool {
        if let Err(error) = self.transport.write_control(&command.frame_with_value(value)) {
            error!("Failed to send {:?} command: {}", command, error);
            return false;
        }
        true
    }

    fn read_response(&mut self) -> Option<[u8; RESPONSE_LENGTH]> {
        match self.transport.read_control(RESPONSE_LENGTH) {
            Ok(bytes) => match bytes.try_into() {
                Ok(bytes) => Some(bytes),
                Err(bytes) => {
                    error!("Unexpected response length: {:02X?}", bytes);
                    None
                }
            },
            Err(error) => {
                error!("Failed to read a response from the device: {}", error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct FakeTransport {
        written: Vec<Vec<u8>>,
        responses: VecDeque<Vec<u8>>,
        fail_writes: bool,
        fail_writes_after: Option<usize>,
        fail_reads: bool,
    }

    impl FakeTransport {
        fn with_responses(responses: Vec<Vec<u8>>) -> Self {
            Self {
                responses: responses.into(),
                ..Default::default()
            }
        }
    }

    impl DawnTransport for FakeTransport {
        fn write_control(&mut self, data: &[u8]) -> Result<(), TransportError> {
            let budget_spent = self
                .fail_writes_after
                .is_some_and(|limit| self.written.len() >= limit);
            if self.fail_writes || budget_spent {
                return Err(TransportError::UsbError(rusb::Error::Pipe));
            }
            self.written.push(data.to_vec());
            Ok(())
        }

        fn read_control(&mut self, _length: usize) -> Result<Vec<u8>, TransportError> {
            if self.fail_reads {
                return Err(TransportError::UsbError(rusb::Error::Pipe));
            }
            Ok(self.responses.pop_front().expect("no scripted response"))
        }
    }

    #[test]
    fn snapshot_bytes_decode_to_names() {
        let snapshot = vec![0x00, 0x00, 0x00, 0x02, 0x01, 0x00, 0x00];
        let transport =
            FakeTransport::with_responses(vec![snapshot.clone(), snapshot.clone(), snapshot]);
        let mut session = DawnSession::new(transport);

        assert_eq!(
            session.get_filter().as_deref(),
            Some("Slow Roll-Off Low Latency")
        );
        assert_eq!(session.get_gain().as_deref(), Some("High"));
        assert_eq!(session.get_led_status().as_deref(), Some("On"));

        assert_eq!(session.settings().filter, "Slow Roll-Off Low Latency");
        assert_eq!(session.settings().gain, "High");
        assert_eq!(session.settings().led_status, "On");

        for frame in &session.transport.written {
            assert_eq!(frame, &vec![0xC0, 0xA5, 0xA3]);
        }
    }

    #[test]
    fn volume_read_refreshes_then_reads() {
        let transport =
            FakeTransport::with_responses(vec![vec![0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x00]]);
        let mut session = DawnSession::new(transport);

        assert_eq!(session.get_volume(), Some(50));
        assert_eq!(session.settings().volume, 50);
        assert_eq!(session.transport.written, vec![vec![0xC0, 0xA5, 0xA2]]);
    }

    #[test]
    fn set_filter_sends_the_expected_frame() {
        let mut session = DawnSession::new(FakeTransport::default());

        assert!(session.set_filter(DacFilter::NonOversampling));
        assert_eq!(session.transport.written, vec![vec![0xC0, 0xA5, 0x01, 0x04]]);
        assert_eq!(session.settings().filter, "Non-Oversampling");
    }

    #[test]
    fn gain_write_updates_cache_before_the_refresh_lands() {
        let transport = FakeTransport {
            // Allow the set frame through, then fail the confirmation
            // refresh that follows it.
            fail_writes_after: Some(1),
            ..Default::default()
        };
        let mut session = DawnSession::new(transport);

        assert!(session.set_gain(GainMode::High));
        assert_eq!(session.settings().gain, "High");
        assert_eq!(session.transport.written, vec![vec![0xC0, 0xA5, 0x02, 0x01]]);
    }

    #[test]
    fn failed_write_leaves_the_cache_untouched() {
        let transport = FakeTransport {
            fail_writes: true,
            ..Default::default()
        };
        let mut session = DawnSession::new(transport);
        let before = session.settings().clone();

        assert!(!session.set_volume(80));
        assert!(!session.set_led_status(LedStatus::TempOff));
        assert_eq!(session.settings(), &before);
    }

    #[test]
    fn failed_read_keeps_the_last_known_value() {
        let transport =
            FakeTransport::with_responses(vec![vec![0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]]);
        let mut session = DawnSession::new(transport);
        assert_eq!(session.get_gain().as_deref(), Some("High"));

        session.transport.fail_reads = true;
        assert_eq!(session.get_gain(), None);
        assert_eq!(session.settings().gain, "High");
    }

    #[test]
    fn invalid_snapshot_codes_surface_sentinels() {
        let snapshot = vec![0x00, 0x00, 0x00, 0x09, 0x09, 0x09, 0x00];
        let transport =
            FakeTransport::with_responses(vec![snapshot.clone(), snapshot.clone(), snapshot]);
        let mut session = DawnSession::new(transport);

        assert_eq!(session.get_filter().as_deref(), Some("Invalid Filter Value"));
        assert_eq!(session.get_gain().as_deref(), Some("Invalid Gain Value"));
        assert_eq!(
            session.get_led_status().as_deref(),
            Some("Invalid LED Status")
        );
    }

    #[test]
    fn truncated_response_is_treated_as_a_failure() {
        let transport = FakeTransport::with_responses(vec![vec![0x00, 0x00, 0x00]]);
        let mut session = DawnSession::new(transport);

        assert_eq!(session.query_state().map(|s| s.filter_code()), None);
    }
}
