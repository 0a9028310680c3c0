//! Conversions between the raw bytes the device speaks and the values the
//! rest of the utility works with. Everything in here is pure and total:
//! out-of-range input is clamped or mapped to a sentinel, never an error.

use dawnpro_types::{DacFilter, GainMode, LedStatus};

/// Raw byte for full volume. The hardware attenuator counts upwards from
/// loudest, so the raw scale runs opposite to the percentage.
pub const VOLUME_MAX: u8 = 0x00;

/// Raw byte for a muted output.
pub const VOLUME_MIN: u8 = 0x70;

pub const INVALID_LED_STATUS: &str = "Invalid LED Status";
pub const INVALID_GAIN_VALUE: &str = "Invalid Gain Value";
pub const INVALID_FILTER_VALUE: &str = "Invalid Filter Value";

/// Maps a raw attenuator byte onto 0-100%. Values beyond `VOLUME_MIN` are
/// clamped to silence.
pub fn volume_to_percent(raw: u8) -> u8 {
    let clamped = raw.min(VOLUME_MIN) as u16;
    ((VOLUME_MIN as u16 - clamped) * 100 / VOLUME_MIN as u16) as u8
}

/// Inverse of [`volume_to_percent`], clamping the percentage to 100.
pub fn volume_to_raw(percent: u8) -> u8 {
    let clamped = percent.min(100) as u16;
    (VOLUME_MIN as u16 - (clamped * VOLUME_MIN as u16 / 100)) as u8
}

pub fn led_status_to_string(code: u8) -> String {
    match LedStatus::from_code(code) {
        Some(status) => status.to_string(),
        None => INVALID_LED_STATUS.to_string(),
    }
}

/// Unknown names fall back to [`LedStatus::On`], the device default.
pub fn string_to_led_status(name: &str) -> LedStatus {
    name.parse().unwrap_or(LedStatus::On)
}

pub fn gain_to_string(code: u8) -> String {
    match GainMode::from_code(code) {
        Some(gain) => gain.to_string(),
        None => INVALID_GAIN_VALUE.to_string(),
    }
}

/// Unknown names fall back to [`GainMode::Low`], the device default.
pub fn string_to_gain(name: &str) -> GainMode {
    name.parse().unwrap_or(GainMode::Low)
}

pub fn filter_to_string(code: u8) -> String {
    match DacFilter::from_code(code) {
        Some(filter) => filter.to_string(),
        None => INVALID_FILTER_VALUE.to_string(),
    }
}

/// Unknown names fall back to [`DacFilter::FastRollOffLowLatency`], the
/// device default.
pub fn string_to_filter(name: &str) -> DacFilter {
    name.parse().unwrap_or(DacFilter::FastRollOffLowLatency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn volume_endpoints() {
        assert_eq!(volume_to_percent(0x00), 100);
        assert_eq!(volume_to_percent(0x70), 0);
        assert_eq!(volume_to_percent(0x38), 50);
    }

    #[test]
    fn volume_clamps_out_of_range_input() {
        assert_eq!(volume_to_percent(0xFF), 0);
        assert_eq!(volume_to_raw(255), VOLUME_MAX);
        assert_eq!(volume_to_raw(0), VOLUME_MIN);
    }

    #[test]
    fn volume_round_trips_within_one_step() {
        for raw in VOLUME_MAX..=VOLUME_MIN {
            let back = volume_to_raw(volume_to_percent(raw));
            assert!(
                back.abs_diff(raw) <= 1,
                "raw {raw:#04x} round-tripped to {back:#04x}"
            );
        }
    }

    #[test]
    fn volume_is_monotonically_non_increasing() {
        let mut previous = volume_to_percent(VOLUME_MAX);
        for raw in VOLUME_MAX + 1..=VOLUME_MIN {
            let percent = volume_to_percent(raw);
            assert!(percent <= previous, "raw {raw:#04x} rose to {percent}%");
            previous = percent;
        }
    }

    #[test]
    fn names_decode_back_to_themselves() {
        for status in LedStatus::iter() {
            let name = status.to_string();
            assert_eq!(led_status_to_string(string_to_led_status(&name).code()), name);
        }
        for gain in GainMode::iter() {
            let name = gain.to_string();
            assert_eq!(gain_to_string(string_to_gain(&name).code()), name);
        }
        for filter in DacFilter::iter() {
            let name = filter.to_string();
            assert_eq!(filter_to_string(string_to_filter(&name).code()), name);
        }
    }

    #[test]
    fn invalid_codes_yield_sentinels() {
        assert_eq!(led_status_to_string(0x09), INVALID_LED_STATUS);
        assert_eq!(gain_to_string(0x09), INVALID_GAIN_VALUE);
        assert_eq!(filter_to_string(0x09), INVALID_FILTER_VALUE);
    }

    #[test]
    fn unknown_names_encode_to_the_default() {
        assert_eq!(string_to_led_status("Blinking"), LedStatus::On);
        assert_eq!(string_to_gain("Medium"), GainMode::Low);
        assert_eq!(
            string_to_filter("Brick Wall"),
            DacFilter::FastRollOffLowLatency
        );
    }
}
