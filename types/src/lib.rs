#[cfg(feature = "clap")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// State of the case LED. "Temporarily Off" survives until the device is
/// next power cycled, "Off" is persistent.
#[derive(Copy, Clone, Debug, Display, EnumString, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedStatus {
    #[strum(serialize = "On")]
    On = 0x00,

    #[strum(serialize = "Temporarily Off")]
    TempOff = 0x01,

    #[strum(serialize = "Off")]
    Off = 0x02,
}

#[derive(Copy, Clone, Debug, Display, EnumString, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GainMode {
    #[strum(serialize = "Low")]
    Low = 0x00,

    #[strum(serialize = "High")]
    High = 0x01,
}

/// The digital reconstruction filters offered by the DAC.
#[derive(Copy, Clone, Debug, Display, EnumString, EnumIter, EnumCount, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DacFilter {
    #[strum(serialize = "Fast Roll-Off Low Latency")]
    FastRollOffLowLatency = 0x00,

    #[strum(serialize = "Fast Roll-Off Phase Compensated")]
    FastRollOffPhaseCompensated = 0x01,

    #[strum(serialize = "Slow Roll-Off Low Latency")]
    SlowRollOffLowLatency = 0x02,

    #[strum(serialize = "Slow Roll-Off Phase Compensated")]
    SlowRollOffPhaseCompensated = 0x03,

    #[strum(serialize = "Non-Oversampling")]
    NonOversampling = 0x04,
}

impl LedStatus {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(LedStatus::On),
            0x01 => Some(LedStatus::TempOff),
            0x02 => Some(LedStatus::Off),
            _ => None,
        }
    }
}

impl GainMode {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(GainMode::Low),
            0x01 => Some(GainMode::High),
            _ => None,
        }
    }
}

impl DacFilter {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(DacFilter::FastRollOffLowLatency),
            0x01 => Some(DacFilter::FastRollOffPhaseCompensated),
            0x02 => Some(DacFilter::SlowRollOffLowLatency),
            0x03 => Some(DacFilter::SlowRollOffPhaseCompensated),
            0x04 => Some(DacFilter::NonOversampling),
            _ => None,
        }
    }
}
