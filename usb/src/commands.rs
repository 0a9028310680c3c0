/// Every request starts with the same two-byte vendor prefix.
pub const COMMAND_PREFIX: [u8; 2] = [0xC0, 0xA5];

/// Number of bytes returned by the device for both the settings query and the
/// volume read that follows a refresh.
pub const RESPONSE_LENGTH: usize = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetFilter,
    SetGain,
    SetVolume,
    SetLed,
    RefreshVolume,
    QueryState,
}

impl Command {
    pub fn opcode(&self) -> u8 {
        match self {
            Command::SetFilter => 0x01,
            Command::SetGain => 0x02,
            Command::SetVolume => 0x04,
            Command::SetLed => 0x06,
            Command::RefreshVolume => 0xA2,
            Command::QueryState => 0xA3,
        }
    }

    /// Wire frame for commands that carry no argument (QueryState,
    /// RefreshVolume).
    pub fn frame(&self) -> Vec<u8> {
        vec![COMMAND_PREFIX[0], COMMAND_PREFIX[1], self.opcode()]
    }

    /// Wire frame for the set commands, which carry a single raw byte.
    pub fn frame_with_value(&self, value: u8) -> Vec<u8> {
        vec![COMMAND_PREFIX[0], COMMAND_PREFIX[1], self.opcode(), value]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_frame() {
        assert_eq!(Command::QueryState.frame(), vec![0xC0, 0xA5, 0xA3]);
    }

    #[test]
    fn refresh_volume_frame() {
        assert_eq!(Command::RefreshVolume.frame(), vec![0xC0, 0xA5, 0xA2]);
    }

    #[test]
    fn set_frames_carry_the_value() {
        assert_eq!(
            Command::SetFilter.frame_with_value(0x04),
            vec![0xC0, 0xA5, 0x01, 0x04]
        );
        assert_eq!(
            Command::SetGain.frame_with_value(0x01),
            vec![0xC0, 0xA5, 0x02, 0x01]
        );
        assert_eq!(
            Command::SetVolume.frame_with_value(0x38),
            vec![0xC0, 0xA5, 0x04, 0x38]
        );
        assert_eq!(
            Command::SetLed.frame_with_value(0x02),
            vec![0xC0, 0xA5, 0x06, 0x02]
        );
    }
}
