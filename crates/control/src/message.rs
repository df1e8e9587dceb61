use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    CodecConfig, ControlError, RadioCommand, RadioCommandCode, RadioReceptionIndication,
    RadioTransmissionRequest,
};

/// Leading byte of an encoded `ControlInfo::Command`, followed by its command code.
const COMMAND_TAG: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Controller to radio
    Down,
    /// Radio to controller
    Up,
}

/// Control information crossing the boundary between a controller and a radio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlInfo {
    Command(RadioCommand),
    TransmissionRequest(RadioTransmissionRequest),
    ReceptionIndication(RadioReceptionIndication),
}

impl ControlInfo {
    pub fn direction(&self) -> Direction {
        match self {
            ControlInfo::Command(_) | ControlInfo::TransmissionRequest(_) => Direction::Down,
            ControlInfo::ReceptionIndication(_) => Direction::Up,
        }
    }
}

impl From<RadioCommand> for ControlInfo {
    fn from(cmd: RadioCommand) -> Self {
        ControlInfo::Command(cmd)
    }
}

impl From<RadioTransmissionRequest> for ControlInfo {
    fn from(req: RadioTransmissionRequest) -> Self {
        ControlInfo::TransmissionRequest(req)
    }
}

impl From<RadioReceptionIndication> for ControlInfo {
    fn from(ind: RadioReceptionIndication) -> Self {
        ControlInfo::ReceptionIndication(ind)
    }
}

#[derive(Debug)]
pub struct ControlCodec {
    max_payload_len: usize,
}

impl ControlCodec {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            max_payload_len: config.max_payload_len,
        }
    }

    pub fn encode(&self, info: &ControlInfo) -> Result<Vec<u8>, ControlError> {
        let bytes = bincode::serde::encode_to_vec(info, bincode::config::standard())
            .map_err(|e| ControlError::InvalidPayload(e.to_string()))?;

        if bytes.len() > self.max_payload_len {
            return Err(ControlError::PayloadTooLarge {
                len: bytes.len(),
                max: self.max_payload_len,
            });
        }

        trace!("Encoded {:?} control info into {} bytes", info.direction(), bytes.len());
        Ok(bytes)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<ControlInfo, ControlError> {
        if bytes.len() > self.max_payload_len {
            return Err(ControlError::PayloadTooLarge {
                len: bytes.len(),
                max: self.max_payload_len,
            });
        }

        if let [COMMAND_TAG, code, ..] = bytes {
            RadioCommandCode::try_from(*code).inspect_err(|_| {
                debug!("Unknown radio command code {} on the wire", code);
            })?;
        }

        let (info, read): (ControlInfo, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard()).map_err(|e| {
                debug!("Failed to decode control info: {}", e);
                ControlError::InvalidPayload(e.to_string())
            })?;

        if read != bytes.len() {
            return Err(ControlError::InvalidPayload(format!(
                "{} trailing bytes",
                bytes.len() - read
            )));
        }

        trace!("Decoded {} bytes into {:?} control info", read, info.direction());
        Ok(info)
    }
}

impl Default for ControlCodec {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}
