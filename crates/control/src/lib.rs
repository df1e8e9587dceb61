//! control and indication payloads exchanged between a MAC layer and a radio

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod units;
pub mod command;
pub mod request;
pub mod indication;
pub mod sentinel;
pub mod message;

pub use units::{Bitrate, Power, Probability, Snir};
pub use command::{RadioCommand, RadioCommandCode, RadioConfigureCommand};
pub use request::RadioTransmissionRequest;
pub use indication::RadioReceptionIndication;
pub use sentinel::{RawConfigureCommand, RawReceptionIndication, RawTransmissionRequest};
pub use message::{ControlCodec, ControlInfo, Direction};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("{field} value {value} is outside its valid range")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("Channel {channel} is outside [0, {num_channels})")]
    ChannelOutOfRange { channel: i64, num_channels: u32 },

    #[error("Unknown radio command code {0}")]
    UnknownCommandCode(u8),

    #[error("Payload of {len} bytes exceeds limit of {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Bounds imposed by the receiving radio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadioLimits {
    pub num_channels: u32,
    pub max_bitrate: Option<Bitrate>,
    pub max_power: Option<Power>,
}

impl Default for RadioLimits {
    fn default() -> Self {
        Self {
            num_channels: 16,
            max_bitrate: None,
            max_power: None,
        }
    }
}

impl RadioLimits {
    pub fn check_bitrate(&self, bitrate: Bitrate) -> Result<(), ControlError> {
        match self.max_bitrate {
            Some(max) if bitrate > max => Err(ControlError::OutOfRange {
                field: "bitrate",
                value: bitrate.get(),
            }),
            _ => Ok(()),
        }
    }

    pub fn check_power(&self, power: Power) -> Result<(), ControlError> {
        match self.max_power {
            Some(max) if power > max => Err(ControlError::OutOfRange {
                field: "power",
                value: power.get(),
            }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    pub max_payload_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_payload_len: 256 }
    }
}
