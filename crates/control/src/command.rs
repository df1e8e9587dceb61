//! Commands sent from a controller down to a radio

use std::fmt;

use log::debug;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Bitrate, ControlError, Power, RadioLimits};

/// Tag identifying the kind of command carried by a control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[non_exhaustive]
pub enum RadioCommandCode {
    Configure = 1,
}

impl TryFrom<u8> for RadioCommandCode {
    type Error = ControlError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Configure),
            other => Err(ControlError::UnknownCommandCode(other)),
        }
    }
}

impl From<RadioCommandCode> for u8 {
    fn from(code: RadioCommandCode) -> u8 {
        code as u8
    }
}

/// Persistent reconfiguration of the radio.
///
/// Each field left as `None` means "no change requested"; receivers must
/// not treat it as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioConfigureCommand {
    /// Valid range: `[0, RadioLimits::num_channels)`
    pub channel_number: Option<u32>,
    pub bitrate: Option<Bitrate>,
    pub power: Option<Power>,
}

impl RadioConfigureCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_number(mut self, channel: u32) -> Self {
        self.channel_number = Some(channel);
        self
    }

    pub fn with_bitrate(mut self, bitrate: Bitrate) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn with_power(mut self, power: Power) -> Self {
        self.power = Some(power);
        self
    }

    pub fn code(&self) -> RadioCommandCode {
        RadioCommandCode::Configure
    }

    /// True when the command leaves every setting unchanged.
    pub fn is_noop(&self) -> bool {
        self.channel_number.is_none() && self.bitrate.is_none() && self.power.is_none()
    }

    /// Check the command against the receiving radio's limits.
    pub fn validate(&self, limits: &RadioLimits) -> Result<(), ControlError> {
        if let Some(channel) = self.channel_number {
            if channel >= limits.num_channels {
                debug!("Rejecting channel {} (radio has {})", channel, limits.num_channels);
                return Err(ControlError::ChannelOutOfRange {
                    channel: channel.into(),
                    num_channels: limits.num_channels,
                });
            }
        }
        if let Some(bitrate) = self.bitrate {
            limits.check_bitrate(bitrate)?;
        }
        if let Some(power) = self.power {
            limits.check_power(power)?;
        }
        Ok(())
    }
}

/// A command tagged with its [`RadioCommandCode`].
///
/// Serialized as the pair `(code, payload)` so the numeric code is what
/// appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum RadioCommand {
    Configure(RadioConfigureCommand),
}

impl RadioCommand {
    pub fn code(&self) -> RadioCommandCode {
        match self {
            RadioCommand::Configure(cmd) => cmd.code(),
        }
    }

    pub fn validate(&self, limits: &RadioLimits) -> Result<(), ControlError> {
        match self {
            RadioCommand::Configure(cmd) => cmd.validate(limits),
        }
    }
}

impl Serialize for RadioCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.code())?;
        match self {
            RadioCommand::Configure(cmd) => tuple.serialize_element(cmd)?,
        }
        tuple.end()
    }
}

struct RadioCommandVisitor;

impl<'de> Visitor<'de> for RadioCommandVisitor {
    type Value = RadioCommand;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a radio command code followed by its payload")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RadioCommand, A::Error> {
        let code: RadioCommandCode = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        match code {
            RadioCommandCode::Configure => {
                let cmd = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(RadioCommand::Configure(cmd))
            }
        }
    }
}

impl<'de> Deserialize<'de> for RadioCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, RadioCommandVisitor)
    }
}

impl From<RadioConfigureCommand> for RadioCommand {
    fn from(cmd: RadioConfigureCommand) -> Self {
        RadioCommand::Configure(cmd)
    }
}
