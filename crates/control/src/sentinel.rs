//! Sentinel-encoded forms of the control payloads.
//!
//! Some message frameworks carry these records as flat numeric fields,
//! using `-1` for an unset count or index and NaN for an unset quantity.
//! The `Raw*` records mirror that layout and convert to and from the typed
//! payloads. Any value that is neither in range nor the sentinel is
//! rejected on conversion.

use serde::{Deserialize, Serialize};

use crate::{
    Bitrate, ControlError, Power, Probability, RadioConfigureCommand, RadioReceptionIndication,
    RadioTransmissionRequest, Snir,
};

pub const UNSET_INDEX: i64 = -1;

fn index_from_raw(field: &'static str, raw: i64) -> Result<Option<i64>, ControlError> {
    match raw {
        UNSET_INDEX => Ok(None),
        v if v >= 0 => Ok(Some(v)),
        v => Err(ControlError::OutOfRange { field, value: v as f64 }),
    }
}

fn quantity_from_raw<T>(raw: f64) -> Result<Option<T>, ControlError>
where
    T: TryFrom<f64, Error = ControlError>,
{
    if raw.is_nan() {
        Ok(None)
    } else {
        T::try_from(raw).map(Some)
    }
}

fn quantity_to_raw<T: Into<f64>>(value: Option<T>) -> f64 {
    value.map_or(f64::NAN, Into::into)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawConfigureCommand {
    pub channel_number: i32,
    pub bitrate: f64,
    pub power: f64,
}

impl Default for RawConfigureCommand {
    fn default() -> Self {
        Self {
            channel_number: UNSET_INDEX as i32,
            bitrate: f64::NAN,
            power: f64::NAN,
        }
    }
}

impl TryFrom<RadioConfigureCommand> for RawConfigureCommand {
    type Error = ControlError;

    fn try_from(cmd: RadioConfigureCommand) -> Result<Self, Self::Error> {
        let channel_number = match cmd.channel_number {
            Some(c) => i32::try_from(c).map_err(|_| ControlError::OutOfRange {
                field: "channel_number",
                value: c.into(),
            })?,
            None => UNSET_INDEX as i32,
        };
        Ok(Self {
            channel_number,
            bitrate: quantity_to_raw(cmd.bitrate),
            power: quantity_to_raw(cmd.power),
        })
    }
}

impl TryFrom<RawConfigureCommand> for RadioConfigureCommand {
    type Error = ControlError;

    fn try_from(raw: RawConfigureCommand) -> Result<Self, Self::Error> {
        let channel_number = index_from_raw("channel_number", raw.channel_number.into())?
            .map(|c| c as u32);
        Ok(Self {
            channel_number,
            bitrate: quantity_from_raw::<Bitrate>(raw.bitrate)?,
            power: quantity_from_raw::<Power>(raw.power)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawTransmissionRequest {
    pub bitrate: f64,
    pub power: f64,
}

impl Default for RawTransmissionRequest {
    fn default() -> Self {
        Self {
            bitrate: f64::NAN,
            power: f64::NAN,
        }
    }
}

impl From<RadioTransmissionRequest> for RawTransmissionRequest {
    fn from(req: RadioTransmissionRequest) -> Self {
        Self {
            bitrate: quantity_to_raw(req.bitrate),
            power: quantity_to_raw(req.power),
        }
    }
}

impl TryFrom<RawTransmissionRequest> for RadioTransmissionRequest {
    type Error = ControlError;

    fn try_from(raw: RawTransmissionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            bitrate: quantity_from_raw::<Bitrate>(raw.bitrate)?,
            power: quantity_from_raw::<Power>(raw.power)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawReceptionIndication {
    pub bit_error_count: i64,
    pub symbol_error_count: i64,
    pub packet_error_rate: f64,
    pub bit_error_rate: f64,
    pub symbol_error_rate: f64,
    pub min_rssi: f64,
    pub min_snir: f64,
}

impl Default for RawReceptionIndication {
    fn default() -> Self {
        Self {
            bit_error_count: UNSET_INDEX,
            symbol_error_count: UNSET_INDEX,
            packet_error_rate: f64::NAN,
            bit_error_rate: f64::NAN,
            symbol_error_rate: f64::NAN,
            min_rssi: f64::NAN,
            min_snir: f64::NAN,
        }
    }
}

fn count_to_raw(field: &'static str, count: Option<u64>) -> Result<i64, ControlError> {
    match count {
        Some(c) => i64::try_from(c).map_err(|_| ControlError::OutOfRange {
            field,
            value: c as f64,
        }),
        None => Ok(UNSET_INDEX),
    }
}

impl TryFrom<RadioReceptionIndication> for RawReceptionIndication {
    type Error = ControlError;

    fn try_from(ind: RadioReceptionIndication) -> Result<Self, Self::Error> {
        Ok(Self {
            bit_error_count: count_to_raw("bit_error_count", ind.bit_error_count)?,
            symbol_error_count: count_to_raw("symbol_error_count", ind.symbol_error_count)?,
            packet_error_rate: quantity_to_raw(ind.packet_error_rate),
            bit_error_rate: quantity_to_raw(ind.bit_error_rate),
            symbol_error_rate: quantity_to_raw(ind.symbol_error_rate),
            min_rssi: quantity_to_raw(ind.min_rssi),
            min_snir: quantity_to_raw(ind.min_snir),
        })
    }
}

impl TryFrom<RawReceptionIndication> for RadioReceptionIndication {
    type Error = ControlError;

    fn try_from(raw: RawReceptionIndication) -> Result<Self, Self::Error> {
        Ok(Self {
            bit_error_count: index_from_raw("bit_error_count", raw.bit_error_count)?
                .map(|c| c as u64),
            symbol_error_count: index_from_raw("symbol_error_count", raw.symbol_error_count)?
                .map(|c| c as u64),
            packet_error_rate: quantity_from_raw::<Probability>(raw.packet_error_rate)?,
            bit_error_rate: quantity_from_raw::<Probability>(raw.bit_error_rate)?,
            symbol_error_rate: quantity_from_raw::<Probability>(raw.symbol_error_rate)?,
            min_rssi: quantity_from_raw::<Power>(raw.min_rssi)?,
            min_snir: quantity_from_raw::<Snir>(raw.min_snir)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_configure_uses_sentinels() {
        let raw = RawConfigureCommand::try_from(RadioConfigureCommand::new()).unwrap();
        assert_eq!(raw.channel_number, -1);
        assert!(raw.bitrate.is_nan());
        assert!(raw.power.is_nan());

        let cmd = RadioConfigureCommand::try_from(RawConfigureCommand::default()).unwrap();
        assert!(cmd.is_noop());
    }

    #[test]
    fn test_configure_scenario() {
        let raw = RawConfigureCommand {
            channel_number: 5,
            bitrate: f64::NAN,
            power: 0.1,
        };
        let cmd = RadioConfigureCommand::try_from(raw).unwrap();
        assert_eq!(cmd.channel_number, Some(5));
        assert!(cmd.bitrate.is_none());
        assert_eq!(cmd.power.map(Power::get), Some(0.1));

        let back = RawConfigureCommand::try_from(cmd).unwrap();
        assert_eq!(back.channel_number, 5);
        assert!(back.bitrate.is_nan());
        assert_eq!(back.power, 0.1);
    }

    #[test]
    fn test_invalid_raw_values_rejected() {
        let negative_channel = RawConfigureCommand {
            channel_number: -2,
            ..Default::default()
        };
        assert!(RadioConfigureCommand::try_from(negative_channel).is_err());

        let negative_bitrate = RawTransmissionRequest {
            bitrate: -9600.0,
            ..Default::default()
        };
        assert!(matches!(
            RadioTransmissionRequest::try_from(negative_bitrate),
            Err(ControlError::OutOfRange { field: "bitrate", .. })
        ));

        let rate_above_one = RawReceptionIndication {
            bit_error_rate: 1.5,
            ..Default::default()
        };
        assert!(RadioReceptionIndication::try_from(rate_above_one).is_err());

        let negative_rssi = RawReceptionIndication {
            min_rssi: -1e-9,
            ..Default::default()
        };
        assert!(matches!(
            RadioReceptionIndication::try_from(negative_rssi),
            Err(ControlError::OutOfRange { field: "power", .. })
        ));

        let zero_snir = RawReceptionIndication {
            min_snir: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            RadioReceptionIndication::try_from(zero_snir),
            Err(ControlError::OutOfRange { field: "snir", .. })
        ));

        let bad_bit_count = RawReceptionIndication {
            bit_error_count: -2,
            ..Default::default()
        };
        assert!(matches!(
            RadioReceptionIndication::try_from(bad_bit_count),
            Err(ControlError::OutOfRange { field: "bit_error_count", .. })
        ));

        let bad_symbol_count = RawReceptionIndication {
            symbol_error_count: -2,
            ..Default::default()
        };
        assert!(matches!(
            RadioReceptionIndication::try_from(bad_symbol_count),
            Err(ControlError::OutOfRange { field: "symbol_error_count", .. })
        ));
    }

    #[test]
    fn test_values_beyond_sentinel_width_rejected() {
        let cmd = RadioConfigureCommand::new().with_channel_number(u32::MAX);
        assert!(matches!(
            RawConfigureCommand::try_from(cmd),
            Err(ControlError::OutOfRange { field: "channel_number", .. })
        ));

        let ind = RadioReceptionIndication::new().with_bit_error_count(u64::MAX);
        assert!(matches!(
            RawReceptionIndication::try_from(ind),
            Err(ControlError::OutOfRange { field: "bit_error_count", .. })
        ));

        let ind = RadioReceptionIndication::new().with_symbol_error_count(u64::MAX);
        assert!(matches!(
            RawReceptionIndication::try_from(ind),
            Err(ControlError::OutOfRange { field: "symbol_error_count", .. })
        ));

        let widest = RadioConfigureCommand::new().with_channel_number(i32::MAX as u32);
        let raw = RawConfigureCommand::try_from(widest).unwrap();
        assert_eq!(raw.channel_number, i32::MAX);
    }

    #[test]
    fn test_reception_sentinels_distinct_from_zero() {
        let unknown = RadioReceptionIndication::try_from(RawReceptionIndication::default()).unwrap();
        assert!(unknown.is_unknown());

        let raw = RawReceptionIndication {
            bit_error_count: 0,
            packet_error_rate: 0.0,
            ..Default::default()
        };
        let ind = RadioReceptionIndication::try_from(raw).unwrap();
        assert_eq!(ind.bit_error_count, Some(0));
        assert_eq!(ind.packet_error_rate.map(Probability::get), Some(0.0));
        assert!(ind.symbol_error_count.is_none());
        assert!(ind.bit_error_rate.is_none());

        let back = RawReceptionIndication::try_from(ind).unwrap();
        assert_eq!(back.bit_error_count, 0);
        assert_eq!(back.symbol_error_count, -1);
        assert_eq!(back.packet_error_rate, 0.0);
        assert!(back.min_snir.is_nan());
    }

    #[test]
    fn test_transmission_request_round_trip() {
        let req = RadioTransmissionRequest::new().with_power(Power::new(2.5).unwrap());
        let raw = RawTransmissionRequest::from(req);
        assert!(raw.bitrate.is_nan());
        assert_eq!(RadioTransmissionRequest::try_from(raw).unwrap(), req);
    }
}
