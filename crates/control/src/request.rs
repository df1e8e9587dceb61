use serde::{Deserialize, Serialize};

use crate::{Bitrate, ControlError, Power, RadioLimits};

/// Per-transmission override attached to an outgoing frame.
///
/// Unlike [`crate::RadioConfigureCommand`] this only affects the frame it
/// travels with. `None` keeps whatever the radio is currently configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioTransmissionRequest {
    pub bitrate: Option<Bitrate>,
    pub power: Option<Power>,
}

impl RadioTransmissionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bitrate(mut self, bitrate: Bitrate) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn with_power(mut self, power: Power) -> Self {
        self.power = Some(power);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.bitrate.is_none() && self.power.is_none()
    }

    pub fn validate(&self, limits: &RadioLimits) -> Result<(), ControlError> {
        if let Some(bitrate) = self.bitrate {
            limits.check_bitrate(bitrate)?;
        }
        if let Some(power) = self.power {
            limits.check_power(power)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_fields() {
        let req = RadioTransmissionRequest::new();
        assert!(req.is_noop());

        let req = req.with_bitrate(Bitrate::new(1200.0).unwrap());
        assert_eq!(req.bitrate.map(Bitrate::get), Some(1200.0));
        assert!(req.power.is_none());
        assert!(!req.is_noop());
    }

    #[test]
    fn test_override_respects_ceiling() {
        let limits = RadioLimits {
            max_bitrate: Some(Bitrate::new(2400.0).unwrap()),
            ..Default::default()
        };

        let ok = RadioTransmissionRequest::new().with_bitrate(Bitrate::new(2400.0).unwrap());
        assert!(ok.validate(&limits).is_ok());

        let too_fast = RadioTransmissionRequest::new().with_bitrate(Bitrate::new(4800.0).unwrap());
        assert!(matches!(
            too_fast.validate(&limits),
            Err(ControlError::OutOfRange { field: "bitrate", .. })
        ));
    }
}
