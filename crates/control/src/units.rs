//! Canonical physical quantities carried by control payloads.
//!
//! Every quantity is stored in a single unit system (bits per second,
//! watts, plain ratios). Constructors reject NaN and anything outside the
//! quantity's domain, so an absent value is always expressed as `None`
//! by the payload holding it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ControlError;

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $field:literal, $unit:literal, |$v:ident| $valid:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(try_from = "f64", into = "f64")]
        pub struct $name(f64);

        impl $name {
            pub fn new($v: f64) -> Result<Self, ControlError> {
                if $valid {
                    Ok(Self($v))
                } else {
                    Err(ControlError::OutOfRange { field: $field, value: $v })
                }
            }

            pub fn get(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = ControlError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $unit)
            }
        }
    };
}

quantity!(
    /// Data rate in bits per second, `(0, +inf)`.
    Bitrate, "bitrate", " bps",
    |v| v.is_finite() && v > 0.0
);

quantity!(
    /// Power in watts, `(0, +inf)`. Used for both transmit power and RSSI.
    Power, "power", " W",
    |v| v.is_finite() && v > 0.0
);

quantity!(
    /// Signal to noise plus interference ratio, `(0, +inf)`.
    Snir, "snir", "",
    |v| v.is_finite() && v > 0.0
);

quantity!(
    /// Probability in `[0, 1]`.
    Probability, "probability", "",
    |v| (0.0..=1.0).contains(&v)
);
