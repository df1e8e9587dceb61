//! Reception quality reported by the radio to upper layers

use serde::{Deserialize, Serialize};

use crate::{Power, Probability, Snir};

/// Quality report attached to an incoming frame. `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioReceptionIndication {
    pub bit_error_count: Option<u64>,
    pub symbol_error_count: Option<u64>,
    pub packet_error_rate: Option<Probability>,
    pub bit_error_rate: Option<Probability>,
    pub symbol_error_rate: Option<Probability>,
    /// Minimum received signal strength over the frame
    pub min_rssi: Option<Power>,
    /// Minimum signal to noise plus interference ratio over the frame
    pub min_snir: Option<Snir>,
}

impl RadioReceptionIndication {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bit_error_count(mut self, count: u64) -> Self {
        self.bit_error_count = Some(count);
        self
    }

    pub fn with_symbol_error_count(mut self, count: u64) -> Self {
        self.symbol_error_count = Some(count);
        self
    }

    pub fn with_packet_error_rate(mut self, rate: Probability) -> Self {
        self.packet_error_rate = Some(rate);
        self
    }

    pub fn with_bit_error_rate(mut self, rate: Probability) -> Self {
        self.bit_error_rate = Some(rate);
        self
    }

    pub fn with_symbol_error_rate(mut self, rate: Probability) -> Self {
        self.symbol_error_rate = Some(rate);
        self
    }

    pub fn with_min_rssi(mut self, rssi: Power) -> Self {
        self.min_rssi = Some(rssi);
        self
    }

    pub fn with_min_snir(mut self, snir: Snir) -> Self {
        self.min_snir = Some(snir);
        self
    }

    /// True when the radio reported nothing about this frame.
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }
}
