use rand::Rng;

/// Half-open integer range `[min, min + span)` a confidence value is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceBand {
    pub min: u8,
    pub span: u8,
}

impl ConfidenceBand {
    pub const fn new(min: u8, span: u8) -> Self {
        Self { min, span }
    }

    /// Exclusive upper bound, `None` when the band is empty or overflows.
    pub fn upper(&self) -> Option<u8> {
        if self.span == 0 {
            return None;
        }
        self.min.checked_add(self.span)
    }

    pub fn contains(&self, value: u8) -> bool {
        self.upper()
            .map(|upper| value >= self.min && value < upper)
            .unwrap_or(false)
    }
}

/// Randomness seam for confidence jitter so callers can pin draws.
pub trait ConfidenceSource: Send + Sync {
    fn draw(&self, band: ConfidenceBand) -> Result<u8, ConfidenceError>;
}

/// Production source drawing uniformly from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformConfidence;

impl ConfidenceSource for UniformConfidence {
    fn draw(&self, band: ConfidenceBand) -> Result<u8, ConfidenceError> {
        let upper = band.upper().ok_or(ConfidenceError::EmptyBand {
            min: band.min,
            span: band.span,
        })?;
        Ok(rand::thread_rng().gen_range(band.min..upper))
    }
}

/// Failure raised when a band cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfidenceError {
    #[error("bande de confiance vide ou invalide (min {min}, amplitude {span})")]
    EmptyBand { min: u8, span: u8 },
    #[error("source de confiance indisponible: {0}")]
    Unavailable(String),
}
