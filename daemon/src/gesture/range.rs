use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid mapping domain: low ({low}) must be strictly below high ({high})")]
pub struct InvalidDomain {
    pub low: f64,
    pub high: f64,
}

/// Clamped linear interpolation from one numeric interval onto another.
///
/// Inputs at or outside the domain bounds clamp to the matching codomain
/// bound; there is no extrapolation. The codomain may be inverted (the
/// UI bar mapping runs 400 down to 150), the domain may not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMap {
    domain_low: f64,
    domain_high: f64,
    codomain_low: f64,
    codomain_high: f64,
}

impl RangeMap {
    /// Build a mapper, rejecting an empty or inverted domain.
    ///
    /// A bad domain is a configuration error and must surface at
    /// startup, never during frame processing.
    pub fn new(
        domain_low: f64,
        domain_high: f64,
        codomain_low: f64,
        codomain_high: f64,
    ) -> Result<Self, InvalidDomain> {
        if domain_low >= domain_high {
            return Err(InvalidDomain {
                low: domain_low,
                high: domain_high,
            });
        }

        Ok(Self {
            domain_low,
            domain_high,
            codomain_low,
            codomain_high,
        })
    }

    pub fn map(&self, value: f64) -> f64 {
        if value <= self.domain_low {
            return self.codomain_low;
        }
        if value >= self.domain_high {
            return self.codomain_high;
        }

        let t = (value - self.domain_low) / (self.domain_high - self.domain_low);
        self.codomain_low + t * (self.codomain_high - self.codomain_low)
    }
}
