//! Validated zone parameters.

use super::error::ZoneError;

/// User-facing parameters of one zone.
///
/// - `landfall_rate`: expected landfalls per year (≥ 0)
/// - `loss_mean`: mean economic loss per landfall (> 0)
/// - `loss_stddev`: standard deviation of that loss (≥ 0)
///
/// All values must be finite. Zero rate and zero stddev are degenerate but
/// well defined: the zone never produces events, or every event costs
/// exactly `loss_mean`.
///
/// # Examples
///
/// ```rust
/// use loss_engine::zone::ZoneParameters;
///
/// let params = ZoneParameters::new(1.2, 3.0, 0.5).unwrap();
/// assert_eq!(params.landfall_rate(), 1.2);
///
/// assert!(ZoneParameters::new(1.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneParameters {
    landfall_rate: f64,
    loss_mean: f64,
    loss_stddev: f64,
}

impl ZoneParameters {
    /// Validates and creates zone parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn new(landfall_rate: f64, loss_mean: f64, loss_stddev: f64) -> Result<Self, ZoneError> {
        check("landfall_rate", landfall_rate, false)?;
        check("loss_mean", loss_mean, true)?;
        check("loss_stddev", loss_stddev, false)?;

        Ok(Self {
            landfall_rate,
            loss_mean,
            loss_stddev,
        })
    }

    /// Returns the expected number of landfalls per year.
    #[inline]
    pub fn landfall_rate(&self) -> f64 {
        self.landfall_rate
    }

    /// Returns the mean loss per landfall.
    #[inline]
    pub fn loss_mean(&self) -> f64 {
        self.loss_mean
    }

    /// Returns the standard deviation of the loss per landfall.
    #[inline]
    pub fn loss_stddev(&self) -> f64 {
        self.loss_stddev
    }
}

fn check(name: &'static str, value: f64, strictly_positive: bool) -> Result<(), ZoneError> {
    if !value.is_finite() {
        return Err(ZoneError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if strictly_positive && value <= 0.0 {
        return Err(ZoneError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    if value < 0.0 {
        return Err(ZoneError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(())
}
