//! Error types for level and tuning validation.
//!
//! The simulation itself has no failure surface once running. Everything that
//! can be wrong is wrong at load time, so all errors live here and are raised
//! by [`Simulation::new`](crate::simulation::Simulation::new).

use thiserror::Error;

/// Invalid level or tuning configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A rectangle has a negative or non-finite extent.
    #[error("{what} has an invalid rectangle ({x}, {y}, {width}x{height})")]
    InvalidRect {
        /// Which rectangle failed (e.g. `"platform 3"`, `"goal"`)
        what: String,
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
    },

    /// A value that must be strictly positive is zero, negative or NaN.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Dotted path of the offending field
        field: String,
        /// Value found
        value: f32,
    },

    /// A value that must be zero or greater is negative or NaN.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Dotted path of the offending field
        field: String,
        /// Value found
        value: f32,
    },

    /// A value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Dotted path of the offending field
        field: String,
        /// Value found
        value: f32,
    },

    /// A ratio is outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Dotted path of the offending field
        field: String,
        /// Value found
        value: f32,
    },

    /// A spawn point is not a finite coordinate.
    #[error("{what} spawn point ({x}, {y}) is not finite")]
    InvalidSpawn {
        /// Which spawn failed (e.g. `"player"`, `"enemy 2"`)
        what: String,
        /// Spawn x
        x: f32,
        /// Spawn y
        y: f32,
    },
}

/// Convenience alias for validation results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fails unless `value` is finite and `> 0`.
pub(crate) fn ensure_positive(field: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive {
            field: field.to_owned(),
            value,
        })
    }
}

/// Fails unless `value` is finite.
pub(crate) fn ensure_finite(field: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite {
            field: field.to_owned(),
            value,
        })
    }
}

/// Fails unless `value` is finite and `>= 0`.
pub(crate) fn ensure_non_negative(field: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative {
            field: field.to_owned(),
            value,
        })
    }
}

/// Fails unless `value` lies in `[0, 1]`.
pub(crate) fn ensure_unit(field: &str, value: f32) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange {
            field: field.to_owned(),
            value,
        })
    }
}
