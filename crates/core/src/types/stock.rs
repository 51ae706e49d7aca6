//! Stock operations.
//!
//! A [`StockOperation`] is created transiently per submission and discarded
//! after the gateway call resolves. The magnitude is always non-negative;
//! direction lives in the mode.

use thiserror::Error;

/// How a stock change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockMode {
    /// Overwrite the stock with an absolute value.
    Set,
    /// Add the magnitude to the current stock.
    Increment,
    /// Subtract the magnitude from the current stock.
    Decrement,
}

/// Errors constructing a stock operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockValueError {
    /// Absolute set with a negative value.
    #[error("stock cannot be set to a negative value: {0}")]
    NegativeSet(i64),

    /// Adjustment whose absolute value is not representable.
    #[error("adjustment out of range: {0}")]
    MagnitudeOverflow(i64),
}

/// One stock change to submit to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockOperation {
    pub mode: StockMode,
    /// Non-negative by construction.
    pub magnitude: i64,
    pub product_id: i64,
    pub user_id: i64,
}

impl StockOperation {
    /// Absolute set. `value` is the new stock and must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`StockValueError::NegativeSet`] for negative values.
    pub const fn set(product_id: i64, value: i64, user_id: i64) -> Result<Self, StockValueError> {
        if value < 0 {
            return Err(StockValueError::NegativeSet(value));
        }
        Ok(Self {
            mode: StockMode::Set,
            magnitude: value,
            product_id,
            user_id,
        })
    }

    /// Relative adjustment from a signed user input.
    ///
    /// Positive deltas increment, negative deltas decrement by the absolute
    /// value, and zero is a no-op - `Ok(None)` is returned and no operation
    /// should be submitted.
    ///
    /// # Errors
    ///
    /// Returns [`StockValueError::MagnitudeOverflow`] for `i64::MIN`, whose
    /// absolute value has no `i64` representation.
    pub const fn adjust(
        product_id: i64,
        delta: i64,
        user_id: i64,
    ) -> Result<Option<Self>, StockValueError> {
        if delta == 0 {
            return Ok(None);
        }
        let Some(magnitude) = delta.checked_abs() else {
            return Err(StockValueError::MagnitudeOverflow(delta));
        };
        let mode = if delta > 0 {
            StockMode::Increment
        } else {
            StockMode::Decrement
        };
        Ok(Some(Self {
            mode,
            magnitude,
            product_id,
            user_id,
        }))
    }

    /// Locally computed stock after this operation, given the stock shown
    /// before it.
    ///
    /// Display hint only - the server remains the source of truth and the
    /// caller is expected to re-fetch.
    #[must_use]
    pub const fn resulting_stock(&self, previous: i64) -> i64 {
        match self.mode {
            StockMode::Set => self.magnitude,
            StockMode::Increment => previous.saturating_add(self.magnitude),
            StockMode::Decrement => previous.saturating_sub(self.magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_negative() {
        assert_eq!(
            StockOperation::set(1, -3, 9),
            Err(StockValueError::NegativeSet(-3))
        );
    }

    #[test]
    fn test_set_resulting_stock_is_absolute() {
        let op = StockOperation::set(1, 150, 9).expect("valid set");
        assert_eq!(op.mode, StockMode::Set);
        assert_eq!(op.resulting_stock(40), 150);
    }

    #[test]
    fn test_positive_adjust_increments() {
        let op = StockOperation::adjust(1, 10, 9)
            .expect("in range")
            .expect("non-zero delta");
        assert_eq!(op.mode, StockMode::Increment);
        assert_eq!(op.magnitude, 10);
        assert_eq!(op.resulting_stock(40), 50);
    }

    #[test]
    fn test_negative_adjust_decrements_by_absolute_value() {
        let op = StockOperation::adjust(1, -5, 9)
            .expect("in range")
            .expect("non-zero delta");
        assert_eq!(op.mode, StockMode::Decrement);
        assert_eq!(op.magnitude, 5);
        assert_eq!(op.resulting_stock(40), 35);
    }

    #[test]
    fn test_zero_adjust_is_noop() {
        assert_eq!(StockOperation::adjust(1, 0, 9), Ok(None));
    }

    #[test]
    fn test_adjust_rejects_unrepresentable_magnitude() {
        // i64::MIN has no positive counterpart.
        assert_eq!(
            StockOperation::adjust(1, i64::MIN, 9),
            Err(StockValueError::MagnitudeOverflow(i64::MIN))
        );

        let op = StockOperation::adjust(1, i64::MIN + 1, 9)
            .expect("in range")
            .expect("non-zero delta");
        assert_eq!(op.magnitude, i64::MAX);
    }

    #[test]
    fn test_decrement_may_go_negative() {
        // No client-side guard: the server is the authority on stock floors.
        let op = StockOperation::adjust(1, -50, 9)
            .expect("in range")
            .expect("non-zero delta");
        assert_eq!(op.resulting_stock(40), -10);
    }
}
