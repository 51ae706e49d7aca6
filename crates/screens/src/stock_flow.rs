//! Stock mutation flow.
//!
//! One submission runs Validating -> Submitting -> (Success | Failed) as the
//! body of a single async function; the modal is back at Idle when it
//! returns. Exactly one gateway call is issued per accepted submission, and
//! a zero adjustment short-circuits before any call.

use thiserror::Error;
use tracing::instrument;

use almacen_core::{StockOperation, StockValueError};

use crate::gateway::StockGateway;

/// Which input the stock modal is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEntryMode {
    /// Absolute value: the input is the new stock.
    Set,
    /// Signed delta: positive adds, negative removes, zero does nothing.
    Adjust,
}

/// One submission from the stock modal.
#[derive(Debug, Clone)]
pub struct StockChangeForm<'a> {
    pub mode: StockEntryMode,
    /// Raw text from the input field.
    pub raw_value: &'a str,
    pub product_id: i64,
    /// Stock currently displayed for the product; basis for the local hint.
    pub previous_stock: i64,
    pub user_id: i64,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFlowOutcome {
    /// The mutation was submitted. `resulting_stock` is a locally computed
    /// display hint; the caller re-fetches for authoritative state.
    Applied { resulting_stock: i64 },
    /// Zero adjustment: nothing submitted, stock unchanged.
    NoOp,
}

/// Why a submission was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockFlowError {
    /// The input did not parse as a whole number.
    #[error("not a number: {0}")]
    InvalidNumber(String),

    /// Absolute set with a negative value.
    #[error("stock cannot be set to a negative value: {0}")]
    NegativeSet(i64),

    /// A whole number, but outside the range a stock change can carry.
    #[error("value out of range: {0}")]
    OutOfRange(i64),

    /// The gateway call failed; the message follows the server-message ->
    /// transport-message -> generic fallback chain.
    #[error("{0}")]
    Gateway(String),
}

impl From<StockValueError> for StockFlowError {
    fn from(e: StockValueError) -> Self {
        match e {
            StockValueError::NegativeSet(v) => Self::NegativeSet(v),
            StockValueError::MagnitudeOverflow(v) => Self::OutOfRange(v),
        }
    }
}

/// Validate and submit one stock change.
///
/// # Errors
///
/// Returns a validation error before any gateway call, or
/// [`StockFlowError::Gateway`] if the backend rejects the mutation. Either
/// way the displayed stock is untouched on error.
#[instrument(skip(gateway, form), fields(product_id = %form.product_id))]
pub async fn submit_stock_change<G: StockGateway>(
    gateway: &G,
    form: &StockChangeForm<'_>,
) -> Result<StockFlowOutcome, StockFlowError> {
    let value: i64 = form
        .raw_value
        .trim()
        .parse()
        .map_err(|_| StockFlowError::InvalidNumber(form.raw_value.to_string()))?;

    let op = match form.mode {
        StockEntryMode::Set => StockOperation::set(form.product_id, value, form.user_id)?,
        StockEntryMode::Adjust => {
            match StockOperation::adjust(form.product_id, value, form.user_id)? {
                Some(op) => op,
                None => return Ok(StockFlowOutcome::NoOp),
            }
        }
    };

    gateway
        .apply_stock_operation(&op)
        .await
        .map_err(|e| StockFlowError::Gateway(e.user_message()))?;

    Ok(StockFlowOutcome::Applied {
        resulting_stock: op.resulting_stock(form.previous_stock),
    })
}
