//! Offset/limit pagination for the event listing.

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 100;

/// Drivers bind LIMIT/OFFSET as signed 64-bit integers.
const MAX_BOUND: u64 = i64::MAX as u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// rows to skip from the newest end
    pub skip: u64,
    /// maximum rows returned, at least 1
    pub limit: u64,
}

impl ListParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    pub fn validate(self) -> Result<Self, ServiceError> {
        if self.limit == 0 {
            return Err(ServiceError::Validation("limit must be a positive integer".into()));
        }
        Ok(self)
    }

    /// Clamp to what the driver can bind. No other upper bound applies.
    pub fn bounded(self) -> (u64, u64) {
        (self.skip.min(MAX_BOUND), self.limit.min(MAX_BOUND))
    }
}

impl Default for ListParams {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
