//! Table sizing policy.

use crate::error::IndexError;

/// Bucket count of a freshly constructed table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Resize when `size / capacity` exceeds this before an insert.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl TableConfig {
    pub fn new(initial_capacity: usize, load_factor: f64) -> Self {
        Self {
            initial_capacity,
            load_factor,
        }
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.initial_capacity == 0 {
            return Err(IndexError::invalid_config(
                "initial capacity must be at least 1",
            ));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(IndexError::invalid_config(format!(
                "load factor must be a positive finite number (got {})",
                self.load_factor
            )));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR)
    }
}
