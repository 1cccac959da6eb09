// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

/// Errors raised while building a skip list. Once constructed, no operation
/// on the list can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("max level must be in [1, {limit}], got {max_level}")]
    InvalidMaxLevel { max_level: usize, limit: usize },
    #[error("promotion probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
}

#[cfg(test)]
mod tests {
    use crate::errs::Error;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMaxLevel {
            max_level: 0,
            limit: 64,
        };
        assert_eq!(err.to_string(), "max level must be in [1, 64], got 0");

        let err = Error::InvalidProbability(1.5);
        assert_eq!(
            err.to_string(),
            "promotion probability must be in (0, 1), got 1.5"
        );
    }
}
