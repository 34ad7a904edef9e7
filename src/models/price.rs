use std::fmt;

use serde::{Deserialize, Serialize};

/// Fare amount in paise.
///
/// Kept integral end to end; the table stores metres and the rate is one
/// paisa per metre, so no quote ever needs fractional arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    pub const fn paise(self) -> u64 {
        self.0
    }

    pub const fn rupees(self) -> u64 {
        self.0 / 100
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "₹{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
