/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A one-way numeric transform between two units.
///
/// Conversions are stored in the registry per ordered unit pair. The
/// inverse of a conversion is never derived: `a -> b` and `b -> a` are
/// authored separately, each with its own constant.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub enum Conversion {
    Identity,
    Scale(f64),
    Divide(f64),
    /// `(n + shift) * scale + offset`
    Affine { shift: f64, scale: f64, offset: f64 },
}

impl Conversion {
    pub const fn scale(factor: f64) -> Self {
        Conversion::Scale(factor)
    }

    pub const fn divide(divisor: f64) -> Self {
        Conversion::Divide(divisor)
    }

    pub const fn offset(offset: f64) -> Self {
        Conversion::Affine {
            shift: 0.0,
            scale: 1.0,
            offset,
        }
    }

    pub const fn affine(shift: f64, scale: f64, offset: f64) -> Self {
        Conversion::Affine {
            shift,
            scale,
            offset,
        }
    }

    pub fn apply(&self, n: f64) -> f64 {
        match self {
            Conversion::Identity => n * 1.0,
            Conversion::Scale(k) => n * k,
            Conversion::Divide(k) => n / k,
            Conversion::Affine {
                shift,
                scale,
                offset,
            } => (n + shift) * scale + offset,
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Conversion::Identity => write!(f, "n"),
            Conversion::Scale(k) => write!(f, "n * {}", k),
            Conversion::Divide(k) => write!(f, "n / {}", k),
            Conversion::Affine {
                shift,
                scale,
                offset,
            } => write!(f, "(n + {}) * {} + {}", shift, scale, offset),
        }
    }
}
