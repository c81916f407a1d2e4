/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Registry;

pub const LISTING_HEADER: &str = "Accepted Units";
pub const NOT_FOUND: &str = "Conversion Not Found";

pub(crate) fn format_line(
    value: f64,
    from_name: &str,
    result: f64,
    to_name: &str,
) -> String {
    format!("{:.1} {} = {:.1} {}", value, from_name, result, to_name)
}

/// Outcome of a single invocation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    Listing(Vec<String>),
    Converted {
        value: f64,
        from: String,
        from_name: String,
        to: String,
        to_name: String,
        result: f64,
    },
    NotFound {
        from: String,
        to: String,
    },
}

impl Report {
    pub fn listing(registry: &Registry) -> Self {
        Report::Listing(registry.listing())
    }

    pub fn conversion(
        registry: &Registry,
        value: f64,
        from: &str,
        to: &str,
    ) -> Self {
        match registry.convert(value, from, to) {
            Some(result) => Report::Converted {
                value,
                from: from.to_string(),
                from_name: registry.unit_name(from).to_string(),
                to: to.to_string(),
                to_name: registry.unit_name(to).to_string(),
                result,
            },
            None => Report::NotFound {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Report::NotFound { .. })
    }
}

/// Renders the exact stdout text, one line per entry, without a
/// trailing newline.
impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Report::Listing(units) => {
                write!(f, "{}", LISTING_HEADER)?;
                units.iter().try_for_each(|unit| write!(f, "\n{}", unit))
            }
            Report::Converted {
                value,
                from_name,
                result,
                to_name,
                ..
            } => write!(
                f,
                "{}",
                format_line(*value, from_name, *result, to_name)
            ),
            Report::NotFound { .. } => write!(f, "{}", NOT_FOUND),
        }
    }
}
