/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use log::{debug, trace};

use crate::report::format_line;
use crate::Conversion;

/// Hand-authored conversion table.
///
/// Lookup is a two-level exact match on the input and output unit
/// codes. There is no case folding, no aliasing and no chaining of
/// conversions: every supported ordered pair has its own entry.
///
/// The display table maps unit codes to human-readable names. A code
/// may appear in the conversion table without a display name, in which
/// case it renders as an empty string.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    names: HashMap<String, String>,
    conversions: HashMap<String, HashMap<String, Conversion>>,
}

#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn resolve(&self, from: &str, to: &str) -> Option<Conversion> {
        let conversion = self
            .conversions
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied();
        match &conversion {
            Some(c) => debug!("resolved {} -> {}: {}", from, to, c),
            None => debug!("no conversion from {} to {}", from, to),
        }
        conversion
    }

    pub fn convert(&self, value: f64, from: &str, to: &str) -> Option<f64> {
        self.resolve(from, to).map(|c| c.apply(value))
    }

    pub fn unit_name(&self, code: &str) -> &str {
        self.names.get(code).map_or("", String::as_str)
    }

    pub fn contains_unit(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn units(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// Accepted units as `"<code> (<name>)"`, sorted.
    pub fn listing(&self) -> Vec<String> {
        let mut listing = self
            .units()
            .map(|(code, name)| format!("{} ({})", code, name))
            .collect::<Vec<_>>();
        listing.sort();
        listing
    }

    pub fn format_conversion(
        &self,
        value: f64,
        from: &str,
        to: &str,
        result: f64,
    ) -> String {
        format_line(
            value,
            self.unit_name(from),
            result,
            self.unit_name(to),
        )
    }
}

impl RegistryBuilder {
    /// Register a unit with its display name and identity conversion.
    pub fn unit(mut self, code: &str, name: &str) -> Self {
        trace!("registering unit {} ({})", code, name);
        self.registry
            .names
            .insert(code.to_string(), name.to_string());
        self.conversion(code, code, Conversion::Identity)
    }

    pub fn conversion(
        mut self,
        from: &str,
        to: &str,
        conversion: Conversion,
    ) -> Self {
        self.registry
            .conversions
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), conversion);
        self
    }

    /// Register every `(to, factor)` pair as a scaling from `from`.
    pub fn scales(mut self, from: &str, factors: &[(&str, f64)]) -> Self {
        for (to, factor) in factors {
            self = self.conversion(from, to, Conversion::scale(*factor));
        }
        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}
