// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    expander::{AddressIter, Expansion},
    structs::{Address, Pattern, Strategy},
    validator::validate,
    AddressError, MAX_COLLECT_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What to do with a hyphen range written backwards, e.g. `10.0.0.5-3`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// the range is empty and so is the whole expansion
    #[default]
    Empty,
    /// fail with [AddressError::RangeOrder]
    Reject,
}

/// Options for building [Network]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    pub reversed_ranges: RangePolicy,
    /// upper bound for [Network::collect_addresses] and [Network::to_strings]
    pub max_collect: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            reversed_ranges: RangePolicy::default(),
            max_collect: MAX_COLLECT_SIZE,
        }
    }
}

/* ---------------------------------- */

/// Builds [Network]s and [Address]es from strings according to [ExpandOptions].
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkBuilder {
    opts: ExpandOptions,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ExpandOptions) -> Self {
        Self { opts }
    }

    pub fn reversed_ranges(mut self, policy: RangePolicy) -> Self {
        self.opts.reversed_ranges = policy;
        self
    }

    pub fn max_collect(mut self, max: usize) -> Self {
        self.opts.max_collect = max;
        self
    }

    pub fn options(&self) -> &ExpandOptions {
        &self.opts
    }

    /**
    Validate `pattern` and wrap its (lazy) expansion in a [Network].

    Nothing is enumerated here, so this is cheap even for `*.*.*.*`.
    On failure no partial result exists.
    */
    pub fn create_network(&self, pattern: impl AsRef<str>) -> Result<Network, AddressError> {
        let raw: &str = pattern.as_ref();
        let parsed: Pattern = validate(raw).map_err(|e| {
            debug!("rejected pattern '{raw}': {e}");
            e
        })?;

        if let Some((beg, end)) = parsed.reversed_range() {
            if self.opts.reversed_ranges == RangePolicy::Reject {
                debug!("rejected pattern '{raw}': reversed range {beg}-{end}");
                return Err(AddressError::RangeOrder(beg, end));
            }
        }

        let expansion: Expansion = Expansion::new(parsed);
        debug!(
            "network '{raw}': {:?}, {} addresses",
            expansion.strategy(),
            expansion.len()
        );
        Ok(Network {
            pattern: raw.to_string(),
            expansion,
            max_collect: self.opts.max_collect,
        })
    }

    /// Strict single-address path: `*`, `-` and `/` are rejected.
    pub fn create_address(&self, pattern: impl AsRef<str>) -> Result<Address, AddressError> {
        let raw: &str = pattern.as_ref();
        raw.parse::<Address>().map_err(|e| {
            debug!("rejected address '{raw}': {e}");
            e
        })
    }
}

/// [NetworkBuilder::create_network] with default options.
pub fn create_network(pattern: impl AsRef<str>) -> Result<Network, AddressError> {
    NetworkBuilder::new().create_network(pattern)
}

/// [NetworkBuilder::create_address] with default options.
pub fn create_address(pattern: impl AsRef<str>) -> Result<Address, AddressError> {
    NetworkBuilder::new().create_address(pattern)
}

/* -------------------------------------------------------------------------- */

/// A pattern string together with the addresses it denotes. Immutable.
#[derive(Clone, Debug)]
pub struct Network {
    pattern: String,
    expansion: Expansion,
    max_collect: usize,
}

// `max_collect` is a builder option, not part of the network's identity.
impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.expansion == other.expansion
    }
}

impl Eq for Network {}

impl Network {
    /// The pattern exactly as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn strategy(&self) -> Strategy {
        self.expansion.strategy()
    }

    pub fn len(&self) -> u64 {
        self.expansion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansion.is_empty()
    }

    /// Membership test, no enumeration involved.
    pub fn contains(&self, addr: Address) -> bool {
        !self.is_empty() && self.expansion.pattern().contains(addr)
    }

    /// Fresh lazy iterator over all addresses, starting from the first one.
    pub fn addresses(&self) -> AddressIter {
        self.expansion.iter()
    }

    /**
    Collect all addresses into a [Vec].

    Refuses with [AddressError::RangeTooLarge] when the network holds more
    than `max_collect` addresses. Use [Network::addresses] for big networks.
    */
    pub fn collect_addresses(&self) -> Result<Vec<Address>, AddressError> {
        self.check_collect()?;
        Ok(self.addresses().collect())
    }

    /// Like [Network::collect_addresses], but as dotted-quad strings.
    pub fn to_strings(&self) -> Result<Vec<String>, AddressError> {
        self.check_collect()?;
        Ok(self.addresses().map(|a| a.to_string()).collect())
    }

    fn check_collect(&self) -> Result<(), AddressError> {
        let len: u64 = self.len();
        if len > self.max_collect as u64 {
            return Err(AddressError::RangeTooLarge(len));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/* -------------------------------------------------------------------------- */
