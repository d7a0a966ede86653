// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 integer conversion and wildcard/range/CIDR pattern expansion.

mod codec;
mod expander;
mod network;
mod strings;
mod structs;
mod validator;

use std::{error, fmt, num::ParseIntError};
use strings::*;

pub use codec::{from_int, int_to_octets, octets_to_int, to_int, try_from_int};
pub use expander::{AddressIter, Expansion};
pub use network::{
    create_address, create_network, ExpandOptions, Network, NetworkBuilder, RangePolicy,
};
pub use structs::{Address, Octet, Pattern, Strategy};
pub use validator::{is_valid, validate};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const MIN_PREFIX: u8 = 1;
pub(crate) const MAX_COLLECT_SIZE: usize = 65536; // default max number of addresses collected eagerly

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// pattern shape does not match the grammar
    InvalidSyntax(String),
    /// octet, range endpoint or integer outside its domain
    OutOfRange(i64),
    /// CIDR prefix missing, non-numeric or outside `1..=32`
    InvalidPrefix(String),
    /// defensive only: digit-checked tokens never fail to parse
    Parse { val: String, source: ParseIntError },
    /// hyphen range `beg-end` with beg > end (strict range policy only)
    RangeOrder(u8, u8),
    RangeTooLarge(u64),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidSyntax(s) => {
                write!(f, "{ERR_SYNTAX}: '{s}'")
            }
            AddressError::OutOfRange(val) => {
                write!(f, "{ERR_OUT_OF_RANGE}: {val}")
            }
            AddressError::InvalidPrefix(pre) => {
                write!(f, "{ERR_PREFIX}: '{pre}'")
            }
            AddressError::Parse { val, source } => {
                write!(f, "{ERR_PARSE}: '{val}': {source}")
            }
            AddressError::RangeOrder(beg, end) => {
                write!(f, "{ERR_RNG_ORDER} ({beg} > {end})")
            }
            AddressError::RangeTooLarge(size) => {
                write!(f, "{ERR_RNG_TOOLARGE}: {size}")
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AddressError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let e = AddressError::OutOfRange(300);
        assert_eq!(e.to_string(), format!("{ERR_OUT_OF_RANGE}: 300"));
        let e = AddressError::RangeOrder(5, 3);
        assert_eq!(e.to_string(), format!("{ERR_RNG_ORDER} (5 > 3)"));
    }

    #[test]
    fn test_parse_source() {
        let source = "x".parse::<u8>().unwrap_err();
        let e = AddressError::Parse { val: "x".into(), source };
        assert!(e.source().is_some());
        assert!(AddressError::InvalidPrefix("0".into()).source().is_none());
    }
}
