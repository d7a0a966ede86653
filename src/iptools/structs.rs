// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::{from_int, octets_to_int, to_int},
    strings::*,
    validator::validate,
    AddressError, IPV4_BITS,
};
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// A single IPv4 address: four octets plus the equivalent 32-bit integer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Address {
    addr: Ipv4Addr,
    int: u32,
}

impl Address {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self::from_octets([a, b, c, d])
    }

    pub fn from_octets(octets: [u8; 4]) -> Self {
        Self {
            addr: Ipv4Addr::from(octets),
            int: octets_to_int(octets),
        }
    }

    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    /// Big-endian integer value of the address.
    pub fn to_int(&self) -> u32 {
        self.int
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.addr
    }
}

impl From<u32> for Address {
    fn from(int: u32) -> Self {
        Self {
            addr: Ipv4Addr::from(int),
            int,
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            addr,
            int: u32::from(addr),
        }
    }
}

impl From<Address> for u32 {
    fn from(a: Address) -> Self {
        a.int
    }
}

impl From<Address> for Ipv4Addr {
    fn from(a: Address) -> Self {
        a.addr
    }
}

impl From<Address> for String {
    fn from(a: Address) -> Self {
        a.to_string()
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&from_int(self.int))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Strict dotted-quad only; wildcard, range and CIDR tokens are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains([DASH, STAR, SLASH]) {
            return Err(AddressError::InvalidSyntax(format!("{s} ({ERR_NOT_ADDRESS})")));
        }
        Ok(Self::from(to_int(s)?))
    }
}

/* -------------------------------------------------------------------------- */

/// One octet position of a [Pattern].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Octet {
    Literal(u8),
    /// `*`, any of `0..=255`
    Wildcard,
    /// `beg-end`, inclusive. Empty when `beg > end`.
    Range(u8, u8),
}

impl Octet {
    /// Number of values this position can take.
    pub fn len(&self) -> u64 {
        match *self {
            Octet::Literal(_) => 1,
            Octet::Wildcard => 256,
            Octet::Range(beg, end) if beg <= end => (end - beg) as u64 + 1,
            Octet::Range(..) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive `(lowest, highest)` value of this position.
    pub(crate) fn span(&self) -> (u8, u8) {
        match *self {
            Octet::Literal(v) => (v, v),
            Octet::Wildcard => (u8::MIN, u8::MAX),
            Octet::Range(beg, end) => (beg, end),
        }
    }

    pub(crate) fn contains(&self, v: u8) -> bool {
        let (lo, hi) = self.span();
        lo <= v && v <= hi
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Octet::Literal(v) => write!(f, "{v}"),
            Octet::Wildcard => write!(f, "{STAR}"),
            Octet::Range(beg, end) => write!(f, "{beg}{DASH}{end}"),
        }
    }
}

/* ---------------------------------- */

/// How a [Pattern] gets expanded, decided purely by which tokens it contains.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// no tokens: the address itself
    Literal,
    Wildcard,
    Hyphen,
    /// hyphen ranges vary slowest, wildcards fastest
    WildcardHyphen,
    Cidr,
}

/// A validated IPv4 address pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    /// four octet positions, each literal, wildcard or range
    Octets([Octet; 4]),
    /// `a.b.c.d/prefix`; host bits are kept as written
    Cidr(Ipv4Net),
}

impl Pattern {
    pub fn strategy(&self) -> Strategy {
        match self {
            Pattern::Cidr(_) => Strategy::Cidr,
            Pattern::Octets(octets) => {
                let star: bool = octets.iter().any(|o| matches!(o, Octet::Wildcard));
                let dash: bool = octets.iter().any(|o| matches!(o, Octet::Range(..)));
                match (star, dash) {
                    (true, true) => Strategy::WildcardHyphen,
                    (true, false) => Strategy::Wildcard,
                    (false, true) => Strategy::Hyphen,
                    (false, false) => Strategy::Literal,
                }
            }
        }
    }

    /// Number of addresses the pattern denotes. At most 2^32.
    pub fn len(&self) -> u64 {
        match self {
            Pattern::Cidr(net) => 1u64 << (IPV4_BITS - net.prefix_len()),
            Pattern::Octets(octets) => octets.iter().map(Octet::len).product(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `addr` is one of the addresses this pattern expands to.
    pub fn contains(&self, addr: Address) -> bool {
        match self {
            Pattern::Cidr(net) => net.contains(&addr.ip()),
            Pattern::Octets(octets) => octets
                .iter()
                .zip(addr.octets())
                .all(|(o, v)| o.contains(v)),
        }
    }

    /// The first reversed hyphen range, if any, as `(beg, end)`.
    pub(crate) fn reversed_range(&self) -> Option<(u8, u8)> {
        match self {
            Pattern::Cidr(_) => None,
            Pattern::Octets(octets) => octets.iter().find_map(|o| match *o {
                Octet::Range(beg, end) if beg > end => Some((beg, end)),
                _ => None,
            }),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Cidr(net) => write!(f, "{net}"),
            Pattern::Octets([a, b, c, d]) => write!(f, "{a}{DOT}{b}{DOT}{c}{DOT}{d}"),
        }
    }
}

impl FromStr for Pattern {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ADDR: &str = "192.168.1.10";
    const TEST_INT: u32 = 3232235786;

    #[test]
    fn test_address_parse() {
        let a: Address = TEST_ADDR.parse().unwrap();
        assert_eq!(a.octets(), [192, 168, 1, 10]);
        assert_eq!(a.to_int(), TEST_INT);
        assert_eq!(a.ip(), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(a.to_string(), TEST_ADDR);
        assert_eq!(a, Address::from(TEST_INT));
        assert_eq!(a, Address::new(192, 168, 1, 10));
    }

    #[test]
    fn test_address_rejects_patterns() {
        for s in ["10.0.0.*", "10.0.0.1-3", "10.0.0.0/24"] {
            assert!(matches!(s.parse::<Address>(), Err(AddressError::InvalidSyntax(_))), "{s}");
        }
        assert_eq!("10.300.1.1".parse::<Address>(), Err(AddressError::OutOfRange(300)));
    }

    #[test]
    fn test_address_order() {
        let a: Address = "10.0.0.255".parse().unwrap();
        let b: Address = "10.0.1.0".parse().unwrap();
        assert!(a < b);
        assert_eq!(u32::from(b) - u32::from(a), 1);
    }

    #[test]
    fn test_address_serde() {
        let a: Address = TEST_ADDR.parse().unwrap();
        let json: String = serde_json::to_string(&a).unwrap();
        assert_eq!(json, format!("\"{TEST_ADDR}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Address>("\"10.0.0.256\"").is_err());
    }

    #[test]
    fn test_octet_len() {
        assert_eq!(Octet::Literal(7).len(), 1);
        assert_eq!(Octet::Wildcard.len(), 256);
        assert_eq!(Octet::Range(1, 3).len(), 3);
        assert_eq!(Octet::Range(0, 255).len(), 256);
        assert_eq!(Octet::Range(5, 3).len(), 0);
        assert!(Octet::Range(5, 3).is_empty());
    }

    #[rustfmt::skip]
    #[test]
    fn test_strategy() {
        let tests: Vec<(&str, Strategy)> = vec![
            ("10.0.0.1",       Strategy::Literal),
            ("10.0.0.*",       Strategy::Wildcard),
            ("10.0.0.1-3",     Strategy::Hyphen),
            ("10.1-2.*.1",     Strategy::WildcardHyphen),
            ("10.0.0.0/24",    Strategy::Cidr),
        ];
        for (s, strategy) in tests {
            let p: Pattern = s.parse().unwrap();
            assert_eq!(p.strategy(), strategy, "Failed: '{s}'");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_pattern_len() {
        let tests: Vec<(&str, u64)> = vec![
            ("10.0.0.1",       1),
            ("192.168.1.*",    256),
            ("10.0.0.1-3",     3),
            ("10.1-2.*.1",     512),
            ("192.168.0.0/30", 4),
            ("10.0.0.0/1",     1 << 31),
            ("*.*.*.*",        1 << 32),
            ("10.0.0.5-3",     0),
        ];
        for (s, len) in tests {
            let p: Pattern = s.parse().unwrap();
            assert_eq!(p.len(), len, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_pattern_display() {
        for s in ["10.0.0.1", "10.*.1-20.*", "192.168.0.7/30"] {
            assert_eq!(s.parse::<Pattern>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_pattern_contains() {
        let p: Pattern = "10.1-2.*.1".parse().unwrap();
        assert!(p.contains("10.2.77.1".parse().unwrap()));
        assert!(!p.contains("10.3.77.1".parse().unwrap()));
        assert!(!p.contains("10.1.77.2".parse().unwrap()));

        let p: Pattern = "192.168.0.9/30".parse().unwrap();
        assert!(p.contains("192.168.0.8".parse().unwrap()));
        assert!(p.contains("192.168.0.11".parse().unwrap()));
        assert!(!p.contains("192.168.0.12".parse().unwrap()));
    }
}
