// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::{parse_octet, to_int},
    strings::*,
    structs::{Octet, Pattern},
    AddressError, IPV4_BITS, MIN_PREFIX,
};
use ipnet::Ipv4Net;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

// Compiled once per program execution. `\d` would also match non-ASCII digits.
lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").unwrap();
    static ref FIELD_RE: Regex =
        Regex::new(r"^(?:(?P<lit>[0-9]+)|(?P<star>\*)|(?P<beg>[0-9]+)-(?P<end>[0-9]+))$").unwrap();
}

/**
Validate an IPv4 address or pattern and return its typed form.

Accepted shapes:
- Single address: `10.0.0.1`
- Wildcards: `192.168.*.*`
- Per-octet ranges: `10.0.1-20.5`
- Mixed: `10.1-2.*.1`
- CIDR on a literal address: `10.0.0.0/24` (prefix `1..=32`)

Range direction is *not* checked here: `10.0.0.5-3` validates to an empty
range. Whether that is acceptable is up to [NetworkBuilder](super::NetworkBuilder).

### Errors
- [AddressError::InvalidSyntax] for anything outside the grammar
- [AddressError::InvalidPrefix] for a bad CIDR suffix
- [AddressError::OutOfRange] for an octet or range endpoint > 255
*/
pub fn validate(pattern: impl AsRef<str>) -> Result<Pattern, AddressError> {
    let s: &str = pattern.as_ref();

    if !s.contains([DASH, STAR, SLASH]) && !ADDRESS_RE.is_match(s) {
        return Err(AddressError::InvalidSyntax(s.into()));
    }

    if let Some((addr, prefix)) = s.rsplit_once(SLASH) {
        return validate_cidr(s, addr, prefix);
    }

    let fields: Vec<&str> = s.split(DOT).collect();
    if fields.len() != 4 {
        return Err(AddressError::InvalidSyntax(format!("{s} ({ERR_FIELD_COUNT})")));
    }

    let mut octets: [Octet; 4] = [Octet::Wildcard; 4];
    for (i, field) in fields.iter().enumerate() {
        octets[i] = parse_field(s, field)?;
    }
    Ok(Pattern::Octets(octets))
}

/// Boolean form of [validate].
pub fn is_valid(pattern: impl AsRef<str>) -> bool {
    validate(pattern).is_ok()
}

/* ---------------------------------- */

fn validate_cidr(s: &str, addr: &str, prefix: &str) -> Result<Pattern, AddressError> {
    let prefix: u8 = parse_prefix(prefix)?;

    if addr.contains(SLASH) {
        return Err(AddressError::InvalidSyntax(format!("{s} ({ERR_MULTI_SLASH})")));
    }
    if addr.contains([DASH, STAR]) {
        return Err(AddressError::InvalidSyntax(format!("{s} ({ERR_CIDR_MIXED})")));
    }

    let ip: Ipv4Addr = Ipv4Addr::from(to_int(addr)?);
    let net: Ipv4Net =
        Ipv4Net::new(ip, prefix).map_err(|_| AddressError::InvalidPrefix(prefix.to_string()))?;
    Ok(Pattern::Cidr(net))
}

fn parse_prefix(prefix: &str) -> Result<u8, AddressError> {
    let invalid = || AddressError::InvalidPrefix(prefix.into());

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match prefix.parse::<u8>() {
        Ok(p) if (MIN_PREFIX..=IPV4_BITS).contains(&p) => Ok(p),
        _ => Err(invalid()),
    }
}

fn parse_field(s: &str, field: &str) -> Result<Octet, AddressError> {
    let caps = FIELD_RE
        .captures(field)
        .ok_or_else(|| AddressError::InvalidSyntax(format!("{s} ({ERR_FIELD} '{field}')")))?;

    if let Some(lit) = caps.name("lit") {
        return Ok(Octet::Literal(parse_octet(lit.as_str())?));
    }
    if caps.name("star").is_some() {
        return Ok(Octet::Wildcard);
    }
    match (caps.name("beg"), caps.name("end")) {
        (Some(beg), Some(end)) => Ok(Octet::Range(
            parse_octet(beg.as_str())?,
            parse_octet(end.as_str())?,
        )),
        _ => Err(AddressError::InvalidSyntax(format!("{s} ({ERR_FIELD} '{field}')"))),
    }
}

/* -------------------------------------------------------------------------- */
