// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, AddressError};
use std::num::IntErrorKind;

/**
Convert a dotted-quad IPv4 address to its 32-bit integer value.

Octet `i` (0-indexed, left to right) contributes `octet[i] << (8 * (3 - i))`.
Only the strict `a.b.c.d` form is accepted; patterns are rejected.

### Errors
- [AddressError::InvalidSyntax] if the string is not 4 numeric fields
- [AddressError::OutOfRange] if any octet is > 255
*/
pub fn to_int(dotted_quad: impl AsRef<str>) -> Result<u32, AddressError> {
    let s: &str = dotted_quad.as_ref();
    let fields: Vec<&str> = s.split(DOT).collect();
    if fields.len() != 4 {
        return Err(AddressError::InvalidSyntax(s.into()));
    }

    let mut octets: [u8; 4] = [0; 4];
    for (i, field) in fields.iter().enumerate() {
        if field.len() > 3 {
            return Err(AddressError::InvalidSyntax(s.into()));
        }
        octets[i] = parse_octet(field).map_err(|e| match e {
            AddressError::InvalidSyntax(_) => AddressError::InvalidSyntax(s.into()),
            other => other,
        })?;
    }
    Ok(octets_to_int(octets))
}

/// Convert a 32-bit integer to its dotted-quad string, most significant octet first.
pub fn from_int(value: u32) -> String {
    let [a, b, c, d] = int_to_octets(value);
    format!("{a}.{b}.{c}.{d}")
}

/**
Like [from_int], but for callers holding a wider signed integer.

Values outside `0..=u32::MAX` are rejected with [AddressError::OutOfRange]
instead of being truncated.
*/
pub fn try_from_int(value: i64) -> Result<String, AddressError> {
    u32::try_from(value)
        .map(from_int)
        .map_err(|_| AddressError::OutOfRange(value))
}

#[inline]
pub fn octets_to_int(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

#[inline]
pub fn int_to_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/**
Parse one decimal octet field (ASCII digits, value `0..=255`).

Leading zeros are fine (`0010` is 10); the value decides, not the length.
Numbers too large for a [u64] saturate and are reported as out of range.
*/
pub(crate) fn parse_octet(field: &str) -> Result<u8, AddressError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidSyntax(field.into()));
    }
    let val: u64 = match field.parse::<u64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(source) => {
            return Err(AddressError::Parse {
                val: field.into(),
                source,
            })
        }
    };
    u8::try_from(val)
        .map_err(|_| AddressError::OutOfRange(i64::try_from(val).unwrap_or(i64::MAX)))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const LOOPBACK: &str = "127.0.0.1";
    const LOOPBACK_INT: u32 = 0x7F00_0001;
    const PRIVATE: &str = "192.168.1.10";
    const PRIVATE_INT: u32 = 3232235786;

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(LOOPBACK).unwrap(), LOOPBACK_INT);
        assert_eq!(to_int(PRIVATE).unwrap(), PRIVATE_INT);
        assert_eq!(to_int("0.0.0.0").unwrap(), 0);
        assert_eq!(to_int("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(from_int(LOOPBACK_INT), LOOPBACK);
        assert_eq!(from_int(PRIVATE_INT), PRIVATE);
        assert_eq!(from_int(0), "0.0.0.0");
        assert_eq!(from_int(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_leading_zeros_accepted() {
        // non-canonical input parses, but does not round-trip textually
        assert_eq!(to_int("010.001.000.007").unwrap(), to_int("10.1.0.7").unwrap());
        assert_eq!(from_int(to_int("010.001.000.007").unwrap()), "10.1.0.7");
    }

    #[test]
    fn test_int_roundtrip_sampled() {
        // stride is odd and coprime with 2^32, so it touches every octet value
        let mut n: u64 = 0;
        while n <= u32::MAX as u64 {
            let v: u32 = n as u32;
            assert_eq!(to_int(from_int(v)).unwrap(), v);
            n += 1_048_573;
        }
        for v in [0u32, 1, 255, 256, 65535, 65536, u32::MAX - 1, u32::MAX] {
            assert_eq!(to_int(from_int(v)).unwrap(), v);
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_string_roundtrip() {
        let tests: [&str; 6] = [
            "0.0.0.0", "1.2.3.4", "10.0.0.255",
            "172.16.254.1", "224.0.0.251", "255.255.255.255",
        ];
        for s in tests {
            assert_eq!(from_int(to_int(s).unwrap()), s, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(try_from_int(LOOPBACK_INT as i64).unwrap(), LOOPBACK);
        assert_eq!(try_from_int(-1), Err(AddressError::OutOfRange(-1)));
        assert_eq!(
            try_from_int(u32::MAX as i64 + 1),
            Err(AddressError::OutOfRange(u32::MAX as i64 + 1))
        );
    }

    #[rustfmt::skip]
    #[test]
    fn test_parse_octet_by_value() {
        assert_eq!(parse_octet("0"),     Ok(0));
        assert_eq!(parse_octet("0010"),  Ok(10));
        assert_eq!(parse_octet("00255"), Ok(255));
        assert_eq!(parse_octet("256"),   Err(AddressError::OutOfRange(256)));
        assert_eq!(parse_octet("1000"),  Err(AddressError::OutOfRange(1000)));
        assert_eq!(parse_octet("99999999999999999999999"), Err(AddressError::OutOfRange(i64::MAX)));
        assert_eq!(parse_octet(""),      Err(AddressError::InvalidSyntax("".into())));
        assert_eq!(parse_octet("1a"),    Err(AddressError::InvalidSyntax("1a".into())));
    }

    #[rustfmt::skip]
    #[test]
    fn test_to_int_errors() {
        assert_eq!(to_int("10.300.1.1"),  Err(AddressError::OutOfRange(300)));
        assert_eq!(to_int("10.0.0"),      Err(AddressError::InvalidSyntax("10.0.0".into())));
        assert_eq!(to_int("10.0.0.1.5"),  Err(AddressError::InvalidSyntax("10.0.0.1.5".into())));
        assert_eq!(to_int("10.0.x.1"),    Err(AddressError::InvalidSyntax("10.0.x.1".into())));
        assert_eq!(to_int("10.0..1"),     Err(AddressError::InvalidSyntax("10.0..1".into())));
        assert_eq!(to_int("10.0.0.1000"), Err(AddressError::InvalidSyntax("10.0.0.1000".into())));
        assert_eq!(to_int("10.0.0.*"),    Err(AddressError::InvalidSyntax("10.0.0.*".into())));
        assert_eq!(to_int(""),            Err(AddressError::InvalidSyntax("".into())));
    }
}
