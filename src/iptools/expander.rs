// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::octets_to_int,
    structs::{Address, Octet, Pattern, Strategy},
};
use std::iter::FusedIterator;
use tracing::trace;

/**
Lazy expansion of a validated [Pattern] into concrete [Address]es.

Nothing is enumerated up front: [Expansion::iter] hands out a fresh
iterator every time, so the sequence can be restarted at will and memory
use is bounded by what the caller keeps.

Ordering:
- wildcards and hyphen ranges: cartesian product, leftmost token slowest,
  values ascending. When both kinds are present, every hyphen range varies
  slower than every wildcard.
- CIDR: network address to broadcast address, ascending, both included.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Expansion {
    pattern: Pattern,
}

impl Expansion {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn strategy(&self) -> Strategy {
        self.pattern.strategy()
    }

    /// Total number of addresses, computed without enumerating them.
    pub fn len(&self) -> u64 {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> AddressIter {
        AddressIter::new(&self.pattern)
    }
}

impl IntoIterator for Expansion {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Expansion {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* ---------------------------------- */

/// Iterator over the addresses of an [Expansion].
#[derive(Clone, Debug)]
pub struct AddressIter {
    inner: Inner,
}

#[derive(Clone, Debug)]
enum Inner {
    /// contiguous block of integers: single address or CIDR
    Block(BlockIter),
    /// wildcard and/or hyphen tokens
    Product(OctetProduct),
}

impl AddressIter {
    fn new(pattern: &Pattern) -> Self {
        let strategy: Strategy = pattern.strategy();
        trace!("expanding '{pattern}' with {strategy:?}");

        let inner: Inner = match (pattern, strategy) {
            (Pattern::Cidr(net), _) => Inner::Block(BlockIter::new(
                u32::from(net.network()),
                u32::from(net.broadcast()),
            )),
            (Pattern::Octets(octets), Strategy::Literal) => {
                let n: u32 = octets_to_int(octets.map(|o| o.span().0));
                Inner::Block(BlockIter::new(n, n))
            }
            (Pattern::Octets(octets), Strategy::Wildcard) => {
                let order: Vec<usize> = positions(octets, is_wildcard);
                Inner::Product(OctetProduct::new(octets, order))
            }
            (Pattern::Octets(octets), Strategy::Hyphen) => {
                let order: Vec<usize> = positions(octets, is_range);
                Inner::Product(OctetProduct::new(octets, order))
            }
            (Pattern::Octets(octets), _) => {
                // hyphen ranges outermost, wildcards innermost
                let mut order: Vec<usize> = positions(octets, is_range);
                order.extend(positions(octets, is_wildcard));
                Inner::Product(OctetProduct::new(octets, order))
            }
        };
        Self { inner }
    }

    /// Number of addresses not yet produced.
    pub fn remaining(&self) -> u64 {
        match &self.inner {
            Inner::Block(b) => b.remaining(),
            Inner::Product(p) => p.remaining,
        }
    }
}

impl Iterator for AddressIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Block(b) => b.next(),
            Inner::Product(p) => p.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem: u64 = self.remaining();
        (usize::try_from(rem).unwrap_or(usize::MAX), usize::try_from(rem).ok())
    }
}

impl FusedIterator for AddressIter {}

#[inline]
fn is_wildcard(o: &Octet) -> bool {
    matches!(o, Octet::Wildcard)
}

#[inline]
fn is_range(o: &Octet) -> bool {
    matches!(o, Octet::Range(..))
}

/// Indices of the octets matching `pred`, left to right.
fn positions(octets: &[Octet; 4], pred: fn(&Octet) -> bool) -> Vec<usize> {
    (0..octets.len()).filter(|&i| pred(&octets[i])).collect()
}

/* ---------------------------------- */

/// Ascending walk over an inclusive block of 32-bit integers.
#[derive(Clone, Debug)]
struct BlockIter {
    /// u64 so that stepping past `u32::MAX` terminates instead of wrapping
    current: u64,
    end: u64,
}

impl BlockIter {
    fn new(beg: u32, end: u32) -> Self {
        debug_assert!(beg <= end, "BlockIter: beginning cannot be larger than end");
        Self {
            current: beg as u64,
            end: end as u64,
        }
    }

    fn remaining(&self) -> u64 {
        (self.end + 1).saturating_sub(self.current)
    }
}

impl Iterator for BlockIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }
        let addr: Address = Address::from(self.current as u32);
        self.current += 1;
        Some(addr)
    }
}

/* ---------------------------------- */

/**
Odometer over the four octet positions.

`order` lists the varying positions from slowest to fastest. Positions not
in `order` are fixed at their single value. The last position in `order`
ticks on every step and carries into the one before it on wrap-around.
*/
#[derive(Clone, Debug)]
struct OctetProduct {
    lo: [u8; 4],
    hi: [u8; 4],
    order: Vec<usize>,
    cur: [u8; 4],
    remaining: u64,
}

impl OctetProduct {
    fn new(octets: &[Octet; 4], order: Vec<usize>) -> Self {
        let lo: [u8; 4] = octets.map(|o| o.span().0);
        let hi: [u8; 4] = octets.map(|o| o.span().1);
        Self {
            lo,
            hi,
            order,
            cur: lo,
            // zero when any range is reversed
            remaining: octets.iter().map(Octet::len).product(),
        }
    }

    fn advance(&mut self) {
        for &pos in self.order.iter().rev() {
            if self.cur[pos] < self.hi[pos] {
                self.cur[pos] += 1;
                return;
            }
            self.cur[pos] = self.lo[pos];
        }
    }
}

impl Iterator for OctetProduct {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let addr: Address = Address::from_octets(self.cur);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(addr)
    }
}

/* -------------------------------------------------------------------------- */
