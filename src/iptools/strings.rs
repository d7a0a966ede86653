// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: char = '.';
pub(crate) static DASH: char = '-';
pub(crate) static STAR: char = '*';
pub(crate) static SLASH: char = '/';

// mod.rs
pub(crate) static ERR_SYNTAX: &str = "invalid IPv4 address or pattern";
pub(crate) static ERR_OUT_OF_RANGE: &str = "value out of range";
pub(crate) static ERR_PREFIX: &str = "invalid CIDR prefix (must be 1..=32)";
pub(crate) static ERR_PARSE: &str = "invalid numeric token";
pub(crate) static ERR_RNG_ORDER: &str = "range start is greater than range end";
pub(crate) static ERR_RNG_TOOLARGE: &str = "too many addresses to collect";

// validator.rs
pub(crate) static ERR_FIELD_COUNT: &str = "expected 4 dot-separated fields";
pub(crate) static ERR_FIELD: &str = "malformed field";
pub(crate) static ERR_MULTI_SLASH: &str = "more than one '/'";
pub(crate) static ERR_CIDR_MIXED: &str = "CIDR suffix requires a literal address";
pub(crate) static ERR_NOT_ADDRESS: &str = "not a single address";
