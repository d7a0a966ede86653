// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 address to integer conversion and expansion of extended address
patterns into the concrete addresses they denote.

```
use ipv4expand::{create_network, from_int, to_int};

assert_eq!(to_int("10.0.0.1").unwrap(), 167772161);
assert_eq!(from_int(167772161), "10.0.0.1");

let net = create_network("10.1-2.*.1").unwrap();
assert_eq!(net.len(), 512);
let first: Vec<String> = net.addresses().take(2).map(|a| a.to_string()).collect();
assert_eq!(first, ["10.1.0.1", "10.1.1.1"]);
```
*/

pub mod iptools;

pub use iptools::*;
