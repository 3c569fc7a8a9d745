// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! #Fib
//!
//! Naive recursive Fibonacci numbers, kept deliberately slow as a
//! fixture for the micro-benchmarks in `benches/`
#![warn(missing_docs)]

mod fib;

pub use fib::{fib, fib2};
