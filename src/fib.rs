// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// Warm-up pass run by [`fib`] ahead of the recursion. Sums the
/// integers in `0..n` and returns the triangular number; the caller
/// discards it. For `n <= 0` the loop never runs and the result is 0.
///
/// The cost of `n` additions is the contract here, not the sum. Each
/// addend goes through `black_box` so the loop is executed as written
/// instead of being reduced to the closed-form triangular formula.
///
/// Overflow for very large `n` follows the native `i64` semantics.
fn init_fib(n: i64) -> i64 {
    let mut result = 0;

    for i in 0..n {
        result += std::hint::black_box(i);
    }

    result
}

/// Computes the `n`-th Fibonacci number with the classic double
/// recursion, running the warm-up pass on `n` first at every level.
///
/// The base case covers all `n < 2`, so negative inputs are returned
/// unchanged. Stack depth grows linearly with `n` and running time
/// exponentially.
pub fn fib(n: i64) -> i64 {
    // The warm-up result is discarded; the per-addend `black_box`
    // inside `init_fib` keeps its loop, and the call, alive.
    init_fib(n);

    if n < 2 {
        return n;
    }

    fib(n - 1) + fib(n - 2)
}

/// Same recurrence and base case as [`fib`], without the warm-up pass.
/// Recursive calls dispatch to [`fib`], not back here, so every level
/// below the first still pays the warm-up cost.
pub fn fib2(n: i64) -> i64 {
    if n < 2 {
        return n;
    }

    fib(n - 1) + fib(n - 2)
}
