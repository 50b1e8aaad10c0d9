// ============================================================================
// This code is part of Rusty-GAP.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use rayon::prelude::*;

use crate::{DefInt, DefWgh};
use super::graph::{WghEdge, WghEdgeArray, WghGraph};
use super::utilities::{hash64, log2_up};

/// Seed shared by the randomized collaborators so trials are reproducible.
pub const RAND_SEED: u64 = 27491095;

/// A simple random number generator.
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }
}

// unbiased vertex draw: mask to the next power of two, then reject
#[inline(always)]
fn ith_vertex(r: &Random, i: u64, mask: u64, n: usize) -> DefInt {
    let mut attempt = 0u64;
    loop {
        let c = r.ith_rand(
            attempt.overflowing_mul(0x9e37_79b9_7f4a_7c15).0.overflowing_add(i).0
        ) & mask;
        if (c as usize) < n { return c as DefInt; }
        attempt += 1;
    }
}

/// Generates m directed edges with endpoints uniform over n vertices and
/// weights uniform in [1, max_weight]. Self loops and duplicates are kept.
pub fn gen_uniform_wgh_edges(
    n: usize,
    m: usize,
    max_weight: DefWgh,
    seed: u64
) -> WghEdgeArray {
    debug_assert!(n > 0 && max_weight > 0);
    let rng = Random::new(seed);
    let (ur, vr, wr) = (rng.fork(0), rng.fork(1), rng.fork(2));
    let mask = (1u64 << log2_up(n)) - 1;

    let es: Vec<WghEdge> = (0..m)
        .into_par_iter()
        .map(|i| WghEdge::new(
            ith_vertex(&ur, i as u64, mask, n),
            ith_vertex(&vr, i as u64, mask, n),
            (wr.ith_rand(i as u64) % max_weight as u64) as DefWgh + 1,
        ))
        .collect();

    WghEdgeArray::new(es, n)
}

/// Picks starting points for searches: the given vertex when one was
/// supplied, otherwise random vertices with at least one out-edge.
pub struct SourcePicker<'a> {
    g: &'a WghGraph,
    given_source: i64,
    rng: Random,
    count: u64,
}

impl<'a> SourcePicker<'a> {
    pub fn new(g: &'a WghGraph, given_source: i64) -> Self {
        Self {
            g,
            given_source,
            rng: Random::new(RAND_SEED),
            count: 0,
        }
    }

    pub fn pick_next(&mut self) -> DefInt {
        if self.given_source >= 0 {
            return self.given_source as DefInt;
        }

        let n = self.g.num_vertices();
        let mask = (1u64 << log2_up(n)) - 1;
        loop {
            let c = self.rng.ith_rand(self.count) & mask;
            self.count += 1;
            if (c as usize) < n && self.g.out_degree(c as usize) > 0 {
                return c as DefInt;
            }
        }
    }
}
