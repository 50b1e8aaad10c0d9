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

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{DefInt, DefWgh};
use crate::common::graph::WghGraph;
use super::DIST_INF;

/// Serial reference solver; the oracle the parallel results are checked
/// against.
pub fn dijkstra(g: &WghGraph, source: DefInt) -> Vec<DefWgh> {
    let mut dist = vec![DIST_INF; g.num_vertices()];
    dist[source as usize] = 0;

    let mut mq: BinaryHeap<Reverse<(DefWgh, DefInt)>> = BinaryHeap::new();
    mq.push(Reverse((0, source)));
    while let Some(Reverse((td, u))) = mq.pop() {
        // anything else queued for u is stale
        if td != dist[u as usize] { continue; }
        for (v, w) in g.index(u as usize).wgh_neighbors() {
            if td + w < dist[v as usize] {
                dist[v as usize] = td + w;
                mq.push(Reverse((td + w, v)));
            }
        }
    }
    dist
}

/// Compares `dist_to_test` element-wise against the oracle, reporting any
/// mismatches. Returns true iff there were none.
pub fn check(g: &WghGraph, source: DefInt, dist_to_test: &[DefWgh]) -> bool {
    let oracle_dist = dijkstra(g, source);
    let mut all_ok = true;
    for v in 0..g.num_vertices() {
        if dist_to_test[v] != oracle_dist[v] {
            println!("sssp_check: {}: {} != {}", v, dist_to_test[v], oracle_dist[v]);
            all_ok = false;
        }
    }
    all_ok
}
