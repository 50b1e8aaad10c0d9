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

//! Parallel delta-stepping with the bucket-fusion optimization.
//!
//! Tentative distances are partitioned into bins of width delta and the
//! bins are processed in priority order. The bins themselves are all
//! thread-local and grow on demand; each iteration the workers drain a
//! shared frontier holding the current bin, file every vertex they improve
//! into their own bins, vote on the smallest bin that should run next, and
//! copy that bin into the shared frontier for the following iteration.
//!
//! A vertex is never removed from a bin once filed, even if a later
//! improvement moved it to a lower bin. Stale entries are instead skipped
//! at draw time when their distance has dropped below the floor of the bin
//! being processed, which preserves the priority order.
//!
//! Bucket fusion executes a worker's next thread-local bin inside the same
//! iteration whenever it holds the same priority as the bin just drained
//! and is small. That removes a pair of barriers per fused bin, which is
//! most of the iteration cost on large-diameter inputs.

use std::sync::Barrier;
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::{maybe_uninit_vec, AtomicWgh, DefInt, DefWgh};
use crate::common::atomics::{write_min, write_min_usize};
use crate::common::graph::WghGraph;
use super::DIST_INF;

/// No bin holds any work. Identity of the next-bin min-reduction; half the
/// index maximum so it compares greater than any bin that can arise.
const MAX_BIN: usize = usize::MAX / 2;

/// Fused bins at or above this size go through the shared frontier instead
/// so their work gets redistributed across the team.
const BIN_SIZE_THRESHOLD: usize = 1000;

/// Chunk granularity of the dynamic schedule draining the shared frontier.
const FRONTIER_CHUNK: usize = 64;

#[inline(always)]
fn relax_edges(
    g: &WghGraph,
    u: DefInt,
    delta: DefWgh,
    dist: &[AtomicWgh],
    local_bins: &mut Vec<Vec<DefInt>>,
) {
    for (v, w) in g.index(u as usize).wgh_neighbors() {
        let new_dist = dist[u as usize].load(Relaxed) + w;
        if write_min(&dist[v as usize], new_dist) {
            let dest_bin = (new_dist / delta) as usize;
            if dest_bin >= local_bins.len() {
                local_bins.resize_with(dest_bin + 1, Vec::new);
            }
            local_bins[dest_bin].push(v);
        }
    }
}

fn print_step(bin_index: usize, elapsed: Duration, frontier_size: usize) {
    println!(
        "{:5}{:11.5}{:14}",
        bin_index,
        elapsed.as_secs_f64() * 1e3,
        frontier_size
    );
}

/// Computes shortest-path distances from `source` over a worker team the
/// size of the current rayon pool. Unreachable vertices get `DIST_INF`.
///
/// `delta` must be positive and `source` must name a vertex of `g`.
pub fn delta_step(
    g: &WghGraph,
    source: DefInt,
    delta: DefWgh,
    logging_enabled: bool,
) -> Vec<DefWgh> {
    debug_assert!(delta > 0);
    debug_assert!((source as usize) < g.num_vertices());

    let num_workers = rayon::current_num_threads();

    let dist: Vec<AtomicWgh> = (0..g.num_vertices())
        .into_par_iter()
        .map(|_| AtomicWgh::new(DIST_INF))
        .collect();
    dist[source as usize].store(0, Relaxed);

    // Reads of the current frontier all happen before the first barrier of
    // an iteration and the copy-out happens after it, so one allocation
    // serves both parities. Capacity is the directed edge count: each edge
    // files at most one vertex per iteration. max(1) admits edgeless
    // graphs, whose frontier still holds the source.
    let mut frontier: Vec<DefInt> = maybe_uninit_vec![0; g.num_edges().max(1)];
    frontier[0] = source;
    let frontier_ptr = frontier.as_mut_ptr() as usize;
    let frontier_cap = frontier.len();

    // two element arrays for double buffering, curr=iter&1, next=(iter+1)&1
    let shared_indexes = [AtomicUsize::new(0), AtomicUsize::new(MAX_BIN)];
    let frontier_tails = [AtomicUsize::new(1), AtomicUsize::new(0)];
    let drain_cursor = AtomicUsize::new(0);

    let barrier = Barrier::new(num_workers);
    let t = Instant::now();

    std::thread::scope(|s| {
        for wid in 0..num_workers {
            let (dist, barrier) = (&dist, &barrier);
            let (shared_indexes, frontier_tails) = (&shared_indexes, &frontier_tails);
            let drain_cursor = &drain_cursor;

            s.spawn(move || {
                let mut local_bins: Vec<Vec<DefInt>> = vec![];
                let mut iter: usize = 0;

                while shared_indexes[iter & 1].load(Relaxed) != MAX_BIN {
                    let curr_bin_index = shared_indexes[iter & 1].load(Relaxed);
                    let next_bin_index = &shared_indexes[(iter + 1) & 1];
                    let curr_frontier_tail = frontier_tails[iter & 1].load(Relaxed);
                    let next_frontier_tail = &frontier_tails[(iter + 1) & 1];

                    // drain the shared bin under a dynamic schedule,
                    // skipping entries that moved to a lower bin since
                    // they were filed
                    loop {
                        let begin = drain_cursor.fetch_add(FRONTIER_CHUNK, Relaxed);
                        if begin >= curr_frontier_tail { break; }
                        let end = curr_frontier_tail.min(begin + FRONTIER_CHUNK);
                        for i in begin..end {
                            let u = unsafe {
                                *(frontier_ptr as *const DefInt).add(i)
                            };
                            let bin_floor = delta * curr_bin_index as DefWgh;
                            if dist[u as usize].load(Relaxed) >= bin_floor {
                                relax_edges(g, u, delta, dist, &mut local_bins);
                            }
                        }
                    }

                    // bucket fusion: keep draining our own bin for the
                    // current priority while it stays small
                    while curr_bin_index < local_bins.len()
                        && !local_bins[curr_bin_index].is_empty()
                        && local_bins[curr_bin_index].len() < BIN_SIZE_THRESHOLD
                    {
                        let curr_bin_copy =
                            std::mem::take(&mut local_bins[curr_bin_index]);
                        for u in curr_bin_copy {
                            relax_edges(g, u, delta, dist, &mut local_bins);
                        }
                    }

                    // vote on the next bin to process
                    for i in curr_bin_index..local_bins.len() {
                        if !local_bins[i].is_empty() {
                            write_min_usize(next_bin_index, i);
                            break;
                        }
                    }

                    barrier.wait();

                    if wid == 0 {
                        if logging_enabled {
                            print_step(curr_bin_index, t.elapsed(), curr_frontier_tail);
                        }
                        // ready the current slots for reuse as the next
                        // iteration's "next"; the closing barrier
                        // publishes all three stores
                        shared_indexes[iter & 1].store(MAX_BIN, Relaxed);
                        frontier_tails[iter & 1].store(0, Relaxed);
                        drain_cursor.store(0, Relaxed);
                    }

                    let next_bin = next_bin_index.load(Relaxed);
                    if next_bin < local_bins.len() {
                        let bin = &mut local_bins[next_bin];
                        let copy_start =
                            next_frontier_tail.fetch_add(bin.len(), Relaxed);
                        debug_assert!(copy_start + bin.len() <= frontier_cap);
                        unsafe {
                            std::ptr::copy_nonoverlapping(
                                bin.as_ptr(),
                                (frontier_ptr as *mut DefInt).add(copy_start),
                                bin.len(),
                            );
                        }
                        bin.clear();
                    }
                    iter += 1;

                    barrier.wait();
                }

                if wid == 0 && logging_enabled {
                    println!("took {iter} iterations");
                }
            });
        }
    });

    dist.into_par_iter().map(AtomicWgh::into_inner).collect()
}
