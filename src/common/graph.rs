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

use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering::Relaxed};

use rayon::prelude::*;

use crate::{maybe_uninit_vec, DefInt, DefWgh};

// **************************************************************
//    WEIGHTED EDGE ARRAY REPRESENTATION
// **************************************************************

#[derive(Clone, Copy)]
pub struct WghEdge {
    pub u: DefInt,
    pub v: DefInt,
    pub w: DefWgh,
}

impl WghEdge {
    pub fn new(u: DefInt, v: DefInt, w: DefWgh) -> Self
    { Self { u, v, w } }
}

impl FromStr for WghEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: Vec<&str> = s.trim().split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError); }
        let (u, v, w) = (s[0].parse(), s[1].parse(), s[2].parse());
        if u.is_err() || v.is_err() || w.is_err() {
            return Err(ParseEdgeError);
        }
        Ok(Self::new(u.unwrap(), v.unwrap(), w.unwrap()))
    }
}

pub struct ParseEdgeError;

impl std::fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Can not parse as edge.")
    }
}

impl std::fmt::Debug for ParseEdgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{ file: {}, line: {} }}: can not parse as edge.", file!(), line!())
    }
}

#[derive(Clone)]
pub struct WghEdgeArray {
    pub es: Vec<WghEdge>,
    pub n: usize,
    pub m: usize,
}

impl WghEdgeArray {
    pub fn new(es: Vec<WghEdge>, n: usize) -> Self {
        let es_len = es.len();
        Self { es, n, m: es_len }
    }
}

// **************************************************************
//    WEIGHTED ADJACENCY ARRAY REPRESENTATION
// **************************************************************

pub struct WghVertex<'a> {
    pub neighbors: &'a [DefInt],
    pub weights: &'a [DefWgh],
}

impl<'a> WghVertex<'a> {
    /// Lazily yields this vertex's out-edges as (neighbor, weight) pairs.
    pub fn wgh_neighbors(&self) -> impl Iterator<Item = (DefInt, DefWgh)> + 'a {
        self.neighbors
            .iter()
            .zip(self.weights.iter())
            .map(|(&v, &w)| (v, w))
    }
}

/// An immutable CSR adjacency structure over weighted directed edges.
/// Neighbor ids and weights live in parallel slot arrays.
pub struct WghGraph {
    pub offsets: Vec<DefInt>,
    pub edges: Vec<DefInt>,
    pub weights: Vec<DefWgh>,
    pub n: usize,
    pub m: usize,
}

impl WghGraph {
    pub const fn num_vertices(&self) -> usize
    { self.n }

    pub const fn num_edges(&self) -> usize
    { self.m }

    pub fn out_degree(&self, i: usize) -> usize {
        debug_assert!(i < self.n);
        (self.offsets[i + 1] - self.offsets[i]) as usize
    }

    pub fn new(
        offsets: &[DefInt],
        edges: &[DefInt],
        weights: &[DefWgh],
        n: usize
    ) -> Self {
        debug_assert_eq!(n + 1, offsets.len());
        debug_assert_eq!(edges.len(), offsets[n] as usize);
        debug_assert_eq!(edges.len(), weights.len());

        Self {
            offsets: offsets.to_vec(),
            edges: edges.to_vec(),
            weights: weights.to_vec(),
            n,
            m: edges.len(),
        }
    }

    #[inline(always)]
    pub fn index(&self, i: usize) -> WghVertex {
        debug_assert!(i < self.n);

        let (of, of_next) = (
            self.offsets[i] as usize,
            self.offsets[i + 1] as usize
        );

        WghVertex {
            neighbors: &self.edges[of..of_next],
            weights: &self.weights[of..of_next],
        }
    }

    /// Materializes the CSR form of an edge list. Slot order within a
    /// vertex is unspecified.
    pub fn from_wgh_edges(ea: &WghEdgeArray) -> Self {
        let (n, m) = (ea.n, ea.m);

        let degrees: Vec<AtomicU32> = (0..n)
            .into_par_iter()
            .map(|_| AtomicU32::new(0))
            .collect();
        ea.es.par_iter().for_each(|e| {
            degrees[e.u as usize].fetch_add(1, Relaxed);
        });

        let mut offsets: Vec<DefInt> = Vec::with_capacity(n + 1);
        let mut total: DefInt = 0;
        for d in &degrees {
            offsets.push(total);
            total += d.load(Relaxed);
        }
        offsets.push(total);
        debug_assert_eq!(total as usize, m);

        // reuse the degree counters as per-vertex write cursors
        let cursors = degrees;
        (0..n).into_par_iter().for_each(|i| {
            cursors[i].store(offsets[i], Relaxed);
        });

        let mut edges: Vec<DefInt> = maybe_uninit_vec![0; m];
        let mut weights: Vec<DefWgh> = maybe_uninit_vec![0; m];
        let e_ptr = edges.as_mut_ptr() as usize;
        let w_ptr = weights.as_mut_ptr() as usize;
        ea.es.par_iter().for_each(|e| {
            let slot = cursors[e.u as usize].fetch_add(1, Relaxed) as usize;
            unsafe {
                *(e_ptr as *mut DefInt).add(slot) = e.v;
                *(w_ptr as *mut DefWgh).add(slot) = e.w;
            }
        });

        Self { offsets, edges, weights, n, m }
    }
}
