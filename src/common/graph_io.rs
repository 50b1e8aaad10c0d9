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

use std::cmp::max;
use std::fs::File;
use std::io::{prelude::*, BufReader};

use rayon::prelude::*;

use crate::verbose_println;
use crate::DefInt;
use super::io::read_file_to_vec;
use super::graph::{WghEdge, WghEdgeArray, WghGraph};

const WGH_ADJ_GRAPH_HEADER: &str = "WeightedAdjacencyGraph";

/// Reads a graph stored in the WeightedAdjacencyGraph text format: the
/// header line, n, m, then n offsets, m edge targets and m weights, one
/// value per line.
pub fn read_wgh_graph_from_file(fname: &str) -> WghGraph {
    let file = File::open(fname).unwrap();
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    verbose_println!("reading file header...");
    assert_eq!(lines.next().unwrap().unwrap(), WGH_ADJ_GRAPH_HEADER);
    let n = lines.next().unwrap().unwrap().parse().unwrap();
    let m = lines.next().unwrap().unwrap().parse().unwrap();

    verbose_println!("making the graph (n={n}, m={m})...");
    let mut g = WghGraph {
        offsets: Vec::with_capacity(n + 1),
        edges: Vec::with_capacity(m),
        weights: Vec::with_capacity(m),
        n,
        m,
    };
    unsafe {
        g.offsets.set_len(n + 1);
        g.edges.set_len(m);
        g.weights.set_len(m);
    }

    verbose_println!("reading offsets...");
    for i in 0..n {
        g.offsets[i] = lines.next().unwrap().unwrap().parse().unwrap();
    }
    g.offsets[n] = m as DefInt;

    verbose_println!("reading edges...");
    for i in 0..m {
        g.edges[i] = lines.next().unwrap().unwrap().parse().unwrap();
    }

    verbose_println!("reading weights...");
    for i in 0..m {
        g.weights[i] = lines.next().unwrap().unwrap().parse().unwrap();
    }

    verbose_println!("graph generated.");
    g
}

/// Writes a graph in the same format `read_wgh_graph_from_file` accepts.
pub fn write_wgh_graph_to_file(g: &WghGraph, fname: &str) {
    let mut out = String::new();
    out.push_str(WGH_ADJ_GRAPH_HEADER);
    out.push('\n');
    out.push_str(&g.n.to_string());
    out.push('\n');
    out.push_str(&g.m.to_string());
    out.push('\n');
    for of in &g.offsets[..g.n] {
        out.push_str(&of.to_string());
        out.push('\n');
    }
    for e in &g.edges {
        out.push_str(&e.to_string());
        out.push('\n');
    }
    for w in &g.weights {
        out.push_str(&w.to_string());
        out.push('\n');
    }
    std::fs::write(fname, out).expect("cannot write the graph file");
}

/// Reads a plain edge list of "u v w" lines behind a WeightedEdgeArray
/// header. The vertex count is the largest endpoint plus one.
pub fn read_wgh_edge_array_from_file(fname: &str) -> WghEdgeArray {
    let es: Vec<WghEdge> = read_file_to_vec(
        fname,
        Some { 0: |w: &[&str]| {
            debug_assert_eq!(w[0], "WeightedEdgeArray")
        }} );

    let m = es
        .par_iter()
        .cloned()
        .reduce(
            || WghEdge::new(0, 0, 0),
            |a, b| WghEdge::new(max(a.u, b.u), max(a.v, b.v), 0)
        );

    println!("extracted graph n={} m={}", max(m.u, m.v) as usize + 1, es.len());

    WghEdgeArray::new(es, max(m.u, m.v) as usize + 1)
}
