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

#![allow(dead_code)]

use std::time::Duration;

use rayon::prelude::*;

use rusty_gap::{define_algs, define_args, finalize, init};
use rusty_gap::{DefInt, DefWgh};
use rusty_gap::common::graph::WghGraph;
use rusty_gap::common::graph_io::read_wgh_graph_from_file;
use rusty_gap::common::io::write_slice_to_file_seq;
use rusty_gap::common::random::{gen_uniform_wgh_edges, SourcePicker, RAND_SEED};
use rusty_gap::benchmarks::sssp::{dijkstra, DIST_INF};
use rusty_gap::benchmarks::sssp::delta_stepping::delta_step;

define_args!(
    Algs::DELTASTEP,
    (delta, DefWgh, 1),
    (sources, usize, 1),
    (start, i64, -1),
    (scale, usize, 16),
    (degree, usize, 16),
    (max_weight, DefWgh, 255)
);

define_algs!(
    (DELTASTEP, "deltastep"),
    (SERIAL, "serial")
);

pub fn run(
    alg: Algs,
    rounds: usize,
    g: &WghGraph,
    source: DefInt,
    delta: DefWgh,
    logging: bool,
) -> (Vec<DefWgh>, Duration) {
    let mut r = vec![];

    let mean = time_loop(
        "sssp",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::DELTASTEP => delta_step(g, source, delta, logging),
                Algs::SERIAL => dijkstra::dijkstra(g, source),
            };
        },
        || {}
    );
    (r, mean)
}

fn print_sssp_stats(dist: &[DefWgh]) {
    let num_reached = dist.par_iter().filter(|&&d| d != DIST_INF).count();
    println!("SSSP Tree reaches {num_reached} nodes");
}

fn main() {
    init!();

    let args = Args::parse();
    let g = if args.ifname.is_empty() {
        let n = 1usize << args.scale;
        let ea = gen_uniform_wgh_edges(n, n * args.degree, args.max_weight, RAND_SEED);
        WghGraph::from_wgh_edges(&ea)
    } else {
        read_wgh_graph_from_file(&args.ifname)
    };
    println!("graph has {} nodes and {} directed edges", g.num_vertices(), g.num_edges());

    let mut sp = SourcePicker::new(&g, args.start);
    let mut r = vec![];
    let mut d = Duration::ZERO;
    for _ in 0..args.sources {
        let source = sp.pick_next();
        println!("Source: {source}");
        (r, d) = run(args.algorithm, args.rounds, &g, source, args.delta, args.logging);
        if args.analyze {
            print_sssp_stats(&r);
        }
        if args.verify {
            let ok = dijkstra::check(&g, source, &r);
            println!("Verification: {}", if ok { "PASS" } else { "FAIL" });
        }
    }

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, args.ofname)
    );
}
