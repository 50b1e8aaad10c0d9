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

use clap::Parser;

use rusty_gap::{DefInt, DefWgh};
use rusty_gap::common::graph_io::read_wgh_graph_from_file;
use rusty_gap::common::io::read_file_to_vec_seq;
use rusty_gap::benchmarks::sssp::dijkstra;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// sssp results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the source vertex the results were computed from
    #[clap(short, long, value_parser, required=false, default_value_t=0)]
    start: DefInt,
}

fn main() {
    let args = Args::parse();
    let g = read_wgh_graph_from_file(&args.ifname);
    let r: Vec<DefWgh> = read_file_to_vec_seq(&args.rfname);

    assert_eq!(
        r.len(),
        g.num_vertices(),
        "result length does not match the graph"
    );

    if dijkstra::check(&g, args.start, &r) {
        println!("sssp_check: OK.");
    } else {
        println!("sssp_check: FAILED.");
        std::process::exit(1);
    }
}
