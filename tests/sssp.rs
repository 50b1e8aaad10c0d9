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

use rayon::ThreadPoolBuilder;

use rusty_gap::{DefInt, DefWgh};
use rusty_gap::common::graph::{WghEdge, WghEdgeArray, WghGraph};
use rusty_gap::common::graph_io::{
    read_wgh_edge_array_from_file, read_wgh_graph_from_file, write_wgh_graph_to_file,
};
use rusty_gap::common::random::gen_uniform_wgh_edges;
use rusty_gap::benchmarks::sssp::DIST_INF;
use rusty_gap::benchmarks::sssp::delta_stepping::delta_step;
use rusty_gap::benchmarks::sssp::dijkstra::dijkstra;

fn graph_from_edges(n: usize, es: &[(DefInt, DefInt, DefWgh)]) -> WghGraph {
    let es = es.iter().map(|&(u, v, w)| WghEdge::new(u, v, w)).collect();
    WghGraph::from_wgh_edges(&WghEdgeArray::new(es, n))
}

#[test]
fn two_hop_path_beats_direct_edge() {
    let g = graph_from_edges(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 10)]);
    assert_eq!(delta_step(&g, 0, 2, false), vec![0, 2, 5]);
}

#[test]
fn detour_through_cheap_edges() {
    let g = graph_from_edges(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (2, 3, 1)]);
    assert_eq!(delta_step(&g, 0, 2, false), vec![0, 1, 3, 4]);
}

#[test]
fn cycle_back_to_source() {
    let g = graph_from_edges(3, &[(0, 1, 5), (1, 2, 5), (2, 0, 5)]);
    assert_eq!(delta_step(&g, 0, 3, false), vec![0, 5, 10]);
}

#[test]
fn isolated_vertex_stays_unreachable() {
    let g = graph_from_edges(3, &[(0, 1, 7)]);
    assert_eq!(delta_step(&g, 0, 4, false), vec![0, 7, DIST_INF]);
}

#[test]
fn unit_delta_skips_heavy_shortcut() {
    let g = graph_from_edges(
        5,
        &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (0, 4, 10)],
    );
    assert_eq!(delta_step(&g, 0, 1, false), vec![0, 1, 2, 3, 4]);
}

#[test]
fn diamond_reaches_sink_both_ways() {
    let g = graph_from_edges(4, &[(0, 1, 2), (0, 2, 2), (1, 3, 2), (2, 3, 2)]);
    assert_eq!(delta_step(&g, 0, 2, false), vec![0, 2, 2, 4]);
}

#[test]
fn single_vertex_graph() {
    let g = graph_from_edges(1, &[]);
    assert_eq!(delta_step(&g, 0, 1, false), vec![0]);
}

#[test]
fn source_with_no_out_edges() {
    let g = graph_from_edges(3, &[(1, 2, 5)]);
    assert_eq!(delta_step(&g, 0, 4, false), vec![0, DIST_INF, DIST_INF]);
}

#[test]
fn zero_weight_edges_collapse_to_source() {
    let g = graph_from_edges(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 0), (3, 1, 0)]);
    assert_eq!(delta_step(&g, 0, 2, false), vec![0, 0, 0, 0]);
}

#[test]
fn delta_wider_than_any_path() {
    let g = graph_from_edges(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (2, 3, 1)]);
    assert_eq!(delta_step(&g, 0, 1000, false), vec![0, 1, 3, 4]);
}

#[test]
fn nonzero_source() {
    let g = graph_from_edges(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 10)]);
    assert_eq!(delta_step(&g, 1, 2, false), vec![DIST_INF, 0, 3]);
}

#[test]
fn csr_builder_groups_out_edges() {
    let g = graph_from_edges(4, &[(2, 0, 9), (0, 3, 1), (2, 1, 4), (0, 2, 5)]);
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_edges(), 4);
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(g.out_degree(1), 0);
    assert_eq!(g.out_degree(2), 2);
    assert_eq!(g.out_degree(3), 0);

    let mut ngh: Vec<(DefInt, DefWgh)> = g.index(2).wgh_neighbors().collect();
    ngh.sort();
    assert_eq!(ngh, vec![(0, 9), (1, 4)]);
}

#[test]
fn csr_arrays_round_through_the_view() {
    let g = WghGraph::new(&[0, 2, 3, 3], &[1, 2, 2], &[4, 1, 2], 3);
    assert_eq!(delta_step(&g, 0, 2, false), vec![0, 4, 1]);
}

#[test]
fn matches_dijkstra_on_uniform_graphs() {
    for seed in [1, 2, 3] {
        let ea = gen_uniform_wgh_edges(500, 4000, 63, seed);
        let g = WghGraph::from_wgh_edges(&ea);
        let oracle_dist = dijkstra(&g, 0);
        for delta in [1, 7, 64] {
            assert_eq!(delta_step(&g, 0, delta, false), oracle_dist);
        }
    }
}

#[test]
fn deterministic_across_thread_counts() {
    let ea = gen_uniform_wgh_edges(300, 2400, 31, 7);
    let g = WghGraph::from_wgh_edges(&ea);
    let oracle_dist = dijkstra(&g, 0);
    for threads in [1, 2, 4] {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        assert_eq!(pool.install(|| delta_step(&g, 0, 5, false)), oracle_dist);
    }
}

#[test]
fn adding_an_edge_never_increases_distances() {
    let ea = gen_uniform_wgh_edges(200, 1000, 31, 11);
    let g = WghGraph::from_wgh_edges(&ea);
    let before = delta_step(&g, 0, 8, false);

    let mut es = ea.es.clone();
    es.push(WghEdge::new(0, 150, 1));
    es.push(WghEdge::new(17, 3, 2));
    let g = WghGraph::from_wgh_edges(&WghEdgeArray::new(es, 200));
    let after = delta_step(&g, 0, 8, false);

    for v in 0..200 {
        assert!(after[v] <= before[v]);
    }
}

#[test]
fn triangle_inequality_holds_on_every_edge() {
    let ea = gen_uniform_wgh_edges(200, 1600, 31, 13);
    let g = WghGraph::from_wgh_edges(&ea);
    let dist = delta_step(&g, 0, 8, false);

    for e in &ea.es {
        if dist[e.u as usize] != DIST_INF {
            assert!(dist[e.v as usize] <= dist[e.u as usize] + e.w);
        }
    }
}

#[test]
fn edge_lines_parse() {
    let e: WghEdge = "3 7 42".parse().unwrap();
    assert_eq!((e.u, e.v, e.w), (3, 7, 42));
    assert!("3 7".parse::<WghEdge>().is_err());
    assert!("3 seven 42".parse::<WghEdge>().is_err());
}

#[test]
fn edge_list_file_parses_into_a_graph() {
    let ea = gen_uniform_wgh_edges(50, 200, 15, 3);
    let mut out = String::from("WeightedEdgeArray\n");
    for e in &ea.es {
        out.push_str(&format!("{} {} {}\n", e.u, e.v, e.w));
    }
    let fname = std::env::temp_dir().join("rusty_gap_sssp_ea_test.wea");
    let fname = fname.to_str().unwrap();
    std::fs::write(fname, out).unwrap();

    let ea2 = read_wgh_edge_array_from_file(fname);
    assert_eq!(ea2.m, ea.m);

    // the reader sizes the graph by the largest endpoint it saw
    let g = WghGraph::from_wgh_edges(&WghEdgeArray::new(ea.es.clone(), ea2.n));
    let g2 = WghGraph::from_wgh_edges(&ea2);
    assert_eq!(delta_step(&g2, 0, 4, false), delta_step(&g, 0, 4, false));
}

#[test]
fn graph_file_survives_a_write_and_read() {
    let ea = gen_uniform_wgh_edges(64, 256, 15, 5);
    let g = WghGraph::from_wgh_edges(&ea);

    let fname = std::env::temp_dir().join("rusty_gap_sssp_io_test.wadj");
    let fname = fname.to_str().unwrap();
    write_wgh_graph_to_file(&g, fname);
    let g2 = read_wgh_graph_from_file(fname);

    assert_eq!(g2.num_vertices(), g.num_vertices());
    assert_eq!(g2.num_edges(), g.num_edges());
    assert_eq!(delta_step(&g2, 0, 4, false), delta_step(&g, 0, 4, false));
}
