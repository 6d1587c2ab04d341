/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use mincostflow::digraph::Digraph;
use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow, Preflow, ScalingPath};
use mincostflow::shortestpath::{Bfs, Labeling};
use mincostflow::traits::*;

fn check<M>(arcs: &[(u32, u32)], capacity: &[i64], source: u32, sink: u32, sol: &[i64])
where
    M: MaxFlow<i64>,
{
    let mut g: Digraph<u32, u64> = Digraph::new();
    g.add_node(source);
    g.add_node(sink);

    let mut res = vec![];
    for (i, (a, b)) in arcs.iter().enumerate() {
        let (e, erev) = g.add_arc(*a, *b, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        res[e.index()] = capacity[i];
        res[erev.index()] = 0;
    }

    let s = g.get_node(source).unwrap();
    let t = g.get_node(sink).unwrap();

    let mut solver = M::default();
    let value = solver.solve(&g, s, t, &mut res, |_| true).unwrap();

    let mut balance = vec![0i64; g.max_num_nodes()];
    for (i, &f) in sol.iter().enumerate() {
        let e = g.get_arc(i as u64).unwrap();
        let flow = flow_at(&g, e, &res).unwrap();
        assert_eq!(flow, f, "flow on arc {}", i);

        // pairing invariant
        assert_eq!(res[e.index()] + res[g.arc_dual(e).unwrap().index()], capacity[i]);
        assert!(res[e.index()] >= 0 && flow >= 0);

        let (a, b) = g.arc_ends(e).unwrap();
        balance[a.index()] -= flow;
        balance[b.index()] += flow;
    }

    // conservation and flow value
    for u in g.nodes() {
        if u != s && u != t {
            assert_eq!(balance[u.index()], 0, "node {} is unbalanced", u);
        }
    }
    assert_eq!(balance[t.index()], value);
    assert_eq!(balance[s.index()], -value);
}

/// A solve with coinciding endpoints sends nothing and leaves the
/// residuals untouched.
fn check_source_is_sink<M>()
where
    M: MaxFlow<i64>,
{
    let mut g: Digraph<u32, u64> = Digraph::new();
    let mut res = vec![];
    for (i, (a, b, cap)) in [(0, 1, 3), (1, 2, 2), (2, 0, 1)].iter().enumerate() {
        let (e, _) = g.add_arc(*a, *b, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        res[e.index()] = *cap;
    }
    let s = g.get_node(0).unwrap();
    let before = res.clone();

    let mut solver = M::default();
    assert_eq!(solver.solve(&g, s, s, &mut res, |_| true).unwrap(), 0);
    assert_eq!(res, before);
}

fn check_all<M>()
where
    M: MaxFlow<i64>,
{
    check::<M>(
        &[(0, 1), (0, 2), (1, 3), (1, 2), (1, 0), (3, 1)],
        &[1, 9, 5, 1, 7, 4],
        0,
        1,
        &[1, 0, 0, 0, 0, 0],
    );
    check::<M>(
        &[(0, 2), (0, 3), (3, 2), (2, 1), (3, 1)],
        &[1, 2, 2, 2, 2],
        0,
        1,
        &[1, 2, 0, 1, 2],
    );
    check_source_is_sink::<M>();
}

#[test]
fn test_augmenting_bfs() {
    check_all::<AugmentingPath<Bfs>>();
}

#[test]
fn test_augmenting_labeling() {
    check_all::<AugmentingPath<Labeling>>();
}

#[test]
fn test_preflow() {
    check_all::<Preflow<i64>>();
}

#[test]
fn test_scaling_bfs() {
    check_all::<ScalingPath<Bfs>>();
}

#[test]
fn test_scaling_labeling() {
    check_all::<ScalingPath<Labeling>>();
}

/// A solver observes the residual state left by a previous solve:
/// re-solving on a saturated network finds nothing to send.
#[test]
fn test_resolve_on_saturated_network() {
    let mut g: Digraph<u32, u64> = Digraph::new();
    let mut res = vec![];
    for (i, (a, b, cap)) in [(0, 2, 1), (0, 3, 2), (3, 2, 2), (2, 1, 2), (3, 1, 2)].iter().enumerate() {
        let (e, _) = g.add_arc(*a, *b, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        res[e.index()] = *cap;
    }
    let s = g.get_node(0).unwrap();
    let t = g.get_node(1).unwrap();

    let mut solver: AugmentingPath<Labeling> = Default::default();
    assert_eq!(solver.solve(&g, s, t, &mut res, |_| true).unwrap(), 3);
    assert_eq!(solver.solve(&g, s, t, &mut res, |_| true).unwrap(), 0);
}
