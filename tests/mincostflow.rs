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

//! Every min-cost-flow engine composition must reproduce the per-arc
//! flows of the reference scenarios.

use mincostflow::digraph::Digraph;
use mincostflow::maxflow::{flow_at, AugmentingPath, Preflow, ScalingPath};
use mincostflow::mcf::{CapacityScaling, CostScaling, MinCostFlow, PrimalDual, SspEdmondsKarp};
use mincostflow::shortestpath::{BellmanFord, Bfs, Dijkstra, Fifo, Labeling};
use mincostflow::traits::*;

fn check<MC>(
    arcs: &[(u32, u32)],
    capacity: &[i64],
    weight: &[i64],
    source: u32,
    sink: u32,
    sol: &[i64],
)
where
    MC: MinCostFlow<i64>,
{
    let mut g: Digraph<u32, u64> = Digraph::new();
    g.add_node(source);
    g.add_node(sink);

    let mut res = vec![];
    let mut cost = vec![];
    for i in 0..capacity.len() {
        let (e, erev) = g.add_arc(arcs[i].0, arcs[i].1, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);

        res[e.index()] = capacity[i];
        res[erev.index()] = 0;

        cost[e.index()] = weight[i];
        cost[erev.index()] = -weight[i];
    }

    let s = g.get_node(source).unwrap();
    let t = g.get_node(sink).unwrap();

    let mut solver = MC::default();
    let value = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();

    let mut net_out_of_source = 0;
    for (i, &f) in sol.iter().enumerate() {
        let e = g.get_arc(i as u64).unwrap();
        assert_eq!(flow_at(&g, e, &res).unwrap(), f, "flow on arc {}", i);

        if arcs[i].0 == source {
            net_out_of_source += f;
        }
        if arcs[i].1 == source {
            net_out_of_source -= f;
        }
    }
    assert_eq!(value, net_out_of_source);
}

/// A solve with coinciding endpoints sends nothing and leaves the
/// residuals untouched.
fn check_source_is_sink<MC>()
where
    MC: MinCostFlow<i64>,
{
    let mut g: Digraph<u32, u64> = Digraph::new();
    let mut res = vec![];
    let mut cost = vec![];
    for (i, (a, b, cap, w)) in [(0, 1, 3, 2), (1, 2, 2, 1), (2, 0, 1, 4)].iter().enumerate() {
        let (e, erev) = g.add_arc(*a, *b, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);
        res[e.index()] = *cap;
        cost[e.index()] = *w;
        cost[erev.index()] = -*w;
    }
    let s = g.get_node(0).unwrap();
    let before = res.clone();

    let mut solver = MC::default();
    assert_eq!(solver.solve(&mut g, s, s, &cost, &mut res).unwrap(), 0);
    assert_eq!(res, before);
}

fn check_all<MC>()
where
    MC: MinCostFlow<i64>,
{
    // case 1
    check::<MC>(
        &[(0, 1), (0, 2), (1, 3), (1, 2), (1, 0), (3, 1)],
        &[1, 9, 5, 1, 7, 4],
        &[1, 1, 1, 1, 1, 1],
        0,
        1,
        &[1, 0, 0, 0, 0, 0],
    );
    // case 2
    check::<MC>(
        &[(0, 2), (0, 3), (3, 2), (2, 1), (3, 1)],
        &[1, 2, 2, 2, 2],
        &[1, 1, 1, 1, 1],
        0,
        1,
        &[1, 2, 0, 1, 2],
    );
    // case 3
    check::<MC>(
        &[(0, 2), (0, 1), (2, 1), (1, 3), (0, 3)],
        &[2, 5, 7, 8, 6],
        &[1, 3, 2, 2, 6],
        0,
        1,
        &[2, 5, 2, 0, 0],
    );
    // case 4
    check::<MC>(
        &[(0, 2), (0, 1), (0, 3), (1, 3), (2, 3), (2, 1), (3, 2), (3, 0)],
        &[2, 4, 3, 3, 3, 1, 1, 4],
        &[2, 3, 1, 0, 2, 0, 0, 4],
        0,
        1,
        &[0, 4, 1, 0, 0, 1, 1, 0],
    );
    // case 5
    check::<MC>(
        &[(0, 3), (0, 2), (1, 2), (1, 0), (2, 3), (3, 1)],
        &[2, 1, 1, 1, 4, 2],
        &[4, 1, 0, 1, 2, 0],
        0,
        1,
        &[1, 1, 0, 0, 1, 2],
    );
    check_source_is_sink::<MC>();
}

macro_rules! mcf_tests {
    ($($name:ident: $solver:ty;)*) => {
        $(
            #[test]
            fn $name() {
                check_all::<$solver>();
            }
        )*
    };
}

mcf_tests! {
    test_ek_fifo: SspEdmondsKarp<Fifo<i64>>;
    test_ek_bellmanford: SspEdmondsKarp<BellmanFord<i64>>;

    test_pd_fifo_aug_bfs: PrimalDual<Fifo<i64>, AugmentingPath<Bfs>>;
    test_pd_fifo_aug_labeling: PrimalDual<Fifo<i64>, AugmentingPath<Labeling>>;
    test_pd_fifo_scaling_bfs: PrimalDual<Fifo<i64>, ScalingPath<Bfs>>;
    test_pd_fifo_scaling_labeling: PrimalDual<Fifo<i64>, ScalingPath<Labeling>>;
    test_pd_fifo_preflow: PrimalDual<Fifo<i64>, Preflow<i64>>;

    test_pd_bf_aug_bfs: PrimalDual<BellmanFord<i64>, AugmentingPath<Bfs>>;
    test_pd_bf_aug_labeling: PrimalDual<BellmanFord<i64>, AugmentingPath<Labeling>>;
    test_pd_bf_scaling_bfs: PrimalDual<BellmanFord<i64>, ScalingPath<Bfs>>;
    test_pd_bf_scaling_labeling: PrimalDual<BellmanFord<i64>, ScalingPath<Labeling>>;
    test_pd_bf_preflow: PrimalDual<BellmanFord<i64>, Preflow<i64>>;

    test_pd_dijkstra_aug_bfs: PrimalDual<Dijkstra<i64>, AugmentingPath<Bfs>>;
    test_pd_dijkstra_aug_labeling: PrimalDual<Dijkstra<i64>, AugmentingPath<Labeling>>;
    test_pd_dijkstra_scaling_bfs: PrimalDual<Dijkstra<i64>, ScalingPath<Bfs>>;
    test_pd_dijkstra_scaling_labeling: PrimalDual<Dijkstra<i64>, ScalingPath<Labeling>>;
    test_pd_dijkstra_preflow: PrimalDual<Dijkstra<i64>, Preflow<i64>>;

    test_cap_fifo_aug_bfs: CapacityScaling<Fifo<i64>, AugmentingPath<Bfs>>;
    test_cap_fifo_aug_labeling: CapacityScaling<Fifo<i64>, AugmentingPath<Labeling>>;
    test_cap_fifo_scaling_bfs: CapacityScaling<Fifo<i64>, ScalingPath<Bfs>>;
    test_cap_fifo_scaling_labeling: CapacityScaling<Fifo<i64>, ScalingPath<Labeling>>;
    test_cap_fifo_preflow: CapacityScaling<Fifo<i64>, Preflow<i64>>;

    test_cap_bf_aug_bfs: CapacityScaling<BellmanFord<i64>, AugmentingPath<Bfs>>;
    test_cap_bf_aug_labeling: CapacityScaling<BellmanFord<i64>, AugmentingPath<Labeling>>;
    test_cap_bf_scaling_bfs: CapacityScaling<BellmanFord<i64>, ScalingPath<Bfs>>;
    test_cap_bf_scaling_labeling: CapacityScaling<BellmanFord<i64>, ScalingPath<Labeling>>;
    test_cap_bf_preflow: CapacityScaling<BellmanFord<i64>, Preflow<i64>>;

    test_cap_dijkstra_aug_bfs: CapacityScaling<Dijkstra<i64>, AugmentingPath<Bfs>>;
    test_cap_dijkstra_aug_labeling: CapacityScaling<Dijkstra<i64>, AugmentingPath<Labeling>>;
    test_cap_dijkstra_scaling_bfs: CapacityScaling<Dijkstra<i64>, ScalingPath<Bfs>>;
    test_cap_dijkstra_scaling_labeling: CapacityScaling<Dijkstra<i64>, ScalingPath<Labeling>>;
    test_cap_dijkstra_preflow: CapacityScaling<Dijkstra<i64>, Preflow<i64>>;

    test_cost_aug_bfs: CostScaling<AugmentingPath<Bfs>>;
    test_cost_aug_labeling: CostScaling<AugmentingPath<Labeling>>;
    test_cost_scaling_bfs: CostScaling<ScalingPath<Bfs>>;
    test_cost_scaling_labeling: CostScaling<ScalingPath<Labeling>>;
    test_cost_preflow: CostScaling<Preflow<i64>>;
}

/// Determinism: the same instance solved twice gives identical flows.
#[test]
fn test_deterministic() {
    let arcs = [(0u32, 2u32), (0, 1), (2, 1), (1, 3), (0, 3)];
    let capacity = [2i64, 5, 7, 8, 6];
    let weight = [1i64, 3, 2, 2, 6];

    let run = || {
        let mut g: Digraph<u32, u64> = Digraph::new();
        let mut res = vec![];
        let mut cost = vec![];
        for i in 0..capacity.len() {
            let (e, erev) = g.add_arc(arcs[i].0, arcs[i].1, i as u64).unwrap();
            res.resize(g.max_num_arcs(), 0);
            cost.resize(g.max_num_arcs(), 0);
            res[e.index()] = capacity[i];
            cost[e.index()] = weight[i];
            cost[erev.index()] = -weight[i];
        }
        let s = g.get_node(0).unwrap();
        let t = g.get_node(1).unwrap();
        let mut solver: SspEdmondsKarp<Fifo<i64>> = Default::default();
        let value = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();
        (value, res)
    };

    assert_eq!(run(), run());
}

/// Composing successive shortest paths with Dijkstra is rejected at
/// runtime as soon as a negative dual becomes admissible.
#[test]
fn test_ek_dijkstra_fails() {
    let mut g: Digraph<u32, u64> = Digraph::new();
    let mut res = vec![];
    let mut cost = vec![];
    for (i, (a, b, cap, w)) in [(0, 2, 2, 1), (2, 1, 2, 1), (0, 1, 1, 5)].iter().enumerate() {
        let (e, erev) = g.add_arc(*a, *b, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);
        res[e.index()] = *cap;
        cost[e.index()] = *w;
        cost[erev.index()] = -*w;
    }
    let s = g.get_node(0).unwrap();
    let t = g.get_node(1).unwrap();

    let mut solver: SspEdmondsKarp<Dijkstra<i64>> = Default::default();
    match solver.solve(&mut g, s, t, &cost, &mut res) {
        Err(mincostflow::Error::NegativeWeight { .. }) => {}
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
}
