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

//! Randomized invariants over small instances: residual duality, flow
//! conservation, engine parity and solution reversal.

use proptest::prelude::*;

use mincostflow::digraph::Digraph;
use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow, Preflow, ScalingPath};
use mincostflow::mcf::{CapacityScaling, CostScaling, MinCostFlow, PrimalDual, SspEdmondsKarp};
use mincostflow::shortestpath::{Bfs, Dijkstra, Fifo, Labeling};
use mincostflow::traits::*;

#[derive(Clone, Debug)]
struct Instance {
    num_nodes: usize,
    arcs: Vec<(u32, u32)>,
    caps: Vec<i64>,
    costs: Vec<i64>,
}

fn instances() -> impl Strategy<Value = Instance> {
    (2usize..7).prop_flat_map(|num_nodes| {
        let arc = (0..num_nodes as u32, 0..num_nodes as u32, 0i64..12, 0i64..8)
            .prop_filter("loops carry no flow", |(a, b, _, _)| a != b);
        proptest::collection::vec(arc, 1..12).prop_map(move |list| Instance {
            num_nodes,
            arcs: list.iter().map(|&(a, b, _, _)| (a, b)).collect(),
            caps: list.iter().map(|&(_, _, c, _)| c).collect(),
            costs: list.iter().map(|&(_, _, _, w)| w).collect(),
        })
    })
}

fn build(inst: &Instance) -> (Digraph<u32, u64>, Vec<i64>, Vec<i64>) {
    let mut g = Digraph::new();
    for v in 0..inst.num_nodes {
        g.add_node(v as u32);
    }

    let mut res = vec![];
    let mut cost = vec![];
    for i in 0..inst.arcs.len() {
        let (e, erev) = g.add_arc(inst.arcs[i].0, inst.arcs[i].1, i as u64).unwrap();
        res.resize(g.max_num_arcs(), 0);
        cost.resize(g.max_num_arcs(), 0);
        res[e.index()] = inst.caps[i];
        cost[e.index()] = inst.costs[i];
        cost[erev.index()] = -inst.costs[i];
    }
    (g, res, cost)
}

/// Solve and verify the per-solution invariants; return the flow
/// value, the total cost and the per-arc flows.
fn solve_checked<MC>(inst: &Instance) -> (i64, i64, Vec<i64>)
where
    MC: MinCostFlow<i64>,
{
    let (mut g, mut res, cost) = build(inst);
    let initial = res.clone();

    let s = g.get_node(0).unwrap();
    let t = g.get_node(1).unwrap();

    let mut solver = MC::default();
    let value = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();

    let mut balance = vec![0i64; g.max_num_nodes()];
    let mut total_cost = 0;
    let mut flows = vec![];

    for i in 0..inst.arcs.len() {
        let e = g.get_arc(i as u64).unwrap();
        let d = g.arc_dual(e).unwrap();
        let f = flow_at(&g, e, &res).unwrap();

        // residual duality and capacity bounds
        assert_eq!(res[e.index()] + res[d.index()], inst.caps[i]);
        assert!(res[e.index()] >= 0 && res[d.index()] >= 0);

        // cost antisymmetry held on input; nothing may have touched it
        assert_eq!(cost[e.index()] + cost[d.index()], 0);

        let (a, b) = g.arc_ends(e).unwrap();
        balance[a.index()] -= f;
        balance[b.index()] += f;
        total_cost += f * inst.costs[i];
        flows.push(f);
    }

    // conservation everywhere but at the terminals
    for u in g.nodes() {
        if u != s && u != t {
            assert_eq!(balance[u.index()], 0);
        }
    }
    assert_eq!(balance[t.index()], value);
    assert_eq!(balance[s.index()], -value);
    assert!(value >= 0);

    // reversing the solution restores the initial residual vector
    let mut rewound = res.clone();
    for i in 0..inst.arcs.len() {
        let e = g.get_arc(i as u64).unwrap();
        let d = g.arc_dual(e).unwrap();
        rewound[e.index()] += flows[i];
        rewound[d.index()] -= flows[i];
    }
    assert_eq!(rewound, initial);

    (value, total_cost, flows)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_engines_agree(inst in instances()) {
        let ek = solve_checked::<SspEdmondsKarp<Fifo<i64>>>(&inst);
        let pd = solve_checked::<PrimalDual<Dijkstra<i64>, AugmentingPath<Labeling>>>(&inst);
        let cap = solve_checked::<CapacityScaling<Fifo<i64>, Preflow<i64>>>(&inst);
        let cost = solve_checked::<CostScaling<ScalingPath<Bfs>>>(&inst);

        prop_assert_eq!((ek.0, ek.1), (pd.0, pd.1));
        prop_assert_eq!((ek.0, ek.1), (cap.0, cap.1));
        prop_assert_eq!((ek.0, ek.1), (cost.0, cost.1));
    }

    #[test]
    fn prop_deterministic(inst in instances()) {
        let first = solve_checked::<PrimalDual<Fifo<i64>, ScalingPath<Labeling>>>(&inst);
        let second = solve_checked::<PrimalDual<Fifo<i64>, ScalingPath<Labeling>>>(&inst);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_source_equals_sink_is_zero(inst in instances()) {
        let (mut g, mut res, cost) = build(&inst);
        let before = res.clone();
        let s = g.get_node(0).unwrap();

        let mut direct: Preflow<i64> = Default::default();
        prop_assert_eq!(direct.solve(&g, s, s, &mut res, |_| true).unwrap(), 0);
        prop_assert_eq!(&res, &before);

        let mut solver: CapacityScaling<Fifo<i64>, AugmentingPath<Labeling>> = Default::default();
        prop_assert_eq!(solver.solve(&mut g, s, s, &cost, &mut res).unwrap(), 0);
        prop_assert_eq!(&res, &before);

        let mut scaling: CostScaling<ScalingPath<Bfs>> = Default::default();
        prop_assert_eq!(scaling.solve(&mut g, s, s, &cost, &mut res).unwrap(), 0);
        prop_assert_eq!(&res, &before);
    }

    #[test]
    fn prop_flow_is_maximal(inst in instances()) {
        // the min-cost value matches a pure max-flow computation
        let (value, _, _) = solve_checked::<SspEdmondsKarp<Fifo<i64>>>(&inst);

        let (g, mut res, _) = build(&inst);
        let s = g.get_node(0).unwrap();
        let t = g.get_node(1).unwrap();
        let mut maxflow: AugmentingPath<Labeling> = Default::default();
        let best = maxflow.solve(&g, s, t, &mut res, |_| true).unwrap();

        prop_assert_eq!(value, best);
    }
}
