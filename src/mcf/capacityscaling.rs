// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Capacity-scaling min-cost flow.
//!
//! First saturates a maximum flow of any cost, then repairs optimality
//! scale by scale. At scale `delta`, arcs with negative reduced cost
//! and residual capacity at least `delta` are saturated in
//! `delta`-units; the resulting node imbalances are drained by shortest
//! augmenting paths from a *transient super-source* aggregating all
//! surplus nodes towards the deficit nodes, updating reduced costs with
//! the computed potentials as in the primal-dual method.
//!
//! The super-source and its arcs are removed, and the aggregated
//! excesses restored, on every exit path from a scale iteration; a
//! [`ScopeGuard`][crate::util::ScopeGuard] owns the graph for the
//! duration of the scale.

use super::{push_excess, MinCostFlow};
use crate::error::Result;
use crate::maxflow::{check_arc_vec, check_endpoints, MaxFlow};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::ShortestPath;
use crate::traits::{GrowableGraph, Node};
use crate::util::{guard, lower_bound_power2};

use std::collections::BTreeSet;

/// Capacity-scaling min-cost flow, parametric over the path and
/// max-flow engines.
#[derive(Clone, Debug, Default)]
pub struct CapacityScaling<S, M> {
    path: S,
    maxflow: M,
}

impl<S, M, F> MinCostFlow<F> for CapacityScaling<S, M>
where
    S: ShortestPath<F>,
    M: MaxFlow<F>,
    F: PrimInt + Signed + NumAssign,
{
    fn solve<G>(
        &mut self,
        g: &mut G,
        source: Node,
        dest: Node,
        weight: &[F],
        residual_cap: &mut Vec<F>,
    ) -> Result<F>
    where
        G: GrowableGraph,
    {
        check_endpoints(&*g, source, dest)?;
        check_arc_vec(&*g, residual_cap)?;
        check_arc_vec(&*g, weight)?;
        if source == dest {
            return Ok(F::zero());
        }

        let two = F::one() + F::one();

        // maximum flow of any cost
        let maxflow = self.maxflow.solve(&*g, source, dest, residual_cap, |_| true)?;

        let mut cap_flow = lower_bound_power2(maxflow);
        let mut excess = vec![F::zero(); g.max_num_nodes()];
        let mut weight_ex = weight.to_vec();

        while cap_flow > F::zero() {
            // saturate arcs with negative reduced cost in delta-units
            for e in g.arcs() {
                while residual_cap[e.index()] >= cap_flow && weight_ex[e.index()] < F::zero() {
                    push_excess(&*g, e, cap_flow, residual_cap, &mut excess)?;
                }
            }

            // surplus and deficit nodes at this scale
            let mut sset = BTreeSet::new();
            let mut tset = BTreeSet::new();
            for v in g.nodes() {
                if excess[v.index()] >= cap_flow {
                    sset.insert(v);
                }
                if excess[v.index()] <= -cap_flow {
                    tset.insert(v);
                }
            }

            let super_node = g.new_node();
            excess.resize(g.max_num_nodes(), F::zero());
            excess[super_node.index()] = F::zero();

            {
                // teardown on every exit path: restore the aggregated
                // excesses from the unsent super-arc residuals, then
                // drop the super-source with all its arcs
                let mut state = guard(
                    (&mut *g, &mut excess, &mut *residual_cap, &mut weight_ex),
                    move |(g, excess, residual_cap, _)| {
                        let out = match g.out_arcs(super_node) {
                            Ok(arcs) => arcs.to_vec(),
                            Err(_) => vec![],
                        };
                        for e in out {
                            if let Ok((_, dst)) = g.arc_ends(e) {
                                excess[dst.index()] = residual_cap[e.index()];
                            }
                        }
                        g.erase_node(super_node);
                    },
                );
                let (g, excess, residual_cap, weight_ex) = &mut *state;

                for &v in &sset {
                    let a1 = g.new_arc(super_node, v)?;
                    let a2 = g.new_arc(v, super_node)?;
                    g.set_dual(a1, a2)?;

                    weight_ex.resize(g.max_num_arcs(), F::zero());
                    residual_cap.resize(g.max_num_arcs(), F::zero());

                    weight_ex[a1.index()] = F::zero();
                    weight_ex[a2.index()] = F::zero();
                    residual_cap[a1.index()] = excess[v.index()];
                    residual_cap[a2.index()] = F::zero();

                    let moved = excess[v.index()];
                    excess[super_node.index()] += moved;
                    excess[v.index()] = F::zero();
                }

                while !sset.is_empty() && !tset.is_empty() {
                    self.path.solve(&**g, super_node, &**weight_ex, |e| {
                        residual_cap[e.index()] >= cap_flow
                    })?;

                    let distance = self.path.distances();
                    let target = tset
                        .iter()
                        .copied()
                        .find(|v| distance[v.index()] < F::max_value());
                    let t = match target {
                        Some(t) => t,
                        None => break,
                    };

                    // new potentials, as in the primal-dual method
                    for e in (**g).arcs() {
                        let (src, dst) = (**g).arc_ends(e)?;
                        let p_src = finite_or_zero(distance[src.index()]);
                        let p_dst = finite_or_zero(distance[dst.index()]);
                        weight_ex[e.index()] += p_src - p_dst;
                    }

                    let path = self.path.path_to(&**g, t);
                    for e in path {
                        push_excess(&**g, e, cap_flow, &mut **residual_cap, &mut **excess)?;
                    }

                    if excess[t.index()] > -cap_flow {
                        tset.remove(&t);
                    }
                }
            }

            cap_flow = cap_flow / two;
        }

        Ok(maxflow)
    }
}

fn finite_or_zero<F>(d: F) -> F
where
    F: PrimInt,
{
    if d == F::max_value() {
        F::zero()
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::CapacityScaling;
    use crate::digraph::Digraph;
    use crate::maxflow::AugmentingPath;
    use crate::mcf::MinCostFlow;
    use crate::shortestpath::{Bfs, Fifo};
    use crate::traits::*;

    /// The transient super-source leaves no trace, even though a scale
    /// iteration ends through the no-reachable-deficit break.
    #[test]
    fn test_graph_restored() {
        let mut g: Digraph<u32, u64> = Digraph::new();
        let mut res = vec![];
        let mut cost = vec![];
        for (i, (a, b, cap, w)) in [(0, 2, 4, 2), (2, 1, 3, 1), (0, 1, 2, 5)].iter().enumerate() {
            let (e, erev) = g.add_arc(*a, *b, i as u64).unwrap();
            res.resize(g.max_num_arcs(), 0i64);
            cost.resize(g.max_num_arcs(), 0i64);
            res[e.index()] = *cap;
            cost[e.index()] = *w;
            cost[erev.index()] = -*w;
        }

        let nodes = g.num_nodes();
        let arcs = g.num_arcs();
        let max_arcs = g.max_num_arcs();

        let s = g.get_node(0).unwrap();
        let t = g.get_node(1).unwrap();

        let mut solver: CapacityScaling<Fifo<i64>, AugmentingPath<Bfs>> = Default::default();
        let flow = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();

        assert_eq!(flow, 5);
        assert_eq!(g.num_nodes(), nodes);
        assert_eq!(g.num_arcs(), arcs);
        assert_eq!(g.max_num_nodes(), nodes);
        assert_eq!(g.max_num_arcs(), max_arcs);
    }
}
