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

//! Cost-scaling (epsilon-optimal push-relabel) min-cost flow.
//!
//! A maximum flow of any cost is computed once, then optimality is
//! tightened by epsilon scaling. Costs are multiplied by the number of
//! nodes so that integral potentials exist for every epsilon; the
//! starting epsilon is the largest power of two not exceeding the
//! largest scaled cost. Each scale first saturates every arc with
//! negative reduced cost (the *improve* step), then discharges active
//! nodes: push on an out-arc with reduced cost in `[-eps, 0)` and
//! positive residual, or lower the node's potential by `eps` when no
//! such arc exists. The invariant is epsilon-optimality, every residual
//! arc keeps a reduced cost of at least `-eps`; at `eps < 1/N` the flow
//! is cost-optimal.

use super::{push_excess, MinCostFlow};
use crate::error::Result;
use crate::maxflow::{check_arc_vec, check_endpoints, MaxFlow};
use crate::num::traits::{NumAssign, NumCast, PrimInt, Signed};
use crate::traits::{GrowableGraph, Node};

use std::cmp::min;
use std::collections::BTreeSet;

/// Cost-scaling min-cost flow, parametric over the max-flow engine
/// used for the initial feasible flow.
#[derive(Clone, Debug, Default)]
pub struct CostScaling<M> {
    maxflow: M,
}

impl<M, F> MinCostFlow<F> for CostScaling<M>
where
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

        let mut reduced = weight.to_vec();
        let mut potential = vec![F::zero(); g.max_num_nodes()];
        let mut excess = vec![F::zero(); g.max_num_nodes()];

        let n: F = NumCast::from(g.num_nodes()).unwrap();
        let mut max_cost = F::zero();
        for e in g.arcs() {
            reduced[e.index()] *= n;
            max_cost = max_cost.max(reduced[e.index()]);
        }
        let mut eps = crate::util::lower_bound_power2(max_cost);

        while eps > F::zero() {
            // improve: saturating every negative arc restores
            // eps-optimality and, through duality, zeroes the flow on
            // its positive dual
            for e in g.arcs() {
                if reduced[e.index()] < F::zero() && residual_cap[e.index()] > F::zero() {
                    let delta = residual_cap[e.index()];
                    push_excess(&*g, e, delta, residual_cap, &mut excess)?;
                }
            }

            let mut active: BTreeSet<Node> = BTreeSet::new();
            for v in g.nodes() {
                if excess[v.index()] > F::zero() {
                    active.insert(v);
                }
            }

            while let Some(&t) = active.iter().next() {
                let mut pushed = false;

                for &e in g.out_arcs(t)? {
                    let rw = reduced[e.index()];
                    let rc = residual_cap[e.index()];
                    if rw < F::zero() && rw >= -eps && rc > F::zero() {
                        pushed = true;
                        let (a, b) = g.arc_ends(e)?;
                        let delta = min(excess[a.index()], rc);

                        push_excess(&*g, e, delta, residual_cap, &mut excess)?;

                        if excess[a.index()] <= F::zero() {
                            active.remove(&a);
                        }
                        if excess[b.index()] > F::zero() {
                            active.insert(b);
                        }
                        break;
                    }
                }

                if !pushed {
                    // relabel: lower the potential by eps
                    potential[t.index()] -= eps;
                    for &e in g.out_arcs(t)? {
                        reduced[e.index()] -= eps;
                    }
                    for &e in g.in_arcs(t)? {
                        reduced[e.index()] += eps;
                    }
                }
            }

            eps = eps / two;
        }

        Ok(maxflow)
    }
}
