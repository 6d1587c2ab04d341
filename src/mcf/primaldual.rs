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

//! Primal-dual min-cost flow.
//!
//! Alternates between a shortest-path computation under reduced costs
//! and a maximum flow restricted to the admissible subgraph of
//! zero-reduced-cost arcs. After each distance computation the reduced
//! cost of every arc with finite endpoint distances is updated by
//! `distance[src] - distance[dst]`, which zeroes the shortest-path arcs
//! and keeps all reduced costs non-negative. The first round sees the
//! raw weights, which are non-negative on forward arcs and only
//! admissible there, so [`Dijkstra`][crate::shortestpath::Dijkstra] is
//! a valid path engine for this solver.

use super::MinCostFlow;
use crate::error::Result;
use crate::maxflow::{check_arc_vec, check_endpoints, MaxFlow};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::ShortestPath;
use crate::traits::{GrowableGraph, Node, ResidualGraph};

/// Primal-dual min-cost flow, parametric over the path and max-flow
/// engines.
#[derive(Clone, Debug, Default)]
pub struct PrimalDual<S, M> {
    path: S,
    maxflow: M,
}

impl<S, M> PrimalDual<S, M> {
    /// Solve on an immutably borrowed graph.
    pub fn run<G, F>(
        &mut self,
        g: &G,
        source: Node,
        dest: Node,
        weight: &[F],
        residual_cap: &mut Vec<F>,
    ) -> Result<F>
    where
        G: ResidualGraph,
        S: ShortestPath<F>,
        M: MaxFlow<F>,
        F: PrimInt + Signed + NumAssign,
    {
        check_endpoints(g, source, dest)?;
        check_arc_vec(g, residual_cap)?;
        check_arc_vec(g, weight)?;
        if source == dest {
            return Ok(F::zero());
        }

        let mut reduced = weight.to_vec();
        let mut sent = F::zero();

        loop {
            self.path
                .solve(g, source, &reduced, |e| residual_cap[e.index()] > F::zero())?;

            if !self.path.is_reachable(dest) {
                break;
            }

            let distance = self.path.distances();
            for e in g.arcs() {
                let (a, b) = g.arc_ends(e)?;
                let (da, db) = (distance[a.index()], distance[b.index()]);
                if da < F::max_value() && db < F::max_value() {
                    reduced[e.index()] += da - db;
                }
            }

            let flow = self.maxflow.solve(g, source, dest, residual_cap, |e| {
                reduced[e.index()] == F::zero()
            })?;

            sent += flow;
        }
        Ok(sent)
    }
}

impl<S, M, F> MinCostFlow<F> for PrimalDual<S, M>
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
        self.run(&*g, source, dest, weight, residual_cap)
    }
}
