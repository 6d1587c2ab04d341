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

//! Successive shortest paths (Edmonds-Karp) min-cost flow.
//!
//! While the sink is reachable over arcs with positive residual
//! capacity, augment along a path of minimum total cost. Dual arcs
//! carry negated costs, so the path engine must tolerate negative
//! weights: compose with [`Fifo`][crate::shortestpath::Fifo] or
//! [`BellmanFord`][crate::shortestpath::BellmanFord]. Composing with
//! [`Dijkstra`][crate::shortestpath::Dijkstra] fails at runtime with
//! [`Error::NegativeWeight`][crate::error::Error::NegativeWeight] as
//! soon as a dual becomes admissible.
//!
//! # Example
//!
//! ```
//! use mincostflow::digraph::Digraph;
//! use mincostflow::maxflow::flow_at;
//! use mincostflow::mcf::{MinCostFlow, SspEdmondsKarp};
//! use mincostflow::shortestpath::Fifo;
//! use mincostflow::traits::*;
//!
//! let mut g: Digraph<u32, u64> = Digraph::new();
//! let mut res = vec![];
//! let mut cost = vec![];
//! for (i, (a, b, cap, w)) in [(0, 2, 2, 1), (0, 1, 5, 3), (2, 1, 7, 2), (1, 3, 8, 2), (0, 3, 6, 6)]
//!     .iter()
//!     .enumerate()
//! {
//!     let (e, erev) = g.add_arc(*a, *b, i as u64).unwrap();
//!     res.resize(g.max_num_arcs(), 0i64);
//!     cost.resize(g.max_num_arcs(), 0i64);
//!     res[e.index()] = *cap;
//!     cost[e.index()] = *w;
//!     cost[erev.index()] = -*w;
//! }
//!
//! let s = g.get_node(0).unwrap();
//! let t = g.get_node(1).unwrap();
//!
//! let mut solver: SspEdmondsKarp<Fifo<i64>> = Default::default();
//! let value = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();
//! assert_eq!(value, 7);
//!
//! let flows: Vec<_> = (0..5)
//!     .map(|i| flow_at(&g, g.get_arc(i).unwrap(), &res).unwrap())
//!     .collect();
//! assert_eq!(flows, vec![2, 5, 2, 0, 0]);
//! ```

use super::MinCostFlow;
use crate::error::Result;
use crate::maxflow::{check_arc_vec, check_endpoints};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::ShortestPath;
use crate::traits::{GrowableGraph, Node, ResidualGraph};

use std::cmp::min;

/// Min-cost flow by successive shortest paths.
#[derive(Clone, Debug, Default)]
pub struct SspEdmondsKarp<S> {
    path: S,
}

impl<S> SspEdmondsKarp<S> {
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
        F: PrimInt + Signed + NumAssign,
    {
        check_endpoints(g, source, dest)?;
        check_arc_vec(g, residual_cap)?;
        if source == dest {
            return Ok(F::zero());
        }

        let mut sent = F::zero();

        loop {
            self.path
                .solve(g, source, weight, |e| residual_cap[e.index()] > F::zero())?;

            if !self.path.is_reachable(dest) {
                break;
            }

            let path = self.path.path_to(g, dest);

            let mut k = F::max_value();
            for &e in &path {
                k = min(k, residual_cap[e.index()]);
            }

            for &e in &path {
                residual_cap[e.index()] -= k;
                residual_cap[g.arc_dual(e)?.index()] += k;
            }

            sent += k;
        }
        Ok(sent)
    }
}

impl<S, F> MinCostFlow<F> for SspEdmondsKarp<S>
where
    S: ShortestPath<F>,
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
