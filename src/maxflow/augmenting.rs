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

//! The augmenting-path maximum-flow algorithm.
//!
//! Repeatedly asks its path engine for any admissible path with
//! positive residual capacity and saturates the bottleneck. With the
//! [`Labeling`][crate::shortestpath::Labeling] engine this is the
//! shortest-augmenting-path algorithm with gap relabelling; with
//! [`Bfs`][crate::shortestpath::Bfs] it is Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use mincostflow::digraph::Digraph;
//! use mincostflow::maxflow::{flow_at, AugmentingPath, MaxFlow};
//! use mincostflow::shortestpath::Labeling;
//! use mincostflow::traits::*;
//!
//! let mut g: Digraph<u32, u64> = Digraph::new();
//! let mut res = vec![];
//! for (i, (a, b, cap)) in [(0, 2, 1), (0, 3, 2), (3, 2, 2), (2, 1, 2), (3, 1, 2)]
//!     .iter()
//!     .enumerate()
//! {
//!     let (e, _) = g.add_arc(*a, *b, i as u64).unwrap();
//!     res.resize(g.max_num_arcs(), 0);
//!     res[e.index()] = *cap;
//! }
//!
//! let s = g.get_node(0).unwrap();
//! let t = g.get_node(1).unwrap();
//!
//! let mut solver: AugmentingPath<Labeling> = Default::default();
//! let value = solver.solve(&g, s, t, &mut res, |_| true).unwrap();
//!
//! assert_eq!(value, 3);
//! let e = g.get_arc(0).unwrap();
//! assert_eq!(flow_at(&g, e, &res).unwrap(), 1);
//! ```

use super::{check_arc_vec, check_endpoints, MaxFlow};
use crate::error::Result;
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::PathSearch;
use crate::traits::{Arc, Node, ResidualGraph};

use std::cmp::min;

/// Augmenting-path max-flow, parametric over the path engine.
#[derive(Clone, Debug, Default)]
pub struct AugmentingPath<S> {
    path: S,
}

impl<S, F> MaxFlow<F> for AugmentingPath<S>
where
    S: PathSearch,
    F: PrimInt + Signed + NumAssign,
{
    fn solve<G, P>(
        &mut self,
        g: &G,
        source: Node,
        dest: Node,
        residual_cap: &mut Vec<F>,
        valid_arc: P,
    ) -> Result<F>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool,
    {
        check_endpoints(g, source, dest)?;
        check_arc_vec(g, residual_cap)?;
        if source == dest {
            return Ok(F::zero());
        }

        self.path.reset();
        let mut sent = F::zero();

        loop {
            let found = self.path.solve(g, source, dest, |e| {
                residual_cap[e.index()] > F::zero() && valid_arc(e)
            })?;
            if !found {
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
