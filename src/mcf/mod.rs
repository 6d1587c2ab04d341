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

//! Minimum-cost maximum flow.
//!
//! All engines share one contract: given a cost vector with
//! `cost[dual(e)] == -cost[e]` and a residual capacity vector, send the
//! maximum flow from source to sink at minimum total cost and return
//! the flow value. The cost of the solution is recovered by the caller
//! as `sum(cost[e] * flow_at(e))` over the forward arcs.
//!
//! Engine composition follows the same pattern as max flow: the
//! successive-shortest-path engine is parametric over a weighted path
//! engine, primal-dual and capacity scaling over a path engine and a
//! max-flow engine, cost scaling over a max-flow engine only (used once
//! for the initial feasible flow).
//!
//! The graph is taken mutably: the capacity-scaling engine inserts a
//! transient super-source, which is guaranteed to be removed again on
//! every exit path. All other engines leave the graph untouched.

pub mod capacityscaling;
pub mod costscaling;
pub mod edmondskarp;
pub mod primaldual;

pub use self::capacityscaling::CapacityScaling;
pub use self::costscaling::CostScaling;
pub use self::edmondskarp::SspEdmondsKarp;
pub use self::primaldual::PrimalDual;

use crate::error::Result;
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::traits::{Arc, GrowableGraph, Node, ResidualGraph};

/// A minimum-cost-flow engine.
pub trait MinCostFlow<F>: Default {
    /// Send the maximum `source -> dest` flow at minimum cost.
    ///
    /// `weight` must be antisymmetric over dual pairs. The graph is
    /// structurally identical on return. If `source` equals `dest` the
    /// flow is zero and the residuals are left untouched.
    fn solve<G>(
        &mut self,
        g: &mut G,
        source: Node,
        dest: Node,
        weight: &[F],
        residual_cap: &mut Vec<F>,
    ) -> Result<F>
    where
        G: GrowableGraph;
}

/// Move `delta` units over `e`, updating residuals and node excesses.
pub(crate) fn push_excess<G, F>(
    g: &G,
    e: Arc,
    delta: F,
    residual_cap: &mut [F],
    excess: &mut [F],
) -> Result<()>
where
    G: ResidualGraph,
    F: PrimInt + Signed + NumAssign,
{
    let (src, dst) = g.arc_ends(e)?;

    residual_cap[e.index()] -= delta;
    residual_cap[g.arc_dual(e)?.index()] += delta;

    excess[src.index()] -= delta;
    excess[dst.index()] += delta;
    Ok(())
}
