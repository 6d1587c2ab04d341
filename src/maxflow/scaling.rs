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

//! Capacity-scaling augmenting-path maximum flow.
//!
//! Augments only along arcs with residual capacity at least `delta`,
//! halving `delta` whenever no such path remains. The initial `delta`
//! is the largest power of two not exceeding the source's best outgoing
//! residual capacity. Since the admissible subgraph changes with every
//! scale, the path engine's cache is reset at each halving.

use super::{check_arc_vec, check_endpoints, MaxFlow};
use crate::error::Result;
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::PathSearch;
use crate::traits::{Arc, Node, ResidualGraph};
use crate::util::lower_bound_power2;

use std::cmp::max;

/// Scaling max-flow, parametric over the path engine.
#[derive(Clone, Debug, Default)]
pub struct ScalingPath<S> {
    path: S,
}

impl<S, F> MaxFlow<F> for ScalingPath<S>
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
        let two = F::one() + F::one();
        let mut sent = F::zero();

        let mut cap_flow = F::one();
        for &e in g.out_arcs(source)? {
            cap_flow = max(cap_flow, residual_cap[e.index()]);
        }
        cap_flow = lower_bound_power2(cap_flow);

        while cap_flow > F::zero() {
            let found = self.path.solve(g, source, dest, |e| {
                residual_cap[e.index()] >= cap_flow && valid_arc(e)
            })?;

            if !found {
                cap_flow = cap_flow / two;
                self.path.reset();
                continue;
            }

            for e in self.path.path_to(g, dest) {
                residual_cap[e.index()] -= cap_flow;
                residual_cap[g.arc_dual(e)?.index()] += cap_flow;
            }

            sent += cap_flow;
        }
        Ok(sent)
    }
}
