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

//! Maximum flow on the residual network.
//!
//! Every engine consumes a residual capacity vector indexed by arc
//! handle and mutates it in place, preserving the pairing invariant
//! `residual[e] + residual[dual(e)] == capacity(e)`. The flow over a
//! user arc is the residual capacity of its dual, see [`flow_at`].
//!
//! The augmenting-path and capacity-scaling engines are parametric over
//! a [`PathSearch`][crate::shortestpath::PathSearch] engine; the
//! preflow-push engine searches no paths at all.

pub mod augmenting;
pub mod preflow;
pub mod scaling;

pub use self::augmenting::AugmentingPath;
pub use self::preflow::Preflow;
pub use self::scaling::ScalingPath;

use crate::error::{Error, Result};
use crate::traits::{Arc, Node, ResidualGraph};

/// A maximum-flow engine.
pub trait MaxFlow<F>: Default {
    /// Send as much flow as possible from `source` to `dest` through
    /// the predicate-admissible subgraph and return the amount.
    ///
    /// `residual_cap` is updated in place: subtracted along used arcs,
    /// added on their duals. If `source` equals `dest` there is nothing
    /// to send: the flow is zero and the residuals are left untouched.
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
        P: Fn(Arc) -> bool;
}

/// The flow over an arc under the given residual capacities.
pub fn flow_at<G, F>(g: &G, e: Arc, residual_cap: &[F]) -> Result<F>
where
    G: ResidualGraph,
    F: Copy,
{
    let dual = g.arc_dual(e)?;
    residual_cap
        .get(dual.index())
        .copied()
        .ok_or(Error::ShortVector {
            len: residual_cap.len(),
            need: dual.index() + 1,
        })
}

pub(crate) fn check_arc_vec<G, F>(g: &G, v: &[F]) -> Result<()>
where
    G: ResidualGraph,
{
    if v.len() < g.max_num_arcs() {
        Err(Error::ShortVector {
            len: v.len(),
            need: g.max_num_arcs(),
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_endpoints<G>(g: &G, source: Node, dest: Node) -> Result<()>
where
    G: ResidualGraph,
{
    if !g.is_valid_node(source) {
        return Err(Error::InvalidNode(source.index()));
    }
    if !g.is_valid_node(dest) {
        return Err(Error::InvalidNode(dest.index()));
    }
    Ok(())
}
