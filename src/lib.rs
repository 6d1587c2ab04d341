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

//! Min-cost max-flow on residual networks.
//!
//! The library computes maximum flows of minimum total cost on directed
//! multigraphs with integer capacities and costs. It grew out of
//! probabilistic payment routing, where a routing session solves many
//! min-cost-flow problems on a slowly mutating channel graph; the core
//! itself knows nothing about payments and sees only integer
//! capacities and costs.
//!
//! Three layers compose:
//!
//! 1. the [`digraph`] substrate, a multigraph storing every arc
//!    together with a dual reverse arc so that a plain capacity vector
//!    becomes a residual network,
//! 2. the [`shortestpath`] engines, interchangeable path searches over
//!    the admissible subgraph,
//! 3. the [`maxflow`] and [`mcf`] engines, each parametric over the
//!    path (and max-flow) engine it augments with.
//!
//! # Example
//!
//! ```
//! use mincostflow::digraph::Digraph;
//! use mincostflow::maxflow::{flow_at, AugmentingPath};
//! use mincostflow::mcf::{MinCostFlow, PrimalDual};
//! use mincostflow::shortestpath::{Dijkstra, Labeling};
//! use mincostflow::traits::*;
//!
//! // build the graph; every arc gets capacity and cost,
//! // the implicit dual gets zero capacity and negated cost
//! let mut g: Digraph<u32, u64> = Digraph::new();
//! let mut res = vec![];
//! let mut cost = vec![];
//! for (id, (a, b, cap, w)) in [(0, 2, 2, 1), (0, 1, 5, 3), (2, 1, 7, 2), (1, 3, 8, 2)]
//!     .iter()
//!     .enumerate()
//! {
//!     let (e, erev) = g.add_arc(*a, *b, id as u64).unwrap();
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
//! let mut solver: PrimalDual<Dijkstra<i64>, AugmentingPath<Labeling>> = Default::default();
//! let flow = solver.solve(&mut g, s, t, &cost, &mut res).unwrap();
//! assert_eq!(flow, 7);
//!
//! let total_cost: i64 = (0..4)
//!     .map(|id| {
//!         let e = g.get_arc(id).unwrap();
//!         cost[e.index()] * flow_at(&g, e, &res).unwrap()
//!     })
//!     .sum();
//! assert_eq!(total_cost, 21);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod collections;

pub mod traits;
pub use self::traits::{Arc, GrowableGraph, Node, ResidualGraph};

pub mod digraph;
pub use self::digraph::Digraph;

pub mod error;
pub use self::error::{Error, Result};

// # Algorithms

pub mod maxflow;
pub mod mcf;
pub mod shortestpath;

pub mod util;
