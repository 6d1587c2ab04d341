/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Requires every predicate-admissible arc to have non-negative
//! weight; the scan raises [`Error::NegativeWeight`] otherwise. On raw
//! residual costs the dual arcs violate this, so the engine cannot be
//! composed with successive-shortest-path min-cost flow. It is the
//! engine of choice for the primal-dual solver, whose reduced costs
//! stay non-negative.
//!
//! # Example
//!
//! ```
//! use mincostflow::digraph::Digraph;
//! use mincostflow::shortestpath::{Dijkstra, ShortestPath};
//! use mincostflow::traits::*;
//!
//! let mut g: Digraph<u32, u64> = Digraph::new();
//! let mut weight = vec![];
//! for (i, (a, b, w)) in [(0, 1, 1), (0, 2, 9), (1, 3, 5), (1, 2, 1), (1, 0, 7), (3, 1, 4)]
//!     .iter()
//!     .enumerate()
//! {
//!     g.add_arc(*a, *b, i as u64).unwrap();
//!     weight.resize(g.max_num_arcs(), i64::MAX);
//!     weight[2 * i] = *w;
//! }
//!
//! let mut spp = Dijkstra::default();
//! spp.solve(&g, g.get_node(0).unwrap(), &weight, |e| weight[e.index()] < i64::MAX)
//!     .unwrap();
//!
//! let dist: Vec<_> = (0..4).map(|v| spp.distances()[g.get_node(v).unwrap().index()]).collect();
//! assert_eq!(dist, vec![0, 1, 2, 6]);
//! ```

use super::{SearchTree, ShortestPath};
use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::traits::{Arc, Node, ResidualGraph};

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Dijkstra's algorithm with a binary heap.
#[derive(Clone, Debug)]
pub struct Dijkstra<F> {
    tree: SearchTree,
    dist: Vec<F>,
}

impl<F> Default for Dijkstra<F> {
    fn default() -> Self {
        Dijkstra {
            tree: SearchTree::default(),
            dist: vec![],
        }
    }
}

impl<F> ShortestPath<F> for Dijkstra<F>
where
    F: PrimInt + Signed + NumAssign,
{
    fn solve<G, P>(&mut self, g: &G, source: Node, weight: &[F], valid_arc: P) -> Result<()>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool,
    {
        if !g.is_valid_node(source) {
            return Err(Error::InvalidNode(source.index()));
        }
        if weight.len() < g.max_num_arcs() {
            return Err(Error::ShortVector {
                len: weight.len(),
                need: g.max_num_arcs(),
            });
        }

        self.tree.init(g.max_num_nodes());
        self.dist.clear();
        self.dist.resize(g.max_num_nodes(), F::max_value());
        self.dist[source.index()] = F::zero();

        let mut visited = vec![false; g.max_num_nodes()];
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((F::zero(), source)));

        while let Some(Reverse((dist, node))) = queue.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;

            for &e in g.out_arcs(node)? {
                if valid_arc(e) {
                    let (_, b) = g.arc_ends(e)?;

                    if weight[e.index()] < F::zero() {
                        return Err(Error::NegativeWeight { arc: e.index() });
                    }

                    let dnew = dist + weight[e.index()];
                    if self.dist[b.index()] > dnew {
                        self.dist[b.index()] = dnew;
                        self.tree.parent[b.index()] = Some(e);
                        queue.push(Reverse((dnew, b)));
                    }
                }
            }
        }
        Ok(())
    }

    fn distances(&self) -> &[F] {
        &self.dist
    }

    fn parent_arc(&self, u: Node) -> Option<Arc> {
        self.tree.parent_arc(u)
    }

    fn path_to<G>(&self, g: &G, dest: Node) -> Vec<Arc>
    where
        G: ResidualGraph,
    {
        self.tree.path_to(g, dest)
    }
}
