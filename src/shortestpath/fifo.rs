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

//! FIFO label-correcting shortest paths.
//!
//! Nodes whose label improved are requeued until no label improves.
//! Pseudo-polynomial, but tolerates negative arc weights, which makes
//! it a valid engine for successive-shortest-path min-cost flow where
//! dual arcs carry negated costs. Behaviour is undefined if the
//! admissible subgraph contains a negative cycle.

use super::{SearchTree, ShortestPath};
use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::traits::{Arc, Node, ResidualGraph};

use std::collections::VecDeque;

/// Label-correcting engine with a FIFO candidate queue.
#[derive(Clone, Debug)]
pub struct Fifo<F> {
    tree: SearchTree,
    dist: Vec<F>,
}

impl<F> Default for Fifo<F> {
    fn default() -> Self {
        Fifo {
            tree: SearchTree::default(),
            dist: vec![],
        }
    }
}

impl<F> ShortestPath<F> for Fifo<F>
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

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for &e in g.out_arcs(node)? {
                if valid_arc(e) {
                    let (a, b) = g.arc_ends(e)?;
                    let dnew = self.dist[a.index()] + weight[e.index()];
                    if self.dist[b.index()] > dnew {
                        self.dist[b.index()] = dnew;
                        self.tree.parent[b.index()] = Some(e);
                        queue.push_back(b);
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
