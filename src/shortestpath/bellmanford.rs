// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Bellman-Ford shortest paths.
//!
//! At most `|V|` relaxation passes over all arcs, leaving early once a
//! pass makes no update. Tolerates negative arc weights. Negative
//! cycles in the admissible subgraph are not detected; callers must not
//! present such inputs.

use super::{SearchTree, ShortestPath};
use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::traits::{Arc, Node, ResidualGraph};

/// The Bellman-Ford algorithm.
#[derive(Clone, Debug)]
pub struct BellmanFord<F> {
    tree: SearchTree,
    dist: Vec<F>,
}

impl<F> Default for BellmanFord<F> {
    fn default() -> Self {
        BellmanFord {
            tree: SearchTree::default(),
            dist: vec![],
        }
    }
}

impl<F> ShortestPath<F> for BellmanFord<F>
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

        for _ in 0..g.num_nodes() {
            let mut updates = false;
            for e in g.arcs() {
                if valid_arc(e) {
                    let (a, b) = g.arc_ends(e)?;
                    if self.dist[a.index()] == F::max_value() {
                        continue;
                    }
                    let dnew = self.dist[a.index()] + weight[e.index()];
                    if self.dist[b.index()] > dnew {
                        self.dist[b.index()] = dnew;
                        self.tree.parent[b.index()] = Some(e);
                        updates = true;
                    }
                }
            }
            if !updates {
                break;
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
