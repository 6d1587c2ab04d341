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

//! Breadth-first path search.
//!
//! The cheapest engine of the family: a layered scan from the source
//! that stops as soon as the destination is dequeued. Distance labels
//! are hop counts and may be partial for nodes beyond the destination's
//! layer.

use super::{PathSearch, SearchTree, UNREACHED};
use crate::error::{Error, Result};
use crate::traits::{Arc, Node, ResidualGraph};

use std::collections::VecDeque;

/// Queue-based breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct Bfs {
    tree: SearchTree,
    dist: Vec<usize>,
}

impl PathSearch for Bfs {
    fn solve<G, P>(&mut self, g: &G, source: Node, dest: Node, valid_arc: P) -> Result<bool>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool,
    {
        if !g.is_valid_node(source) {
            return Err(Error::InvalidNode(source.index()));
        }
        if !g.is_valid_node(dest) {
            return Err(Error::InvalidNode(dest.index()));
        }

        self.tree.init(g.max_num_nodes());
        self.dist.clear();
        self.dist.resize(g.max_num_nodes(), UNREACHED);
        self.dist[source.index()] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            if node == dest {
                // reached through a parent arc; the root alone is no path
                return Ok(self.tree.is_reachable(dest));
            }
            for &e in g.out_arcs(node)? {
                if valid_arc(e) {
                    let (a, b) = g.arc_ends(e)?;
                    if self.dist[b.index()] == UNREACHED {
                        self.dist[b.index()] = self.dist[a.index()] + 1;
                        self.tree.parent[b.index()] = Some(e);
                        queue.push_back(b);
                    }
                }
            }
        }
        Ok(false)
    }

    fn reset(&mut self) {}

    fn parent_arc(&self, u: Node) -> Option<Arc> {
        self.tree.parent_arc(u)
    }

    fn distance(&self, u: Node) -> usize {
        self.dist.get(u.index()).copied().unwrap_or(UNREACHED)
    }

    fn path_to<G>(&self, g: &G, dest: Node) -> Vec<Arc>
    where
        G: ResidualGraph,
    {
        self.tree.path_to(g, dest)
    }
}
