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

//! Distance-labeling path search.
//!
//! The engine of choice for repeated augmentation against the same
//! `(source, dest)` pair. A one-time reverse breadth-first search from
//! the destination seeds exact distance labels; subsequent calls repair
//! the labels with the advance/retreat/relabel mechanic instead of
//! searching from scratch (Ahuja, Magnanti & Orlin, ch. 7).
//!
//! Two certificates end a search early: the source's label reaching the
//! number of nodes (the destination is disconnected), and a distance
//! value whose frequency drops to zero (gap relabelling, no augmenting
//! path can cross the empty level).
//!
//! The cached labels belong to one `(source, dest)` pair; solving for a
//! different pair or calling [`reset`][super::PathSearch::reset]
//! rebuilds them.

use super::{PathSearch, SearchTree, UNREACHED};
use crate::error::{Error, Result};
use crate::traits::{Arc, Node, ResidualGraph};

use std::collections::VecDeque;

/// Path search with persistent distance labels and gap relabelling.
#[derive(Clone, Debug, Default)]
pub struct Labeling {
    tree: SearchTree,
    dist: Vec<usize>,
    dist_freq: Vec<i64>,
    last_source: Option<Node>,
    last_dest: Option<Node>,
}

impl Labeling {
    /// Seed exact labels by a reverse BFS from `dest`.
    fn initialize<G, P>(&mut self, g: &G, dest: Node, valid_arc: &P) -> Result<()>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool,
    {
        self.tree.init(g.max_num_nodes());
        self.dist.clear();
        self.dist.resize(g.max_num_nodes(), UNREACHED);
        self.dist_freq.clear();
        self.dist_freq.resize(g.num_nodes() + 1, 0);

        self.dist[dest.index()] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(dest);

        while let Some(n) = queue.pop_front() {
            for &e in g.in_arcs(n)? {
                if valid_arc(e) {
                    let (a, b) = g.arc_ends(e)?;
                    let dnew = self.dist[b.index()] + 1;
                    if self.dist[a.index()] == UNREACHED {
                        self.dist[a.index()] = dnew;
                        self.dist_freq[dnew] += 1;
                        queue.push_back(a);
                    }
                }
            }
        }
        Ok(())
    }
}

impl PathSearch for Labeling {
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

        if self.last_source != Some(source) || self.last_dest != Some(dest) {
            self.last_source = Some(source);
            self.last_dest = Some(dest);
            self.initialize(g, dest, &valid_arc)?;
        }

        self.tree.init(g.max_num_nodes());

        let n = g.num_nodes();
        let mut current = source;

        while self.dist[source.index()] < n && current != dest {
            // advance along an arc on a shortest path to dest
            let mut advanced = false;
            for &e in g.out_arcs(current)? {
                let (_, next) = g.arc_ends(e)?;
                let dnext = self.dist[next.index()];
                if valid_arc(e) && dnext != UNREACHED && self.dist[current.index()] == dnext + 1 {
                    self.tree.parent[next.index()] = Some(e);
                    current = next;
                    advanced = true;
                    break;
                }
            }
            if advanced {
                continue;
            }

            // relabel
            let mut min_dist = n + 10;
            for &e in g.out_arcs(current)? {
                if valid_arc(e) {
                    let (_, next) = g.arc_ends(e)?;
                    min_dist = min_dist.min(self.dist[next.index()]);
                }
            }
            {
                let new_dist = min_dist + 1;
                let old_dist = self.dist[current.index()];
                self.dist[current.index()] = new_dist;
                if new_dist < self.dist_freq.len() {
                    self.dist_freq[new_dist] += 1;
                }
                self.dist_freq[old_dist] -= 1;
                if self.dist_freq[old_dist] == 0 {
                    // gap: no augmenting path crosses the empty level
                    break;
                }
            }

            // retreat
            if let Some(e) = self.tree.parent_arc(current) {
                current = g.arc_ends(e)?.0;
            }
        }

        Ok(self.tree.is_reachable(dest))
    }

    fn reset(&mut self) {
        self.last_source = None;
        self.last_dest = None;
    }

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
