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

//! Path search engines over the residual network.
//!
//! Two families share one contract. The *path searches*
//! ([`Bfs`][bfs::Bfs], [`Labeling`][labeling::Labeling]) look for any
//! admissible `source -> dest` path; the *shortest path* engines
//! ([`Fifo`][fifo::Fifo], [`BellmanFord`][bellmanford::BellmanFord],
//! [`Dijkstra`][dijkstra::Dijkstra]) build a single-source tree under an
//! arc weight vector. Either way the result is a parent-arc tree from
//! which [`path_to`][PathSearch::path_to] reconstructs the arc sequence
//! from the source.
//!
//! A per-call predicate restricts the admissible subgraph; the flow
//! engines use it to encode conditions like "positive residual
//! capacity" or "zero reduced cost" without copying the graph.

pub mod bellmanford;
pub mod bfs;
pub mod dijkstra;
pub mod fifo;
pub mod labeling;

pub use self::bellmanford::BellmanFord;
pub use self::bfs::Bfs;
pub use self::dijkstra::Dijkstra;
pub use self::fifo::Fifo;
pub use self::labeling::Labeling;

use crate::error::Result;
use crate::traits::{Arc, Node, ResidualGraph};

/// Sentinel for an unreached node in hop-count distance labels.
pub const UNREACHED: usize = usize::MAX;

/// The parent-arc tree built by every engine.
///
/// `parent[u]` is the arc entering `u` on the current tree, `None` if
/// `u` has not been reached.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchTree {
    pub parent: Vec<Option<Arc>>,
}

impl SearchTree {
    pub fn init(&mut self, n: usize) {
        self.parent.clear();
        self.parent.resize(n, None);
    }

    pub fn parent_arc(&self, u: Node) -> Option<Arc> {
        self.parent.get(u.index()).copied().flatten()
    }

    pub fn is_reachable(&self, u: Node) -> bool {
        self.parent_arc(u).is_some()
    }

    /// Walk the tree back from `dest` and return the arcs in
    /// source-to-dest order. Empty if `dest` is unreached.
    pub fn path_to<G>(&self, g: &G, dest: Node) -> Vec<Arc>
    where
        G: ResidualGraph,
    {
        let mut path = vec![];
        let mut last = dest;
        while let Some(e) = self.parent_arc(last) {
            path.push(e);
            match g.arc_ends(e) {
                Ok((a, _)) => last = a,
                Err(_) => break,
            }
        }
        path.reverse();
        path
    }
}

/// An unweighted `source -> dest` path search.
pub trait PathSearch: Default {
    /// Search for an admissible path from `source` to `dest`.
    ///
    /// Returns `true` iff `dest` was reached through a parent arc; a
    /// search rooted at `dest` itself finds no path. The parent tree
    /// and the distance labels refer to the latest call.
    fn solve<G, P>(&mut self, g: &G, source: Node, dest: Node, valid_arc: P) -> Result<bool>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool;

    /// Drop any state cached across calls.
    fn reset(&mut self);

    /// The arc entering `u` on the current tree.
    fn parent_arc(&self, u: Node) -> Option<Arc>;

    /// Distance label of `u` ([`UNREACHED`] if unknown).
    fn distance(&self, u: Node) -> usize;

    fn is_reachable(&self, u: Node) -> bool {
        self.parent_arc(u).is_some()
    }

    /// The arcs of the found path in source-to-dest order.
    fn path_to<G>(&self, g: &G, dest: Node) -> Vec<Arc>
    where
        G: ResidualGraph;
}

/// A weighted single-source shortest-path engine.
///
/// Distances use `F::max_value()` as the unreached sentinel.
pub trait ShortestPath<F>: Default {
    /// Build the shortest-path tree from `source` under `weight`,
    /// restricted to predicate-admissible arcs.
    fn solve<G, P>(&mut self, g: &G, source: Node, weight: &[F], valid_arc: P) -> Result<()>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool;

    /// Distance labels indexed by node, `F::max_value()` if unreached.
    fn distances(&self) -> &[F];

    fn parent_arc(&self, u: Node) -> Option<Arc>;

    fn is_reachable(&self, u: Node) -> bool {
        self.parent_arc(u).is_some()
    }

    /// The arcs of the tree path to `dest` in source-to-dest order.
    fn path_to<G>(&self, g: &G, dest: Node) -> Vec<Arc>
    where
        G: ResidualGraph;
}
