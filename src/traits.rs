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

//! Traits for residual network data structures.
//!
//! All solvers are generic over these traits rather than over a
//! concrete graph type. [`ResidualGraph`] is the read-only topology
//! every engine consumes; [`GrowableGraph`] adds the low-level mutation
//! primitives needed by solvers that temporarily extend the network
//! (the capacity-scaling min-cost-flow engine and its transient
//! super-source).

use crate::error::Result;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Handle of a node.
///
/// An opaque dense index that stays valid until the node is erased;
/// unrelated insertions and erasures never invalidate it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Node(pub(crate) usize);

impl Node {
    /// The position of this node in the node slot map.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle of an arc.
///
/// Every logical arc is stored as two mutually dual arcs, each with its
/// own handle. Handles are stable in the same sense as node handles.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arc(pub(crate) usize);

impl Arc {
    /// The position of this arc in the arc slot map.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to a residual network.
pub trait ResidualGraph {
    /// Iterator over all live nodes in ascending handle order.
    type NodeIt<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    /// Iterator over all live arcs in ascending handle order.
    ///
    /// Both members of every dual pair are visited.
    type ArcIt<'a>: Iterator<Item = Arc>
    where
        Self: 'a;

    /// Number of live nodes.
    fn num_nodes(&self) -> usize;

    /// Number of live arcs (duals counted).
    fn num_arcs(&self) -> usize;

    /// Capacity of the node slot map.
    ///
    /// This is the right size for auxiliary vectors indexed by node.
    fn max_num_nodes(&self) -> usize;

    /// Capacity of the arc slot map.
    ///
    /// This is the right size for auxiliary vectors indexed by arc.
    fn max_num_arcs(&self) -> usize;

    fn is_valid_node(&self, u: Node) -> bool;

    fn is_valid_arc(&self, e: Arc) -> bool;

    /// Return the `(source, sink)` endpoints of an arc.
    fn arc_ends(&self, e: Arc) -> Result<(Node, Node)>;

    /// Return the dual of an arc. `arc_dual(arc_dual(e)) == e`.
    fn arc_dual(&self, e: Arc) -> Result<Arc>;

    /// The arcs leaving `u`, in insertion order.
    fn out_arcs(&self, u: Node) -> Result<&[Arc]>;

    /// The arcs entering `u`, in insertion order.
    fn in_arcs(&self, u: Node) -> Result<&[Arc]>;

    fn nodes(&self) -> Self::NodeIt<'_>;

    fn arcs(&self) -> Self::ArcIt<'_>;
}

/// Low-level mutation of a residual network.
///
/// These primitives do not maintain the external id tables; they exist
/// for solvers that add and remove transient structure and restore the
/// graph before returning.
pub trait GrowableGraph: ResidualGraph {
    /// Add a fresh node without an external id.
    fn new_node(&mut self) -> Node;

    /// Add a single arc from `a` to `b` without a dual or an id.
    fn new_arc(&mut self, a: Node, b: Node) -> Result<Arc>;

    /// Register `e1` and `e2` as mutual duals.
    fn set_dual(&mut self, e1: Arc, e2: Arc) -> Result<()>;

    /// Erase a node and all its incident arcs. Invalid handles are ignored.
    fn erase_node(&mut self, u: Node);

    /// Erase a single arc (not its dual). Invalid handles are ignored.
    fn erase_arc(&mut self, e: Arc);
}
