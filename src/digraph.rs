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

//! A directed multigraph with paired dual arcs.
//!
//! This is the topological substrate of the residual network. Every
//! user arc `(a,b)` is stored as two arcs, the forward arc `a -> b` and
//! its dual `b -> a`, so that flow algorithms can push along either
//! direction of the pair. The structure holds topology only; capacities
//! and costs live in plain vectors indexed by arc handle, sized to
//! [`max_num_arcs`][crate::traits::ResidualGraph::max_num_arcs].
//!
//! Nodes and arcs may carry external ids of user-chosen types. The
//! external id of an arc pair is registered on the forward arc only;
//! the dual is reachable through [`arc_dual`][crate::traits::ResidualGraph::arc_dual].
//!
//! # Example
//!
//! ```
//! use mincostflow::digraph::Digraph;
//! use mincostflow::traits::*;
//!
//! let mut g: Digraph<u32, u64> = Digraph::new();
//! let (e, erev) = g.add_arc(0, 1, 100).unwrap();
//!
//! assert_eq!(g.arc_dual(e), Ok(erev));
//! assert_eq!(g.arc_dual(erev), Ok(e));
//! assert_eq!(g.num_nodes(), 2);
//! assert_eq!(g.num_arcs(), 2);
//! assert_eq!(g.arc_id(e), Ok(100));
//! assert!(g.arc_id(erev).is_err());
//! ```

use crate::collections::slotmap::{Keys, SlotMap};
use crate::error::{Error, Result};
use crate::traits::{Arc, GrowableGraph, Node, ResidualGraph};

use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
struct NodeData {
    out_arcs: Vec<Arc>,
    in_arcs: Vec<Arc>,
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
struct ArcData {
    a: Node,
    b: Node,
    dual: Option<Arc>,
}

/// A directed multigraph over slot maps, with external ids.
///
/// `N` and `A` are the external node and arc id types.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Digraph<N, A>
where
    N: Copy + Eq + Hash,
    A: Copy + Eq + Hash,
{
    nodes: SlotMap<NodeData>,
    arcs: SlotMap<ArcData>,

    node_ids: Vec<Option<N>>,
    arc_ids: Vec<Option<A>>,
    node_htable: HashMap<N, Node>,
    arc_htable: HashMap<A, Arc>,
}

impl<N, A> Default for Digraph<N, A>
where
    N: Copy + Eq + Hash,
    A: Copy + Eq + Hash,
{
    fn default() -> Self {
        Digraph::new()
    }
}

fn unlink(list: &mut Vec<Arc>, arc: Arc) {
    if let Some(pos) = list.iter().position(|&x| x == arc) {
        list.swap_remove(pos);
    }
}

impl<N, A> Digraph<N, A>
where
    N: Copy + Eq + Hash,
    A: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Digraph {
            nodes: SlotMap::new(),
            arcs: SlotMap::new(),
            node_ids: vec![],
            arc_ids: vec![],
            node_htable: HashMap::new(),
            arc_htable: HashMap::new(),
        }
    }

    fn node_data(&self, u: Node) -> Result<&NodeData> {
        self.nodes.at(u.0).map_err(|_| Error::InvalidNode(u.0))
    }

    fn arc_data(&self, e: Arc) -> Result<&ArcData> {
        self.arcs.at(e.0).map_err(|_| Error::InvalidArc(e.0))
    }

    /// Return `true` if the node carries an external id.
    pub fn has_node_id(&self, u: Node) -> bool {
        self.nodes.is_valid(u.0) && self.node_ids[u.0].is_some()
    }

    /// Return `true` if the arc carries an external id.
    pub fn has_arc_id(&self, e: Arc) -> bool {
        self.arcs.is_valid(e.0) && self.arc_ids[e.0].is_some()
    }

    /// Return the external id of a node.
    pub fn node_id(&self, u: Node) -> Result<N> {
        if !self.nodes.is_valid(u.0) {
            return Err(Error::InvalidNode(u.0));
        }
        self.node_ids[u.0].ok_or(Error::NoNodeId(u.0))
    }

    /// Return the external id of an arc.
    ///
    /// Only forward arcs carry an id; on a dual this fails.
    pub fn arc_id(&self, e: Arc) -> Result<A> {
        if !self.arcs.is_valid(e.0) {
            return Err(Error::InvalidArc(e.0));
        }
        self.arc_ids[e.0].ok_or(Error::NoArcId(e.0))
    }

    /// Look up a node by external id.
    pub fn get_node(&self, id: N) -> Option<Node> {
        self.node_htable.get(&id).copied()
    }

    /// Look up a forward arc by external id.
    pub fn get_arc(&self, id: A) -> Option<Arc> {
        self.arc_htable.get(&id).copied()
    }

    /// Add a node with an external id.
    ///
    /// Idempotent: if the id is already registered the existing handle
    /// is returned.
    pub fn add_node(&mut self, id: N) -> Node {
        if let Some(u) = self.get_node(id) {
            return u;
        }
        let u = self.new_node();
        self.node_ids[u.0] = Some(id);
        self.node_htable.insert(id, u);
        u
    }

    /// Add a user arc between two external node ids.
    ///
    /// Creates the forward arc and its dual, registers them as mutual
    /// duals and registers `id` on the forward arc. Missing endpoint
    /// nodes are created. Fails if `id` is already registered.
    pub fn add_arc(&mut self, a: N, b: N, id: A) -> Result<(Arc, Arc)> {
        let na = self.add_node(a);
        let nb = self.add_node(b);

        if self.get_arc(id).is_some() {
            return Err(Error::DuplicateArcId);
        }

        let e1 = self.new_arc(na, nb)?;
        let e2 = self.new_arc(nb, na)?;
        self.set_dual(e1, e2)?;

        self.arc_ids[e1.0] = Some(id);
        self.arc_htable.insert(id, e1);

        Ok((e1, e2))
    }

    /// Remove a user arc and its dual by external id. Unknown ids are
    /// ignored.
    pub fn remove_arc(&mut self, id: A) {
        if let Some(e) = self.get_arc(id) {
            let dual = self.arcs[e.0].dual;
            self.erase_arc(e);
            if let Some(e2) = dual {
                self.erase_arc(e2);
            }
        }
    }

    /// Remove a node and all incident arcs by external id. Unknown ids
    /// are ignored.
    pub fn remove_node(&mut self, id: N) {
        if let Some(u) = self.get_node(id) {
            self.erase_node(u);
        }
    }
}

/// Iterator over the live nodes of a [`Digraph`].
#[derive(Clone)]
pub struct NodeIter<'a>(Keys<'a, NodeData>);

impl<'a> Iterator for NodeIter<'a> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        self.0.next().map(Node)
    }
}

/// Iterator over the live arcs of a [`Digraph`].
#[derive(Clone)]
pub struct ArcIter<'a>(Keys<'a, ArcData>);

impl<'a> Iterator for ArcIter<'a> {
    type Item = Arc;

    fn next(&mut self) -> Option<Arc> {
        self.0.next().map(Arc)
    }
}

impl<N, A> ResidualGraph for Digraph<N, A>
where
    N: Copy + Eq + Hash,
    A: Copy + Eq + Hash,
{
    type NodeIt<'a>
        = NodeIter<'a>
    where
        Self: 'a;

    type ArcIt<'a>
        = ArcIter<'a>
    where
        Self: 'a;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    fn max_num_nodes(&self) -> usize {
        self.nodes.capacity()
    }

    fn max_num_arcs(&self) -> usize {
        self.arcs.capacity()
    }

    fn is_valid_node(&self, u: Node) -> bool {
        self.nodes.is_valid(u.0)
    }

    fn is_valid_arc(&self, e: Arc) -> bool {
        self.arcs.is_valid(e.0)
    }

    fn arc_ends(&self, e: Arc) -> Result<(Node, Node)> {
        let data = self.arc_data(e)?;
        Ok((data.a, data.b))
    }

    fn arc_dual(&self, e: Arc) -> Result<Arc> {
        self.arc_data(e)?.dual.ok_or(Error::InvalidArc(e.0))
    }

    fn out_arcs(&self, u: Node) -> Result<&[Arc]> {
        Ok(&self.node_data(u)?.out_arcs)
    }

    fn in_arcs(&self, u: Node) -> Result<&[Arc]> {
        Ok(&self.node_data(u)?.in_arcs)
    }

    fn nodes(&self) -> NodeIter<'_> {
        NodeIter(self.nodes.keys())
    }

    fn arcs(&self) -> ArcIter<'_> {
        ArcIter(self.arcs.keys())
    }
}

impl<N, A> GrowableGraph for Digraph<N, A>
where
    N: Copy + Eq + Hash,
    A: Copy + Eq + Hash,
{
    fn new_node(&mut self) -> Node {
        let u = Node(self.nodes.insert(NodeData::default()));
        self.node_ids.resize(self.nodes.capacity(), None);
        self.node_ids[u.0] = None;
        u
    }

    fn new_arc(&mut self, a: Node, b: Node) -> Result<Arc> {
        if !self.nodes.is_valid(a.0) {
            return Err(Error::InvalidNode(a.0));
        }
        if !self.nodes.is_valid(b.0) {
            return Err(Error::InvalidNode(b.0));
        }

        let e = Arc(self.arcs.insert(ArcData { a, b, dual: None }));
        self.arc_ids.resize(self.arcs.capacity(), None);
        self.arc_ids[e.0] = None;

        self.nodes[a.0].out_arcs.push(e);
        self.nodes[b.0].in_arcs.push(e);
        Ok(e)
    }

    fn set_dual(&mut self, e1: Arc, e2: Arc) -> Result<()> {
        if !self.arcs.is_valid(e1.0) {
            return Err(Error::InvalidArc(e1.0));
        }
        if !self.arcs.is_valid(e2.0) {
            return Err(Error::InvalidArc(e2.0));
        }
        self.arcs[e1.0].dual = Some(e2);
        self.arcs[e2.0].dual = Some(e1);
        Ok(())
    }

    fn erase_node(&mut self, u: Node) {
        if !self.nodes.is_valid(u.0) {
            return;
        }

        // incident arcs first, both directions of each pair
        let mut incident = self.nodes[u.0].in_arcs.clone();
        incident.extend_from_slice(&self.nodes[u.0].out_arcs);
        for e in incident {
            self.erase_arc(e);
        }

        if let Some(id) = self.node_ids[u.0] {
            self.node_htable.remove(&id);
        }
        self.nodes.erase(u.0);
        self.node_ids.resize(self.nodes.capacity(), None);
    }

    fn erase_arc(&mut self, e: Arc) {
        if !self.arcs.is_valid(e.0) {
            return;
        }

        let ArcData { a, b, dual } = self.arcs[e.0];

        unlink(&mut self.nodes[a.0].out_arcs, e);
        unlink(&mut self.nodes[a.0].in_arcs, e);
        unlink(&mut self.nodes[b.0].out_arcs, e);
        unlink(&mut self.nodes[b.0].in_arcs, e);

        // the partner keeps no dangling dual reference
        if let Some(e2) = dual {
            if self.arcs.is_valid(e2.0) {
                self.arcs[e2.0].dual = None;
            }
        }

        if let Some(id) = self.arc_ids[e.0] {
            self.arc_htable.remove(&id);
        }
        self.arcs.erase(e.0);
        self.arc_ids.resize(self.arcs.capacity(), None);
    }
}
