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

//! Preflow-push (push-relabel) maximum flow.
//!
//! Distance labels are seeded by a reverse breadth-first search from
//! the sink. The source's label is pinned to the number of nodes and
//! all its admissible out-arcs are saturated; active nodes are then
//! discharged in FIFO order, pushing along admissible arcs
//! (`distance[u] == distance[v] + 1`) and relabelling when no push
//! applies. The flow value is the excess accumulated at the sink.

use super::{check_arc_vec, check_endpoints, MaxFlow};
use crate::error::Result;
use crate::num::traits::{NumAssign, PrimInt, Signed};
use crate::shortestpath::UNREACHED;
use crate::traits::{Arc, Node, ResidualGraph};

use std::cmp::min;
use std::collections::VecDeque;

/// FIFO preflow-push.
#[derive(Clone, Debug)]
pub struct Preflow<F> {
    dist: Vec<usize>,
    excess: Vec<F>,
}

impl<F> Default for Preflow<F> {
    fn default() -> Self {
        Preflow {
            dist: vec![],
            excess: vec![],
        }
    }
}

impl<F> Preflow<F>
where
    F: PrimInt + Signed + NumAssign,
{
    /// Exact distance labels towards `dest` by reverse BFS.
    fn initialize_distance<G, P>(&mut self, g: &G, dest: Node, valid_arc: &P) -> Result<()>
    where
        G: ResidualGraph,
        P: Fn(Arc) -> bool,
    {
        self.dist.clear();
        self.dist.resize(g.max_num_nodes(), UNREACHED);
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
                        queue.push_back(a);
                    }
                }
            }
        }
        Ok(())
    }
}

fn push<G, F>(
    g: &G,
    e: Arc,
    residual_cap: &mut [F],
    excess: &mut [F],
    queue: &mut VecDeque<Node>,
) -> Result<()>
where
    G: ResidualGraph,
    F: PrimInt + Signed + NumAssign,
{
    let (a, b) = g.arc_ends(e)?;
    let delta = min(excess[a.index()], residual_cap[e.index()]);

    residual_cap[e.index()] -= delta;
    residual_cap[g.arc_dual(e)?.index()] += delta;

    excess[a.index()] -= delta;
    excess[b.index()] += delta;

    if delta > F::zero() && excess[b.index()] == delta {
        queue.push_back(b);
    }
    Ok(())
}

impl<F> MaxFlow<F> for Preflow<F>
where
    F: PrimInt + Signed + NumAssign,
{
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
        P: Fn(Arc) -> bool,
    {
        check_endpoints(g, source, dest)?;
        check_arc_vec(g, residual_cap)?;
        if source == dest {
            return Ok(F::zero());
        }

        self.excess.clear();
        self.excess.resize(g.max_num_nodes(), F::zero());
        self.initialize_distance(g, dest, &valid_arc)?;

        let mut queue = VecDeque::new();

        // The source's excess is seeded with the total admissible
        // out-capacity, enough to saturate every out-arc.
        let mut total = F::zero();
        for &e in g.out_arcs(source)? {
            if valid_arc(e) {
                total += residual_cap[e.index()];
            }
        }
        self.excess[source.index()] = total;
        self.dist[source.index()] = g.num_nodes();

        let out: Vec<Arc> = g.out_arcs(source)?.to_vec();
        for e in out {
            if valid_arc(e) {
                push(g, e, residual_cap, &mut self.excess, &mut queue)?;
            }
        }

        while let Some(node) = queue.pop_front() {
            if node == dest || node == source {
                continue;
            }

            // discharge
            loop {
                for &e in g.out_arcs(node)? {
                    if valid_arc(e) && residual_cap[e.index()] > F::zero() {
                        let b = g.arc_ends(e)?.1;
                        let db = self.dist[b.index()];
                        if db != UNREACHED && self.dist[node.index()] == db + 1 {
                            push(g, e, residual_cap, &mut self.excess, &mut queue)?;
                        }
                    }
                }

                if self.excess[node.index()] == F::zero() {
                    break;
                }

                // relabel
                let mut hmin = UNREACHED;
                for &e in g.out_arcs(node)? {
                    if valid_arc(e) && residual_cap[e.index()] > F::zero() {
                        hmin = hmin.min(self.dist[g.arc_ends(e)?.1.index()]);
                    }
                }
                if hmin < UNREACHED {
                    self.dist[node.index()] = hmin + 1;
                }
            }
        }

        Ok(self.excess[dest.index()])
    }
}
