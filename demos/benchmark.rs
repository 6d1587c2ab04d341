/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Benchmark the min-cost-flow solvers on a problem read from stdin.
//!
//! Input format: a line `N M S T` followed by `M` lines `a b cap cost`.
//! One line `<name> <microseconds>` is printed per solver. The process
//! exits non-zero if any solver disagrees on the flow value or the
//! total cost.

use rustop::opts;
use time::OffsetDateTime;

use mincostflow::digraph::Digraph;
use mincostflow::maxflow::{flow_at, AugmentingPath};
use mincostflow::mcf::{CostScaling, MinCostFlow, PrimalDual, SspEdmondsKarp};
use mincostflow::shortestpath::{Dijkstra, Fifo, Labeling};
use mincostflow::traits::*;

use std::io::Read;

struct Problem {
    g: Digraph<usize, usize>,
    arcs: Vec<(usize, usize)>,
    caps: Vec<i64>,
    costs: Vec<i64>,
    source: usize,
    sink: usize,
}

fn read_problem() -> Problem {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).expect("cannot read stdin");
    let mut toks = input.split_whitespace();
    let mut next = move || toks.next().expect("unexpected end of input");

    let n: usize = next().parse().unwrap();
    let m: usize = next().parse().unwrap();
    let source: usize = next().parse().unwrap();
    let sink: usize = next().parse().unwrap();

    let mut g = Digraph::new();
    for v in 0..n {
        g.add_node(v);
    }

    let mut arcs = vec![];
    let mut caps = vec![];
    let mut costs = vec![];
    for e in 0..m {
        let a: usize = next().parse().unwrap();
        let b: usize = next().parse().unwrap();
        let cap: i64 = next().parse().unwrap();
        let cost: i64 = next().parse().unwrap();

        g.add_arc(a, b, e).expect("duplicate arc id");
        arcs.push((a, b));
        caps.push(cap);
        costs.push(cost);
    }

    Problem {
        g,
        arcs,
        caps,
        costs,
        source,
        sink,
    }
}

/// Fresh residual capacity and cost vectors for one solver run.
fn residuals(p: &Problem) -> (Vec<i64>, Vec<i64>) {
    let mut res = vec![0; p.g.max_num_arcs()];
    let mut cost = vec![0; p.g.max_num_arcs()];
    for e in 0..p.caps.len() {
        let arc = p.g.get_arc(e).unwrap();
        let dual = p.g.arc_dual(arc).unwrap();

        res[arc.index()] = p.caps[e];
        res[dual.index()] = 0;

        cost[arc.index()] = p.costs[e];
        cost[dual.index()] = -p.costs[e];
    }
    (res, cost)
}

/// Verify capacity bounds and conservation, return `(flow, cost)`.
fn check_constraints(p: &Problem, res: &[i64]) -> (i64, i64) {
    let mut balance = vec![0i64; p.g.max_num_nodes()];
    let mut total_cost = 0;

    for e in 0..p.caps.len() {
        let arc = p.g.get_arc(e).unwrap();
        let dual = p.g.arc_dual(arc).unwrap();
        let flow = flow_at(&p.g, arc, res).unwrap();

        assert_eq!(res[arc.index()] + res[dual.index()], p.caps[e]);
        assert!(flow >= 0 && flow <= p.caps[e]);

        let (a, b) = p.arcs[e];
        balance[p.g.get_node(a).unwrap().index()] -= flow;
        balance[p.g.get_node(b).unwrap().index()] += flow;
        total_cost += flow * p.costs[e];
    }

    for v in 0..balance.len() {
        if v != p.g.get_node(p.source).unwrap().index() && v != p.g.get_node(p.sink).unwrap().index() {
            assert_eq!(balance[v], 0, "node {} is unbalanced", v);
        }
    }

    let flow = balance[p.g.get_node(p.sink).unwrap().index()];
    assert!(flow >= 0);
    (flow, total_cost)
}

fn run<MC>(p: &mut Problem, name: &str) -> (i64, i64)
where
    MC: MinCostFlow<i64>,
{
    let (mut res, cost) = residuals(p);
    let s = p.g.get_node(p.source).expect("invalid source node");
    let t = p.g.get_node(p.sink).expect("invalid sink node");

    let mut solver = MC::default();
    let tstart = OffsetDateTime::now_utc();
    solver.solve(&mut p.g, s, t, &cost, &mut res).expect("solver failed");
    let tend = OffsetDateTime::now_utc();

    println!("{} {}", name, (tend - tstart).whole_microseconds());

    check_constraints(p, &res)
}

fn main() {
    let (_args, _) = opts! {
        synopsis "Benchmark the min-cost-flow solvers on a problem read from stdin.";
    }
    .parse_or_exit();

    let mut p = read_problem();

    let reference = run::<SspEdmondsKarp<Fifo<i64>>>(&mut p, "Edmonds-Karp");

    let mut ok = true;
    for (name, result) in [
        (
            "Primal-dual",
            run::<PrimalDual<Dijkstra<i64>, AugmentingPath<Labeling>>>(&mut p, "Primal-dual"),
        ),
        (
            "Cost-scaling",
            run::<CostScaling<AugmentingPath<Labeling>>>(&mut p, "Cost-scaling"),
        ),
    ] {
        if result != reference {
            eprintln!(
                "{} disagrees: got flow {} cost {}, expected flow {} cost {}",
                name, result.0, result.1, reference.0, reference.1
            );
            ok = false;
        }
    }

    if !ok {
        std::process::exit(1);
    }
}
