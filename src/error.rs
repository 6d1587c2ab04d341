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

//! Error type shared by the graph substrate and the solvers.

use std::error;
use std::fmt;

/// Errors raised by graph accessors and solver preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slot-map access with a handle that refers to no live slot.
    InvalidSlot(usize),
    /// A node handle that refers to no live node.
    InvalidNode(usize),
    /// An arc handle that refers to no live arc.
    InvalidArc(usize),
    /// The node has no registered external id.
    NoNodeId(usize),
    /// The arc has no registered external id.
    NoArcId(usize),
    /// `add_arc` with an arc id that is already registered.
    DuplicateArcId,
    /// An arc property vector is shorter than `max_num_arcs`.
    ShortVector { len: usize, need: usize },
    /// Dijkstra found an admissible arc with negative weight.
    NegativeWeight { arc: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidSlot(h) => write!(fmt, "invalid slot handle: {}", h),
            InvalidNode(u) => write!(fmt, "invalid node handle: {}", u),
            InvalidArc(e) => write!(fmt, "invalid arc handle: {}", e),
            NoNodeId(u) => write!(fmt, "node {} has no registered id", u),
            NoArcId(e) => write!(fmt, "arc {} has no registered id", e),
            DuplicateArcId => write!(fmt, "arc id is already registered"),
            ShortVector { len, need } => {
                write!(fmt, "arc property vector too short: {} < {}", len, need)
            }
            NegativeWeight { arc } => write!(fmt, "negative weight on admissible arc {}", arc),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
