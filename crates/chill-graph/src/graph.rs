//! Core network data structures.

use core::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chill_core::{EdgeId, NodeId, Real};

/// Physical kind of a heat-transfer relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// `q = (T_from - T_to) / R`, parameter is a thermal resistance [K/W].
    Conduction,
    /// `q = c · (T_from⁴ - T_to⁴)`, parameter folds in ε, view factor, σ and area [W/K⁴].
    Radiation,
    /// `q = P`, a constant heat rate [W] from `from` into `to`.
    HeatInput,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 3] = [EdgeKind::Conduction, EdgeKind::Radiation, EdgeKind::HeatInput];

    /// What the scalar parameter means for this kind.
    pub fn parameter_meaning(self) -> &'static str {
        match self {
            EdgeKind::Conduction => "thermal resistance [K/W]",
            EdgeKind::Radiation => "radiation coefficient [W/K^4]",
            EdgeKind::HeatInput => "heat rate [W]",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgeKind::Conduction => "conduction",
            EdgeKind::Radiation => "radiation",
            EdgeKind::HeatInput => "heat input",
        };
        f.write_str(s)
    }
}

/// A lumped thermal mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Empty when the node was defined without a name.
    pub name: String,
    /// Temperature [K]
    pub temperature: Real,
    /// Heat capacity [J/K]; `f64::INFINITY` marks a fixed-temperature source.
    pub capacity: Real,
}

impl Node {
    pub fn is_fixed(&self) -> bool {
        self.capacity == Real::INFINITY
    }
}

/// A heat-transfer relation between exactly two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub name: String,
    pub kind: EdgeKind,
    pub parameter: Real,
    /// `[from, to]`
    pub nodes: [NodeId; 2],
}

impl Edge {
    pub fn from(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn to(&self) -> NodeId {
        self.nodes[1]
    }
}

/// Tag distinguishing handles issued by different networks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NetworkTag(u32);

static NEXT_TAG: AtomicU32 = AtomicU32::new(0);

impl NetworkTag {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node, valid only for the network that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle {
    pub(crate) network: NetworkTag,
    pub(crate) id: NodeId,
}

impl NodeHandle {
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Position of the node in the network's node arrays.
    pub fn index(self) -> usize {
        self.id.slot()
    }
}
