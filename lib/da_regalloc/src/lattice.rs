//! Register kind lattice.
//!
//! Register allocation does not need the full Dalvik type system: for move
//! selection and interference purposes, only the storage kind of a value
//! matters. Kinds form a small lattice, and joining the kinds flowing into a
//! register from different control flow predecessors either agrees on a
//! ground kind or bottoms out at [`RegisterKind::Conflict`], telling the
//! allocator the register must be split.

use lazy_static::lazy_static;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The abstract kind of the value held by a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterKind {
    /// Two incompatible kinds met at a join; the register must be split.
    Conflict,
    /// The literal zero: usable both as null reference and as numeric zero.
    Zero,
    /// A non-wide primitive value.
    Normal,
    /// A 64-bit value occupying a register pair, addressed by its low slot.
    Wide,
    /// A reference.
    Object,
    /// No information yet; the initial kind of every register.
    Unknown,
    /// Table-sizing sentinel. Never a value: classifying or joining with it
    /// is a bug in the caller.
    Size,
}

const NUM_KINDS: usize = RegisterKind::Size as usize;

/// All lattice elements, i.e. every kind but the sentinel.
pub const KINDS: [RegisterKind; NUM_KINDS] = [
    RegisterKind::Conflict,
    RegisterKind::Zero,
    RegisterKind::Normal,
    RegisterKind::Wide,
    RegisterKind::Object,
    RegisterKind::Unknown,
];

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Zero => write!(f, "ZERO"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Wide => write!(f, "WIDE"),
            Self::Object => write!(f, "OBJECT"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Size => unreachable!("the SIZE sentinel has no textual form"),
        }
    }
}

impl RegisterKind {
    /// Joins two kinds in the process-wide lattice.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        KIND_LATTICE.join(self, other)
    }
}

/*
 *             UNKNOWN
 *              /    \
 *            ZERO   WIDE
 *           /    \     |
 *       OBJECT NORMAL  |
 *          \     |    /
 *           \    |   /
 *            CONFLICT
 */
lazy_static! {
    /// The register kind lattice instance. Built once, then read-only.
    pub static ref KIND_LATTICE: Lattice = Lattice::new(
        &KINDS,
        &[
            (RegisterKind::Conflict, RegisterKind::Object),
            (RegisterKind::Conflict, RegisterKind::Normal),
            (RegisterKind::Conflict, RegisterKind::Wide),
            (RegisterKind::Object, RegisterKind::Zero),
            (RegisterKind::Normal, RegisterKind::Zero),
            (RegisterKind::Zero, RegisterKind::Unknown),
            (RegisterKind::Wide, RegisterKind::Unknown),
        ],
    );
}

/// A join semilattice over [`RegisterKind`], declared by its elements and
/// covering relation.
///
/// The join table is precomputed at construction from the covering graph, so
/// [`Lattice::join`] is a plain array lookup afterwards.
#[derive(Debug)]
pub struct Lattice {
    table: [[RegisterKind; NUM_KINDS]; NUM_KINDS],
}

impl Lattice {
    /// Builds the lattice from its elements and covering edges, each edge
    /// given as `(child, parent)`.
    ///
    /// # Panics
    ///
    /// Panics if the declared covering relation is not a lattice, i.e. if
    /// some pair of elements has no unique least upper bound.
    #[must_use]
    pub fn new(elements: &[RegisterKind], edges: &[(RegisterKind, RegisterKind)]) -> Self {
        // The graph is stored parent -> child, so that a Dfs from an element
        // visits exactly the elements at or below it.
        let mut graph: DiGraph<RegisterKind, ()> = DiGraph::new();
        let mut node_ids: BTreeMap<RegisterKind, NodeIndex> = BTreeMap::new();
        for kind in elements {
            let id = graph.add_node(*kind);
            node_ids.insert(*kind, id);
        }
        for (child, parent) in edges {
            graph.add_edge(node_ids[parent], node_ids[child], ());
        }

        let mut below: BTreeMap<RegisterKind, BTreeSet<RegisterKind>> = BTreeMap::new();
        for kind in elements {
            let mut reached = BTreeSet::new();
            let mut dfs = Dfs::new(&graph, node_ids[kind]);
            while let Some(id) = dfs.next(&graph) {
                reached.insert(graph[id]);
            }
            below.insert(*kind, reached);
        }

        let mut table = [[RegisterKind::Conflict; NUM_KINDS]; NUM_KINDS];
        for a in elements {
            for b in elements {
                let common: BTreeSet<RegisterKind> =
                    below[a].intersection(&below[b]).copied().collect();
                let mut lubs = common
                    .iter()
                    .copied()
                    .filter(|c| common.iter().all(|d| below[c].contains(d)));
                let lub = lubs.next().expect("kind lattice has no join for pair");
                assert!(lubs.next().is_none(), "kind lattice join is ambiguous");
                table[*a as usize][*b as usize] = lub;
            }
        }

        Self { table }
    }

    /// Returns the least upper bound of the two kinds.
    ///
    /// # Panics
    ///
    /// Panics if either argument is the `SIZE` sentinel, which is not a
    /// lattice element.
    #[must_use]
    pub fn join(&self, a: RegisterKind, b: RegisterKind) -> RegisterKind {
        assert!(
            a != RegisterKind::Size && b != RegisterKind::Size,
            "SIZE is not a lattice element"
        );
        self.table[a as usize][b as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegisterKind::*;

    #[test]
    fn join_is_idempotent() {
        for a in KINDS {
            assert_eq!(a.join(a), a);
        }
    }

    #[test]
    fn join_is_commutative() {
        for a in KINDS {
            for b in KINDS {
                assert_eq!(a.join(b), b.join(a));
            }
        }
    }

    #[test]
    fn join_is_associative() {
        for a in KINDS {
            for b in KINDS {
                for c in KINDS {
                    assert_eq!(a.join(b).join(c), a.join(b.join(c)));
                }
            }
        }
    }

    #[test]
    fn unknown_is_top() {
        for a in KINDS {
            assert_eq!(a.join(Unknown), a);
        }
    }

    #[test]
    fn conflict_absorbs() {
        for a in KINDS {
            assert_eq!(a.join(Conflict), Conflict);
        }
    }

    #[test]
    fn diagram_values() {
        assert_eq!(Zero.join(Object), Object);
        assert_eq!(Zero.join(Normal), Normal);
        assert_eq!(Object.join(Normal), Conflict);
        assert_eq!(Wide.join(Zero), Conflict);
        assert_eq!(Wide.join(Normal), Conflict);
        assert_eq!(Wide.join(Object), Conflict);
    }

    #[test]
    fn kind_rendering() {
        let shown: Vec<String> = KINDS.iter().map(|k| format!("{k}")).collect();
        assert_eq!(
            shown,
            ["CONFLICT", "ZERO", "NORMAL", "WIDE", "OBJECT", "UNKNOWN"]
        );
    }

    #[test]
    #[should_panic(expected = "SIZE is not a lattice element")]
    fn join_rejects_the_sentinel() {
        let _ = Unknown.join(Size);
    }
}
