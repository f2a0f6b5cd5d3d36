//! The node store: one explicit arena owning every AST and annotation record,
//! addressed by opaque handles. Records are append-only and immutable; the two
//! sentinel handles are pre-registered at slot 0 of each table.

use crate::kind::AstKind;
use crate::nodes::{AnnRecord, NodeData, NodeRecord};

/// Opaque handle to one AST node in a [`NodeStore`].
///
/// Handles are only meaningful to the store that issued them. [`Ast::EMPTY`]
/// is the canonical empty node, valid in every store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ast(pub(crate) u32);

impl Ast {
    /// The unique empty AST node: zero fields, zero children.
    pub const EMPTY: Ast = Ast(0);

    /// Is this the empty sentinel?
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Opaque handle to one annotation in a [`NodeStore`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ann(pub(crate) u32);

impl Ann {
    /// The unique empty annotation: no comments, warnings or errors.
    pub const EMPTY: Ann = Ann(0);

    /// Is this the empty sentinel?
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// The arena holding all AST and annotation records for one compilation run.
///
/// Nothing is ever freed or mutated after insertion; every handle the store
/// returns stays dereferenceable until the store is dropped. Independent
/// stores in the same process do not interfere.
pub struct NodeStore {
    pub(crate) nodes: Vec<NodeRecord>,
    pub(crate) anns: Vec<AnnRecord>,
}

impl Default for NodeStore {
    fn default() -> Self {
        NodeStore::new()
    }
}

impl NodeStore {
    /// A fresh store with the two sentinels pre-registered.
    #[must_use]
    pub fn new() -> Self {
        NodeStore {
            nodes: vec![NodeRecord {
                data: NodeData::Empty,
                ann: Ann::EMPTY,
            }],
            anns: vec![AnnRecord::default()],
        }
    }

    /// Inserts an immutable record and returns its fresh handle.
    ///
    /// # Panics
    ///
    /// Panics if `ann` was not issued by this store.
    pub(crate) fn alloc(&mut self, data: NodeData, ann: Ann) -> Ast {
        self.ann_record(ann); // reject fabricated annotation handles up front
        let id = u32::try_from(self.nodes.len()).expect("node store exhausted");
        self.nodes.push(NodeRecord { data, ann });
        Ast(id)
    }

    pub(crate) fn alloc_ann(&mut self, record: AnnRecord) -> Ann {
        if record.is_empty() {
            return Ann::EMPTY;
        }
        let id = u32::try_from(self.anns.len()).expect("annotation store exhausted");
        self.anns.push(record);
        Ann(id)
    }

    /// Resolves a handle to its stored record.
    ///
    /// # Panics
    ///
    /// Panics if `t` does not correspond to any record in this store; no code
    /// outside the library can fabricate a valid handle.
    pub(crate) fn record(&self, t: Ast) -> &NodeRecord {
        self.nodes
            .get(t.0 as usize)
            .unwrap_or_else(|| panic!("ast handle {} does not identify an AST node", t.0))
    }

    pub(crate) fn ann_record(&self, a: Ann) -> &AnnRecord {
        self.anns
            .get(a.0 as usize)
            .unwrap_or_else(|| panic!("ann handle {} does not identify an annotation", a.0))
    }

    /// The kind tag of the stored node; total for every valid handle.
    ///
    /// # Panics
    ///
    /// Panics if `t` was not issued by this store.
    #[must_use]
    pub fn kind_of(&self, t: Ast) -> AstKind {
        self.record(t).data.kind()
    }

    /// Can node `t` be safely used as a node of kind `k`?
    ///
    /// True if the node's actual kind equals `k`, or is registered as a
    /// refinement of `k`, or `k` is a vector kind that may be empty and `t`
    /// is an empty node (the sentinel or an annotated empty).
    ///
    /// # Panics
    ///
    /// Panics if `t` was not issued by this store.
    #[must_use]
    pub fn have_kind(&self, t: Ast, k: AstKind) -> bool {
        let actual = self.kind_of(t);
        actual == k
            || k.refinements().contains(&actual)
            || (actual == AstKind::Empty && k.may_be_empty())
    }

    /// Panics unless [`NodeStore::have_kind`] holds. Every constructor and
    /// accessor routes its validation through here so the compatibility rule
    /// is defined exactly once.
    #[track_caller]
    pub fn mustbe_kind(&self, t: Ast, k: AstKind) {
        if !self.have_kind(t, k) {
            panic!(
                "expected a node compatible with {k}, found {}",
                self.kind_of(t)
            );
        }
    }

    /// The annotation attached to any node. [`Ann::EMPTY`] when none was
    /// supplied at construction time.
    ///
    /// # Panics
    ///
    /// Panics if `t` was not issued by this store.
    #[must_use]
    pub fn get_ann(&self, t: Ast) -> Ann {
        self.record(t).ann
    }

    #[track_caller]
    pub(crate) fn kind_error(&self, t: Ast, expected: AstKind) -> ! {
        panic!(
            "expected a node compatible with {expected}, found {}",
            self.kind_of(t)
        );
    }
}
