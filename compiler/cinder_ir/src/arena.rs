//! Arena allocation for the flat AST.
//!
//! All nodes of a program live in one contiguous `Vec`; child sequences are
//! ranges into side tables. The arena is append-only: nothing allocated is
//! ever modified.

use crate::{Clause, ClauseRange, Name, NodeId, NodeKind, NodeRange, ParamRange};

/// Contiguous storage for every node of one program.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    /// All nodes (indexed by `NodeId`).
    nodes: Vec<NodeKind>,
    /// Flattened child lists (application operands, block elements).
    node_lists: Vec<NodeId>,
    /// All `Cond` clauses.
    clauses: Vec<Clause>,
    /// All lambda parameter names.
    params: Vec<Name>,
}

/// Convert a side-table length into a `u32` index.
///
/// # Panics
/// Panics if a table grows past `u32::MAX` entries.
#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("node arena exceeded u32::MAX entries"))
}

impl NodeArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 node per 16 bytes of encoded source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 16;
        NodeArena {
            nodes: Vec::with_capacity(estimated),
            node_lists: Vec::with_capacity(estimated / 2),
            clauses: Vec::with_capacity(estimated / 16),
            params: Vec::with_capacity(estimated / 16),
        }
    }

    // ===== Node allocation =====

    /// Allocate a node, return its ID.
    #[inline]
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(to_index(self.nodes.len()));
        self.nodes.push(kind);
        id
    }

    /// Get a node's kind by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()]
    }

    /// Get a node's kind by ID, or `None` if `id` is not in this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index())
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Side tables =====

    /// Allocate a child list, return its range.
    pub fn alloc_node_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let start = to_index(self.node_lists.len());
        self.node_lists.extend(ids);
        NodeRange::new(start, to_index(self.node_lists.len()) - start)
    }

    /// Get a child list by range.
    #[inline]
    #[track_caller]
    pub fn node_list(&self, range: NodeRange) -> &[NodeId] {
        &self.node_lists[range.start as usize..range.end() as usize]
    }

    /// Allocate a clause list, return its range.
    pub fn alloc_clauses(&mut self, clauses: impl IntoIterator<Item = Clause>) -> ClauseRange {
        let start = to_index(self.clauses.len());
        self.clauses.extend(clauses);
        ClauseRange::new(start, to_index(self.clauses.len()) - start)
    }

    /// Get a clause list by range.
    #[inline]
    #[track_caller]
    pub fn clauses(&self, range: ClauseRange) -> &[Clause] {
        &self.clauses[range.start as usize..range.end() as usize]
    }

    /// Allocate a parameter list, return its range.
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(params);
        ParamRange::new(start, to_index(self.params.len()) - start)
    }

    /// Get a parameter list by range.
    #[inline]
    #[track_caller]
    pub fn params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.start as usize..range.end() as usize]
    }

    // ===== Construction helpers =====
    //
    // Children must be allocated before their parent.

    pub fn int(&mut self, value: i128) -> NodeId {
        self.alloc(NodeKind::Int(value))
    }

    pub fn string(&mut self, value: Name) -> NodeId {
        self.alloc(NodeKind::Str(value))
    }

    pub fn ident(&mut self, name: Name) -> NodeId {
        self.alloc(NodeKind::Ident(name))
    }

    pub fn apply(&mut self, func: NodeId, args: impl IntoIterator<Item = NodeId>) -> NodeId {
        let args = self.alloc_node_list(args);
        self.alloc(NodeKind::Apply { func, args })
    }

    pub fn lambda(&mut self, params: impl IntoIterator<Item = Name>, body: NodeId) -> NodeId {
        let params = self.alloc_params(params);
        self.alloc(NodeKind::Lambda { params, body })
    }

    pub fn block(&mut self, items: impl IntoIterator<Item = NodeId>) -> NodeId {
        let items = self.alloc_node_list(items);
        self.alloc(NodeKind::Block(items))
    }

    /// Allocate a `Cond` from `(test, consequence)` pairs.
    pub fn cond(&mut self, clauses: impl IntoIterator<Item = (NodeId, NodeId)>) -> NodeId {
        let clauses = self.alloc_clauses(
            clauses
                .into_iter()
                .map(|(test, consequence)| Clause { test, consequence }),
        );
        self.alloc(NodeKind::Cond(clauses))
    }

    pub fn let_in(&mut self, name: Name, init: NodeId, body: NodeId) -> NodeId {
        self.alloc(NodeKind::Let { name, init, body })
    }

    pub fn assign(&mut self, name: Name, value: NodeId) -> NodeId {
        self.alloc(NodeKind::Assign { name, value })
    }

    pub fn unknown(&mut self, tag: Name) -> NodeId {
        self.alloc(NodeKind::Unknown { tag })
    }
}
