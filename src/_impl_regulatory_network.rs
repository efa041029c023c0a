use crate::{
    CompileError, Edge, InteractionKind, Node, NodeId, NodeIdIterator, RegulatoryNetwork, ID_REGEX,
};
use fxhash::FxHashSet;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::ops::Index;

/// Methods for safely constructing new instances of `RegulatoryNetwork`s.
impl RegulatoryNetwork {
    /// Create a new `RegulatoryNetwork` with no nodes and no edges.
    pub fn new() -> RegulatoryNetwork {
        RegulatoryNetwork {
            nodes: Vec::new(),
            incoming: Vec::new(),
            node_to_index: HashMap::new(),
        }
    }

    /// Add a regulatory interaction between two raw `.sif` node tokens.
    ///
    /// Both tokens are reduced to node names first (see `extract_node_name`).
    /// Unknown nodes are created in order of first appearance, and the edge is
    /// inserted into the incoming set of the target node. Inserting the same
    /// (source, interaction, target) record twice is a no-op.
    ///
    /// Returns an error if the interaction name is not recognised or if either
    /// token reduces to an invalid node name.
    pub fn add_edge(
        &mut self,
        raw_source: &str,
        interaction: &str,
        raw_target: &str,
    ) -> Result<(), CompileError> {
        // Resolve everything before touching the graph, so that a rejected record
        // leaves the network unchanged.
        let kind = InteractionKind::try_from(interaction)?;
        let source_name = Self::checked_node_name(raw_source)?;
        let target_name = Self::checked_node_name(raw_target)?;
        let source = self.ensure_node(source_name);
        let target = self.ensure_node(target_name);
        self.incoming[usize::from(target)].insert(Edge {
            source,
            target,
            kind,
        });
        Ok(())
    }

    /// **(internal)** Reduce a raw token to a node name, rejecting invalid names.
    fn checked_node_name(raw_token: &str) -> Result<String, CompileError> {
        let name = Self::extract_node_name(raw_token);
        if !Self::is_valid_name(&name) {
            return Err(CompileError::MalformedEdgeRecord {
                record: raw_token.to_string(),
            });
        }
        Ok(name)
    }

    /// **(internal)** Find or create the node with the given (already valid) name.
    fn ensure_node(&mut self, name: String) -> NodeId {
        if let Some(id) = self.node_to_index.get(&name) {
            return *id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { name: name.clone() });
        self.incoming.push(FxHashSet::default());
        self.node_to_index.insert(name, id);
        id
    }

    /// Reduce a raw `.sif` node token to a node name.
    ///
    /// BioTapestry prefixes node identifiers with a type segment terminated by `:`.
    /// The name is everything after the first `:`; a token without `:` is already a
    /// plain name. Surrounding whitespace is trimmed and inner spaces are replaced
    /// with underscores.
    pub fn extract_node_name(raw_token: &str) -> String {
        let name = match raw_token.find(':') {
            Some(position) => &raw_token[position + 1..],
            None => raw_token,
        };
        name.trim().replace(' ', "_")
    }
}

/// Some basic utility methods for inspecting the `RegulatoryNetwork`.
impl RegulatoryNetwork {
    /// The number of nodes in this network.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Find a `NodeId` for the given name, or `None` if the node does not exist.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_to_index.get(name).cloned()
    }

    /// Return a `Node` corresponding to the given `NodeId`.
    pub fn get_node(&self, id: NodeId) -> &Node {
        &self.nodes[usize::from(id)]
    }

    /// Shorthand for `self.get_node(id).get_name()`.
    pub fn get_node_name(&self, id: NodeId) -> &String {
        &self.nodes[usize::from(id)].name
    }

    /// Copy the node names from this network into a separate vector.
    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|it| it.name.clone()).collect()
    }

    /// Return an iterator over all node ids of this network.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// The set of edges targeting the given node. The set is empty for the inputs
    /// of the network.
    pub fn incoming_edges(&self, target: NodeId) -> &FxHashSet<Edge> {
        &self.incoming[usize::from(target)]
    }

    /// Return a sorted list of nodes that regulate the given `target` node.
    pub fn regulators(&self, target: NodeId) -> Vec<NodeId> {
        let mut regulators: Vec<NodeId> = self
            .incoming_edges(target)
            .iter()
            .map(|edge| edge.source)
            .collect();
        regulators.sort();
        regulators.dedup();
        regulators
    }

    /// A static check that allows to verify validity of a node name.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name)
    }
}

impl Default for RegulatoryNetwork {
    fn default() -> Self {
        RegulatoryNetwork::new()
    }
}

/// Allow indexing `RegulatoryNetwork` using `NodeId` objects.
impl Index<NodeId> for RegulatoryNetwork {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.get_node(index)
    }
}
