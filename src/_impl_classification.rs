use crate::{Classification, InteractionKind, NodeId, RegulatoryNetwork};

impl Classification {
    /// Classify the regulators of `target` by the kind of their incoming edges.
    ///
    /// Every source lands in the list matching its edge kind; a source regulating
    /// through edges of two kinds appears in both lists. The lists are sorted by id
    /// so that rule compilation is deterministic.
    pub fn of(network: &RegulatoryNetwork, target: NodeId) -> Classification {
        let mut activators = Vec::new();
        let mut repressors = Vec::new();
        let mut neutrals = Vec::new();
        for edge in network.incoming_edges(target) {
            match edge.get_kind() {
                InteractionKind::Promotes => activators.push(edge.get_source()),
                InteractionKind::Represses => repressors.push(edge.get_source()),
                InteractionKind::Neutral => neutrals.push(edge.get_source()),
            }
        }
        activators.sort();
        repressors.sort();
        neutrals.sort();
        Classification {
            activators,
            repressors,
            neutrals,
        }
    }

    /// Sources that promote the classified node.
    pub fn activators(&self) -> &[NodeId] {
        &self.activators
    }

    /// Sources that repress the classified node.
    pub fn repressors(&self) -> &[NodeId] {
        &self.repressors
    }

    /// Sources with no defined effect on the classified node.
    ///
    /// Neutral regulators are classified so that templates can use them, but the
    /// built-in template ignores them.
    pub fn neutrals(&self) -> &[NodeId] {
        &self.neutrals
    }
}
