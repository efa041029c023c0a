use crate::{Edge, InteractionKind, NodeId};

impl Edge {
    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    pub fn get_kind(&self) -> InteractionKind {
        self.kind
    }
}
