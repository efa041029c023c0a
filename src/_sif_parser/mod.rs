use crate::{CompileError, RegulatoryNetwork};

impl RegulatoryNetwork {
    /// Try to load a regulatory network from the contents of a `.sif` interaction
    /// file.
    ///
    /// Every non-empty line which is not a `#` comment must consist of exactly
    /// three tab-separated fields: a source node token, an interaction name and a
    /// target node token. Node tokens may carry a BioTapestry type prefix which is
    /// stripped (see `RegulatoryNetwork::extract_node_name`).
    pub fn try_from_sif(model_string: &str) -> Result<RegulatoryNetwork, CompileError> {
        let mut network = RegulatoryNetwork::new();
        for line in model_string.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue; // Skip comments and empty lines.
            }
            let fields: Vec<&str> = line.split('\t').map(|field| field.trim()).collect();
            if fields.len() != 3 {
                return Err(CompileError::MalformedEdgeRecord {
                    record: line.to_string(),
                });
            }
            network.add_edge(fields[0], fields[1], fields[2])?;
        }
        Ok(network)
    }
}
