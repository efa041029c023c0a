use crate::{CompileError, RcSpecs};
use std::collections::HashMap;

impl RcSpecs {
    /// Create an empty specification with no overrides.
    pub fn new() -> RcSpecs {
        RcSpecs {
            codes: HashMap::new(),
        }
    }

    /// Assign an RC code to a node, replacing any previous assignment.
    ///
    /// Returns the replaced code if the node already had one (last write wins).
    pub fn assign(&mut self, node: &str, code: &str) -> Option<String> {
        self.codes.insert(node.to_string(), code.to_string())
    }

    /// Assign an RC code to a node, failing if the node already has a different
    /// code. Re-assigning the same code is a no-op.
    pub fn assign_strict(&mut self, node: &str, code: &str) -> Result<(), CompileError> {
        if let Some(first) = self.codes.get(node) {
            if first != code {
                return Err(CompileError::DuplicateRcOverride {
                    node: node.to_string(),
                    first: first.clone(),
                    second: code.to_string(),
                });
            }
            return Ok(());
        }
        self.codes.insert(node.to_string(), code.to_string());
        Ok(())
    }

    /// The RC code assigned to the given node, or `None` if the node has no
    /// override and should use the compiler's default code.
    pub fn get_code(&self, node: &str) -> Option<&String> {
        self.codes.get(node)
    }

    /// The number of nodes with an explicit assignment.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no node has an explicit assignment.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Try to load RC-code assignments from a tab-separated specification file.
    ///
    /// Every non-empty line which is not a `#` comment must consist of exactly two
    /// tab-separated fields: a node name and an RC code. A node listed more than
    /// once keeps the code of its last record.
    pub fn try_from_tsv(spec_string: &str) -> Result<RcSpecs, CompileError> {
        Self::parse_tsv(spec_string, false)
    }

    /// Same as `try_from_tsv`, except that a node listed twice with two different
    /// codes is reported as a `DuplicateRcOverride` error.
    pub fn try_from_tsv_strict(spec_string: &str) -> Result<RcSpecs, CompileError> {
        Self::parse_tsv(spec_string, true)
    }

    /// **(internal)** Shared body of the two parsing modes.
    fn parse_tsv(spec_string: &str, strict: bool) -> Result<RcSpecs, CompileError> {
        let mut specs = RcSpecs::new();
        for line in spec_string.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue; // Skip comments and empty lines.
            }
            let fields: Vec<&str> = line.split('\t').map(|field| field.trim()).collect();
            if fields.len() != 2 || fields[0].is_empty() || fields[1].is_empty() {
                return Err(CompileError::MalformedRcRecord {
                    record: line.to_string(),
                });
            }
            if strict {
                specs.assign_strict(fields[0], fields[1])?;
            } else {
                specs.assign(fields[0], fields[1]);
            }
        }
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CompileError, RcSpecs};

    #[test]
    fn read_rc_specs() {
        let specs = RcSpecs::try_from_tsv("# overrides\nG2\t0\nG5\t3\n").unwrap();
        assert_eq!(2, specs.len());
        assert_eq!("0", specs.get_code("G2").unwrap());
        assert_eq!("3", specs.get_code("G5").unwrap());
        assert!(specs.get_code("G1").is_none());
    }

    #[test]
    fn read_rc_specs_malformed() {
        assert_eq!(
            Err(CompileError::MalformedRcRecord {
                record: "G2".to_string()
            }),
            RcSpecs::try_from_tsv("G2")
        );
        assert!(RcSpecs::try_from_tsv("G2\t0\t1").is_err());
        assert!(RcSpecs::try_from_tsv("G2\t").is_err());
    }

    #[test]
    fn rc_specs_last_write_wins() {
        let specs = RcSpecs::try_from_tsv("G2\t0\nG2\t4\n").unwrap();
        assert_eq!(1, specs.len());
        assert_eq!("4", specs.get_code("G2").unwrap());
    }

    #[test]
    fn rc_specs_strict_duplicates() {
        // A repeated assignment of the same code is fine even in strict mode.
        let specs = RcSpecs::try_from_tsv_strict("G2\t0\nG2\t0\n").unwrap();
        assert_eq!(1, specs.len());

        assert_eq!(
            Err(CompileError::DuplicateRcOverride {
                node: "G2".to_string(),
                first: "0".to_string(),
                second: "4".to_string(),
            }),
            RcSpecs::try_from_tsv_strict("G2\t0\nG2\t4\n")
        );
    }

    #[test]
    fn rc_specs_manual_assignment() {
        let mut specs = RcSpecs::new();
        assert!(specs.is_empty());
        assert_eq!(None, specs.assign("G1", "0"));
        assert_eq!(Some("0".to_string()), specs.assign("G1", "2"));
        assert!(specs.assign_strict("G1", "3").is_err());
    }
}
