use crate::{
    Classification, CompileError, NodeId, RcRegistry, RcSpecs, RegulatoryNetwork, RuleCompiler,
};

impl<'a> RuleCompiler<'a> {
    /// Create a compiler over a fully constructed network and registry.
    ///
    /// `default_rc` is the RC code used for nodes without an explicit override (see
    /// `DEFAULT_RC_CODE` for the conventional value). The compiler never mutates
    /// the network or the registry, so independent nodes can also be compiled from
    /// multiple threads through shared references.
    pub fn new(
        network: &'a RegulatoryNetwork,
        registry: &'a RcRegistry,
        default_rc: &str,
    ) -> RuleCompiler<'a> {
        RuleCompiler {
            network,
            registry,
            default_rc: default_rc.to_string(),
        }
    }

    /// The default RC code this compiler falls back to.
    pub fn get_default_rc(&self) -> &str {
        &self.default_rc
    }

    /// Compile the Boolean rule of one node under the given RC code.
    ///
    /// The regulators of the node are classified by interaction kind, the template
    /// registered for `rc_code` builds the formula, and the simplified formula is
    /// rendered in BooleSim syntax. The computation is a pure function of the
    /// network contents: repeated calls produce identical rule strings.
    pub fn compile(&self, node: NodeId, rc_code: &str) -> Result<String, CompileError> {
        let template =
            self.registry
                .lookup(rc_code)
                .ok_or_else(|| CompileError::UnknownRcTemplate {
                    node: self.network.get_node_name(node).clone(),
                    code: rc_code.to_string(),
                })?;
        let classification = Classification::of(self.network, node);
        if cfg!(feature = "print-progress") {
            eprintln!(
                "Node `{}` (rc {}): {} activator(s), {} repressor(s), {} neutral(s).",
                self.network.get_node_name(node),
                rc_code,
                classification.activators().len(),
                classification.repressors().len(),
                classification.neutrals().len(),
            );
        }
        let formula = template(&classification).simplify();
        Ok(formula.to_boolesim_string(self.network))
    }

    /// Compile rules for every node with at least one incoming edge, in node
    /// order. RC codes are taken from `specs`, falling back to the compiler's
    /// default code.
    ///
    /// The batch is fail-fast: the first node that cannot be compiled aborts the
    /// whole run with its error, so a failure can never silently drop one node's
    /// rule while keeping the others.
    pub fn compile_all(&self, specs: &RcSpecs) -> Result<Vec<(NodeId, String)>, CompileError> {
        let mut rules = Vec::new();
        for node in self.network.nodes() {
            if self.network.incoming_edges(node).is_empty() {
                continue; // Inputs of the network have no rule.
            }
            let name = self.network.get_node_name(node);
            let rc_code = specs
                .get_code(name)
                .map(|code| code.as_str())
                .unwrap_or(self.default_rc.as_str());
            let rule = self.compile(node, rc_code)?;
            rules.push((node, rule));
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CompileError, RcRegistry, RcSpecs, RegulatoryNetwork, RuleCompiler, DEFAULT_RC_CODE,
    };
    use pretty_assertions::assert_eq;

    fn compile_one(network_string: &str, node: &str, rc_code: &str) -> Result<String, CompileError> {
        let network = RegulatoryNetwork::try_from_sif(network_string).unwrap();
        let registry = RcRegistry::default();
        let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);
        compiler.compile(network.find_node(node).unwrap(), rc_code)
    }

    #[test]
    fn compile_mixed_regulators() {
        let rule = compile_one(
            "gene:G1\tPROMOTES\tgene:G2\ngene:G3\tREPRESSES\tgene:G2\n",
            "G2",
            "0",
        );
        assert_eq!(Ok("G1 && !G3".to_string()), rule);
    }

    #[test]
    fn compile_activators_only() {
        let rule = compile_one(
            "gene:A\tPROMOTES\tgene:T\ngene:B\tPROMOTES\tgene:T\n",
            "T",
            "0",
        );
        assert_eq!(Ok("A && B".to_string()), rule);
    }

    #[test]
    fn compile_repressor_only() {
        let rule = compile_one("gene:R\tREPRESSES\tgene:T\n", "T", "0");
        assert_eq!(Ok("!R".to_string()), rule);
    }

    #[test]
    fn compile_neutral_only_is_always_true() {
        let rule = compile_one("gene:N\tNEUTRAL\tgene:T\n", "T", "0");
        assert_eq!(Ok("true".to_string()), rule);
    }

    #[test]
    fn compile_contradictory_regulator() {
        // The same source both promotes and represses the target; the rule can
        // never fire.
        let rule = compile_one(
            "gene:A\tPROMOTES\tgene:T\ngene:A\tREPRESSES\tgene:T\n",
            "T",
            "0",
        );
        assert_eq!(Ok("false".to_string()), rule);
    }

    #[test]
    fn compile_unknown_rc_template() {
        let rule = compile_one("gene:G1\tPROMOTES\tgene:G2\n", "G2", "99");
        assert_eq!(
            Err(CompileError::UnknownRcTemplate {
                node: "G2".to_string(),
                code: "99".to_string(),
            }),
            rule
        );
    }

    #[test]
    fn compile_is_deterministic() {
        let network = RegulatoryNetwork::try_from_sif(
            "gene:A\tPROMOTES\tgene:T\ngene:B\tPROMOTES\tgene:T\ngene:C\tREPRESSES\tgene:T\n",
        )
        .unwrap();
        let registry = RcRegistry::default();
        let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);
        let node = network.find_node("T").unwrap();
        let first = compiler.compile(node, "0").unwrap();
        for _ in 0..10 {
            assert_eq!(first, compiler.compile(node, "0").unwrap());
        }
    }

    #[test]
    fn compile_all_with_overrides() {
        let network = RegulatoryNetwork::try_from_sif(
            "gene:G1\tPROMOTES\tgene:G2\ngene:G3\tREPRESSES\tgene:G2\ngene:G2\tPROMOTES\tgene:G3\n",
        )
        .unwrap();
        let specs = RcSpecs::try_from_tsv("G2\t0\nG3\t0\n").unwrap();
        let registry = RcRegistry::default();
        let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);

        let rules = compiler.compile_all(&specs).unwrap();
        let rules: Vec<(String, String)> = rules
            .into_iter()
            .map(|(node, rule)| (network.get_node_name(node).clone(), rule))
            .collect();
        // G1 is an input and has no rule; the rest follow node order.
        assert_eq!(
            vec![
                ("G2".to_string(), "G1 && !G3".to_string()),
                ("G3".to_string(), "G2".to_string()),
            ],
            rules
        );
    }

    #[test]
    fn compile_all_uses_default_rc() {
        let network =
            RegulatoryNetwork::try_from_sif("gene:G1\tPROMOTES\tgene:G2\n").unwrap();
        let registry = RcRegistry::default();

        // With the built-in template as the default, a node without an override
        // still compiles.
        let compiler = RuleCompiler::new(&network, &registry, "0");
        assert_eq!("0", compiler.get_default_rc());
        let rules = compiler.compile_all(&RcSpecs::new()).unwrap();
        assert_eq!(1, rules.len());
        assert_eq!("G1", rules[0].1);

        // The conventional default code has no registered template, so a node the
        // RC specification does not mention is an explicit error, not a silently
        // missing rule.
        let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);
        assert_eq!(
            Err(CompileError::UnknownRcTemplate {
                node: "G2".to_string(),
                code: DEFAULT_RC_CODE.to_string(),
            }),
            compiler.compile_all(&RcSpecs::new())
        );
    }

    #[test]
    fn compile_all_is_fail_fast() {
        let network = RegulatoryNetwork::try_from_sif(
            "gene:G1\tPROMOTES\tgene:G2\ngene:G2\tPROMOTES\tgene:G3\n",
        )
        .unwrap();
        // G2 compiles fine, G3 has an unknown code; the whole batch fails.
        let specs = RcSpecs::try_from_tsv("G2\t0\nG3\t99\n").unwrap();
        let registry = RcRegistry::default();
        let compiler = RuleCompiler::new(&network, &registry, DEFAULT_RC_CODE);
        assert_eq!(
            Err(CompileError::UnknownRcTemplate {
                node: "G3".to_string(),
                code: "99".to_string(),
            }),
            compiler.compile_all(&specs)
        );
    }

    #[test]
    fn compiled_rule_mentions_only_regulators() {
        let network = RegulatoryNetwork::try_from_sif(
            "gene:A\tPROMOTES\tgene:T\ngene:R\tREPRESSES\tgene:T\ngene:N\tNEUTRAL\tgene:T\n",
        )
        .unwrap();
        let registry = RcRegistry::default();
        let compiler = RuleCompiler::new(&network, &registry, "0");
        let rule = compiler.compile(network.find_node("T").unwrap(), "0").unwrap();
        assert!(rule.contains('A') && rule.contains('R'));
        assert!(!rule.contains('N'));
    }
}
