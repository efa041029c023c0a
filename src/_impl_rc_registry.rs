use crate::{Classification, RcRegistry, RuleExpr, RuleTemplate};
use std::collections::HashMap;

/// The built-in rule template `"0"`: all activators and no repressors.
///
/// The rule is the conjunction of every activator together with the negation of
/// every repressor; an empty side contributes `true`. A node with no activators and
/// no repressors therefore compiles to the constant `true` rule, which is the
/// defined behaviour of this template rather than an error. Neutral regulators do
/// not appear in the formula.
fn rc_0_all_activators_no_repressors(classification: &Classification) -> RuleExpr {
    let activators = conjunction(
        classification
            .activators()
            .iter()
            .map(|id| RuleExpr::mk_var(*id)),
    );
    let repressors = conjunction(
        classification
            .repressors()
            .iter()
            .map(|id| RuleExpr::mk_not(RuleExpr::mk_var(*id))),
    );
    activators.and(repressors)
}

/// **(internal)** The conjunction of all given expressions, or `true` when there
/// are none.
fn conjunction(items: impl Iterator<Item = RuleExpr>) -> RuleExpr {
    let mut items = items;
    if let Some(first) = items.next() {
        items.fold(first, |result, item| result.and(item))
    } else {
        RuleExpr::mk_true()
    }
}

impl RcRegistry {
    /// Create an empty registry with no templates.
    pub fn new() -> RcRegistry {
        RcRegistry {
            templates: HashMap::new(),
        }
    }

    /// Register (or replace) the template for the given RC code.
    ///
    /// Registering a code never affects templates registered under other codes.
    pub fn register(&mut self, code: &str, template: RuleTemplate) {
        self.templates.insert(code.to_string(), template);
    }

    /// Find the template registered for the given RC code, or `None` if there is
    /// none. A missing template is the caller's error to report; see
    /// `RuleCompiler::compile`.
    pub fn lookup(&self, code: &str) -> Option<RuleTemplate> {
        self.templates.get(code).cloned()
    }

    /// A sorted list of RC codes with a registered template.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.templates.keys().cloned().collect();
        codes.sort();
        codes
    }
}

impl Default for RcRegistry {
    /// The default registry contains exactly the built-in template `"0"`.
    fn default() -> RcRegistry {
        let mut registry = RcRegistry::new();
        registry.register("0", rc_0_all_activators_no_repressors);
        registry
    }
}
