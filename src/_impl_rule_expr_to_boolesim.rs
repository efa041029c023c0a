use crate::{BoolOp, RegulatoryNetwork, RuleExpr};

impl RuleExpr {
    /// Render this formula in BooleSim surface syntax.
    ///
    /// Conjunction is `&&`, negation is `!` and disjunction is `||`; constant rules
    /// render as the `true`/`false` literals. Parentheses are only inserted where
    /// precedence requires them, so typical rules read as flat `A && !B && C`
    /// chains. Rendering is stable: an already simplified formula always renders to
    /// the same text.
    pub fn to_boolesim_string(&self, context: &RegulatoryNetwork) -> String {
        match self {
            RuleExpr::Const(value) => value.to_string(),
            RuleExpr::Var(id) => context.get_node_name(*id).clone(),
            RuleExpr::Not(inner) => {
                if inner.as_binary().is_some() {
                    format!("!({})", inner.to_boolesim_string(context))
                } else {
                    format!("!{}", inner.to_boolesim_string(context))
                }
            }
            RuleExpr::Binary(op, left, right) => {
                let symbol = match op {
                    BoolOp::And => "&&",
                    BoolOp::Or => "||",
                };
                format!(
                    "{} {} {}",
                    Self::operand_string(left, *op, context),
                    symbol,
                    Self::operand_string(right, *op, context)
                )
            }
        }
    }

    /// **(internal)** Render one operand of `op`, parenthesised if the operand
    /// binds more loosely than `op` itself (a disjunction inside a conjunction).
    fn operand_string(operand: &RuleExpr, op: BoolOp, context: &RegulatoryNetwork) -> String {
        let needs_parentheses = matches!(
            (op, operand),
            (BoolOp::And, RuleExpr::Binary(BoolOp::Or, _, _))
        );
        if needs_parentheses {
            format!("({})", operand.to_boolesim_string(context))
        } else {
            operand.to_boolesim_string(context)
        }
    }
}
