use crate::RuleExpr::*;
use crate::{BoolOp, NodeId, RegulatoryNetwork, RuleExpr};
use std::collections::{HashMap, HashSet};

/// Constructor and destructor utility methods. These mainly avoid unnecessary
/// boxing and exhaustive pattern matching when not necessary.
impl RuleExpr {
    /// Create a `true` formula.
    pub fn mk_true() -> RuleExpr {
        Const(true)
    }

    /// Create a `false` formula.
    pub fn mk_false() -> RuleExpr {
        Const(false)
    }

    /// Create an `x` formula where `x` is a network node.
    pub fn mk_var(id: NodeId) -> RuleExpr {
        Var(id)
    }

    /// Create a `!phi` formula, where `phi` is an inner `RuleExpr`.
    pub fn mk_not(inner: RuleExpr) -> RuleExpr {
        Not(Box::new(inner))
    }

    /// Create a `phi 'op' psi` where `phi` and `psi` are arguments of `op` operator.
    pub fn mk_binary(op: BoolOp, left: RuleExpr, right: RuleExpr) -> RuleExpr {
        Binary(op, Box::new(left), Box::new(right))
    }

    /// Negate this formula.
    pub fn negation(self) -> RuleExpr {
        RuleExpr::mk_not(self)
    }

    /// Create a conjunction.
    pub fn and(self, other: RuleExpr) -> RuleExpr {
        RuleExpr::mk_binary(BoolOp::And, self, other)
    }

    /// Create a disjunction.
    pub fn or(self, other: RuleExpr) -> RuleExpr {
        RuleExpr::mk_binary(BoolOp::Or, self, other)
    }

    /// If `Const`, return the value, otherwise return `None`.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Const(value) => Some(*value),
            _ => None,
        }
    }

    /// If `Var`, return the id, otherwise return `None`.
    pub fn as_var(&self) -> Option<NodeId> {
        match self {
            Var(value) => Some(*value),
            _ => None,
        }
    }

    /// If `Not`, return the inner formula, otherwise return `None`.
    pub fn as_not(&self) -> Option<&RuleExpr> {
        match self {
            Not(inner) => Some(inner),
            _ => None,
        }
    }

    /// If `Binary`, return the operator and left/right formulas, otherwise return
    /// `None`.
    pub fn as_binary(&self) -> Option<(&RuleExpr, BoolOp, &RuleExpr)> {
        match self {
            Binary(op, l, r) => Some((l, *op, r)),
            _ => None,
        }
    }
}

/// Other utility methods.
impl RuleExpr {
    /// Return a sorted vector of all nodes that are actually used as inputs in this
    /// formula.
    pub fn free_variables(&self) -> Vec<NodeId> {
        fn r_variables(formula: &RuleExpr, vars: &mut HashSet<NodeId>) {
            match formula {
                Const(_) => (),
                Var(id) => {
                    vars.insert(*id);
                }
                Not(inner) => r_variables(inner, vars),
                Binary(_, l, r) => {
                    r_variables(l, vars);
                    r_variables(r, vars);
                }
            };
        }
        let mut vars = HashSet::new();
        r_variables(self, &mut vars);
        let mut result: Vec<NodeId> = vars.into_iter().collect();
        result.sort();
        result
    }

    /// Evaluate this formula using the given node valuation.
    ///
    /// Returns `None` when the valuation is missing a node that the formula
    /// actually depends on.
    pub fn evaluate(&self, values: &HashMap<NodeId, bool>) -> Option<bool> {
        match self {
            Const(value) => Some(*value),
            Var(id) => values.get(id).cloned(),
            Not(inner) => inner.evaluate(values).map(|it| !it),
            Binary(op, left, right) => {
                let left = left.evaluate(values)?;
                let right = right.evaluate(values)?;
                Some(match op {
                    BoolOp::And => left && right,
                    BoolOp::Or => left || right,
                })
            }
        }
    }

    /// Convert this formula to a string, taking names from the provided `network`.
    ///
    /// This is the algebraic form (`&`, `|`, `!`); rules handed to the simulator
    /// use `to_boolesim_string` instead.
    pub fn to_string(&self, context: &RegulatoryNetwork) -> String {
        match self {
            Const(value) => value.to_string(),
            Var(id) => context.get_node_name(*id).to_string(),
            Not(inner) => format!("!{}", inner.to_string(context)),
            Binary(op, l, r) => {
                format!("({} {} {})", l.to_string(context), op, r.to_string(context))
            }
        }
    }
}

/// Simplification.
impl RuleExpr {
    /// Produce an equivalent minimal form of this formula by a bottom-up
    /// application of constant folding together with the double-negation,
    /// idempotence, complement and absorption laws.
    ///
    /// The procedure is idempotent: simplifying an already simplified formula
    /// returns an equal formula.
    pub fn simplify(&self) -> RuleExpr {
        match self {
            Const(value) => Const(*value),
            Var(id) => Var(*id),
            Not(inner) => match inner.simplify() {
                Const(value) => Const(!value),
                Not(nested) => *nested,
                other => RuleExpr::mk_not(other),
            },
            Binary(BoolOp::And, left, right) => {
                RuleExpr::simplify_and(left.simplify(), right.simplify())
            }
            Binary(BoolOp::Or, left, right) => {
                RuleExpr::simplify_or(left.simplify(), right.simplify())
            }
        }
    }

    /// **(internal)** Simplify a conjunction of two already simplified formulas.
    fn simplify_and(left: RuleExpr, right: RuleExpr) -> RuleExpr {
        if let Some(value) = left.as_const() {
            // Identity and annihilator laws.
            return if value { right } else { Const(false) };
        }
        if let Some(value) = right.as_const() {
            return if value { left } else { Const(false) };
        }
        if left == right {
            return left;
        }
        if left.is_complement_of(&right) {
            return Const(false);
        }
        // Absorption: x & (x | y) = x.
        if left.absorbs(&right, BoolOp::And) {
            return left;
        }
        if right.absorbs(&left, BoolOp::And) {
            return right;
        }
        RuleExpr::mk_binary(BoolOp::And, left, right)
    }

    /// **(internal)** Simplify a disjunction of two already simplified formulas.
    fn simplify_or(left: RuleExpr, right: RuleExpr) -> RuleExpr {
        if let Some(value) = left.as_const() {
            return if value { Const(true) } else { right };
        }
        if let Some(value) = right.as_const() {
            return if value { Const(true) } else { left };
        }
        if left == right {
            return left;
        }
        if left.is_complement_of(&right) {
            return Const(true);
        }
        // Absorption: x | (x & y) = x.
        if left.absorbs(&right, BoolOp::Or) {
            return left;
        }
        if right.absorbs(&left, BoolOp::Or) {
            return right;
        }
        RuleExpr::mk_binary(BoolOp::Or, left, right)
    }

    /// **(internal)** True if one of the two formulas is exactly the negation of
    /// the other.
    fn is_complement_of(&self, other: &RuleExpr) -> bool {
        if let Some(inner) = self.as_not() {
            if inner == other {
                return true;
            }
        }
        if let Some(inner) = other.as_not() {
            if inner == self {
                return true;
            }
        }
        false
    }

    /// **(internal)** True if `self` subsumes `other` under `op`, i.e. `other` is
    /// an application of the dual operator with `self` as one operand.
    fn absorbs(&self, other: &RuleExpr, op: BoolOp) -> bool {
        let dual = match op {
            BoolOp::And => BoolOp::Or,
            BoolOp::Or => BoolOp::And,
        };
        if let Some((l, inner_op, r)) = other.as_binary() {
            inner_op == dual && (l == self || r == self)
        } else {
            false
        }
    }
}
