use fxhash::FxHashSet;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::iter::Map;
use std::ops::Range;
use thiserror::Error;

/// **(internal)** Implements the `.sif` interaction-file parser for `RegulatoryNetwork`.
mod _sif_parser;

/// **(internal)** Utility methods for `BoolOp`.
mod _impl_bool_op;
/// **(internal)** Utility methods for `Classification`.
mod _impl_classification;
/// **(internal)** Utility methods for `Edge`.
mod _impl_edge;
/// **(internal)** Utility methods for `InteractionKind`.
mod _impl_interaction_kind;
/// **(internal)** Utility methods for `Node`.
mod _impl_node;
/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Utility methods for `RcRegistry`, including the built-in rule templates.
mod _impl_rc_registry;
/// **(internal)** Utility methods for `RcSpecs`, including the spec-file parser.
mod _impl_rc_specs;
/// **(internal)** Utility methods for `RegulatoryNetwork`.
mod _impl_regulatory_network;
/// **(internal)** Utility methods for `RuleCompiler`.
mod _impl_rule_compiler;
/// **(internal)** Utility methods for `RuleExpr` (construction and simplification).
mod _impl_rule_expr;
/// **(internal)** `RuleExpr` to BooleSim surface syntax.
mod _impl_rule_expr_to_boolesim;
/// **(internal)** `RegulatoryNetwork` to `.sif` string.
mod display_regulatory_network;

/// The RC code assumed for nodes that the RC-specification file does not mention.
///
/// The value itself is conventional. The compiler driver takes its default code as an
/// explicit argument; this constant is merely the value the bundled CLI passes in.
pub const DEFAULT_RC_CODE: &str = "8";

lazy_static! {
    /// A regex which matches valid node identifiers (after type-prefix stripping).
    static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// A type-safe index of a `Node` inside a `RegulatoryNetwork`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// Possible effects of a regulatory interaction on its target.
///
/// Every kind has a canonical numeric code: `Promotes` is `1`, `Represses` is `-1`
/// and `Neutral` is `0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InteractionKind {
    Promotes,
    Represses,
    Neutral,
}

/// A node of a `RegulatoryNetwork`.
///
/// A node has a `name` which also serves as the variable name in compiled rules.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node {
    name: String,
}

/// A directed regulatory interaction between two `Node`s of a `RegulatoryNetwork`.
///
/// Edges with identical source, target and kind are considered the same edge. Two
/// edges between the same pair of nodes that differ in kind may coexist; in practice
/// a pair is expected to carry one edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    kind: InteractionKind,
}

/// A directed gene-regulatory network: a set of named nodes together with, for every
/// node, the set of its incoming regulatory `Edge`s.
///
/// The network is built incrementally from raw `.sif` tokens (see `add_edge` and
/// `try_from_sif`). Construction must finish before rule compilation starts; the
/// compiler only ever reads the network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegulatoryNetwork {
    nodes: Vec<Node>,
    incoming: Vec<FxHashSet<Edge>>,
    node_to_index: HashMap<String, NodeId>,
}

/// Regulatory-condition overrides parsed from an RC-specification file, mapping node
/// names to RC codes.
///
/// Nodes absent from the specification fall back to the compiler's default code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RcSpecs {
    codes: HashMap<String, String>,
}

/// Classified regulators of one node: the sources of its incoming edges, split by
/// interaction kind and sorted by id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    activators: Vec<NodeId>,
    repressors: Vec<NodeId>,
    neutrals: Vec<NodeId>,
}

/// A rule template: a pure function turning classified regulators into a Boolean
/// expression. Templates are registered in an `RcRegistry` under an RC code.
pub type RuleTemplate = fn(&Classification) -> RuleExpr;

/// An open registry of rule templates keyed by RC code.
///
/// The default registry contains exactly the built-in template `"0"`; new codes can
/// be registered without touching existing ones.
#[derive(Clone)]
pub struct RcRegistry {
    templates: HashMap<String, RuleTemplate>,
}

/// Possible binary Boolean operators that can appear in a `RuleExpr`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoolOp {
    And,
    Or,
}

/// A symbolic Boolean formula over the nodes of a `RegulatoryNetwork`.
///
/// A rule expression describes the next state of one node in terms of its
/// regulators. It is simplified to a canonical minimal form before being rendered
/// into BooleSim surface syntax.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RuleExpr {
    Const(bool),
    Var(NodeId),
    Not(Box<RuleExpr>),
    Binary(BoolOp, Box<RuleExpr>, Box<RuleExpr>),
}

/// Compiles per-node Boolean rules from a `RegulatoryNetwork` and an `RcRegistry`.
///
/// The fallback RC code is explicit configuration: nodes without an override in the
/// RC specification are compiled with `default_rc`.
pub struct RuleCompiler<'a> {
    network: &'a RegulatoryNetwork,
    registry: &'a RcRegistry,
    default_rc: String,
}

/// Errors reported by network construction, RC-specification handling and rule
/// compilation.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CompileError {
    /// An edge record does not have exactly three fields, or a node token reduces to
    /// an invalid identifier.
    #[error("malformed edge record `{record}`")]
    MalformedEdgeRecord { record: String },
    /// An RC-specification record does not have exactly two fields.
    #[error("malformed RC-specification record `{record}`")]
    MalformedRcRecord { record: String },
    /// An interaction name or code outside of `PROMOTES`, `REPRESSES` and `NEUTRAL`.
    #[error("unknown interaction kind `{name}`")]
    UnknownInteractionKind { name: String },
    /// A node's RC code has no registered rule template.
    #[error("no rule template registered for RC code `{code}` (node `{node}`)")]
    UnknownRcTemplate { node: String, code: String },
    /// The same node is assigned two different RC codes (strict mode only).
    #[error("node `{node}` is assigned RC code `{second}` but already has `{first}`")]
    DuplicateRcOverride {
        node: String,
        first: String,
        second: String,
    },
}

/// An iterator over all `NodeId`s of a `RegulatoryNetwork`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;
