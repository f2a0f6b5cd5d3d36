//! Stored node record representations. Crate-internal: the public surface
//! deals exclusively in handles, never in these records.

use crate::arena::{Ann, Ast};
use crate::kind::AstKind;

/// The payload of one stored AST node. One variant per kind, carrying that
/// kind's fixed fields; vector kinds carry their already-normalized child
/// sequence.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum NodeData {
    Empty,
    Class {
        class_name: String,
        var_decs: Ast,
        subr_decs: Ast,
    },
    VarDec {
        name: String,
        segment: String,
        offset: i32,
        ty: String,
    },
    Var {
        name: String,
        segment: String,
        offset: i32,
        ty: String,
    },
    Subr {
        subr: Ast,
    },
    Constructor {
        vtype: String,
        name: String,
        param_list: Ast,
        subr_body: Ast,
    },
    Function {
        vtype: String,
        name: String,
        param_list: Ast,
        subr_body: Ast,
    },
    Method {
        vtype: String,
        name: String,
        param_list: Ast,
        subr_body: Ast,
    },
    SubrBody {
        decs: Ast,
        body: Ast,
    },
    Statement {
        statement: Ast,
    },
    Let {
        var: Ast,
        expr: Ast,
    },
    LetArray {
        var: Ast,
        index: Ast,
        expr: Ast,
    },
    If {
        condition: Ast,
        if_true: Ast,
    },
    IfElse {
        condition: Ast,
        if_true: Ast,
        if_false: Ast,
    },
    While {
        condition: Ast,
        body: Ast,
    },
    Do {
        call: Ast,
    },
    Return,
    ReturnExpr {
        expr: Ast,
    },
    Term {
        term: Ast,
    },
    Int {
        constant: i32,
    },
    String {
        constant: String,
    },
    Bool {
        t_or_f: bool,
    },
    Null,
    This,
    UnaryOp {
        op: String,
        term: Ast,
    },
    ArrayIndex {
        var: Ast,
        index: Ast,
    },
    CallAsFunction {
        class_name: String,
        subr_call: Ast,
    },
    CallAsMethod {
        class_name: String,
        var: Ast,
        subr_call: Ast,
    },
    SubrCall {
        subr_name: String,
        expr_list: Ast,
    },
    InfixOp {
        op: String,
    },
    /// The normalized elements of a vector-like node. The kind tag is kept
    /// alongside because several vector kinds share an element contract.
    Vector {
        kind: AstKind,
        elements: Vec<Ast>,
    },
}

impl NodeData {
    pub(crate) fn kind(&self) -> AstKind {
        match self {
            NodeData::Empty => AstKind::Empty,
            NodeData::Class { .. } => AstKind::Class,
            NodeData::VarDec { .. } => AstKind::VarDec,
            NodeData::Var { .. } => AstKind::Var,
            NodeData::Subr { .. } => AstKind::Subr,
            NodeData::Constructor { .. } => AstKind::Constructor,
            NodeData::Function { .. } => AstKind::Function,
            NodeData::Method { .. } => AstKind::Method,
            NodeData::SubrBody { .. } => AstKind::SubrBody,
            NodeData::Statement { .. } => AstKind::Statement,
            NodeData::Let { .. } => AstKind::Let,
            NodeData::LetArray { .. } => AstKind::LetArray,
            NodeData::If { .. } => AstKind::If,
            NodeData::IfElse { .. } => AstKind::IfElse,
            NodeData::While { .. } => AstKind::While,
            NodeData::Do { .. } => AstKind::Do,
            NodeData::Return => AstKind::Return,
            NodeData::ReturnExpr { .. } => AstKind::ReturnExpr,
            NodeData::Term { .. } => AstKind::Term,
            NodeData::Int { .. } => AstKind::Int,
            NodeData::String { .. } => AstKind::String,
            NodeData::Bool { .. } => AstKind::Bool,
            NodeData::Null => AstKind::Null,
            NodeData::This => AstKind::This,
            NodeData::UnaryOp { .. } => AstKind::UnaryOp,
            NodeData::ArrayIndex { .. } => AstKind::ArrayIndex,
            NodeData::CallAsFunction { .. } => AstKind::CallAsFunction,
            NodeData::CallAsMethod { .. } => AstKind::CallAsMethod,
            NodeData::SubrCall { .. } => AstKind::SubrCall,
            NodeData::InfixOp { .. } => AstKind::InfixOp,
            NodeData::Vector { kind, .. } => *kind,
        }
    }
}

/// One arena slot: the node payload plus its annotation handle, fixed at
/// construction time.
#[derive(Clone, Debug)]
pub(crate) struct NodeRecord {
    pub(crate) data: NodeData,
    pub(crate) ann: Ann,
}

/// One annotation arena slot: three independent string lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AnnRecord {
    pub(crate) comments: Vec<String>,
    pub(crate) warnings: Vec<String>,
    pub(crate) errors: Vec<String>,
}

impl AnnRecord {
    pub(crate) fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }
}
