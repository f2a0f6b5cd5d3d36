//! The node kind registry: the single enumeration of every AST node variant,
//! the vector-like / scalar split, and the compatibility (refinement) relation
//! consulted by `have_kind` / `mustbe_kind`.

use std::fmt::{self, Display, Formatter};

/// Every kind of node a [`NodeStore`](crate::arena::NodeStore) can hold.
///
/// `Annotation` never appears as a tree node; it is reserved for the XML
/// codec's annotation child element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AstKind {
    Empty,
    Class,
    ClassVarDecs,
    VarDec,
    Var,
    SubrDecs,
    Subr,
    Constructor,
    Function,
    Method,
    ParamList,
    SubrBody,
    VarDecs,
    Statements,
    Statement,
    Let,
    LetArray,
    If,
    IfElse,
    While,
    Do,
    Return,
    ReturnExpr,
    ExprList,
    Expr,
    Term,
    Int,
    String,
    Bool,
    Null,
    This,
    UnaryOp,
    ArrayIndex,
    CallAsFunction,
    CallAsMethod,
    SubrCall,
    InfixOp,
    Annotation,
}

impl AstKind {
    /// The canonical `ast_*` name, also used as the XML element tag.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AstKind::Empty => "ast_empty",
            AstKind::Class => "ast_class",
            AstKind::ClassVarDecs => "ast_class_var_decs",
            AstKind::VarDec => "ast_var_dec",
            AstKind::Var => "ast_var",
            AstKind::SubrDecs => "ast_subr_decs",
            AstKind::Subr => "ast_subr",
            AstKind::Constructor => "ast_constructor",
            AstKind::Function => "ast_function",
            AstKind::Method => "ast_method",
            AstKind::ParamList => "ast_param_list",
            AstKind::SubrBody => "ast_subr_body",
            AstKind::VarDecs => "ast_var_decs",
            AstKind::Statements => "ast_statements",
            AstKind::Statement => "ast_statement",
            AstKind::Let => "ast_let",
            AstKind::LetArray => "ast_let_array",
            AstKind::If => "ast_if",
            AstKind::IfElse => "ast_if_else",
            AstKind::While => "ast_while",
            AstKind::Do => "ast_do",
            AstKind::Return => "ast_return",
            AstKind::ReturnExpr => "ast_return_expr",
            AstKind::ExprList => "ast_expr_list",
            AstKind::Expr => "ast_expr",
            AstKind::Term => "ast_term",
            AstKind::Int => "ast_int",
            AstKind::String => "ast_string",
            AstKind::Bool => "ast_bool",
            AstKind::Null => "ast_null",
            AstKind::This => "ast_this",
            AstKind::UnaryOp => "ast_unary_op",
            AstKind::ArrayIndex => "ast_array_index",
            AstKind::CallAsFunction => "ast_call_as_function",
            AstKind::CallAsMethod => "ast_call_as_method",
            AstKind::SubrCall => "ast_subr_call",
            AstKind::InfixOp => "ast_infix_op",
            AstKind::Annotation => "ast_annotation",
        }
    }

    /// Inverse of [`AstKind::name`], used by the XML codec's tag lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<AstKind> {
        const ALL: &[AstKind] = &[
            AstKind::Empty,
            AstKind::Class,
            AstKind::ClassVarDecs,
            AstKind::VarDec,
            AstKind::Var,
            AstKind::SubrDecs,
            AstKind::Subr,
            AstKind::Constructor,
            AstKind::Function,
            AstKind::Method,
            AstKind::ParamList,
            AstKind::SubrBody,
            AstKind::VarDecs,
            AstKind::Statements,
            AstKind::Statement,
            AstKind::Let,
            AstKind::LetArray,
            AstKind::If,
            AstKind::IfElse,
            AstKind::While,
            AstKind::Do,
            AstKind::Return,
            AstKind::ReturnExpr,
            AstKind::ExprList,
            AstKind::Expr,
            AstKind::Term,
            AstKind::Int,
            AstKind::String,
            AstKind::Bool,
            AstKind::Null,
            AstKind::This,
            AstKind::UnaryOp,
            AstKind::ArrayIndex,
            AstKind::CallAsFunction,
            AstKind::CallAsMethod,
            AstKind::SubrCall,
            AstKind::InfixOp,
            AstKind::Annotation,
        ];
        ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Is this a vector-like kind carrying an ordered child sequence?
    #[must_use]
    pub fn is_vector(self) -> bool {
        matches!(
            self,
            AstKind::ClassVarDecs
                | AstKind::VarDecs
                | AstKind::SubrDecs
                | AstKind::ParamList
                | AstKind::Statements
                | AstKind::ExprList
                | AstKind::Expr
        )
    }

    /// Vector kinds for which the empty sentinel is a legal value.
    /// An `ast_expr` is the one vector kind that can never be empty.
    #[must_use]
    pub fn may_be_empty(self) -> bool {
        self.is_vector() && self != AstKind::Expr
    }

    /// The element contract of a vector kind. `Expr` alternates term and
    /// infix-op elements and is validated specially by the builder.
    #[must_use]
    pub(crate) fn element_kind(self) -> Option<AstKind> {
        match self {
            AstKind::ClassVarDecs | AstKind::VarDecs | AstKind::ParamList => Some(AstKind::VarDec),
            AstKind::SubrDecs => Some(AstKind::Subr),
            AstKind::Statements => Some(AstKind::Statement),
            AstKind::ExprList => Some(AstKind::Expr),
            _ => None,
        }
    }

    /// Kinds registered as structural refinements of `self`: a node of any of
    /// these kinds may be used wherever a node of kind `self` is expected.
    #[must_use]
    pub fn refinements(self) -> &'static [AstKind] {
        match self {
            AstKind::If => &[AstKind::IfElse],
            AstKind::Let => &[AstKind::LetArray],
            AstKind::Subr => &[AstKind::Constructor, AstKind::Function, AstKind::Method],
            AstKind::Statement => &[
                AstKind::Let,
                AstKind::LetArray,
                AstKind::If,
                AstKind::IfElse,
                AstKind::While,
                AstKind::Do,
                AstKind::Return,
                AstKind::ReturnExpr,
            ],
            AstKind::Term => &[
                AstKind::Int,
                AstKind::String,
                AstKind::Bool,
                AstKind::Null,
                AstKind::This,
                AstKind::Expr,
                AstKind::Var,
                AstKind::ArrayIndex,
                AstKind::UnaryOp,
                AstKind::CallAsFunction,
                AstKind::CallAsMethod,
            ],
            _ => &[],
        }
    }
}

impl Display for AstKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
