//! The accessor API: one `get_*` method per field, plus `size_of_*` / indexed
//! `get_*` for vector kinds.
//!
//! Each accessor is total over the kinds declared compatible with it and
//! panics on any other kind, naming the expected and actual kinds. Where the
//! original interface declares covariance (`ast_if` accessors accept
//! `ast_if_else`, `ast_let` accessors accept `ast_let_array`, and the
//! converse shared-field directions), the match arms below admit exactly
//! those variants and nothing more.

use crate::arena::{Ast, NodeStore};
use crate::kind::AstKind;
use crate::nodes::NodeData;

macro_rules! vector_accessors {
    ( $( $(#[$doc:meta])* ($size_of:ident, $get:ident, $kind:expr) ),+ $(,)? ) => {
        impl NodeStore {
            $(
                $(#[$doc])*
                ///
                /// # Panics
                ///
                /// Panics on a handle of an incompatible kind.
                #[must_use]
                pub fn $size_of(&self, t: Ast) -> usize {
                    self.vector_len(t, $kind)
                }

                /// Indexed element access; 0-based.
                ///
                /// # Panics
                ///
                /// Panics on a handle of an incompatible kind or an
                /// out-of-range index.
                #[must_use]
                pub fn $get(&self, t: Ast, index: usize) -> Ast {
                    self.vector_get(t, $kind, index)
                }
            )+
        }
    };
}

vector_accessors! {
    /// Element count of an `ast_class_var_decs` node; 0 for an empty node.
    (size_of_class_var_decs, get_class_var_decs, AstKind::ClassVarDecs),
    /// Element count of an `ast_var_decs` node; 0 for an empty node.
    (size_of_var_decs, get_var_decs, AstKind::VarDecs),
    /// Element count of an `ast_subr_decs` node; 0 for an empty node.
    (size_of_subr_decs, get_subr_decs, AstKind::SubrDecs),
    /// Element count of an `ast_param_list` node; 0 for an empty node.
    (size_of_param_list, get_param_list, AstKind::ParamList),
    /// Element count of an `ast_statements` node; 0 for an empty node.
    (size_of_statements, get_statements, AstKind::Statements),
    /// Element count of an `ast_expr_list` node; 0 for an empty node.
    (size_of_expr_list, get_expr_list, AstKind::ExprList),
    /// Element count of an `ast_expr` node; always odd, never 0.
    (size_of_expr, get_expr, AstKind::Expr),
}

impl NodeStore {
    fn vector_len(&self, t: Ast, kind: AstKind) -> usize {
        match &self.record(t).data {
            NodeData::Empty if kind.may_be_empty() => 0,
            NodeData::Vector { kind: k, elements } if *k == kind => elements.len(),
            _ => self.kind_error(t, kind),
        }
    }

    fn vector_get(&self, t: Ast, kind: AstKind, index: usize) -> Ast {
        match &self.record(t).data {
            NodeData::Vector { kind: k, elements } if *k == kind => {
                *elements.get(index).unwrap_or_else(|| {
                    panic!(
                        "index {index} out of range for {kind} of {} elements",
                        elements.len()
                    )
                })
            }
            NodeData::Empty if kind.may_be_empty() => {
                panic!("index {index} out of range for empty {kind}")
            }
            _ => self.kind_error(t, kind),
        }
    }

    /// The class name of an `ast_class` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_class_class_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Class { class_name, .. } => class_name,
            _ => self.kind_error(t, AstKind::Class),
        }
    }

    /// The field/static declarations of an `ast_class` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_class_var_decs_of(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Class { var_decs, .. } => *var_decs,
            _ => self.kind_error(t, AstKind::Class),
        }
    }

    /// The subroutine declarations of an `ast_class` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_class_subr_decs(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Class { subr_decs, .. } => *subr_decs,
            _ => self.kind_error(t, AstKind::Class),
        }
    }

    /// The declared name of an `ast_var_dec` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_dec_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::VarDec { name, .. } => name,
            _ => self.kind_error(t, AstKind::VarDec),
        }
    }

    /// The segment of an `ast_var_dec` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_dec_segment(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::VarDec { segment, .. } => segment,
            _ => self.kind_error(t, AstKind::VarDec),
        }
    }

    /// The segment offset of an `ast_var_dec` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_dec_offset(&self, t: Ast) -> i32 {
        match &self.record(t).data {
            NodeData::VarDec { offset, .. } => *offset,
            _ => self.kind_error(t, AstKind::VarDec),
        }
    }

    /// The declared type of an `ast_var_dec` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_dec_type(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::VarDec { ty, .. } => ty,
            _ => self.kind_error(t, AstKind::VarDec),
        }
    }

    /// The name of an `ast_var` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Var { name, .. } => name,
            _ => self.kind_error(t, AstKind::Var),
        }
    }

    /// The segment of an `ast_var` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_segment(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Var { segment, .. } => segment,
            _ => self.kind_error(t, AstKind::Var),
        }
    }

    /// The segment offset of an `ast_var` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_offset(&self, t: Ast) -> i32 {
        match &self.record(t).data {
            NodeData::Var { offset, .. } => *offset,
            _ => self.kind_error(t, AstKind::Var),
        }
    }

    /// The type of an `ast_var` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_var_type(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Var { ty, .. } => ty,
            _ => self.kind_error(t, AstKind::Var),
        }
    }

    /// The wrapped declaration of an `ast_subr` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_subr_subr(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Subr { subr } => *subr,
            _ => self.kind_error(t, AstKind::Subr),
        }
    }

    /// The return type of an `ast_constructor` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_constructor_vtype(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Constructor { vtype, .. } => vtype,
            _ => self.kind_error(t, AstKind::Constructor),
        }
    }

    /// The name of an `ast_constructor` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_constructor_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Constructor { name, .. } => name,
            _ => self.kind_error(t, AstKind::Constructor),
        }
    }

    /// The parameter list of an `ast_constructor` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_constructor_param_list(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Constructor { param_list, .. } => *param_list,
            _ => self.kind_error(t, AstKind::Constructor),
        }
    }

    /// The body of an `ast_constructor` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_constructor_subr_body(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Constructor { subr_body, .. } => *subr_body,
            _ => self.kind_error(t, AstKind::Constructor),
        }
    }

    /// The return type of an `ast_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_function_vtype(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Function { vtype, .. } => vtype,
            _ => self.kind_error(t, AstKind::Function),
        }
    }

    /// The name of an `ast_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_function_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Function { name, .. } => name,
            _ => self.kind_error(t, AstKind::Function),
        }
    }

    /// The parameter list of an `ast_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_function_param_list(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Function { param_list, .. } => *param_list,
            _ => self.kind_error(t, AstKind::Function),
        }
    }

    /// The body of an `ast_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_function_subr_body(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Function { subr_body, .. } => *subr_body,
            _ => self.kind_error(t, AstKind::Function),
        }
    }

    /// The return type of an `ast_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_method_vtype(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Method { vtype, .. } => vtype,
            _ => self.kind_error(t, AstKind::Method),
        }
    }

    /// The name of an `ast_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_method_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::Method { name, .. } => name,
            _ => self.kind_error(t, AstKind::Method),
        }
    }

    /// The parameter list of an `ast_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_method_param_list(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Method { param_list, .. } => *param_list,
            _ => self.kind_error(t, AstKind::Method),
        }
    }

    /// The body of an `ast_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_method_subr_body(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Method { subr_body, .. } => *subr_body,
            _ => self.kind_error(t, AstKind::Method),
        }
    }

    /// The local declarations of an `ast_subr_body` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_subr_body_decs(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::SubrBody { decs, .. } => *decs,
            _ => self.kind_error(t, AstKind::SubrBody),
        }
    }

    /// The statements of an `ast_subr_body` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_subr_body_body(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::SubrBody { body, .. } => *body,
            _ => self.kind_error(t, AstKind::SubrBody),
        }
    }

    /// The wrapped statement of an `ast_statement` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_statement_statement(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Statement { statement } => *statement,
            _ => self.kind_error(t, AstKind::Statement),
        }
    }

    /// The target variable of an `ast_let` node; also accepts `ast_let_array`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_let_var(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Let { var, .. } | NodeData::LetArray { var, .. } => *var,
            _ => self.kind_error(t, AstKind::Let),
        }
    }

    /// The assigned expression of an `ast_let` node; also accepts
    /// `ast_let_array`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_let_expr(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Let { expr, .. } | NodeData::LetArray { expr, .. } => *expr,
            _ => self.kind_error(t, AstKind::Let),
        }
    }

    /// The target variable of an `ast_let_array` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_let_array_var(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::LetArray { var, .. } => *var,
            _ => self.kind_error(t, AstKind::LetArray),
        }
    }

    /// The index expression of an `ast_let_array` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_let_array_index(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::LetArray { index, .. } => *index,
            _ => self.kind_error(t, AstKind::LetArray),
        }
    }

    /// The assigned expression of an `ast_let_array` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_let_array_expr(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::LetArray { expr, .. } => *expr,
            _ => self.kind_error(t, AstKind::LetArray),
        }
    }

    /// The condition of an `ast_if` node; also accepts `ast_if_else`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_if_condition(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::If { condition, .. } | NodeData::IfElse { condition, .. } => *condition,
            _ => self.kind_error(t, AstKind::If),
        }
    }

    /// The then-branch of an `ast_if` node; also accepts `ast_if_else`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_if_if_true(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::If { if_true, .. } | NodeData::IfElse { if_true, .. } => *if_true,
            _ => self.kind_error(t, AstKind::If),
        }
    }

    /// The condition of an `ast_if_else` node; also accepts `ast_if`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_if_else_condition(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::If { condition, .. } | NodeData::IfElse { condition, .. } => *condition,
            _ => self.kind_error(t, AstKind::IfElse),
        }
    }

    /// The then-branch of an `ast_if_else` node; also accepts `ast_if`.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_if_else_if_true(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::If { if_true, .. } | NodeData::IfElse { if_true, .. } => *if_true,
            _ => self.kind_error(t, AstKind::IfElse),
        }
    }

    /// The else-branch of an `ast_if_else` node. A plain `ast_if` has no
    /// else-branch and is rejected.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_if_else_if_false(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::IfElse { if_false, .. } => *if_false,
            _ => self.kind_error(t, AstKind::IfElse),
        }
    }

    /// The condition of an `ast_while` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_while_condition(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::While { condition, .. } => *condition,
            _ => self.kind_error(t, AstKind::While),
        }
    }

    /// The loop body of an `ast_while` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_while_body(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::While { body, .. } => *body,
            _ => self.kind_error(t, AstKind::While),
        }
    }

    /// The call of an `ast_do` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_do_call(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Do { call } => *call,
            _ => self.kind_error(t, AstKind::Do),
        }
    }

    /// The result expression of an `ast_return_expr` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_return_expr(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::ReturnExpr { expr } => *expr,
            _ => self.kind_error(t, AstKind::ReturnExpr),
        }
    }

    /// The wrapped term of an `ast_term` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_term_term(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::Term { term } => *term,
            _ => self.kind_error(t, AstKind::Term),
        }
    }

    /// The value of an `ast_int` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_int_constant(&self, t: Ast) -> i32 {
        match &self.record(t).data {
            NodeData::Int { constant } => *constant,
            _ => self.kind_error(t, AstKind::Int),
        }
    }

    /// The value of an `ast_string` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_string_constant(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::String { constant } => constant,
            _ => self.kind_error(t, AstKind::String),
        }
    }

    /// The value of an `ast_bool` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_bool_t_or_f(&self, t: Ast) -> bool {
        match &self.record(t).data {
            NodeData::Bool { t_or_f } => *t_or_f,
            _ => self.kind_error(t, AstKind::Bool),
        }
    }

    /// The operator spelling of an `ast_unary_op` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_unary_op_op(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::UnaryOp { op, .. } => op,
            _ => self.kind_error(t, AstKind::UnaryOp),
        }
    }

    /// The operand of an `ast_unary_op` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_unary_op_term(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::UnaryOp { term, .. } => *term,
            _ => self.kind_error(t, AstKind::UnaryOp),
        }
    }

    /// The indexed variable of an `ast_array_index` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_array_index_var(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::ArrayIndex { var, .. } => *var,
            _ => self.kind_error(t, AstKind::ArrayIndex),
        }
    }

    /// The index expression of an `ast_array_index` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_array_index_index(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::ArrayIndex { index, .. } => *index,
            _ => self.kind_error(t, AstKind::ArrayIndex),
        }
    }

    /// The class name of an `ast_call_as_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_call_as_function_class_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::CallAsFunction { class_name, .. } => class_name,
            _ => self.kind_error(t, AstKind::CallAsFunction),
        }
    }

    /// The wrapped call of an `ast_call_as_function` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_call_as_function_subr_call(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::CallAsFunction { subr_call, .. } => *subr_call,
            _ => self.kind_error(t, AstKind::CallAsFunction),
        }
    }

    /// The class name of an `ast_call_as_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_call_as_method_class_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::CallAsMethod { class_name, .. } => class_name,
            _ => self.kind_error(t, AstKind::CallAsMethod),
        }
    }

    /// The receiver of an `ast_call_as_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_call_as_method_var(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::CallAsMethod { var, .. } => *var,
            _ => self.kind_error(t, AstKind::CallAsMethod),
        }
    }

    /// The wrapped call of an `ast_call_as_method` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_call_as_method_subr_call(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::CallAsMethod { subr_call, .. } => *subr_call,
            _ => self.kind_error(t, AstKind::CallAsMethod),
        }
    }

    /// The subroutine name of an `ast_subr_call` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_subr_call_subr_name(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::SubrCall { subr_name, .. } => subr_name,
            _ => self.kind_error(t, AstKind::SubrCall),
        }
    }

    /// The arguments of an `ast_subr_call` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_subr_call_expr_list(&self, t: Ast) -> Ast {
        match &self.record(t).data {
            NodeData::SubrCall { expr_list, .. } => *expr_list,
            _ => self.kind_error(t, AstKind::SubrCall),
        }
    }

    /// The operator spelling of an `ast_infix_op` node.
    ///
    /// # Panics
    ///
    /// Panics on a handle of an incompatible kind.
    #[must_use]
    pub fn get_infix_op_op(&self, t: Ast) -> &str {
        match &self.record(t).data {
            NodeData::InfixOp { op } => op,
            _ => self.kind_error(t, AstKind::InfixOp),
        }
    }
}
