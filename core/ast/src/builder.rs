//! The construction API: one `create_*` method per node kind, the only way to
//! introduce nodes into a store.
//!
//! Every constructor validates its child handles against the grammar-level
//! contract through [`NodeStore::mustbe_kind`] and panics on mismatch, naming
//! the expected and actual kinds. Vector constructors normalize their input:
//! empty nodes are dropped, same-family vector nodes are spliced in place, and
//! a sequence that normalizes to length zero interns to the empty sentinel.
//! No constructor ever mutates an existing node.
//!
//! The annotation handle always comes first; pass [`Ann::EMPTY`] where the
//! original interface had an annotation-less overload.

use crate::arena::{Ann, Ast, NodeStore};
use crate::kind::AstKind;
use crate::nodes::NodeData;

/// Operator spellings accepted by [`NodeStore::create_infix_op`].
pub const INFIX_OPS: &[&str] = &["+", "-", "*", "/", "&", "|", "<", ">", "="];

/// Operator spellings accepted by [`NodeStore::create_unary_op`].
pub const UNARY_OPS: &[&str] = &["-", "~"];

impl NodeStore {
    /// An empty node. Returns [`Ast::EMPTY`] unless a non-empty annotation
    /// forces a fresh annotated empty node.
    pub fn create_empty(&mut self, ann: Ann) -> Ast {
        if ann.is_empty() {
            Ast::EMPTY
        } else {
            self.alloc(NodeData::Empty, ann)
        }
    }

    /// A Jack class: name, field/static declarations and subroutine
    /// declarations.
    ///
    /// # Panics
    ///
    /// Panics unless `var_decs` is an `ast_class_var_decs` or empty node and
    /// `subr_decs` is an `ast_subr_decs` or empty node.
    pub fn create_class(&mut self, ann: Ann, class_name: &str, var_decs: Ast, subr_decs: Ast) -> Ast {
        self.mustbe_kind(var_decs, AstKind::ClassVarDecs);
        self.mustbe_kind(subr_decs, AstKind::SubrDecs);
        self.alloc(
            NodeData::Class {
                class_name: class_name.to_string(),
                var_decs,
                subr_decs,
            },
            ann,
        )
    }

    /// A variable declaration: name, segment, segment offset and type.
    pub fn create_var_dec(&mut self, ann: Ann, name: &str, segment: &str, offset: i32, ty: &str) -> Ast {
        self.alloc(
            NodeData::VarDec {
                name: name.to_string(),
                segment: segment.to_string(),
                offset,
                ty: ty.to_string(),
            },
            ann,
        )
    }

    /// A variable use: name, segment, segment offset and type.
    pub fn create_var(&mut self, ann: Ann, name: &str, segment: &str, offset: i32, ty: &str) -> Ast {
        self.alloc(
            NodeData::Var {
                name: name.to_string(),
                segment: segment.to_string(),
                offset,
                ty: ty.to_string(),
            },
            ann,
        )
    }

    /// A subroutine declaration wrapper.
    ///
    /// # Panics
    ///
    /// Panics unless `subr` is an `ast_constructor`, `ast_function` or
    /// `ast_method` node.
    pub fn create_subr(&mut self, ann: Ann, subr: Ast) -> Ast {
        self.mustbe_member(subr, AstKind::Subr);
        self.alloc(NodeData::Subr { subr }, ann)
    }

    /// A Jack constructor declaration.
    ///
    /// # Panics
    ///
    /// Panics unless `params` is an `ast_param_list` or empty node and `body`
    /// is an `ast_subr_body` or empty node.
    pub fn create_constructor(&mut self, ann: Ann, vtype: &str, name: &str, params: Ast, body: Ast) -> Ast {
        self.check_subr_parts(params, body);
        self.alloc(
            NodeData::Constructor {
                vtype: vtype.to_string(),
                name: name.to_string(),
                param_list: params,
                subr_body: body,
            },
            ann,
        )
    }

    /// A Jack function declaration.
    ///
    /// # Panics
    ///
    /// Panics unless `params` is an `ast_param_list` or empty node and `body`
    /// is an `ast_subr_body` or empty node.
    pub fn create_function(&mut self, ann: Ann, vtype: &str, name: &str, params: Ast, body: Ast) -> Ast {
        self.check_subr_parts(params, body);
        self.alloc(
            NodeData::Function {
                vtype: vtype.to_string(),
                name: name.to_string(),
                param_list: params,
                subr_body: body,
            },
            ann,
        )
    }

    /// A Jack method declaration.
    ///
    /// # Panics
    ///
    /// Panics unless `params` is an `ast_param_list` or empty node and `body`
    /// is an `ast_subr_body` or empty node.
    pub fn create_method(&mut self, ann: Ann, vtype: &str, name: &str, params: Ast, body: Ast) -> Ast {
        self.check_subr_parts(params, body);
        self.alloc(
            NodeData::Method {
                vtype: vtype.to_string(),
                name: name.to_string(),
                param_list: params,
                subr_body: body,
            },
            ann,
        )
    }

    /// A subroutine body: local declarations plus statements.
    ///
    /// # Panics
    ///
    /// Panics unless `decs` is an `ast_var_decs` or empty node and `body` is
    /// an `ast_statements` or empty node.
    pub fn create_subr_body(&mut self, ann: Ann, decs: Ast, body: Ast) -> Ast {
        self.mustbe_kind(decs, AstKind::VarDecs);
        self.mustbe_kind(body, AstKind::Statements);
        self.alloc(NodeData::SubrBody { decs, body }, ann)
    }

    /// A single-statement wrapper.
    ///
    /// # Panics
    ///
    /// Panics unless `statement` is one of the statement group: `ast_let`,
    /// `ast_let_array`, `ast_if`, `ast_if_else`, `ast_while`, `ast_do`,
    /// `ast_return` or `ast_return_expr`.
    pub fn create_statement(&mut self, ann: Ann, statement: Ast) -> Ast {
        self.mustbe_member(statement, AstKind::Statement);
        self.alloc(NodeData::Statement { statement }, ann)
    }

    /// A variable assignment statement.
    ///
    /// # Panics
    ///
    /// Panics unless `var` is an `ast_var` node and `expr` an `ast_expr` node.
    pub fn create_let(&mut self, ann: Ann, var: Ast, expr: Ast) -> Ast {
        self.mustbe_kind(var, AstKind::Var);
        self.mustbe_kind(expr, AstKind::Expr);
        self.alloc(NodeData::Let { var, expr }, ann)
    }

    /// An array element assignment statement.
    ///
    /// # Panics
    ///
    /// Panics unless `var` is an `ast_var` node and `index` / `expr` are
    /// `ast_expr` nodes.
    pub fn create_let_array(&mut self, ann: Ann, var: Ast, index: Ast, expr: Ast) -> Ast {
        self.mustbe_kind(var, AstKind::Var);
        self.mustbe_kind(index, AstKind::Expr);
        self.mustbe_kind(expr, AstKind::Expr);
        self.alloc(NodeData::LetArray { var, index, expr }, ann)
    }

    /// An if-then statement.
    ///
    /// # Panics
    ///
    /// Panics unless `condition` is an `ast_expr` node and `if_true` an
    /// `ast_statements` or empty node.
    pub fn create_if(&mut self, ann: Ann, condition: Ast, if_true: Ast) -> Ast {
        self.mustbe_kind(condition, AstKind::Expr);
        self.mustbe_kind(if_true, AstKind::Statements);
        self.alloc(NodeData::If { condition, if_true }, ann)
    }

    /// An if-then-else statement.
    ///
    /// # Panics
    ///
    /// Panics unless `condition` is an `ast_expr` node and both branches are
    /// `ast_statements` or empty nodes.
    pub fn create_if_else(&mut self, ann: Ann, condition: Ast, if_true: Ast, if_false: Ast) -> Ast {
        self.mustbe_kind(condition, AstKind::Expr);
        self.mustbe_kind(if_true, AstKind::Statements);
        self.mustbe_kind(if_false, AstKind::Statements);
        self.alloc(
            NodeData::IfElse {
                condition,
                if_true,
                if_false,
            },
            ann,
        )
    }

    /// A while loop.
    ///
    /// # Panics
    ///
    /// Panics unless `condition` is an `ast_expr` node and `body` an
    /// `ast_statements` or empty node.
    pub fn create_while(&mut self, ann: Ann, condition: Ast, body: Ast) -> Ast {
        self.mustbe_kind(condition, AstKind::Expr);
        self.mustbe_kind(body, AstKind::Statements);
        self.alloc(NodeData::While { condition, body }, ann)
    }

    /// A do statement.
    ///
    /// # Panics
    ///
    /// Panics unless `call` is an `ast_call_as_function` or
    /// `ast_call_as_method` node.
    pub fn create_do(&mut self, ann: Ann, call: Ast) -> Ast {
        let k = self.kind_of(call);
        if k != AstKind::CallAsFunction && k != AstKind::CallAsMethod {
            self.kind_error(call, AstKind::CallAsFunction);
        }
        self.alloc(NodeData::Do { call }, ann)
    }

    /// A return statement with no result.
    pub fn create_return(&mut self, ann: Ann) -> Ast {
        self.alloc(NodeData::Return, ann)
    }

    /// A return statement with a result.
    ///
    /// # Panics
    ///
    /// Panics unless `expr` is an `ast_expr` node.
    pub fn create_return_expr(&mut self, ann: Ann, expr: Ast) -> Ast {
        self.mustbe_kind(expr, AstKind::Expr);
        self.alloc(NodeData::ReturnExpr { expr }, ann)
    }

    /// A single-term wrapper.
    ///
    /// # Panics
    ///
    /// Panics unless `term` is one of the term group: `ast_int`, `ast_string`,
    /// `ast_bool`, `ast_null`, `ast_this`, `ast_expr`, `ast_var`,
    /// `ast_array_index`, `ast_unary_op` or a call node.
    pub fn create_term(&mut self, ann: Ann, term: Ast) -> Ast {
        self.mustbe_member(term, AstKind::Term);
        self.alloc(NodeData::Term { term }, ann)
    }

    /// An integer constant.
    ///
    /// # Panics
    ///
    /// Panics unless `constant` lies in the Jack word range -32768..=32767.
    pub fn create_int(&mut self, ann: Ann, constant: i32) -> Ast {
        assert!(
            (-32768..=32767).contains(&constant),
            "ast_int constant {constant} outside -32768..=32767"
        );
        self.alloc(NodeData::Int { constant }, ann)
    }

    /// A string constant.
    pub fn create_string(&mut self, ann: Ann, constant: &str) -> Ast {
        self.alloc(
            NodeData::String {
                constant: constant.to_string(),
            },
            ann,
        )
    }

    /// A boolean constant.
    pub fn create_bool(&mut self, ann: Ann, t_or_f: bool) -> Ast {
        self.alloc(NodeData::Bool { t_or_f }, ann)
    }

    /// The null constant.
    pub fn create_null(&mut self, ann: Ann) -> Ast {
        self.alloc(NodeData::Null, ann)
    }

    /// The this reference.
    pub fn create_this(&mut self, ann: Ann) -> Ast {
        self.alloc(NodeData::This, ann)
    }

    /// A unary operator applied to a term.
    ///
    /// # Panics
    ///
    /// Panics unless `op` is `-` or `~` and `term` satisfies the term group.
    pub fn create_unary_op(&mut self, ann: Ann, op: &str, term: Ast) -> Ast {
        assert!(UNARY_OPS.contains(&op), "`{op}` is not a unary operator");
        self.mustbe_member(term, AstKind::Term);
        self.alloc(
            NodeData::UnaryOp {
                op: op.to_string(),
                term,
            },
            ann,
        )
    }

    /// An array indexing expression.
    ///
    /// # Panics
    ///
    /// Panics unless `var` is an `ast_var` node and `index` an `ast_expr` node.
    pub fn create_array_index(&mut self, ann: Ann, var: Ast, index: Ast) -> Ast {
        self.mustbe_kind(var, AstKind::Var);
        self.mustbe_kind(index, AstKind::Expr);
        self.alloc(NodeData::ArrayIndex { var, index }, ann)
    }

    /// A constructor or function call, `ClassName.subr(...)`.
    ///
    /// # Panics
    ///
    /// Panics unless `subr_call` is an `ast_subr_call` node.
    pub fn create_call_as_function(&mut self, ann: Ann, class_name: &str, subr_call: Ast) -> Ast {
        self.mustbe_kind(subr_call, AstKind::SubrCall);
        self.alloc(
            NodeData::CallAsFunction {
                class_name: class_name.to_string(),
                subr_call,
            },
            ann,
        )
    }

    /// A method call, `var.subr(...)` or `this.subr(...)`.
    ///
    /// # Panics
    ///
    /// Panics unless `var` is an `ast_var` or `ast_this` node and `subr_call`
    /// an `ast_subr_call` node.
    pub fn create_call_as_method(&mut self, ann: Ann, class_name: &str, var: Ast, subr_call: Ast) -> Ast {
        let k = self.kind_of(var);
        if k != AstKind::Var && k != AstKind::This {
            self.kind_error(var, AstKind::Var);
        }
        self.mustbe_kind(subr_call, AstKind::SubrCall);
        self.alloc(
            NodeData::CallAsMethod {
                class_name: class_name.to_string(),
                var,
                subr_call,
            },
            ann,
        )
    }

    /// A subroutine name with its explicit call arguments.
    ///
    /// # Panics
    ///
    /// Panics unless `expr_list` is an `ast_expr_list` or empty node.
    pub fn create_subr_call(&mut self, ann: Ann, subr_name: &str, expr_list: Ast) -> Ast {
        self.mustbe_kind(expr_list, AstKind::ExprList);
        self.alloc(
            NodeData::SubrCall {
                subr_name: subr_name.to_string(),
                expr_list,
            },
            ann,
        )
    }

    /// A single infix operator.
    ///
    /// # Panics
    ///
    /// Panics unless `op` is a legal Jack infix operator.
    pub fn create_infix_op(&mut self, ann: Ann, op: &str) -> Ast {
        assert!(INFIX_OPS.contains(&op), "`{op}` is not an infix operator");
        self.alloc(NodeData::InfixOp { op: op.to_string() }, ann)
    }

    /// A vector of class variable declarations.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the `ast_var_dec` contract.
    pub fn create_class_var_decs(&mut self, ann: Ann, vars: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::ClassVarDecs, vars)
    }

    /// A vector of local variable declarations.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the `ast_var_dec` contract.
    pub fn create_var_decs(&mut self, ann: Ann, vars: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::VarDecs, vars)
    }

    /// A vector of subroutine declarations.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the `ast_subr` contract.
    pub fn create_subr_decs(&mut self, ann: Ann, subrs: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::SubrDecs, subrs)
    }

    /// A vector of subroutine parameter declarations.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the `ast_var_dec` contract.
    pub fn create_param_list(&mut self, ann: Ann, params: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::ParamList, params)
    }

    /// A statement sequence.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the statement contract.
    pub fn create_statements(&mut self, ann: Ann, statements: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::Statements, statements)
    }

    /// Arguments to a subroutine call.
    ///
    /// # Panics
    ///
    /// Panics if an element fails the `ast_expr` contract.
    pub fn create_expr_list(&mut self, ann: Ann, exprs: &[Ast]) -> Ast {
        self.create_vector(ann, AstKind::ExprList, exprs)
    }

    /// An expression: a non-empty sequence alternating between term and
    /// `ast_infix_op` nodes, starting and ending with a term.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty, ends on an operator, or any position
    /// breaks the alternation.
    pub fn create_expr(&mut self, ann: Ann, parts: &[Ast]) -> Ast {
        assert!(!parts.is_empty(), "an ast_expr cannot be empty");
        assert!(
            parts.len() % 2 == 1,
            "an ast_expr must end with a term, not an operator"
        );
        for (i, &part) in parts.iter().enumerate() {
            if i % 2 == 0 {
                self.mustbe_kind(part, AstKind::Term);
            } else {
                self.mustbe_kind(part, AstKind::InfixOp);
            }
        }
        self.alloc(
            NodeData::Vector {
                kind: AstKind::Expr,
                elements: parts.to_vec(),
            },
            ann,
        )
    }

    /// Group-membership check for wrapper kinds: unlike plain `mustbe_kind`,
    /// the wrapper kind itself is not an acceptable member (a statement node
    /// cannot wrap another statement node).
    #[track_caller]
    fn mustbe_member(&self, t: Ast, group: AstKind) {
        let actual = self.kind_of(t);
        if !group.refinements().contains(&actual) {
            panic!("expected one of the {group} kinds, found {actual}");
        }
    }

    #[track_caller]
    fn check_subr_parts(&self, params: Ast, body: Ast) {
        self.mustbe_kind(params, AstKind::ParamList);
        // a declaration without a body is legal, so empty is accepted here
        if self.kind_of(body) != AstKind::Empty {
            self.mustbe_kind(body, AstKind::SubrBody);
        }
    }

    /// Shared vector normalization: empty nodes are dropped, same-family
    /// vector nodes are spliced in place (stored vectors are already flat, so
    /// one splice keeps the representation nesting-free), and everything else
    /// must satisfy the element contract. A result of length zero interns to
    /// the empty node.
    #[track_caller]
    fn create_vector(&mut self, ann: Ann, kind: AstKind, items: &[Ast]) -> Ast {
        let element = kind.element_kind().expect("vector kind without element contract");
        let mut elements: Vec<Ast> = Vec::with_capacity(items.len());
        for &item in items {
            let k = self.kind_of(item);
            if k == AstKind::Empty {
                continue;
            }
            if k.is_vector() && k.element_kind() == Some(element) {
                if let NodeData::Vector { elements: inner, .. } = &self.record(item).data {
                    elements.extend(inner.iter().copied());
                }
            } else {
                self.mustbe_kind(item, element);
                elements.push(item);
            }
        }
        if elements.is_empty() {
            self.create_empty(ann)
        } else {
            self.alloc(NodeData::Vector { kind, elements }, ann)
        }
    }
}
