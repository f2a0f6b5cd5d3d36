//! Construction API behavior: per-kind contracts, vector normalization and
//! expression alternation.

use jackc_ast::{Ann, Ast, AstKind, NodeStore, INFIX_OPS, UNARY_OPS};

use crate::utils::{int_expr, local_var, sum_expr};

#[test]
fn scalar_fields_read_back() {
    let mut store = NodeStore::new();
    let dec = store.create_var_dec(Ann::EMPTY, "count", "argument", 2, "int");
    assert_eq!(store.get_var_dec_name(dec), "count");
    assert_eq!(store.get_var_dec_segment(dec), "argument");
    assert_eq!(store.get_var_dec_offset(dec), 2);
    assert_eq!(store.get_var_dec_type(dec), "int");

    let s = store.create_string(Ann::EMPTY, "hi there");
    assert_eq!(store.get_string_constant(s), "hi there");
    let b = store.create_bool(Ann::EMPTY, true);
    assert!(store.get_bool_t_or_f(b));
}

#[test]
fn operator_tables_cover_the_jack_grammar() {
    assert_eq!(INFIX_OPS, ["+", "-", "*", "/", "&", "|", "<", ">", "="]);
    assert_eq!(UNARY_OPS, ["-", "~"]);
}

#[test]
fn int_constants_accept_the_word_range_bounds() {
    let mut store = NodeStore::new();
    let min = store.create_int(Ann::EMPTY, -32768);
    let max = store.create_int(Ann::EMPTY, 32767);
    assert_eq!(store.get_int_constant(min), -32768);
    assert_eq!(store.get_int_constant(max), 32767);
}

#[test]
#[should_panic(expected = "outside -32768..=32767")]
fn int_constants_reject_values_past_the_word_range() {
    let mut store = NodeStore::new();
    store.create_int(Ann::EMPTY, 32768);
}

#[test]
#[should_panic(expected = "`%` is not an infix operator")]
fn unknown_infix_operators_are_rejected() {
    let mut store = NodeStore::new();
    store.create_infix_op(Ann::EMPTY, "%");
}

#[test]
#[should_panic(expected = "`!` is not a unary operator")]
fn unknown_unary_operators_are_rejected() {
    let mut store = NodeStore::new();
    let constant = store.create_int(Ann::EMPTY, 1);
    store.create_unary_op(Ann::EMPTY, "!", constant);
}

#[test]
fn vectors_drop_empty_items() {
    let mut store = NodeStore::new();
    let dec = store.create_var_dec(Ann::EMPTY, "x", "local", 0, "int");
    let decs = store.create_var_decs(Ann::EMPTY, &[Ast::EMPTY, dec, Ast::EMPTY]);
    assert_eq!(store.size_of_var_decs(decs), 1);
    assert_eq!(store.get_var_decs(decs, 0), dec);
}

#[test]
fn vectors_of_nothing_intern_to_the_empty_node() {
    let mut store = NodeStore::new();
    let decs = store.create_var_decs(Ann::EMPTY, &[Ast::EMPTY, Ast::EMPTY]);
    assert_eq!(decs, Ast::EMPTY);
    assert_eq!(store.size_of_var_decs(decs), 0);
}

#[test]
fn same_contract_vectors_are_spliced_flat() {
    let mut store = NodeStore::new();
    let a = store.create_return(Ann::EMPTY);
    let a = store.create_statement(Ann::EMPTY, a);
    let b = store.create_return(Ann::EMPTY);
    let c = store.create_return(Ann::EMPTY);
    let inner = store.create_statements(Ann::EMPTY, &[b, c]);
    let d = store.create_return(Ann::EMPTY);

    let all = store.create_statements(Ann::EMPTY, &[a, inner, d]);
    assert_eq!(store.size_of_statements(all), 4);
    assert_eq!(store.get_statements(all, 0), a);
    assert_eq!(store.get_statements(all, 1), b);
    assert_eq!(store.get_statements(all, 2), c);
    assert_eq!(store.get_statements(all, 3), d);
}

#[test]
fn statement_vectors_accept_bare_statement_kinds() {
    let mut store = NodeStore::new();
    // a bare ast_return, without the ast_statement wrapper
    let ret = store.create_return(Ann::EMPTY);
    let statements = store.create_statements(Ann::EMPTY, &[ret]);
    assert_eq!(store.size_of_statements(statements), 1);
    assert_eq!(store.kind_of(store.get_statements(statements, 0)), AstKind::Return);
}

#[test]
#[should_panic(expected = "expected a node compatible with ast_var_dec, found ast_return")]
fn vector_elements_outside_the_contract_are_rejected() {
    let mut store = NodeStore::new();
    let ret = store.create_return(Ann::EMPTY);
    store.create_param_list(Ann::EMPTY, &[ret]);
}

#[test]
fn expression_elements_are_term_wrapper_nodes() {
    let mut store = NodeStore::new();
    let constant = store.create_int(Ann::EMPTY, 7);
    let term = store.create_term(Ann::EMPTY, constant);
    let expr = store.create_expr(Ann::EMPTY, &[term]);
    assert_eq!(store.size_of_expr(expr), 1);
    assert_eq!(store.get_expr(expr, 0), term);
    assert_eq!(store.get_term_term(store.get_expr(expr, 0)), constant);
}

#[test]
#[should_panic(expected = "an ast_expr cannot be empty")]
fn expressions_cannot_be_empty() {
    let mut store = NodeStore::new();
    store.create_expr(Ann::EMPTY, &[]);
}

#[test]
#[should_panic(expected = "must end with a term")]
fn expressions_cannot_end_on_an_operator() {
    let mut store = NodeStore::new();
    let one = store.create_int(Ann::EMPTY, 1);
    let one = store.create_term(Ann::EMPTY, one);
    let plus = store.create_infix_op(Ann::EMPTY, "+");
    store.create_expr(Ann::EMPTY, &[one, plus]);
}

#[test]
#[should_panic(expected = "expected a node compatible with ast_infix_op, found ast_term")]
fn expressions_must_alternate_terms_and_operators() {
    let mut store = NodeStore::new();
    let one = store.create_int(Ann::EMPTY, 1);
    let one = store.create_term(Ann::EMPTY, one);
    let two = store.create_int(Ann::EMPTY, 2);
    let two = store.create_term(Ann::EMPTY, two);
    store.create_expr(Ann::EMPTY, &[one, two, one]);
}

#[test]
fn terms_accept_every_member_of_the_term_group() {
    let mut store = NodeStore::new();
    let null = store.create_null(Ann::EMPTY);
    let this = store.create_this(Ann::EMPTY);
    let nested = sum_expr(&mut store, 1, 2);
    for inner in [null, this, nested] {
        let term = store.create_term(Ann::EMPTY, inner);
        assert_eq!(store.get_term_term(term), inner);
    }
}

#[test]
#[should_panic(expected = "expected one of the ast_term kinds, found ast_term")]
fn a_term_cannot_wrap_another_term() {
    let mut store = NodeStore::new();
    let constant = store.create_int(Ann::EMPTY, 1);
    let term = store.create_term(Ann::EMPTY, constant);
    store.create_term(Ann::EMPTY, term);
}

#[test]
fn subroutines_may_omit_their_body() {
    let mut store = NodeStore::new();
    let params = store.create_empty(Ann::EMPTY);
    let f = store.create_function(Ann::EMPTY, "void", "halt", params, Ast::EMPTY);
    assert_eq!(store.get_function_subr_body(f), Ast::EMPTY);
}

#[test]
fn do_accepts_both_call_forms() {
    let mut store = NodeStore::new();
    let args = store.create_empty(Ann::EMPTY);
    let call = store.create_subr_call(Ann::EMPTY, "run", args);
    let as_function = store.create_call_as_function(Ann::EMPTY, "Game", call);
    let receiver = store.create_this(Ann::EMPTY);
    let as_method = store.create_call_as_method(Ann::EMPTY, "Game", receiver, call);

    let do_f = store.create_do(Ann::EMPTY, as_function);
    let do_m = store.create_do(Ann::EMPTY, as_method);
    assert_eq!(store.get_do_call(do_f), as_function);
    assert_eq!(store.get_do_call(do_m), as_method);
    assert_eq!(store.get_call_as_method_var(as_method), receiver);
}

#[test]
#[should_panic(expected = "expected a node compatible with ast_call_as_function, found ast_subr_call")]
fn do_rejects_a_bare_subr_call() {
    let mut store = NodeStore::new();
    let args = store.create_empty(Ann::EMPTY);
    let call = store.create_subr_call(Ann::EMPTY, "run", args);
    store.create_do(Ann::EMPTY, call);
}

#[test]
#[should_panic(expected = "expected a node compatible with ast_var, found ast_int")]
fn method_calls_require_a_var_or_this_receiver() {
    let mut store = NodeStore::new();
    let args = store.create_empty(Ann::EMPTY);
    let call = store.create_subr_call(Ann::EMPTY, "run", args);
    let receiver = store.create_int(Ann::EMPTY, 1);
    store.create_call_as_method(Ann::EMPTY, "Game", receiver, call);
}

#[test]
fn class_accessors_distinguish_field_and_indexed_forms() {
    let mut store = NodeStore::new();
    let class = crate::utils::main_class(&mut store);
    assert_eq!(store.get_class_class_name(class), "Main");
    assert_eq!(store.get_class_var_decs_of(class), Ast::EMPTY);
    let subrs = store.get_class_subr_decs(class);
    assert_eq!(store.size_of_subr_decs(subrs), 1);
    let subr = store.get_subr_decs(subrs, 0);
    let function = store.get_subr_subr(subr);
    assert_eq!(store.get_function_name(function), "main");
    assert_eq!(store.get_function_vtype(function), "void");
}

#[test]
fn let_statements_wire_their_slots() {
    let mut store = NodeStore::new();
    let var = local_var(&mut store, "x", 0);
    let expr = int_expr(&mut store, 5);
    let stmt = store.create_let(Ann::EMPTY, var, expr);
    assert_eq!(store.get_let_var(stmt), var);
    assert_eq!(store.get_let_expr(stmt), expr);
    assert_eq!(store.get_var_name(store.get_let_var(stmt)), "x");
}
