//! XML codec behavior: round-tripping, whitespace insensitivity and the
//! rejection of malformed documents.

use jackc_ast::{Ann, Ast, AstError, AstKind, NodeStore};

use crate::utils::{main_class, sum_expr};

fn reparse(document: &str) -> (NodeStore, Ast) {
    let mut store = NodeStore::new();
    let root = store.parse_xml_str(document).expect("document must parse");
    (store, root)
}

#[test]
fn compact_output_round_trips() {
    let mut store = NodeStore::new();
    let class = main_class(&mut store);
    let compact = store.xml_string(class, 0).unwrap();

    let (copy, root) = reparse(&compact);
    assert_eq!(copy.xml_string(root, 0).unwrap(), compact);
}

#[test]
fn indented_output_parses_back_to_the_same_tree() {
    let mut store = NodeStore::new();
    let class = main_class(&mut store);
    let compact = store.xml_string(class, 0).unwrap();
    let indented = store.xml_string(class, 2).unwrap();
    assert_ne!(compact, indented);

    let (copy, root) = reparse(&indented);
    assert_eq!(copy.xml_string(root, 0).unwrap(), compact);
}

#[test]
fn reparsed_trees_answer_the_accessor_api() {
    let mut store = NodeStore::new();
    let class = main_class(&mut store);
    let document = store.xml_string(class, 2).unwrap();

    let (copy, root) = reparse(&document);
    assert_eq!(copy.kind_of(root), AstKind::Class);
    assert_eq!(copy.get_class_class_name(root), "Main");
    assert_eq!(copy.get_class_var_decs_of(root), Ast::EMPTY);
    let subrs = copy.get_class_subr_decs(root);
    let function = copy.get_subr_subr(copy.get_subr_decs(subrs, 0));
    let body = copy.get_function_subr_body(function);
    let statements = copy.get_subr_body_body(body);
    assert_eq!(copy.size_of_statements(statements), 2);
}

#[test]
fn annotations_survive_the_round_trip() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(
        vec!["from the parser".to_string()],
        vec!["suspicious".to_string()],
        vec![],
    );
    let constant = store.create_int(ann, 7);
    let term = store.create_term(Ann::EMPTY, constant);
    let expr = store.create_expr(Ann::EMPTY, &[term]);
    let document = store.xml_string(expr, 2).unwrap();

    let (copy, root) = reparse(&document);
    let constant = copy.get_term_term(copy.get_expr(root, 0));
    let ann = copy.get_ann(constant);
    assert_eq!(copy.get_ann_comments(ann, 0), "from the parser");
    assert_eq!(copy.get_ann_warnings(ann, 0), "suspicious");
    assert_eq!(copy.size_of_ann_errors(ann), 0);
}

#[test]
fn annotated_empty_nodes_survive_the_round_trip() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec!["placeholder".to_string()], vec![], vec![]);
    let empty = store.create_empty(ann);
    let condition = sum_expr(&mut store, 1, 2);
    let branch = store.create_empty(Ann::EMPTY);
    let if_else = store.create_if_else(Ann::EMPTY, condition, empty, branch);
    let document = store.xml_string(if_else, 0).unwrap();

    let (copy, root) = reparse(&document);
    let then_branch = copy.get_if_else_if_true(root);
    assert_eq!(copy.kind_of(then_branch), AstKind::Empty);
    let ann = copy.get_ann(then_branch);
    assert_eq!(copy.get_ann_comments(ann, 0), "placeholder");
    assert_eq!(copy.get_if_else_if_false(root), Ast::EMPTY);
}

#[test]
fn variable_leaves_round_trip_with_their_fields() {
    let mut store = NodeStore::new();
    let dec = store.create_var_dec(Ann::EMPTY, "count", "argument", 2, "int");
    let decs = store.create_var_decs(Ann::EMPTY, &[dec]);
    let document = store.xml_string(decs, 0).unwrap();
    assert!(document.contains("ast_var_dec"), "{document}");

    let (copy, root) = reparse(&document);
    let dec = copy.get_var_decs(root, 0);
    assert_eq!(copy.get_var_dec_name(dec), "count");
    assert_eq!(copy.get_var_dec_segment(dec), "argument");
    assert_eq!(copy.get_var_dec_offset(dec), 2);
    assert_eq!(copy.get_var_dec_type(dec), "int");
}

#[test]
fn whitespace_only_annotation_text_survives_the_round_trip() {
    let mut store = NodeStore::new();
    let ann = store.create_ann(vec![" ".to_string()], vec![], vec![]);
    let constant = store.create_int(ann, 7);
    let term = store.create_term(Ann::EMPTY, constant);
    let expr = store.create_expr(Ann::EMPTY, &[term]);
    // indented output surrounds the annotation entry with layout whitespace
    let document = store.xml_string(expr, 2).unwrap();

    let (copy, root) = reparse(&document);
    let ann = copy.get_ann(copy.get_term_term(copy.get_expr(root, 0)));
    assert_eq!(copy.size_of_ann_comments(ann), 1);
    assert_eq!(copy.get_ann_comments(ann, 0), " ");
}

#[test]
fn attribute_values_are_escaped() {
    let mut store = NodeStore::new();
    let quoted = store.create_string(Ann::EMPTY, "he said \"hi\" <&>");
    let term = store.create_term(Ann::EMPTY, quoted);
    let expr = store.create_expr(Ann::EMPTY, &[term]);
    let document = store.xml_string(expr, 0).unwrap();

    let (copy, root) = reparse(&document);
    let quoted = copy.get_term_term(copy.get_expr(root, 0));
    assert_eq!(copy.get_string_constant(quoted), "he said \"hi\" <&>");
}

#[test]
fn unknown_tags_are_reported_with_their_position() {
    let mut store = NodeStore::new();
    let err = store
        .parse_xml_str("<ast_klass name=\"Main\"/>")
        .unwrap_err();
    match err {
        AstError::UnknownTag { tag, line, .. } => {
            assert_eq!(tag, "ast_klass");
            assert_eq!(line, 1);
        }
        other => panic!("expected an unknown tag error, got {other}"),
    }
}

#[test]
fn wrong_child_arity_is_rejected() {
    let mut store = NodeStore::new();
    let err = store
        .parse_xml_str("<ast_return><ast_empty/></ast_return>")
        .unwrap_err();
    assert!(err.to_string().contains("expects 0 child elements"));
}

#[test]
fn out_of_contract_children_are_rejected() {
    let document = "<ast_let><ast_int value=\"3\"/>\
         <ast_expr><ast_term><ast_int value=\"1\"/></ast_term></ast_expr></ast_let>";
    let mut store = NodeStore::new();
    let err = store.parse_xml_str(document).unwrap_err();
    assert!(err.to_string().contains("let var must be compatible with ast_var"));
}

#[test]
fn unknown_operator_attributes_are_rejected() {
    let mut store = NodeStore::new();
    let err = store.parse_xml_str("<ast_infix_op op=\"%\"/>").unwrap_err();
    assert!(err.to_string().contains("not an infix operator"));
}

#[test]
fn missing_attributes_are_rejected() {
    let mut store = NodeStore::new();
    let err = store.parse_xml_str("<ast_class><ast_empty/><ast_empty/></ast_class>").unwrap_err();
    assert!(err.to_string().contains("missing its `name` attribute"));
}

#[test]
fn out_of_range_int_values_are_rejected() {
    let mut store = NodeStore::new();
    let err = store.parse_xml_str("<ast_int value=\"70000\"/>").unwrap_err();
    assert!(err.to_string().contains("outside -32768..=32767"));
}

#[test]
fn stray_text_is_rejected() {
    let mut store = NodeStore::new();
    let err = store.parse_xml_str("<ast_return>noise</ast_return>").unwrap_err();
    assert!(err.to_string().contains("stray text"));
}

#[test]
fn an_annotation_cannot_be_the_root() {
    let mut store = NodeStore::new();
    let err = store
        .parse_xml_str("<ast_annotation><comment>x</comment></ast_annotation>")
        .unwrap_err();
    assert!(err.to_string().contains("only valid as a leading child"));
}

#[test]
fn xml_syntax_errors_surface_as_errors() {
    let mut store = NodeStore::new();
    let err = store.parse_xml_str("<ast_return>").unwrap_err();
    assert!(matches!(err, AstError::Syntax(_)));
}

#[test]
fn expr_documents_must_alternate() {
    let document = "<ast_expr>\
         <ast_term><ast_int value=\"1\"/></ast_term>\
         <ast_term><ast_int value=\"2\"/></ast_term></ast_expr>";
    let mut store = NodeStore::new();
    let err = store.parse_xml_str(document).unwrap_err();
    assert!(err.to_string().contains("alternate terms and operators"));
}
