use pretty_assertions::assert_eq;
use skybridge_nested_set::NestedSet;

use super::*;

#[cfg(not(feature = "serde"))]
use serde_json as _;

fn strings(items: &[&str]) -> NestedSet<String> {
	NestedSet::wrap(items.iter().map(|s| s.to_string()))
}

#[test]
fn depset_tag_follows_payload() {
	let depset = Depset::of(strings(&["a"]));
	assert_eq!(depset.element_type(), Some(ElementType::String));
	assert_eq!(depset.type_name(), "depset of string");

	let ints = Depset::of(NestedSet::wrap([1i64, 2]));
	assert_eq!(ints.element_type(), Some(ElementType::Int));
}

#[test]
fn get_set_returns_shared_set() {
	let set = strings(&["Foundation", "UIKit"]);
	let depset = Depset::of(set.clone());
	let narrowed = depset.get_set::<String>().expect("string depset should narrow to String");
	assert!(narrowed.ptr_eq(&set));
}

#[test]
fn get_set_rejects_other_element_type() {
	let depset = Depset::of(NestedSet::wrap([1i64]));
	let err = depset.get_set::<String>().expect_err("int depset should not narrow to String");
	assert_eq!(err.expected, ElementType::String);
	assert_eq!(err.found, ElementType::Int);
	assert_eq!(err.to_string(), "got a depset of 'int', expected a depset of 'string'");
}

#[test]
fn empty_depsets_narrow_to_any_type() {
	let untyped = Depset::empty();
	assert!(untyped.is_empty());
	assert_eq!(untyped.element_type(), None);
	assert!(untyped.get_set::<Artifact>().expect("untyped empty narrows").is_empty());

	let typed = Depset::of(NestedSet::<i64>::empty());
	assert!(typed.get_set::<String>().expect("typed empty narrows").is_empty());
}

#[test]
fn depset_display_uses_stable_order() {
	let depset = Depset::of(strings(&["b", "a", "b"]));
	assert_eq!(depset.to_string(), r#"depset(["b", "a"])"#);
	assert_eq!(Depset::empty().to_string(), "depset([])");
	assert_eq!(Depset::of(NestedSet::wrap([true, false])).to_string(), "depset([True, False])");
}

#[test]
fn value_type_names_for_diagnostics() {
	assert_eq!(Value::test_string("x").type_name(), "string");
	assert_eq!(Value::test_nothing().type_name(), "NoneType");
	assert_eq!(Value::test_depset(Depset::of(NestedSet::wrap([3i64]))).type_name(), "depset of int");
	assert_eq!(Value::test_depset(Depset::empty()).type_name(), "depset");
}

#[test]
fn typed_accessors_report_actual_type() {
	let value = Value::test_int(7);
	assert_eq!(value.as_int(), Ok(7));
	let err = value.as_depset().expect_err("int is not a depset");
	assert_eq!(err.got(), ValueType::Int);
	assert_eq!(err.to_string(), "expected depset, got int");
}

#[test]
fn scalar_and_list_accessors() {
	let span = Span::test_data();
	assert_eq!(Value::bool(true, span).as_bool(), Ok(true));
	assert_eq!(Value::test_string("UIKit").as_str(), Ok("UIKit"));

	let list = Value::list(vec![Value::test_int(1), Value::test_string("a")], span);
	assert_eq!(list.as_list().map(|vals| vals.len()), Ok(2));

	let err = Value::test_string("x").as_bool().expect_err("string is not a bool");
	assert_eq!(err.to_string(), "expected bool, got string");
	let err = list.as_str().expect_err("list is not a string");
	assert_eq!(err.got(), ValueType::List);
	let err = Value::test_nothing().as_list().expect_err("None is not a list");
	assert_eq!(err.to_string(), "expected list, got NoneType");
}

#[test]
fn value_span_is_preserved() {
	let span = Span::new(3, 9);
	let value = Value::depset(Depset::empty(), span);
	assert_eq!(value.span(), span);
}

#[test]
fn list_display() {
	let value = Value::list(vec![Value::test_int(1), Value::test_string("a"), Value::bool(true, Span::unknown())], Span::unknown());
	assert_eq!(value.to_string(), r#"[1, "a", True]"#);
}

#[test]
fn artifact_path_parts() {
	let header = Artifact::source("lib/foo/Foo.h");
	assert_eq!(header.basename(), "Foo.h");
	assert_eq!(header.extension(), "h");
	assert_eq!(header.to_string(), "<source file lib/foo/Foo.h>");

	let archive = Artifact::derived("bazel-out/libfoo.a");
	assert!(!archive.is_source());
	assert_eq!(archive.to_string(), "<generated file bazel-out/libfoo.a>");
	assert_eq!(Artifact::source(".bashrc").extension(), "");
}

#[cfg(feature = "serde")]
#[test]
fn element_type_serde_names() {
	let json = serde_json::to_string(&ElementType::File).expect("serialize");
	assert_eq!(json, r#""file""#);
	let parsed: ElementType = serde_json::from_str(r#""string""#).expect("deserialize");
	assert_eq!(parsed, ElementType::String);
}
