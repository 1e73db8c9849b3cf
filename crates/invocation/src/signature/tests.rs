use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn sig(required: usize, optional: usize, rest: bool) -> Signature {
	let mut builder = Signature::builder();
	for i in 0..required {
		builder = builder.required(format!("r{i}"), None);
	}
	for i in 0..optional {
		builder = builder.optional(format!("o{i}"), None, Value::Int(i as i64));
	}
	if rest {
		return builder.rest("args", None).finish();
	}
	builder.finish()
}

#[test]
fn empty_signature_accepts_nothing() {
	let arity = Signature::empty().arity(VariadicPolicy::Detect);
	assert_eq!(arity, Arity { required: 0, maximum: Some(0) });
	assert!(arity.accepts(0));
	assert!(!arity.accepts(1));
}

#[rstest]
#[case(sig(1, 1, false), Arity { required: 1, maximum: Some(2) })]
#[case(sig(3, 0, false), Arity { required: 3, maximum: Some(3) })]
#[case(sig(0, 2, false), Arity { required: 0, maximum: Some(2) })]
#[case(sig(0, 0, true), Arity { required: 0, maximum: None })]
#[case(sig(2, 0, true), Arity { required: 2, maximum: None })]
fn arity_without_optional_before_rest(#[case] signature: Signature, #[case] expected: Arity) {
	assert_eq!(signature.arity(VariadicPolicy::Detect), expected);
	assert_eq!(signature.arity(VariadicPolicy::LegacyEarlyBreak), expected);
}

#[test]
fn legacy_policy_bounds_rest_after_optional() {
	let sig = sig(1, 1, true);
	assert_eq!(sig.arity(VariadicPolicy::LegacyEarlyBreak), Arity { required: 1, maximum: Some(3) });
}

#[test]
fn detect_policy_unbounds_rest_after_optional() {
	let sig = sig(1, 1, true);
	assert_eq!(sig.arity(VariadicPolicy::Detect), Arity { required: 1, maximum: None });
}

#[test]
fn required_after_optional_counts_in_plain_signature() {
	let sig = Signature::builder()
		.required("a", None)
		.optional("b", None, Value::Nothing)
		.required("c", None)
		.finish();
	assert_eq!(sig.arity(VariadicPolicy::Detect), Arity { required: 2, maximum: Some(3) });
}

#[test]
fn check_reports_counts() {
	let arity = Arity { required: 2, maximum: Some(3) };
	match arity.check("f", 1) {
		Err(InvocationError::TooFewArguments { callable, actual, required }) => {
			assert_eq!((callable.as_str(), actual, required), ("f", 1, 2));
		}
		other => panic!("expected TooFewArguments, got {other:?}"),
	}
	match arity.check("f", 4) {
		Err(InvocationError::TooManyArguments { callable, actual, maximum }) => {
			assert_eq!((callable.as_str(), actual, maximum), ("f", 4, 3));
		}
		other => panic!("expected TooManyArguments, got {other:?}"),
	}
	assert!(arity.check("f", 2).is_ok());
	assert!(arity.check("f", 3).is_ok());
}

#[test]
fn error_messages_name_callable() {
	let err = Arity { required: 1, maximum: Some(1) }.check("resolve", 0).unwrap_err();
	assert_eq!(err.to_string(), "resolve: invalid argument count (0 given, at least 1 required)");
	let err = Arity { required: 0, maximum: Some(0) }.check("resolve", 2).unwrap_err();
	assert_eq!(err.to_string(), "resolve: invalid argument count (2 given, at most 0 accepted)");
}

#[test]
fn fill_defaults_appends_trailing_optionals() {
	let sig = Signature::builder()
		.required("a", None)
		.optional("b", None, Value::Int(5))
		.optional("c", None, "x")
		.finish();
	let mut args = vec![Value::Int(1)];
	sig.fill_defaults(&mut args);
	assert_eq!(args, vec![Value::Int(1), Value::Int(5), Value::String("x".into())]);

	let mut args = vec![Value::Int(1), Value::Int(2)];
	sig.fill_defaults(&mut args);
	assert_eq!(args, vec![Value::Int(1), Value::Int(2), Value::String("x".into())]);
}

#[test]
fn fill_defaults_stops_at_rest() {
	let sig = Signature::builder()
		.optional("a", None, Value::Bool(true))
		.rest("args", None)
		.finish();
	let mut args = Vec::new();
	sig.fill_defaults(&mut args);
	assert_eq!(args, vec![Value::Bool(true)]);
}

#[test]
fn parameter_accessors() {
	let p = Parameter::optional("b", Some("string"), "hello");
	assert_eq!(p.name(), "b");
	assert_eq!(p.declared_type(), Some("string"));
	assert_eq!(p.default(), Some(&Value::String("hello".into())));
	assert!(p.is_optional());
	assert!(!p.is_variadic());

	let rest = Parameter::variadic("args", None);
	assert!(rest.is_variadic());
	assert!(!rest.is_optional());
	assert_eq!(rest.declared_type(), None);
}

#[test]
fn rest_closes_builder() {
	let sig = Signature::builder().required("a", None).rest("args", Some("int")).finish();
	assert_eq!(sig.len(), 2);
	assert!(sig.params().last().is_some_and(Parameter::is_variadic));
	assert_eq!(sig.arity(VariadicPolicy::Detect), Arity { required: 1, maximum: None });
}

#[test]
fn new_accepts_trailing_variadic() {
	let sig = Signature::new(vec![
		Parameter::required("a", None),
		Parameter::optional("b", None, Value::Nothing),
		Parameter::variadic("args", None),
	])
	.unwrap();
	assert_eq!(sig, Signature::builder().required("a", None).optional("b", None, Value::Nothing).rest("args", None).finish());
	assert_eq!(Signature::new(Vec::new()).unwrap(), Signature::empty());
}

#[rstest]
#[case(vec![Parameter::variadic("args", None), Parameter::required("b", None)], 0)]
#[case(vec![Parameter::required("a", None), Parameter::variadic("args", None), Parameter::variadic("more", None)], 1)]
#[case(vec![Parameter::variadic("args", None), Parameter::optional("b", None, Value::Int(1))], 0)]
fn new_rejects_parameters_after_variadic(#[case] params: Vec<Parameter>, #[case] expected: usize) {
	match Signature::new(params) {
		Err(InvocationError::MisplacedVariadic { parameter, position }) => {
			assert_eq!(position, expected);
			assert!(parameter == "args", "got {parameter}");
		}
		other => panic!("expected MisplacedVariadic, got {other:?}"),
	}
}

#[test]
fn misplaced_variadic_message() {
	let err = Signature::new(vec![Parameter::variadic("args", None), Parameter::required("b", None)]).unwrap_err();
	assert_eq!(err.to_string(), "variadic parameter 'args' at position 0 must be last");
}

proptest! {
	/// Plain signatures accept exactly `[R, R + O]`.
	#[test]
	fn prop_plain_bounds(required in 0usize..6, optional in 0usize..6, count in 0usize..16) {
		let arity = sig(required, optional, false).arity(VariadicPolicy::Detect);
		prop_assert_eq!(arity.accepts(count), count >= required && count <= required + optional);
	}

	/// A rest parameter directly after the required prefix removes the upper bound.
	#[test]
	fn prop_rest_unbounded(required in 0usize..6, count in 0usize..64) {
		for policy in [VariadicPolicy::Detect, VariadicPolicy::LegacyEarlyBreak] {
			let arity = sig(required, 0, true).arity(policy);
			prop_assert_eq!(arity.accepts(count), count >= required);
		}
	}

	/// Under the legacy scan the bound is the declared count once an optional precedes the rest.
	#[test]
	fn prop_legacy_rest_after_optional(required in 0usize..6, optional in 1usize..6, count in 0usize..32) {
		let sig = sig(required, optional, true);
		let arity = sig.arity(VariadicPolicy::LegacyEarlyBreak);
		prop_assert_eq!(arity.accepts(count), count >= required && count <= sig.len());
	}
}
