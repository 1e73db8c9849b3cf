//! Parameter descriptors and arity bounds.
//!
//! Rust closures carry no runtime signature, so every [`Signature`] is
//! registered explicitly through [`SignatureBuilder`] when a target is built:
//!
//! ```
//! use compose_invocation::{Signature, Value};
//!
//! let sig = Signature::builder()
//! 	.required("a", Some("int"))
//! 	.optional("b", None, Value::Int(5))
//! 	.rest("args", None)
//! 	.finish();
//! assert_eq!(sig.len(), 3);
//! assert!(sig.is_variadic());
//! ```

use std::marker::PhantomData;

use tracing::debug;

use crate::config::VariadicPolicy;
use crate::error::{InvocationError, Result};
use crate::value::Value;

/// A single positional parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
	name: String,
	declared_type: Option<String>,
	default: Option<Value>,
	variadic: bool,
}

impl Parameter {
	/// A parameter every call must supply.
	pub fn required(name: impl Into<String>, declared_type: Option<&str>) -> Self {
		Self {
			name: name.into(),
			declared_type: declared_type.map(str::to_owned),
			default: None,
			variadic: false,
		}
	}

	/// A parameter that falls back to `default` when omitted.
	pub fn optional(name: impl Into<String>, declared_type: Option<&str>, default: impl Into<Value>) -> Self {
		Self {
			default: Some(default.into()),
			..Self::required(name, declared_type)
		}
	}

	/// A trailing parameter absorbing any number of extra arguments.
	pub fn variadic(name: impl Into<String>, declared_type: Option<&str>) -> Self {
		Self {
			variadic: true,
			..Self::required(name, declared_type)
		}
	}

	/// Parameter name, used for diagnostics only.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared type name, if any.
	pub fn declared_type(&self) -> Option<&str> {
		self.declared_type.as_deref()
	}

	/// Default value of an optional parameter.
	pub fn default(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	/// Returns true if this parameter has a default value.
	pub fn is_optional(&self) -> bool {
		self.default.is_some()
	}

	/// Returns true if this parameter absorbs trailing arguments.
	pub fn is_variadic(&self) -> bool {
		self.variadic
	}
}

/// Ordered parameter descriptors of a target.
///
/// A variadic parameter, if present, is always the last one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>"))]
pub struct Signature {
	params: Vec<Parameter>,
}

impl Signature {
	/// A signature taking no parameters.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates a signature from parameters in declaration order.
	///
	/// Fails with [`InvocationError::MisplacedVariadic`] when a variadic
	/// parameter is followed by any other parameter.
	pub fn new(params: Vec<Parameter>) -> Result<Self> {
		let last = params.len().saturating_sub(1);
		if let Some((position, param)) = params.iter().enumerate().find(|(i, p)| p.is_variadic() && *i != last) {
			return Err(InvocationError::MisplacedVariadic {
				parameter: param.name().to_string(),
				position,
			});
		}
		Ok(Self { params })
	}

	/// Starts an empty [`SignatureBuilder`].
	pub fn builder() -> SignatureBuilder {
		SignatureBuilder::default()
	}

	/// All parameters in declaration order.
	pub fn params(&self) -> &[Parameter] {
		&self.params
	}

	/// Parameter at ordinal `index`.
	pub fn param(&self, index: usize) -> Option<&Parameter> {
		self.params.get(index)
	}

	/// Number of declared parameters, the variadic one included.
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns true if the signature declares no parameters.
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	/// Returns true if any parameter is variadic.
	pub fn is_variadic(&self) -> bool {
		self.params.iter().any(Parameter::is_variadic)
	}

	/// Computes the argument count bounds under `policy`.
	pub fn arity(&self, policy: VariadicPolicy) -> Arity {
		let total = self.params.len();

		if !self.is_variadic() {
			return Arity {
				required: self.params.iter().filter(|p| !p.is_optional()).count(),
				maximum: Some(total),
			};
		}

		let mut required = 0;
		for param in &self.params {
			if param.is_variadic() {
				return Arity { required, maximum: None };
			}
			if param.is_optional() {
				break;
			}
			required += 1;
		}

		// The scan stopped at an optional parameter before reaching the
		// variadic one.
		let maximum = match policy {
			VariadicPolicy::Detect => None,
			VariadicPolicy::LegacyEarlyBreak => Some(total),
		};
		Arity { required, maximum }
	}

	/// Appends defaults for omitted trailing optional parameters.
	///
	/// Filling stops at the first position without a default and never
	/// reaches past a variadic parameter.
	pub(crate) fn fill_defaults(&self, args: &mut Vec<Value>) {
		for param in self.params.iter().skip(args.len()) {
			match param.default() {
				Some(default) if !param.is_variadic() => args.push(default.clone()),
				_ => break,
			}
		}
	}
}

impl TryFrom<Vec<Parameter>> for Signature {
	type Error = InvocationError;

	fn try_from(params: Vec<Parameter>) -> Result<Self> {
		Self::new(params)
	}
}

impl From<Signature> for Vec<Parameter> {
	fn from(signature: Signature) -> Self {
		signature.params
	}
}

/// Builder state that still accepts parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Open;

/// Builder state after a variadic parameter; only finishing remains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closed;

/// Builder for [`Signature`], appending parameters in declaration order.
///
/// [`rest`](SignatureBuilder::rest) moves the builder to [`Closed`], so no
/// parameter can follow the variadic one.
#[derive(Debug, Clone)]
pub struct SignatureBuilder<S = Open> {
	params: Vec<Parameter>,
	state: PhantomData<S>,
}

impl Default for SignatureBuilder {
	fn default() -> Self {
		Self {
			params: Vec::new(),
			state: PhantomData,
		}
	}
}

impl SignatureBuilder {
	/// Appends a required parameter.
	pub fn required(mut self, name: impl Into<String>, declared_type: Option<&str>) -> Self {
		self.params.push(Parameter::required(name, declared_type));
		self
	}

	/// Appends an optional parameter with its default.
	pub fn optional(mut self, name: impl Into<String>, declared_type: Option<&str>, default: impl Into<Value>) -> Self {
		self.params.push(Parameter::optional(name, declared_type, default));
		self
	}

	/// Appends the trailing variadic parameter.
	pub fn rest(mut self, name: impl Into<String>, declared_type: Option<&str>) -> SignatureBuilder<Closed> {
		self.params.push(Parameter::variadic(name, declared_type));
		SignatureBuilder {
			params: self.params,
			state: PhantomData,
		}
	}
}

impl<S> SignatureBuilder<S> {
	/// Completes the signature.
	pub fn finish(self) -> Signature {
		Signature { params: self.params }
	}
}

/// Accepted argument count range of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
	/// Minimum number of arguments.
	pub required: usize,
	/// Maximum number of arguments, `None` when unbounded.
	pub maximum: Option<usize>,
}

impl Arity {
	/// Returns true if there is no upper bound.
	pub fn is_unbounded(&self) -> bool {
		self.maximum.is_none()
	}

	/// Returns true if `count` arguments satisfy both bounds.
	pub fn accepts(&self, count: usize) -> bool {
		count >= self.required && self.maximum.is_none_or(|max| count <= max)
	}

	/// Verifies `actual` against the bounds, naming `callable` in the error.
	pub fn check(&self, callable: &str, actual: usize) -> Result<()> {
		if actual < self.required {
			debug!(callable, actual, required = self.required, "Too few arguments");
			return Err(InvocationError::TooFewArguments {
				callable: callable.to_string(),
				actual,
				required: self.required,
			});
		}

		if let Some(maximum) = self.maximum
			&& actual > maximum
		{
			debug!(callable, actual, maximum, "Too many arguments");
			return Err(InvocationError::TooManyArguments {
				callable: callable.to_string(),
				actual,
				maximum,
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests;
