//! The opaque invocable wrapped by an [`Invocation`](crate::Invocation).

use std::fmt;
use std::sync::Arc;

use crate::error::{InvocationError, Result, TargetError};
use crate::signature::{Closed, Open, Signature, SignatureBuilder};
use crate::value::Value;

/// Handler closure behind a target.
pub type Handler = Arc<dyn Fn(&[Value]) -> std::result::Result<Value, TargetError> + Send + Sync>;

/// A named callable with an optionally registered signature.
///
/// Free functions, bound methods and closures all become a `Target` the same
/// way: the handler receives arguments positionally. Cloning shares the
/// handler.
#[derive(Clone)]
pub struct Target {
	name: Arc<str>,
	signature: Option<Arc<Signature>>,
	handler: Handler,
}

impl Target {
	/// Starts building a target with a registered signature.
	pub fn build(name: impl Into<String>) -> TargetBuilder {
		TargetBuilder {
			name: name.into(),
			signature: Signature::builder(),
		}
	}

	/// Creates a target from a handler and a known signature.
	pub fn new<F>(name: impl Into<String>, signature: Signature, handler: F) -> Self
	where
		F: Fn(&[Value]) -> std::result::Result<Value, TargetError> + Send + Sync + 'static,
	{
		Self {
			name: Arc::from(name.into()),
			signature: Some(Arc::new(signature)),
			handler: Arc::new(handler),
		}
	}

	/// Creates a target whose signature cannot be retrieved.
	///
	/// Invoking it fails with [`InvocationError::SignatureUnavailable`]
	/// before the handler runs.
	pub fn opaque<F>(name: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&[Value]) -> std::result::Result<Value, TargetError> + Send + Sync + 'static,
	{
		Self {
			name: Arc::from(name.into()),
			signature: None,
			handler: Arc::new(handler),
		}
	}

	/// Name used in diagnostics and errors.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if a signature was registered for this target.
	pub fn has_signature(&self) -> bool {
		self.signature.is_some()
	}

	/// Retrieves the registered signature.
	pub fn introspect(&self) -> Result<Arc<Signature>> {
		self.signature
			.clone()
			.ok_or_else(|| InvocationError::SignatureUnavailable {
				callable: self.name.to_string(),
			})
	}

	/// Calls the handler directly, bypassing arity verification.
	pub fn call(&self, args: &[Value]) -> std::result::Result<Value, TargetError> {
		(self.handler)(args)
	}
}

impl fmt::Debug for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Target")
			.field("name", &self.name)
			.field("signature", &self.signature)
			.finish_non_exhaustive()
	}
}

/// Builder returned by [`Target::build`].
///
/// Like [`SignatureBuilder`], it stops accepting parameters once
/// [`rest`](TargetBuilder::rest) has been called.
#[derive(Debug, Clone)]
pub struct TargetBuilder<S = Open> {
	name: String,
	signature: SignatureBuilder<S>,
}

impl TargetBuilder {
	/// Appends a required parameter.
	pub fn required(mut self, name: impl Into<String>, declared_type: Option<&str>) -> Self {
		self.signature = self.signature.required(name, declared_type);
		self
	}

	/// Appends an optional parameter with its default.
	pub fn optional(mut self, name: impl Into<String>, declared_type: Option<&str>, default: impl Into<Value>) -> Self {
		self.signature = self.signature.optional(name, declared_type, default);
		self
	}

	/// Appends the trailing variadic parameter.
	///
	/// No parameter can be declared after it:
	///
	/// ```compile_fail
	/// use compose_invocation::Target;
	///
	/// let _ = Target::build("f").rest("args", None).required("b", None);
	/// ```
	pub fn rest(self, name: impl Into<String>, declared_type: Option<&str>) -> TargetBuilder<Closed> {
		TargetBuilder {
			name: self.name,
			signature: self.signature.rest(name, declared_type),
		}
	}
}

impl<S> TargetBuilder<S> {
	/// Attaches the handler, completing the target.
	pub fn handler<F>(self, handler: F) -> Target
	where
		F: Fn(&[Value]) -> std::result::Result<Value, TargetError> + Send + Sync + 'static,
	{
		Target::new(self.name, self.signature.finish(), handler)
	}
}
