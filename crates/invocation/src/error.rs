//! Error types for invocation.

use thiserror::Error;

/// Error produced by a target's handler.
///
/// Handlers report failures through this boxed error; the invocation layer
/// hands it back to the caller as [`InvocationError::Target`] untouched.
pub type TargetError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when verifying or invoking a target.
#[derive(Debug, Error)]
pub enum InvocationError {
	/// The effective argument list is shorter than the required parameters.
	#[error("{callable}: invalid argument count ({actual} given, at least {required} required)")]
	TooFewArguments {
		/// Name of the target.
		callable: String,
		/// Number of arguments supplied.
		actual: usize,
		/// Number of required parameters.
		required: usize,
	},

	/// The effective argument list is longer than the signature accepts.
	#[error("{callable}: invalid argument count ({actual} given, at most {maximum} accepted)")]
	TooManyArguments {
		/// Name of the target.
		callable: String,
		/// Number of arguments supplied.
		actual: usize,
		/// Maximum number of parameters.
		maximum: usize,
	},

	/// The target carries no retrievable signature.
	#[error("{callable}: signature unavailable")]
	SignatureUnavailable {
		/// Name of the target.
		callable: String,
	},

	/// A variadic parameter is followed by another parameter.
	#[error("variadic parameter '{parameter}' at position {position} must be last")]
	MisplacedVariadic {
		/// Name of the variadic parameter.
		parameter: String,
		/// Its index in the parameter list.
		position: usize,
	},

	/// The target's handler failed.
	#[error(transparent)]
	Target(TargetError),
}

impl InvocationError {
	/// Returns true for the arity variants.
	pub fn is_arity(&self) -> bool {
		matches!(self, Self::TooFewArguments { .. } | Self::TooManyArguments { .. })
	}

	/// Returns the handler's own error, if this is a `Target` failure.
	pub fn into_target_error(self) -> Option<TargetError> {
		match self {
			Self::Target(e) => Some(e),
			_ => None,
		}
	}
}

/// Result type for invocation operations.
pub type Result<T> = std::result::Result<T, InvocationError>;
