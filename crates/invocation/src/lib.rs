//! Arity-checked invocation of dynamically typed callables.
//!
//! A [`Target`] pairs a handler closure with an explicitly registered
//! [`Signature`]. An [`Invocation`] wraps a target with optional preset
//! arguments and verifies, on every call, that the argument count fits the
//! signature's required, optional and variadic parameters before the
//! handler runs.
//!
//! ```
//! use compose_invocation::{Invocation, InvocationError, Target, Value};
//!
//! let add = Target::build("add")
//! 	.required("a", Some("int"))
//! 	.optional("b", Some("int"), Value::Int(5))
//! 	.handler(|args| {
//! 		let sum: i64 = args.iter().filter_map(Value::as_int).sum();
//! 		Ok(Value::Int(sum))
//! 	});
//!
//! let inv = Invocation::new(add, None);
//! assert_eq!(inv.invoke(vec![Value::Int(1)]).unwrap(), Value::Int(6));
//! assert_eq!(inv.argument_type_at(1), Some("int"));
//! assert!(matches!(
//! 	inv.invoke(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
//! 	Err(InvocationError::TooManyArguments { .. })
//! ));
//! ```

/// Variadic policy and per-invocation settings.
pub mod config;
/// Invocation error taxonomy.
pub mod error;
/// The [`Invocation`] wrapper.
pub mod invocation;
/// Parameter descriptors and arity bounds.
pub mod signature;
/// Invocable targets.
pub mod target;
/// Dynamic argument values.
pub mod value;

pub use config::{InvocationConfig, VariadicPolicy};
pub use error::{InvocationError, Result, TargetError};
pub use invocation::Invocation;
pub use signature::{Arity, Closed, Open, Parameter, Signature, SignatureBuilder};
pub use target::{Handler, Target, TargetBuilder};
pub use value::Value;
