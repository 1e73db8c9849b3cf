//! Arity-checked invocation of a [`Target`].

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{trace, trace_span};

use crate::config::InvocationConfig;
use crate::error::{InvocationError, Result};
use crate::signature::{Arity, Signature};
use crate::target::Target;
use crate::value::Value;

/// Signature and arity bounds resolved from a target.
#[derive(Debug)]
struct Resolved {
	signature: Arc<Signature>,
	arity: Arity,
}

/// A target bundled with optional preset arguments.
///
/// The signature is resolved from the target on first use and cached for
/// the lifetime of the invocation. Every call verifies the argument count
/// against it before the handler runs, so a rejected call has no side
/// effects.
#[derive(Debug)]
pub struct Invocation {
	target: Target,
	preset: Option<Vec<Value>>,
	config: InvocationConfig,
	/// Lazily resolved signature; `None` when the target has none.
	resolved: OnceCell<Option<Resolved>>,
}

impl Invocation {
	/// Wraps `target` with optional preset arguments.
	pub fn new(target: Target, preset: Option<Vec<Value>>) -> Self {
		Self::with_config(target, preset, InvocationConfig::default())
	}

	/// Named constructor, identical to [`Invocation::new`].
	pub fn from_target(target: Target, preset: Option<Vec<Value>>) -> Self {
		Self::new(target, preset)
	}

	/// Wraps `target` with presets and an explicit config.
	pub fn with_config(target: Target, preset: Option<Vec<Value>>, config: InvocationConfig) -> Self {
		Self {
			target,
			preset,
			config,
			resolved: OnceCell::new(),
		}
	}

	/// The wrapped target.
	pub fn target(&self) -> &Target {
		&self.target
	}

	/// Arguments bound at construction, if any.
	pub fn preset_arguments(&self) -> Option<&[Value]> {
		self.preset.as_deref()
	}

	/// Config fixed at construction.
	pub fn config(&self) -> InvocationConfig {
		self.config
	}

	/// Returns the target's signature, resolving it on first call.
	pub fn signature(&self) -> Result<&Signature> {
		self.resolve().map(|r| r.signature.as_ref())
	}

	/// Accepted argument count bounds under this invocation's config.
	pub fn arity(&self) -> Result<Arity> {
		self.resolve().map(|r| r.arity)
	}

	/// Declared type of the parameter at `index`.
	///
	/// Returns `None` when the index is out of range, the parameter is
	/// untyped, or the target has no signature.
	pub fn argument_type_at(&self, index: usize) -> Option<&str> {
		self.resolve().ok()?.signature.param(index)?.declared_type()
	}

	/// Verifies that `count` arguments satisfy the signature.
	pub fn check_arity(&self, count: usize) -> Result<()> {
		self.resolve()?.arity.check(self.target.name(), count)
	}

	/// Calls the target with `args`, or with the preset arguments when
	/// `args` is empty.
	///
	/// Explicit arguments are never merged with the presets.
	pub fn invoke(&self, args: Vec<Value>) -> Result<Value> {
		let args = if args.is_empty() {
			self.preset.clone().unwrap_or_default()
		} else {
			args
		};
		self.call(args)
	}

	/// Calls the target with exactly `args`, even when empty.
	pub fn invoke_exact(&self, args: Vec<Value>) -> Result<Value> {
		self.call(args)
	}

	fn call(&self, mut args: Vec<Value>) -> Result<Value> {
		let resolved = self.resolve()?;
		resolved.arity.check(self.target.name(), args.len())?;

		let span = trace_span!("invoke", callable = self.target.name(), argc = args.len());
		let _guard = span.enter();

		resolved.signature.fill_defaults(&mut args);
		let result = self.target.call(&args).map_err(InvocationError::Target);
		trace!(ok = result.is_ok(), "Target returned");
		result
	}

	fn resolve(&self) -> Result<&Resolved> {
		self.resolved
			.get_or_init(|| {
				let signature = self.target.introspect().ok()?;
				let arity = signature.arity(self.config.variadic_policy);
				trace!(
					callable = self.target.name(),
					params = signature.len(),
					required = arity.required,
					maximum = ?arity.maximum,
					"Resolved signature"
				);
				Some(Resolved { signature, arity })
			})
			.as_ref()
			.ok_or_else(|| InvocationError::SignatureUnavailable {
				callable: self.target.name().to_string(),
			})
	}
}
