//! Per-invocation configuration.

/// How a variadic parameter is found when computing arity bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VariadicPolicy {
	/// Any variadic parameter lifts the upper bound, wherever it sits.
	#[default]
	Detect,
	/// Scan parameters in order and stop at the first optional one.
	///
	/// A variadic parameter declared after an optional parameter is never
	/// reached, so the upper bound stays at the declared parameter count.
	LegacyEarlyBreak,
}

/// Settings fixed at [`Invocation`](crate::Invocation) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InvocationConfig {
	/// Variadic detection used by arity verification.
	pub variadic_policy: VariadicPolicy,
}

impl InvocationConfig {
	/// Config reproducing the early-break variadic scan.
	pub const fn legacy() -> Self {
		Self {
			variadic_policy: VariadicPolicy::LegacyEarlyBreak,
		}
	}

	/// Returns this config with `variadic_policy` replaced.
	pub const fn with_variadic_policy(mut self, variadic_policy: VariadicPolicy) -> Self {
		self.variadic_policy = variadic_policy;
		self
	}
}
