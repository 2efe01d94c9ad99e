//! Tolerance and guard defaults (internal).
//!
//! Policy
//! - These feed `SolveCfg::default()`. Callers that need other values build
//!   their own `SolveCfg`; nothing else in the crate reads these directly.

/// θ₀ of the rotation guard. Any irrational angle far from multiples of π/4 works.
pub(crate) const GUARD_ANGLE: f64 = std::f64::consts::E;
/// Relative length under which two points coincide or an offset vanishes.
pub(crate) const COINCIDE_EPS: f64 = 1e-12;
/// Relative magnitude under which a slope or intersection denominator is treated as zero.
pub(crate) const SINGULAR_EPS: f64 = 1e-12;
