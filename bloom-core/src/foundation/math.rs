/// Wrap into `[0, 1)`, treating the unit interval as circular.
pub(crate) fn wrap_unit(x: f64) -> f64 {
    x.rem_euclid(1.0)
}

/// Hyperbolic-tangent soft step mapping all reals into `(0, 1)`.
pub(crate) fn soft_step(x: f64) -> f64 {
    (x.tanh() + 1.0) / 2.0
}

/// Sinusoid remapped into `[0, 1]`.
pub(crate) fn crest(x: f64) -> f64 {
    (x.sin() + 1.0) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
