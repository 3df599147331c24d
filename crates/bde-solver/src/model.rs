//! Model definition - the transition capability and solver configuration

use bde_core::Tolerance;

/// The transition function of a Boolean delay equation model.
///
/// `z[d][v]` is the state of modelled variable `v` at the present time
/// minus delay `d`; when the model has forcing inputs, `forced[d][k]`
/// carries the analogous forcing states. The returned vector is the present
/// state of each modelled variable and must hold one entry per variable.
///
/// Implementations must be pure: the solver may evaluate the transition at
/// any candidate time in any solve, and no state may be carried across
/// calls. Behaviour of stateful or non-deterministic transitions is
/// undefined.
///
/// Closures of the matching shape implement this trait directly:
///
/// ```
/// use bde_solver::Transition;
///
/// let negation = |z: &[Vec<bool>], _: Option<&[Vec<bool>]>| vec![!z[0][0]];
/// assert_eq!(vec![false], negation.evaluate(&[vec![true]], None));
/// ```
pub trait Transition {
    fn evaluate(&self, z: &[Vec<bool>], forced: Option<&[Vec<bool>]>) -> Vec<bool>;
}

impl<F> Transition for F
where
    F: Fn(&[Vec<bool>], Option<&[Vec<bool>]>) -> Vec<bool>,
{
    fn evaluate(&self, z: &[Vec<bool>], forced: Option<&[Vec<bool>]>) -> Vec<bool> {
        self(z, forced)
    }
}

/// Solver configuration
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Comparator used for every timestamp comparison in the solve
    pub tolerance: Tolerance,
    /// Safety bound: committed switches per variable per unit of simulated
    /// time. A model that trips it is chattering (or genuinely Zeno) and
    /// the solve aborts instead of running forever.
    pub max_switch_density: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: Tolerance::default(),
            max_switch_density: 1e4,
        }
    }
}

impl SolverConfig {
    /// Override the tolerance comparator.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the switch-density safety bound.
    pub fn with_max_switch_density(mut self, max_switch_density: f64) -> Self {
        self.max_switch_density = max_switch_density;
        self
    }
}
