use log::warn;

use crate::gaussian::GaussianLikelihood;
use crate::model::Model;
use crate::parameter::ParameterSet;

/// Generate a log-likelihood closure for samplers which take
/// `Fn(&ParameterSet) -> f64`.
///
/// Failed evaluations (unset parameters, non-positive noise, ...) become
/// negative infinity so the sampler rejects the proposal.
///
/// # Example
/// ```rust
/// #[macro_use] extern crate rlikelihood;
/// use rlikelihood::{GaussianLikelihood, Likelihood};
/// use rlikelihood::utils::log_likelihood_fn;
///
/// # fn main() {
/// let likelihood = GaussianLikelihood::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.1, 0.9, 2.1],
///     model!(|x, a| x * a),
///     None,
/// ).unwrap();
///
/// let log_likelihood = log_likelihood_fn(&likelihood);
///
/// let mut params = likelihood.parameters().clone();
/// params.set("a", 1.0).unwrap();
/// params.set("sigma", -1.0).unwrap();
/// assert_eq!(log_likelihood(&params), std::f64::NEG_INFINITY);
///
/// params.set("sigma", 0.1).unwrap();
/// assert!(log_likelihood(&params).is_finite());
/// # }
/// ```
pub fn log_likelihood_fn<'a, M: Model>(
    likelihood: &'a GaussianLikelihood<M>,
) -> impl Fn(&ParameterSet) -> f64 + Clone + Sync + 'a {
    move |parameters| match likelihood.log_likelihood_at(parameters) {
        Ok(ll) => ll,
        Err(err) => {
            warn!("log_likelihood_fn: rejecting parameters {:?}: {}", parameters, err);
            std::f64::NEG_INFINITY
        }
    }
}
