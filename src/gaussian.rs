//! Gaussian likelihood for a model fitted to `(x, y)` data

use std::f64::consts::PI;
use std::fmt;

use log::{debug, trace};
use nalgebra::DVector;
use rayon::prelude::*;

use crate::error::{LikelihoodError, Result};
use crate::likelihood::Likelihood;
use crate::model::Model;
use crate::parameter::ParameterSet;
use crate::sigma::{Sigma, SIGMA};

/// A Gaussian likelihood for known or unknown noise
///
/// The model's free parameters are taken from `Model::parameter_names`. When
/// the noise is `Sigma::Inferred`, an extra `sigma` parameter is added and
/// must be assigned (e.g. by a sampler with a prior on `sigma`) before
/// evaluation.
///
/// # Example
/// ```rust
/// #[macro_use] extern crate rlikelihood;
/// use rlikelihood::{GaussianLikelihood, Likelihood};
/// use approx::assert_abs_diff_eq;
///
/// # fn main() {
/// let mut likelihood = GaussianLikelihood::new(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 1.0, 2.0],
///     model!(|x, a| x * a),
///     1.0,
/// ).unwrap();
///
/// likelihood.parameters_mut().set("a", 1.0).unwrap();
///
/// assert_abs_diff_eq!(likelihood.log_likelihood().unwrap(), -2.756815599614018, epsilon = 1E-12);
/// # }
/// ```
#[derive(Clone)]
pub struct GaussianLikelihood<M: Model> {
    x: DVector<f64>,
    y: DVector<f64>,
    model: M,
    function_keys: Vec<String>,
    parameters: ParameterSet,
    sigma: Sigma,
}

impl<M: Model> GaussianLikelihood<M> {
    /// Create a new Gaussian likelihood from data, a model and the noise.
    ///
    /// `sigma` may be a `Sigma`, an `f64`, a `Vec<f64>` with one entry per
    /// data point, or `None` for inferred noise.
    pub fn new<S: Into<Sigma>>(
        x: Vec<f64>,
        y: Vec<f64>,
        model: M,
        sigma: S,
    ) -> Result<Self> {
        Self::from_vectors(DVector::from_vec(x), DVector::from_vec(y), model, sigma)
    }

    /// Same as `new`, taking the data as vectors.
    pub fn from_vectors<S: Into<Sigma>>(
        x: DVector<f64>,
        y: DVector<f64>,
        model: M,
        sigma: S,
    ) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LikelihoodError::LengthMismatch {
                expected: x.len(),
                found: y.len(),
            });
        }

        let function_keys = model.parameter_names();
        if function_keys.iter().any(|k| k == SIGMA) {
            return Err(LikelihoodError::ReservedParameterName(SIGMA.to_owned()));
        }

        let sigma = sigma.into();
        check_sigma_length(&sigma, x.len())?;

        let mut parameters = ParameterSet::new(&function_keys)?;
        if sigma.is_inferred() {
            parameters.push(SIGMA)?;
        }

        debug!(
            "GaussianLikelihood: {} data points, parameters {:?}, sigma {:?}",
            x.len(),
            function_keys,
            sigma
        );

        Ok(Self {
            x,
            y,
            model,
            function_keys,
            parameters,
            sigma,
        })
    }

    /// Names of the model's free parameters (never includes `sigma`)
    pub fn function_keys(&self) -> &[String] {
        &self.function_keys
    }

    /// Number of data points
    pub fn n(&self) -> usize {
        self.x.len()
    }

    /// Independent variable
    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    /// Observed dependent variable
    pub fn y(&self) -> &DVector<f64> {
        &self.y
    }

    /// The fitted model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Current noise configuration
    pub fn sigma(&self) -> &Sigma {
        &self.sigma
    }

    /// Replace the noise configuration.
    ///
    /// Switching to `Sigma::Inferred` adds an unset `sigma` parameter;
    /// switching away removes it. Other parameter values are kept.
    pub fn set_sigma<S: Into<Sigma>>(&mut self, sigma: S) -> Result<()> {
        let sigma = sigma.into();
        check_sigma_length(&sigma, self.n())?;

        match (self.sigma.is_inferred(), sigma.is_inferred()) {
            (false, true) => self.parameters.push(SIGMA)?,
            (true, false) => self.parameters.remove(SIGMA),
            _ => (),
        }

        debug!("GaussianLikelihood: sigma changed to {:?}", sigma);
        self.sigma = sigma;
        Ok(())
    }

    /// Log likelihood at an explicit parameter assignment.
    ///
    /// `parameters` must carry the same names as `self.parameters()` (in any
    /// order); the stored assignment is left untouched.
    pub fn log_likelihood_at(&self, parameters: &ParameterSet) -> Result<f64> {
        self.check_schema(parameters)?;
        let values = parameters.values_for(&self.function_keys)?;

        let sigma = match &self.sigma {
            Sigma::Known(s) => Noise::Scalar(positive(*s)?),
            Sigma::KnownPerPoint(s) => {
                s.iter().try_for_each(|&si| positive(si).map(|_| ()))?;
                Noise::PerPoint(s)
            }
            Sigma::Inferred => {
                let s = parameters.values_for(&[SIGMA])?[0];
                Noise::Scalar(positive(s)?)
            }
        };

        let prediction = self.model.evaluate(&self.x, &values);
        if prediction.len() != self.n() {
            return Err(LikelihoodError::ShapeMismatch {
                expected: self.n(),
                found: prediction.len(),
            });
        }

        let residual = &self.y - prediction;
        let ll = gaussian_ln_l(&residual, &sigma);
        trace!("GaussianLikelihood: ln L = {} at {:?}", ll, values);
        Ok(ll)
    }

    fn check_schema(&self, parameters: &ParameterSet) -> Result<()> {
        if let Some(extra) = parameters.names().find(|n| !self.parameters.contains(n)) {
            return Err(LikelihoodError::UnknownParameter(extra.to_owned()));
        }
        if let Some(missing) = self.parameters.names().find(|n| !parameters.contains(n)) {
            return Err(LikelihoodError::UnsetParameter(missing.to_owned()));
        }
        Ok(())
    }

    /// Evaluate many independent parameter assignments in parallel.
    pub fn log_likelihood_many(&self, parameters: &[ParameterSet]) -> Vec<Result<f64>> {
        parameters
            .par_iter()
            .map(|p| self.log_likelihood_at(p))
            .collect()
    }
}

impl<M: Model> fmt::Debug for GaussianLikelihood<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GaussianLikelihood {{ n: {}, function_keys: {:?}, sigma: {:?}, parameters: {:?} }}",
            self.n(),
            self.function_keys,
            self.sigma,
            self.parameters
        )
    }
}

impl<M: Model> Likelihood for GaussianLikelihood<M> {
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    fn log_likelihood(&self) -> Result<f64> {
        self.log_likelihood_at(&self.parameters)
    }
}

enum Noise<'a> {
    Scalar(f64),
    PerPoint(&'a DVector<f64>),
}

fn positive(sigma: f64) -> Result<f64> {
    // NaN fails the comparison as well
    if sigma > 0.0 {
        Ok(sigma)
    } else {
        Err(LikelihoodError::InvalidNoise(sigma))
    }
}

fn check_sigma_length(sigma: &Sigma, n: usize) -> Result<()> {
    match sigma {
        Sigma::KnownPerPoint(s) if s.len() != n => Err(LikelihoodError::LengthMismatch {
            expected: n,
            found: s.len(),
        }),
        _ => Ok(()),
    }
}

/// -1/2 (sum (r_i / s_i)^2 + N ln(2 pi) + sum ln(s_i^2))
fn gaussian_ln_l(residual: &DVector<f64>, sigma: &Noise) -> f64 {
    let n = residual.len() as f64;
    let (chi_sq, ln_var) = match sigma {
        Noise::Scalar(s) => {
            let chi_sq: f64 = residual.iter().map(|r| (r / s).powi(2)).sum();
            (chi_sq, 2.0 * n * s.ln())
        }
        Noise::PerPoint(s) => residual.iter().zip(s.iter()).fold(
            (0.0, 0.0),
            |(chi_sq, ln_var), (r, s)| (chi_sq + (r / s).powi(2), ln_var + 2.0 * s.ln()),
        ),
    };
    -0.5 * (chi_sq + n * (2.0 * PI).ln() + ln_var)
}
