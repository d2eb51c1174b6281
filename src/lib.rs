//! Likelihoods for Bayesian parameter inference
//!
//! A [`Likelihood`] holds a set of named free parameters and scores observed
//! data against them. Samplers (MCMC, nested sampling, ...) set parameter
//! values and call [`Likelihood::log_likelihood`] once per proposal.
//!
//! [`GaussianLikelihood`] fits a [`Model`] to `(x, y)` data with known
//! or inferred Gaussian noise.

#[cfg(feature = "serde_support")]
#[macro_use]
extern crate serde_derive;

pub use nalgebra;

#[macro_use]
pub mod model;
pub mod error;
pub mod gaussian;
pub mod likelihood;
pub mod parameter;
pub mod sigma;
pub mod utils;

pub use error::{LikelihoodError, Result};
pub use gaussian::GaussianLikelihood;
pub use likelihood::{BaseLikelihood, Likelihood};
pub use model::{FunctionModel, Model};
pub use parameter::ParameterSet;
pub use sigma::{Sigma, SIGMA};
