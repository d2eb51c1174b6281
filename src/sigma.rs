//! Noise configuration for the Gaussian likelihood

use nalgebra::DVector;

/// Name of the free parameter holding an inferred noise level
pub const SIGMA: &str = "sigma";

/// Standard deviation of the measurement noise
#[derive(Clone, Debug, PartialEq)]
pub enum Sigma {
    /// A single known standard deviation for every data point
    Known(f64),
    /// One known standard deviation per data point
    KnownPerPoint(DVector<f64>),
    /// Unknown noise, read from the `sigma` parameter at evaluation time
    Inferred,
}

impl Sigma {
    /// True if the noise level is a free parameter
    pub fn is_inferred(&self) -> bool {
        match self {
            Sigma::Inferred => true,
            _ => false,
        }
    }
}

impl Default for Sigma {
    fn default() -> Self {
        Sigma::Inferred
    }
}

impl From<f64> for Sigma {
    fn from(sigma: f64) -> Self {
        Sigma::Known(sigma)
    }
}

impl From<Option<f64>> for Sigma {
    fn from(sigma: Option<f64>) -> Self {
        sigma.map_or(Sigma::Inferred, Sigma::Known)
    }
}

impl From<Vec<f64>> for Sigma {
    fn from(sigmas: Vec<f64>) -> Self {
        Sigma::KnownPerPoint(DVector::from_vec(sigmas))
    }
}

impl From<DVector<f64>> for Sigma {
    fn from(sigmas: DVector<f64>) -> Self {
        Sigma::KnownPerPoint(sigmas)
    }
}
