//! Likelihood contract shared by every concrete likelihood

use std::fmt;

use crate::error::Result;
use crate::parameter::ParameterSet;

/// Likelihood of observed data under a parameter assignment
///
/// A sampler updates the values in `parameters_mut()` and then asks for
/// `log_likelihood()`. Both evaluations default to NaN, meaning "not defined
/// for this likelihood".
pub trait Likelihood: fmt::Debug {
    /// Current parameter assignment
    fn parameters(&self) -> &ParameterSet;

    /// Mutable access to the parameter assignment
    fn parameters_mut(&mut self) -> &mut ParameterSet;

    /// Log likelihood of the data under the current parameters
    fn log_likelihood(&self) -> Result<f64> {
        Ok(std::f64::NAN)
    }

    /// Log likelihood of the data under the noise-only hypothesis
    fn noise_log_likelihood(&self) -> Result<f64> {
        Ok(std::f64::NAN)
    }

    /// Difference between log likelihood and noise log likelihood
    fn log_likelihood_ratio(&self) -> Result<f64> {
        Ok(self.log_likelihood()? - self.noise_log_likelihood()?)
    }
}

/// A likelihood which only holds parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BaseLikelihood {
    parameters: ParameterSet,
}

impl BaseLikelihood {
    /// Create a new likelihood holding `parameters`
    pub fn new(parameters: ParameterSet) -> Self {
        Self { parameters }
    }
}

impl Likelihood for BaseLikelihood {
    fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LikelihoodError;

    #[test]
    fn base_evaluations_are_undefined() {
        let base = BaseLikelihood::new(ParameterSet::new(&["a"]).unwrap());
        assert!(base.log_likelihood().unwrap().is_nan());
        assert!(base.noise_log_likelihood().unwrap().is_nan());
        assert!(base.log_likelihood_ratio().unwrap().is_nan());
    }

    #[test]
    fn base_parameters_are_mutable() {
        let mut base = BaseLikelihood::new(ParameterSet::new(&["a"]).unwrap());
        base.parameters_mut().set("a", 4.0).unwrap();
        assert_eq!(base.parameters().get("a"), Some(4.0));
    }

    #[derive(Debug)]
    struct Fixed {
        parameters: ParameterSet,
        ll: f64,
        noise: f64,
    }

    impl Likelihood for Fixed {
        fn parameters(&self) -> &ParameterSet {
            &self.parameters
        }

        fn parameters_mut(&mut self) -> &mut ParameterSet {
            &mut self.parameters
        }

        fn log_likelihood(&self) -> Result<f64> {
            Ok(self.ll)
        }

        fn noise_log_likelihood(&self) -> Result<f64> {
            if self.noise.is_finite() {
                Ok(self.noise)
            } else {
                Err(LikelihoodError::UnsetParameter("noise".to_owned()))
            }
        }
    }

    #[test]
    fn ratio_is_difference() {
        let fixed = Fixed {
            parameters: ParameterSet::new::<&str>(&[]).unwrap(),
            ll: -3.5,
            noise: -5.0,
        };
        assert_eq!(fixed.log_likelihood_ratio(), Ok(1.5));
    }

    #[test]
    fn ratio_propagates_errors() {
        let fixed = Fixed {
            parameters: ParameterSet::new::<&str>(&[]).unwrap(),
            ll: -3.5,
            noise: std::f64::NAN,
        };
        assert_eq!(
            fixed.log_likelihood_ratio(),
            Err(LikelihoodError::UnsetParameter("noise".to_owned()))
        );
    }
}
