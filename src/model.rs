//! Models fitted by a likelihood

use std::fmt;

use nalgebra::DVector;

/// A deterministic model of the dependent variable
///
/// `evaluate` receives the independent variable and the parameter values in
/// the order given by `parameter_names`, and returns one prediction per
/// entry of `x`.
pub trait Model: Send + Sync {
    /// Names of the model's free parameters (excluding the independent variable)
    fn parameter_names(&self) -> Vec<String>;

    /// Predict the dependent variable at `x`
    fn evaluate(&self, x: &DVector<f64>, params: &[f64]) -> DVector<f64>;
}

/// A model built from a closure and a list of parameter names
///
/// Usually created through the [`model!`](../macro.model.html) macro.
#[derive(Clone)]
pub struct FunctionModel<F>
where
    F: Fn(&DVector<f64>, &[f64]) -> DVector<f64> + Send + Sync,
{
    names: Vec<String>,
    function: F,
}

impl<F> FunctionModel<F>
where
    F: Fn(&DVector<f64>, &[f64]) -> DVector<f64> + Send + Sync,
{
    /// Create a new model from parameter names and a prediction function.
    pub fn new(names: &[&str], function: F) -> Self {
        Self {
            names: names.iter().map(|&n| n.to_owned()).collect(),
            function,
        }
    }
}

impl<F> fmt::Debug for FunctionModel<F>
where
    F: Fn(&DVector<f64>, &[f64]) -> DVector<f64> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FunctionModel {{ names: {:?} }}", self.names)
    }
}

impl<F> Model for FunctionModel<F>
where
    F: Fn(&DVector<f64>, &[f64]) -> DVector<f64> + Send + Sync,
{
    fn parameter_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn evaluate(&self, x: &DVector<f64>, params: &[f64]) -> DVector<f64> {
        (self.function)(x, params)
    }
}

/// Make a model from a closure-like expression, taking the parameter names
/// from its argument list.
///
/// The first argument binds the independent variable (`&DVector<f64>`); the
/// remaining arguments are the free parameters, each bound as an `f64`.
///
/// # Example
/// ```
/// #[macro_use] extern crate rlikelihood;
/// use rlikelihood::{Model, nalgebra::DVector};
///
/// # fn main() {
/// let line = model!(|x, slope, intercept| x.map(|xi| slope * xi + intercept));
/// assert_eq!(line.parameter_names(), vec!["slope", "intercept"]);
///
/// let x = DVector::from_vec(vec![0.0, 1.0, 2.0]);
/// let y = line.evaluate(&x, &[2.0, 1.0]);
/// assert_eq!(y, DVector::from_vec(vec![1.0, 3.0, 5.0]));
/// # }
/// ```
#[macro_export]
macro_rules! model {
    (|$x: ident $(, $param: ident)*| $body: expr) => {
        $crate::FunctionModel::new(
            &[$(stringify!($param)),*],
            |$x: &$crate::nalgebra::DVector<f64>, params: &[f64]| -> $crate::nalgebra::DVector<f64> {
                #[allow(unused_mut, unused_variables)]
                let mut values = params.iter().cloned();
                $(let $param: f64 = values.next().unwrap_or(::std::f64::NAN);)*
                $body
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_model_passes_values_in_order() {
        let m = FunctionModel::new(&["a", "b"], |x: &DVector<f64>, p: &[f64]| {
            x.map(|xi| p[0] * xi - p[1])
        });
        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(m.evaluate(&x, &[3.0, 1.0]), DVector::from_vec(vec![2.0, 5.0]));
    }

    #[test]
    fn macro_takes_names_from_arguments() {
        let m = model!(|x, a, b| x * a + DVector::from_element(x.len(), b));
        assert_eq!(m.parameter_names(), vec!["a", "b"]);

        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(m.evaluate(&x, &[2.0, 0.5]), DVector::from_vec(vec![2.5, 4.5]));
    }

    #[test]
    fn macro_without_parameters() {
        let m = model!(|x| x.map(|xi| xi * xi));
        assert!(m.parameter_names().is_empty());

        let x = DVector::from_vec(vec![3.0]);
        assert_eq!(m.evaluate(&x, &[]), DVector::from_vec(vec![9.0]));
    }

    #[test]
    fn debug_lists_names() {
        let m = model!(|x, a| x * a);
        assert_eq!(format!("{:?}", m), "FunctionModel { names: [\"a\"] }");
    }
}
