use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use rayon::prelude::*;
use rlikelihood::utils::log_likelihood_fn;
use rlikelihood::{model, GaussianLikelihood, Likelihood, LikelihoodError, ParameterSet};

fn proposals(likelihood: &GaussianLikelihood<impl rlikelihood::Model>, n: usize) -> Vec<ParameterSet> {
    let mut rng = Xoshiro256Plus::seed_from_u64(0xC4A1_5EED);
    (0..n)
        .map(|_| {
            let mut params = likelihood.parameters().clone();
            params.set("m", rng.gen_range(0.0..2.0)).unwrap();
            params.set("c", rng.gen_range(-1.0..1.0)).unwrap();
            params.set("sigma", rng.gen_range(0.1..2.0)).unwrap();
            params
        })
        .collect()
}

fn line() -> GaussianLikelihood<impl rlikelihood::Model + Clone> {
    let x: Vec<f64> = (0..20_i32).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|xi| 0.7 * xi + 0.2).collect();
    GaussianLikelihood::new(x, y, model!(|x, m, c| x.map(|xi| m * xi + c)), None).unwrap()
}

#[test]
fn many_matches_sequential() {
    let _ = env_logger::try_init();
    let likelihood = line();
    let sets = proposals(&likelihood, 256);

    let parallel = likelihood.log_likelihood_many(&sets);
    let sequential: Vec<_> = sets.iter().map(|p| likelihood.log_likelihood_at(p)).collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn many_reports_each_failure() {
    let likelihood = line();
    let mut sets = proposals(&likelihood, 3);
    sets[1].unset("m").unwrap();

    let results = likelihood.log_likelihood_many(&sets);
    assert!(results[0].is_ok());
    assert_eq!(results[1], Err(LikelihoodError::UnsetParameter("m".to_owned())));
    assert!(results[2].is_ok());
}

#[test]
fn one_instance_per_chain() {
    let _ = env_logger::try_init();
    let template = line();
    let sets = proposals(&template, 8);

    let per_chain: Vec<f64> = sets
        .par_iter()
        .map(|params| {
            let mut chain = template.clone();
            for (name, value) in params.iter() {
                chain.parameters_mut().set(name, value.unwrap()).unwrap();
            }
            chain.log_likelihood().unwrap()
        })
        .collect();

    let f = log_likelihood_fn(&template);
    let expected: Vec<f64> = sets.iter().map(|p| f(p)).collect();

    assert_eq!(per_chain, expected);
    assert_eq!(template.parameters().missing(), vec!["m", "c", "sigma"]);
}
