//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the generator types are accessible via their module paths.
#[test]
fn test_generator_module_exports() {
    use lehmer_rng::generator::StepFormula;
    use lehmer_rng::LehmerState;

    let mut state = LehmerState::new(1);
    state.set_formula(StepFormula::Gamma).unwrap();
    assert_eq!(state.step_and_get(), 48271);
}

/// Test that normalisation and variates are accessible via absolute path.
#[test]
fn test_variate_module_exports() {
    use lehmer_rng::normalize::to_unit_interval;
    use lehmer_rng::variate::{bernoulli, binomial, UniformSource};
    use lehmer_rng::LehmerState;

    let mut state = LehmerState::new(42);
    let source: &mut dyn UniformSource = &mut state;
    assert!(bernoulli(&mut *source, 0.5) <= 1);
    assert!(binomial(&mut *source, 4, 0.5) <= 4);
    assert!(to_unit_interval(1, 2) > 0.0);
}

/// Test that configuration is accessible via absolute path.
#[test]
fn test_config_module_exports() {
    use lehmer_rng::config::{ConfigError, LehmerConfig, Profile};

    let config = LehmerConfig::new();
    assert_eq!(config.profile, Profile::Standard);
    assert!(matches!(
        LehmerConfig::from_toml_str("formula = \"jump\""),
        Err(ConfigError::JumpFormula)
    ));
}

/// Test that partitioning is accessible via absolute path.
#[test]
fn test_partition_module_exports() {
    use lehmer_rng::partition::{run_replicates, LehmerStream};
    use lehmer_rng::LehmerState;

    let mut state = LehmerState::with_streams(3, 1).unwrap();
    let seeds = run_replicates(&mut state, |_, stream: &mut LehmerStream| stream.seed());
    assert_eq!(seeds[1], 22937);
}

/// Test that root re-exports match the module paths.
#[test]
fn test_root_reexports() {
    use lehmer_rng::error::LehmerError as ModuleError;
    use lehmer_rng::{LehmerError, LehmerState, StepFormula};

    let err: ModuleError = LehmerState::new(1).set_formula(StepFormula::Jump).unwrap_err();
    let _: LehmerError = err;
}

/// Test that the rand traits are implemented.
#[test]
fn test_rand_interop() {
    use lehmer_rng::LehmerState;
    use rand::{Rng, SeedableRng};

    let mut rng = LehmerState::seed_from_u64(99);
    let value: f64 = rng.gen();
    assert!((0.0..1.0).contains(&value));
}
