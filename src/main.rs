use ctdesign::compute::{
    evaluate, DesignSpec, NormalParams, PowerPriorInputs, SearchGrid, SequentialInputs,
    SingleArmInputs,
};
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // REBYOTA PUNCH CD2 borrowing at half discount
    let borrowing = evaluate(&DesignSpec::PowerPrior(PowerPriorInputs::flat_base(
        25, 45, 0.5,
    )));
    println!("Power prior borrowing: {borrowing:#?}");

    let sequential = evaluate(&DesignSpec::SequentialContinuous(SequentialInputs {
        n_per_look: vec![30, 60, 90],
        prior: NormalParams::new(0.0, 1.0).expect("valid prior"),
        data_variance: 1.0,
        efficacy_threshold: 0.975,
        futility_threshold: Some(0.10),
    }));
    println!("Sequential boundaries: {sequential:#?}");

    let start = Instant::now();
    let single_arm = evaluate(&DesignSpec::SingleArmBinary(SingleArmInputs {
        prior_alpha: 1.0,
        prior_beta: 1.0,
        null_rate: 0.10,
        alternative_rate: 0.25,
        decision_threshold: 0.95,
        target_type1_error: 0.05,
        target_power: 0.80,
        n_simulations: 2000,
        grid: SearchGrid {
            n_min: 10,
            n_max: 120,
            n_step: 5,
        },
        seed: Some(12345),
    }));
    let duration = start.elapsed();
    println!("Single arm search (2000 sims/candidate): {duration:?}");
    println!("Single arm result: {single_arm:#?}");

    if let Ok(outcome) = single_arm {
        let violations = outcome.contract_violations();
        println!("Contract violations: {violations:?}");
    }
}
