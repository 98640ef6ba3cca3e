//! End-to-end test: full generations over the default and reference
//! configurations.

use xornet_engine::{EvolutionConfig, EvolutionEngine, RecordingObserver};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn elitism_beats_random_search() {
    let elitist = EvolutionConfig::default();
    let random_search = EvolutionConfig {
        survivors: 0,
        elite_tiers: Vec::new(),
        ..EvolutionConfig::default()
    };

    let late_best = |config: EvolutionConfig| {
        let mut engine = EvolutionEngine::with_seed(config, 2024).unwrap();
        let mut obs = RecordingObserver::default();
        engine.run(&mut obs, Some(30)).unwrap();
        let tail = &obs.reports[20..];
        let mean = tail.iter().map(|r| r.best_score as f64).sum::<f64>() / tail.len() as f64;
        (mean, obs.reports[0].mean_score)
    };

    let (elitist_best, initial_mean) = late_best(elitist);
    let (random_best, _) = late_best(random_search);
    assert!(
        elitist_best > random_best,
        "elitist late best {} not above random search {}",
        elitist_best,
        random_best
    );
    assert!(elitist_best >= initial_mean);
}

#[test]
fn top_network_survives_reproduction() {
    let mut engine = EvolutionEngine::with_seed(EvolutionConfig::default(), 77).unwrap();
    for _ in 0..5 {
        let report = engine.step_generation().unwrap();
        // the register still holds the last board of the generation
        let top = &engine.population()[0];
        assert_eq!(top.network.values(), report.best_output);
        assert_eq!(top.score, report.best_score);
    }
}

#[test]
fn population_size_is_stable() {
    let config = EvolutionConfig::small();
    let size = config.population_size;
    let mut engine = EvolutionEngine::with_seed(config, 3).unwrap();
    for _ in 0..5 {
        engine.step_generation().unwrap();
        assert_eq!(engine.population().len(), size);
    }
}

#[test]
fn reference_config_runs() {
    let config = EvolutionConfig {
        evaluations_per_generation: 5,
        ..EvolutionConfig::reference()
    };
    let mut engine = EvolutionEngine::with_seed(config, 17).unwrap();
    let mut obs = RecordingObserver::default();
    let summary = engine.run(&mut obs, Some(3)).unwrap();

    assert_eq!(summary.generations, 3);
    for report in &obs.reports {
        assert_eq!(report.best_output.len(), 9);
        assert!(report.best_score >= report.worst_score);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut engine = EvolutionEngine::with_seed(EvolutionConfig::small(), seed).unwrap();
        let mut obs = RecordingObserver::default();
        engine.run(&mut obs, Some(5)).unwrap();
        obs.reports
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn metrics_track_reports() {
    let mut engine = EvolutionEngine::with_seed(EvolutionConfig::small(), 8).unwrap();
    let mut obs = RecordingObserver::default();
    engine.run(&mut obs, Some(6)).unwrap();

    let metrics = engine.metrics();
    assert_eq!(metrics.generations, 6);
    assert_eq!(
        metrics.total_commits,
        obs.reports.iter().map(|r| r.commits).sum::<u64>()
    );
    assert_eq!(
        metrics.best_ever,
        obs.reports.iter().map(|r| r.best_score).max()
    );
}
