//! End-to-end tests: config file + data file on disk through to the report.

use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, SeedableRng};
use tabular_nn::{
    evaluate, run, split_sample, DatasetLoader, DatasetSplitter, Error, Network, RunConfig,
    Seeds,
};

/// Writes `contents` to a fresh file in the system temp dir.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tabular-nn-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Two well-separated clusters: cats small, dogs large.
fn pets_csv() -> String {
    let mut text = String::from("id,weight,height,kind\n");
    for i in 0..20 {
        let jitter = (i % 5) as f64 * 0.1;
        text.push_str(&format!("{},{},{},cat\n", 2 * i, 1.0 + jitter, 2.0 + jitter));
        text.push_str(&format!("{},{},{},dog\n", 2 * i + 1, 8.0 + jitter, 9.0 + jitter));
    }
    text
}

fn pets_config(data_path: &PathBuf, epochs: usize, split: f64) -> RunConfig {
    let json = format!(
        r#"{{
            "DATASETNAME": "pets",
            "FNAME": {:?},
            "CSVHEADER": true,
            "IDCOL": true,
            "LABELCOL": 3,
            "INPUTS": 2,
            "HIDDEN": 3,
            "OUTPUTS": 2,
            "LEARNINGRATE": 0.5,
            "EPOCHS": {},
            "SPLIT": {},
            "LABEL": {{ "cat": [1, 0], "dog": [0, 1] }}
        }}"#,
        data_path.to_string_lossy(),
        epochs,
        split
    );
    let stem = data_path.file_stem().unwrap().to_string_lossy();
    let cfg_path = temp_file(&format!("{}.json", stem), &json);
    RunConfig::load_json(cfg_path).unwrap()
}

#[test]
fn untrained_network_outputs_stay_inside_sigmoid_range() {
    let data = temp_file("untrained.csv", &pets_csv());
    let cfg = pets_config(&data, 0, 80.0);
    let loaded = DatasetLoader::new(&cfg).load().unwrap();
    let net = Network::new(cfg.inputs, cfg.hidden, cfg.outputs, cfg.learning_rate, &mut StdRng::seed_from_u64(3));

    for sample in &loaded.samples {
        assert_eq!(sample.len(), cfg.inputs + cfg.outputs);
        let (features, _) = split_sample(sample, cfg.inputs);
        for v in net.predict(features) {
            assert!(v > 0.0 && v < 1.0, "output {} outside (0, 1)", v);
        }
    }
}

#[test]
fn full_split_leaves_nothing_to_test() {
    let data = temp_file("full.csv", &pets_csv());
    let cfg = pets_config(&data, 50, 100.0);
    let outcome = run(&cfg, Seeds::from_base(1), &mut |_| {}).unwrap();
    assert_eq!(outcome.train_set_size, 40);
    assert_eq!(outcome.report.test_set_size, 0);
    assert_eq!(outcome.report.accuracy, None);
}

#[test]
fn split_sizes_always_cover_the_dataset() {
    let data = temp_file("sizes.csv", &pets_csv());
    let cfg = pets_config(&data, 0, 80.0);
    let loaded = DatasetLoader::new(&cfg).load().unwrap();
    for percent in [0.0, 12.5, 50.0, 80.0, 99.0, 100.0] {
        let splitter = DatasetSplitter::new(percent).unwrap();
        let (train, test) = splitter.split(loaded.samples.clone(), &mut StdRng::seed_from_u64(5));
        assert_eq!(train.len() + test.len(), loaded.samples.len());
    }
}

#[test]
fn fixed_seeds_reproduce_the_run() {
    let data = temp_file("repro.csv", &pets_csv());
    let cfg = pets_config(&data, 300, 75.0);
    let mut ticks = 0;
    let a = run(&cfg, Seeds::from_base(99), &mut |_| ticks += 1).unwrap();
    let b = run(&cfg, Seeds::from_base(99), &mut |_| {}).unwrap();
    assert_eq!(a, b);
    assert_eq!(ticks, 10);
    assert_eq!(a.train_set_size, 30);
    assert_eq!(a.report.test_set_size, 10);
    let accuracy = a.report.accuracy.unwrap();
    assert!((0.0..=100.0).contains(&accuracy));
}

#[test]
fn repeated_steps_pull_output_towards_label() {
    let mut net = Network::new(2, 3, 1, 0.05, &mut StdRng::seed_from_u64(21));
    let x = [0.3, 0.9];
    let mut last = net.predict(&x)[0];
    for _ in 0..20 {
        net.train(&x, &[1.0]);
        let now = net.predict(&x)[0];
        assert!(now > last, "output fell from {} to {}", last, now);
        last = now;
    }
}

#[test]
fn evaluator_on_loaded_data_counts_every_sample() {
    let data = temp_file("eval.csv", &pets_csv());
    let cfg = pets_config(&data, 0, 80.0);
    let loaded = DatasetLoader::new(&cfg).load().unwrap();
    let net = Network::new(2, 3, 2, 0.5, &mut StdRng::seed_from_u64(8));
    let report = evaluate(&net, &loaded.samples);
    assert_eq!(report.test_set_size, 40);
    assert!(report.correct <= 40);
    let expected = report.correct as f64 / 40.0 * 100.0;
    assert_abs_diff_eq!(report.accuracy.unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn missing_data_file_fails_the_run() {
    let missing = std::env::temp_dir().join("tabular-nn-definitely-missing.csv");
    let cfg = pets_config(&missing, 10, 80.0);
    assert!(matches!(run(&cfg, Seeds::from_base(0), &mut |_| {}), Err(Error::Io(_))));
}
