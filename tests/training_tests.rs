//! Integration tests for backpropagation and the training loop.

use approx::assert_abs_diff_eq;
use backprop_nn::{train_loop, Network, NetworkError, TrainConfig};
use rand::{rngs::StdRng, SeedableRng};

fn seeded(inputs: usize, layers: &[usize], seed: u64) -> Network {
    Network::with_rng(inputs, layers, &mut StdRng::seed_from_u64(seed)).unwrap()
}

fn xor() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    (
        vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
    )
}

/// Total half squared error of one example, not averaged.
fn example_error(network: &Network, input: &[f64], expected: &[f64]) -> f64 {
    network
        .run(input)
        .unwrap()
        .iter()
        .zip(expected)
        .map(|(a, t)| (t - a).powi(2) / 2.0)
        .sum()
}

/// With a learning rate of 1 every weight moves by exactly minus its gradient,
/// so the update must agree with central finite differences.
#[test]
fn update_matches_numerical_gradient() {
    let network = seeded(2, &[3, 2], 17);
    let input = [0.3, -0.8];
    let expected = [1.0, 0.0];
    let h = 1e-5;

    let mut trained = network.clone();
    trained.train(&input, &expected, 1.0).unwrap();

    for l in 0..network.layers().len() {
        for n in 0..network.layers()[l].size() {
            let width = network.layers()[l].neurons()[n].weights().len();
            for w in 0..width {
                let mut plus = network.clone();
                plus.weights_mut(l, n).unwrap()[w] += h;
                let mut minus = network.clone();
                minus.weights_mut(l, n).unwrap()[w] -= h;

                let gradient = (example_error(&plus, &input, &expected)
                    - example_error(&minus, &input, &expected))
                    / (2.0 * h);
                let moved = trained.layers()[l].neurons()[n].weights()[w]
                    - network.layers()[l].neurons()[n].weights()[w];

                assert_abs_diff_eq!(moved, -gradient, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn train_reports_pre_update_outputs() {
    let mut network = seeded(2, &[4, 1], 2);
    let input = [1.0, 0.0];
    let before = network.all_outputs(&input).unwrap();

    let step = network.train(&input, &[1.0], 0.5).unwrap();

    assert_eq!(step.outputs, before);
    assert_eq!(step.output(), before[2].as_slice());
    assert_abs_diff_eq!(step.error, (1.0 - before[2][0]).powi(2) / 2.0, epsilon = 1e-12);
}

#[test]
fn error_is_averaged_over_outputs() {
    let mut network = seeded(1, &[2, 3], 4);
    let expected = [0.0, 1.0, 0.5];
    let total = example_error(&network, &[0.5], &expected);

    let step = network.train(&[0.5], &expected, 0.1).unwrap();
    assert_abs_diff_eq!(step.error, total / 3.0, epsilon = 1e-12);
}

#[test]
fn label_width_mismatch_is_an_error() {
    let mut network = seeded(2, &[3, 1], 8);
    let before = network.layers().to_vec();

    let err = network.train(&[0.0, 1.0], &[1.0, 0.0], 0.5).unwrap_err();

    assert_eq!(err, NetworkError::OutputWidthMismatch { expected: 1, actual: 2 });
    assert_eq!(network.layers(), before.as_slice());
}

#[test]
fn repeated_example_is_learned() {
    let mut network = seeded(3, &[4, 2], 21);
    let input = [0.2, 0.4, 0.6];
    let expected = [0.1, 0.9];

    let first = network.train(&input, &expected, 0.1).unwrap().error;
    for _ in 0..500 {
        network.train(&input, &expected, 0.1).unwrap();
    }
    let last = network.train(&input, &expected, 0.1).unwrap().error;

    assert!(last < first, "error went from {first} to {last}");
}

#[test]
fn xor_error_trends_down() {
    let (inputs, labels) = xor();
    let mut network = seeded(2, &[3, 1], 1234);
    let initial = network.evaluate(&inputs, &labels).unwrap();

    let history = train_loop(&mut network, &inputs, &labels, &TrainConfig::new(5000, 0.5)).unwrap();
    assert_eq!(history.len(), 5000);

    let mean = |slice: &[backprop_nn::EpochStats]| {
        slice.iter().map(|s| s.train_error).sum::<f64>() / slice.len() as f64
    };
    let early = mean(&history[..100]);
    let late = mean(&history[history.len() - 100..]);

    assert!(late < early, "mean error went from {early} to {late}");
    assert!(network.evaluate(&inputs, &labels).unwrap() < initial);
}

#[test]
fn evaluate_does_not_train() {
    let (inputs, labels) = xor();
    let network = seeded(2, &[3, 1], 99);
    let before = network.layers().to_vec();

    network.evaluate(&inputs, &labels).unwrap();
    assert_eq!(network.layers(), before.as_slice());
}

#[test]
fn epoch_stats_serialize_as_json() {
    let (inputs, labels) = xor();
    let mut network = seeded(2, &[2, 1], 6);

    let history = train_loop(&mut network, &inputs, &labels, &TrainConfig::new(1, 0.1)).unwrap();
    let json = serde_json::to_value(&history[0]).unwrap();

    assert_eq!(json["epoch"], 1);
    assert_eq!(json["total_epochs"], 1);
    assert!(json["train_error"].is_number());
}
