use std::f64::consts::PI;

use backprop_nn::Network;
use rand::Rng;

// Sigmoid outputs live in (0, 1), so inputs are scaled from [0, 2π) to [0, 1)
// and targets from [-1, 1] to [0, 1].
fn encode(x: f64) -> f64 {
    x / (2.0 * PI)
}

fn decode(y: f64) -> f64 {
    y * 2.0 - 1.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut network = Network::new(1, &[10, 1])?;
    let mut rng = rand::thread_rng();
    let steps = 200_000;
    let mut running = 0.0;

    for step in 1..=steps {
        let x = rng.gen::<f64>() * 2.0 * PI;
        let target = (x.sin() + 1.0) / 2.0;
        running += network.train(&[encode(x)], &[target], 0.5)?.error;

        if step % 20_000 == 0 {
            tracing::info!(step, error = running / 20_000.0, "training");
            running = 0.0;
        }
    }

    let mut x = 0.0;
    while x < 2.0 * PI {
        let predicted = decode(network.run(&[encode(x)])?[0]);
        println!("sin({x:.2}) = {:+.4}, network says {predicted:+.4}", x.sin());
        x += PI / 6.0;
    }

    Ok(())
}
