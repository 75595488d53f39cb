use backprop_nn::{train_loop, Network, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut network = Network::new(2, &[3, 1])?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(20000, 0.5)
        .shuffle(true)
        .log_interval(2000)
        .target_error(0.001);
    let history = train_loop(&mut network, &inputs, &expected_outputs, &config)?;

    if let Some(last) = history.last() {
        println!("{}", serde_json::to_string(last)?);
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.run(input)?[0]);
    }

    Ok(())
}
