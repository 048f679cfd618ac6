use std::{
    fs::File,
    io::{BufWriter, Write},
};
use rand::{SeedableRng, rngs::StdRng};
use neuron_labs::neuron::{
    input_current::{InputCurrent, NoiseConfig, PulseConfig, SineConfig},
    integrate_and_fire::{LifParams, firing_period, run_static_input},
};


// Drives the integrate and fire neuron with each input generator and writes
// the voltage traces to the current working directory
fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let iterations = 3000;
    let inputs = [
        ("constant", InputCurrent::constant(2.)),
        ("pulse", InputCurrent::pulse(PulseConfig::default())),
        ("noise", InputCurrent::noise(NoiseConfig::default())),
        ("sine", InputCurrent::sine(SineConfig::default())),
    ];

    let mut rng = StdRng::seed_from_u64(0);
    let mut traces = vec![];

    for (name, input) in inputs {
        let params = LifParams { input, ..LifParams::default_impl() };
        let results = run_static_input(&params, params.e_l, iterations, &mut rng);

        match firing_period(&results) {
            Some(period) => tracing::info!("{}: mean firing period {:.2} ms", name, period),
            None => tracing::info!("{}: fewer than two spikes", name),
        }

        traces.push(results);
    }

    let mut file = BufWriter::new(File::create("lif_input_modes.csv")
        .expect("Could not create file"));

    writeln!(file, "time,constant,pulse,noise,sine").expect("Could not write to file");
    for i in 0..iterations {
        writeln!(
            file, "{},{},{},{},{}",
            traces[0][i].time, traces[0][i].voltage, traces[1][i].voltage,
            traces[2][i].voltage, traces[3][i].voltage,
        ).expect("Could not write to file");
    }
}
