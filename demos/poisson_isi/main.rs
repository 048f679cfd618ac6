use std::{
    fs::File,
    io::{BufWriter, Write},
};
use neuron_labs::session::PoissonLab;


// Runs the Poisson lab at 60 frames per second and writes the inter-spike
// interval histogram next to the exponential density it should approach
fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let rate = 15.;
    let frame = 1. / 60.;
    let mut lab = PoissonLab::default_impl();

    let mut stats = lab.tick_poisson(rate, frame);
    for _ in 0..(60 * 120) {
        stats = lab.tick_poisson(rate, frame);
    }

    tracing::info!(
        "{} events retained, observed rate {:.2} Hz, cv {:?}",
        stats.event_count, stats.observed_rate, stats.coefficient_of_variation,
    );

    let histogram = lab.simulator()
        .default_histogram()
        .expect("Could not build histogram");

    let mut file = BufWriter::new(File::create("poisson_isi_histogram.csv")
        .expect("Could not create file"));

    writeln!(file, "bin_center,density,theoretical").expect("Could not write to file");
    let densities = histogram.densities();
    let theoretical = histogram.theoretical_densities(rate);
    for (i, center) in histogram.bin_centers().iter().enumerate() {
        writeln!(file, "{},{},{}", center, densities[i], theoretical[i]).expect("Could not write to file");
    }
}
