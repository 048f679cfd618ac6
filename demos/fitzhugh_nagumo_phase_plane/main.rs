use std::{
    fs::File,
    io::{BufWriter, Write},
};
use neuron_labs::{
    phase_plane::{ModelVariant, State},
    session::PhasePlaneSession,
};


// Samples the FitzHugh-Nagumo flow field and traces a trajectory from a
// start point, writes both to the current working directory
fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let session = PhasePlaneSession {
        variant: ModelVariant::fitzhugh_nagumo(),
        control: 0.5,
        ..PhasePlaneSession::default()
    };

    let grid = session.flow_field(20, 20);
    let mut file = BufWriter::new(File::create("fitzhugh_nagumo_flow_field.csv")
        .expect("Could not create file"));

    writeln!(file, "x,y,dx,dy,magnitude").expect("Could not write to file");
    for vector in grid.iter() {
        writeln!(
            file, "{},{},{},{},{}",
            vector.position.x, vector.position.y, vector.derivative.dx, vector.derivative.dy,
            vector.derivative.magnitude(),
        ).expect("Could not write to file");
    }

    let trajectory = session.trace_from(State::new(-1., -0.5), 2000);
    tracing::info!("trajectory has {} states", trajectory.len());

    let mut file = BufWriter::new(File::create("fitzhugh_nagumo_trajectory.csv")
        .expect("Could not create file"));

    writeln!(file, "x,y").expect("Could not write to file");
    for state in trajectory {
        writeln!(file, "{},{}", state.x, state.y).expect("Could not write to file");
    }
}
