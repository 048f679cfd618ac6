#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use neuron_labs::neuron::{
        input_current::{InputCurrent, InputMode, NoiseConfig, PulseConfig, SineConfig},
        integrate_and_fire::{
            firing_period, firing_times, get_forces, run_static_input, step_lif, LifParams,
        },
    };


    const ITERATIONS: usize = 5000;

    fn constant_params(current: f32) -> LifParams {
        LifParams {
            input: InputCurrent::constant(current),
            ..LifParams::default_impl()
        }
    }

    #[test]
    pub fn test_rest_is_fixed_point() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = constant_params(0.);

        let results = run_static_input(&params, -70., ITERATIONS, &mut rng);

        assert!(results.iter().all(|i| i.voltage == -70.));
        assert!(results.iter().all(|i| !i.spiked));
    }

    #[test]
    pub fn test_step_times_do_not_drift() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = constant_params(0.);

        let results = run_static_input(&params, -70., 300_000, &mut rng);

        assert!((results[0].time - 0.1).abs() < 1e-6);
        assert!((results[results.len() - 1].time - 30_000.).abs() < 0.01);
        assert!(results.windows(2).all(|i| i[1].time > i[0].time));
    }

    #[test]
    pub fn test_subthreshold_current_never_spikes() {
        let mut rng = StdRng::seed_from_u64(0);
        // R * I = 10 mV which is below the 15 mV gap to threshold
        let params = constant_params(1.);

        let results = run_static_input(&params, -70., ITERATIONS, &mut rng);

        assert!(firing_times(&results).is_empty());
        let last = results.last().unwrap();
        assert!((last.voltage - (-60.)).abs() < 0.01);
    }

    #[test]
    pub fn test_suprathreshold_current_fires_periodically() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = constant_params(2.);

        let results = run_static_input(&params, -70., ITERATIONS, &mut rng);
        let times = firing_times(&results);

        assert!(times.len() > 10);

        let intervals: Vec<f32> = times.windows(2).map(|i| i[1] - i[0]).collect();
        for interval in intervals.iter() {
            assert!((interval - intervals[0]).abs() < params.dt / 2.);
        }

        // analytical period is tau_m * ln(R * I / (R * I - (v_th - e_l)))
        let expected = params.tau_m() * (20_f32 / 5.).ln();
        assert!((intervals[0] - expected).abs() < 2. * params.dt);
    }

    #[test]
    pub fn test_period_decreases_with_current() {
        let currents = [1.75, 2., 2.5, 3., 4., 6.];
        let mut last_period = f32::INFINITY;

        for current in currents {
            let mut rng = StdRng::seed_from_u64(0);
            let params = constant_params(current);

            let results = run_static_input(&params, -70., ITERATIONS, &mut rng);
            let period = firing_period(&results).unwrap();

            assert!(period < last_period, "current: {}, period: {}", current, period);
            last_period = period;
        }
    }

    #[test]
    pub fn test_spike_resets_to_reset_potential() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = LifParams {
            v_reset: -65.,
            input: InputCurrent::noise(NoiseConfig { mean: 2.5, sigma: 3. }),
            ..LifParams::default_impl()
        };

        let results = run_static_input(&params, -70., ITERATIONS, &mut rng);

        assert!(results.iter().any(|i| i.spiked));
        for result in results.iter() {
            if result.spiked {
                assert_eq!(result.voltage, params.v_reset);
            }
            assert!(result.voltage < params.v_th);
        }
    }

    #[test]
    pub fn test_threshold_below_reset_spikes_every_step() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = LifParams {
            v_th: -80.,
            v_reset: -70.,
            input: InputCurrent::constant(0.),
            ..LifParams::default_impl()
        };

        let results = run_static_input(&params, -70., 100, &mut rng);

        assert!(results.iter().all(|i| i.spiked && i.voltage == -70.));
    }

    #[test]
    pub fn test_single_step_forces() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = constant_params(2.);

        let result = step_lif(-60., 12., &params, &mut rng);

        assert_eq!(result.forces.leak, -10.);
        assert_eq!(result.forces.drive, 20.);
        assert_eq!(result.forces.net, 10.);
        assert_eq!(result.applied_current, 2.);
        assert!((result.voltage - (-59.9)).abs() < 1e-4);
        assert!((result.time - 12.1).abs() < 1e-4);
        assert!(!result.spiked);

        assert_eq!(get_forces(-60., 2., &params), result.forces);
    }

    #[test]
    pub fn test_pulse_current() {
        let pulse = PulseConfig { interval: 50., width: 10., amplitude: 3. };

        assert_eq!(pulse.current_at(0.), 3.);
        assert_eq!(pulse.current_at(5.), 3.);
        assert_eq!(pulse.current_at(15.), 0.);
        assert_eq!(pulse.current_at(50.), 3.);
        assert_eq!(pulse.current_at(55.), 3.);
        assert_eq!(pulse.current_at(99.), 0.);

        let degenerate = PulseConfig { interval: 0., ..pulse };
        assert_eq!(degenerate.current_at(5.), 0.);
    }

    #[test]
    pub fn test_pulse_input_only_spikes_during_pulses() {
        let mut rng = StdRng::seed_from_u64(0);
        let pulse = PulseConfig { interval: 100., width: 40., amplitude: 4. };
        let params = LifParams {
            input: InputCurrent::pulse(pulse),
            ..LifParams::default_impl()
        };

        let results = run_static_input(&params, -70., ITERATIONS, &mut rng);

        assert!(results.iter().any(|i| i.spiked));
        for result in results.iter().filter(|i| i.spiked) {
            assert_eq!(result.applied_current, 4.);
        }
    }

    #[test]
    pub fn test_sine_current() {
        let sine = SineConfig { frequency: 10., amplitude: 3. };

        assert!(sine.current_at(0.).abs() < 1e-6);
        // a quarter period of 10 Hz is 25 ms
        assert!((sine.current_at(25.) - 3.).abs() < 1e-4);
        assert!((sine.current_at(75.) + 3.).abs() < 1e-4);
    }

    #[test]
    pub fn test_noise_current_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = InputCurrent::noise(NoiseConfig { mean: 1.5, sigma: 1. });

        let samples: Vec<f32> = (0..20_000).map(|_| input.current_at(0., &mut rng)).collect();
        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        let variance = samples.iter()
            .map(|i| (i - mean).powf(2.))
            .sum::<f32>() / samples.len() as f32;

        assert!((mean - 1.5).abs() < 0.05);
        assert!((variance.sqrt() - 1.).abs() < 0.05);

        let silent = InputCurrent::noise(NoiseConfig { mean: 1.5, sigma: 0. });
        assert_eq!(silent.current_at(0., &mut rng), 1.5);
    }

    #[test]
    pub fn test_input_constructors_select_mode() {
        assert_eq!(InputCurrent::constant(1.).mode, InputMode::Constant);
        assert_eq!(InputCurrent::pulse(PulseConfig::default()).mode, InputMode::Pulse);
        assert_eq!(InputCurrent::noise(NoiseConfig::default()).mode, InputMode::Noise);
        assert_eq!(InputCurrent::sine(SineConfig::default()).mode, InputMode::Sine);
    }
}
