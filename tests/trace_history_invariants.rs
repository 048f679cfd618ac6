#[cfg(test)]
mod tests {
    use neuron_labs::neuron::history::{SimulationSample, TraceHistory};


    fn sample(time: f32, spiked: bool) -> SimulationSample {
        SimulationSample {
            time,
            voltage: -70. + time,
            spiked,
            applied_current: 1.,
        }
    }

    #[test]
    pub fn test_zero_capacity_is_rejected() {
        assert!(TraceHistory::new(0).is_err());
        assert!(TraceHistory::new(1).is_ok());
    }

    #[test]
    pub fn test_capacity_is_never_exceeded() {
        let mut history = TraceHistory::new(50).unwrap();
        let mut last_oldest = f32::NEG_INFINITY;

        for i in 0..120 {
            history.push(sample(i as f32, false));

            assert!(history.len() <= history.capacity());

            let oldest = history.first().unwrap().time;
            if i >= 50 {
                assert!(oldest > last_oldest);
            }
            last_oldest = oldest;
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.first().unwrap().time, 70.);
        assert_eq!(history.last().unwrap().time, 119.);

        let times: Vec<f32> = history.iter().map(|i| i.time).collect();
        assert!(times.windows(2).all(|i| i[0] < i[1]));
    }

    #[test]
    pub fn test_snapshot_is_independent() {
        let mut history = TraceHistory::new(40).unwrap();
        for i in 0..30 {
            history.push(sample(i as f32, i % 7 == 0));
        }

        let ghost = history.snapshot();
        let expected: Vec<SimulationSample> = history.iter().copied().collect();

        for i in 30..200 {
            history.push(sample(i as f32, false));
        }

        assert_eq!(ghost.len(), 30);
        assert_eq!(ghost.samples(), expected.as_slice());

        history.clear();

        assert!(history.is_empty());
        assert_eq!(ghost.len(), 30);
        assert_eq!(ghost.samples(), expected.as_slice());
    }

    #[test]
    pub fn test_clear_keeps_capacity() {
        let mut history = TraceHistory::new(5).unwrap();
        for i in 0..10 {
            history.push(sample(i as f32, false));
        }

        history.clear();
        assert_eq!(history.capacity(), 5);
        assert!(history.first().is_none());

        for i in 0..10 {
            history.push(sample(i as f32, false));
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    pub fn test_spike_count() {
        let mut history = TraceHistory::default();
        for i in 0..100 {
            history.push(sample(i as f32, i % 10 == 0));
        }

        assert_eq!(history.spike_count(), 10);
        assert_eq!((&history).into_iter().count(), 100);
        assert_eq!(history.get(10).map(|i| i.spiked), Some(true));
    }
}
