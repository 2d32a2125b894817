mod tests {
    use blink_schedule::{Duration, Progression, ScheduleError, ScheduleParameters};

    const DEFAULT_SEQUENCE: [u32; 15] = [
        180, 250, 320, 390, 460, 530, 600, 670, 740, 810, 880, 950, 1020, 1090, 1160,
    ];

    fn periods(params: &ScheduleParameters) -> Vec<u32> {
        params
            .schedule()
            .unwrap()
            .map(|step| step.unwrap().period_ms)
            .collect()
    }

    fn geometric(ratio: f64) -> ScheduleParameters {
        ScheduleParameters {
            progression: Progression::Geometric,
            ratio,
            ..ScheduleParameters::DEFAULT
        }
    }

    #[test]
    fn test_default_sequence() {
        assert_eq!(periods(&ScheduleParameters::DEFAULT), DEFAULT_SEQUENCE);
    }

    #[test]
    fn test_default_converges() {
        let converged = ScheduleParameters::DEFAULT.converge().unwrap();
        assert_eq!(converged.period_ms, 1160);
        assert_eq!(converged.steps, 15);
        assert_eq!(converged.elapsed_ms, 10_050);
        assert_eq!(converged.period(), Duration::from_millis(1160));
    }

    #[test]
    fn test_elapsed_is_running_sum() {
        let mut total = 0;
        for step in ScheduleParameters::DEFAULT.schedule().unwrap() {
            let step = step.unwrap();
            total += u64::from(step.period_ms);
            assert_eq!(step.elapsed_ms, total);
        }
        assert!(total >= 10_000);
    }

    #[test]
    fn test_first_period_is_advanced() {
        let first = ScheduleParameters::DEFAULT
            .schedule()
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(first.period_ms, 110 + 70);

        let first = geometric(1.5).schedule().unwrap().next().unwrap().unwrap();
        assert_eq!(first.period_ms, 165);
    }

    #[test]
    fn test_geometric_doubling() {
        assert_eq!(periods(&geometric(2.0)), [220, 440, 880, 1760, 3520, 7040]);
    }

    #[test]
    fn test_geometric_floors_each_step() {
        assert_eq!(
            periods(&geometric(1.5)),
            [165, 247, 370, 555, 832, 1248, 1872, 2808, 4212]
        );
    }

    #[test]
    fn test_geometric_unit_ratio_terminates() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(1000),
            min_period: Duration::from_millis(300),
            ..geometric(1.0)
        };
        assert_eq!(periods(&params), [300, 300, 300, 300]);
    }

    #[test]
    fn test_zero_step_repeats_min_period() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(500),
            step: Duration::from_millis(0),
            ..ScheduleParameters::DEFAULT
        };
        assert_eq!(periods(&params), [110, 110, 110, 110, 110]);
    }

    #[test]
    fn test_single_blink_exhausts_budget() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(1),
            ..ScheduleParameters::DEFAULT
        };
        let converged = params.converge().unwrap();
        assert_eq!(converged.steps, 1);
        assert_eq!(converged.period_ms, 180);
    }

    #[test]
    fn test_schedule_is_deterministic() {
        assert_eq!(
            ScheduleParameters::DEFAULT.converge(),
            ScheduleParameters::DEFAULT.converge()
        );
        assert_eq!(periods(&geometric(1.3)), periods(&geometric(1.3)));
    }

    #[test]
    fn test_rejects_zero_min_period() {
        let params = ScheduleParameters {
            min_period: Duration::from_millis(0),
            ..ScheduleParameters::DEFAULT
        };
        assert_eq!(params.validate(), Err(ScheduleError::ZeroMinPeriod));
        assert_eq!(params.converge(), Err(ScheduleError::ZeroMinPeriod));
    }

    #[test]
    fn test_rejects_zero_total_time() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(0),
            ..ScheduleParameters::DEFAULT
        };
        assert_eq!(params.validate(), Err(ScheduleError::ZeroTotalTime));
    }

    #[test]
    fn test_rejects_shrinking_ratio() {
        assert_eq!(geometric(0.5).validate(), Err(ScheduleError::InvalidRatio));
        assert_eq!(geometric(f64::NAN).validate(), Err(ScheduleError::InvalidRatio));
        assert_eq!(
            geometric(f64::INFINITY).validate(),
            Err(ScheduleError::InvalidRatio)
        );
    }

    #[test]
    fn test_ratio_ignored_in_arithmetic_mode() {
        let params = ScheduleParameters {
            ratio: 0.5,
            ..ScheduleParameters::DEFAULT
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(u64::from(u32::MAX) + 1),
            ..ScheduleParameters::DEFAULT
        };
        assert_eq!(params.validate(), Err(ScheduleError::OutOfRange));
    }

    #[test]
    fn test_overflowing_period_stops_schedule() {
        let params = ScheduleParameters {
            total_time: Duration::from_millis(u64::from(u32::MAX)),
            min_period: Duration::from_millis(u64::from(u32::MAX / 2 + 1)),
            ..geometric(2.0)
        };
        let mut schedule = params.schedule().unwrap();
        assert_eq!(schedule.next(), Some(Err(ScheduleError::OutOfRange)));
        assert_eq!(schedule.next(), None);
        assert_eq!(params.converge(), Err(ScheduleError::OutOfRange));
    }
}
