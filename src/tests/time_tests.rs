#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::Time;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.delta, Duration::default());
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();

        // Sleep to allow some time to pass
        sleep(Duration::from_millis(10));

        // Update should change the delta
        time.update();
        assert!(time.delta >= Duration::from_millis(10));
    }

    #[test]
    fn test_delta_seconds() {
        let mut time = Time::new();
        sleep(Duration::from_millis(10));
        time.update();

        assert!(time.delta_seconds() >= 0.01);
        assert!((time.delta_seconds() - time.delta.as_secs_f32()).abs() < f32::EPSILON);
    }
}
