use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub feedback_duration: Duration,
    pub pass_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            feedback_duration: Duration::from_millis(1000),
            pass_threshold: 80.0,
        }
    }
}
