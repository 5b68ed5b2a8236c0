use std::time::Duration;

pub struct Settings {
    pub frame_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            frame_interval: Duration::from_millis(33),
        }
    }
}
