use serde::{Deserialize, Serialize};

/// Settings handed to the external viewer on every mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Script or runtime the viewer surface is loaded from
    pub runtime_url: String,

    /// Let the user orbit the camera
    pub camera_controls: bool,

    /// Spin the model when idle
    pub auto_rotate: bool,

    /// Idle time before auto-rotation starts (milliseconds)
    pub auto_rotate_delay_ms: u64,

    /// Auto-rotation speed (degrees per second)
    pub rotation_per_second_deg: u32,

    /// Camera orbit restored by the reset command
    pub reset_camera_orbit: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            runtime_url: "https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js"
                .to_string(),
            camera_controls: true,
            auto_rotate: true,
            auto_rotate_delay_ms: 3000,
            rotation_per_second_deg: 30,
            reset_camera_orbit: "0deg 75deg 105%".to_string(),
        }
    }
}
