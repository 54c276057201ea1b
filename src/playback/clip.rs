use std::f64::consts::PI;

/// Cursor into an externally owned, paused animation clip.
///
/// The engine owns only the playback time written through this trait, never
/// the clip's content. Implementations must clamp or tolerate any finite time.
pub trait ClipCursor {
    /// Fixed clip duration in seconds.
    fn duration_secs(&self) -> f64;
    /// Set the playback cursor, in seconds from clip start.
    fn set_time_secs(&mut self, secs: f64);
}

/// One-shot camera configuration on the external 3D scene.
pub trait SceneCamera {
    /// Apply the fixed pose. Called exactly once per session start.
    fn set_pose(&mut self, pose: &CameraPose);
}

/// Fixed camera framing, deliberately decoupled from playback scrubbing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Camera position in scene units.
    pub position: [f64; 3],
    /// Point the camera looks at.
    pub look_at: [f64; 3],
    /// Yaw applied to the scene model, in radians.
    pub model_yaw_rad: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.0, 12.0, -100.0],
            look_at: [0.0, 0.0, 0.0],
            model_yaw_rad: PI,
        }
    }
}

/// In-memory clip for tests and examples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryClip {
    /// Fixed duration in seconds.
    pub duration_secs: f64,
    /// Last written cursor time.
    pub cursor_secs: f64,
    /// Number of cursor writes observed.
    pub writes: u64,
}

impl MemoryClip {
    /// Create a clip with the given duration and cursor at 0.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            cursor_secs: 0.0,
            writes: 0,
        }
    }
}

impl ClipCursor for MemoryClip {
    fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    fn set_time_secs(&mut self, secs: f64) {
        self.cursor_secs = secs;
        self.writes += 1;
    }
}

/// In-memory camera for tests and examples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryCamera {
    /// Last applied pose, if any.
    pub pose: Option<CameraPose>,
    /// Number of pose writes observed.
    pub writes: u64,
}

impl SceneCamera for MemoryCamera {
    fn set_pose(&mut self, pose: &CameraPose) {
        self.pose = Some(*pose);
        self.writes += 1;
    }
}
