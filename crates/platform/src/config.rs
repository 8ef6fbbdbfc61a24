//! Viewer configuration, filled in by the binary from command-line flags.

use std::path::PathBuf;

use asset::FacePolicy;
use renderer::RenderSettings;

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub model_path: PathBuf,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub face_policy: FacePolicy,
    pub render: RenderSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.obj"),
            title: "Smooth-Shaded Viewer".to_owned(),
            width: 800,
            height: 600,
            face_policy: FacePolicy::Skip,
            render: RenderSettings::default(),
        }
    }
}
