//! Entry point for the OBJ viewer.
//! Logging + CLI flags -> ViewerConfig.

use std::path::PathBuf;

use anyhow::Result;
use asset::FacePolicy;
use platform::ViewerConfig;

fn parse_backend(val: &str) -> wgpu::Backends {
    // Accept: --gpu-backend=auto|vulkan|dx12|metal|gl
    match val.to_ascii_lowercase().as_str() {
        "auto" => wgpu::Backends::all(),
        "vulkan" | "vk" => wgpu::Backends::VULKAN,
        "dx12" | "d3d12" => wgpu::Backends::DX12,
        "metal" | "mtl" => wgpu::Backends::METAL,
        "gl" | "opengl" | "gles" => wgpu::Backends::GL,
        other => {
            log::warn!("Unknown backend '{}', falling back to auto.", other);
            wgpu::Backends::all()
        }
    }
}

fn parse_size(v: &str) -> Option<(u32, u32)> {
    let (sw, sh) = v.split_once('x').or_else(|| v.split_once('X'))?;
    Some((sw.parse().ok()?, sh.parse().ok()?))
}

/// Build the config from `--key=value` flags. A bare argument is the model path.
fn parse_args<I>(args: I) -> ViewerConfig
where
    I: IntoIterator<Item = String>,
{
    let mut config = ViewerConfig::default();

    for arg in args {
        if let Some(v) = arg.strip_prefix("--model=") {
            config.model_path = PathBuf::from(v);
        } else if let Some(v) = arg.strip_prefix("--shader=") {
            config.render.shader_path = Some(PathBuf::from(v));
        } else if let Some(v) = arg.strip_prefix("--gpu-backend=") {
            config.render.backends = parse_backend(v);
        } else if let Some(v) = arg.strip_prefix("--size=") {
            match parse_size(v) {
                Some((w, h)) => (config.width, config.height) = (w, h),
                None => log::warn!("Ignoring malformed --size='{}'", v),
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            if let Ok(w) = v.parse::<u32>() {
                config.width = w;
            }
        } else if let Some(v) = arg.strip_prefix("--height=") {
            if let Ok(h) = v.parse::<u32>() {
                config.height = h;
            }
        } else if arg == "--strict-faces" {
            config.face_policy = FacePolicy::Reject;
        } else if arg.starts_with("--") {
            log::warn!("Unknown flag '{}'", arg);
        } else {
            config.model_path = PathBuf::from(arg);
        }
    }

    config.width = config.width.max(1);
    config.height = config.height.max(1);
    config
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args(std::env::args().skip(1));
    log::info!(
        "Starting viewer. Model: {}, backend: {:?}, window_size={}x{}, faces={:?}",
        config.model_path.display(),
        config.render.backends,
        config.width,
        config.height,
        config.face_policy
    );

    platform::run_viewer(config)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ViewerConfig {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_flags() {
        let config = parse(&[]);
        assert_eq!(config.model_path, PathBuf::from("model.obj"));
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.face_policy, FacePolicy::Skip);
        assert!(config.render.shader_path.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--model=teapot.obj",
            "--shader=custom.wgsl",
            "--size=1024x768",
            "--gpu-backend=vulkan",
            "--strict-faces",
        ]);
        assert_eq!(config.model_path, PathBuf::from("teapot.obj"));
        assert_eq!(config.render.shader_path, Some(PathBuf::from("custom.wgsl")));
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.render.backends, wgpu::Backends::VULKAN);
        assert_eq!(config.face_policy, FacePolicy::Reject);
    }

    #[test]
    fn positional_argument_is_model() {
        let config = parse(&["bunny.obj", "--height=0"]);
        assert_eq!(config.model_path, PathBuf::from("bunny.obj"));
        assert_eq!(config.height, 1);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = parse(&["--size=wide", "--width=abc", "--gpu-backend=glide"]);
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.render.backends, wgpu::Backends::all());
    }
}
