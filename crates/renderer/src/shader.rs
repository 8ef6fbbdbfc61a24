//! WGSL loading and compile checking.

use std::{borrow::Cow, fs, path::Path};

use anyhow::{Context, Result, bail};
use wgpu::{Device, ErrorFilter, ShaderModule, ShaderModuleDescriptor, ShaderSource};

/// Built-in shader, used when no file is given.
pub const BUILTIN_WGSL: &str = include_str!("shaders/mesh.wgsl");

/// Entry points every shader must provide.
pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Read a WGSL file, or fall back to [`BUILTIN_WGSL`].
pub fn load_wgsl(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        None => Ok(Cow::Borrowed(BUILTIN_WGSL)),
        Some(path) => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("Failed to read shader file: {}", path.display()))?;
            log::info!("Loaded shader {} ({} bytes)", path.display(), src.len());
            Ok(Cow::Owned(src))
        }
    }
}

/// Compile WGSL inside a validation error scope so a bad shader is reported
/// instead of hitting wgpu's uncaptured-error panic.
pub async fn compile_wgsl(device: &Device, label: &str, source: &str) -> Result<ShaderModule> {
    device.push_error_scope(ErrorFilter::Validation);
    let module = device.create_shader_module(ShaderModuleDescriptor {
        label: Some(label),
        source: ShaderSource::Wgsl(Cow::Borrowed(source)),
    });
    if let Some(err) = device.pop_error_scope().await {
        log::error!("SHADER COMPILATION FAILED ({label}):\n{err}");
        bail!("shader '{label}' failed to compile");
    }
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shader_has_entry_points() {
        let src = load_wgsl(None).unwrap();
        assert!(src.contains(&format!("fn {VS_ENTRY}")));
        assert!(src.contains(&format!("fn {FS_ENTRY}")));
    }

    #[test]
    fn shader_file_is_read() {
        let path = std::env::temp_dir().join(format!("objview-shader-{}.wgsl", std::process::id()));
        fs::write(&path, "// custom").unwrap();
        let src = load_wgsl(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(src.unwrap(), "// custom");
    }

    #[test]
    fn missing_shader_file_is_an_error() {
        let err = load_wgsl(Some(Path::new("no/such/shader.wgsl"))).unwrap_err();
        assert!(err.to_string().contains("shader.wgsl"));
    }
}
