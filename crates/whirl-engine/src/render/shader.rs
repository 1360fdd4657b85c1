//! Shader-stage compilation with non-fatal diagnostics.
//!
//! Broken shader source is a recoverable condition at this layer: the
//! diagnostic is logged to stderr and the (unusable) module handle is
//! returned anyway, so pipeline creation proceeds and the process keeps
//! running. Fatal environment problems stay on the `anyhow` startup path;
//! the two policies must not be mixed.

/// Upper bound, in bytes, on a reported shader info log.
const MAX_DIAGNOSTIC_LEN: usize = 512;

/// Non-fatal shader compilation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDiagnostic {
    pub label: &'static str,
    pub message: String,
}

impl ShaderDiagnostic {
    fn new(label: &'static str, raw: &str) -> Self {
        Self {
            label,
            message: truncate_diagnostic(raw),
        }
    }
}

/// Compiles a WGSL module, reporting validation failures without aborting.
///
/// The returned module is valid to hand to pipeline creation either way; a
/// module that failed validation simply produces a pipeline that renders
/// nothing useful.
pub fn compile(
    device: &wgpu::Device,
    label: &'static str,
    wgsl: &str,
) -> (wgpu::ShaderModule, Option<ShaderDiagnostic>) {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(wgsl.into()),
    });

    let diagnostic = pollster::block_on(error_scope.pop()).map(|err| {
        let d = ShaderDiagnostic::new(label, &err.to_string());
        log::error!("shader compilation failed ({}): {}", d.label, d.message);
        d
    });

    (module, diagnostic)
}

/// Truncates `raw` to [`MAX_DIAGNOSTIC_LEN`] bytes on a char boundary.
fn truncate_diagnostic(raw: &str) -> String {
    if raw.len() <= MAX_DIAGNOSTIC_LEN {
        return raw.to_string();
    }

    let mut end = MAX_DIAGNOSTIC_LEN;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    raw[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_diagnostics_pass_through() {
        let d = ShaderDiagnostic::new("vs", "expected ';'");
        assert_eq!(d.message, "expected ';'");
    }

    #[test]
    fn long_diagnostics_are_bounded() {
        let raw = "e".repeat(MAX_DIAGNOSTIC_LEN * 3);
        let d = ShaderDiagnostic::new("vs", &raw);
        assert_eq!(d.message.len(), MAX_DIAGNOSTIC_LEN);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multibyte char straddling the cut point must not split.
        let mut raw = "a".repeat(MAX_DIAGNOSTIC_LEN - 1);
        raw.push_str("日本語");
        let d = ShaderDiagnostic::new("fs", &raw);
        assert!(d.message.len() <= MAX_DIAGNOSTIC_LEN);
        assert!(d.message.is_char_boundary(d.message.len()));
    }
}
