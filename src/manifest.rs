use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    // The tag doubles as the filename infix and the -fshader-stage= value.
    pub fn tag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ShaderJob {
    pub base_name: &'static str,
    pub stages: &'static [ShaderStage],
}

use ShaderStage::{Fragment, Vertex};

// Table order is invocation order.
pub const BUILTIN_SHADERS: &[ShaderJob] = &[
    ShaderJob {
        base_name: "builtin.material_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.ui_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.skybox_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.depth_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.ao_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.blur_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.shadowmap_directional_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.shadowmap_sampling_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.ssr_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.volumetrics_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.volumetrics_blur_shader",
        stages: &[Vertex, Fragment],
    },
    ShaderJob {
        base_name: "builtin.post_processing_effects_shader",
        stages: &[Vertex, Fragment],
    },
];

pub fn source_path(source_dir: &Path, base_name: &str, stage: ShaderStage) -> PathBuf {
    source_dir.join(format!("{}.{}.glsl", base_name, stage.tag()))
}

pub fn output_path(bin_dir: &Path, base_name: &str, stage: ShaderStage) -> PathBuf {
    bin_dir.join(format!("{}.{}.spv", base_name, stage.tag()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tags() {
        assert_eq!(ShaderStage::Vertex.tag(), "vert");
        assert_eq!(ShaderStage::Fragment.tag(), "frag");
    }

    #[test]
    fn test_builtin_table() {
        let names: Vec<_> = BUILTIN_SHADERS.iter().map(|job| job.base_name).collect();
        assert_eq!(
            names,
            [
                "builtin.material_shader",
                "builtin.ui_shader",
                "builtin.skybox_shader",
                "builtin.depth_shader",
                "builtin.ao_shader",
                "builtin.blur_shader",
                "builtin.shadowmap_directional_shader",
                "builtin.shadowmap_sampling_shader",
                "builtin.ssr_shader",
                "builtin.volumetrics_shader",
                "builtin.volumetrics_blur_shader",
                "builtin.post_processing_effects_shader",
            ]
        );

        for job in BUILTIN_SHADERS {
            assert_eq!(job.stages, &[Vertex, Fragment][..]);
        }
    }

    #[test]
    fn test_path_convention() {
        let source_dir = Path::new("./assets/shaders/source");
        let bin_dir = Path::new("./assets/shaders/bin");

        assert_eq!(
            source_path(source_dir, "builtin.material_shader", Vertex),
            Path::new("./assets/shaders/source/builtin.material_shader.vert.glsl")
        );
        assert_eq!(
            output_path(bin_dir, "builtin.material_shader", Vertex),
            Path::new("./assets/shaders/bin/builtin.material_shader.vert.spv")
        );
        assert_eq!(
            source_path(source_dir, "builtin.ui_shader", Fragment),
            Path::new("./assets/shaders/source/builtin.ui_shader.frag.glsl")
        );
        assert_eq!(
            output_path(bin_dir, "builtin.ui_shader", Fragment),
            Path::new("./assets/shaders/bin/builtin.ui_shader.frag.spv")
        );
    }
}
