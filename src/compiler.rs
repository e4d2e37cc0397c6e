use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use log::info;
use thiserror::Error;

use crate::manifest::{self, ShaderJob, ShaderStage};

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("could not invoke the shader compiler for {name}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct Glslc {
    program: OsString,
    source_dir: PathBuf,
    bin_dir: PathBuf,
}

impl Default for Glslc {
    fn default() -> Self {
        Glslc {
            program: OsString::from("glslc"),
            source_dir: PathBuf::from("./assets/shaders/source"),
            bin_dir: PathBuf::from("./assets/shaders/bin"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub args: Vec<OsString>,
}

#[derive(Debug)]
pub struct StageOutput {
    pub stdout: String,
    pub stderr: String,
}

impl Glslc {
    pub fn invocation(&self, job: &ShaderJob, stage: ShaderStage) -> Invocation {
        let name = format!("{}.{}", job.base_name, stage.tag());
        let source_path = manifest::source_path(&self.source_dir, job.base_name, stage);
        let output_path = manifest::output_path(&self.bin_dir, job.base_name, stage);

        let args = vec![
            OsString::from("-g"),
            OsString::from(format!("-fshader-stage={}", stage.tag())),
            source_path.clone().into_os_string(),
            OsString::from("-o"),
            output_path.clone().into_os_string(),
        ];

        Invocation {
            name,
            source_path,
            output_path,
            args,
        }
    }

    pub fn invocations(&self, jobs: &[ShaderJob]) -> Vec<Invocation> {
        jobs.iter()
            .flat_map(|job| job.stages.iter().map(move |&stage| self.invocation(job, stage)))
            .collect()
    }

    fn compile_stage(&self, invocation: &Invocation) -> Result<StageOutput, CompileError> {
        info!("compiling {}.glsl", invocation.name);

        let output = Command::new(&self.program)
            .args(&invocation.args)
            .output()
            .map_err(|source| CompileError::Spawn {
                name: invocation.name.clone(),
                source,
            })?;

        // Exit status is not inspected; whatever the compiler printed is the
        // whole report.
        Ok(StageOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    pub fn run(&self, jobs: &[ShaderJob]) -> Result<(), CompileError> {
        for invocation in self.invocations(jobs) {
            let output = self.compile_stage(&invocation)?;
            if !output.stdout.is_empty() {
                println!("{}", output.stdout);
            }
            if !output.stderr.is_empty() {
                println!("{}", output.stderr);
            }
        }

        println!("finished");
        Ok(())
    }
}
