//! Adapter for the `demucs` command-line separator.
//!
//! Everything this crate assumes about demucs lives here: its flag set and
//! the directory layout it writes to. A demucs release that changes either
//! only needs this file updated.

use crate::{
    core::command::{hidden_command, run_captured},
    error::{Result, StemError},
    paths::track_name,
    types::{SeparatedTracks, SplitOptions, DEFAULT_MODEL},
};
use std::path::{Path, PathBuf};
use tracing::info;

pub const TARGET_STEM: &str = "vocals";
pub const VOCALS_WAV: &str = "vocals.wav";
pub const ACCOMPANIMENT_WAV: &str = "accompaniment.wav";

/// Runs a two-stem separation and reports where the tracks should be.
pub trait Separator {
    /// Separates `input` into `output_dir`. The returned paths are the tool's
    /// documented output locations; they are not checked for existence.
    fn separate(&self, input: &Path, output_dir: &Path) -> Result<SeparatedTracks>;
}

#[derive(Clone, Debug)]
pub struct DemucsCli {
    pub program: String,
    pub model: String,
}

impl Default for DemucsCli {
    fn default() -> Self {
        Self {
            program: crate::utils::demucs_program(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl DemucsCli {
    pub fn new(program: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            model: model.into(),
        }
    }

    pub fn from_options(opts: &SplitOptions) -> Self {
        Self::new(&opts.demucs_program, &opts.model_name)
    }

    /// `--two-stems vocals --model <model> -o <output_dir> <input>`
    pub fn args(&self, input: &Path, output_dir: &Path) -> Vec<std::ffi::OsString> {
        vec![
            "--two-stems".into(),
            TARGET_STEM.into(),
            "--model".into(),
            self.model.clone().into(),
            "-o".into(),
            output_dir.into(),
            input.into(),
        ]
    }

    /// `<output_dir>/<model>/<input file stem>`
    pub fn track_dir(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        Ok(output_dir.join(&self.model).join(track_name(input)?))
    }

    pub fn expected_tracks(&self, input: &Path, output_dir: &Path) -> Result<SeparatedTracks> {
        let dir = self.track_dir(input, output_dir)?;
        Ok(SeparatedTracks {
            vocals: dir.join(VOCALS_WAV),
            accompaniment: dir.join(ACCOMPANIMENT_WAV),
        })
    }
}

impl Separator for DemucsCli {
    fn separate(&self, input: &Path, output_dir: &Path) -> Result<SeparatedTracks> {
        // Resolve the layout first so a bad input path fails before launching.
        let tracks = self.expected_tracks(input, output_dir)?;

        let mut cmd = hidden_command(&self.program);
        cmd.args(self.args(input, output_dir));

        let out = run_captured("Demucs", &mut cmd)?;
        if !out.success() {
            out.report_failure("Demucs");
            return Err(StemError::Separation {
                code: out.code(),
                stdout: out.stdout,
                stderr: out.stderr,
            });
        }

        info!("Separation completed by Demucs.");
        Ok(tracks)
    }
}
