use crate::{
    core::command::{hidden_command, run_captured},
    error::{Result, StemError},
    types::{SplitOptions, DEFAULT_CODEC, DEFAULT_QUALITY},
};
use std::{ffi::OsString, path::Path};
use tracing::info;

pub trait Encoder {
    /// Encodes `src` into `dst`. Success means the tool exited 0; `dst` is not
    /// inspected afterwards.
    fn transcode(&self, src: &Path, dst: &Path) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct FfmpegCli {
    pub program: String,
    pub codec: String,
    pub quality: u8,
    /// Passes `-y` so an existing `dst` is replaced instead of failing.
    pub overwrite: bool,
}

impl Default for FfmpegCli {
    fn default() -> Self {
        Self {
            program: crate::utils::ffmpeg_program(),
            codec: DEFAULT_CODEC.into(),
            quality: DEFAULT_QUALITY,
            overwrite: false,
        }
    }
}

impl FfmpegCli {
    pub fn from_options(opts: &SplitOptions) -> Self {
        Self {
            program: opts.ffmpeg_program.clone(),
            codec: opts.codec.clone(),
            quality: opts.quality,
            overwrite: opts.overwrite,
        }
    }

    /// `[-y] -i <src> -acodec <codec> -qscale:a <quality> <dst>`
    pub fn args(&self, src: &Path, dst: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(8);
        if self.overwrite {
            args.push("-y".into());
        }
        let rest: [OsString; 7] = [
            "-i".into(),
            src.into(),
            "-acodec".into(),
            self.codec.clone().into(),
            "-qscale:a".into(),
            self.quality.to_string().into(),
            dst.into(),
        ];
        args.extend(rest);
        args
    }
}

impl Encoder for FfmpegCli {
    fn transcode(&self, src: &Path, dst: &Path) -> Result<()> {
        let mut cmd = hidden_command(&self.program);
        cmd.args(self.args(src, dst));

        let out = run_captured("FFmpeg", &mut cmd)?;
        if !out.success() {
            out.report_failure("FFmpeg");
            return Err(StemError::Transcode {
                input: src.to_path_buf(),
                code: out.code(),
                stdout: out.stdout,
                stderr: out.stderr,
            });
        }

        info!(
            "FFmpeg conversion successful for {} to {}",
            src.display(),
            dst.display()
        );
        Ok(())
    }
}
