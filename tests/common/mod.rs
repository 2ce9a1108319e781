#![allow(dead_code)]

use std::{
    cell::RefCell,
    f32::consts::PI,
    fs,
    path::{Path, PathBuf},
};

use stem_splitter_mp3::{DemucsCli, Encoder, Result, SeparatedTracks, Separator, StemError};

/// Writes a short stereo sine WAV so inputs are real audio files.
pub fn write_test_wav(path: &Path) {
    let sr = 44_100u32;
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: sr,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut w = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..2000 {
        let t = i as f32 / sr as f32;
        let s = ((2.0 * PI * 440.0 * t).sin() * 0.2 * i16::MAX as f32) as i16;
        w.write_sample(s).unwrap();
        w.write_sample(s).unwrap();
    }
    w.finalize().unwrap();
}

/// Which intermediate tracks a [`FakeSeparator`] leaves behind.
#[derive(Clone, Copy)]
pub enum Outcome {
    Both,
    OnlyVocals,
    OnlyAccompaniment,
    Nothing,
    Fail(i32),
}

/// Separator double that uses the real demucs layout but writes the files itself.
pub struct FakeSeparator {
    pub layout: DemucsCli,
    pub outcome: Outcome,
    pub calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeSeparator {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            layout: DemucsCli::new("demucs", "demucs_quantized"),
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Separator for FakeSeparator {
    fn separate(&self, input: &Path, output_dir: &Path) -> Result<SeparatedTracks> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), output_dir.to_path_buf()));

        let tracks = self.layout.expected_tracks(input, output_dir)?;
        let (vocals, accompaniment) = match self.outcome {
            Outcome::Fail(code) => {
                return Err(StemError::Separation {
                    code: Some(code),
                    stdout: String::new(),
                    stderr: "model exploded".into(),
                })
            }
            Outcome::Both => (true, true),
            Outcome::OnlyVocals => (true, false),
            Outcome::OnlyAccompaniment => (false, true),
            Outcome::Nothing => (false, false),
        };

        fs::create_dir_all(tracks.vocals.parent().unwrap())?;
        if vocals {
            fs::copy(input, &tracks.vocals)?;
        }
        if accompaniment {
            fs::copy(input, &tracks.accompaniment)?;
        }
        Ok(tracks)
    }
}

/// Encoder double that copies `src` to `dst` and records every call.
#[derive(Default)]
pub struct RecordingEncoder {
    /// Zero-based call index that should fail, if any.
    pub fail_on: Option<usize>,
    pub calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl Encoder for RecordingEncoder {
    fn transcode(&self, src: &Path, dst: &Path) -> Result<()> {
        let idx = self.calls.borrow().len();
        self.calls
            .borrow_mut()
            .push((src.to_path_buf(), dst.to_path_buf()));

        if self.fail_on == Some(idx) {
            return Err(StemError::Transcode {
                input: src.to_path_buf(),
                code: Some(1),
                stdout: String::new(),
                stderr: "encoder broke".into(),
            });
        }
        fs::copy(src, dst)?;
        Ok(())
    }
}

#[cfg(unix)]
pub mod scripts {
    use std::{
        fs,
        os::unix::fs::PermissionsExt,
        path::{Path, PathBuf},
    };

    /// Mimics `demucs --two-stems vocals --model M -o OUT IN`.
    pub const FAKE_DEMUCS: &str = r#"#!/bin/sh
model="$4"
out="$6"
in="$7"
name=$(basename "$in")
name="${name%.*}"
mkdir -p "$out/$model/$name"
cp "$in" "$out/$model/$name/vocals.wav"
cp "$in" "$out/$model/$name/accompaniment.wav"
echo "$@" > "$out/demucs-args.txt"
echo "Separated tracks will be stored in $out/$model"
"#;

    pub const FAILING_DEMUCS: &str = r#"#!/bin/sh
echo "loading model"
echo "CUDA out of memory" >&2
exit 3
"#;

    /// Mimics `ffmpeg [-y] -i IN ... OUT` by copying IN to OUT.
    pub const FAKE_FFMPEG: &str = r#"#!/bin/sh
log="$(dirname "$0")/ffmpeg-calls.txt"
echo "$@" >> "$log"
while [ $# -gt 0 ]; do
  case "$1" in
    -i) src="$2"; shift 2 ;;
    *) dst="$1"; shift ;;
  esac
done
cp "$src" "$dst"
"#;

    pub const FAILING_FFMPEG: &str = r#"#!/bin/sh
log="$(dirname "$0")/ffmpeg-calls.txt"
echo "$@" >> "$log"
echo "Unknown encoder" >&2
exit 1
"#;

    pub fn install(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn ffmpeg_calls(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("ffmpeg-calls.txt"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
