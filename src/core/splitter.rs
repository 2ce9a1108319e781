use crate::{
    core::{
        demucs::{DemucsCli, Separator},
        ffmpeg::{Encoder, FfmpegCli},
    },
    error::{Result, StemError},
    io::{
        progress::{emit_split_progress, SplitProgress},
        sanitize::sanitize_filename,
    },
    paths::{final_tracks, prepare_output_dir},
    types::{SplitOptions, SplitResult, Stem},
};
use std::path::Path;
use tracing::info;

/// Separates `input_path` with demucs and encodes both stems with ffmpeg into
/// `opts.output_dir`.
pub fn split_file(input_path: impl AsRef<Path>, opts: SplitOptions) -> Result<SplitResult> {
    let separator = DemucsCli::from_options(&opts);
    let encoder = FfmpegCli::from_options(&opts);
    split_with(input_path.as_ref(), &opts.output_dir, &separator, &encoder)
}

/// Sanitize, separate, then transcode vocals and instrumental in that order.
///
/// Errors abort immediately. The sanitized copy is only removed once both
/// transcodes succeed, so a failed run leaves it on disk.
pub fn split_with<S, E>(
    input_path: &Path,
    output_dir: &Path,
    separator: &S,
    encoder: &E,
) -> Result<SplitResult>
where
    S: Separator + ?Sized,
    E: Encoder + ?Sized,
{
    emit_split_progress(SplitProgress::Stage("sanitize"));
    let input = sanitize_filename(input_path)?;

    let output_dir = prepare_output_dir(output_dir)?;

    emit_split_progress(SplitProgress::Stage("separate"));
    let tracks = separator.separate(&input.path, &output_dir)?;

    let result = final_tracks(&output_dir);

    emit_split_progress(SplitProgress::Stage("transcode_vocals"));
    transcode_track(encoder, Stem::Vocals, &tracks.vocals, &result.vocals_path)?;

    emit_split_progress(SplitProgress::Stage("transcode_instrumental"));
    transcode_track(
        encoder,
        Stem::Instrumental,
        &tracks.accompaniment,
        &result.instrumental_path,
    )?;

    emit_split_progress(SplitProgress::Stage("cleanup"));
    input.cleanup()?;

    emit_split_progress(SplitProgress::Finished);
    Ok(result)
}

fn transcode_track<E: Encoder + ?Sized>(
    encoder: &E,
    stem: Stem,
    src: &Path,
    dst: &Path,
) -> Result<()> {
    if !src.exists() {
        return Err(StemError::MissingTrack {
            stem,
            path: src.to_path_buf(),
        });
    }

    encoder.transcode(src, dst)?;
    info!("Converted {} to MP3: {}", stem.as_str(), dst.display());
    Ok(())
}
