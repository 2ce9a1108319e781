//! # stem-splitter-mp3
//!
//! Splits a song into vocal and instrumental MP3 stems by driving two
//! external tools: `demucs` for the two-stem separation and `ffmpeg` for
//! the WAV to MP3 encode.

pub mod core;
pub mod error;
pub mod io;
pub mod paths;
pub mod types;
pub mod utils;

pub use crate::{
    core::{
        demucs::{DemucsCli, Separator},
        ffmpeg::{Encoder, FfmpegCli},
        splitter::{split_file, split_with},
    },
    error::{Result, StemError},
    io::{
        progress::{set_split_progress_callback, SplitProgress},
        sanitize::{sanitize_filename, SanitizedInput},
    },
    types::{SeparatedTracks, SplitOptions, SplitResult, Stem},
};
