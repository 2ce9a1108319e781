use anyhow::Context;
use clap::{error::ErrorKind, ArgAction, Parser};
use std::{path::PathBuf, process::ExitCode};
use stem_splitter_mp3::{
    set_split_progress_callback, split_file, types::DEFAULT_MODEL, SplitOptions, SplitProgress,
    SplitResult,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stem-splitter")]
#[command(about = "Split a song into vocals.mp3 and instrumental.mp3 using demucs and ffmpeg", long_about = None)]
#[command(version)]
struct Cli {
    /// Audio file to separate
    input: PathBuf,

    /// Directory that receives vocals.mp3 and instrumental.mp3
    output: PathBuf,

    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// demucs executable (defaults to $STEM_SPLITTER_DEMUCS, then `demucs`)
    #[arg(long)]
    demucs: Option<String>,

    /// ffmpeg executable (defaults to $STEM_SPLITTER_FFMPEG, then `ffmpeg`)
    #[arg(long)]
    ffmpeg: Option<String>,

    /// Replace existing MP3 files in the output directory
    #[arg(short = 'y', long)]
    overwrite: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(&cli);

    match handle_split(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_split(cli: &Cli) -> anyhow::Result<()> {
    let mut opts = SplitOptions {
        output_dir: cli.output.clone(),
        model_name: cli.model.clone(),
        overwrite: cli.overwrite,
        ..SplitOptions::default()
    };
    if let Some(demucs) = &cli.demucs {
        opts.demucs_program = demucs.clone();
    }
    if let Some(ffmpeg) = &cli.ffmpeg {
        opts.ffmpeg_program = ffmpeg.clone();
    }

    if !cli.quiet && !cli.json {
        setup_progress_callback();

        eprintln!("🎵 Stem Splitter");
        eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        eprintln!("Input:  {}", cli.input.display());
        eprintln!("Output: {}", cli.output.display());
        eprintln!("Model:  {}", opts.model_name);
        eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        eprintln!();
    }

    let result = split_file(&cli.input, opts)?;
    report(cli, &result)
}

fn report(cli: &Cli, result: &SplitResult) -> anyhow::Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(result).context("Failed to encode result")?;
        println!("{json}");
    } else if cli.quiet {
        println!("{}", result.vocals_path.display());
        println!("{}", result.instrumental_path.display());
    } else {
        eprintln!();
        eprintln!("✅ Audio separation and conversion process completed successfully.");
        eprintln!();
        eprintln!("Output files:");
        eprintln!("  🎤 Vocals:       {}", result.vocals_path.display());
        eprintln!("  🎹 Instrumental: {}", result.instrumental_path.display());
    }
    Ok(())
}

fn setup_progress_callback() {
    set_split_progress_callback(|progress| match progress {
        SplitProgress::Stage(stage) => {
            let stage_name = match stage {
                "sanitize" => "Checking input file name",
                "separate" => "Separating vocals (demucs)",
                "transcode_vocals" => "Encoding vocals",
                "transcode_instrumental" => "Encoding instrumental",
                "cleanup" => "Cleaning up",
                _ => stage,
            };
            eprintln!("⏳ {}", stage_name);
        }
        SplitProgress::Finished => {
            // Summary is printed by the caller
        }
    });
}
