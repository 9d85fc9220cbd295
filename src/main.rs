// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line front end for the draft operations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jianying_draft::models::content::Position;
use jianying_draft::models::settings::{FrameRate, Resolution};
use jianying_draft::{
    add_audio_to_draft, add_image_or_video_to_draft, create_draft, verify_draft, DraftConfig,
    NewDraft, VisualKind, VisualPlacement,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Create and extend JianyingPro drafts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Default draft root (overrides the config file)
    #[arg(long = "draft-root", value_name = "DIR", global = true)]
    draft_root: Option<PathBuf>,

    /// Refresh modifyTime whenever a draft is changed
    #[arg(long = "touch", global = true)]
    touch_modify_time: bool,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new draft and print its id and folder
    Create {
        /// Folder that holds drafts (falls back to the default root)
        #[arg(value_name = "DRAFT_ROOT")]
        root: Option<PathBuf>,

        #[arg(short = 'n', long = "name", default_value = "未命名项目")]
        name: String,

        /// Main video of the project
        #[arg(long = "video", default_value = "")]
        video: String,

        /// Project duration in seconds, (0.1, 3600]
        #[arg(short = 'd', long = "duration", default_value_t = 10.0)]
        duration: f64,

        /// One of 1920x1080, 1280x720, 854x480, 1080x1920, 720x1280
        #[arg(short = 'r', long = "resolution", default_value = "1920x1080")]
        resolution: Resolution,

        /// One of 24, 30, 60
        #[arg(long = "fps", default_value = "30")]
        fps: FrameRate,
    },

    /// Append an audio track matching the longest video
    AddAudio {
        #[arg(value_name = "DRAFT_FOLDER")]
        folder: String,

        #[arg(value_name = "AUDIO")]
        audio: String,

        /// Volume in [0.0, 1.0]
        #[arg(long = "volume", default_value_t = 1.0)]
        volume: f64,
    },

    /// Append an image or video track
    AddMedia {
        #[arg(value_name = "DRAFT_FOLDER")]
        folder: String,

        #[arg(value_name = "MEDIA")]
        media: String,

        /// image or video
        #[arg(short = 'k', long = "kind", default_value = "video")]
        kind: VisualKind,

        #[arg(long = "start", default_value_t = 0.0)]
        start: f64,

        #[arg(short = 'd', long = "duration", default_value_t = 5.0)]
        duration: f64,

        #[arg(long = "x", default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long = "y", default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        #[arg(long = "scale", default_value_t = 1.0)]
        scale: f64,
    },

    /// Check that clips, materials and draft_materials agree
    Check {
        #[arg(value_name = "DRAFT_FOLDER")]
        folder: String,
    },
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn load_config(args: &Args) -> Result<DraftConfig> {
    let mut config = match &args.config {
        Some(path) => DraftConfig::load(path)?,
        None => DraftConfig::default(),
    };
    if let Some(root) = &args.draft_root {
        config.draft_root = root.clone();
    }
    if args.touch_modify_time {
        config.touch_modify_time = true;
    }
    Ok(config)
}

/// Print a mutation status pair; an empty folder means failure.
fn report(status: (String, String)) -> ExitCode {
    let (folder, message) = status;
    if folder.is_empty() {
        eprintln!("{}", message);
        ExitCode::FAILURE
    } else {
        println!("{}\n{}", folder, message);
        ExitCode::SUCCESS
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbosity);
    log::debug!("Command-line args: {:?}", args);

    let config = load_config(&args)?;

    let code = match args.command {
        Command::Create {
            root,
            name,
            video,
            duration,
            resolution,
            fps,
        } => {
            let params = NewDraft {
                project_name: name,
                video_path: video,
                duration,
                resolution,
                fps,
            };
            let created = create_draft(root.as_deref(), &params, &config)?;
            println!("{}\n{}", created.draft_id, created.folder.display());
            ExitCode::SUCCESS
        }
        Command::AddAudio {
            folder,
            audio,
            volume,
        } => report(add_audio_to_draft(&folder, &audio, volume, &config)),
        Command::AddMedia {
            folder,
            media,
            kind,
            start,
            duration,
            x,
            y,
            scale,
        } => {
            let placement = VisualPlacement {
                kind,
                start_time: start,
                duration,
                position: Position { x, y },
                scale,
            };
            report(add_image_or_video_to_draft(&folder, &media, &placement, &config))
        }
        Command::Check { folder } => match verify_draft(&folder) {
            Ok(issues) if issues.is_empty() => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Ok(issues) => {
                for issue in issues {
                    println!("{}", issue);
                }
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
    };

    Ok(code)
}
