// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Arguments injected by the invoking build environment.
#[derive(Parser, Debug)]
#[command(
    name = "gen_version",
    version = crate::VERSION,
    about = "Version.h を library.json と同期するプリビルドツール"
)]
pub struct Args {
    /// プロジェクトルート ($PROJECT_DIR、カレントディレクトリの順にフォールバック)
    pub project_dir: Option<PathBuf>,
}
