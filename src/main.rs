//! Bibo - 朗读音色偏好命令行
//!
//! 与设置面板相同的操作：查看/修改默认音色、按书籍覆盖音色、解析实际音色

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use bibo::application::{
    GetPreferences, GetVoice, ListVoices, RemoveBookVoice, ResetPreferences, ResolveVoice,
    SetBookVoice, SetDefaultVoice,
};
use bibo::config::{load_config_from_path, print_config, LogConfig};
use bibo::infrastructure::AppState;

/// Bibo narration voice preferences
#[derive(Parser)]
#[command(author, version)]
struct Args {
    /// Path to a configuration file (.toml)
    /// If unset searches config.toml / config.local.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all available voices
    Voices,
    /// Show a single voice
    Voice { voice_id: String },
    /// Show current preferences
    Show,
    /// Resolve the narration voice for a book
    Resolve { book_id: String },
    /// Set the default narration voice
    SetDefault { voice_id: String },
    /// Set the narration voice for a single book
    SetBook { book_id: String, voice_id: String },
    /// Remove the narration voice override for a book
    RemoveBook { book_id: String },
    /// Restore default preferences
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);
    print_config(&config);

    let state = AppState::from_config(&config);
    if !state.store.is_persistent() {
        tracing::warn!("Voice preferences are not persisted in this environment");
    }

    match args.command {
        Command::Voices => print_json(&state.list_voices_handler.handle(ListVoices)?),
        Command::Voice { voice_id } => {
            print_json(&state.get_voice_handler.handle(GetVoice { voice_id })?)
        }
        Command::Show => print_json(&state.get_preferences_handler.handle(GetPreferences)?),
        Command::Resolve { book_id } => {
            print_json(&state.resolve_voice_handler.handle(ResolveVoice { book_id })?)
        }
        Command::SetDefault { voice_id } => print_json(
            &state
                .set_default_voice_handler
                .handle(SetDefaultVoice { voice_id })?,
        ),
        Command::SetBook { book_id, voice_id } => print_json(
            &state
                .set_book_voice_handler
                .handle(SetBookVoice { book_id, voice_id })?,
        ),
        Command::RemoveBook { book_id } => print_json(
            &state
                .remove_book_voice_handler
                .handle(RemoveBookVoice { book_id })?,
        ),
        Command::Reset => print_json(
            &state
                .reset_preferences_handler
                .handle(ResetPreferences)?,
        ),
    }
}

/// 初始化日志，输出到 stderr，stdout 只留给命令结果
fn init_logging(log: &LogConfig) {
    let log_filter = format!("warn,bibo={}", log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
