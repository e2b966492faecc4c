use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct ZipshCLI {
    /// The zip archive to browse
    pub image_path: PathBuf,

    /// Play back the commands of a script instead of reading the console
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// User name shown in the prompt and by `pwd`
    #[arg(long)]
    pub user: Option<String>,

    /// Host name shown in the prompt
    #[arg(long)]
    pub host: Option<String>,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ZipshCLI {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
