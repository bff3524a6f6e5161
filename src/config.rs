use std::path::PathBuf;

pub const DEFAULT_QUIZ_DIR: &str = "quizzes";
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bank passed on the command line; skips the picker.
    pub quiz_file: Option<PathBuf>,
    pub quiz_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env_and_args() -> Self {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var("QUIZ_DIR").ok(),
            std::env::var("QUIZ_LOG").ok(),
        )
    }

    pub fn from_parts(
        mut args: impl Iterator<Item = String>,
        quiz_dir: Option<String>,
        log_file: Option<String>,
    ) -> Self {
        Self {
            quiz_file: args.next().map(PathBuf::from),
            quiz_dir: PathBuf::from(
                quiz_dir
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_QUIZ_DIR.to_string()),
            ),
            log_file: PathBuf::from(
                log_file
                    .filter(|f| !f.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            ),
        }
    }
}
