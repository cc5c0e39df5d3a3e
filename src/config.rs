use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for converting MOT annotations to COCO format.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the MOT splits (train/val/test)
    #[arg(short = 'i', long = "input_path", value_parser = validate_dir)]
    pub input_path: PathBuf,

    /// Directory where one annotations.json per split is written
    #[arg(short = 'o', long = "output_path")]
    pub output_path: PathBuf,

    /// Disable the per-split progress bar
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}

// Validate that the input path is an existing directory
fn validate_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("{} is not a directory", s))
    }
}
