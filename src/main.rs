use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use mot2coco::{Args, MotToCoco};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!(
        "Converting MOT annotations from {} to {}",
        args.input_path.display(),
        args.output_path.display()
    );

    let converter =
        MotToCoco::new(&args.input_path, &args.output_path).with_progress(!args.no_progress);
    match converter.convert() {
        Ok(()) => {
            info!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
