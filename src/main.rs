use mri_scan_analyzer::args::{Args, Mode};
use mri_scan_analyzer::gui::app::run_gui;
use mri_scan_analyzer::headless::{analyze_path, format_result};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = Args::parse() else {
        return ExitCode::SUCCESS;
    };

    match args.mode {
        Mode::Analyze(path) => {
            println!(
                "🔬 Analyzing {} with model '{}' via {}...",
                path.display(),
                args.config.default_model,
                args.config.endpoint
            );
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("❌ Could not start async runtime: {e}");
                    return ExitCode::FAILURE;
                }
            };
            match rt.block_on(analyze_path(&path, &args.config)) {
                Ok(result) => {
                    print!("{}", format_result(&result));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("Headless analysis failed: {e}");
                    eprintln!("❌ {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Gui => {
            println!(
                "🚀 Launching MRI Scan Analyzer (endpoint {})...",
                args.config.endpoint
            );
            run_gui(args.config);
            ExitCode::SUCCESS
        }
    }
}
