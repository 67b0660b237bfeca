use crate::analysis::ModelId;
use crate::config::AppConfig;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Gui,
    Analyze(PathBuf),
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub config: AppConfig,
}

impl Args {
    pub fn parse() -> Option<Self> {
        Self::parse_from(env::args().skip(1))
    }

    /// Parses flags (program name already stripped). `None` means help or
    /// version was printed, or the flags were invalid.
    pub fn parse_from<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut mode: Option<Mode> = None;
        let mut config = AppConfig::default();

        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!("MRI Scan Analyzer v{}", env!("APP_VERSION_DISPLAY"));
                return None;
            } else if arg == "--gui" {
                mode = Some(Mode::Gui);
            } else if let Some(path) = arg.strip_prefix("--analyze=") {
                if path.is_empty() {
                    eprintln!("❌ --analyze needs a file path");
                    return None;
                }
                mode = Some(Mode::Analyze(PathBuf::from(path)));
            } else if let Some(val) = arg.strip_prefix("--model=") {
                match val.parse::<ModelId>() {
                    Ok(model) => config.default_model = model,
                    Err(e) => {
                        eprintln!("❌ {e}");
                        return None;
                    }
                }
            } else if let Some(url) = arg.strip_prefix("--endpoint=") {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    eprintln!("❌ Invalid endpoint '{url}', expected an http(s) URL");
                    return None;
                }
                config.endpoint = url.to_string();
            } else {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            }
        }

        Some(Args {
            mode: mode.unwrap_or(Mode::Gui),
            config,
        })
    }
}

fn print_help() {
    println!("🧠 MRI Scan Analyzer");
    println!();
    println!("USAGE:");
    println!("    mri-scan-analyzer [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)          Launch GUI interface");
    println!("    --gui               Launch GUI interface");
    println!("    --analyze=<PATH>    Analyze one image without a window and print the result");
    println!("    --model=<ID>        Model to use: baseline, inception or unet (default: baseline)");
    println!("    --endpoint=<URL>    Prediction endpoint (default: http://localhost:8000/predict)");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG            Log filter, e.g. RUST_LOG=debug (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    mri-scan-analyzer");
    println!("    mri-scan-analyzer --model=inception");
    println!("    mri-scan-analyzer --analyze=scan.jpg --model=unet");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Args> {
        Args::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_flags_launches_gui_with_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.mode, Mode::Gui);
        assert_eq!(args.config, AppConfig::default());
    }

    #[test]
    fn test_analyze_with_model_and_endpoint() {
        let args = parse(&[
            "--analyze=scans/a.jpg",
            "--model=unet",
            "--endpoint=http://10.0.0.5:9000/predict",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Analyze(PathBuf::from("scans/a.jpg")));
        assert_eq!(args.config.default_model, ModelId::Unet);
        assert_eq!(args.config.endpoint, "http://10.0.0.5:9000/predict");
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        assert!(parse(&["--model=resnet"]).is_none());
        assert!(parse(&["--endpoint=localhost:8000"]).is_none());
        assert!(parse(&["--analyze="]).is_none());
        assert!(parse(&["--bogus"]).is_none());
    }
}
