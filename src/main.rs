use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

const USAGE: &str = "Usage: conekit <params.json> [output-dir] [project-name]

Reads cone parameters from a JSON file and writes the flat-pattern export
artifacts (DXF, EPS, coordinate text) to the output directory (default: the
current directory). Filenames derive from the project name.";

fn main() -> ExitCode {
    if let Err(e) = conekit::init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("conekit {} ({})", conekit::VERSION, conekit::BUILD_DATE);
        return ExitCode::SUCCESS;
    }

    let Some(params_path) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let params_path = PathBuf::from(params_path);
    let output_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let project_name = args.get(2).map(String::as_str).unwrap_or("");

    match conekit::run_export(&params_path, &output_dir, project_name) {
        Ok(paths) => {
            for path in paths {
                info!(path = %path.display(), "exported");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("export failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
