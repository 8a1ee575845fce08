use std::{env, fs::File, io, process};

use perfcurve::{
    PerfCurveError,
    classifier::evaluate,
    cli::{CommandLineConfig, read_points},
    config::validate_data,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match run_command(&config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(2);
        }
    }
}

fn run_command(config: &CommandLineConfig) -> Result<bool, PerfCurveError> {
    match config.command.as_str() {
        "fit" => run_fit(config),
        "scale" => {
            let points: Vec<String> = config.scale.points().iter().map(usize::to_string).collect();
            println!("{}: {}", config.scale, points.join(" "));
            Ok(true)
        }
        other => Err(PerfCurveError::invalid_input(format!("unknown command {other}"))),
    }
}

fn run_fit(config: &CommandLineConfig) -> Result<bool, PerfCurveError> {
    let complexity = config.complexity()?;
    let points = if config.input == "-" {
        read_points(io::stdin().lock())?
    } else {
        let file = File::open(&config.input)
            .map_err(|e| PerfCurveError::invalid_input(format!("{}: {e}", config.input)))?;
        read_points(file)?
    };
    validate_data(&points)?;
    let fit = config.fit_config();
    let report = evaluate(&points, &complexity, &fit);
    if config.json {
        println!("{}", report.to_json()?);
    } else {
        report.emit(fit.logging);
    }
    Ok(report.fits)
}
