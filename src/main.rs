use std::io::Write;

use clap::Parser;

use class_guard::cli::Cli;
use class_guard::config::FileConfigLoader;
use class_guard::engine::DefaultEngine;
use class_guard::model::{Category, ValidationResult};
use class_guard::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, Report, TextFormatter,
};
use class_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

fn main() {
    let cli = Cli::parse();
    let color_mode = ColorMode::from(cli.color);
    let diagnostics = ErrorOutput::stderr(color_mode).with_quiet(cli.quiet);

    let exit_code = match run(&cli, color_mode, &diagnostics) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            diagnostics.print_error(&e);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli, color_mode: ColorMode, diagnostics: &ErrorOutput) -> class_guard::Result<i32> {
    // 1. Configuration is only read when asked for
    let config = FileConfigLoader::new().load_optional(cli.config.as_deref())?;

    // 2. Engine with the configured failure threshold; stage defaults to the earliest
    let engine = DefaultEngine::from_config(&config);
    let stage = cli.stage.unwrap_or_default();

    // 3. Validate
    let result = engine.validate(&cli.path, stage);
    report_diagnostics(cli, &result, diagnostics);

    // 4. Report
    let report = Report {
        path: &cli.path,
        stage,
        result: &result,
    };
    let output = format_output(cli.format, &report, color_mode, cli.verbose)?;
    write_stdout(&output)?;

    if result.is_valid {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VALIDATION_FAILED)
    }
}

fn report_diagnostics(cli: &Cli, result: &ValidationResult, diagnostics: &ErrorOutput) {
    let fast_fail = result
        .issues
        .iter()
        .find(|issue| issue.category == Category::Filesystem);

    if let Some(issue) = fast_fail {
        diagnostics.print_fast_fail(issue);
    } else if result.stats.files_scanned == 0 {
        diagnostics.print_warning(
            &format!("no C++ source files found under {}", cli.path.display()),
            Some("Only .cpp/.hpp style C++ sources and headers are scanned"),
        );
    }
}

fn format_output(
    format: OutputFormat,
    report: &Report<'_>,
    color_mode: ColorMode,
    verbose: u8,
) -> class_guard::Result<String> {
    match format {
        OutputFormat::Text => {
            let use_colors = color_mode.enabled_for(&std::io::stdout());
            TextFormatter::new(use_colors)
                .with_verbose(verbose)
                .format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_stdout(output: &str) -> class_guard::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
