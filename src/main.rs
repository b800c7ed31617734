mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use cli::output::OutputConfig;
use covergen::batch::{self, BatchOptions};
use covergen::cover::{self, CoverReport, CoverSettings};
use covergen::render::{CommandRenderer, FontPair};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = OutputConfig::from_global(cli.json, cli.verbose, cli.quiet, cli.no_color);
    init_logging(&output);

    let renderer = match cli.renderer {
        Some(program) => CommandRenderer::new(program, cli.renderer_args),
        None => {
            if !cli.renderer_args.is_empty() {
                log::warn!("--renderer-arg ignored without --renderer");
            }
            CommandRenderer::default()
        }
    };

    let settings = CoverSettings {
        images_dir: cli.images_dir,
        fonts: FontPair {
            zh: cli.zh_font,
            en: cli.en_font,
        },
        subtitle: cli.subtitle,
        resize: !cli.no_resize,
    };

    if let Some(config_path) = cli.config {
        let config = batch::load_config(&config_path)
            .with_context(|| format!("failed to read config {}", config_path.display()))?;
        let options = BatchOptions {
            done_file: cli.done_file,
            force: cli.force,
        };
        let reports = batch::run_batch(&renderer, &settings, &config, &options)
            .context("batch generation failed")?;

        if output.json {
            output.print_json(&reports)?;
        } else {
            for report in &reports {
                report_cover(report, &settings, &output);
            }
        }
        return Ok(());
    }

    // clap enforces the name when --config is absent
    let Some(name) = cli.library_name else {
        anyhow::bail!("missing library name");
    };

    let report = cover::generate_cover(&renderer, &settings, &name)
        .with_context(|| format!("failed to generate cover for '{name}'"))?;

    if output.json {
        output.print_json(&report)?;
    } else {
        report_cover(&report, &settings, &output);
    }

    Ok(())
}

fn init_logging(output: &OutputConfig) {
    let style = if output.no_color {
        env_logger::WriteStyle::Never
    } else {
        env_logger::WriteStyle::Auto
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(output.default_log_filter()),
    )
    .write_style(style)
    .init();
}

/// Human-readable result. An empty render prints nothing.
fn report_cover(report: &CoverReport, settings: &CoverSettings, output: &OutputConfig) {
    if !report.written {
        return;
    }
    if settings.resize {
        output.status(&cover::save_message(&report.path));
    }
    if let (Some(w), Some(h)) = (report.width, report.height) {
        output.detail(&format!("  {}: {w}x{h}", report.library));
    }
}
