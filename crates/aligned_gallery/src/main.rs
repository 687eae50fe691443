//! Visual harness for the aligned button.
//!
//! Runs every scenario of a TOML file (the bundled one by default), lays the
//! resulting button out and prints one line per scenario:
//!
//! ```text
//! Test13  pin_icon_left, align_text_right
//!         expected |[i]        t|
//!         got      [i][<>][<>][t]  |[i]            This is a test button|
//! ```
//!
//! Usage: `aligned_gallery [scenarios.toml]`. The log level comes from the
//! file's `log_level`, or from `ALIGNED_GALLERY_LOG` when set.

mod ascii;
mod config;
mod step;

use std::path::PathBuf;

use aligned_button::{AlignedButton, Icon, LogSink};
use anyhow::Context as _;

use crate::config::{GalleryConfig, Scenario};

fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("logger already installed")
}

/// Build the button for one scenario and run its steps.
fn run_scenario(
    config: &GalleryConfig,
    index: usize,
    scenario: &Scenario,
) -> anyhow::Result<AlignedButton> {
    let steps = scenario.parse_steps()?;
    let mut button = AlignedButton::new(Icon::arrow_right(), config.text.clone())
        .with_name(format!("Test{index}"))
        .with_sink(LogSink)
        .with_rect(0.0, 0.0, config.width, config.height);
    button.apply_margins(&scenario.margins);

    for step in &steps {
        step.apply(&mut button)
            .with_context(|| format!("Test{index} `{}`: {step:?}", scenario.name))?;
    }
    Ok(button)
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match &path {
        Some(p) => GalleryConfig::load(p)?,
        None => GalleryConfig::builtin()?,
    };

    let level = std::env::var("ALIGNED_GALLERY_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| config.level());
    setup_logging(level)?;

    log::info!(
        "running {} scenario(s) from {}",
        config.scenarios.len(),
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "the built-in set".to_string())
    );

    let mut mismatches = 0;
    for (i, scenario) in config.scenarios.iter().enumerate() {
        let index = i + 1;
        let button = run_scenario(&config, index, scenario)?;
        let order = button.layout_order().to_string();
        let picture = ascii::render(&button, config.columns);

        println!("Test{index:<3} {}", scenario.name);
        println!("        expected {}", scenario.expected);
        println!("        got      {order}  {picture}");

        if let Some(want) = &scenario.order {
            if *want != order {
                log::warn!("Test{index}: expected order {want}, got {order}");
                mismatches += 1;
            }
        }
    }

    anyhow::ensure!(mismatches == 0, "{mismatches} scenario(s) ended in an unexpected order");
    log::info!("all scenarios laid out as expected");
    Ok(())
}
