use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use dirule_common::Config;
use dirule_core::domain::arm::Arm;

pub fn reach(upper: f64, lower: f64, x: f64, y: f64, cfg: &Config) -> anyhow::Result<()> {
    print::header("arm reach", cfg.quiet);

    let arm = Arm::new(upper, lower).context("building the arm")?;
    let reach = arm.reach(x, y)?;

    print::aligned_line("Segments", format!("{} + {}", arm.upper(), arm.lower()));
    print::aligned_line("Target", format!("({x}, {y})"));
    print::aligned_line("Distance", format!("{:.4}", reach.distance));
    print::aligned_line("Shoulder", degrees(reach.shoulder));
    print::aligned_line("Elbow", degrees(reach.elbow));
    Ok(())
}

fn degrees(radians: f64) -> ColoredString {
    format!("{:.2}°", radians.to_degrees()).color(colors::SECONDARY)
}
