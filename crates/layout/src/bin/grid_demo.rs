//! Lays out a small form-like grid and logs the result.
//!
//! Configuration comes from the `UI_LAYOUT_*` environment variables; set
//! `RUST_LOG=debug` to see the measure phases.

use anyhow::{Context as _, Result};
use env_logger::init as env_logger_init;
use log::info;
use ui_layout::{
    GridLayout, LayoutConfig, LayoutContext, PxAvailableSize, PxRectangle, PxSize2D, SizedElements, TrackDefinition,
};

const LABEL: u32 = 1;
const INPUT: u32 = 2;
const NOTES_LABEL: u32 = 3;
const NOTES: u32 = 4;
const BUTTON: u32 = 5;

fn main() -> Result<()> {
    env_logger_init();

    let config = LayoutConfig::from_env();
    info!("Starting grid demo with {config:?}");

    let mut grid = GridLayout::new(LayoutContext::new(config));
    grid.add_column_definition(TrackDefinition::auto())?;
    grid.add_column_definition(TrackDefinition::star(1.0))?;
    grid.add_column_definition(TrackDefinition::fixed(96.0))?;
    grid.add_row_definition(TrackDefinition::auto())?;
    grid.add_row_definition(TrackDefinition::star(1.0))?;
    grid.add_row_definition(TrackDefinition::fixed_px(48.0))?;

    grid.add_child_at(LABEL, 0, 0)?;
    grid.add_child_at(INPUT, 1, 0)?;
    grid.add_child_at(NOTES_LABEL, 0, 1)?;
    grid.add_child_at(NOTES, 1, 1)?;
    grid.add_child_at(BUTTON, 2, 2)?;

    let mut elements = SizedElements::new()
        .with_size(LABEL, PxSize2D::new(80, 24))
        .with_size(INPUT, PxSize2D::new(200, 32))
        .with_size(NOTES_LABEL, PxSize2D::new(64, 24))
        .with_size(NOTES, PxSize2D::new(300, 120))
        .with_size(BUTTON, PxSize2D::new(90, 40));

    let desired = grid
        .measure(&mut elements, PxAvailableSize::from_px(800, 600))
        .context("measuring grid")?;
    info!("Desired size: {}x{}", desired.width, desired.height);

    let arranged = grid
        .arrange(&mut elements, PxRectangle::new(0, 0, 800, 600))
        .context("arranging grid")?;
    info!("Arranged size: {}x{}", arranged.width, arranged.height);

    for node in grid.children() {
        if let Some(rect) = elements.arranged_rect(node) {
            info!("Element {node}: {rect:?}");
        }
    }

    let snapshot = serde_json::to_string_pretty(&grid.snapshot())?;
    info!("Snapshot:\n{snapshot}");
    Ok(())
}
