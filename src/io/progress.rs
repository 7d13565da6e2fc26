//! Progress display for writing extracted tiles

use crate::io::configuration::PROGRESS_TEMPLATE;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks how many tiles of an extraction have been written
pub struct TileProgress {
    bar: ProgressBar,
}

impl TileProgress {
    /// Create a bar for `total` tiles, drawing nothing when `visible` is false
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total);
            bar.set_style(TILE_STYLE.clone());
            bar
        } else {
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden())
        };

        Self { bar }
    }

    /// Record one more written tile
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal and return the number of tiles written
    pub fn finish(self) -> u64 {
        self.bar.finish_and_clear();
        self.bar.position()
    }
}
