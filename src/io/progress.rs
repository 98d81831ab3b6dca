//! Progress display for tile export: one bar for the sheet being sliced,
//! plus a sheet counter when a directory is processed

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SHEET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sheets: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Tracks tiles written for the current sheet and sheets finished in the run
pub struct ProgressManager {
    multi_progress: MultiProgress,
    sheet_bar: Option<ProgressBar>,
    tile_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager drawing to `target`
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            sheet_bar: None,
            tile_bar: None,
        }
    }

    /// Prepare for a run over `sheet_count` sheets
    ///
    /// The sheet counter only appears for batches; a single sheet shows just
    /// its tile bar.
    pub fn initialize(&mut self, sheet_count: usize) {
        if sheet_count > 1 {
            let bar = self
                .multi_progress
                .add(ProgressBar::new(sheet_count as u64));
            bar.set_style(SHEET_STYLE.clone());
            self.sheet_bar = Some(bar);
        }
    }

    /// Show a fresh tile bar for the sheet about to be exported
    pub fn start_sheet(&mut self, path: &Path, total_tiles: usize) {
        self.clear_tile_bar();

        let bar = self
            .multi_progress
            .add(ProgressBar::new(total_tiles as u64));
        bar.set_style(TILE_STYLE.clone());
        bar.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        self.tile_bar = Some(bar);
    }

    /// Record the running count of tiles written for the current sheet
    pub fn tile_written(&self, written: usize) {
        if let Some(ref bar) = self.tile_bar {
            bar.set_position(written as u64);
        }
    }

    /// Close out the current sheet (exported or skipped) with a summary line
    pub fn complete_sheet(&mut self, summary: &str) {
        self.clear_tile_bar();
        let _ = self.multi_progress.println(summary);

        if let Some(ref bar) = self.sheet_bar {
            bar.inc(1);
        }
    }

    /// Remove every bar once the run is over
    pub fn finish(&mut self) {
        self.clear_tile_bar();
        if let Some(bar) = self.sheet_bar.take() {
            bar.finish_with_message("All sheets processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn clear_tile_bar(&mut self) {
        if let Some(bar) = self.tile_bar.take() {
            bar.finish_and_clear();
            self.multi_progress.remove(&bar);
        }
    }
}
