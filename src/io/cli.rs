//! Command-line interface for batch tile preview generation

use crate::document::resolve::AcceptAll;
use crate::grid::plan::TileConfig;
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_GAP, DEFAULT_ROWS, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_config};
use crate::io::image::{export_preview, load_document};
use crate::io::progress::ProgressManager;
use crate::session::environment::Environment;
use crate::session::{NullObserver, PreviewSession};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilepreview")]
#[command(
    author,
    version,
    about = "Generate tiled texture previews with a reference tile highlight"
)]
/// Command-line arguments for the preview tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Gap in pixels between adjacent tiles
    #[arg(short, long, default_value_t = DEFAULT_GAP)]
    pub gap: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tiling configuration from the supplied arguments
    pub const fn tile_config(&self) -> TileConfig {
        TileConfig {
            rows: self.rows,
            cols: self.cols,
            gap: self.gap,
        }
    }
}

/// Orchestrates batch preview generation with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, preview generation, or export
    /// fails for any file
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_config(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_config(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let document = load_document(input_path)?;
        let mut environment = Environment::default();
        let session = PreviewSession::new(self.cli.tile_config());

        // files loaded from disk are single flat layers, so the group
        // confirmation prompt can never fire here
        let mut confirm = AcceptAll;
        let mut null_observer = NullObserver;

        let canvas = match self.progress_manager {
            Some(ref mut pm) => {
                session.run(&mut environment, Some(&document), &mut confirm, pm)?
            }
            None => session.run(
                &mut environment,
                Some(&document),
                &mut confirm,
                &mut null_observer,
            )?,
        };

        export_preview(&canvas, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
