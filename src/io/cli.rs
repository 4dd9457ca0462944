//! Command-line interface for decoding single mosaics and batch mosaic files

use crate::algorithm::decoder::decode;
use crate::analysis::statistics::BatchSummary;
use crate::io::catalog::{
    decode_batch_with, is_complete_result_file, read_mosaic_file, write_result_file,
};
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{CatalogError, CatalogResult, file_system_error};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mosaic-pd")]
#[command(
    author,
    version,
    about = "Decode knot mosaic strings into planar diagram codes"
)]
/// Command-line arguments for the mosaic decoder
pub struct Cli {
    /// Mosaic list file or directory of list files to decode
    #[arg(value_name = "TARGET", required_unless_present = "string")]
    pub target: Option<PathBuf>,

    /// Decode a single mosaic string and print the result
    #[arg(short, long, value_name = "MOSAIC", conflicts_with = "target")]
    pub string: Option<String>,

    /// Directory for result files (defaults to each input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Worker threads for batch decoding (defaults to all cores)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a complete result file exists
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
}

/// Orchestrates single-string decoding and batch processing of mosaic files
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

    /// Decode according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, the worker pool cannot start,
    /// or a mosaic or result file cannot be read or written
    pub fn process(&mut self) -> CatalogResult<()> {
        if let Some(mosaic) = &self.cli.string {
            Self::print_single(mosaic);
            return Ok(());
        }

        let Some(target) = self.cli.target.clone() else {
            return Ok(());
        };
        let files = self.collect_files(&target)?;
        if files.is_empty() {
            return Ok(());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.cli.jobs.unwrap_or(0))
            .build()
            .map_err(|error| CatalogError::ThreadPool {
                reason: error.to_string(),
            })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut total = BatchSummary::new();
        for file in &files {
            let summary = self.process_file(file, &pool)?;
            total.merge(&summary);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        self.report_total(&total);

        Ok(())
    }

    // Allow print for the decoded result, which is the command's output
    #[allow(clippy::print_stdout)]
    fn print_single(mosaic: &str) {
        match decode(mosaic) {
            Ok(decoding) => println!("{mosaic} || {decoding}"),
            Err(error) => println!("{mosaic} || rejected: {error}"),
        }
    }

    // Allow print for the end-of-run summary
    #[allow(clippy::print_stderr)]
    fn report_total(&self, total: &BatchSummary) {
        info!("batch finished: {total}");
        if !self.cli.quiet {
            eprintln!("{total}");
            for (crossings, count) in &total.knots_by_crossings {
                eprintln!("  {crossings} crossings: {count} knots");
            }
        }
    }

    fn collect_files(&self, target: &Path) -> CatalogResult<Vec<PathBuf>> {
        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(file_system_error(target, "list"))?;
            for entry in entries {
                let path = entry.map_err(file_system_error(target, "list"))?.path();
                if Self::is_mosaic_list(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(CatalogError::InvalidTarget {
                path: target.to_path_buf(),
            })
        }
    }

    // Result files share the input extension and must not be decoded again
    fn is_mosaic_list(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
            && !path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .ends_with(OUTPUT_SUFFIX)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.get_output_path(input_path);
        if is_complete_result_file(&output_path) {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (complete result exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        pool: &rayon::ThreadPool,
    ) -> CatalogResult<BatchSummary> {
        let mosaics = read_mosaic_file(input_path)?;
        let output_path = self.get_output_path(input_path);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create"))?;
        }

        let bar = self
            .progress_manager
            .as_mut()
            .map(|pm| pm.start_file(input_path, mosaics.len()));

        let outcomes = pool.install(|| {
            decode_batch_with(&mosaics, || {
                if let Some(bar) = &bar {
                    bar.inc(1);
                }
            })
        });
        let summary = write_result_file(&output_path, &mosaics, &outcomes)?;
        info!(
            "{} -> {}: {summary}",
            input_path.display(),
            output_path.display()
        );

        if let (Some(pm), Some(bar)) = (&self.progress_manager, &bar) {
            pm.complete_file(bar, &summary.to_string());
        }

        Ok(summary)
    }

    fn get_output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            INPUT_EXTENSION
        );

        match (&self.cli.output, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}
