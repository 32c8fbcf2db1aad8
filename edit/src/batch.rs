//! Editing whole directory trees.
use crate::{
    open_and_edit, CreateDirectorySnafu, EditReport, Error, OutsideBaseSnafu, TagEdit, WriteSnafu,
};
use dcmedit_object::OpenFileOptions;
use snafu::{OptionExt, ResultExt};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// The outcome of [`modify_tree`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files edited and written to the output tree
    pub edited: Vec<PathBuf>,
    /// Files which are not DICOM files
    pub skipped: Vec<PathBuf>,
    /// DICOM files which could not be edited
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// Whether every DICOM file was edited.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Outcome {
    Edited(EditReport),
    Skipped,
    Failed(Error),
}

/// Edit every DICOM file under `input_dir`,
/// writing each to the same relative path under `output_dir`.
///
/// Files which are not DICOM are skipped with a warning.
/// A failing file does not stop the others,
/// check [`BatchReport::failed`] for those.
pub fn modify_tree(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    edits: &[TagEdit],
    options: &OpenFileOptions,
) -> BatchReport {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    let files: Vec<PathBuf> = WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|f| !f.file_type().is_dir())
        .map(|f| f.into_path())
        .collect();
    info!("Found {} files under {}", files.len(), input_dir.display());

    let process = |path: &PathBuf| {
        let outcome = match edit_into(input_dir, output_dir, path, edits, options) {
            Ok(report) => Outcome::Edited(report),
            Err(e) if e.is_not_dicom() => Outcome::Skipped,
            Err(e) => Outcome::Failed(e),
        };
        (path.clone(), outcome)
    };

    #[cfg(feature = "rayon")]
    let outcomes: Vec<_> = files.par_iter().map(process).collect();
    #[cfg(not(feature = "rayon"))]
    let outcomes: Vec<_> = files.iter().map(process).collect();

    let mut report = BatchReport::default();
    for (path, outcome) in outcomes {
        match outcome {
            Outcome::Edited(edits) => {
                info!("{}: {} attributes changed", path.display(), edits.len());
                report.edited.push(path);
            }
            Outcome::Skipped => {
                warn!("{}: not a DICOM file, skipped", path.display());
                report.skipped.push(path);
            }
            Outcome::Failed(e) => {
                report.failed.push((path, e));
            }
        }
    }
    report
}

fn edit_into(
    input_dir: &Path,
    output_dir: &Path,
    path: &Path,
    edits: &[TagEdit],
    options: &OpenFileOptions,
) -> Result<EditReport, Error> {
    let relative = path.strip_prefix(input_dir).ok().context(OutsideBaseSnafu {
        path,
        base: input_dir,
    })?;
    let (obj, report) = open_and_edit(path, edits, options)?;

    let output = output_dir.join(relative);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).context(CreateDirectorySnafu { path: parent })?;
    }
    obj.write_to_file(&output)
        .context(WriteSnafu { path: &output })?;
    Ok(report)
}
