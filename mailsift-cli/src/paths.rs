use shared_types::SourceFormat;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub valid: PathBuf,
    pub suspicious: PathBuf,
}

/// Where the valid and suspicious lists for `input` go.
///
/// The directory is `output_folder` if given, else the parent of an explicit
/// `output_file`, else the input's own directory. Without an output file the
/// names are `<stem>_emails` and `<stem>_suspicious`; contact cards always
/// produce `.csv`, CSV inputs keep their extension.
pub fn build_output_paths(
    input: &Path,
    format: SourceFormat,
    output_file: Option<&Path>,
    output_folder: Option<&Path>,
) -> OutputPaths {
    let output_file = output_file.filter(|file| file.file_name().is_some());

    let dir = output_folder
        .map(Path::to_path_buf)
        .or_else(|| output_file.and_then(non_empty_parent))
        .or_else(|| non_empty_parent(input))
        .unwrap_or_else(|| PathBuf::from("."));

    match output_file {
        Some(file) => {
            let extension = output_extension(file, format);
            OutputPaths {
                valid: dir.join(file.file_name().unwrap_or_default()),
                suspicious: dir.join(format!("{}_suspicious{}", stem(file), extension)),
            }
        }
        None => {
            let stem = stem(input);
            let extension = output_extension(input, format);
            OutputPaths {
                valid: dir.join(format!("{stem}_emails{extension}")),
                suspicious: dir.join(format!("{stem}_suspicious{extension}")),
            }
        }
    }
}

fn non_empty_parent(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn output_extension(path: &Path, format: SourceFormat) -> String {
    match format {
        SourceFormat::Vcf => ".csv".to_string(),
        SourceFormat::Csv => path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default(),
    }
}
