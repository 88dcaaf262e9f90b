use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// What one invocation processes and where the results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPlan {
    Folder {
        folder: PathBuf,
        output_folder: PathBuf,
    },
    SingleFile {
        input: PathBuf,
        output_file: Option<PathBuf>,
        output_folder: Option<PathBuf>,
    },
}

impl RunPlan {
    /// Folder mode when `folder_mode` is set or `input` is a directory. In
    /// folder mode the output folder is `output_folder`, then `output`, then
    /// `default_folder`. For a single file an existing directory given as
    /// `output` is the output folder unless `output_folder` is also given.
    pub fn resolve(
        input: &Path,
        output: Option<&Path>,
        output_folder: Option<&Path>,
        folder_mode: bool,
        default_folder: &Path,
    ) -> Result<Self> {
        if folder_mode || input.is_dir() {
            if !input.is_dir() {
                bail!("'{}' is not a valid directory.", input.display());
            }

            let output_folder = output_folder.or(output).unwrap_or(default_folder);

            return Ok(Self::Folder {
                folder: input.to_path_buf(),
                output_folder: output_folder.to_path_buf(),
            });
        }

        let (output_file, output_folder) = match output {
            Some(output) if output.is_dir() => (None, output_folder.or(Some(output))),
            output => (output, output_folder),
        };

        Ok(Self::SingleFile {
            input: input.to_path_buf(),
            output_file: output_file.map(Path::to_path_buf),
            output_folder: output_folder.map(Path::to_path_buf),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DEFAULT: &str = "output_csv";

    #[test]
    fn test_directory_input_uses_config_folder() {
        let dir = tempfile::tempdir().unwrap();

        let plan = RunPlan::resolve(dir.path(), None, None, false, Path::new(DEFAULT)).unwrap();

        assert_eq!(
            plan,
            RunPlan::Folder {
                folder: dir.path().to_path_buf(),
                output_folder: PathBuf::from(DEFAULT),
            }
        );
    }

    #[test]
    fn test_folder_mode_output_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let out = Path::new("out");
        let flag = Path::new("flagged");

        let plan = RunPlan::resolve(dir.path(), Some(out), None, true, Path::new(DEFAULT)).unwrap();
        assert!(matches!(plan, RunPlan::Folder { output_folder, .. } if output_folder == out));

        let plan =
            RunPlan::resolve(dir.path(), Some(out), Some(flag), true, Path::new(DEFAULT)).unwrap();
        assert!(matches!(plan, RunPlan::Folder { output_folder, .. } if output_folder == flag));
    }

    #[test]
    fn test_folder_flag_on_a_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contacts.csv");
        fs::write(&input, "Email\na@example.com\n").unwrap();

        let err = RunPlan::resolve(&input, None, None, true, Path::new(DEFAULT)).unwrap_err();
        assert!(err.to_string().contains("is not a valid directory"));
    }

    #[test]
    fn test_existing_directory_output_becomes_output_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contacts.csv");
        fs::write(&input, "Email\na@example.com\n").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let plan = RunPlan::resolve(&input, Some(out.as_path()), None, false, Path::new(DEFAULT)).unwrap();

        assert_eq!(
            plan,
            RunPlan::SingleFile {
                input: input.clone(),
                output_file: None,
                output_folder: Some(out.clone()),
            }
        );

        let flag = dir.path().join("elsewhere");
        let plan =
            RunPlan::resolve(&input, Some(out.as_path()), Some(flag.as_path()), false, Path::new(DEFAULT)).unwrap();
        assert!(matches!(
            plan,
            RunPlan::SingleFile { output_file: None, output_folder: Some(folder), .. } if folder == flag
        ));
    }

    #[test]
    fn test_output_file_path_is_kept_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contacts.csv");
        fs::write(&input, "Email\na@example.com\n").unwrap();
        let output = dir.path().join("clean.csv");

        let plan = RunPlan::resolve(&input, Some(output.as_path()), None, false, Path::new(DEFAULT)).unwrap();

        assert_eq!(
            plan,
            RunPlan::SingleFile {
                input,
                output_file: Some(output),
                output_folder: None,
            }
        );
    }

    #[test]
    fn test_missing_single_input_is_still_a_file_run() {
        let plan = RunPlan::resolve(
            Path::new("does/not/exist.csv"),
            None,
            None,
            false,
            Path::new(DEFAULT),
        )
        .unwrap();

        assert!(matches!(plan, RunPlan::SingleFile { output_file: None, output_folder: None, .. }));
    }
}
