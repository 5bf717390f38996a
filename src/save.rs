//! Save flow: destination selection and the JSON file write

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::DatasetDescription;

/// Result alias for save-flow operations
pub type SaveResult<T> = Result<T, SaveError>;

/// Failures the save flow surfaces to the caller
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The destination file could not be written
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be encoded as JSON text
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written to this path
    Saved(PathBuf),
    /// The user declined to pick a destination; nothing was written
    Cancelled,
}

/// Source of a user-chosen destination path.
///
/// The presentation layer supplies the real dialog. Closures returning
/// `Option<PathBuf>` implement the trait directly, which is how the tests
/// drive the flow.
pub trait SavePrompt {
    /// Ask for a destination path; `None` means the user cancelled
    fn pick_save_path(&mut self) -> Option<PathBuf>;
}

impl<F> SavePrompt for F
where
    F: FnMut() -> Option<PathBuf>,
{
    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self()
    }
}

/// Two-state save machine: either no destination has been chosen yet, or a
/// stored destination that plain saves reuse without prompting.
#[derive(Debug, Clone, Default)]
pub struct SaveFlow {
    path: Option<PathBuf>,
}

impl SaveFlow {
    /// Create a flow with no destination chosen yet
    pub fn new() -> Self {
        Self { path: None }
    }

    /// The currently stored destination, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save to the stored path, prompting for one first if none is set
    pub fn save(
        &mut self,
        description: &DatasetDescription,
        prompt: &mut impl SavePrompt,
    ) -> SaveResult<SaveOutcome> {
        match &self.path {
            Some(path) => {
                let path = path.clone();
                write_description(description, &path)?;
                Ok(SaveOutcome::Saved(path))
            }
            None => self.save_as(description, prompt),
        }
    }

    /// Prompt for a destination, then save there.
    ///
    /// Cancelling leaves the stored path untouched; an empty choice counts
    /// as a cancel. A chosen name without a `.json` suffix gets one
    /// appended. The new path is adopted before the write, so a failed
    /// write can be retried with a plain save.
    pub fn save_as(
        &mut self,
        description: &DatasetDescription,
        prompt: &mut impl SavePrompt,
    ) -> SaveResult<SaveOutcome> {
        let chosen = prompt
            .pick_save_path()
            .filter(|path| !path.as_os_str().is_empty());
        let Some(chosen) = chosen else {
            tracing::warn!("Save cancelled: no destination chosen");
            return Ok(SaveOutcome::Cancelled);
        };

        let path = ensure_json_extension(chosen);
        self.path = Some(path.clone());
        write_description(description, &path)?;
        Ok(SaveOutcome::Saved(path))
    }
}

/// Encode the description as indented JSON and write it to `path`,
/// replacing any existing file content.
pub fn write_description(description: &DatasetDescription, path: &Path) -> SaveResult<()> {
    let content = serde_json::to_string_pretty(&description.to_document())?;
    fs::write(path, content).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved dataset description: {}", path.display());
    Ok(())
}

/// Append `.json` unless the file name already ends with it
fn ensure_json_extension(path: PathBuf) -> PathBuf {
    let has_suffix = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(".json"))
        .unwrap_or(false);

    if has_suffix {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".json");
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DatasetType, ListField, TextField};
    use serde_json::{Map, Value};

    struct ScriptedPrompt {
        response: Option<PathBuf>,
        calls: usize,
    }

    impl ScriptedPrompt {
        fn new(response: Option<PathBuf>) -> Self {
            Self { response, calls: 0 }
        }
    }

    impl SavePrompt for ScriptedPrompt {
        fn pick_save_path(&mut self) -> Option<PathBuf> {
            self.calls += 1;
            self.response.clone()
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dataset_description_{}_{}", std::process::id(), name))
    }

    fn sample_description() -> DatasetDescription {
        let mut description = DatasetDescription::new();
        description.set_field(TextField::Name, "Saved Dataset");
        let i = description.append_to_list(ListField::Authors);
        description.set_entry(ListField::Authors, i, "Alice");
        description
    }

    #[test]
    fn test_save_without_path_prompts_once_then_writes() {
        let target = temp_path("prompts_once.json");
        let mut flow = SaveFlow::new();
        let mut prompt = ScriptedPrompt::new(Some(target.clone()));

        let outcome = flow.save(&sample_description(), &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));
        assert_eq!(prompt.calls, 1);
        assert_eq!(flow.path(), Some(target.as_path()));
        assert!(target.exists());

        let _ = fs::remove_file(&target);
    }

    #[test]
    fn test_save_with_stored_path_skips_prompt() {
        let target = temp_path("skips_prompt.json");
        let mut flow = SaveFlow::new();
        let mut first = ScriptedPrompt::new(Some(target.clone()));
        flow.save(&sample_description(), &mut first).unwrap();

        let mut second = ScriptedPrompt::new(None);
        let outcome = flow.save(&sample_description(), &mut second).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));
        assert_eq!(second.calls, 0);

        let _ = fs::remove_file(&target);
    }

    #[test]
    fn test_cancel_without_prior_path_writes_nothing() {
        let mut flow = SaveFlow::new();
        let mut prompt = ScriptedPrompt::new(None);

        let outcome = flow.save(&sample_description(), &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert_eq!(prompt.calls, 1);
        assert!(flow.path().is_none());
    }

    #[test]
    fn test_cancel_keeps_the_previous_path() {
        let target = temp_path("keeps_previous.json");
        let mut flow = SaveFlow::new();
        let mut first = ScriptedPrompt::new(Some(target.clone()));
        flow.save_as(&sample_description(), &mut first).unwrap();

        let mut cancelled = ScriptedPrompt::new(None);
        let outcome = flow
            .save_as(&sample_description(), &mut cancelled)
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert_eq!(flow.path(), Some(target.as_path()));

        let _ = fs::remove_file(&target);
    }

    #[test]
    fn test_empty_choice_counts_as_cancel() {
        let mut flow = SaveFlow::new();
        let mut prompt = ScriptedPrompt::new(Some(PathBuf::new()));

        let outcome = flow.save(&sample_description(), &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(flow.path().is_none());
    }

    #[test]
    fn test_json_suffix_is_appended_when_missing() {
        let chosen = temp_path("bare_name");
        let expected = temp_path("bare_name.json");
        let mut flow = SaveFlow::new();
        let mut prompt = ScriptedPrompt::new(Some(chosen));

        let outcome = flow.save_as(&sample_description(), &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(expected.clone()));
        assert!(expected.exists());

        let _ = fs::remove_file(&expected);
    }

    #[test]
    fn test_other_extensions_still_gain_json_suffix() {
        assert_eq!(
            ensure_json_extension(PathBuf::from("/tmp/data.txt")),
            PathBuf::from("/tmp/data.txt.json")
        );
        assert_eq!(
            ensure_json_extension(PathBuf::from("/tmp/data.json")),
            PathBuf::from("/tmp/data.json")
        );
    }

    #[test]
    fn test_failed_write_surfaces_error_and_keeps_path() {
        let target = temp_path("write_blocked.json");
        fs::create_dir_all(&target).unwrap();

        let mut flow = SaveFlow::new();
        let mut prompt = ScriptedPrompt::new(Some(target.clone()));
        let err = flow
            .save(&sample_description(), &mut prompt)
            .unwrap_err();
        assert!(matches!(err, SaveError::Write { .. }));
        assert_eq!(flow.path(), Some(target.as_path()));

        let _ = fs::remove_dir(&target);
    }

    #[test]
    fn test_closure_prompts_drive_the_flow() {
        let target = temp_path("closure_prompt.json");
        let mut flow = SaveFlow::new();
        let response = target.clone();
        let mut prompt = move || Some(response.clone());

        let outcome = flow.save_as(&sample_description(), &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));

        let _ = fs::remove_file(&target);
    }

    #[test]
    fn test_written_file_matches_the_projection() {
        let target = temp_path("matches_projection.json");
        let mut description = sample_description();
        description.set_dataset_type(DatasetType::Derivative);

        write_description(&description, &target).unwrap();
        let text = fs::read_to_string(&target).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, description.to_document());

        let _ = fs::remove_file(&target);
    }
}
