//! Native save dialog behind the prompt seam

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::save::SavePrompt;

/// "Save as" prompt backed by the platform file picker
#[derive(Debug, Clone, Default)]
pub struct NativeSavePrompt {
    /// Directory the dialog opens in, when known
    pub start_dir: Option<PathBuf>,
}

impl NativeSavePrompt {
    /// Create a prompt that opens in the platform default location
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompt that opens where the user last saved
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            start_dir: config.last_save_dir.clone(),
        }
    }
}

impl SavePrompt for NativeSavePrompt {
    fn pick_save_path(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save as")
            .add_filter("JSON", &["json"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}
