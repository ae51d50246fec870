//! Document name sanitation and the upload extension policy.

use unicode_normalization::UnicodeNormalization;

use bizdocs_core::config::StorageConfig;
use bizdocs_core::error::AppError;
use bizdocs_core::result::AppResult;

/// Longest name kept after sanitation.
const MAX_FILENAME_LEN: usize = 255;

/// Reduce a client-supplied filename to a safe, flat storage key.
///
/// Accented letters decompose to their ASCII base (NFKD) and any other
/// non-ASCII character is dropped. Path separators act as word breaks,
/// whitespace runs collapse to `_`,
/// only ASCII alphanumerics plus `.`, `_` and `-` survive, and leading or
/// trailing `.`/`_` are stripped. The result never contains a separator and
/// is never `.` or `..`, but may be empty.
pub fn sanitize_filename(filename: &str) -> String {
    let spaced: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_')
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect()
}

/// Lowercased text after the last `.`, if the name has one.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Which documents may be stored, and under what name.
#[derive(Debug, Clone)]
pub struct FilenamePolicy {
    allowed_extensions: Vec<String>,
}

impl FilenamePolicy {
    /// Build a policy from an explicit extension list.
    pub fn new<I, S>(allowed_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Build a policy from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.allowed_extensions)
    }

    /// Whether the filename carries an allowed extension (case-insensitive).
    pub fn is_allowed(&self, filename: &str) -> bool {
        extension(filename).is_some_and(|ext| self.allowed_extensions.contains(&ext))
    }

    /// Validate an upload's client filename and return the storage key.
    pub fn upload_name(&self, filename: &str) -> AppResult<String> {
        if filename.is_empty() {
            return Err(AppError::bad_request("No selected file"));
        }
        if !self.is_allowed(filename) {
            return Err(AppError::invalid_file_type("Invalid file type"));
        }

        let sanitized = sanitize_filename(filename);
        if sanitized.is_empty() || !self.is_allowed(&sanitized) {
            return Err(AppError::bad_request("Invalid filename"));
        }
        Ok(sanitized)
    }

    /// Check a requested download name.
    ///
    /// Only names that survive sanitation unchanged can exist in the store,
    /// so anything else is reported as missing without touching storage.
    pub fn download_name<'a>(&self, filename: &'a str) -> AppResult<&'a str> {
        if filename.is_empty() || sanitize_filename(filename) != filename {
            return Err(AppError::not_found("File not found"));
        }
        Ok(filename)
    }
}
