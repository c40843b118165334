//! Upload file validation
//!
//! Gates candidate files against the acceptance policy before they enter
//! the upload pipeline. Validation trusts the declared content type and
//! performs no content inspection or scanning.

use serde::Serialize;
use utoipa::ToSchema;

/// Default maximum file size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
/// Default maximum number of files in a selection.
pub const DEFAULT_MAX_FILES: usize = 10;
/// Content types accepted by default.
pub const DEFAULT_ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Validation errors for candidate upload files
#[derive(Debug, thiserror::Error)]
pub enum UploadValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Maximum {max} files allowed")]
    TooManyFiles { max: usize },

    #[error("Empty file")]
    EmptyFile,
}

/// Acceptance policy for uploaded files.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_file_size: usize,
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_content_types: DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }
}

impl UploadPolicy {
    /// Validate a single candidate against the policy. Content type is
    /// checked before size so the reason string names the first violation,
    /// matching the order files fail in practice.
    pub fn check(&self, file: &FileCandidate) -> Result<(), UploadValidationError> {
        let normalized = file.content_type.to_lowercase();
        if !self.allowed_content_types.iter().any(|ct| ct == &normalized) {
            return Err(UploadValidationError::InvalidContentType {
                content_type: file.content_type.clone(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        if file.size == 0 {
            return Err(UploadValidationError::EmptyFile);
        }

        if file.size > self.max_file_size {
            return Err(UploadValidationError::FileTooLarge {
                size: file.size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }
}

/// A candidate file: declared size and content type only, no bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: usize,
    pub content_type: String,
}

/// A rejected candidate with its human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RejectedFile {
    pub name: String,
    pub reason: String,
}

/// Running selection of accepted files.
///
/// Batches are validated in arrival order. Once the accepted count reaches
/// the policy's `max_files`, every further file in the batch is rejected
/// regardless of its own validity. Rejections never abort the batch.
#[derive(Debug)]
pub struct FileSelection {
    policy: UploadPolicy,
    accepted: Vec<FileCandidate>,
}

impl FileSelection {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            accepted: Vec::new(),
        }
    }

    /// Validate a batch of candidates, appending accepted files to the
    /// selection and returning the rejections with their reasons.
    pub fn add_batch(&mut self, files: Vec<FileCandidate>) -> Vec<RejectedFile> {
        let mut rejected = Vec::new();

        for file in files {
            if self.accepted.len() >= self.policy.max_files {
                rejected.push(RejectedFile {
                    name: file.name,
                    reason: UploadValidationError::TooManyFiles {
                        max: self.policy.max_files,
                    }
                    .to_string(),
                });
                continue;
            }

            match self.policy.check(&file) {
                Ok(()) => self.accepted.push(file),
                Err(err) => rejected.push(RejectedFile {
                    name: file.name,
                    reason: err.to_string(),
                }),
            }
        }

        rejected
    }

    /// Remove an accepted file by index, as the caller's selection UI does.
    pub fn remove(&mut self, index: usize) -> Option<FileCandidate> {
        if index < self.accepted.len() {
            Some(self.accepted.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[FileCandidate] {
        &self.accepted
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: usize, content_type: &str) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            size,
            content_type: content_type.to_string(),
        }
    }

    fn policy(max_files: usize) -> UploadPolicy {
        UploadPolicy {
            max_files,
            max_file_size: 1024,
            allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        }
    }

    #[test]
    fn accepts_valid_files_in_order() {
        let mut selection = FileSelection::new(policy(5));
        let rejected = selection.add_batch(vec![
            candidate("a.jpg", 100, "image/jpeg"),
            candidate("b.png", 200, "image/png"),
        ]);
        assert!(rejected.is_empty());
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.files()[0].name, "a.jpg");
    }

    #[test]
    fn rejects_unsupported_content_type() {
        let mut selection = FileSelection::new(policy(5));
        let rejected = selection.add_batch(vec![candidate("a.bmp", 100, "image/bmp")]);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].reason.contains("Invalid content type: image/bmp"));
        assert!(selection.is_empty());
    }

    #[test]
    fn rejects_oversized_and_empty_files() {
        let mut selection = FileSelection::new(policy(5));
        let rejected = selection.add_batch(vec![
            candidate("big.jpg", 4096, "image/jpeg"),
            candidate("hollow.jpg", 0, "image/jpeg"),
        ]);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].reason, "File too large: 4096 bytes (max: 1024 bytes)");
        assert_eq!(rejected[1].reason, "Empty file");
    }

    #[test]
    fn overflow_files_are_rejected_with_max_files_reason() {
        let mut selection = FileSelection::new(policy(2));
        let rejected = selection.add_batch(vec![
            candidate("a.jpg", 100, "image/jpeg"),
            candidate("b.jpg", 100, "image/jpeg"),
            candidate("c.jpg", 100, "image/jpeg"),
        ]);
        assert_eq!(selection.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].name, "c.jpg");
        assert_eq!(rejected[0].reason, "Maximum 2 files allowed");
    }

    #[test]
    fn overflow_applies_across_batches_and_to_invalid_files_too() {
        let mut selection = FileSelection::new(policy(1));
        selection.add_batch(vec![candidate("a.jpg", 100, "image/jpeg")]);

        // Once full, even a file that would fail its own validation gets the
        // max-files reason: batch position decides first.
        let rejected = selection.add_batch(vec![candidate("b.bmp", 0, "image/bmp")]);
        assert_eq!(rejected[0].reason, "Maximum 1 files allowed");
    }

    #[test]
    fn remove_frees_a_slot_by_index() {
        let mut selection = FileSelection::new(policy(1));
        selection.add_batch(vec![candidate("a.jpg", 100, "image/jpeg")]);
        assert!(selection.remove(3).is_none());

        let removed = selection.remove(0).unwrap();
        assert_eq!(removed.name, "a.jpg");
        assert!(selection.is_empty());

        let rejected = selection.add_batch(vec![candidate("b.jpg", 100, "image/jpeg")]);
        assert!(rejected.is_empty());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn content_type_check_is_case_insensitive() {
        let mut selection = FileSelection::new(policy(5));
        let rejected = selection.add_batch(vec![candidate("a.jpg", 100, "IMAGE/JPEG")]);
        assert!(rejected.is_empty());
    }
}
