// ABOUTME: File selection model: a candidate picked by the user and the file held while uploading
// The declared media type comes from the file extension, like a browser file picker

use std::path::{Path, PathBuf};

use directories::BaseDirs;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file the user picked, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub name: String,
    pub media_type: Option<String>,
}

impl FileCandidate {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let media_type = media_type_for(&path).map(str::to_string);

        Self {
            path,
            name,
            media_type,
        }
    }

    /// Builds a candidate from text typed into the path prompt, expanding a leading `~`.
    pub fn from_user_input(input: &str) -> Option<Self> {
        let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::from_path(expand_home(trimmed)))
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type.as_deref() == Some(PDF_MEDIA_TYPE)
    }
}

/// The file currently associated with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub path: PathBuf,
}

impl From<FileCandidate> for UploadedFile {
    fn from(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            path: candidate.path,
        }
    }
}

fn media_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some(PDF_MEDIA_TYPE),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "txt" => Some("text/plain"),
        "md" => Some("text/markdown"),
        "html" | "htm" => Some("text/html"),
        "json" => Some("application/json"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

fn expand_home(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(input),
    };

    match BaseDirs::new() {
        Some(dirs) if rest.is_empty() => dirs.home_dir().to_path_buf(),
        Some(dirs) => dirs.home_dir().join(rest),
        None => PathBuf::from(input),
    }
}
