//! Directory listing domain types

use serde::{Deserialize, Serialize};

/// Path of an entry relative to the listed root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePath {
    /// Empty for entries directly under the root
    #[serde(default)]
    pub relative_directory: String,
    pub file_name: String,
}

impl FilePath {
    pub fn new(relative_directory: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            relative_directory: relative_directory.into(),
            file_name: file_name.into(),
        }
    }

    /// `relative_directory/file_name`, without a leading separator at the root
    pub fn relative_path(&self) -> String {
        if self.relative_directory.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", self.relative_directory, self.file_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub file_path: FilePath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_path: FilePath,
    pub file_size_bytes: i64,
    #[serde(default)]
    pub last_modified_time_millis: i64,
}

/// Snapshot of a scanned directory tree
///
/// `total_size_bytes` is computed by the runner; the client trusts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    pub directories: Vec<DirEntry>,
    pub files: Vec<FileEntry>,
    pub total_size_bytes: i64,
}

impl DirectoryListing {
    pub fn new(directories: Vec<DirEntry>, files: Vec<FileEntry>) -> Self {
        let total_size_bytes = files.iter().map(|f| f.file_size_bytes).sum();
        Self {
            directories,
            files,
            total_size_bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

impl<'de> Deserialize<'de> for DirectoryListing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            #[serde(default)]
            directories: Vec<DirEntry>,
            #[serde(default)]
            files: Vec<FileEntry>,
            total_size_bytes: Option<i64>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let mut listing = DirectoryListing::new(wire.directories, wire.files);
        if let Some(total) = wire.total_size_bytes {
            listing.total_size_bytes = total;
        }
        Ok(listing)
    }
}
