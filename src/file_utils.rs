use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File and directory utilities

/// Extensions treated as wikitext documents when scanning a directory
const WIKITEXT_EXTENSIONS: [&str; 3] = ["wiki", "wikitext", "txt"];

/// File operations utility
pub struct FileManager;

impl FileManager {
    /// Check file existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Check directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Read a document as an ordered line sequence
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {:?}", path.as_ref()))
    }

    /// Output path for a translated document: the input path with `.out` appended
    pub fn output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        let input_file = input_file.as_ref();
        let mut name = input_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        name.push_str(".out");
        input_file.with_file_name(name)
    }

    /// Find wikitext documents under a directory
    pub fn find_wikitext_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy();
                    if WIKITEXT_EXTENSIONS
                        .iter()
                        .any(|e| ext.eq_ignore_ascii_case(e))
                    {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }
}
