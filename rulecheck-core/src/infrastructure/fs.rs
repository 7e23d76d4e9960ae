use crate::domain::review::SourceFile;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;

/// Reads a file to review and tags it with a language guessed from its extension.
pub fn read_source_file<P: AsRef<Path>>(path: P) -> Result<SourceFile, InfrastructureError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(InfrastructureError::SourceFileNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;

    Ok(SourceFile::new(
        path.display().to_string(),
        content,
        detect_language(path),
    ))
}

/// Language label used in the prompt's code fences. Unknown extensions map to `text`.
pub fn detect_language(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "rs" => "rust",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "jsx",
        "py" => "python",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "rb" => "ruby",
        "php" => "php",
        "cs" => "csharp",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "swift" => "swift",
        "scala" => "scala",
        "sh" | "bash" => "bash",
        "sql" => "sql",
        "vue" => "vue",
        "svelte" => "svelte",
        "html" | "htm" => "html",
        "css" | "scss" => "css",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "md" => "markdown",
        _ => "text",
    }
}
