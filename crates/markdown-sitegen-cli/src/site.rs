use markdown_sitegen_engine::{MarkdownError, extract_title, markdown_to_html};
use std::fs;
use std::path::{Path, PathBuf};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to scan content directory: {0}")]
    Scan(#[from] glob::GlobError),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates `dir` if needed, then deletes everything inside it.
pub fn prepare_public_dir(dir: &Path) -> Result<(), SiteError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(io_err(dir))?;
        log::info!("Destination folder created at: {}", dir.display());
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        log::debug!("Removing {}", path.display());
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(io_err(&path))?;
        } else {
            fs::remove_file(&path).map_err(io_err(&path))?;
        }
    }
    Ok(())
}

/// Recursively copies `src` into `dest`, returning the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotFound(src.to_path_buf()));
    }
    fs::create_dir_all(dest).map_err(io_err(dest))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_err(src))? {
        let path = entry.map_err(io_err(src))?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            copied += copy_static(&path, &target)?;
        } else {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_err(&path))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Fills `template` with the title and rendered body of `markdown`.
///
/// Root-relative `href="/` and `src="/` references are rebased onto
/// `base_path`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, MarkdownError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}")))
}

/// Converts one markdown file into an HTML page at `dest`.
pub fn generate_page(
    from: &Path,
    template: &str,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_err(from))?;
    let page = render_page(&markdown, template, base_path).map_err(|source| {
        SiteError::Markdown {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(dest, page).map_err(io_err(dest))
}

/// Generates a page for every `.md` file below `content_dir`.
///
/// The directory layout is mirrored under `dest_dir`, with `.md` replaced by
/// `.html`. Returns the written pages, sorted.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::NotFound(content_dir.to_path_buf()));
    }
    let template = fs::read_to_string(template_path).map_err(io_err(template_path))?;

    let pattern = format!(
        "{}/**/*.md",
        glob::Pattern::escape(&content_dir.to_string_lossy())
    );

    let mut written = vec![];
    for entry in glob::glob(&pattern)? {
        let from = entry?;
        let relative = from.strip_prefix(content_dir).unwrap_or(&from);
        let dest = dest_dir.join(relative).with_extension("html");
        generate_page(&from, &template, &dest, base_path)?;
        written.push(dest);
    }
    written.sort();
    Ok(written)
}
