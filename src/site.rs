use std::fs;
use std::path::Path;

use crate::config::{MarkdownOptions, SiteConfig};
use crate::error::SiteError;
use crate::markdown_to_html_with_options;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Return the text of the first `# ` heading line, trimmed.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

/// Render a markdown document into `template`.
///
/// `source` names the document in errors.
pub fn render_page(
    markdown: &str,
    template: &str,
    source: &Path,
    options: &MarkdownOptions,
) -> Result<String, SiteError> {
    let content =
        markdown_to_html_with_options(markdown, options).map_err(|source_err| {
            SiteError::Markdown {
                path: source.to_path_buf(),
                source: source_err,
            }
        })?;
    let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Generate one HTML page from a markdown file and a template file.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    options: &MarkdownOptions,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
    let page = render_page(&markdown, &template, from, options)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(dest, page).map_err(SiteError::io(dest))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    options: &MarkdownOptions,
) -> Result<usize, SiteError> {
    let mut written = 0;
    for entry in sorted_entries(content_dir)? {
        let path = entry.path();
        let file_type = entry.file_type().map_err(SiteError::io(&path))?;

        if file_type.is_dir() {
            written += generate_pages_recursive(
                &path,
                template_path,
                &dest_dir.join(entry.file_name()),
                options,
            )?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template_path, &dest, options)?;
            written += 1;
        }
    }
    Ok(written)
}

/// Replace `dest` with a recursive copy of `src`. Returns the number of
/// files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if dest.exists() {
        log::debug!("removing {}", dest.display());
        fs::remove_dir_all(dest).map_err(SiteError::io(dest))?;
    }
    fs::create_dir_all(dest).map_err(SiteError::io(dest))?;

    if !src.exists() {
        log::warn!("static directory {} does not exist", src.display());
        return Ok(0);
    }
    copy_dir(src, dest)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in sorted_entries(src)? {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(SiteError::io(&from))?;

        if file_type.is_dir() {
            fs::create_dir_all(&to).map_err(SiteError::io(&to))?;
            copied += copy_dir(&from, &to)?;
        } else {
            log::info!("Copying {} to {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(SiteError::io(&from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(SiteError::io(dir))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(SiteError::io(dir))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Copy static assets and generate every content page.
pub fn build_site(site: &SiteConfig, options: &MarkdownOptions) -> Result<usize, SiteError> {
    let copied = copy_static(&site.static_dir, &site.public_dir)?;
    let pages =
        generate_pages_recursive(&site.content_dir, &site.template, &site.public_dir, options)?;
    log::info!("Built site: {pages} pages, {copied} static files");
    Ok(pages)
}
