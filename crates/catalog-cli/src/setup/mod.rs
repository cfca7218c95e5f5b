//! On-disk preparation of a catalog before it is served.
//!
//! Creates the source, static and build directories, writes a starter entry
//! point into an empty catalog, and renders `index.html` into the build
//! directory. Existing user files are never overwritten.

mod templates;

pub use templates::{render_html, INDEX_HTML, INDEX_JS, PUBLIC_URL_PLACEHOLDER};

use std::path::Path;

use crate::error::LaunchError;
use crate::paths::ResolvedPaths;

/// Prepare the catalog described by `paths`.
///
/// # Errors
///
/// Returns [`LaunchError::Setup`] naming the file or directory that could
/// not be read or written.
pub async fn setup_catalog(paths: &ResolvedPaths) -> Result<(), LaunchError> {
    for dir in [
        &paths.catalog_src_dir,
        &paths.catalog_static_dir,
        &paths.catalog_build_dir,
    ] {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| setup_error(dir, source))?;
    }

    if !exists(&paths.catalog_index_js).await? {
        tracing::info!(path = %paths.catalog_index_js.display(), "writing starter catalog entry");
        write(&paths.catalog_index_js, INDEX_JS).await?;
    }

    let template = if exists(&paths.catalog_template).await? {
        tokio::fs::read_to_string(&paths.catalog_template)
            .await
            .map_err(|source| setup_error(&paths.catalog_template, source))?
    } else {
        INDEX_HTML.to_string()
    };

    let index_html = paths.catalog_build_dir.join("index.html");
    write(&index_html, &render_html(&template, &paths.public_url)).await?;
    tracing::debug!(path = %index_html.display(), "rendered index.html");

    Ok(())
}

async fn exists(path: &Path) -> Result<bool, LaunchError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|source| setup_error(path, source))
}

async fn write(path: &Path, content: &str) -> Result<(), LaunchError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| setup_error(path, source))
}

fn setup_error(path: &Path, source: std::io::Error) -> LaunchError {
    LaunchError::Setup {
        path: path.to_path_buf(),
        source,
    }
}
