//! Post index building.
//!
//! A directory carrying the reserved posting name is not converted like the
//! rest of the tree. Its mirrored output directory is expected to already
//! hold rendered HTML fragments plus a template file; this module scans the
//! fragments, resolves the template's `{{name}}` placeholders to fragment
//! paths, injects the category bootstrap, and writes the template back in
//! place.
//!
//! The build is one-shot: placeholders are consumed by the first successful
//! run, so rebuilding an already-built template is a byte-level no-op.

use regex::{NoExpand, Regex};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid placeholder for fragment `{name}`: {source}")]
    Placeholder { name: String, source: regex::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rendered HTML file discovered under the posting root.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Base file name without the `.html` extension; placeholders are
    /// matched against this.
    pub name: String,
    /// Path relative to the posting root: `./`-prefixed, forward slashes on
    /// every platform.
    pub path: String,
}

/// What one post-index build did.
#[derive(Debug)]
pub enum IndexOutcome {
    /// Template rewritten in place.
    Built(IndexSummary),
    /// No template file in the root; nothing was read or written.
    TemplateMissing(PathBuf),
}

/// Details of a successful index build.
#[derive(Debug)]
pub struct IndexSummary {
    /// The rewritten template file.
    pub template: PathBuf,
    /// Fragments found under the root, deduplicated by name.
    pub fragments: Vec<Fragment>,
    /// Immediate subdirectory names, in directory listing order.
    pub categories: Vec<String>,
}

/// Build the post index for one posting output root.
///
/// A missing template is a soft outcome so the caller decides how loudly to
/// report it; every other failure comes back as an [`IndexError`]. Safe to
/// call repeatedly on the same root.
pub fn build_post_index(root: &Path, template_file: &str) -> Result<IndexOutcome, IndexError> {
    let template_path = root.join(template_file);
    if !template_path.exists() {
        return Ok(IndexOutcome::TemplateMissing(template_path));
    }

    let mut template = fs::read_to_string(&template_path)?;
    let fragments = collect_fragments(root)?;
    for fragment in &fragments {
        let token = placeholder_pattern(&fragment.name)?;
        template = token
            .replace_all(&template, NoExpand(&fragment.path))
            .into_owned();
    }

    let categories = collect_categories(root)?;
    template = inject_category_bootstrap(&template, template_file, &categories)?;
    fs::write(&template_path, &template)?;

    Ok(IndexOutcome::Built(IndexSummary {
        template: template_path,
        fragments,
        categories,
    }))
}

/// Recursively collect every `.html` file under the root, the template
/// included, keyed by base name. On a name collision the later file in the
/// per-directory sorted walk wins.
fn collect_fragments(root: &Path) -> Result<Vec<Fragment>, IndexError> {
    let mut by_name: BTreeMap<String, Fragment> = BTreeMap::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let Some(name) = file_name.strip_suffix(".html") else {
            continue;
        };
        // A bare ".html" has no usable name.
        if name.is_empty() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap();
        let slashed = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        by_name.insert(
            name.to_string(),
            Fragment {
                name: name.to_string(),
                path: format!("./{slashed}"),
            },
        );
    }
    Ok(by_name.into_values().collect())
}

/// Compile the whitespace-tolerant placeholder token for one fragment name:
/// `{{name}}`, `{{ name }}` and `{{  name  }}` all match.
fn placeholder_pattern(name: &str) -> Result<Regex, IndexError> {
    let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(name));
    Regex::new(&pattern).map_err(|source| IndexError::Placeholder {
        name: name.to_string(),
        source,
    })
}

/// Immediate subdirectories of the posting root. Deliberately unsorted: the
/// directory listing order is the category order the page shows.
fn collect_categories(root: &Path) -> Result<Vec<String>, IndexError> {
    let mut categories = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            categories.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(categories)
}

/// Replace the first `{{categories}}` token with the two-script bootstrap:
/// a loader for the template's companion script, then an inline
/// `setupCategoryFilter` call carrying the category names as a JSON array.
fn inject_category_bootstrap(
    template: &str,
    template_file: &str,
    categories: &[String],
) -> Result<String, IndexError> {
    let stem = template_file.strip_suffix(".html").unwrap_or(template_file);
    let json = serde_json::to_string(categories)?;
    let bootstrap = format!(
        "<script src=\"./{stem}.js\"></script>\n<script>setupCategoryFilter({json});</script>"
    );
    Ok(template.replacen("{{categories}}", &bootstrap, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    fn built(outcome: IndexOutcome) -> IndexSummary {
        match outcome {
            IndexOutcome::Built(summary) => summary,
            IndexOutcome::TemplateMissing(path) => {
                panic!("expected a built index, template missing at {path:?}")
            }
        }
    }

    #[test]
    fn missing_template_is_a_soft_outcome() {
        let dir = TempDir::new().unwrap();
        let outcome = build_post_index(dir.path(), "postMain.html").unwrap();
        assert!(matches!(outcome, IndexOutcome::TemplateMissing(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn resolves_placeholders_to_relative_fragment_paths() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "<a href=\"{{ post1 }}\">one</a>");
        write_file(dir.path(), "tech/post1.html", "<p>post</p>");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert!(out.contains("<a href=\"./tech/post1.html\">one</a>"), "{out}");
    }

    #[test]
    fn placeholder_whitespace_is_tolerated() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{post1}} {{ post1 }} {{  post1  }}");
        write_file(dir.path(), "post1.html", "");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out, "./post1.html ./post1.html ./post1.html");
    }

    #[test]
    fn unknown_tokens_stay_unresolved() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{missing}} and {{notes}}");
        write_file(dir.path(), "notes.txt", "not a fragment");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out, "{{missing}} and {{notes}}");
    }

    #[test]
    fn template_lists_itself_as_a_fragment() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "self: {{postMain}}");

        let summary = built(build_post_index(dir.path(), "postMain.html").unwrap());

        assert!(summary.fragments.contains(&Fragment {
            name: "postMain".into(),
            path: "./postMain.html".into(),
        }));
        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out, "self: ./postMain.html");
    }

    #[test]
    fn name_collision_keeps_the_later_discovery() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{a}}");
        write_file(dir.path(), "a.html", "");
        write_file(dir.path(), "sub/a.html", "");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out, "./sub/a.html");
    }

    #[test]
    fn injects_the_category_bootstrap() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "<main>{{categories}}</main>");
        write_file(dir.path(), "tech/post1.html", "");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert!(
            out.contains(
                "<script src=\"./postMain.js\"></script>\n\
                 <script>setupCategoryFilter([\"tech\"]);</script>"
            ),
            "{out}"
        );
    }

    #[test]
    fn only_top_level_directories_become_categories() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{categories}}");
        write_file(dir.path(), "tech/post1.html", "");
        write_file(dir.path(), "life/post2.html", "");
        write_file(dir.path(), "tech/deep/post3.html", "");

        let summary = built(build_post_index(dir.path(), "postMain.html").unwrap());

        let mut categories = summary.categories.clone();
        categories.sort();
        assert_eq!(categories, ["life", "tech"]);

        // The injected call carries exactly the same names.
        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        let start = out.find("setupCategoryFilter(").unwrap() + "setupCategoryFilter(".len();
        let end = start + out[start..].find(')').unwrap();
        let mut injected: Vec<String> = serde_json::from_str(&out[start..end]).unwrap();
        injected.sort();
        assert_eq!(injected, ["life", "tech"]);
    }

    #[test]
    fn categories_token_is_replaced_once() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{categories}}|{{categories}}");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out.matches("{{categories}}").count(), 1);
        assert_eq!(out.matches("setupCategoryFilter").count(), 1);
    }

    #[test]
    fn rebuild_is_a_byte_level_noop() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "postMain.html",
            "<a href=\"{{post1}}\">x</a>{{categories}}",
        );
        write_file(dir.path(), "tech/post1.html", "");

        build_post_index(dir.path(), "postMain.html").unwrap();
        let first = fs::read_to_string(dir.path().join("postMain.html")).unwrap();

        build_post_index(dir.path(), "postMain.html").unwrap();
        let second = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dollar_signs_in_names_and_paths_stay_literal() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "postMain.html", "{{pri$ce}}");
        write_file(dir.path(), "pri$ce.html", "");

        build_post_index(dir.path(), "postMain.html").unwrap();

        let out = fs::read_to_string(dir.path().join("postMain.html")).unwrap();
        assert_eq!(out, "./pri$ce.html");
    }
}
