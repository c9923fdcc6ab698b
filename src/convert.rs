//! Directory tree conversion.
//!
//! The converter mirrors a markdown content tree into an output tree of
//! indented HTML pages, one level at a time: classify entries and recurse
//! first, sort into navigation order, then render the level's pages. A
//! directory carrying the reserved posting name switches to the post-index
//! build instead of recursing.
//!
//! Errors never abort the run. Every per-entry failure is recorded in the
//! returned [`BuildOutcome`] and the walk continues with the remaining
//! siblings; the driver turns failures into stderr lines and a non-zero
//! exit code.

use crate::config::SiteConfig;
use crate::links;
use crate::markdown;
use crate::naming;
use crate::posting::{self, IndexOutcome};
use crate::prettify;
use crate::types::TreeNode;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pipeline stage a failure was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Walking the content tree.
    Traverse,
    /// Rendering and writing a single page.
    Convert,
    /// Building a post index.
    Index,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Traverse => "traverse",
            Stage::Convert => "convert",
            Stage::Index => "index",
        }
    }
}

/// A skipped entry and the error that caused the skip.
#[derive(Debug)]
pub struct Failure {
    pub stage: Stage,
    pub path: PathBuf,
    pub error: String,
}

/// A successfully converted page.
#[derive(Debug)]
pub struct WrittenPage {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Everything one conversion run produced.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    /// Structure tree of the converted site, in navigation order.
    pub tree: Vec<TreeNode>,
    /// Pages written, in conversion order.
    pub written: Vec<WrittenPage>,
    /// One entry per reserved-directory encounter.
    pub index_builds: Vec<IndexOutcome>,
    /// Entries skipped after an error.
    pub failures: Vec<Failure>,
}

impl BuildOutcome {
    /// True when no entry failed. A missing index template is a soft
    /// outcome and does not count as a failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, stage: Stage, path: &Path, error: impl std::fmt::Display) {
        self.failures.push(Failure {
            stage,
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }
}

/// Convert a content tree into a mirrored site tree.
///
/// The output directory is created before the content root is read, so a
/// bad content path still leaves an empty output root behind. The call
/// itself never fails; inspect the outcome for failures.
pub fn convert(input_dir: &Path, output_dir: &Path, config: &SiteConfig) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();
    match convert_dir(input_dir, output_dir, &config.base_url, config, &mut outcome) {
        Ok(tree) => outcome.tree = tree,
        Err(err) => outcome.record_failure(Stage::Traverse, input_dir, err),
    }
    outcome
}

/// Convert one directory level: create the mirror directory, classify
/// entries and recurse, sort into navigation order, then render this
/// level's pages.
fn convert_dir(
    input_dir: &Path,
    output_dir: &Path,
    base_url: &str,
    config: &SiteConfig,
    outcome: &mut BuildOutcome,
) -> Result<Vec<TreeNode>, ConvertError> {
    fs::create_dir_all(output_dir)?;

    let mut nodes = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                outcome.record_failure(Stage::Traverse, input_dir, err);
                continue;
            }
        };
        if let Err(err) = visit_entry(&entry, output_dir, base_url, config, &mut nodes, outcome) {
            outcome.record_failure(Stage::Traverse, &entry.path(), err);
        }
    }

    nodes.sort_by(|a, b| naming::compare_names(a.name(), b.name()));

    for node in &nodes {
        if let TreeNode::Page { name, source, .. } = node {
            let dest = output_dir.join(format!("{name}.html"));
            match convert_page(source, &dest) {
                Ok(()) => outcome.written.push(WrittenPage {
                    source: source.clone(),
                    output: dest,
                }),
                Err(err) => outcome.record_failure(Stage::Convert, source, err),
            }
        }
    }

    Ok(nodes)
}

/// Classify one directory entry. Reserved directories trigger the
/// post-index build, other directories recurse, markdown files become page
/// nodes, and everything else is ignored.
fn visit_entry(
    entry: &fs::DirEntry,
    output_dir: &Path,
    base_url: &str,
    config: &SiteConfig,
    nodes: &mut Vec<TreeNode>,
    outcome: &mut BuildOutcome,
) -> Result<(), ConvertError> {
    let file_type = entry.file_type()?;
    let name = entry.file_name().to_string_lossy().into_owned();

    if file_type.is_dir() {
        if name == config.posting_dir {
            let posting_root = output_dir.join(&name);
            match posting::build_post_index(&posting_root, &config.template_file) {
                Ok(index) => outcome.index_builds.push(index),
                Err(err) => outcome.record_failure(Stage::Index, &posting_root, err),
            }
            return Ok(());
        }
        let path = join_site_path(base_url, &name);
        let children =
            convert_dir(&entry.path(), &output_dir.join(&name), &path, config, outcome)?;
        nodes.push(TreeNode::Dir {
            name,
            path,
            children,
        });
        return Ok(());
    }

    if file_type.is_file() {
        // The extension match is deliberately case-sensitive: only `.md`.
        if let Some(stem) = name.strip_suffix(".md") {
            nodes.push(TreeNode::Page {
                name: stem.to_string(),
                path: join_site_path(base_url, stem),
                source: entry.path(),
            });
        }
    }
    Ok(())
}

/// Render one markdown source and write its indented HTML mirror.
fn convert_page(source: &Path, dest: &Path) -> Result<(), ConvertError> {
    let text = fs::read_to_string(source)?;
    let html = links::rewrite_md_hrefs(&markdown::render_markdown(&text));
    fs::write(dest, prettify::prettify(&html))?;
    Ok(())
}

/// Join a site path segment onto a base prefix. The root level with an
/// empty base yields absolute-looking paths like `/intro`.
fn join_site_path(base: &str, name: &str) -> String {
    format!("{base}/{name}")
}
