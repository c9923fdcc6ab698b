//! # mdsite
//!
//! A minimal static site generator for markdown directory trees. Your
//! filesystem is the site map: directories become sections, markdown files
//! become pages, and one reserved directory is rebuilt as a token-templated
//! post index.
//!
//! # Architecture: One Recursive Pass
//!
//! ```text
//! convert   content/     →  site/       (mirrored tree of indented HTML)
//!             └ posting/ (reserved)  →  post index rebuilt in place
//! ```
//!
//! A single synchronous depth-first walk drives everything. Per directory
//! level the converter classifies entries and recurses, sorts siblings into
//! navigation order, then renders that level's pages: markdown to HTML,
//! internal `.md` links rewritten to `.html`, and a tag-based
//! re-indentation pass. A directory carrying the reserved posting name is
//! handed to the post-index builder instead of being recursed into.
//!
//! Errors are values: a run always returns a [`convert::BuildOutcome`]
//! carrying the structure tree, written pages, index builds, and per-entry
//! failures. Printing and the exit code are derived from the outcome by the
//! CLI, never decided mid-walk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`convert`] | Recursive tree mirroring and the per-page render pipeline |
//! | [`posting`] | Post index: fragment scan, placeholder substitution, category bootstrap |
//! | [`prettify`] | Heuristic tag-based HTML re-indentation |
//! | [`links`] | `.md` to `.html` href rewriting in rendered pages |
//! | [`markdown`] | CommonMark rendering, the pipeline's only black box |
//! | [`naming`] | Numeric-aware sibling name ordering |
//! | [`config`] | Optional `config.toml` loading and validation |
//! | [`types`] | The transient structure tree reported after a run |
//! | [`output`] | CLI report formatting, pure and testable |
//!
//! # Design Decisions
//!
//! ## Heuristic Indentation, Not a Parser
//!
//! [`prettify`] classifies lines with two positional predicates instead of
//! parsing HTML. Rendered markdown is regular enough for that to hold, the
//! pass is idempotent on its own output, and malformed markup degrades to
//! unindented lines rather than errors.
//!
//! ## One-Shot Templates
//!
//! The post index consumes its `{{name}}` placeholders on the first build.
//! Rebuilding an already-built template is a byte-level no-op, which keeps
//! repeated builds safe without tracking template state anywhere.
//!
//! ## Failures Do Not Abort
//!
//! A broken page or unreadable entry is recorded in the outcome and
//! skipped; the rest of the site still builds. The CLI exits non-zero when
//! anything was skipped, so automation notices a degraded build without
//! parsing logs.

pub mod config;
pub mod convert;
pub mod links;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod posting;
pub mod prettify;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
