//! # chapterize
//!
//! Transform one chapter of a rendered AsciiDoc document (HTML produced by
//! Asciidoctor) into a structured, ordered collection of typed content
//! blocks plus extracted image metadata, so a downstream renderer can
//! reassemble or re-flow the chapter without re-parsing markup each time.
//!
//! The transformer is a pure function over the chapter fragment: it walks
//! the direct children of the chapter's section container, classifies each
//! node by tag and class, normalizes or restructures its markup per a fixed
//! set of rules, and emits [`ChapterElement`]s in reading order alongside
//! [`ImageRef`]s on an independent position counter. Re-running it on the
//! same input produces identical output, so callers can replace a chapter's
//! stored content idempotently on re-ingestion.
//!
//! ## Quick Start
//!
//! ```
//! use chapterize::{transform_chapter, ElementTag};
//!
//! let html = r#"<div class="sect1">
//! <h2 id="_getting_started">1. Getting Started</h2>
//! <div class="paragraph"><p>Welcome.</p></div>
//! </div>"#;
//!
//! let chapter = transform_chapter(html)?;
//! assert_eq!(chapter.elements.len(), 1);
//! assert_eq!(chapter.elements[0].tag, ElementTag::P);
//! assert_eq!(chapter.elements[0].content, "<p>Welcome.</p>");
//! assert_eq!(chapter.elements[0].position, 1);
//! # Ok::<(), chapterize::Error>(())
//! ```
//!
//! The chapter title heading emits no element: the title is derived from it
//! by an earlier stage. Node shapes the dispatch table does not recognize
//! are skipped, never errors; only an empty or rootless fragment fails the
//! call.

pub mod chapter;
pub mod error;

mod classify;
mod html;
mod util;

pub use chapter::{ChapterContent, ChapterElement, ElementTag, ImageRef, transform_chapter};
pub use error::{Error, Result};
