//! The chapter transformer.
//!
//! Walks the direct children of a chapter's rendered HTML fragment, in
//! document order, and folds them into an ordered sequence of typed content
//! elements plus an ordered sequence of image records. One pass, no
//! recursion beyond what the section and admonition rules call for, and no
//! mutation of the parsed input tree. The walker's two position counters
//! are the only state.

use tl::{HTMLTag, NodeHandle, Parser};

use crate::classify::{NodeKind, heading_level};
use crate::error::{Error, Result};
use crate::html;
use crate::util;

/// Normalized content kind of one chapter element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum ElementTag {
    P,
    H2,
    H3,
    H4,
    H5,
    Table,
    Ul,
    Ol,
    Img,
    Div,
}

impl ElementTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementTag::P => "p",
            ElementTag::H2 => "h2",
            ElementTag::H3 => "h3",
            ElementTag::H4 => "h4",
            ElementTag::H5 => "h5",
            ElementTag::Table => "table",
            ElementTag::Ul => "ul",
            ElementTag::Ol => "ol",
            ElementTag::Img => "img",
            ElementTag::Div => "div",
        }
    }

    /// The element tag for a demoted heading, if the level is representable.
    fn from_heading_level(level: u8) -> Option<ElementTag> {
        match level {
            2 => Some(ElementTag::H2),
            3 => Some(ElementTag::H3),
            4 => Some(ElementTag::H4),
            5 => Some(ElementTag::H5),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered, typed content block extracted from a chapter.
///
/// `content` semantics depend on `tag`: inner markup for unwrapped blocks
/// (`p`, `ul`, `ol`), full verbatim markup for `table` and `div`, and the
/// image source path for `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ChapterElement {
    pub tag: ElementTag,
    pub content: String,
    /// 1-based, dense; defines the chapter reading order.
    pub position: u32,
}

/// Metadata for one image reference, separate from its inline element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ImageRef {
    /// Basename of the image source path.
    pub filename: String,
    /// Figure title with any leading `Figure N.` numbering stripped;
    /// empty if the block carries no title.
    pub caption: String,
    /// 1-based, dense, counted across images only.
    pub position: u32,
}

/// The transformer's output: both collections fully supersede any prior
/// result for the same chapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ChapterContent {
    pub elements: Vec<ChapterElement>,
    pub images: Vec<ImageRef>,
}

/// Transform one chapter's rendered HTML fragment into ordered elements and
/// image records.
///
/// The fragment's first element is taken as the chapter's section container
/// (`div.sect1` in Asciidoctor output) and its direct children are visited
/// in document order. Unrecognized shapes emit nothing; malformed blocks
/// are skipped without failing the call. Only an empty or rootless fragment
/// is an error.
///
/// The call is pure: identical input yields identical output, and
/// concurrent calls for different chapters need no coordination.
pub fn transform_chapter(html: &str) -> Result<ChapterContent> {
    if html.trim().is_empty() {
        return Err(Error::InvalidInput("empty fragment".into()));
    }
    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        return Err(Error::InvalidInput("unparseable fragment".into()));
    };
    let parser = dom.parser();
    let root = dom
        .children()
        .iter()
        .find_map(|handle| handle.get(parser).and_then(|node| node.as_tag()))
        .ok_or_else(|| Error::InvalidInput("fragment has no root element".into()))?;

    let mut walker = Walker::new(parser);
    walker.walk_children(root, None);
    Ok(ChapterContent {
        elements: walker.elements,
        images: walker.images,
    })
}

/// One-pass fold over the chapter tree. Element and image positions are
/// independent counters, monotonically increasing, never reset mid-chapter.
struct Walker<'p, 'a> {
    parser: &'p Parser<'a>,
    elements: Vec<ChapterElement>,
    images: Vec<ImageRef>,
    next_element: u32,
    next_image: u32,
}

impl<'p, 'a> Walker<'p, 'a> {
    fn new(parser: &'p Parser<'a>) -> Self {
        Self {
            parser,
            elements: Vec::new(),
            images: Vec::new(),
            next_element: 1,
            next_image: 1,
        }
    }

    /// Dispatch every element child of `tag`, optionally skipping one node
    /// (a section's already-consumed heading). Text and comment nodes
    /// between blocks carry nothing and are ignored.
    fn walk_children(&mut self, tag: &'p HTMLTag<'a>, skip: Option<NodeHandle>) {
        let parser = self.parser;
        for handle in tag.children().top().iter() {
            if skip == Some(*handle) {
                continue;
            }
            let Some(child) = handle.get(parser).and_then(|node| node.as_tag()) else {
                continue;
            };
            self.dispatch(child);
        }
    }

    fn dispatch(&mut self, tag: &'p HTMLTag<'a>) {
        match NodeKind::classify(tag) {
            NodeKind::Heading(_) => {
                // The chapter title; already derived from this node upstream.
            }
            NodeKind::Paragraph => self.unwrap_block(tag, ElementTag::P, "p"),
            NodeKind::BulletList => self.unwrap_block(tag, ElementTag::Ul, "ul"),
            NodeKind::NumberedList => self.unwrap_block(tag, ElementTag::Ol, "ol"),
            NodeKind::Table => self.push_element(ElementTag::Table, html::raw_markup(tag)),
            NodeKind::ListingBlock | NodeKind::QuoteBlock => {
                self.push_element(ElementTag::Div, html::raw_markup(tag));
            }
            NodeKind::ImageBlock => self.image_block(tag),
            NodeKind::Section(depth) => self.section(tag, depth),
            NodeKind::AdmonitionBlock => self.admonition(tag),
            NodeKind::Unrecognized => {
                log::debug!("skipping unrecognized node <{}>", tag.name().as_utf8_str());
            }
        }
    }

    /// Emit the wrapper's single inner element (`div.paragraph` -> `p`,
    /// `div.ulist` -> `ul`, `div.olist` -> `ol`), discarding the wrapper.
    fn unwrap_block(&mut self, tag: &'p HTMLTag<'a>, element_tag: ElementTag, inner: &str) {
        let Some(child) = html::find_descendant(tag, self.parser, inner) else {
            log::warn!("{element_tag} wrapper without an inner <{inner}>, skipping");
            return;
        };
        self.push_element(element_tag, html::raw_markup(child));
    }

    /// `div.imageblock`: emit an `img` element carrying the source path and
    /// a correlated ImageRef on the independent image counter.
    fn image_block(&mut self, tag: &'p HTMLTag<'a>) {
        let parser = self.parser;
        let src = html::find_descendant(tag, parser, "img")
            .and_then(|img| html::attribute(img, "src"));
        let Some(src) = src else {
            log::warn!("imageblock without an image source, skipping");
            return;
        };
        let caption = html::find_descendant_with_class(tag, parser, "div", "title")
            .map(|title| {
                let text = html::text_content(title, parser);
                util::strip_figure_prefix(text.trim()).to_string()
            })
            .unwrap_or_default();

        self.images.push(ImageRef {
            filename: util::image_basename(&src).to_string(),
            caption,
            position: self.next_image,
        });
        self.next_image += 1;
        self.push_element(ElementTag::Img, src);
    }

    /// `div.sectN`: demote the section heading one level (the document's own
    /// level-1 title was consumed as the chapter title, so every subordinate
    /// level shifts up by one), then run the remaining children through the
    /// same dispatch table.
    fn section(&mut self, tag: &'p HTMLTag<'a>, depth: u8) {
        let parser = self.parser;
        // The heading is searched anywhere among the children and always
        // emitted first; Asciidoctor renders it as the first child, so for a
        // block where it is not, the demoted heading still precedes the
        // section's other blocks in the output.
        let mut heading = None;
        for handle in tag.children().top().iter() {
            if let Some(child) = handle.get(parser).and_then(|node| node.as_tag())
                && let Some(level) = heading_level(&child.name().as_utf8_str())
            {
                heading = Some((*handle, child, level));
                break;
            }
        }
        let Some((heading_handle, heading, level)) = heading else {
            log::warn!("sect{depth} block without a heading, skipping");
            return;
        };
        if level != depth.saturating_add(1) {
            log::debug!("sect{depth} heading is h{level}, expected h{}", depth.saturating_add(1));
        }
        let Some(element_tag) = ElementTag::from_heading_level(level - 1) else {
            log::warn!("cannot demote h{level} heading in sect{depth} block, skipping");
            return;
        };
        self.push_element(element_tag, demote_heading(heading, parser, level - 1));
        self.walk_children(tag, Some(heading_handle));
    }

    /// `div.admonitionblock`: the rendered layout is a one-row table with an
    /// icon cell and a content cell. Keep the outer wrapper, keep the content
    /// cell's children in order, drop the table scaffolding and the icon.
    fn admonition(&mut self, tag: &'p HTMLTag<'a>) {
        let parser = self.parser;
        let Some(cell) = html::find_descendant_with_class(tag, parser, "td", "content") else {
            log::warn!("admonitionblock without a content cell, skipping");
            return;
        };
        let raw = html::raw_markup(tag);
        let content = format!(
            "{}{}</div>",
            html::open_tag(&raw),
            html::inner_markup(cell, parser)
        );
        self.push_element(ElementTag::Div, content);
    }

    fn push_element(&mut self, tag: ElementTag, content: String) {
        self.elements.push(ChapterElement {
            tag,
            content,
            position: self.next_element,
        });
        self.next_element += 1;
    }
}

/// Rewrite a heading one level shallower, keeping its attributes and inner
/// markup untouched.
fn demote_heading(heading: &HTMLTag, parser: &Parser, level: u8) -> String {
    let raw = heading.raw().as_utf8_str();
    let open = html::open_tag(&raw);
    // Everything after the tag name: attributes (if any) plus the closing `>`.
    let attrs = &open[1 + heading.name().as_utf8_str().len()..];
    format!(
        "<h{level}{attrs}{inner}</h{level}>",
        inner = html::inner_markup(heading, parser)
    )
}
