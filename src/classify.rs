//! Classification of a chapter's child nodes.
//!
//! Asciidoctor renders every block as a tag plus a well-known class
//! (`div.paragraph`, `div.listingblock`, ...). Classification happens once,
//! up front, into a closed [`NodeKind`] so the dispatch in
//! [`crate::chapter`] is an exhaustive match. Shapes this crate does not
//! know map to `Unrecognized` and are skipped, which keeps the walk open to
//! future markup variants without silent fallthrough.

use tl::HTMLTag;

use crate::html;

/// The shape of one child node, derived from tag name + class attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// A bare heading (`h2`..`h6`). At the chapter's top level this is the
    /// chapter title, already consumed upstream.
    Heading(u8),
    /// `div.paragraph`
    Paragraph,
    /// A bare `table` element.
    Table,
    /// `div.listingblock` (source listing with optional title).
    ListingBlock,
    /// `div.imageblock` (image plus optional figure title).
    ImageBlock,
    /// `div.sectN` nested section; carries the section depth N (>= 2).
    Section(u8),
    /// `div.admonitionblock` (note/tip/warning callout).
    AdmonitionBlock,
    /// `div.ulist`
    BulletList,
    /// `div.olist`
    NumberedList,
    /// `div.quoteblock`
    QuoteBlock,
    /// Anything else; emits nothing.
    Unrecognized,
}

impl NodeKind {
    pub(crate) fn classify(tag: &HTMLTag) -> NodeKind {
        let name = tag.name().as_utf8_str();
        if let Some(level) = heading_level(&name) {
            return NodeKind::Heading(level);
        }
        match name.as_ref() {
            "table" => return NodeKind::Table,
            "div" => {}
            _ => return NodeKind::Unrecognized,
        }

        if html::has_class(tag, "paragraph") {
            NodeKind::Paragraph
        } else if html::has_class(tag, "listingblock") {
            NodeKind::ListingBlock
        } else if html::has_class(tag, "imageblock") {
            NodeKind::ImageBlock
        } else if html::has_class(tag, "admonitionblock") {
            NodeKind::AdmonitionBlock
        } else if html::has_class(tag, "ulist") {
            NodeKind::BulletList
        } else if html::has_class(tag, "olist") {
            NodeKind::NumberedList
        } else if html::has_class(tag, "quoteblock") {
            NodeKind::QuoteBlock
        } else if let Some(depth) = section_depth(tag) {
            NodeKind::Section(depth)
        } else {
            NodeKind::Unrecognized
        }
    }
}

/// Parse `h1`..`h6` into its level.
pub(crate) fn heading_level(name: &str) -> Option<u8> {
    let level: u8 = name.strip_prefix('h')?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Parse a `sectN` class into the section depth N. Depth 1 is the chapter
/// root itself, never a child, so only N >= 2 classifies as a section.
fn section_depth(tag: &HTMLTag) -> Option<u8> {
    let classes = html::attribute(tag, "class")?;
    classes
        .split_ascii_whitespace()
        .find_map(|class| class.strip_prefix("sect")?.parse::<u8>().ok())
        .filter(|&depth| depth >= 2)
}
