//! HTML fragment helpers over the `tl` DOM.
//!
//! The transformer needs markup *as it appeared in the input*: `tl` keeps
//! raw source spans for every node, so verbatim content is a slice copy
//! rather than a re-serialization. Nothing here mutates the parsed tree;
//! every function hands back a freshly allocated string.

use tl::{HTMLTag, NodeHandle, Parser};

/// Full markup of an element, verbatim from the source fragment.
pub(crate) fn raw_markup(tag: &HTMLTag) -> String {
    tag.raw().as_utf8_str().into_owned()
}

/// Verbatim markup of any node (element, text, or comment).
pub(crate) fn node_markup(handle: NodeHandle, parser: &Parser) -> Option<String> {
    let node = handle.get(parser)?;
    let markup = match node {
        tl::Node::Tag(tag) => tag.raw().as_utf8_str(),
        tl::Node::Raw(bytes) | tl::Node::Comment(bytes) => bytes.as_utf8_str(),
    };
    Some(markup.into_owned())
}

/// Markup of an element's children, concatenated, without the element's own
/// open/close tags.
pub(crate) fn inner_markup(tag: &HTMLTag, parser: &Parser) -> String {
    let mut markup = String::new();
    for handle in tag.children().top().iter() {
        if let Some(piece) = node_markup(*handle, parser) {
            markup.push_str(&piece);
        }
    }
    markup
}

/// Text content of an element and its descendants, tags ignored.
pub(crate) fn text_content(tag: &HTMLTag, parser: &Parser) -> String {
    tag.inner_text(parser).into_owned()
}

/// Get an attribute value from an element.
pub(crate) fn attribute(tag: &HTMLTag, name: &'static str) -> Option<String> {
    tag.attributes()
        .get(name)
        .flatten()
        .map(|value| value.as_utf8_str().into_owned())
}

/// Whether the element's `class` attribute contains the given class.
pub(crate) fn has_class(tag: &HTMLTag, class: &str) -> bool {
    tag.attributes().is_class_member(class)
}

/// First descendant element with the given tag name, in document order.
pub(crate) fn find_descendant<'t, 'a>(
    tag: &'t HTMLTag<'a>,
    parser: &'t Parser<'a>,
    name: &str,
) -> Option<&'t HTMLTag<'a>> {
    find_descendant_by(tag, parser, &|candidate| {
        candidate.name().as_utf8_str() == name
    })
}

/// First descendant element with the given tag name and class.
pub(crate) fn find_descendant_with_class<'t, 'a>(
    tag: &'t HTMLTag<'a>,
    parser: &'t Parser<'a>,
    name: &str,
    class: &str,
) -> Option<&'t HTMLTag<'a>> {
    find_descendant_by(tag, parser, &|candidate| {
        candidate.name().as_utf8_str() == name && has_class(candidate, class)
    })
}

fn find_descendant_by<'t, 'a>(
    tag: &'t HTMLTag<'a>,
    parser: &'t Parser<'a>,
    matches: &dyn Fn(&HTMLTag) -> bool,
) -> Option<&'t HTMLTag<'a>> {
    for handle in tag.children().top().iter() {
        let Some(node) = handle.get(parser) else {
            continue;
        };
        let Some(child) = node.as_tag() else {
            continue;
        };
        if matches(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant_by(child, parser, matches) {
            return Some(found);
        }
    }
    None
}

/// The opening tag of an element's raw markup, `<` through the matching `>`.
/// Quote-aware so a `>` inside an attribute value does not end the scan.
pub(crate) fn open_tag(raw: &str) -> &str {
    let mut in_quote: Option<char> = None;
    for (i, c) in raw.char_indices() {
        match c {
            '"' | '\'' => match in_quote {
                Some(q) if q == c => in_quote = None,
                Some(_) => {}
                None => in_quote = Some(c),
            },
            '>' if in_quote.is_none() => return &raw[..=i],
            _ => {}
        }
    }
    raw
}
