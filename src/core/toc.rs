/// Section identifier targeted by a TOC anchor, i.e. the fragment without
/// the leading `#`. Links that point anywhere else (absolute URLs, bare `#`,
/// empty hrefs) yield `None`.
#[inline]
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}
