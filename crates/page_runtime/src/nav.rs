//! Active navigation link matching.

/// Returns whether a nav link with `href` should be marked active on `current_path`.
///
/// A link is active when its `href` is a string prefix of the current path. Empty hrefs and the
/// root link `/` never match. There is no longest-prefix tie-break: `/files` and `/files/shared`
/// are both active on `/files/shared/x`.
pub fn is_active_nav_link(current_path: &str, href: Option<&str>) -> bool {
    match href {
        Some(href) if !href.is_empty() && href != "/" => current_path.starts_with(href),
        _ => false,
    }
}

/// Returns the indices of every active link, in document order.
pub fn active_nav_links<'a>(
    current_path: &str,
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<usize> {
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_active_nav_link(current_path, *href))
        .map(|(index, _)| index)
        .collect()
}
