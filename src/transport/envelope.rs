//! Locating entities inside the response shapes the carrier returns.

use super::tree::XmlValue;

/// First non-blank node found along any of `paths`.
///
/// The same entity may arrive bare (`brand`) or inside an envelope
/// (`brandresponse/brand`); a blank element counts as absent.
pub fn find_entity<'a>(tree: &'a XmlValue, paths: &[&[&str]]) -> Option<&'a XmlValue> {
    paths
        .iter()
        .filter_map(|path| tree.path(path))
        .find(|node| !node.is_empty())
}

/// Items of the first collection found along any of `paths`, in document order.
///
/// A single item is returned as a one-element list; no collection at all is empty.
pub fn find_collection<'a>(tree: &'a XmlValue, paths: &[&[&str]]) -> Vec<&'a XmlValue> {
    find_entity(tree, paths)
        .map(XmlValue::items)
        .unwrap_or_default()
}
