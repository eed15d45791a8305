//! Flat menu sections as contributed by application and module config.

use tracing::debug;

use crate::domain::properties::MenuProperties;

/// Suffix appended to a section id already taken by an earlier config.
pub const DUPLICATE_SUFFIX: &str = "_dup";

/// A `(dotted id, properties)` pair, ready for [`crate::domain::MenuNode::load_sub_menus`].
pub type MenuSection = (String, MenuProperties);

/// Concatenate section lists, keeping the first occurrence of every id.
///
/// A later section whose id is already present gets [`DUPLICATE_SUFFIX`]
/// appended until its id is unique, so nothing is dropped.
pub fn flatten_configs<I, S>(configs: I) -> Vec<MenuSection>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = MenuSection>,
{
    let mut flattened: Vec<MenuSection> = Vec::new();
    for config in configs {
        for (mut id, props) in config {
            while flattened.iter().any(|(existing, _)| *existing == id) {
                id.push_str(DUPLICATE_SUFFIX);
            }
            flattened.push((id, props));
        }
    }
    debug!(sections = flattened.len(), "flattened menu configs");
    flattened
}
