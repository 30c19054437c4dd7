//! Shallow map merging.

use std::collections::HashMap;

/// Copy every entry of each source onto `target`, left to right.
///
/// Later sources overwrite earlier ones, and all of them overwrite what
/// `target` already held. Values are cloned at the top level only: a nested
/// map in a source replaces the nested map in `target` wholesale. When `V`
/// is a shared handle such as `Rc<RefCell<_>>`, target and source end up
/// pointing at the same nested value.
///
/// Returns `target` so calls can be chained.
pub fn extend<'a, V, I>(target: &mut HashMap<String, V>, sources: I) -> &mut HashMap<String, V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = &'a HashMap<String, V>>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// [`extend`] onto a fresh map.
pub fn merged<'a, V, I>(sources: I) -> HashMap<String, V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = &'a HashMap<String, V>>,
{
    let mut target = HashMap::new();
    extend(&mut target, sources);
    target
}
