/// A single directory in the scanned tree.
///
/// Each `Node` carries two tiers of counters: *immediate* values contributed
/// by the directory's own entries, and *total* values that fold in every
/// descendant. Totals are written by the walker's aggregation pass and are
/// zero until that pass has visited the node.
use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Aggregate record for one filesystem directory.
///
/// Children are keyed by name — unique within a parent, which the filesystem
/// guarantees. Iteration order is name order; consumers that want a
/// size-sorted view re-sort [`Node::child_list`] themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Absolute path of the directory.
    pub path: String,

    /// Display name (basename). For a filesystem root like `/` or `C:\`,
    /// where there is no basename, this is the path itself.
    pub name: CompactString,

    /// Number of regular files directly in this directory.
    #[serde(default)]
    pub immediate_files: u64,

    /// Number of non-excluded subdirectories directly in this directory.
    #[serde(default)]
    pub immediate_dirs: u64,

    /// Byte sum of the files directly in this directory.
    #[serde(default)]
    pub immediate_size: u64,

    /// Files in this directory and every descendant.
    #[serde(default)]
    pub total_files: u64,

    /// Every descendant directory, counted exactly once (direct children
    /// included). Zero for a directory with no subdirectories.
    #[serde(default)]
    pub total_dirs: u64,

    /// Byte sum over this directory and every descendant.
    #[serde(default)]
    pub total_size: u64,

    /// Child directories keyed by name.
    ///
    /// Persisted as a flat array of child objects; the map is rebuilt from
    /// each child's `name` on load, so snapshot consumers never depend on
    /// any particular child order.
    #[serde(
        default,
        serialize_with = "children_as_seq",
        deserialize_with = "children_from_seq",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub children: BTreeMap<CompactString, Node>,
}

impl Node {
    /// Create an empty node for the given directory path.
    pub fn new(path: &Path) -> Self {
        let path_str = path.to_string_lossy().into_owned();
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_else(|| CompactString::new(&path_str));
        Self {
            path: path_str,
            name,
            ..Self::default()
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Direct children as a list, in name order.
    pub fn child_list(&self) -> Vec<&Node> {
        self.children.values().collect()
    }

    /// `true` if this directory has no scanned subdirectories.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first iteration over this node and every descendant.
    ///
    /// Uses an explicit stack so arbitrarily deep trees cannot overflow
    /// the call stack, same as the walker that built them.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }
}

/// Serialize the child map as a plain array of child nodes.
fn children_as_seq<S>(children: &BTreeMap<CompactString, Node>, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.collect_seq(children.values())
}

/// Rebuild the name-keyed child map from a serialized array.
fn children_from_seq<'de, D>(de: D) -> Result<BTreeMap<CompactString, Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes = Vec::<Node>::deserialize(de)?;
    Ok(nodes
        .into_iter()
        .map(|node| (node.name.clone(), node))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn node_with(name: &str, files: u64, size: u64) -> Node {
        Node {
            path: format!("/tmp/{name}"),
            name: CompactString::new(name),
            immediate_files: files,
            immediate_size: size,
            total_files: files,
            total_size: size,
            ..Node::default()
        }
    }

    #[test]
    fn new_node_uses_basename() {
        let n = Node::new(&PathBuf::from("/var/log"));
        assert_eq!(n.name, "log");
        assert_eq!(n.path, "/var/log");
        assert!(n.is_leaf());
    }

    #[test]
    fn new_node_for_filesystem_root_falls_back_to_path() {
        let n = Node::new(&PathBuf::from("/"));
        assert_eq!(n.name, "/");
    }

    #[test]
    fn child_lookup_and_list() {
        let mut root = node_with("root", 0, 0);
        root.children
            .insert(CompactString::new("b"), node_with("b", 1, 10));
        root.children
            .insert(CompactString::new("a"), node_with("a", 2, 20));

        assert_eq!(root.child("a").unwrap().immediate_files, 2);
        assert!(root.child("missing").is_none());

        // child_list is name-ordered.
        let names: Vec<&str> = root.child_list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn iter_visits_every_node_once() {
        let mut a = node_with("a", 0, 0);
        a.children
            .insert(CompactString::new("a1"), node_with("a1", 0, 0));
        let mut root = node_with("root", 0, 0);
        root.children.insert(CompactString::new("a"), a);
        root.children
            .insert(CompactString::new("b"), node_with("b", 0, 0));

        let mut names: Vec<&str> = root.iter().map(|n| n.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "a1", "b", "root"]);
    }

    #[test]
    fn structural_equality_ignores_insertion_order() {
        let mut left = node_with("root", 0, 0);
        left.children
            .insert(CompactString::new("a"), node_with("a", 1, 1));
        left.children
            .insert(CompactString::new("b"), node_with("b", 2, 2));

        let mut right = node_with("root", 0, 0);
        right
            .children
            .insert(CompactString::new("b"), node_with("b", 2, 2));
        right
            .children
            .insert(CompactString::new("a"), node_with("a", 1, 1));

        assert_eq!(left, right);
    }
}
