/// CSV export — one row per immediate child of a node.
///
/// This is the "current view" export: presentation code hands over whichever
/// node the user is looking at and gets its children's aggregate columns.
/// Rows come out in name order (the model's stable child order); consumers
/// wanting a size-sorted report re-sort before writing.
use crate::model::Node;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 4] = ["name", "total_files", "total_dirs", "total_size"];

/// Write the immediate children of `node` as CSV.
pub fn children_to_csv<W: Write>(node: &Node, out: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for child in node.child_list() {
        writer.write_record([
            child.name.to_string(),
            child.total_files.to_string(),
            child.total_dirs.to_string(),
            child.total_size.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the children of `node` to a CSV file at `path`.
pub fn write_csv_file(node: &Node, path: &Path) -> csv::Result<()> {
    children_to_csv(node, File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn tree_with_children() -> Node {
        let mut root = Node {
            path: "/data".into(),
            name: CompactString::new("data"),
            ..Node::default()
        };
        for (name, files, dirs, size) in [("beta", 3, 1, 900), ("alpha", 10, 0, 2048)] {
            let child = Node {
                path: format!("/data/{name}"),
                name: CompactString::new(name),
                total_files: files,
                total_dirs: dirs,
                total_size: size,
                ..Node::default()
            };
            root.children.insert(child.name.clone(), child);
        }
        root
    }

    #[test]
    fn exports_children_in_name_order() {
        let mut buf = Vec::new();
        children_to_csv(&tree_with_children(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name,total_files,total_dirs,total_size");
        assert_eq!(lines[1], "alpha,10,0,2048");
        assert_eq!(lines[2], "beta,3,1,900");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn leaf_node_exports_header_only() {
        let mut buf = Vec::new();
        let leaf = Node {
            path: "/data/empty".into(),
            name: CompactString::new("empty"),
            ..Node::default()
        };
        children_to_csv(&leaf, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn writes_a_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv_file(&tree_with_children(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("name,"));
    }
}
