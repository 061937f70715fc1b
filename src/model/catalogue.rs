use indexmap::IndexMap;

/// Label under which the ministerial subjects live
pub const MINISTERIAL_FOLDER: &str = "ملفات وزارية";
/// Label for the (currently empty) non-ministerial folder
pub const NON_MINISTERIAL_FOLDER: &str = "ملفات مواد غير وزارية";

/// A node in the study-files catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueNode {
    /// A folder of labelled children, in display order
    Folder(IndexMap<String, CatalogueNode>),
    /// A leaf naming the storage bucket that holds its files
    Subject(String),
}

fn labelled<const N: usize>(
    children: [(&str, CatalogueNode); N],
) -> IndexMap<String, CatalogueNode> {
    children
        .into_iter()
        .map(|(label, node)| (label.to_string(), node))
        .collect()
}

impl CatalogueNode {
    fn folder<const N: usize>(children: [(&str, CatalogueNode); N]) -> Self {
        CatalogueNode::Folder(labelled(children))
    }

    fn subject(key: &str) -> Self {
        CatalogueNode::Subject(key.to_string())
    }
}

/// Result of resolving a navigation path against the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Folder(&'a IndexMap<String, CatalogueNode>),
    Subject(&'a str),
    NotFound,
}

impl<'a> Resolved<'a> {
    pub fn subject_key(&self) -> Option<&'a str> {
        match *self {
            Resolved::Subject(key) => Some(key),
            _ => None,
        }
    }
}

/// The static folder tree. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    root: IndexMap<String, CatalogueNode>,
}

impl Catalogue {
    /// The portal's built-in catalogue. Bucket keys are kept stable so that
    /// stored files stay reachable across versions.
    pub fn builtin() -> Self {
        let root = labelled([
            (
                MINISTERIAL_FOLDER,
                CatalogueNode::folder([
                    (
                        "العناية المركزة",
                        CatalogueNode::subject("ministerial-intensive-care"),
                    ),
                    (
                        "اسس التخدير",
                        CatalogueNode::subject("ministerial-anesthesia-basics"),
                    ),
                ]),
            ),
            (NON_MINISTERIAL_FOLDER, CatalogueNode::folder([])),
        ]);
        Catalogue { root }
    }

    /// Build a catalogue from an explicit root folder.
    pub fn from_root(root: IndexMap<String, CatalogueNode>) -> Self {
        Catalogue { root }
    }

    pub fn root(&self) -> &IndexMap<String, CatalogueNode> {
        &self.root
    }

    /// Walk `path` from the root one label at a time. The first label that is
    /// missing (or that would descend into a subject) yields `NotFound`.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Resolved<'_> {
        let mut children = &self.root;
        let mut segments = path.iter().peekable();

        while let Some(segment) = segments.next() {
            match children.get(segment.as_ref()) {
                Some(CatalogueNode::Folder(next)) => children = next,
                Some(CatalogueNode::Subject(key)) => {
                    return if segments.peek().is_none() {
                        Resolved::Subject(key.as_str())
                    } else {
                        Resolved::NotFound
                    };
                }
                None => return Resolved::NotFound,
            }
        }

        Resolved::Folder(children)
    }

    /// Every bucket key in the tree, depth-first in display order.
    pub fn subject_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        collect_keys(&self.root, &mut keys);
        keys
    }

    /// Every subject as (label path, bucket key), depth-first in display order.
    pub fn subjects(&self) -> Vec<(Vec<&str>, &str)> {
        let mut out = Vec::new();
        collect_subjects(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Catalogue::builtin()
    }
}

fn collect_keys<'a>(children: &'a IndexMap<String, CatalogueNode>, keys: &mut Vec<&'a str>) {
    for node in children.values() {
        match node {
            CatalogueNode::Folder(next) => collect_keys(next, keys),
            CatalogueNode::Subject(key) => keys.push(key),
        }
    }
}

fn collect_subjects<'a>(
    children: &'a IndexMap<String, CatalogueNode>,
    prefix: &mut Vec<&'a str>,
    out: &mut Vec<(Vec<&'a str>, &'a str)>,
) {
    for (label, node) in children {
        prefix.push(label);
        match node {
            CatalogueNode::Folder(next) => collect_subjects(next, prefix, out),
            CatalogueNode::Subject(key) => out.push((prefix.clone(), key.as_str())),
        }
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn empty_path_is_root_with_two_folders() {
        let cat = Catalogue::builtin();
        match cat.resolve(&EMPTY) {
            Resolved::Folder(children) => {
                let labels: Vec<&str> = children.keys().map(|k| k.as_str()).collect();
                assert_eq!(labels, vec![MINISTERIAL_FOLDER, NON_MINISTERIAL_FOLDER]);
            }
            other => panic!("expected root folder, got {:?}", other),
        }
    }

    #[test]
    fn resolves_subject_leaf() {
        let cat = Catalogue::builtin();
        let r = cat.resolve(&[MINISTERIAL_FOLDER, "العناية المركزة"]);
        assert_eq!(r, Resolved::Subject("ministerial-intensive-care"));
        assert_eq!(r.subject_key(), Some("ministerial-intensive-care"));
    }

    #[test]
    fn subfolder_order_is_insertion_order() {
        let cat = Catalogue::builtin();
        let Resolved::Folder(children) = cat.resolve(&[MINISTERIAL_FOLDER]) else {
            panic!("expected folder");
        };
        let labels: Vec<&str> = children.keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["العناية المركزة", "اسس التخدير"]);
    }

    #[test]
    fn empty_folder_resolves_to_empty_children() {
        let cat = Catalogue::builtin();
        match cat.resolve(&[NON_MINISTERIAL_FOLDER]) {
            Resolved::Folder(children) => assert!(children.is_empty()),
            other => panic!("expected folder, got {:?}", other),
        }
    }

    #[test]
    fn unknown_labels_are_not_found() {
        let cat = Catalogue::builtin();
        assert_eq!(cat.resolve(&["nope"]), Resolved::NotFound);
        assert_eq!(
            cat.resolve(&[MINISTERIAL_FOLDER, "nope"]),
            Resolved::NotFound
        );
        assert_eq!(
            cat.resolve(&[NON_MINISTERIAL_FOLDER, "العناية المركزة"]),
            Resolved::NotFound
        );
        // No fuzzy or partial matching
        assert_eq!(cat.resolve(&["ملفات"]), Resolved::NotFound);
    }

    #[test]
    fn path_past_a_subject_is_not_found() {
        let cat = Catalogue::builtin();
        let r = cat.resolve(&[MINISTERIAL_FOLDER, "اسس التخدير", "more"]);
        assert_eq!(r, Resolved::NotFound);
    }

    #[test]
    fn resolution_is_repeatable() {
        let cat = Catalogue::builtin();
        let path = vec![MINISTERIAL_FOLDER.to_string(), "اسس التخدير".to_string()];
        assert_eq!(cat.resolve(&path), cat.resolve(&path));
    }

    #[test]
    fn subject_keys_in_display_order() {
        let cat = Catalogue::builtin();
        assert_eq!(
            cat.subject_keys(),
            vec!["ministerial-intensive-care", "ministerial-anesthesia-basics"]
        );
        let subjects = cat.subjects();
        assert_eq!(subjects[1].0, vec![MINISTERIAL_FOLDER, "اسس التخدير"]);
    }
}
