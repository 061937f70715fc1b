use serde::Serialize;

use crate::model::catalogue::CatalogueNode;
use crate::model::file_record::FileRecord;
use crate::ops::check::{BucketHealth, CheckResult};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct UserJson {
    pub username: String,
}

/// What `ls` found at a path
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingJson {
    Folder {
        path: Vec<String>,
        folders: Vec<String>,
    },
    Subject {
        path: Vec<String>,
        key: String,
        files: Vec<FileRecord>,
    },
    NotFound {
        path: Vec<String>,
    },
}

#[derive(Serialize)]
pub struct TreeNodeJson {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNodeJson>,
}

pub fn tree_to_json<'a>(
    children: impl IntoIterator<Item = (&'a String, &'a CatalogueNode)>,
) -> Vec<TreeNodeJson> {
    children
        .into_iter()
        .map(|(label, node)| match node {
            CatalogueNode::Folder(next) => TreeNodeJson {
                label: label.clone(),
                key: None,
                children: tree_to_json(next),
            },
            CatalogueNode::Subject(key) => TreeNodeJson {
                label: label.clone(),
                key: Some(key.clone()),
                children: Vec::new(),
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

pub fn format_folders(folders: &[String]) -> Vec<String> {
    if folders.is_empty() {
        return vec!["No subfolders here.".to_string()];
    }
    folders.iter().map(|f| format!("{}/", f)).collect()
}

pub fn format_files(files: &[FileRecord]) -> Vec<String> {
    if files.is_empty() {
        return vec!["No files in this folder yet.".to_string()];
    }
    files
        .iter()
        .map(|f| format!("{}  {}", f.name, f.url))
        .collect()
}

/// Indented tree, subjects followed by their bucket key
pub fn format_tree<'a>(
    children: impl IntoIterator<Item = (&'a String, &'a CatalogueNode)>,
    indent: usize,
    lines: &mut Vec<String>,
) {
    let pad = "  ".repeat(indent);
    for (label, node) in children {
        match node {
            CatalogueNode::Folder(next) => {
                lines.push(format!("{}{}/", pad, label));
                format_tree(next, indent + 1, lines);
            }
            CatalogueNode::Subject(key) => {
                lines.push(format!("{}{}  [{}]", pad, label, key));
            }
        }
    }
}

pub fn format_check(result: &CheckResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .buckets
        .iter()
        .map(|b| {
            let status = match b.status {
                BucketHealth::Ok => format!("ok ({} files)", b.files),
                BucketHealth::Empty => "empty".to_string(),
                BucketHealth::Corrupt => format!(
                    "corrupt: {}",
                    b.error.as_deref().unwrap_or("unreadable")
                ),
            };
            format!("{}  {}", b.key, status)
        })
        .collect();
    if result.valid {
        lines.push("All buckets readable.".to_string());
    }
    lines
}
