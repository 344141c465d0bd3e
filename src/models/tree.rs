//! Hierarchical directory tree summary

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry in a directory node's child list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEntry {
    /// A nested directory
    Directory(DirectoryNode),
    /// A plain file
    File { name: String },
    /// Files below the depth limit, collapsed into a single counted leaf
    Collapsed { file_count: usize },
}

/// A node in the directory tree summary
///
/// Children keep insertion order, which equals filesystem traversal order.
/// The tree is owned by the structure mapper and read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    /// Path relative to the project root (empty for the root itself)
    pub path: PathBuf,

    /// Directory name (project directory name for the root)
    pub name: String,

    /// Ordered children: subdirectories and files in traversal order
    pub children: Vec<TreeEntry>,

    /// Number of files in this directory and all of its descendants
    pub file_count: usize,
}

impl DirectoryNode {
    /// Create an empty node
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            children: Vec::new(),
            file_count: 0,
        }
    }

    /// Get or insert the child directory with the given name
    pub fn ensure_dir(&mut self, name: &str) -> &mut DirectoryNode {
        let position = self.children.iter().position(|child| {
            matches!(child, TreeEntry::Directory(node) if node.name == name)
        });

        let index = match position {
            Some(index) => index,
            None => {
                let path = self.path.join(name);
                self.children
                    .push(TreeEntry::Directory(DirectoryNode::new(path, name)));
                self.children.len() - 1
            }
        };

        match &mut self.children[index] {
            TreeEntry::Directory(node) => node,
            _ => unreachable!("position matched a directory entry"),
        }
    }

    /// Append a file entry
    pub fn push_file(&mut self, name: &str) {
        self.children.push(TreeEntry::File {
            name: name.to_string(),
        });
    }

    /// Count a file under the collapsed leaf, creating it on first use
    pub fn bump_collapsed(&mut self) {
        for child in self.children.iter_mut() {
            if let TreeEntry::Collapsed { file_count } = child {
                *file_count += 1;
                return;
            }
        }
        self.children.push(TreeEntry::Collapsed { file_count: 1 });
    }

    /// Number of files directly in this node (excluding subdirectories)
    pub fn direct_file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeEntry::File { .. } => 1,
                TreeEntry::Collapsed { file_count } => *file_count,
                TreeEntry::Directory(_) => 0,
            })
            .sum()
    }

    /// Recompute `file_count` bottom-up and return it
    pub fn recount(&mut self) -> usize {
        let mut total = 0;
        for child in self.children.iter_mut() {
            total += match child {
                TreeEntry::File { .. } => 1,
                TreeEntry::Collapsed { file_count } => *file_count,
                TreeEntry::Directory(node) => node.recount(),
            };
        }
        self.file_count = total;
        total
    }

    /// Look up a descendant directory by relative path
    pub fn find_dir(&self, path: &Path) -> Option<&DirectoryNode> {
        let mut node = self;
        for component in path.components() {
            let name = component.as_os_str().to_str()?;
            node = node.children.iter().find_map(|child| match child {
                TreeEntry::Directory(dir) if dir.name == name => Some(dir),
                _ => None,
            })?;
        }
        Some(node)
    }

    /// Render the tree as an indented ASCII listing
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}/\n", self.name));
        self.render_children(&mut out, "");
        out
    }

    fn render_children(&self, out: &mut String, prefix: &str) {
        let count = self.children.len();
        for (index, child) in self.children.iter().enumerate() {
            let last = index + 1 == count;
            let branch = if last { "└── " } else { "├── " };
            let nested = if last { "    " } else { "│   " };

            match child {
                TreeEntry::Directory(node) => {
                    out.push_str(&format!("{}{}{}/\n", prefix, branch, node.name));
                    node.render_children(out, &format!("{}{}", prefix, nested));
                }
                TreeEntry::File { name } => {
                    out.push_str(&format!("{}{}{}\n", prefix, branch, name));
                }
                TreeEntry::Collapsed { file_count } => {
                    out.push_str(&format!(
                        "{}{}… ({} more files)\n",
                        prefix, branch, file_count
                    ));
                }
            }
        }
    }
}
