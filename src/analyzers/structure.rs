//! Directory structure mapping
//!
//! Builds the DirectoryNode tree from the walked descriptor stream, without a
//! second filesystem pass. Entries deeper than the configured limit are
//! collapsed into a synthetic counted leaf, bounding output size on deep
//! trees.

use crate::models::{DirectoryNode, FileDescriptor};
use std::path::Component;

/// Builder for the hierarchical directory summary
pub struct StructureMapper {
    depth_limit: usize,
}

impl StructureMapper {
    /// Create a mapper that collapses entries deeper than `depth_limit`
    pub fn new(depth_limit: usize) -> Self {
        Self {
            depth_limit: depth_limit.max(1),
        }
    }

    /// Build the tree from the descriptor stream, preserving stream order
    pub fn build(&self, root_name: &str, files: &[FileDescriptor]) -> DirectoryNode {
        let mut root = DirectoryNode::new("", root_name);

        for descriptor in files {
            self.insert(&mut root, descriptor);
        }

        root.recount();
        root
    }

    fn insert(&self, root: &mut DirectoryNode, descriptor: &FileDescriptor) {
        let components: Vec<&str> = descriptor
            .path
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect();

        let Some((file_name, directories)) = components.split_last() else {
            return;
        };

        let mut node = root;
        for (index, directory) in directories.iter().enumerate() {
            // Directory at depth index+1; files below the limit collapse here
            if index + 1 >= self.depth_limit {
                node.ensure_dir(directory).bump_collapsed();
                return;
            }
            node = node.ensure_dir(directory);
        }

        node.push_file(file_name);
    }
}
