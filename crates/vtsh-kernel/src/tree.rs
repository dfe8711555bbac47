//! The VFS tree: arena, cursor, path resolution, and disk import.
//!
//! The tree owns every node in a slab-style arena addressed by [`NodeId`].
//! A tree starts empty (root only), is populated once by
//! [`Tree::build_from_source`], and is afterwards mutated only through
//! [`Tree::remove`] and cursor movement. There is no write-back to disk.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{VfsError, VfsResult};
use crate::node::{Node, NodeId, NodeKind};

/// The owning structure: node arena, root, and current-position cursor.
pub struct Tree {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    root: NodeId,
    cursor: NodeId,
    loaded: bool,
}

impl Tree {
    /// Create an empty tree: a root directory with the cursor on it.
    pub fn new() -> Self {
        let root = NodeId(0);
        Self {
            slots: vec![Some(Node::directory(""))],
            free: Vec::new(),
            root,
            cursor: root,
            loaded: false,
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The current position (working directory).
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Move the cursor. Callers must pass a live directory id; `cd` checks
    /// before calling.
    pub(crate) fn set_cursor(&mut self, id: NodeId) {
        self.cursor = id;
    }

    /// Whether a disk import has completed. Informational only.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Borrow a node. A vacant slot here is an arena invariant violation.
    pub fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("live node")
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.slots[id.0] = None;
        self.free.push(id);
    }

    /// Insert `child` under `parent`, keyed by its name.
    ///
    /// Fails with [`VfsError::DuplicateName`] if the parent already has a
    /// child with that name, and [`VfsError::NotADirectory`] if `parent` is
    /// a file. Both are programmer-error guards; build code checks first.
    pub fn attach_child(&mut self, parent: NodeId, mut child: Node) -> VfsResult<NodeId> {
        let name = child.name.clone();
        match self.node(parent).kind {
            NodeKind::Directory { ref children } => {
                if children.contains_key(&name) {
                    return Err(VfsError::DuplicateName(name));
                }
            }
            NodeKind::File { .. } => {
                return Err(VfsError::NotADirectory(self.node(parent).name.clone()))
            }
        }
        child.parent = Some(parent);
        let id = self.alloc(child);
        if let NodeKind::Directory { children } = &mut self.node_mut(parent).kind {
            children.insert(name, id);
        }
        Ok(id)
    }

    /// Remove and return the child of `parent` named `name`. Does not
    /// recurse and does not release the slot; [`Tree::remove`] does both.
    pub fn detach_child(&mut self, parent: NodeId, name: &str) -> VfsResult<NodeId> {
        let detached = match &mut self.node_mut(parent).kind {
            NodeKind::Directory { children } => children
                .remove(name)
                .ok_or_else(|| VfsError::PathNotFound(name.to_string()))?,
            NodeKind::File { .. } => {
                return Err(VfsError::NotADirectory(self.node(parent).name.clone()))
            }
        };
        self.node_mut(detached).parent = None;
        Ok(detached)
    }

    /// Absolute path of a node: names from root joined with `/`, with a
    /// leading `/`. The root's own path is `/`.
    pub fn path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        loop {
            let node = self.node(current);
            if node.name.is_empty() {
                break;
            }
            parts.push(node.name.clone());
            match node.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// Resolve a path expression to a node.
    ///
    /// A leading `/` starts at root, otherwise resolution starts at `from`.
    /// Empty segments are discarded, `.` is a no-op, and `..` moves to the
    /// parent (a no-op at root, like conventional shells). A segment that
    /// is not found fails with [`VfsError::PathNotFound`] naming that
    /// segment; descending through a file fails with
    /// [`VfsError::NotADirectory`].
    pub fn resolve(&self, expr: &str, from: NodeId) -> VfsResult<NodeId> {
        let (mut current, rest) = match expr.strip_prefix('/') {
            Some(stripped) => (self.root, stripped),
            None => (from, expr),
        };
        for segment in rest.split('/').filter(|s| !s.is_empty()) {
            match segment {
                "." => {}
                ".." => {
                    if let Some(parent) = self.node(current).parent {
                        current = parent;
                    }
                }
                name => {
                    let node = self.node(current);
                    let children = node
                        .children()
                        .ok_or_else(|| VfsError::NotADirectory(node.name.clone()))?;
                    current = *children
                        .get(name)
                        .ok_or_else(|| VfsError::PathNotFound(name.to_string()))?;
                }
            }
        }
        Ok(current)
    }

    /// Recursively import a directory snapshot from disk.
    ///
    /// `SourceNotFound` and `SourceNotADirectory` are checked before any
    /// node is created, leaving the tree in its prior state. Per-entry
    /// failures (unreadable files, symlinks, non-UTF-8 names, permission
    /// errors) are logged and skipped; they never abort siblings or the
    /// overall import.
    pub fn build_from_source(&mut self, source: &Path) -> VfsResult<()> {
        if !source.exists() {
            return Err(VfsError::SourceNotFound(source.display().to_string()));
        }
        if !source.is_dir() {
            return Err(VfsError::SourceNotADirectory(source.display().to_string()));
        }
        let root = self.root;
        self.import_dir(root, source);
        self.loaded = true;
        Ok(())
    }

    fn import_dir(&mut self, parent: NodeId, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "skipping entry with non-UTF-8 name");
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(name = %name, error = %e, "skipping entry without file type");
                    continue;
                }
            };
            if file_type.is_symlink() {
                warn!(name = %name, "skipping symbolic link");
                continue;
            }
            if file_type.is_dir() {
                match self.attach_child(parent, Node::directory(&name)) {
                    Ok(id) => self.import_dir(id, &entry.path()),
                    Err(e) => warn!(name = %name, error = %e, "skipping directory"),
                }
            } else if file_type.is_file() {
                // Whole-file eager read; the handle is released before the
                // next entry is touched.
                let bytes = match fs::read(entry.path()) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(name = %name, error = %e, "skipping unreadable file");
                        continue;
                    }
                };
                let content = if bytes.is_empty() { None } else { Some(bytes) };
                if let Err(e) = self.attach_child(parent, Node::file(&name, content)) {
                    warn!(name = %name, error = %e, "skipping file");
                }
            } else {
                warn!(name = %name, "skipping special entry");
            }
        }
    }

    /// Remove `target` from the tree, recursively if requested.
    ///
    /// Children are removed depth-first over a snapshot of the name list,
    /// so no node is left referencing a released child and the child map is
    /// never iterated while being mutated. A failure on any descendant
    /// aborts the removal of this target; the target stays attached.
    /// Removing the root is refused. If the cursor sits inside the removed
    /// subtree it moves to the removed target's parent.
    pub fn remove(&mut self, target: NodeId, recursive: bool) -> VfsResult<()> {
        if target == self.root {
            return Err(VfsError::Usage("cannot remove the root directory".into()));
        }
        if !recursive {
            if let Some(children) = self.node(target).children() {
                if !children.is_empty() {
                    return Err(VfsError::DirectoryNotEmpty(self.path(target)));
                }
            }
        }
        if self.is_ancestor_or_self(target, self.cursor) {
            self.cursor = self.node(target).parent.unwrap_or(self.root);
        }
        self.remove_children(target)?;
        let name = self.node(target).name.clone();
        let parent = match self.node(target).parent {
            Some(parent) => parent,
            // Unreachable for a live non-root node; keep the guard typed.
            None => return Err(VfsError::PathNotFound(name)),
        };
        self.detach_child(parent, &name)?;
        self.release(target);
        Ok(())
    }

    fn remove_children(&mut self, dir: NodeId) -> VfsResult<()> {
        // Snapshot the key list; detaching mutates the map underneath.
        let names: Vec<String> = match self.node(dir).children() {
            Some(children) => children.keys().cloned().collect(),
            None => return Ok(()),
        };
        for name in names {
            let child = match self.node(dir).children().and_then(|c| c.get(&name)) {
                Some(&child) => child,
                None => continue,
            };
            self.remove_children(child)?;
            self.detach_child(dir, &name)?;
            self.release(child);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.node(node).parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Panic if any structural invariant is broken. Test-only.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(node) = slot else { continue };
            let id = NodeId(index);
            if let Some(children) = node.children() {
                for (name, &child) in children {
                    let child_node = self.node(child);
                    assert_eq!(child_node.name, *name, "child keyed under wrong name");
                    assert_eq!(
                        child_node.parent,
                        Some(id),
                        "child's parent does not hold it"
                    );
                }
            }
            if let Some(parent) = node.parent {
                let held = self
                    .node(parent)
                    .children()
                    .and_then(|c| c.get(&node.name))
                    .copied();
                assert_eq!(held, Some(id), "parent does not list this child");
            }
        }
        let cursor = self.node(self.cursor);
        assert!(cursor.is_dir(), "cursor must point at a directory");
        assert!(
            self.is_ancestor_or_self(self.root, self.cursor),
            "cursor must be reachable from root"
        );
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
