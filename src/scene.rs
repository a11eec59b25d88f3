//! Seam to the scene-graph collaborator.
//!
//! Node storage, parent/child linking, and file-driven construction live
//! outside this crate. The core sees nodes as capabilities: read the local
//! and world transforms, write the local transform, flip the draw mode.
//! The world transform is a derived value the collaborator keeps consistent
//! with the local-transform chain up to the root; mutating a node's local
//! transform implicitly moves all its descendants.

use glam::Mat4;

/// Coarse node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Renderable model node carrying geometry.
    Model,
    /// Structural grouping node with no geometry of its own.
    Group,
}

/// How a renderable node's geometry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Filled triangles.
    #[default]
    Triangles,
    /// Point cloud (one point per vertex).
    Points,
}

impl DrawMode {
    /// Validate a UI-reported draw-mode label into a typed tag.
    ///
    /// Returns `None` for anything other than `"Triangles"` or `"Points"`;
    /// the core never dispatches on raw strings.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Triangles" => Some(Self::Triangles),
            "Points" => Some(Self::Points),
            _ => None,
        }
    }
}

/// A single node in the external transform hierarchy.
pub trait SceneNode {
    /// Node classification; only [`NodeKind::Model`] nodes accept a draw
    /// mode.
    fn kind(&self) -> NodeKind;

    /// The node's local transform relative to its parent.
    fn local_transform(&self) -> Mat4;

    /// The node's derived world transform (parent world composed with
    /// local).
    fn world_transform(&self) -> Mat4;

    /// Replace the node's local transform.
    fn set_local_transform(&mut self, transform: Mat4);

    /// Set how this node's geometry is drawn. Ignored by non-model nodes.
    fn set_draw_mode(&mut self, mode: DrawMode);
}

/// The scene-graph container, consumed but never owned.
pub trait SceneGraph {
    /// Names of every node in the hierarchy, in traversal order.
    fn node_names(&self) -> Vec<String>;

    /// Look up a node by name.
    fn node_mut(&mut self, name: &str) -> Option<&mut dyn SceneNode>;
}
