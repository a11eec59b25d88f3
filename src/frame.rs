//! Per-tick dispatch between camera control and node editing.

use crate::camera::{Camera, CameraController};
use crate::editor::NodeEditor;
use crate::input::InputSource;
use crate::options::ViewerOptions;
use crate::render::UniformStore;
use crate::scene::{DrawMode, NodeKind, SceneGraph};

/// What the pointer currently manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// Pointer input drives the camera.
    #[default]
    Camera,
    /// Pointer input drives the selected scene node.
    SceneNode,
}

impl ControlMode {
    /// Validate a UI-reported control-mode label into a typed tag.
    ///
    /// Returns `None` for anything other than `"Camera"` or
    /// `"Scene Node"`; the core never dispatches on raw strings.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Camera" => Some(Self::Camera),
            "Scene Node" => Some(Self::SceneNode),
            _ => None,
        }
    }
}

/// Owns the camera controller and node editor and picks one per tick.
///
/// Driven by an external scheduler at whatever rate it likes; elapsed time
/// between ticks is passed in, never measured here. Absent state — no
/// scene loaded, no node selected — makes node-edit ticks silent no-ops.
pub struct FrameController {
    camera: CameraController,
    editor: NodeEditor,
    mode: ControlMode,
    draw_mode: DrawMode,
    selected_node: Option<String>,
}

impl FrameController {
    /// Build a frame controller from viewer options.
    #[must_use]
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            camera: CameraController::new(&options.camera),
            editor: NodeEditor::new(&options.camera, &options.editor),
            mode: ControlMode::default(),
            draw_mode: DrawMode::default(),
            selected_node: None,
        }
    }

    /// Read access to the camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera.camera()
    }

    /// The camera controller, for initial framing and projection upload.
    pub fn camera_controller(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Switch what pointer input manipulates.
    pub fn set_mode(&mut self, mode: ControlMode) {
        if mode != self.mode {
            log::debug!("control mode -> {mode:?}");
            self.mode = mode;
        }
    }

    /// Select how renderable nodes are drawn from the next tick on.
    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    /// Select the node that node-edit ticks manipulate, or `None` to clear
    /// the selection.
    pub fn select_node(&mut self, name: Option<String>) {
        self.selected_node = name;
    }

    /// Run one tick: propagate the draw mode to every model node, then
    /// route pointer input to the camera or the selected node.
    pub fn tick(
        &mut self,
        mut scene: Option<&mut dyn SceneGraph>,
        input: &dyn InputSource,
        elapsed_seconds: f32,
        uniforms: &mut dyn UniformStore,
    ) {
        if let Some(scene) = scene.as_deref_mut() {
            apply_draw_mode(scene, self.draw_mode);
        }

        match self.mode {
            ControlMode::Camera => {
                self.camera.update(input, elapsed_seconds, uniforms);
            }
            ControlMode::SceneNode => {
                // Idle input with nothing to act on is harmless.
                let Some(scene) = scene else { return };
                let Some(name) = self.selected_node.as_deref() else {
                    return;
                };
                let Some(node) = scene.node_mut(name) else { return };
                self.editor.update(
                    node,
                    self.camera.camera(),
                    input,
                    elapsed_seconds,
                );
            }
        }
    }
}

/// Push the selected draw mode onto every renderable node.
fn apply_draw_mode(scene: &mut dyn SceneGraph, mode: DrawMode) {
    for name in scene.node_names() {
        if let Some(node) = scene.node_mut(&name) {
            if node.kind() == NodeKind::Model {
                node.set_draw_mode(mode);
            }
        }
    }
}
