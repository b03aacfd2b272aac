use crate::foundation::core::{Point, Vec2};
use crate::geometry::hit::{circle_hit, rect_hit};
use crate::scene::model::{LOGO_DIAMETER, SceneState};

/// Which layer a finished or active drag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Logo,
    PastedImage,
    Background,
}

/// Active drag, carrying the pointer-to-anchor offset captured on press.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Logo {
        grab: Vec2,
    },
    PastedImage {
        grab: Vec2,
    },
    Background {
        grab: Vec2,
    },
}

/// Pointer-driven drag logic over a scene.
///
/// Hit testing follows layer precedence from top to bottom: the logo circle
/// wins over the pasted image box, and the background is always grabbable as
/// the fallthrough, it has no boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Begin a drag at a canvas-space point. Returns the grabbed layer.
    pub fn pointer_down(&mut self, scene: &SceneState, p: Point) -> DragTarget {
        if circle_hit(p, scene.logo_position, LOGO_DIAMETER) {
            self.state = DragState::Logo {
                grab: p - scene.logo_position,
            };
            return DragTarget::Logo;
        }

        if let Some((w, h)) = scene.pasted_box() {
            if rect_hit(p, scene.pasted_image_position, w, h) {
                self.state = DragState::PastedImage {
                    grab: p - scene.pasted_image_position,
                };
                return DragTarget::PastedImage;
            }
        }

        self.state = DragState::Background {
            grab: p.to_vec2() - scene.background_offset,
        };
        DragTarget::Background
    }

    /// Apply pointer motion to the dragged layer. Returns whether the scene
    /// changed.
    pub fn pointer_move(&mut self, scene: &mut SceneState, p: Point) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Logo { grab } => {
                scene.logo_position = p - grab;
                true
            }
            DragState::PastedImage { grab } => {
                scene.pasted_image_position = p - grab;
                true
            }
            DragState::Background { grab } => {
                scene.background_offset = p.to_vec2() - grab;
                true
            }
        }
    }

    /// End the drag. Returns the layer whose position should be persisted.
    pub fn pointer_up(&mut self) -> Option<DragTarget> {
        let ended = match self.state {
            DragState::Idle => None,
            DragState::Logo { .. } => Some(DragTarget::Logo),
            DragState::PastedImage { .. } => Some(DragTarget::PastedImage),
            DragState::Background { .. } => Some(DragTarget::Background),
        };
        self.state = DragState::Idle;
        ended
    }
}
