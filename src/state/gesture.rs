/// Pointer gesture engine for the lightbox image
///
/// Interprets pointer input as either single-pointer panning or two-pointer
/// pinch zooming — never both. The registry is updated before any count is
/// checked and pointers are deregistered after dispatch, so the phase
/// transitions only ever see a consistent pointer set.
///
/// Phase machine:
///
/// ```text
///            second pointer down
///   Panning ────────────────────▶ Pinching
///      ▲                             │
///      │ pointer down while zoomed   │ pointer count drops below 2
///      └──────────── Idle ◀──────────┘
/// ```
///
/// The engine is deliberately free of rendering concerns: it reports raw
/// pan targets and clamped scales, and the caller applies `modal::clamp_pan`
/// with the actual container geometry.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use cgmath::Vector2;
use iced::Point;

/// One pointer, mouse or finger. The mouse uses a reserved id so it never
/// collides with touch ids.
pub type PointerId = u64;

/// Registry id used for the mouse pointer.
pub const MOUSE_POINTER: PointerId = u64::MAX;

/// Zoom scale bounds applied to every pinch and wheel adjustment.
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 4.0;

/// Two mouse presses within this window count as a zoom-toggling double press.
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(400);

/// What the current gesture wants the caller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// New pan offset, unclamped — the caller clamps against its container.
    Pan(Vector2<f32>),
    /// New zoom scale, already clamped to `[MIN_SCALE, MAX_SCALE]`.
    Rescale(f32),
    /// Double press: flip zoom on or off.
    ToggleZoom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Panning {
        pointer: PointerId,
        start: Point,
        origin: Vector2<f32>,
    },
    Pinching {
        baseline: f32,
        initial_scale: f32,
    },
}

/// Mutable gesture state. Lives as the lightbox canvas widget state.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    pointers: BTreeMap<PointerId, Point>,
    phase: Phase,
    last_press: Option<Instant>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        GestureEngine {
            pointers: BTreeMap::new(),
            phase: Phase::Idle,
            last_press: None,
        }
    }
}

impl GestureEngine {
    /// A pointer went down. `zoomed`, `scale` and `pan` describe the current
    /// lightbox zoom session. Registers the pointer first, then decides:
    /// a second pointer always starts a pinch (cancelling any pan), a single
    /// pointer starts a pan only while zoomed.
    pub fn pointer_down(
        &mut self,
        id: PointerId,
        position: Point,
        zoomed: bool,
        scale: f32,
        pan: Vector2<f32>,
        now: Instant,
    ) -> Option<GestureAction> {
        self.pointers.insert(id, position);

        if self.pointers.len() == 2 {
            // Pinch begins: any active pan ends right here, before another
            // move can be dispatched to it.
            self.phase = Phase::Pinching {
                baseline: self.pointer_distance(),
                initial_scale: scale,
            };
            self.last_press = None;
            return None;
        }

        if self.pointers.len() > 2 {
            return None;
        }

        if id == MOUSE_POINTER {
            if let Some(previous) = self.last_press.take() {
                if now.duration_since(previous) <= DOUBLE_PRESS_WINDOW {
                    return Some(GestureAction::ToggleZoom);
                }
            }
            self.last_press = Some(now);
        }

        if zoomed {
            self.phase = Phase::Panning {
                pointer: id,
                start: position,
                origin: pan,
            };
        }

        None
    }

    /// A pointer moved. Produces a pan target while panning with that
    /// pointer, or a rescale while exactly two pointers are pinching.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) -> Option<GestureAction> {
        let registered = self.pointers.contains_key(&id);
        if registered {
            self.pointers.insert(id, position);
        }

        match self.phase {
            Phase::Pinching {
                baseline,
                initial_scale,
            } if registered && self.pointers.len() == 2 && baseline > 0.0 => {
                let ratio = self.pointer_distance() / baseline;
                Some(GestureAction::Rescale(
                    (initial_scale * ratio).clamp(MIN_SCALE, MAX_SCALE),
                ))
            }
            Phase::Panning {
                pointer,
                start,
                origin,
            } if pointer == id => Some(GestureAction::Pan(Vector2::new(
                origin.x + (position.x - start.x),
                origin.y + (position.y - start.y),
            ))),
            _ => None,
        }
    }

    /// A pointer lifted (or was cancelled). Ends the pan owned by that
    /// pointer; dropping below two pointers ends pinch tracking and clears
    /// the baseline.
    pub fn pointer_up(&mut self, id: PointerId) {
        if let Phase::Panning { pointer, .. } = self.phase {
            if pointer == id {
                self.phase = Phase::Idle;
            }
        }

        self.pointers.remove(&id);

        if self.pointers.len() < 2 {
            if let Phase::Pinching { .. } = self.phase {
                self.phase = Phase::Idle;
            }
        }
    }

    /// Wheel scroll with the precision-zoom modifier held, while zoomed,
    /// nudges the scale. Returns the new clamped scale, or `None` when the
    /// gesture does not apply (not zoomed, or the modifier is absent — plain
    /// scrolling must not be hijacked).
    pub fn wheel(
        &self,
        delta: f32,
        zoomed: bool,
        precision_modifier: bool,
        scale: f32,
    ) -> Option<f32> {
        if !zoomed || !precision_modifier {
            return None;
        }
        Some((scale + delta).clamp(MIN_SCALE, MAX_SCALE))
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.phase, Phase::Pinching { .. })
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Distance between the first two registered pointers.
    fn pointer_distance(&self) -> f32 {
        let mut values = self.pointers.values();
        match (values.next(), values.next()) {
            (Some(a), Some(b)) => ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt(),
            _ => 0.0,
        }
    }
}
