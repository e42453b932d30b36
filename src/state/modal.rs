/// Lightbox session state
///
/// A `ModalSession` exists only while the lightbox is open. Opening a card
/// builds a fresh session from the card's attributes; closing discards it.
/// There is a single lightbox, so a new session always supersedes the old
/// one — no stacking, no prev/next navigation.

use cgmath::Vector2;

use crate::state::project::Card;

/// Natural height/width ratio above which an image is framed as portrait.
pub const PORTRAIT_RATIO: f32 = 1.6;

/// Zoom and pan state for the lightbox image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSession {
    pub zoomed: bool,
    pub scale: f32,
    pub pan: Vector2<f32>,
}

impl Default for ZoomSession {
    fn default() -> Self {
        ZoomSession {
            zoomed: false,
            scale: 1.0,
            pan: Vector2::new(0.0, 0.0),
        }
    }
}

impl ZoomSession {
    /// Flip zoom on or off. Turning it on starts at `default_scale` with a
    /// centered pan; turning it off resets everything so the plain fitted
    /// image shows again. Returns the new zoomed flag.
    pub fn toggle(&mut self, default_scale: f32) -> bool {
        if self.zoomed {
            *self = ZoomSession::default();
        } else {
            self.zoomed = true;
            self.scale = default_scale;
            self.pan = Vector2::new(0.0, 0.0);
        }
        self.zoomed
    }

    pub fn reset(&mut self) {
        *self = ZoomSession::default();
    }
}

/// Transient state of the open lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    /// Serial distinguishing this session from superseded ones, so a late
    /// dimension-probe result for an old session is dropped.
    pub serial: u64,
    /// Index of the originating card; highlight returns there on close.
    pub card_index: usize,
    pub title: String,
    pub desc: String,
    pub tech: Vec<String>,
    pub live: Option<String>,
    /// Ordered image list; only `images[image_index]` is ever displayed.
    pub images: Vec<String>,
    pub image_index: usize,
    /// Natural pixel dimensions of the displayed image, once probed.
    pub natural: Option<(u32, u32)>,
    pub portrait: bool,
    pub zoom: ZoomSession,
}

impl ModalSession {
    pub fn open(serial: u64, card_index: usize, card: &Card) -> Self {
        ModalSession {
            serial,
            card_index,
            title: card.title.clone(),
            desc: card.desc.clone(),
            tech: card.tech.clone(),
            live: card.live.clone(),
            images: card.images.clone(),
            image_index: 0,
            natural: None,
            portrait: false,
            zoom: ZoomSession::default(),
        }
    }

    /// Source of the displayed image, if the card had any at all.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.image_index).map(String::as_str)
    }

    /// Accessible label for the displayed image.
    pub fn image_label(&self) -> String {
        format!(
            "{} screenshot {} of {}",
            self.title,
            self.image_index + 1,
            self.images.len().max(1)
        )
    }

    /// Record the probed natural dimensions and re-derive portrait framing.
    pub fn set_natural(&mut self, width: u32, height: u32) {
        self.natural = Some((width, height));
        self.portrait = is_portrait(width, height);
    }
}

/// Portrait detection: natural height over width beyond the threshold.
pub fn is_portrait(width: u32, height: u32) -> bool {
    width > 0 && height > 0 && (height as f32 / width as f32) > PORTRAIT_RATIO
}

/// Fit `natural` into `container` preserving aspect ratio (contain framing).
/// Returns the displayed size at scale 1.
pub fn fit_contain(natural: (f32, f32), container: (f32, f32)) -> (f32, f32) {
    let (nw, nh) = natural;
    let (cw, ch) = container;
    if nw <= 0.0 || nh <= 0.0 || cw <= 0.0 || ch <= 0.0 {
        return (cw.max(0.0), ch.max(0.0));
    }
    let ratio = (cw / nw).min(ch / nh);
    (nw * ratio, nh * ratio)
}

/// Clamp a pan offset so the scaled image's edges never move inward of the
/// container's edges. When the scaled image is smaller than the container
/// on an axis, that axis is pinned to zero.
pub fn clamp_pan(
    pan: Vector2<f32>,
    base: (f32, f32),
    container: (f32, f32),
    scale: f32,
) -> Vector2<f32> {
    let max_x = ((base.0 * scale - container.0) / 2.0).max(0.0);
    let max_y = ((base.1 * scale - container.1) / 2.0).max(0.0);
    Vector2::new(pan.x.clamp(-max_x, max_x), pan.y.clamp(-max_y, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::project::ProjectRecord;

    fn card_with_screenshots(screenshots: &[&str]) -> Card {
        let record = ProjectRecord {
            id: None,
            title: "Demo".to_string(),
            desc: "A demo".to_string(),
            category: "web".to_string(),
            tech: vec!["rust".to_string()],
            screenshots: screenshots.iter().map(|s| s.to_string()).collect(),
            image: None,
            live: None,
            badges: vec![],
        };
        Card::from_record(&record, 80)
    }

    #[test]
    fn test_open_shows_first_screenshot_with_label() {
        let card = card_with_screenshots(&["a.png", "b.png"]);
        let session = ModalSession::open(1, 0, &card);

        assert_eq!(session.current_image(), Some("a.png"));
        assert_eq!(session.image_label(), "Demo screenshot 1 of 2");
        assert_eq!(session.image_index, 0);
    }

    #[test]
    fn test_open_resets_zoom() {
        let card = card_with_screenshots(&["a.png"]);
        let session = ModalSession::open(1, 0, &card);
        assert!(!session.zoom.zoomed);
        assert_eq!(session.zoom.scale, 1.0);
        assert_eq!(session.zoom.pan, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_zoom_toggle_on_and_off() {
        let mut zoom = ZoomSession::default();

        assert!(zoom.toggle(1.8));
        assert_eq!(zoom.scale, 1.8);
        assert_eq!(zoom.pan, Vector2::new(0.0, 0.0));

        zoom.pan = Vector2::new(30.0, -12.0);
        assert!(!zoom.toggle(1.8));
        assert_eq!(zoom.scale, 1.0);
        assert_eq!(zoom.pan, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_portrait_detection_threshold() {
        assert!(is_portrait(100, 170));
        assert!(!is_portrait(100, 160)); // exactly 1.6 is not portrait
        assert!(!is_portrait(170, 100));
        assert!(!is_portrait(0, 100));
    }

    #[test]
    fn test_probe_marks_portrait() {
        let card = card_with_screenshots(&["tall.png"]);
        let mut session = ModalSession::open(1, 0, &card);
        session.set_natural(400, 900);
        assert!(session.portrait);
        assert_eq!(session.natural, Some((400, 900)));
    }

    #[test]
    fn test_fit_contain_preserves_aspect() {
        let (w, h) = fit_contain((200.0, 100.0), (100.0, 100.0));
        assert_eq!((w, h), (100.0, 50.0));

        let (w, h) = fit_contain((100.0, 300.0), (300.0, 300.0));
        assert_eq!((w, h), (100.0, 300.0));
    }

    #[test]
    fn test_clamp_pan_bounds_offset_by_overflow() {
        // 500x400 image scaled 2x in a 600x300 container:
        // overflow is (1000-600)/2 = 200 horizontally, (800-300)/2 = 250 vertically
        let clamped = clamp_pan(
            Vector2::new(500.0, -500.0),
            (500.0, 400.0),
            (600.0, 300.0),
            2.0,
        );
        assert_eq!(clamped, Vector2::new(200.0, -250.0));
    }

    #[test]
    fn test_clamp_pan_pins_axis_when_image_fits() {
        // At scale 1 the image is smaller than the container: pan pins to 0
        let clamped = clamp_pan(
            Vector2::new(40.0, 40.0),
            (500.0, 200.0),
            (600.0, 300.0),
            1.0,
        );
        assert_eq!(clamped, Vector2::new(0.0, 0.0));
    }
}
