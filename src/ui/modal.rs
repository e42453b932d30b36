/// Lightbox overlay
///
/// Renders the open project on top of the gallery: a dimmed backdrop that
/// closes on press, and a dialog with the screenshot canvas, description,
/// tech stack and live link. The canvas owns the pointer gesture handling
/// and reports pan/zoom updates as already-clamped `LightboxEvent`s.

use std::path::Path;
use std::time::Instant;

use cgmath::Vector2;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Program};
use iced::widget::image::Handle;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, text,
};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::data::assets;
use crate::state::gesture::{GestureAction, GestureEngine, MOUSE_POINTER};
use crate::state::modal::{self, ModalSession};
use crate::Message;

/// Height of the screenshot canvas, taller for portrait images.
const FRAME_HEIGHT: f32 = 380.0;
const FRAME_HEIGHT_PORTRAIT: f32 = 520.0;

/// Pan and zoom updates coming out of the lightbox canvas. Pan offsets are
/// clamped against the canvas geometry before they leave the widget.
#[derive(Debug, Clone)]
pub enum LightboxEvent {
    Panned(Vector2<f32>),
    Rescaled { scale: f32, pan: Vector2<f32> },
    ZoomToggled,
}

pub fn modal_layer<'a>(
    session: &'a ModalSession,
    asset_base: &Path,
    precision_modifier: bool,
    wheel_step: f32,
) -> Element<'a, Message> {
    let zoom_label = if session.zoom.zoomed { "Reset zoom" } else { "Zoom" };

    let header = row![
        text(&session.title).size(22),
        horizontal_space(),
        button(text(zoom_label).size(14))
            .style(button::secondary)
            .padding([6.0, 14.0])
            .on_press(Message::ToggleZoom),
        button(text("✕").size(14))
            .style(button::text)
            .padding([6.0, 10.0])
            .on_press(Message::CloseModal),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let frame_height = if session.portrait {
        FRAME_HEIGHT_PORTRAIT
    } else {
        FRAME_HEIGHT
    };

    let screenshot: Element<'a, Message> = match session.current_image() {
        Some(reference) => Canvas::new(Lightbox {
            handle: Handle::from_path(assets::resolve(asset_base, reference)),
            natural: session.natural,
            zoomed: session.zoom.zoomed,
            scale: session.zoom.scale,
            pan: session.zoom.pan,
            wheel_step,
            precision_modifier,
        })
        .width(Length::Fill)
        .height(Length::Fixed(frame_height))
        .into(),
        None => container(text("No screenshots").size(14))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(FRAME_HEIGHT))
            .into(),
    };

    let mut body = column![
        header,
        screenshot,
        text(session.image_label()).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            }
        }),
        text(&session.desc).size(14),
    ]
    .spacing(12);

    if !session.tech.is_empty() {
        let mut tech_row = row![].spacing(8);
        for item in &session.tech {
            tech_row = tech_row.push(
                container(text(item.as_str()).size(12))
                    .padding([2.0, 8.0])
                    .style(|theme: &Theme| {
                        let palette = theme.extended_palette();
                        container::Style {
                            background: Some(palette.background.weak.color.into()),
                            border: iced::Border {
                                radius: 4.0.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }
                    }),
            );
        }
        body = body.push(tech_row);
    }

    if let Some(live) = &session.live {
        body = body.push(text(format!("Live: {live}")).size(13).style(
            |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            },
        ));
    }

    let dialog = container(body)
        .width(Length::Fixed(720.0))
        .padding(20)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 10.0.into(),
                },
                ..Default::default()
            }
        });

    // Presses on the dimmed backdrop close the lightbox; the dialog itself
    // is opaque so presses inside it never reach the backdrop.
    opaque(
        mouse_area(
            center(opaque(dialog)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..Default::default()
            }),
        )
        .on_press(Message::CloseModal),
    )
}

/// Screenshot canvas. Holds a snapshot of the zoom session and feeds raw
/// pointer input through the gesture engine kept as widget state.
struct Lightbox {
    handle: Handle,
    natural: Option<(u32, u32)>,
    zoomed: bool,
    scale: f32,
    pan: Vector2<f32>,
    wheel_step: f32,
    precision_modifier: bool,
}

impl Lightbox {
    /// Displayed size of the image at scale 1 inside `bounds`.
    fn base_size(&self, bounds: Rectangle) -> (f32, f32) {
        match self.natural {
            Some((w, h)) => modal::fit_contain(
                (w as f32, h as f32),
                (bounds.width, bounds.height),
            ),
            // Dimensions not probed yet: fill the frame and keep pan pinned.
            None => (bounds.width, bounds.height),
        }
    }

    /// Turn a raw gesture into a clamped lightbox event.
    fn apply(&self, action: GestureAction, bounds: Rectangle) -> Option<Message> {
        let container = (bounds.width, bounds.height);
        match action {
            GestureAction::Pan(target) => {
                if !self.zoomed {
                    return None;
                }
                let clamped =
                    modal::clamp_pan(target, self.base_size(bounds), container, self.scale);
                Some(Message::Lightbox(LightboxEvent::Panned(clamped)))
            }
            GestureAction::Rescale(scale) => {
                let pan = modal::clamp_pan(self.pan, self.base_size(bounds), container, scale);
                Some(Message::Lightbox(LightboxEvent::Rescaled { scale, pan }))
            }
            GestureAction::ToggleZoom => Some(Message::Lightbox(LightboxEvent::ZoomToggled)),
        }
    }
}

impl Program<Message> for Lightbox {
    type State = GestureEngine;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.position_over(bounds).is_none() {
                    return (canvas::event::Status::Ignored, None);
                }
                if let Some(position) = cursor.position() {
                    let action = state.pointer_down(
                        MOUSE_POINTER,
                        position,
                        self.zoomed,
                        self.scale,
                        self.pan,
                        Instant::now(),
                    );
                    let message = action.and_then(|action| self.apply(action, bounds));
                    return (canvas::event::Status::Captured, message);
                }
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let action = state.pointer_move(MOUSE_POINTER, position);
                match action.and_then(|action| self.apply(action, bounds)) {
                    Some(message) => (canvas::event::Status::Captured, Some(message)),
                    None => (canvas::event::Status::Ignored, None),
                }
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.pointer_up(MOUSE_POINTER);
                (canvas::event::Status::Captured, None)
            }
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.position_over(bounds).is_none() {
                    return (canvas::event::Status::Ignored, None);
                }
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / 40.0,
                };
                match state.wheel(
                    lines * self.wheel_step,
                    self.zoomed,
                    self.precision_modifier,
                    self.scale,
                ) {
                    Some(scale) => {
                        let message = self.apply(GestureAction::Rescale(scale), bounds);
                        (canvas::event::Status::Captured, message)
                    }
                    // Without the modifier the wheel keeps scrolling the page.
                    None => (canvas::event::Status::Ignored, None),
                }
            }
            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                let action = state.pointer_down(
                    id.0,
                    position,
                    self.zoomed,
                    self.scale,
                    self.pan,
                    Instant::now(),
                );
                let message = action.and_then(|action| self.apply(action, bounds));
                (canvas::event::Status::Captured, message)
            }
            canvas::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let action = state.pointer_move(id.0, position);
                match action.and_then(|action| self.apply(action, bounds)) {
                    Some(message) => (canvas::event::Status::Captured, Some(message)),
                    None => (canvas::event::Status::Ignored, None),
                }
            }
            canvas::Event::Touch(touch::Event::FingerLifted { id, .. })
            | canvas::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                state.pointer_up(id.0);
                (canvas::event::Status::Captured, None)
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        );

        let (base_w, base_h) = self.base_size(bounds);
        let width = base_w * self.scale;
        let height = base_h * self.scale;
        let top_left = Point::new(
            (bounds.width - width) / 2.0 + self.pan.x,
            (bounds.height - height) / 2.0 + self.pan.y,
        );

        frame.draw_image(
            Rectangle::new(top_left, Size::new(width, height)),
            canvas::Image::new(self.handle.clone()),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if self.zoomed && cursor.position_over(bounds).is_some() {
            if state.is_panning() {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}
