use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, Utc};
use iced::widget::{button, column, horizontal_space, row, scrollable, text, Stack};
use iced::{event, keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;

mod data;
mod state;
mod tuning;
mod ui;

use data::loader::{self, LoadError};
use data::{assets, probe};
use state::announce::Announcer;
use state::contrast::{self, ContrastCheck};
use state::filter::{self, FilterControl, FilterPlan, FilterToken};
use state::gesture;
use state::modal::ModalSession;
use state::project::{self, Card, ProjectRecord};
use state::reveal::RevealState;
use tuning::Tuning;
use ui::modal::LightboxEvent;

/// Where the gallery is in its load cycle.
#[derive(Debug, Clone)]
enum GalleryPhase {
    Loading,
    Ready,
    Failed(String),
}

/// Main application state
struct Folio {
    tuning: Tuning,
    /// Feed the cards were loaded from; screenshots resolve relative to it.
    feed_path: PathBuf,
    phase: GalleryPhase,
    cards: Vec<Card>,
    /// One reveal machine per card, index-aligned with `cards`.
    reveals: Vec<RevealState>,
    filters: Vec<FilterControl>,
    active_filter: FilterToken,
    /// True while a staggered reveal is still settling.
    grid_revealing: bool,
    reveal_epoch: u64,
    /// The active filter matched nothing.
    empty_state: bool,
    modal: Option<ModalSession>,
    modal_serial: u64,
    announcer: Announcer,
    /// Ctrl or Cmd held: the wheel zooms instead of scrolling.
    precision_modifier: bool,
    contrast_audit: bool,
    contrast_checks: Vec<ContrastCheck>,
    /// Screenshot references the feed names but the disk does not have.
    missing_assets: HashSet<String>,
    /// Card to highlight after the lightbox closes over it.
    highlighted: Option<usize>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    ProjectsLoaded(Result<Vec<ProjectRecord>, LoadError>),
    /// User clicked the "Choose data file…" button
    ChooseFeed,
    FilterSelected(FilterToken),
    /// A card's staggered show transition ran its course
    CardShown { index: usize, epoch: u64 },
    /// A card's hide transition ran its course
    CardHidden { index: usize, epoch: u64 },
    RevealSettled(u64),
    OpenModal(usize),
    CloseModal,
    ToggleZoom,
    Lightbox(LightboxEvent),
    ImageProbed {
        serial: u64,
        result: Result<(u32, u32), String>,
    },
    ScreenshotsVerified(Vec<String>),
    AnnounceCleared(u64),
    ToggleContrastAudit,
    ModifiersChanged(keyboard::Modifiers),
    EscapePressed,
}

/// Deliver `message` after `ms` milliseconds.
fn after(ms: u64, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(Duration::from_millis(ms)), move |_| {
        message.clone()
    })
}

impl Folio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let tuning = tuning::load();
        let feed_path = PathBuf::from(loader::DEFAULT_FEED);

        println!("🎨 Folio starting, feed: {}", feed_path.display());

        let folio = Folio {
            tuning,
            feed_path: feed_path.clone(),
            phase: GalleryPhase::Loading,
            cards: Vec::new(),
            reveals: Vec::new(),
            filters: Vec::new(),
            active_filter: FilterToken::All,
            grid_revealing: false,
            reveal_epoch: 0,
            empty_state: false,
            modal: None,
            modal_serial: 0,
            announcer: Announcer::default(),
            precision_modifier: false,
            contrast_audit: false,
            contrast_checks: Vec::new(),
            missing_assets: HashSet::new(),
            highlighted: None,
            status: "Loading projects…".to_string(),
        };

        (
            folio,
            Task::perform(loader::load_projects(feed_path), Message::ProjectsLoaded),
        )
    }

    fn asset_base(&self) -> PathBuf {
        loader::asset_base(&self.feed_path)
    }

    /// Record an announcement and schedule its auto-clear.
    fn announce(&mut self, message: impl Into<String>) -> Task<Message> {
        let epoch = self.announcer.announce(message);
        after(self.tuning.announce_clear_ms, Message::AnnounceCleared(epoch))
    }

    /// Turn a filter plan into the delayed completion messages that drive
    /// the staggered transitions. Completions carry the epoch minted by the
    /// plan, so a newer filter application silently invalidates them.
    fn schedule(&self, plan: FilterPlan) -> Task<Message> {
        let mut tasks = Vec::new();
        for show in plan.shows {
            tasks.push(after(
                show.delay_ms + self.tuning.transition_ms,
                Message::CardShown {
                    index: show.index,
                    epoch: show.epoch,
                },
            ));
        }
        for hide in plan.hides {
            tasks.push(after(
                self.tuning.transition_ms,
                Message::CardHidden {
                    index: hide.index,
                    epoch: hide.epoch,
                },
            ));
        }
        Task::batch(tasks)
    }

    /// Close the lightbox, returning the highlight to its card.
    fn close_modal(&mut self) -> Task<Message> {
        match self.modal.take() {
            Some(session) => {
                self.highlighted = Some(session.card_index);
                self.announce("Modal closed")
            }
            None => Task::none(),
        }
    }

    /// Flip the lightbox zoom and announce the new mode.
    fn toggle_zoom(&mut self) -> Task<Message> {
        let default_zoom = self.tuning.default_zoom;
        match &mut self.modal {
            Some(session) => {
                let enabled = session.zoom.toggle(default_zoom);
                if enabled {
                    self.announce("Zoom enabled")
                } else {
                    self.announce("Zoom disabled")
                }
            }
            None => Task::none(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProjectsLoaded(Ok(records)) => {
                self.cards = project::derive_cards(&records, self.tuning.truncate_chars);
                self.reveals = vec![RevealState::hidden(); self.cards.len()];
                self.filters =
                    filter::build_filters(self.cards.iter().map(|card| card.category.as_str()));
                self.active_filter = FilterToken::All;
                self.phase = GalleryPhase::Ready;
                self.empty_state = self.cards.is_empty();
                self.status = format!("{} projects", self.cards.len());

                // Initial staggered reveal of the whole grid
                let plan = filter::plan_filter(
                    &self.active_filter,
                    &self.cards,
                    &mut self.reveals,
                    self.tuning.reveal_stagger_ms,
                );
                self.grid_revealing = true;
                self.reveal_epoch += 1;
                let settle = self.tuning.initial_settle_ms(self.cards.len());

                let referenced: Vec<String> = self
                    .cards
                    .iter()
                    .flat_map(|card| card.images.iter().cloned())
                    .collect();

                Task::batch([
                    self.schedule(plan),
                    after(settle, Message::RevealSettled(self.reveal_epoch)),
                    Task::perform(
                        assets::verify_screenshots(self.asset_base(), referenced),
                        Message::ScreenshotsVerified,
                    ),
                ])
            }
            Message::ProjectsLoaded(Err(error)) => {
                eprintln!("⚠️  Failed to load projects: {}", error);
                self.status = "Load failed".to_string();
                self.phase = GalleryPhase::Failed(error.to_string());
                Task::none()
            }
            Message::ChooseFeed => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select Projects Feed")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                if let Some(path) = picked {
                    self.status = format!("Loading {}…", path.display());
                    self.phase = GalleryPhase::Loading;
                    self.feed_path = path.clone();
                    return Task::perform(
                        loader::load_projects(path),
                        Message::ProjectsLoaded,
                    );
                }

                Task::none()
            }
            Message::FilterSelected(token) => {
                if !matches!(self.phase, GalleryPhase::Ready) {
                    return Task::none();
                }

                self.active_filter = token;
                let plan = filter::plan_filter(
                    &self.active_filter,
                    &self.cards,
                    &mut self.reveals,
                    self.tuning.filter_stagger_ms,
                );
                self.empty_state = plan.visible_count == 0;
                self.grid_revealing = true;
                self.reveal_epoch += 1;

                Task::batch([
                    self.schedule(plan),
                    after(
                        self.tuning.unstagger_cap_ms,
                        Message::RevealSettled(self.reveal_epoch),
                    ),
                ])
            }
            Message::CardShown { index, epoch } => {
                if let Some(reveal) = self.reveals.get_mut(index) {
                    reveal.complete_show(epoch);
                }
                Task::none()
            }
            Message::CardHidden { index, epoch } => {
                if let Some(reveal) = self.reveals.get_mut(index) {
                    reveal.complete_hide(epoch);
                }
                Task::none()
            }
            Message::RevealSettled(epoch) => {
                if epoch == self.reveal_epoch {
                    self.grid_revealing = false;
                }
                Task::none()
            }
            Message::OpenModal(index) => {
                let Some(card) = self.cards.get(index) else {
                    return Task::none();
                };

                self.modal_serial += 1;
                let session = ModalSession::open(self.modal_serial, index, card);
                self.highlighted = None;

                let probe_task = match session.current_image() {
                    Some(reference) => {
                        let serial = session.serial;
                        let path = assets::resolve(&self.asset_base(), reference);
                        Task::perform(probe::probe_dimensions(path), move |result| {
                            Message::ImageProbed { serial, result }
                        })
                    }
                    None => Task::none(),
                };

                let title = session.title.clone();
                self.modal = Some(session);

                Task::batch([
                    self.announce(format!("Opened modal for {}", title)),
                    probe_task,
                ])
            }
            Message::CloseModal => self.close_modal(),
            Message::ToggleZoom => self.toggle_zoom(),
            Message::Lightbox(event) => {
                let Some(session) = &mut self.modal else {
                    return Task::none();
                };

                match event {
                    LightboxEvent::Panned(pan) => {
                        if session.zoom.zoomed {
                            session.zoom.pan = pan;
                        }
                        Task::none()
                    }
                    LightboxEvent::Rescaled { scale, pan } => {
                        // Pinching from the fitted view zooms in; pinching
                        // back down to the floor leaves zoom mode again.
                        session.zoom.scale = scale;
                        session.zoom.pan = pan;
                        session.zoom.zoomed = scale > gesture::MIN_SCALE;
                        Task::none()
                    }
                    LightboxEvent::ZoomToggled => self.toggle_zoom(),
                }
            }
            Message::ImageProbed { serial, result } => {
                if let Some(session) = &mut self.modal {
                    if session.serial == serial {
                        match result {
                            Ok((width, height)) => session.set_natural(width, height),
                            Err(message) => {
                                eprintln!("⚠️  Could not read screenshot dimensions: {}", message);
                            }
                        }
                    }
                }
                Task::none()
            }
            Message::ScreenshotsVerified(missing) => {
                if !missing.is_empty() {
                    println!("⚠️  {} referenced screenshots not found on disk", missing.len());
                }
                self.missing_assets = missing.into_iter().collect();
                Task::none()
            }
            Message::AnnounceCleared(epoch) => {
                self.announcer.clear(epoch);
                Task::none()
            }
            Message::ToggleContrastAudit => {
                self.contrast_audit = !self.contrast_audit;
                if self.contrast_audit {
                    self.contrast_checks = contrast::audit_palette(&self.theme().palette());
                }
                Task::none()
            }
            Message::ModifiersChanged(modifiers) => {
                self.precision_modifier = modifiers.control() || modifiers.logo();
                Task::none()
            }
            Message::EscapePressed => self.close_modal(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Folio").size(32),
            text("Selected projects and case studies").size(14).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }
            ),
        ]
        .spacing(4);

        let asset_base = self.asset_base();

        let mut page = column![header].spacing(18).padding(24);

        if matches!(self.phase, GalleryPhase::Ready) {
            page = page.push(ui::filters::filter_bar(&self.filters, &self.active_filter));
        }

        let body: Element<Message> = match &self.phase {
            GalleryPhase::Loading => ui::gallery::loading_view(),
            GalleryPhase::Failed(message) => ui::gallery::failed_view(message),
            GalleryPhase::Ready => {
                // The empty-state indicator waits for the stagger to settle,
                // so it never flashes mid-transition.
                if self.empty_state && !self.grid_revealing {
                    ui::gallery::empty_state()
                } else {
                    scrollable(ui::gallery::gallery_grid(
                        &self.cards,
                        &self.reveals,
                        &asset_base,
                        &self.missing_assets,
                        self.highlighted,
                    ))
                    .height(Length::Fill)
                    .into()
                }
            }
        };
        page = page.push(body);

        let footer = row![
            text(&self.status).size(12),
            text(self.announcer.message().unwrap_or_default())
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
            horizontal_space(),
            button(text("Contrast audit").size(12))
                .style(button::text)
                .padding([2.0, 6.0])
                .on_press(Message::ToggleContrastAudit),
            text(format!("© {}", Utc::now().year())).size(12),
        ]
        .spacing(16)
        .align_y(Alignment::Center);
        page = page.push(footer);

        let mut layers = Stack::new().push(
            iced::widget::container(page)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        if let Some(session) = &self.modal {
            layers = layers.push(ui::modal::modal_layer(
                session,
                &asset_base,
                self.precision_modifier,
                self.tuning.wheel_zoom_step,
            ));
        }

        if self.contrast_audit {
            layers = layers.push(ui::contrast::contrast_panel(&self.contrast_checks));
        }

        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::EscapePressed)
                }
                _ => None,
            }),
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                    Some(Message::ModifiersChanged(modifiers))
                }
                _ => None,
            }),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Folio", Folio::update, Folio::view)
        .subscription(Folio::subscription)
        .theme(Folio::theme)
        .centered()
        .run_with(Folio::new)
}
