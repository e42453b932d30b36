/// Gallery grid
///
/// Renders the card set as a wrapping grid. Cards out of layout (hidden)
/// are skipped entirely; cards mid-transition render dimmed so the reveal
/// stagger is visible. The grid also owns the loading, failure and
/// empty-state renditions of the gallery region.

use std::collections::HashSet;
use std::path::Path;

use iced::widget::{button, column, container, image, row, text, tooltip};
use iced::{Border, Element, Length, Theme};
use iced_aw::Wrap;

use crate::data::assets;
use crate::state::project::Card;
use crate::state::reveal::{RevealState, Visibility};
use crate::Message;

pub const CARD_WIDTH: f32 = 300.0;
const THUMB_HEIGHT: f32 = 170.0;

pub fn gallery_grid<'a>(
    cards: &'a [Card],
    reveals: &'a [RevealState],
    asset_base: &Path,
    missing_assets: &HashSet<String>,
    highlighted: Option<usize>,
) -> Element<'a, Message> {
    let mut children: Vec<Element<'a, Message>> = Vec::new();

    for (index, (card, reveal)) in cards.iter().zip(reveals).enumerate() {
        let visibility = reveal.visibility();
        if !visibility.in_layout() {
            continue;
        }
        children.push(card_view(
            index,
            card,
            visibility,
            asset_base,
            missing_assets,
            highlighted == Some(index),
        ));
    }

    Wrap::with_elements(children)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn card_view<'a>(
    index: usize,
    card: &'a Card,
    visibility: Visibility,
    asset_base: &Path,
    missing_assets: &HashSet<String>,
    highlighted: bool,
) -> Element<'a, Message> {
    let dimmed = visibility.is_transitional();

    let thumb: Element<'a, Message> = match &card.thumbnail {
        Some(source) if !missing_assets.contains(source) => {
            image(image::Handle::from_path(assets::resolve(asset_base, source)))
                .width(Length::Fill)
                .height(Length::Fixed(THUMB_HEIGHT))
                .content_fit(iced::ContentFit::Cover)
                .into()
        }
        _ => container(text("No preview").size(13))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(THUMB_HEIGHT))
            .into(),
    };

    let title: Element<'a, Message> = if card.title_truncated() {
        // The full title stays reachable through the tooltip
        tooltip(
            text(&card.display_title).size(16),
            container(text(&card.title).size(13))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Top,
        )
        .into()
    } else {
        text(&card.display_title).size(16).into()
    };

    let mut badges = row![].spacing(4);
    for badge in &card.badges {
        badges = badges.push(tooltip(
            container(text(String::from(badge.indicator)).size(12))
                .padding([2.0, 6.0])
                .style(container::rounded_box),
            container(text(badge.label.clone()).size(12))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        ));
    }

    let desc: Element<'a, Message> = if card.desc_truncated() {
        tooltip(
            text(&card.display_desc).size(13),
            container(text(&card.desc).size(13))
                .padding(6)
                .max_width(CARD_WIDTH)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    } else {
        text(&card.display_desc).size(13).into()
    };

    let body = column![
        thumb,
        title,
        desc,
        badges,
        row![
            text(&card.category).size(12),
            iced::widget::horizontal_space(),
            button(text("Case Study").size(13))
                .padding([5.0, 12.0])
                .style(button::secondary)
                .on_press(Message::OpenModal(index)),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(8);

    container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(12)
        .style(move |theme: &Theme| card_style(theme, dimmed, highlighted))
        .into()
}

fn card_style(theme: &Theme, dimmed: bool, highlighted: bool) -> container::Style {
    let palette = theme.extended_palette();
    let mut background = palette.background.weak.color;
    let mut border_color = if highlighted {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };
    let mut text_color = palette.background.weak.text;

    if dimmed {
        background.a *= 0.35;
        border_color.a *= 0.35;
        text_color.a *= 0.35;
    }

    container::Style {
        text_color: Some(text_color),
        background: Some(background.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn loading_view<'a>() -> Element<'a, Message> {
    container(text("Loading projects…").size(16))
        .width(Length::Fill)
        .padding(40)
        .center_x(Length::Fill)
        .into()
}

/// Fallback rendered in place of the gallery when the feed failed to load.
pub fn failed_view(message: &str) -> Element<'_, Message> {
    container(
        column![
            text("Unable to load projects.").size(18),
            text(message.to_string()).size(13),
            button(text("Choose data file…").size(14))
                .padding([6.0, 14.0])
                .style(button::primary)
                .on_press(Message::ChooseFeed),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(40)
    .center_x(Length::Fill)
    .into()
}

/// Shown when the active filter leaves nothing visible.
pub fn empty_state<'a>() -> Element<'a, Message> {
    container(text("No projects match the selected filter.").size(15))
        .width(Length::Fill)
        .padding(30)
        .center_x(Length::Fill)
        .into()
}
