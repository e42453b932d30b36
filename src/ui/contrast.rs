/// Contrast audit overlay
///
/// Small panel listing the palette contrast checks with their computed
/// ratios and pass/fail verdicts. Toggled from the footer.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Element, Length, Theme};

use crate::state::contrast::ContrastCheck;
use crate::Message;

pub fn contrast_panel(checks: &[ContrastCheck]) -> Element<'_, Message> {
    let mut rows = column![
        row![
            text("Contrast audit").size(15),
            horizontal_space(),
            button(text("✕").size(12))
                .style(button::text)
                .padding([2.0, 6.0])
                .on_press(Message::ToggleContrastAudit),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(8);

    for check in checks {
        let passes = check.passes_aa;
        let verdict = if passes { "AA" } else { "FAIL" };
        rows = rows.push(
            row![
                text(check.name).size(13),
                horizontal_space(),
                text(format!("{:.2}", check.ratio)).size(13),
                text(verdict).size(13).style(move |theme: &Theme| {
                    let palette = theme.extended_palette();
                    text::Style {
                        color: Some(if passes {
                            palette.success.base.color
                        } else {
                            palette.danger.base.color
                        }),
                    }
                }),
            ]
            .spacing(10),
        );
    }

    container(
        container(rows)
            .width(Length::Fixed(300.0))
            .padding(14)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(palette.background.base.color.into()),
                    border: iced::Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }
            }),
    )
    .width(Length::Fill)
    .align_x(iced::alignment::Horizontal::Right)
    .padding(16)
    .into()
}
