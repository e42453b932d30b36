/// Filter bar
///
/// One button per filter control; exactly one is rendered active. Selecting
/// a button applies its token over the whole gallery.

use iced::widget::{button, row, text, Row};

use crate::state::filter::{FilterControl, FilterToken};
use crate::Message;

pub fn filter_bar<'a>(controls: &'a [FilterControl], active: &FilterToken) -> Row<'a, Message> {
    let mut bar = row![].spacing(8);

    for control in controls {
        let is_active = control.token == *active;
        let label = text(&control.label).size(14);
        let styled = if is_active {
            button(label).style(button::primary)
        } else {
            button(label).style(button::secondary)
        };
        bar = bar.push(
            styled
                .padding([6.0, 14.0])
                .on_press(Message::FilterSelected(control.token.clone())),
        );
    }

    bar
}
