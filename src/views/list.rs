use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::widgets;

pub fn view(app: &App) -> Element<'_, Message> {
    let capture_btn = if app.can_capture() {
        button("Capture Photo").on_press(Message::Capture)
    } else {
        button("Capture Photo")
    };

    let toolbar = row![
        text("Shoebox").size(24),
        Space::new().width(16),
        widgets::search_bar::view(app.query(), app.sort()),
        Space::new().width(Length::Fill),
        capture_btn,
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let list = scrollable(widgets::photo_list::view(
        app.filtered_photos(),
        app.thumbnails(),
    ))
    .height(Length::Fill)
    .width(Length::Fill);

    let status = container(text(app.status_message()).size(12))
        .padding(5)
        .width(Length::Fill);

    column![toolbar, list, status]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
