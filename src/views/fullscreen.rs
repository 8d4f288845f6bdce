use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use super::CANVAS_BG;
use crate::app::{App, Message, Screen};

pub fn view(app: &App) -> Element<'_, Message> {
    let title = match app.screen() {
        Screen::FullScreen(locator) => app.photo_title(locator),
        Screen::List => String::new(),
    };

    let toolbar = row![
        button("< Back").on_press(Message::BackToList),
        Space::new().width(Length::Fill),
        text(title).size(20),
        Space::new().width(Length::Fill),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let canvas_style = |_theme: &_| container::Style {
        background: Some(CANVAS_BG.into()),
        ..Default::default()
    };

    let photo = if let Some(handle) = app.full_image() {
        container(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .style(canvas_style)
        .width(Length::Fill)
        .height(Length::Fill)
    } else {
        container(text("Photo unavailable").size(16))
            .style(canvas_style)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
    };

    column![toolbar, photo]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
