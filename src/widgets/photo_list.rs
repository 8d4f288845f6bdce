use std::collections::HashMap;

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use shoebox_collection::PhotoRecord;

use crate::app::Message;

const THUMB_SIZE: f32 = 96.0;
const NAME_MAX_CHARS: usize = 40;

pub fn view<'a>(
    photos: Vec<&'a PhotoRecord>,
    thumbnails: &'a HashMap<String, iced::widget::image::Handle>,
) -> Element<'a, Message> {
    if photos.is_empty() {
        return container(text("No photos. Capture one to get started.").size(16))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let rows: Vec<Element<'a, Message>> = photos
        .into_iter()
        .map(|photo| photo_row(photo, thumbnails))
        .collect();

    column(rows).spacing(4).padding(10).into()
}

fn photo_row<'a>(
    photo: &'a PhotoRecord,
    thumbnails: &'a HashMap<String, iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let thumb: Element<'a, Message> =
        match photo.locator.as_ref().and_then(|l| thumbnails.get(l)) {
            Some(handle) => image(handle.clone())
                .width(THUMB_SIZE)
                .height(THUMB_SIZE)
                .into(),
            None => container(text("...").size(12))
                .width(THUMB_SIZE)
                .height(THUMB_SIZE)
                .center_x(THUMB_SIZE)
                .center_y(THUMB_SIZE)
                .into(),
        };

    let name = photo.display_name.as_deref().unwrap_or("");
    let taken = photo.created_at.as_deref().unwrap_or("");

    let label = column![
        text(truncate_name(name)).size(14),
        text(taken.to_owned()).size(11),
    ]
    .spacing(2);

    let content = row![thumb, Space::new().width(8), label]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    // A record without a locator still shows its text fields, it just
    // cannot be opened.
    match &photo.locator {
        Some(locator) => button(content)
            .on_press(Message::OpenPhoto(locator.clone()))
            .padding(4)
            .style(button::text)
            .width(Length::Fill)
            .into(),
        None => container(content).padding(8).width(Length::Fill).into(),
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_CHARS {
        let prefix: String = name.chars().take(NAME_MAX_CHARS - 3).collect();
        format!("{prefix}...")
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(truncate_name("Photo 1"), "Photo 1");
        assert_eq!(truncate_name(""), "");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(NAME_MAX_CHARS + 5);
        let shown = truncate_name(&long);
        assert_eq!(shown.chars().count(), NAME_MAX_CHARS);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(NAME_MAX_CHARS + 1);
        let shown = truncate_name(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), NAME_MAX_CHARS);
    }
}
