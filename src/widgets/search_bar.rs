use iced::Element;
use iced::widget::{pick_list, row, text_input};

use shoebox_collection::SortKey;

use crate::app::Message;

/// Search field plus the sort dropdown, wired straight into the
/// collection: every keystroke updates the query, picking an entry
/// re-sorts.
pub fn view<'a>(query: &'a str, sort: Option<SortKey>) -> Element<'a, Message> {
    let input = text_input("Search", query)
        .on_input(Message::QueryChanged)
        .width(260);

    let sort_picker = pick_list(SortKey::ALL, sort, Message::SortBy).placeholder("Sort");

    row![input, sort_picker].spacing(8).into()
}
