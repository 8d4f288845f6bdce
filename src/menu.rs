use std::time::Duration;

use iced::Subscription;
use muda::accelerator::{Accelerator, Code, Modifiers};
use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};

use crate::app::Message;

pub struct AppMenu {
    _menu: Menu,
}

pub fn build() -> AppMenu {
    let menu = Menu::new();

    // macOS uses the first submenu as the app menu (title replaced with app name)
    let app_menu = Submenu::with_items(
        "shoebox",
        true,
        &[
            &PredefinedMenuItem::about(None, None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::services(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::hide(None),
            &PredefinedMenuItem::hide_others(None),
            &PredefinedMenuItem::show_all(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::quit(None),
        ],
    )
    .expect("failed to create app menu");

    let file_menu = Submenu::with_id_and_items(
        "file",
        "File",
        true,
        &[&MenuItem::with_id(
            "capture",
            "Capture Photo...",
            true,
            Some(Accelerator::new(Some(Modifiers::META), Code::KeyN)),
        )],
    )
    .expect("failed to create File menu");

    menu.append_items(&[&app_menu, &file_menu])
        .expect("failed to append menus");

    #[cfg(target_os = "macos")]
    menu.init_for_nsapp();

    AppMenu { _menu: menu }
}

pub fn subscription() -> Subscription<Message> {
    iced::time::every(Duration::from_millis(50)).map(|_| match MenuEvent::receiver().try_recv() {
        Ok(event) if event.id == "capture" => Message::Capture,
        _ => Message::Noop,
    })
}
