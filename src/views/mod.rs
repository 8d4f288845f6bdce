use iced::Color;

pub mod fullscreen;
pub mod list;

pub const CANVAS_BG: Color = Color::from_rgb(0.08, 0.08, 0.08);
