use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use iced::{Element, Subscription, Task, Theme};
use tracing::{error, info, warn};

use shoebox_collection::{PhotoCollection, PhotoRecord, SortKey, timestamp};
use shoebox_storage::CaptureStore;
use shoebox_thumbnails::ThumbnailCache;

use crate::menu;
use crate::views;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List,
    /// Full-screen display of the photo behind this locator.
    FullScreen(String),
}

pub struct App {
    screen: Screen,
    collection: PhotoCollection,
    thumbnails: HashMap<String, Handle>,
    full_image: Option<Handle>,
    store: Option<CaptureStore>,
    thumbnail_cache_dir: Option<PathBuf>,
    status_message: String,
    _menu: menu::AppMenu,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Capture
    Capture,
    CaptureFileSelected(Option<PathBuf>),
    CaptureSaved(Option<String>),

    // Search and sort
    QueryChanged(String),
    SortBy(SortKey),

    // Navigation
    OpenPhoto(String),
    BackToList,

    // Thumbnails
    ThumbnailReady(String, Vec<u8>),

    Noop,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let store = match CaptureStore::default_location() {
            Ok(store) => {
                info!(root = %store.root().display(), "capture store ready");
                Some(store)
            }
            Err(err) => {
                error!(%err, "capture store unavailable");
                None
            }
        };

        let status_message = match &store {
            Some(store) => format!("Ready. Captures are saved to {}.", store.root().display()),
            None => "Capture store unavailable; capturing is disabled.".into(),
        };

        let app = Self {
            screen: Screen::List,
            collection: PhotoCollection::new(),
            thumbnails: HashMap::new(),
            full_image: None,
            store,
            thumbnail_cache_dir: dirs::cache_dir().map(|d| d.join("shoebox").join("thumbnails")),
            status_message,
            _menu: menu::build(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match &self.screen {
            Screen::List => format!("Shoebox - {} photos", self.collection.len()),
            Screen::FullScreen(locator) => {
                format!("Shoebox - {}", self.photo_title(locator))
            }
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        menu::subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Capture => {
                if self.store.is_none() {
                    self.status_message = "Capture store unavailable; capturing is disabled.".into();
                    return Task::none();
                }
                Task::perform(
                    async {
                        let handle = rfd::AsyncFileDialog::new()
                            .set_title("Capture a photo")
                            .add_filter("Images", &["jpg", "jpeg", "png", "tiff", "tif"])
                            .pick_file()
                            .await;
                        handle.map(|h| h.path().to_path_buf())
                    },
                    Message::CaptureFileSelected,
                )
            }

            Message::CaptureFileSelected(Some(path)) => {
                let Some(store) = self.store.clone() else {
                    return Task::none();
                };
                self.status_message = format!("Capturing {}...", path.display());
                Task::perform(
                    async move {
                        match image::open(&path) {
                            Ok(img) => match store.save_capture(&img) {
                                Ok(locator) => Some(locator),
                                Err(err) => {
                                    warn!(%err, "failed to save capture");
                                    None
                                }
                            },
                            Err(err) => {
                                warn!(path = %path.display(), %err, "failed to decode capture");
                                None
                            }
                        }
                    },
                    Message::CaptureSaved,
                )
            }

            Message::CaptureFileSelected(None) => Task::none(),

            Message::CaptureSaved(Some(locator)) => {
                let record = PhotoRecord {
                    locator: Some(locator.clone()),
                    display_name: Some(format!("Photo {}", self.collection.len() + 1)),
                    created_at: Some(timestamp::now()),
                };
                self.collection.add_photo(record);
                info!(%locator, count = self.collection.len(), "photo captured");
                self.status_message = format!("{} photos in collection", self.collection.len());
                self.load_thumbnail(locator)
            }

            Message::CaptureSaved(None) => {
                self.status_message = "Capture failed; no photo was added.".into();
                Task::none()
            }

            Message::QueryChanged(text) => {
                self.collection.update_query(text);
                Task::none()
            }

            Message::SortBy(key) => {
                self.collection.sort_by(key);
                info!(?key, "sorted collection");
                Task::none()
            }

            Message::OpenPhoto(locator) => {
                self.full_image = Some(Handle::from_path(&locator));
                self.screen = Screen::FullScreen(locator);
                Task::none()
            }

            Message::BackToList => {
                self.screen = Screen::List;
                self.full_image = None;
                Task::none()
            }

            Message::ThumbnailReady(locator, bytes) => {
                self.thumbnails.insert(locator, Handle::from_bytes(bytes));
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::List => views::list::view(self),
            Screen::FullScreen(_) => views::fullscreen::view(self),
        }
    }

    fn load_thumbnail(&self, locator: String) -> Task<Message> {
        let cache_dir = self.thumbnail_cache_dir.clone();
        Task::perform(
            async move {
                match load_thumbnail_bytes(Path::new(&locator), cache_dir.as_deref()) {
                    Ok(bytes) => Some((locator, bytes)),
                    Err(err) => {
                        warn!(%err, "failed to load thumbnail");
                        None
                    }
                }
            },
            |result| match result {
                Some((locator, bytes)) => Message::ThumbnailReady(locator, bytes),
                None => Message::Noop,
            },
        )
    }

    /// Display name of the record behind `locator`, falling back to the
    /// locator's file name.
    pub fn photo_title(&self, locator: &str) -> String {
        self.collection
            .view()
            .iter()
            .find(|p| p.locator.as_deref() == Some(locator))
            .and_then(|p| p.display_name.clone())
            .unwrap_or_else(|| {
                Path::new(locator)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string()
            })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn filtered_photos(&self) -> Vec<&PhotoRecord> {
        self.collection.view()
    }

    pub fn thumbnails(&self) -> &HashMap<String, Handle> {
        &self.thumbnails
    }

    pub fn full_image(&self) -> Option<&Handle> {
        self.full_image.as_ref()
    }

    pub fn query(&self) -> &str {
        self.collection.query()
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.collection.sort()
    }

    pub fn can_capture(&self) -> bool {
        self.store.is_some()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

fn load_thumbnail_bytes(path: &Path, cache_dir: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    if let Some(dir) = cache_dir
        && let Ok(cache) = ThumbnailCache::new(dir.to_path_buf())
    {
        return shoebox_thumbnails::cached_thumbnail(&cache, path);
    }

    shoebox_thumbnails::generator::thumbnail_bytes(path)
}
