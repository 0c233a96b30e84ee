// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! gallery and the search provider.
//!
//! The `App` struct wires together the components, localization and the
//! infrastructure adapters, and translates component effects into Iced tasks
//! (see [`update`]).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SearchProvider;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{http, ImageDownloader, PixabayClient};
use crate::ui::gallery::{self, ImageCache, ImageSlot};
use crate::ui::notifications::{self, Notification};
use crate::ui::search_bar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    search_bar: search_bar::State,
    gallery: gallery::State,
    images: ImageCache,
    notifications: notifications::Manager,
    theme: Theme,
    provider: Arc<dyn SearchProvider>,
    downloader: ImageDownloader,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.gallery.query())
            .field("status", &self.gallery.status())
            .field("images", &self.gallery.images().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, wires the Pixabay adapter and optionally
    /// submits the query given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::info!(locale = %i18n.current_locale(), "interface language");

        let client = http::build_client().unwrap_or_else(|err| {
            tracing::error!(error = %err, "HTTP client setup failed, using defaults");
            reqwest::Client::new()
        });
        let api_key = config.search.resolve_api_key(flags.api_key.clone());
        let missing_api_key = api_key.is_none();
        if missing_api_key {
            tracing::warn!(
                env = config::ENV_API_KEY,
                "no Pixabay API key configured, searches will fail"
            );
        }
        let provider: Arc<dyn SearchProvider> = Arc::new(PixabayClient::new(
            client.clone(),
            &config.search,
            api_key,
        ));

        let mut app = Self::with_provider(i18n, &config, provider, ImageDownloader::new(client));

        for notification in startup_notifications(config_warning, missing_api_key) {
            app.notifications.push(notification);
        }

        let task = match flags.query {
            Some(query) => {
                app.search_bar = search_bar::State::with_input(query);
                app.update(Message::SearchBar(search_bar::Message::Submit))
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the application around an arbitrary provider.
    #[must_use]
    pub fn with_provider(
        i18n: I18n,
        config: &Config,
        provider: Arc<dyn SearchProvider>,
        downloader: ImageDownloader,
    ) -> Self {
        Self {
            i18n,
            search_bar: search_bar::State::default(),
            gallery: gallery::State::new(config.search.per_page()),
            images: ImageCache::new(config.gallery.image_cache_entries()),
            notifications: notifications::Manager::new(),
            theme: resolve_theme(config.general.theme_mode),
            provider,
            downloader,
        }
    }

    fn title(&self) -> String {
        match self.gallery.query() {
            Some(query) => self
                .i18n
                .tr_with_args("window-title-query", &[("query", query.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether a spinner is currently on screen.
    fn is_animating(&self) -> bool {
        let overlay = self.gallery.overlay();
        let overlay_loading = overlay.is_visible()
            && !matches!(
                self.images.slot(overlay.full_size_url()),
                Some(ImageSlot::Ready(_) | ImageSlot::Failed)
            );
        self.gallery.is_fetching() || overlay_loading
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.is_animating(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            search_bar: &mut self.search_bar,
            images: &mut self.images,
            notifications: &mut self.notifications,
            provider: &self.provider,
            downloader: &self.downloader,
        };

        match message {
            Message::SearchBar(msg) => update::handle_search_bar_message(&mut ctx, msg),
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(&mut ctx, url, result)
            }
            Message::Tick(now) => {
                ctx.gallery.handle(gallery::Message::SpinnerTick);
                ctx.notifications.tick_at(now);
                Task::none()
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search_bar: &self.search_bar,
            gallery: &self.gallery,
            images: &self.images,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

fn startup_notifications(
    config_warning: Option<String>,
    missing_api_key: bool,
) -> Vec<Notification> {
    let mut notifications: Vec<Notification> =
        config_warning.into_iter().map(Notification::warning).collect();
    if missing_api_key {
        notifications.push(Notification::error("notification-missing-api-key"));
    }
    notifications
}

/// Resolves the configured mode once; `System` queries the desktop.
fn resolve_theme(mode: ThemeMode) -> Theme {
    let theme = mode.to_theme();
    tracing::debug!(?mode, dark = matches!(theme, Theme::Dark), "theme resolved");
    theme
}
