// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! `App` wires together the media slots, the text editor, localization,
//! and notifications, and turns their messages into side effects: file
//! dialogs, async decodes, state persistence. Cross-component policy,
//! such as popup exclusivity, lives in the update layer rather than in
//! any one component.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::{self, SlotId};
use crate::ui::info_editor;
use crate::ui::media_slot;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    profile: media_slot::State,
    poster: media_slot::State,
    info: info_editor::State,
    /// Persisted application state (last pick directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("profile_open", &self.profile.is_open())
            .field("poster_open", &self.poster.is_open())
            .field("info_editing", &self.info.is_editing())
            .finish()
    }
}

/// Builds the window settings from persisted preferences.
///
/// Persisted dimensions below the minimum are clamped so a hand-edited
/// config cannot produce an unusable window.
fn window_settings(window: &config::WindowConfig) -> window::Settings {
    let width = window.width.max(config::MIN_WINDOW_WIDTH);
    let height = window.height.max(config::MIN_WINDOW_HEIGHT);

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        // Close requests go through the update loop so session state can
        // be flushed before exit.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Decoding the embedded default artwork happens before the event loop
/// starts; a build whose assets are unusable fails here instead of
/// presenting a broken page.
pub fn run(flags: Flags) -> crate::error::Result<()> {
    use std::cell::RefCell;

    let assets = media::DefaultAssets::load()?;
    let (config, config_warning) = config::load();
    let window = window_settings(&config.window);

    // `iced::application` takes an `Fn` closure; the boot data is moved
    // out on the first call, which is the only one Iced makes.
    let boot_state = RefCell::new(Some((flags, config, config_warning, assets)));
    let boot = move || {
        let (flags, config, config_warning, assets) = boot_state
            .borrow_mut()
            .take()
            .expect("boot runs once");
        App::new(flags, config, config_warning, assets)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()?;

    Ok(())
}

impl App {
    /// Initializes application state from the loaded configuration and the
    /// decoded default artwork.
    fn new(
        flags: Flags,
        config: config::Config,
        config_warning: Option<String>,
        assets: media::DefaultAssets,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(
            flags.lang,
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        );
        let theme = AppTheme::new(config.general.theme_mode);

        let (app_state, state_warning) = persisted_state::AppState::load();

        let media::DefaultAssets { profile, poster } = assets;
        let mut app = App {
            i18n,
            theme,
            profile: media_slot::State::new(SlotId::Profile, profile),
            poster: media_slot::State::new(SlotId::Poster, poster),
            info: info_editor::State::new(),
            app_state,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            profile: &mut self.profile,
            poster: &mut self.poster,
            info: &mut self.info,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Slot(slot, slot_message) => {
                update::handle_slot_message(&mut ctx, slot, slot_message)
            }
            Message::Info(info_message) => update::handle_info_message(&mut ctx, info_message),
            Message::UploadDialogResult { slot, path } => {
                update::handle_upload_dialog_result(&mut ctx, slot, path)
            }
            Message::UploadDecoded {
                slot,
                generation,
                result,
            } => update::handle_upload_decoded(&mut ctx, slot, generation, result),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                // Flush session state; a failure at exit is only logged.
                if let Err(error) = self.app_state.save() {
                    eprintln!("Failed to save application state: {error}");
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            profile: &self.profile,
            poster: &self.poster,
            info: &self.info,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::media::{ImageData, UploadedImage};
    use crate::ui::notifications::Severity;
    use crate::ui::theming::ThemeMode;
    use std::time::Instant;

    fn test_app() -> App {
        let media::DefaultAssets { profile, poster } =
            media::DefaultAssets::load().expect("embedded default artwork must decode");
        App {
            i18n: I18n::default(),
            theme: AppTheme::new(ThemeMode::Light),
            profile: media_slot::State::new(SlotId::Profile, profile),
            poster: media_slot::State::new(SlotId::Poster, poster),
            info: info_editor::State::new(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    fn sample_upload(tag: &str) -> UploadedImage {
        UploadedImage {
            data_uri: format!("data:image/png;base64,{tag}"),
            image: ImageData::from_rgba(1, 1, vec![255_u8; 4]),
        }
    }

    fn open_slot(app: &mut App, slot: SlotId) {
        let _ = app.update(Message::Slot(slot, media_slot::Message::OpenRequested));
    }

    #[test]
    fn starts_with_defaults_and_closed_popups() {
        let app = test_app();
        assert!(app.profile.committed().is_default());
        assert!(app.poster.committed().is_default());
        assert!(!app.profile.is_open());
        assert!(!app.poster.is_open());
        assert!(!app.info.is_editing());
        assert_eq!(app.info.displayed(), info_editor::PLACEHOLDER);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn opening_a_slot_popup_closes_the_other_popups() {
        let mut app = test_app();

        open_slot(&mut app, SlotId::Profile);
        assert!(app.profile.is_open());

        open_slot(&mut app, SlotId::Poster);
        assert!(!app.profile.is_open(), "profile popup should have closed");
        assert!(app.poster.is_open());

        let _ = app.update(Message::Info(info_editor::Message::EditRequested));
        assert!(!app.poster.is_open(), "poster popup should have closed");
        assert!(app.info.is_editing());
    }

    #[test]
    fn decoded_upload_flows_into_preview_and_confirm_commits() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);

        let generation = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation,
            result: Ok(sample_upload("avatar")),
        });

        assert!(app.profile.committed().is_default(), "not committed yet");
        assert!(app.profile.preview().is_some_and(|p| !p.is_default()));

        let _ = app.update(Message::Slot(
            SlotId::Profile,
            media_slot::Message::ConfirmRequested,
        ));

        assert!(!app.profile.is_open(), "confirm closes the popup");
        assert!(!app.profile.committed().is_default());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-upload-confirmed"));
    }

    #[test]
    fn stale_decode_after_close_is_ignored() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Poster);

        let generation = app.poster.begin_decode();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.poster.is_open());

        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Poster,
            generation,
            result: Ok(sample_upload("late")),
        });
        assert!(app.poster.committed().is_default());
        assert!(app.poster.preview().is_none());

        // Stale failures are equally silent.
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Poster,
            generation,
            result: Err(DecodeError::UnsupportedFormat),
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn decode_failure_pushes_error_toast() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);

        let generation = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation,
            result: Err(DecodeError::CorruptedImage("bad header".into())),
        });

        assert!(app.profile.is_open(), "popup stays open after a failure");
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-decode-corrupted");
    }

    #[test]
    fn successful_decode_clears_previous_decode_errors() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);

        let failed = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation: failed,
            result: Err(DecodeError::UnsupportedFormat),
        });
        assert_eq!(app.notifications.visible_count(), 1);

        let retry = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation: retry,
            result: Ok(sample_upload("second-try")),
        });

        assert_eq!(app.notifications.visible_count(), 0);
        assert!(app.profile.preview().is_some_and(|p| !p.is_default()));
    }

    #[test]
    fn delete_resets_slot_and_pushes_info_toast() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);

        let generation = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation,
            result: Ok(sample_upload("avatar")),
        });
        let _ = app.update(Message::Slot(
            SlotId::Profile,
            media_slot::Message::ConfirmRequested,
        ));
        assert!(!app.profile.committed().is_default());

        open_slot(&mut app, SlotId::Profile);
        let _ = app.update(Message::Slot(
            SlotId::Profile,
            media_slot::Message::DeleteRequested,
        ));

        assert!(app.profile.committed().is_default());
        assert!(!app.profile.is_open());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-media-reset"));
    }

    #[test]
    fn escape_with_no_popup_open_is_a_noop() {
        let mut app = test_app();
        let _ = app.update(Message::EscapePressed);
        assert!(!app.profile.is_open());
        assert!(!app.poster.is_open());
        assert!(!app.info.is_editing());
    }

    #[test]
    fn escape_closes_the_text_editor_without_saving() {
        let mut app = test_app();
        let _ = app.update(Message::Info(info_editor::Message::EditRequested));
        let _ = app.update(Message::Info(info_editor::Message::InputChanged(
            "draft text".into(),
        )));

        let _ = app.update(Message::EscapePressed);

        assert!(!app.info.is_editing());
        assert_eq!(app.info.displayed(), info_editor::PLACEHOLDER);
    }

    #[test]
    fn info_save_pushes_success_toast() {
        let mut app = test_app();
        let _ = app.update(Message::Info(info_editor::Message::EditRequested));
        let _ = app.update(Message::Info(info_editor::Message::InputChanged(
            "Hello there".into(),
        )));
        let _ = app.update(Message::Info(info_editor::Message::SaveRequested));

        assert_eq!(app.info.displayed(), "Hello there");
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-info-saved"));
    }

    #[test]
    fn cancelled_upload_dialog_changes_nothing() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Poster);

        let _ = app.update(Message::UploadDialogResult {
            slot: SlotId::Poster,
            path: None,
        });

        assert!(app.poster.is_open(), "popup survives a cancelled dialog");
        assert!(app.poster.preview().is_some_and(|p| p.is_default()));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn file_drop_without_open_popup_is_ignored() {
        let mut app = test_app();

        let _ = app.update(Message::FileDropped("/tmp/picture.png".into()));

        assert!(app.profile.committed().is_default());
        assert!(app.poster.committed().is_default());
        assert!(!app.notifications.has_notifications());
        assert!(app.app_state.last_open_directory.is_none());
    }

    #[test]
    fn file_drop_with_open_popup_routes_to_that_slot() {
        let _lock = paths::ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().expect("create temp dir");
        std::env::set_var(paths::ENV_DATA_DIR, dir.path());

        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);
        let probe = app.profile.begin_decode();
        assert!(app.profile.is_current_decode(probe));

        let _ = app.update(Message::FileDropped("/drops/rally.png".into()));

        assert!(
            !app.profile.is_current_decode(probe),
            "drop should start a newer decode for the open slot"
        );
        assert_eq!(
            app.app_state.last_open_directory,
            Some(std::path::PathBuf::from("/drops"))
        );

        std::env::remove_var(paths::ENV_DATA_DIR);
    }

    #[test]
    fn notification_dismiss_message_removes_toast() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);
        let generation = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation,
            result: Err(DecodeError::UnsupportedFormat),
        });

        let id = app.notifications.visible().next().expect("one toast").id();
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn tick_keeps_fresh_notifications_alive() {
        let mut app = test_app();
        open_slot(&mut app, SlotId::Profile);
        let generation = app.profile.begin_decode();
        let _ = app.update(Message::UploadDecoded {
            slot: SlotId::Profile,
            generation,
            result: Err(DecodeError::UnsupportedFormat),
        });

        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn title_uses_localized_app_name() {
        let app = test_app();
        assert_eq!(app.title(), "Candidate Studio");
    }

    #[test]
    fn fixed_theme_modes_map_to_iced_themes() {
        let mut app = test_app();
        assert_eq!(app.theme(), Theme::Light);
        app.theme = AppTheme::new(ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn window_settings_clamp_undersized_dimensions() {
        let settings = window_settings(&config::WindowConfig {
            width: 100.0,
            height: 100.0,
        });
        assert_eq!(settings.size.width, config::MIN_WINDOW_WIDTH);
        assert_eq!(settings.size.height, config::MIN_WINDOW_HEIGHT);

        let defaults = window_settings(&config::WindowConfig::default());
        assert_eq!(defaults.size.width, config::DEFAULT_WINDOW_WIDTH);
        assert_eq!(defaults.size.height, config::DEFAULT_WINDOW_HEIGHT);
    }
}
