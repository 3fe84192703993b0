//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Barlekha Directory
//! library and the Zellij plugin system. It implements `ZellijPlugin`, maps
//! Zellij key events onto library events and carries out the actions the
//! library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` from seed data
//! 2. **Subscribe**: Register for `Key`, `PermissionRequestResult`, `RunCommandResult`
//! 3. **Update**: Translate keys per input mode, delegate to `handle_event`
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n`: Move down (next field in the form)
//! - `Ctrl+p`: Move up (previous field in the form)
//!
//! Browse mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Edit search query
//! - `c`/`C`: Next/previous category
//! - `r`/`R`: Next/previous minimum rating
//! - `a`: Add listing
//! - `e`/`Enter`: Edit selected listing
//! - `d`: Delete selected listing
//! - `m`: Open map link
//! - `Esc`: Reset filters
//! - `q`: Close plugin
//!
//! Search mode:
//! - Characters edit the query
//! - `Enter`: Keep query, back to browsing
//! - `Esc`: Clear query
//!
//! Form mode:
//! - Characters edit the focused field
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move field focus
//! - `Enter`: Save listing
//! - `Esc`: Discard draft

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use barlekha_directory::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: AppState,

    /// Whether `RunCommands` was granted; map links need it.
    can_run_commands: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: barlekha_directory::initialize(&Config::default()),
            can_run_commands: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and session state, then
    /// requests `RunCommands` (for `xdg-open`) and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        barlekha_directory::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = barlekha_directory::initialize(&config);
        tracing::debug!(listing_count = self.app.store().len(), "app state initialized");

        request_permission(&[PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::PermissionRequestResult,
            EventType::RunCommandResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Translates Zellij events, delegates to `handle_event` and executes
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Self::handle_command_result(exit_code, &stderr, &context);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        barlekha_directory::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Browse => Self::map_browse_key(key),
            InputMode::Search => Self::map_search_key(key),
            InputMode::Form(_) => Self::map_form_key(key),
        }
    }

    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::NextCategory,
            BareKey::Char('C') => Event::PreviousCategory,
            BareKey::Char('r') => Event::NextMinRating,
            BareKey::Char('R') => Event::PreviousMinRating,
            BareKey::Char('a') => Event::AddListing,
            BareKey::Char('e') => Event::EditSelected,
            BareKey::Char('d') => Event::DeleteSelected,
            BareKey::Char('m') => Event::OpenMap,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Backspace => Event::Backspace,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PreviousField,
            BareKey::Backspace => Event::Backspace,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                self.can_run_commands = true;
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - map links will not open");
                self.can_run_commands = false;
            }
        }
    }

    fn handle_command_result(
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) {
        if exit_code == Some(0) {
            tracing::debug!(context = ?context, "command finished");
        } else {
            tracing::warn!(
                exit_code = ?exit_code,
                stderr = %String::from_utf8_lossy(stderr),
                context = ?context,
                "command failed"
            );
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `OpenMapLink`: Hand the URL to `xdg-open` on the host
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::OpenMapLink { ref url } => {
                if !self.can_run_commands {
                    tracing::warn!(url = %url, "cannot open map link without RunCommands permission");
                    return;
                }
                tracing::debug!(url = %url, "opening map link");
                let context = BTreeMap::from([("action".to_string(), "open_map_link".to_string())]);
                run_command(&["xdg-open", url.as_str()], context);
            }
        }
    }
}
