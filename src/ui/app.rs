//! Main finder application using iced.

use std::sync::Arc;

use super::style;
use super::theme::FinderTheme;
use crate::config::Config;
use crate::core::{Dataset, EmojiRecord};
use crate::error::FinderError;
use crate::services::clipboard::{ArboardClipboard, ClipboardAccess};
use crate::services::loader::{self, DatasetSource, RequestId};
use crate::session::{Session, WakeupTimer};

use iced::event;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length, Subscription, Task};
use tokio::time::Instant;

/// The finder application state.
pub struct FinderApp {
    config: Config,
    theme: FinderTheme,
    source: DatasetSource,
    session: Session,
    wakeup: WakeupTimer,
    clipboard: Option<Arc<ArboardClipboard>>,
    input_id: text_input::Id,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    // Dataset
    DatasetLoaded(RequestId, Result<Dataset, String>),
    Reload,

    // Input events
    SearchChanged(String),
    InputSubmit,
    Tick(Instant),

    // Navigation
    SelectNext,
    SelectPrevious,
    EscapePressed,

    // Clipboard
    Copy(usize),
    Copied(Result<String, String>),
}

impl FinderApp {
    /// Create the application and start loading the dataset.
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let theme = FinderTheme::by_name(&config.appearance.theme);
        let source = DatasetSource::resolve(config.dataset.source.as_deref());
        let session = Session::new(&config);

        let clipboard = match ArboardClipboard::new() {
            Ok(clipboard) => Some(Arc::new(clipboard)),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                None
            }
        };

        let mut app = Self {
            config,
            theme,
            source,
            session,
            wakeup: WakeupTimer::new(),
            clipboard,
            input_id: text_input::Id::unique(),
        };

        let load = app.load_dataset();
        let focus = text_input::focus(app.input_id.clone());

        (app, Task::batch([load, focus]))
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DatasetLoaded(id, result) => {
                let result = result.map_err(FinderError::Dataset);
                self.session.finish_load(id, result);
                Task::none()
            }

            Message::Reload => self.load_dataset(),

            Message::SearchChanged(query) => {
                self.session.input(query, Instant::now());
                self.schedule_tick()
            }

            Message::InputSubmit => {
                // Enter commits pending input first, copies on a second press
                if self.session.commit_now() {
                    Task::none()
                } else {
                    self.copy(self.session.selected_index())
                }
            }

            Message::Tick(at) => {
                self.wakeup.fired(at);
                self.session.tick(Instant::now());
                self.schedule_tick()
            }

            Message::SelectNext => {
                self.session.select_next();
                Task::none()
            }

            Message::SelectPrevious => {
                self.session.select_previous();
                Task::none()
            }

            Message::EscapePressed => {
                self.session.clear_query();
                text_input::focus(self.input_id.clone())
            }

            Message::Copy(position) => {
                self.session.select(position);
                self.copy(position)
            }

            Message::Copied(result) => {
                let result = result.map_err(FinderError::Clipboard);
                self.session.finish_copy(result, Instant::now());
                self.schedule_tick()
            }
        }
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Unicode Finder").size(32).color(self.theme.accent),
            self.build_search_input(),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let body: Element<'_, Message> = if self.session.is_loading() {
            self.build_status("Loading emoji data...")
        } else if self.session.shows_empty_state() {
            self.build_status("No emojis found matching your search.")
        } else {
            self.build_grid()
        };

        let content = column![header, body, self.build_toasts()]
            .spacing(24)
            .padding(24)
            .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| style::main_container(&self.theme))
            .into()
    }

    /// Handle keyboard subscriptions.
    ///
    /// Listens to captured events too: the focused search box swallows Escape.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| {
            let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
            else {
                return None;
            };

            match (key.as_ref(), status) {
                (Key::Named(Named::Escape), _) => Some(Message::EscapePressed),
                (Key::Named(Named::ArrowUp), _) => Some(Message::SelectPrevious),
                (Key::Named(Named::ArrowDown), _) => Some(Message::SelectNext),
                // Left/right move the text cursor while the input handles them
                (Key::Named(Named::ArrowLeft), event::Status::Ignored) => {
                    Some(Message::SelectPrevious)
                }
                (Key::Named(Named::ArrowRight), event::Status::Ignored) => {
                    Some(Message::SelectNext)
                }
                (Key::Character("r"), _) if modifiers.command() => Some(Message::Reload),
                _ => None,
            }
        })
    }

    // --- Private methods ---

    fn load_dataset(&mut self) -> Task<Message> {
        let id = self.session.begin_load();
        let source = self.source.clone();
        tracing::info!(source = %source, "Loading emoji data");

        Task::perform(
            async move { loader::fetch(&source).await.map_err(|e| e.to_string()) },
            move |result| Message::DatasetLoaded(id, result),
        )
    }

    fn schedule_tick(&mut self) -> Task<Message> {
        match self.wakeup.arm(self.session.next_deadline()) {
            Some(deadline) => Task::perform(tokio::time::sleep_until(deadline), move |_| {
                Message::Tick(deadline)
            }),
            None => Task::none(),
        }
    }

    fn copy(&self, position: usize) -> Task<Message> {
        let Some(character) = self.session.copy_target(position) else {
            return Task::none();
        };
        let Some(clipboard) = self.clipboard.clone() else {
            return Task::done(Message::Copied(Err("Clipboard unavailable".to_string())));
        };

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    clipboard.set_text(&character).map(|()| character)
                })
                .await
                .map_err(|e| e.to_string())
                .and_then(|result| result.map_err(|e| e.to_string()))
            },
            Message::Copied,
        )
    }

    fn build_search_input(&self) -> Element<'_, Message> {
        let input = text_input(
            "Search emojis by name, keyword, or character...",
            self.session.raw_query(),
        )
        .id(self.input_id.clone())
        .on_input(Message::SearchChanged)
        .on_submit(Message::InputSubmit)
        .padding(14)
        .size(16)
        .style(|_, status| {
            style::search_input(&self.theme, matches!(status, text_input::Status::Focused))
        });

        container(input).max_width(480).into()
    }

    fn build_status(&self, message: &'static str) -> Element<'_, Message> {
        container(text(message).size(15).color(self.theme.subtext))
            .padding(48)
            .center_x(Length::Fill)
            .into()
    }

    fn build_grid(&self) -> Element<'_, Message> {
        let columns = self.config.appearance.columns.max(1) as usize;
        let copied = self.session.copied_character(Instant::now());

        let mut cards = self
            .session
            .visible()
            .enumerate()
            .map(|(position, record)| {
                let was_copied = copied == Some(record.character.as_str());
                self.build_card(position, record, was_copied)
            })
            .peekable();

        let mut grid = Column::new().spacing(12);
        while cards.peek().is_some() {
            let mut cells: Vec<Element<'_, Message>> = cards.by_ref().take(columns).collect();
            // Pad the last row so cards keep their width
            while cells.len() < columns {
                cells.push(Space::with_width(Length::Fill).into());
            }
            grid = grid.push(Row::with_children(cells).spacing(12));
        }

        scrollable(grid)
            .style(|_, _| style::results_scrollable(&self.theme))
            .height(Length::Fill)
            .into()
    }

    fn build_card<'a>(
        &'a self,
        position: usize,
        record: &'a EmojiRecord,
        was_copied: bool,
    ) -> Element<'a, Message> {
        let selected = position == self.session.selected_index();

        let mut content = column![
            text(record.character.as_str()).size(40),
            text(record.name.as_str()).size(12).color(self.theme.text),
            text(record.primary_code_point()).size(12).color(self.theme.subtext),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        if was_copied {
            content = content.push(
                container(text("Copied!").size(11))
                    .padding([2, 8])
                    .style(|_| style::copied_pill(&self.theme)),
            );
        }

        button(content)
            .on_press(Message::Copy(position))
            .padding(16)
            .width(Length::Fill)
            .style(move |_, status| style::emoji_card(&self.theme, selected, status))
            .into()
    }

    fn build_toasts(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let toasts: Vec<Element<'_, Message>> = self
            .session
            .toasts(now)
            .map(|toast| {
                container(text(toast.message.as_str()).size(14))
                    .padding([8, 14])
                    .style(|_| style::toast(&self.theme))
                    .into()
            })
            .collect();

        Row::with_children(toasts).spacing(8).into()
    }
}
