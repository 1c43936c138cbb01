use iced::widget::{column, container, scrollable, text, text_input, Column};
use iced::{Element, Length, Size, Task, Theme};

mod config;
mod state;
mod ui;

use state::data::{Gender, ProfileField, ProfileId};
use state::screen::ScreenState;
use ui::dialogs;

/// Main application state
struct ProfileBrowser {
    /// Profiles, search query and selection
    screen: ScreenState,
    /// Last action, shown under the list
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search bar text changed
    SearchChanged(String),
    /// Row header tapped
    ToggleProfile(ProfileId),
    /// "Edit" pressed on an expanded row
    EditProfile(ProfileId),
    /// A text field of the edit form changed
    FieldChanged(ProfileField, String),
    /// Option chosen in the gender drop-down
    GenderPicked(Gender),
    SaveEdit,
    CancelEdit,
    /// "Delete" pressed on an expanded row
    DeleteProfile(ProfileId),
}

impl ProfileBrowser {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // The bundled dataset is compiled in; failing to parse it is a build defect
        let screen = ScreenState::load().expect("Bundled profile dataset is malformed");

        let count = screen.profiles().len();
        log::info!("👥 Loaded {} profiles", count);

        (
            ProfileBrowser {
                screen,
                status: format!("{} profiles loaded.", count),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.screen.set_query(query);
            }
            Message::ToggleProfile(id) => {
                self.screen.toggle(id);
            }
            Message::EditProfile(id) => {
                if let Err(err) = self.screen.begin_edit(id) {
                    dialogs::notify(&err.to_string());
                }
            }
            Message::FieldChanged(field, value) => {
                if let Err(err) = self.screen.edit_field(field, value) {
                    log::warn!("dropped {:?} change: {}", field, err);
                }
            }
            Message::GenderPicked(gender) => {
                if let Err(err) = self.screen.select_gender(gender) {
                    log::warn!("dropped gender change: {}", err);
                }
            }
            Message::SaveEdit => match self.screen.save() {
                Ok(id) => {
                    if let Some(profile) = self.screen.profile(id) {
                        self.status = format!("Saved {}.", profile.full_name());
                    }
                }
                Err(err) => dialogs::notify(&err.to_string()),
            },
            Message::CancelEdit => {
                self.screen.cancel();
            }
            Message::DeleteProfile(id) => {
                let Some(name) = self.screen.profile(id).map(|p| p.full_name()) else {
                    return Task::none();
                };

                let answer = dialogs::confirm_delete(&name);
                if let Some(removed) = self.screen.delete(id, answer) {
                    self.status = format!("Deleted {}.", removed.full_name());
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let search = text_input(config::SEARCH_PLACEHOLDER, self.screen.query())
            .on_input(Message::SearchChanged)
            .padding(10);

        let visible = self.screen.visible();
        let shown = visible.len();

        let list: Element<Message> = if visible.is_empty() {
            container(text("No profiles match your search.").size(14))
                .center_x(Length::Fill)
                .padding(20)
                .into()
        } else {
            let rows = visible
                .into_iter()
                .map(|profile| ui::profile_row::view(profile, self.screen.selection()));

            scrollable(Column::with_children(rows).spacing(10))
                .height(Length::Fill)
                .into()
        };

        let footer = text(format!(
            "Showing {} of {} · {}",
            shown,
            self.screen.profiles().len(),
            self.status
        ))
        .size(12);

        container(column![search, list, footer].spacing(16))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    iced::application(config::APP_TITLE, ProfileBrowser::update, ProfileBrowser::view)
        .theme(ProfileBrowser::theme)
        .window_size(Size::new(config::WINDOW_WIDTH, config::WINDOW_HEIGHT))
        .centered()
        .run_with(ProfileBrowser::new)
}
