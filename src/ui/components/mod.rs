//! Reusable UI components.

mod grid;
mod input;
mod notification;
mod search_bar;
mod table;
mod theme_picker;

pub use grid::render_member_grid;
pub use input::TextInput;
pub use notification::{Notification, NotificationManager, NotificationType};
pub use search_bar::SearchPanel;
pub use table::render_member_table;
pub use theme_picker::{ThemePicker, ThemePickerAction};
