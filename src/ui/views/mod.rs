//! Application views (screens).

mod dashboard;
mod detail;
mod member_form;
mod members;
mod profile;

pub use dashboard::render_dashboard;
pub use detail::{DetailAction, DetailView};
pub use member_form::{FormAction, MemberFormView};
pub use members::{MembersAction, MembersView};
pub use profile::render_profile;
