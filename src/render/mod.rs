pub mod agent;
pub mod card;
pub mod container;
pub mod page;
pub mod role;

pub use agent::{agent_image_path, normalize_agent_name, ImageSource};
pub use card::{detail_link, render_card, CardTemplate};
pub use container::{render_error, render_roster, Container, HtmlContainer, ERROR_MESSAGE};
pub use page::render_page;
pub use role::RoleIcon;
