mod app_events;
mod app_render;
mod app_state;

pub use app_events::poll_event;
pub use app_state::{App, CREATE_QUIZ_PLACEHOLDER, EXIT_MESSAGE, EXIT_PROMPT};
