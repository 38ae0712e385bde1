mod engine;
mod view;

pub use engine::{CloseTicket, DialogEngine, DialogPhase, CLOSE_DELAY_MS};
pub use view::Modal;
