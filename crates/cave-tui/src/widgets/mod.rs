//! Widgets drawn by the full-screen front end

mod board;
mod choice;
mod inventory;
mod messages;
mod status;

pub use board::BoardWidget;
pub use choice::ChoiceWidget;
pub use inventory::InventoryWidget;
pub use messages::MessagesWidget;
pub use status::StatusWidget;
