//! Reusable input widgets.

pub mod input_box;
pub mod textarea_input;

pub use input_box::InputBox;
pub use textarea_input::MessageArea;
