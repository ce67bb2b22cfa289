//! ShadCN-style reusable UI components.
//!
//! - [`Button`]: Primary action button
//! - [`TextInput`]: Text input field

mod button;
mod input;

pub use button::Button;
pub use input::TextInput;
