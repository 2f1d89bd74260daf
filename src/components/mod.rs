//! UI Components
//!
//! The widget's three regions as Leptos components.

mod filter_controls;
mod todo_input;
mod todo_list;
mod todo_row;

pub use filter_controls::FilterControls;
pub use todo_input::TodoInput;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
