// UI Components
mod button;
mod progress_bar;
mod text_field;

pub use button::Button;
pub use progress_bar::ProgressBar;
pub use text_field::TextField;
