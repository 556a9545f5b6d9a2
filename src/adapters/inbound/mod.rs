mod console_presenter;

pub use console_presenter::{format_pass, print_pass_times};
