pub mod indent_flags;
pub mod json_list;
pub mod lines;

pub use indent_flags::IndentFlagsFormatter;
pub use json_list::JsonListFormatter;
pub use lines::LinesFormatter;
