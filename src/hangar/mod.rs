pub mod hangar;

pub use hangar::{Hangar, get_hangar_path, load_hangar, load_hangar_from_str};
