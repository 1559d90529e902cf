pub mod config_io;
pub mod prefs;
