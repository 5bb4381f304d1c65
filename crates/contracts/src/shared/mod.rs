pub mod view_settings;
