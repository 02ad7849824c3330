pub mod button_source;
