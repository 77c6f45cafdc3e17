pub(crate) fn default_font_size() -> u32 {
    16
}

pub(crate) fn default_line_spacing() -> f32 {
    1.4
}

pub(crate) fn default_content_width() -> f32 {
    880.0
}

pub(crate) fn default_section_spacing() -> f32 {
    48.0
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    900.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
