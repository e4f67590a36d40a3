//! Commented default config file.

/// Default TOML config content. Every value is commented out so the file
/// documents the defaults without pinning them.
pub fn default_config_toml() -> &'static str {
    r##"# Curtain Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[sequence]
# reveal_delay_ms = 800      # title appears
# status_delay_ms = 2200     # status line appears
# complete_delay_ms = 3400   # hand-off to the application

[overlay]
# title = "QwertyDeveloper"
# title_mark = "."
# status_text = "SYSTEM_ARMED"
# reveal_duration = 1.0      # seconds, 0.0-10.0
# tracking_duration = 1.8
# status_duration = 0.3
# exit_duration = 1.4
# atmosphere_period = 5.0    # 0.5-60.0
# status_opacity = 0.6       # 0.0-1.0
# frame_opacity = 0.1
# frame_rate = 30            # 1-120

[colors]
# rgba() alpha: 0.0-1.0 with a decimal point, otherwise 0-255
# background = "#000000"
# text = "#ffffff"
# accent = "#2563eb"
# glow = "rgba(37,99,235,0.2)"

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
