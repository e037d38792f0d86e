//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# sb configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[general]
home_page = "https://duckduckgo.com/"

[web]
# user_agent = "Mozilla/5.0 ..."
# auto_load_images = true
# enable_plugins = false
# enable_scripts = true
# enable_spatial_navigation = false
# enable_spell_checking = false
# enable_inspector = true
# transparent_background = false
# full_content_zoom = true     # false zooms text only
# smooth_scrolling = false
# zoom_step = 0.1              # 0.01-1.0

[downloads]
# directory = "/home/me/Downloads"   # unset: platform download dir

[tabs]
# open_in_background = false
# label_max_chars = 24         # 4-128

[window]
# width = 800                  # 200-16384
# height = 600                 # 150-16384
# toolbar_height = 76          # 32-200
# status_bar_height = 22       # 0-64

[keybinds]
# new_tab = "Cmd+T"
# close_tab = "Cmd+W"
# next_tab = "Ctrl+Tab"
# prev_tab = "Ctrl+Shift+Tab"
# focus_address = "Cmd+L"
# reload = "Cmd+R"
# back = "Alt+Left"
# forward = "Alt+Right"
# home = "Alt+Home"
# find = "Cmd+F"
# find_next = "Cmd+G"
# find_prev = "Cmd+Shift+G"
# zoom_in = "Cmd+Equal"
# zoom_out = "Cmd+Minus"
# zoom_reset = "Cmd+0"
# inspector = "Cmd+Shift+I"
# fullscreen = "F11"
# quit = "Cmd+Q"

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
