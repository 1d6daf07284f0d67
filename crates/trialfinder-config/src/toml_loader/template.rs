//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# trialfinder configuration
# Only override what you want to change -- missing fields use defaults.

[widget]
# id = "trial-finder"

[window]
# title = "Find a Clinical Trial"
# subtitle = "Search studies recruiting near you"
# width = 430            # 240-7680
# height = 900           # 240-4320
# header_height = 96     # 0-400

[bridge]
# host = "bridge"        # bridge, frame
# fallback_height = 600  # 1-20000
# devtools = false

[location]
# mode = "ip"            # ip, fixed, disabled
# permission = "denied"  # denied, granted (opt in to the lookup)
# latitude = 37.0        # required when mode = "fixed"
# longitude = -122.0
# lookup_url = "https://ipapi.co/json/"
# timeout_secs = 10      # 1-60

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
