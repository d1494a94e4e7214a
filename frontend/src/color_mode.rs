//! Pre-hydration color mode. The script is inlined by the server so the
//! right theme is on the document before any wasm runs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorModeConfig {
    pub initial: ColorMode,
    /// Follow `prefers-color-scheme` when nothing is stored.
    pub use_system_color_mode: bool,
    pub storage_key: &'static str,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        ColorModeConfig {
            initial: ColorMode::Light,
            use_system_color_mode: false,
            storage_key: "growth-ui-color-mode",
        }
    }
}

impl ColorModeConfig {
    pub fn script(&self) -> String {
        format!(
            r#"<script id="growth-color-mode">(function() {{
  var key = "{key}";
  var fallback = "{initial}";
  var useSystem = {use_system};
  var mode = null;
  try {{ mode = window.localStorage.getItem(key); }} catch (e) {{}}
  if (mode !== "light" && mode !== "dark") {{
    if (useSystem && window.matchMedia) {{
      mode = window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light";
    }} else {{
      mode = fallback;
    }}
  }}
  var root = document.documentElement;
  root.dataset.theme = mode;
  root.style.colorScheme = mode;
  if (document.body) {{
    document.body.classList.add("growth-ui-" + mode);
  }}
}})();</script>"#,
            key = self.storage_key,
            initial = self.initial.as_str(),
            use_system = self.use_system_color_mode,
        )
    }
}
