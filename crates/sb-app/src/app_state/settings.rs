//! `[web]` config section to engine settings.

use sb_config::schema::WebConfig;
use sb_engine::EngineSettings;

pub(super) fn engine_settings(web: &WebConfig) -> EngineSettings {
    EngineSettings {
        user_agent: web.user_agent.clone(),
        auto_load_images: web.auto_load_images,
        enable_plugins: web.enable_plugins,
        enable_scripts: web.enable_scripts,
        enable_spatial_navigation: web.enable_spatial_navigation,
        enable_spell_checking: web.enable_spell_checking,
        enable_inspector: web.enable_inspector,
        transparent_background: web.transparent_background,
        full_content_zoom: web.full_content_zoom,
        smooth_scrolling: web.smooth_scrolling,
        zoom_step: web.zoom_step,
    }
}
