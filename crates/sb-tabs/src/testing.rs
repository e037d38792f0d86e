//! In-memory engine, factory and chrome for unit tests.

use sb_common::{ClientId, EditCommand, EngineError, Rect};
use sb_engine::{Engine, EngineFactory, EngineSettings, SearchOptions};

use crate::chrome::{Chrome, NavigationState, TabEntry};

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub id: u32,
    pub settings: EngineSettings,
    pub back: bool,
    pub forward: bool,
    pub zoom: f64,
    pub loads: Vec<String>,
    pub commands: Vec<String>,
    pub visible: bool,
}

impl Engine for FakeEngine {
    fn can_go_back(&self) -> bool {
        self.back
    }
    fn can_go_forward(&self) -> bool {
        self.forward
    }
    fn settings(&self) -> &EngineSettings {
        &self.settings
    }
    fn zoom_level(&self) -> f64 {
        self.zoom
    }
    fn load(&mut self, uri: &str) -> Result<(), EngineError> {
        self.loads.push(uri.to_string());
        Ok(())
    }
    fn reload(&mut self) -> Result<(), EngineError> {
        self.commands.push("reload".into());
        Ok(())
    }
    fn go_back(&mut self) -> Result<(), EngineError> {
        self.commands.push("back".into());
        Ok(())
    }
    fn go_forward(&mut self) -> Result<(), EngineError> {
        self.commands.push("forward".into());
        Ok(())
    }
    fn search_text(&mut self, query: &str, _options: SearchOptions) -> Result<(), EngineError> {
        self.commands.push(format!("find:{query}"));
        Ok(())
    }
    fn set_zoom_level(&mut self, level: f64) -> Result<(), EngineError> {
        self.zoom = level;
        Ok(())
    }
    fn set_settings(&mut self, settings: EngineSettings) -> Result<(), EngineError> {
        self.settings = settings;
        Ok(())
    }
    fn edit(&mut self, command: EditCommand) -> Result<(), EngineError> {
        self.commands.push(command.exec_command().to_string());
        Ok(())
    }
    fn set_inspector(&mut self, open: bool) -> Result<(), EngineError> {
        self.commands.push(format!("inspector:{open}"));
        Ok(())
    }
    fn set_bounds(&mut self, _bounds: Rect) -> Result<(), EngineError> {
        Ok(())
    }
    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.visible = visible;
        Ok(())
    }
    fn focus(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Hands out [`FakeEngine`]s; `fail` makes the next calls error.
#[derive(Debug, Default)]
pub struct FakeFactory {
    pub fail: bool,
    pub created: Vec<ClientId>,
}

impl EngineFactory for FakeFactory {
    type View = FakeEngine;

    fn create_view(
        &mut self,
        id: ClientId,
        settings: &EngineSettings,
    ) -> Result<FakeEngine, EngineError> {
        if self.fail {
            return Err(EngineError::Create("out of views".into()));
        }
        self.created.push(id);
        Ok(FakeEngine {
            id: id.0,
            settings: settings.clone(),
            zoom: 1.0,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct FakeChrome {
    pub title: String,
    pub address: String,
    pub nav: NavigationState,
    pub tabs: Vec<TabEntry>,
    pub status: Option<String>,
    pub inspecting: bool,
}

impl Chrome for FakeChrome {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
    fn set_address(&mut self, uri: &str) {
        self.address = uri.to_string();
    }
    fn set_navigation_state(&mut self, state: NavigationState) {
        self.nav = state;
    }
    fn set_tabs(&mut self, tabs: &[TabEntry]) {
        self.tabs = tabs.to_vec();
    }
    fn set_status(&mut self, text: Option<&str>) {
        self.status = text.map(String::from);
    }
    fn set_inspecting(&mut self, inspecting: bool) {
        self.inspecting = inspecting;
    }
}

pub fn registry_with(n: usize) -> (crate::ClientRegistry<FakeEngine>, FakeFactory) {
    let mut factory = FakeFactory::default();
    let settings = EngineSettings::default();
    let mut registry =
        crate::ClientRegistry::new(&mut factory, &settings).expect("first view");
    for _ in 1..n {
        registry
            .create_client(&mut factory, &settings, crate::Placement::Foreground)
            .expect("view");
    }
    (registry, factory)
}
