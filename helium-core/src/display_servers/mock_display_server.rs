use std::collections::HashMap;

use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::{HeliumError, Result};
use crate::models::{MockHandle, SizeHints, WindowAttributes, WindowHandle, WindowType, Xyhw};

/// Serves scripted query replies and records everything asked of it.
#[derive(Default)]
pub struct MockDisplayServer {
    pub events: Vec<DisplayEvent<MockHandle>>,

    pub attributes: HashMap<MockHandle, WindowAttributes>,
    pub geometries: HashMap<MockHandle, Xyhw>,
    pub types: HashMap<MockHandle, WindowType>,
    pub transients: HashMap<MockHandle, MockHandle>,
    pub hints: HashMap<MockHandle, SizeHints>,
    pub titles: HashMap<MockHandle, String>,

    pub fail_grab: bool,
    pub fail_queries: bool,
    pub fail_create_decoration: bool,
    pub fail_create_bar: bool,
    pub fail_reparent: bool,

    pub grab_depth: i32,
    pub grab_count: usize,
    /// Grab depth seen by each `create_decoration` call.
    pub grab_depth_at_create: Vec<i32>,
    pub created: Vec<MockHandle>,
    pub destroyed: Vec<MockHandle>,
    pub reparented: Vec<(MockHandle, MockHandle, i32, i32)>,
    pub actions: Vec<DisplayAction<MockHandle>>,
}

fn failure(what: &str) -> HeliumError {
    HeliumError::display_server(format!("mock: {what} failed"))
}

impl MockDisplayServer {
    fn query<T: Clone + Default>(
        &self,
        table: &HashMap<MockHandle, T>,
        window: WindowHandle<MockHandle>,
    ) -> Result<T> {
        if self.fail_queries {
            return Err(failure("query"));
        }
        Ok(table.get(&window.0).cloned().unwrap_or_default())
    }

    fn allocate(&mut self) -> WindowHandle<MockHandle> {
        let id = 1000 + self.created.len() as MockHandle;
        self.created.push(id);
        WindowHandle(id)
    }
}

impl DisplayServer<MockHandle> for MockDisplayServer {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self::default())
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<MockHandle>> {
        std::mem::take(&mut self.events)
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<MockHandle>,
    ) -> Option<DisplayEvent<MockHandle>> {
        self.actions.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(std::future::pending())
    }

    fn flush(&self) {}

    fn grab_server(&mut self) -> Result<()> {
        if self.fail_grab {
            return Err(failure("grab"));
        }
        self.grab_depth += 1;
        self.grab_count += 1;
        Ok(())
    }

    fn ungrab_server(&mut self) -> Result<()> {
        self.grab_depth -= 1;
        Ok(())
    }

    fn window_attributes(&self, window: WindowHandle<MockHandle>) -> Result<WindowAttributes> {
        self.query(&self.attributes, window)
    }

    fn window_geometry(&self, window: WindowHandle<MockHandle>) -> Result<Xyhw> {
        if self.fail_queries {
            return Err(failure("query"));
        }
        self.geometries
            .get(&window.0)
            .copied()
            .ok_or_else(|| failure("geometry"))
    }

    fn window_type(&self, window: WindowHandle<MockHandle>) -> Result<WindowType> {
        self.query(&self.types, window)
    }

    fn transient_for(
        &self,
        window: WindowHandle<MockHandle>,
    ) -> Result<Option<WindowHandle<MockHandle>>> {
        if self.fail_queries {
            return Err(failure("query"));
        }
        Ok(self.transients.get(&window.0).copied().map(WindowHandle))
    }

    fn size_hints(&self, window: WindowHandle<MockHandle>) -> Result<SizeHints> {
        self.query(&self.hints, window)
    }

    fn window_title(&self, window: WindowHandle<MockHandle>) -> Result<Option<String>> {
        if self.fail_queries {
            return Err(failure("query"));
        }
        Ok(self.titles.get(&window.0).cloned())
    }

    fn create_decoration(&mut self, _geometry: &Xyhw) -> Result<WindowHandle<MockHandle>> {
        self.grab_depth_at_create.push(self.grab_depth);
        if self.fail_create_decoration {
            return Err(failure("create decoration"));
        }
        Ok(self.allocate())
    }

    fn create_bar(
        &mut self,
        _decoration: WindowHandle<MockHandle>,
        _width: i32,
        _height: i32,
    ) -> Result<WindowHandle<MockHandle>> {
        if self.fail_create_bar {
            return Err(failure("create bar"));
        }
        Ok(self.allocate())
    }

    fn reparent(
        &mut self,
        window: WindowHandle<MockHandle>,
        parent: WindowHandle<MockHandle>,
        x: i32,
        y: i32,
    ) -> Result<()> {
        if self.fail_reparent {
            return Err(failure("reparent"));
        }
        self.reparented.push((window.0, parent.0, x, y));
        Ok(())
    }

    fn destroy_window(&mut self, window: WindowHandle<MockHandle>) -> Result<()> {
        self.destroyed.push(window.0);
        Ok(())
    }
}
