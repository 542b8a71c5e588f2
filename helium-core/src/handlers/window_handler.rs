#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::display_servers::{DisplayServer, ServerGrab};
use crate::models::{frame_geometry, Handle, SizeHints, Xyhw, XyhwBuilder};
use crate::state::State;

/// What a map request turned into.
enum Placement<H: Handle> {
    /// Override-redirect: shown as is and raised.
    Unmanaged,
    /// A dock, toolbar or desktop: shown as is.
    Undecorated,
    Framed(NewFrame<H>),
    Failed,
}

struct NewFrame<H: Handle> {
    decoration: WindowHandle<H>,
    bar: Option<WindowHandle<H>>,
    geometry: Xyhw,
    title: Option<String>,
    transient_for: Option<WindowHandle<H>>,
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Decide how to show a new top-level window, wrapping it in a frame when it is a normal
    /// client.
    pub fn map_request_handler(&mut self, handle: WindowHandle<H>) -> bool {
        // Don't add the window if the manager already knows about it.
        if self.state.lookup(&handle).is_some() {
            return false;
        }
        let fallback = (self.state.default_width, self.state.default_height);
        match place_window(
            &mut self.display_server,
            handle,
            self.state.bar_height,
            fallback,
        ) {
            Placement::Unmanaged => {
                tracing::debug!("Mapping override-redirect window {:?}", handle);
                self.state.actions.push_back(DisplayAction::MapWindow(handle));
                self.state.actions.push_back(DisplayAction::MoveToTop(handle));
                true
            }
            Placement::Undecorated => {
                self.state.actions.push_back(DisplayAction::MapWindow(handle));
                true
            }
            Placement::Framed(new) => {
                self.state.manage_frame(handle, new);
                true
            }
            Placement::Failed => false,
        }
    }

    /// The client of a frame is gone, or withdrew itself when `client_alive` is set. Tears the
    /// frame down in one go.
    pub fn window_destroyed_handler(
        &mut self,
        handle: &WindowHandle<H>,
        client_alive: bool,
    ) -> bool {
        // Our own decorations and bars are unmapped on tag switches. Only the client counts.
        let Some(id) = self.state.frame_by_client(handle) else {
            return false;
        };
        self.state.unmap_frame(id);
        if self.state.mode.frame() == Some(id) {
            self.state.mode = Mode::Normal;
            self.state.actions.push_back(DisplayAction::NormalMode);
        }
        let Some(frame) = self.state.remove_frame(id) else {
            return false;
        };
        for other in self.state.frames.values_mut() {
            if other.transient_for == Some(id) {
                other.transient_for = None;
            }
        }
        tracing::debug!("Frame {:?} of {:?} removed", id, handle);
        let (x, y, _, _) = frame.client_geometry();
        let restore = client_alive.then(|| (frame.geometry.x() + x, frame.geometry.y() + y));
        self.state.actions.push_back(DisplayAction::DestroyFrame {
            decoration: frame.decoration,
            client: frame.client,
            restore,
        });
        true
    }
}

/// Runs the queries and the create and reparent sequence under a server grab. The grab is
/// released when this returns.
fn place_window<H: Handle, SERVER: DisplayServer<H>>(
    display_server: &mut SERVER,
    client: WindowHandle<H>,
    bar_height: i32,
    fallback: (i32, i32),
) -> Placement<H> {
    let mut server = match ServerGrab::<H, SERVER>::new(display_server) {
        Ok(grab) => grab,
        Err(err) => {
            tracing::error!("Unable to grab the server for {:?}: {}", client, err);
            return Placement::Failed;
        }
    };

    match server.window_attributes(client) {
        Ok(attrs) if attrs.override_redirect => return Placement::Unmanaged,
        Ok(_) => {}
        Err(err) => tracing::warn!("Unable to read attributes of {:?}: {}", client, err),
    }
    match server.window_type(client) {
        Ok(r#type) if r#type.is_undecorated() => return Placement::Undecorated,
        Ok(_) => {}
        Err(err) => tracing::warn!("Unable to read the type of {:?}: {}", client, err),
    }

    let reported = server.window_geometry(client).unwrap_or_else(|err| {
        tracing::warn!("Unable to read geometry of {:?}: {}", client, err);
        XyhwBuilder {
            w: fallback.0,
            h: fallback.1,
            ..XyhwBuilder::default()
        }
        .into()
    });
    let hints = server.size_hints(client).unwrap_or_else(|err| {
        tracing::warn!("Unable to read size hints of {:?}: {}", client, err);
        SizeHints::default()
    });
    let title = server.window_title(client).unwrap_or_else(|err| {
        tracing::warn!("Unable to read the title of {:?}: {}", client, err);
        None
    });
    let transient_for = server.transient_for(client).unwrap_or_else(|err| {
        tracing::warn!("Unable to read WM_TRANSIENT_FOR of {:?}: {}", client, err);
        None
    });

    let geometry = frame_geometry(&reported, &hints, bar_height);
    let decoration = match server.create_decoration(&geometry) {
        Ok(decoration) => decoration,
        Err(err) => {
            tracing::error!("Unable to create a decoration for {:?}: {}", client, err);
            return Placement::Failed;
        }
    };
    if let Err(err) = server.reparent(client, decoration, 0, bar_height) {
        tracing::error!("Unable to reparent {:?}: {}", client, err);
        if let Err(err) = server.destroy_window(decoration) {
            tracing::error!("Unable to destroy decoration {:?}: {}", decoration, err);
        }
        return Placement::Failed;
    }
    let bar = if bar_height > 0 {
        server
            .create_bar(decoration, geometry.w(), bar_height)
            .map_err(|err| tracing::warn!("Unable to create a bar for {:?}: {}", client, err))
            .ok()
    } else {
        None
    };

    Placement::Framed(NewFrame {
        decoration,
        bar,
        geometry,
        title,
        transient_for,
    })
}

impl<H: Handle> State<H> {
    fn manage_frame(&mut self, client: WindowHandle<H>, new: NewFrame<H>) {
        let id = self.allocate_frame_id();
        let mut frame = Frame::new(id, new.decoration, client, new.geometry, self.bar_height);
        frame.bar = new.bar;
        frame.title = new.title;
        frame.transient_for = new
            .transient_for
            .and_then(|parent| self.frame_by_client(&parent));
        // Transients follow their parent around.
        frame.tag = frame
            .transient_for
            .and_then(|parent| self.frame(parent))
            .map_or(self.tags.current(), |parent| parent.tag);
        let tag = frame.tag;
        tracing::debug!("Managing {:?} as frame {:?} on tag {}", client, id, tag);

        self.insert_frame(frame);
        self.actions
            .push_back(DisplayAction::SetWindowTag(client, tag));
        self.configure_frame(id);
        self.apply_visibility(id, true);
        if self.focus_new_windows {
            self.focus_frame(id);
        }
    }

    /// Politely ask the client of a frame to close. The frame stays until the client is gone.
    pub fn close_frame(&mut self, id: FrameId) -> bool {
        let Some(frame) = self.frames.get(&id) else {
            return false;
        };
        self.actions
            .push_back(DisplayAction::KillWindow(frame.client));
        true
    }

    pub fn title_change_handler(&mut self, handle: &WindowHandle<H>, title: Option<String>) -> bool {
        let Some(id) = self.frame_by_client(handle) else {
            return false;
        };
        if let Some(frame) = self.frames.get_mut(&id) {
            frame.title = title;
        }
        self.render_bar(id);
        true
    }

    /// Hand every client back to the root at its current position and drop all frames.
    pub fn release_all_frames(&mut self) {
        let ids: Vec<FrameId> = self.frames.keys().copied().collect();
        for id in ids {
            let Some(frame) = self.remove_frame(id) else {
                continue;
            };
            let (x, y, _, _) = frame.client_geometry();
            self.actions.push_back(DisplayAction::DestroyFrame {
                decoration: frame.decoration,
                client: frame.client,
                restore: Some((frame.geometry.x() + x, frame.geometry.y() + y)),
            });
        }
        self.focus_queue = crate::models::FocusQueue::default();
        self.mode = Mode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DragKind, FrameState, MockHandle, WindowAttributes, WindowRole, WindowType,
    };
    use crate::Manager;

    fn reported(x: i32, y: i32, w: i32, h: i32) -> Xyhw {
        XyhwBuilder {
            x,
            y,
            w,
            h,
            ..XyhwBuilder::default()
        }
        .into()
    }

    fn drain(
        manager: &mut Manager<
            MockHandle,
            crate::config::TestConfig,
            crate::display_servers::MockDisplayServer,
        >,
    ) -> Vec<DisplayAction<MockHandle>> {
        manager.state.actions.drain(..).collect()
    }

    #[test]
    fn new_client_is_framed_below_a_bar() {
        let mut manager = Manager::new_test();
        manager
            .display_server
            .geometries
            .insert(1, reported(-5, 10, 200, 100));
        assert!(manager.map_request_handler(WindowHandle(1)));

        let id = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        let frame = manager.state.frame(id).unwrap();
        let g = frame.geometry;
        assert_eq!((g.x(), g.y(), g.w(), g.h()), (0, 10, 200, 120));
        assert_eq!(frame.client_geometry(), (0, 20, 200, 100));
        assert_eq!(frame.state(), FrameState::Focused);
        assert!(!frame.hidden);
        assert_eq!(manager.display_server.reparented, vec![(1, 1000, 0, 20)]);
        assert_eq!(frame.bar, Some(WindowHandle(1001)));
        assert_eq!(
            manager.state.lookup(&WindowHandle(1000)),
            Some((id, WindowRole::Decoration))
        );
        assert_eq!(
            manager.state.lookup(&WindowHandle(1001)),
            Some((id, WindowRole::Bar))
        );
        assert_eq!(manager.display_server.grab_depth_at_create, vec![1]);
        assert_eq!(manager.display_server.grab_depth, 0);
        manager.state.assert_focus_invariants();
    }

    #[test]
    fn override_redirect_windows_are_left_alone() {
        let mut manager = Manager::new_test();
        manager.display_server.attributes.insert(
            7,
            WindowAttributes {
                override_redirect: true,
            },
        );
        assert!(manager.map_request_handler(WindowHandle(7)));
        assert_eq!(
            drain(&mut manager),
            vec![
                DisplayAction::MapWindow(WindowHandle(7)),
                DisplayAction::MoveToTop(WindowHandle(7)),
            ]
        );
        assert!(manager.state.frames.is_empty());
        assert!(manager.state.registry.is_empty());
        assert!(manager.state.focus_queue.is_empty());
        assert!(manager.display_server.created.is_empty());
        assert_eq!(manager.display_server.grab_depth, 0);
    }

    #[test]
    fn docks_are_mapped_without_a_frame() {
        let mut manager = Manager::new_test();
        manager.display_server.types.insert(3, WindowType::Dock);
        assert!(manager.map_request_handler(WindowHandle(3)));
        assert_eq!(
            drain(&mut manager),
            vec![DisplayAction::MapWindow(WindowHandle(3))]
        );
        assert!(manager.state.frames.is_empty());
        assert_eq!(manager.display_server.grab_depth, 0);
    }

    #[test]
    fn failed_queries_fall_back_to_a_normal_frame() {
        let mut manager = Manager::new_test();
        manager.display_server.fail_queries = true;
        assert!(manager.map_request_handler(WindowHandle(4)));
        let id = manager.state.frame_by_client(&WindowHandle(4)).unwrap();
        let g = manager.state.frame(id).unwrap().geometry;
        assert_eq!((g.x(), g.y(), g.w(), g.h()), (0, 0, 640, 500));
        assert_eq!(manager.display_server.grab_depth, 0);
    }

    #[test]
    fn failed_reparent_destroys_the_decoration_and_releases_the_grab() {
        let mut manager = Manager::new_test();
        manager.display_server.fail_reparent = true;
        assert!(!manager.map_request_handler(WindowHandle(5)));
        assert_eq!(manager.display_server.destroyed, vec![1000]);
        assert!(manager.state.frames.is_empty());
        assert_eq!(manager.display_server.grab_depth, 0);
    }

    #[test]
    fn failed_decoration_leaves_the_request_unresolved() {
        let mut manager = Manager::new_test();
        manager.display_server.fail_create_decoration = true;
        assert!(!manager.map_request_handler(WindowHandle(5)));
        assert!(manager.state.registry.is_empty());
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.display_server.grab_depth, 0);
    }

    #[test]
    fn failed_grab_creates_nothing() {
        let mut manager = Manager::new_test();
        manager.display_server.fail_grab = true;
        assert!(!manager.map_request_handler(WindowHandle(5)));
        assert!(manager.display_server.created.is_empty());
    }

    #[test]
    fn missing_bar_still_frames_the_client() {
        let mut manager = Manager::new_test();
        manager.display_server.fail_create_bar = true;
        assert!(manager.map_request_handler(WindowHandle(6)));
        let id = manager.state.frame_by_client(&WindowHandle(6)).unwrap();
        assert_eq!(manager.state.frame(id).unwrap().bar, None);
    }

    #[test]
    fn repeated_map_requests_are_ignored() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        assert!(!manager.map_request_handler(WindowHandle(1)));
        assert_eq!(manager.state.frames.len(), 1);
        assert_eq!(manager.display_server.grab_count, 1);
    }

    #[test]
    fn transients_inherit_the_parent_tag() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        let parent = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        manager.state.set_frame_tag(parent, 2);
        manager.display_server.transients.insert(2, 1);
        manager.map_request_handler(WindowHandle(2));
        let child = manager.state.frame_by_client(&WindowHandle(2)).unwrap();
        let child = manager.state.frame(child).unwrap();
        assert_eq!(child.tag, 2);
        assert_eq!(child.transient_for, Some(parent));
        assert!(child.hidden);
        manager.state.assert_focus_invariants();
    }

    #[test]
    fn destroying_a_client_removes_its_frame_everywhere() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        manager.map_request_handler(WindowHandle(2));
        let first = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        drain(&mut manager);

        assert!(manager.window_destroyed_handler(&WindowHandle(2), false));
        assert_eq!(manager.state.frames.len(), 1);
        assert_eq!(manager.state.registry.len(), 3);
        assert_eq!(manager.state.focused_frame(), Some(first));
        assert_eq!(manager.state.focus_queue.len(), 1);
        assert!(drain(&mut manager).contains(&DisplayAction::DestroyFrame {
            decoration: WindowHandle(1002),
            client: WindowHandle(2),
            restore: None,
        }));
        manager.state.assert_focus_invariants();
    }

    #[test]
    fn withdrawn_clients_are_handed_back_to_the_root() {
        let mut manager = Manager::new_test();
        manager
            .display_server
            .geometries
            .insert(1, reported(30, 40, 200, 100));
        manager.map_request_handler(WindowHandle(1));
        drain(&mut manager);
        assert!(manager.window_destroyed_handler(&WindowHandle(1), true));
        assert_eq!(
            drain(&mut manager).last(),
            Some(&DisplayAction::DestroyFrame {
                decoration: WindowHandle(1000),
                client: WindowHandle(1),
                restore: Some((30, 60)),
            })
        );
    }

    #[test]
    fn unmap_of_a_decoration_keeps_the_frame() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        assert!(!manager.window_destroyed_handler(&WindowHandle(1000), true));
        assert!(!manager.window_destroyed_handler(&WindowHandle(1001), true));
        assert_eq!(manager.state.frames.len(), 1);
    }

    #[test]
    fn late_motion_after_the_dragged_client_vanished_is_ignored() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        let id = manager.state.frame_by_client(&WindowHandle(1)).unwrap();
        assert!(manager
            .state
            .drag_begin(id, DragKind::Move, (10, 10), (5, 5)));
        manager.window_destroyed_handler(&WindowHandle(1), false);
        assert_eq!(manager.state.mode, Mode::Normal);
        assert!(drain(&mut manager).contains(&DisplayAction::NormalMode));
        assert!(!manager.state.drag_step((50, 50)));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn title_changes_reach_the_bar() {
        let mut manager = Manager::new_test();
        manager.display_server.titles.insert(1, "xterm".to_owned());
        manager.map_request_handler(WindowHandle(1));
        drain(&mut manager);
        assert!(manager
            .state
            .title_change_handler(&WindowHandle(1), Some("vim".to_owned())));
        assert_eq!(
            drain(&mut manager),
            vec![DisplayAction::RenderBar {
                bar: WindowHandle(1001),
                focused: true,
                title: Some("vim".to_owned()),
                width: 640,
            }]
        );
    }

    #[test]
    fn releasing_all_frames_restores_every_client() {
        let mut manager = Manager::new_test();
        manager.map_request_handler(WindowHandle(1));
        manager.map_request_handler(WindowHandle(2));
        drain(&mut manager);
        manager.state.release_all_frames();
        let actions = drain(&mut manager);
        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| matches!(
            a,
            DisplayAction::DestroyFrame {
                restore: Some(_),
                ..
            }
        )));
        assert!(manager.state.frames.is_empty());
        assert!(manager.state.registry.is_empty());
    }
}
