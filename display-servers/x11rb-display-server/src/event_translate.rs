use helium_core::{
    models::{Button, WindowHandle},
    DisplayEvent, PointerEvent,
};
use x11rb::protocol::{xproto, Event};

use crate::xwrap::XWrap;
use crate::{error::Result, X11rbWindowHandle};

mod client_message;
mod property_notify;

/// Translate events from x11rb to helium's `DisplayEvent`
pub(crate) fn translate(event: Event, xw: &mut XWrap) -> Option<DisplayEvent<X11rbWindowHandle>> {
    let res = match &event {
        Event::MapRequest(e) => Ok(Some(DisplayEvent::MapRequest(handle(e.window)))),
        Event::UnmapNotify(e) => Ok(Some(DisplayEvent::UnmapNotify(handle(e.window)))),
        Event::DestroyNotify(e) => Ok(Some(DisplayEvent::DestroyNotify(handle(e.window)))),
        Event::ClientMessage(e) => client_message::from_event(*e, xw),
        Event::PropertyNotify(e) => property_notify::from_event(*e, xw),
        Event::ConfigureRequest(e) => from_configure_request(*e, xw),
        Event::Expose(e) => from_expose(*e, xw),
        Event::MotionNotify(e) => Ok(Some(DisplayEvent::Motion(pointer(
            e.event, e.event_x, e.event_y, e.root_x, e.root_y,
        )))),
        Event::ButtonPress(e) => from_button_press(*e, xw),
        Event::ButtonRelease(e) => Ok(Some(DisplayEvent::ButtonRelease(
            pointer(e.event, e.event_x, e.event_y, e.root_x, e.root_y),
            Button::from(e.detail),
        ))),
        Event::Error(e) => {
            tracing::debug!("X11 error: {:?}", e);
            Ok(None)
        }
        _ => return None,
    };
    match res {
        Ok(display_event) => display_event,
        Err(e) => {
            tracing::error!(
                "An error occured when processing the event {:?}: {}",
                event,
                e
            );
            None
        }
    }
}

const fn handle(window: xproto::Window) -> WindowHandle<X11rbWindowHandle> {
    WindowHandle(X11rbWindowHandle(window))
}

fn pointer(
    window: xproto::Window,
    event_x: i16,
    event_y: i16,
    root_x: i16,
    root_y: i16,
) -> PointerEvent<X11rbWindowHandle> {
    PointerEvent {
        window: handle(window),
        event_x: event_x.into(),
        event_y: event_y.into(),
        root_x: root_x.into(),
        root_y: root_y.into(),
    }
}

fn from_configure_request(
    event: xproto::ConfigureRequestEvent,
    xw: &mut XWrap,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    // Windows helium does not frame get what they ask for.
    if !xw.managed_windows.contains(&event.window) {
        let window_changes = xproto::ConfigureWindowAux::from_configure_request(&event);
        xw.set_window_config(event.window, &window_changes)?;
        return Ok(None);
    }
    // Framed clients are placed by their frame. Remind them where they are.
    if let Some(rect) = xw.client_geometry.get(&event.window).copied() {
        xw.configure_window(event.window, rect)?;
    }
    Ok(None)
}

fn from_expose(
    event: xproto::ExposeEvent,
    xw: &mut XWrap,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    // Only the last of a series of exposes needs a redraw.
    if event.count == 0 {
        xw.redraw_bar(event.window)?;
    }
    Ok(None)
}

fn from_button_press(
    event: xproto::ButtonPressEvent,
    xw: &mut XWrap,
) -> Result<Option<DisplayEvent<X11rbWindowHandle>>> {
    // A press on a client is frozen by its grab until it is replayed.
    if xw.managed_windows.contains(&event.event) {
        xw.replay_click()?;
    }
    Ok(Some(DisplayEvent::ButtonPress(
        pointer(
            event.event,
            event.event_x,
            event.event_y,
            event.root_x,
            event.root_y,
        ),
        Button::from(event.detail),
    )))
}

/// Drops the motion events a later motion in the same batch supersedes, and the unmaps of
/// windows that are destroyed in the same batch.
pub(crate) fn compress(events: &mut Vec<DisplayEvent<X11rbWindowHandle>>) {
    let destroyed: Vec<WindowHandle<X11rbWindowHandle>> = events
        .iter()
        .filter_map(|event| match event {
            DisplayEvent::DestroyNotify(h) => Some(*h),
            _ => None,
        })
        .collect();
    events.retain(|event| !matches!(event, DisplayEvent::UnmapNotify(h) if destroyed.contains(h)));

    let mut compressed = Vec::with_capacity(events.len());
    for event in events.drain(..) {
        if matches!(event, DisplayEvent::Motion(_))
            && matches!(compressed.last(), Some(DisplayEvent::Motion(_)))
        {
            compressed.pop();
        }
        compressed.push(event);
    }
    *events = compressed;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(x: i32) -> DisplayEvent<X11rbWindowHandle> {
        DisplayEvent::Motion(PointerEvent {
            window: handle(1),
            event_x: x,
            event_y: 0,
            root_x: x,
            root_y: 0,
        })
    }

    #[test]
    fn consecutive_motions_keep_the_latest() {
        let release = DisplayEvent::ButtonRelease(
            PointerEvent {
                window: handle(1),
                event_x: 3,
                event_y: 0,
                root_x: 3,
                root_y: 0,
            },
            Button::Left,
        );
        let mut events = vec![motion(1), motion(2), motion(3), release.clone(), motion(4)];
        compress(&mut events);
        assert_eq!(events, vec![motion(3), release, motion(4)]);
    }

    #[test]
    fn unmaps_of_destroyed_windows_are_dropped() {
        let mut events = vec![
            DisplayEvent::UnmapNotify(handle(5)),
            DisplayEvent::UnmapNotify(handle(6)),
            DisplayEvent::DestroyNotify(handle(5)),
        ];
        compress(&mut events);
        assert_eq!(
            events,
            vec![
                DisplayEvent::UnmapNotify(handle(6)),
                DisplayEvent::DestroyNotify(handle(5)),
            ]
        );
    }
}
