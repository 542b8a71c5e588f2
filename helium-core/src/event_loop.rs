use crate::config::Config;
use crate::errors::Result;
use crate::models::Handle;
use crate::{DisplayServer, Manager};
use tokio::signal::unix::{signal, SignalKind};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Dispatch display events until SIGINT or SIGTERM arrives, then hand every client back to
    /// the root window.
    ///
    /// # Errors
    ///
    /// Fails when the signal handlers cannot be installed.
    pub async fn start_event_loop(mut self) -> Result<()> {
        let mut terminate = signal(SignalKind::terminate())?;
        let mut interrupt = signal(SignalKind::interrupt())?;

        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();
            // Replies read while handling the last batch may have queued events already.
            event_buffer.append(&mut self.display_server.get_next_events());

            if event_buffer.is_empty() {
                tokio::select! {
                    () = self.display_server.wait_readable() => continue,
                    _ = terminate.recv() => {
                        tracing::info!("Received SIGTERM, shutting down");
                        break;
                    }
                    _ = interrupt.recv() => {
                        tracing::info!("Received SIGINT, shutting down");
                        break;
                    }
                }
            }

            for event in event_buffer.drain(..) {
                tracing::trace!("Handling {:?}", event);
                self.display_event_handler(event);
            }
            self.execute_actions(&mut event_buffer);
        }

        self.state.release_all_frames();
        let mut leftover = vec![];
        self.execute_actions(&mut leftover);
        self.display_server.flush();
        Ok(())
    }

    /// Perform any actions requested by the handlers.
    fn execute_actions(&mut self, event_buffer: &mut Vec<crate::DisplayEvent<H>>) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("Executing {:?}", act);
            if let Some(event) = self.display_server.execute_action(act) {
                event_buffer.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::WindowHandle;
    use crate::{DisplayAction, DisplayEvent, Manager};

    #[test]
    fn queued_actions_reach_the_display_server_in_order() {
        let mut manager = Manager::new_test();
        manager
            .display_server
            .events
            .push(DisplayEvent::MapRequest(WindowHandle(1)));
        for event in manager.display_server.events.drain(..).collect::<Vec<_>>() {
            manager.display_event_handler(event);
        }
        let expected: Vec<_> = manager.state.actions.iter().cloned().collect();
        let mut buffer = vec![];
        manager.execute_actions(&mut buffer);
        assert!(buffer.is_empty());
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.display_server.actions, expected);
        assert!(matches!(
            expected.first(),
            Some(DisplayAction::SetWindowTag(WindowHandle(1), 1))
        ));
    }
}
