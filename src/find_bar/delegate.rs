use std::sync::mpsc::Sender;

/// Receiver of the bar's user-originated events.
///
/// The owner of the actual page search implements this and is handed to the
/// bar at construction.
pub trait FindInPageDelegate {
    fn did_text_change(&mut self, text: &str);
    fn did_find_previous(&mut self, text: &str);
    fn did_find_next(&mut self, text: &str);
    fn did_press_close(&mut self);
}

impl<D: FindInPageDelegate + ?Sized> FindInPageDelegate for &mut D {
    fn did_text_change(&mut self, text: &str) {
        (**self).did_text_change(text)
    }

    fn did_find_previous(&mut self, text: &str) {
        (**self).did_find_previous(text)
    }

    fn did_find_next(&mut self, text: &str) {
        (**self).did_find_next(text)
    }

    fn did_press_close(&mut self) {
        (**self).did_press_close()
    }
}

/// One delegate callback as a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindEvent {
    QueryChanged(String),
    FindPrevious(String),
    FindNext(String),
    CloseRequested,
}

impl FindEvent {
    /// Forwards this event to `delegate`
    pub fn dispatch(self, delegate: &mut impl FindInPageDelegate) {
        match self {
            FindEvent::QueryChanged(text) => delegate.did_text_change(&text),
            FindEvent::FindPrevious(text) => delegate.did_find_previous(&text),
            FindEvent::FindNext(text) => delegate.did_find_next(&text),
            FindEvent::CloseRequested => delegate.did_press_close(),
        }
    }
}

/// Records events in order
impl FindInPageDelegate for Vec<FindEvent> {
    fn did_text_change(&mut self, text: &str) {
        self.push(FindEvent::QueryChanged(text.to_string()));
    }

    fn did_find_previous(&mut self, text: &str) {
        self.push(FindEvent::FindPrevious(text.to_string()));
    }

    fn did_find_next(&mut self, text: &str) {
        self.push(FindEvent::FindNext(text.to_string()));
    }

    fn did_press_close(&mut self) {
        self.push(FindEvent::CloseRequested);
    }
}

/// Event channel: the owner subscribes by holding the receiver
impl FindInPageDelegate for Sender<FindEvent> {
    fn did_text_change(&mut self, text: &str) {
        send_event(self, FindEvent::QueryChanged(text.to_string()));
    }

    fn did_find_previous(&mut self, text: &str) {
        send_event(self, FindEvent::FindPrevious(text.to_string()));
    }

    fn did_find_next(&mut self, text: &str) {
        send_event(self, FindEvent::FindNext(text.to_string()));
    }

    fn did_press_close(&mut self) {
        send_event(self, FindEvent::CloseRequested);
    }
}

fn send_event(tx: &Sender<FindEvent>, event: FindEvent) {
    if let Err(e) = tx.send(event) {
        log::debug!("Dropped find event, receiver gone: {:?}", e.0);
    }
}

#[cfg(test)]
#[path = "delegate_tests.rs"]
mod delegate_tests;
