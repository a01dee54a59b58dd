//! Ticket table for loads completed by browser callbacks
//!
//! Each entry owns a handle (the element and its callbacks). Resolving a
//! ticket removes the entry, so the handle is dropped as soon as the
//! result has been handed out.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::task::Poll;

use crate::assets::AssetTicket;
use crate::error::AssetError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Ready { width: u32, height: u32 },
    Failed(String),
}

/// State written by a callback and read by `poll`
pub(crate) type SharedState = Rc<RefCell<LoadState>>;

struct Entry<H> {
    url: String,
    state: SharedState,
    _handle: H,
}

pub(crate) struct LoadTable<H> {
    entries: HashMap<u32, Entry<H>>,
    next_ticket: u32,
}

impl<H> LoadTable<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_ticket: 0,
        }
    }

    pub fn insert(&mut self, url: &str, state: SharedState, handle: H) -> AssetTicket {
        let ticket = AssetTicket(self.next_ticket);
        self.next_ticket += 1;
        self.entries.insert(
            ticket.0,
            Entry {
                url: url.to_string(),
                state,
                _handle: handle,
            },
        );
        ticket
    }

    /// Image size once loaded. A resolved ticket is forgotten.
    pub fn poll(&mut self, ticket: AssetTicket) -> Poll<Result<(u32, u32), AssetError>> {
        let Some(entry) = self.entries.get(&ticket.0) else {
            return Poll::Ready(Err(AssetError::NotFound(format!("ticket {}", ticket.0))));
        };

        let state = entry.state.borrow().clone();
        match state {
            LoadState::Loading => Poll::Pending,
            LoadState::Ready { width, height } => {
                self.entries.remove(&ticket.0);
                Poll::Ready(Ok((width, height)))
            }
            LoadState::Failed(reason) => {
                let url = entry.url.clone();
                self.entries.remove(&ticket.0);
                Poll::Ready(Err(AssetError::Failed { url, reason }))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading() -> SharedState {
        Rc::new(RefCell::new(LoadState::Loading))
    }

    #[test]
    fn test_ready_ticket_releases_handle() {
        let mut table = LoadTable::new();
        let handle = Rc::new(());
        let state = loading();
        let ticket = table.insert("ball.png", state.clone(), handle.clone());

        assert_eq!(table.poll(ticket), Poll::Pending);
        assert_eq!(Rc::strong_count(&handle), 2);

        *state.borrow_mut() = LoadState::Ready {
            width: 32,
            height: 16,
        };
        assert_eq!(table.poll(ticket), Poll::Ready(Ok((32, 16))));
        assert_eq!(Rc::strong_count(&handle), 1);
        assert_eq!(table.len(), 0);

        assert!(matches!(
            table.poll(ticket),
            Poll::Ready(Err(AssetError::NotFound(_)))
        ));
    }

    #[test]
    fn test_failed_ticket_reports_url_and_releases_handle() {
        let mut table = LoadTable::new();
        let handle = Rc::new(());
        let state = loading();
        let other = table.insert("brick.png", loading(), handle.clone());
        let ticket = table.insert("missing.png", state.clone(), handle.clone());
        assert_ne!(other, ticket);

        *state.borrow_mut() = LoadState::Failed("404".into());
        assert_eq!(
            table.poll(ticket),
            Poll::Ready(Err(AssetError::Failed {
                url: "missing.png".into(),
                reason: "404".into(),
            }))
        );
        // Only the still-loading entry keeps its handle
        assert_eq!(Rc::strong_count(&handle), 2);
        assert_eq!(table.len(), 1);
    }
}
