// Connectivity monitor: display-only view of the platform network signal

use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Online,
    Offline,
}

impl std::fmt::Display for LinkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkState::Online => write!(f, "online"),
            LinkState::Offline => write!(f, "offline"),
        }
    }
}

/// Platform signal: the network became reachable or unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Up,
    Down,
}

/// Two-state machine fed by platform events. Trusts the signal verbatim,
/// false positives included; nothing in the task collection gates on it.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityMonitor {
    state: LinkState,
}

impl ConnectivityMonitor {
    /// Initial state comes from a one-shot query of the platform signal.
    pub fn new(online: bool) -> Self {
        let state = if online { LinkState::Online } else { LinkState::Offline };
        Self { state }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_online(&self) -> bool {
        self.state == LinkState::Online
    }

    pub fn apply(&mut self, event: ConnectivityEvent) {
        self.state = match event {
            ConnectivityEvent::Up => LinkState::Online,
            ConnectivityEvent::Down => LinkState::Offline,
        };
    }
}

/// Fan-out point for connectivity events. Platform glue calls `emit`;
/// observers hold a `Subscription` guard whose drop removes the listener,
/// so teardown happens on every exit path.
#[derive(Default)]
pub struct ConnectivityEvents {
    listeners: Mutex<ListenerTable>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    senders: HashMap<u64, Sender<ConnectivityEvent>>,
}

impl ConnectivityEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> (Subscription<'_>, Receiver<ConnectivityEvent>) {
        let (tx, rx) = channel();
        let mut table = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        let id = table.next_id;
        table.next_id += 1;
        table.senders.insert(id, tx);
        (Subscription { events: self, id }, rx)
    }

    pub fn emit(&self, event: ConnectivityEvent) {
        let mut table = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        // Drop listeners whose receiver is gone
        table.senders.retain(|_, tx| tx.send(event).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        let table = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        table.senders.len()
    }

    fn detach(&self, id: u64) {
        let mut table = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        table.senders.remove(&id);
    }
}

/// Scoped listener registration; dropping it unsubscribes.
pub struct Subscription<'a> {
    events: &'a ConnectivityEvents,
    id: u64,
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        self.events.detach(self.id);
    }
}

/// One-shot query of the platform's current connectivity signal.
///
/// On Linux this inspects `/sys/class/net/<iface>/operstate`, skipping
/// loopback: any interface reporting `up` counts as online. When the signal
/// cannot be read at all, reports online, matching the optimistic bias of
/// browser-style connectivity flags.
pub fn platform_online() -> bool {
    let Ok(entries) = fs::read_dir("/sys/class/net") else {
        return true;
    };

    let mut saw_interface = false;
    for entry in entries.flatten() {
        if entry.file_name() == "lo" {
            continue;
        }
        saw_interface = true;
        if let Ok(state) = fs::read_to_string(entry.path().join("operstate")) {
            if state.trim() == "up" {
                return true;
            }
        }
    }

    !saw_interface
}
