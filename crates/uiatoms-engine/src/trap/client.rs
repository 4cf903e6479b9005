/// Connection state of the local client, in engine order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ConnState {
    #[default]
    Uninitialized,
    /// Not talking to a server.
    Disconnected,
    Authorizing,
    Connecting,
    Challenging,
    Connected,
    Loading,
    Primed,
    Active,
    Cinematic,
}

/// Snapshot of the client connection as reported by the engine.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ClientState {
    pub conn_state: ConnState,
}

impl ClientState {
    #[inline]
    pub fn is_disconnected(&self) -> bool {
        self.conn_state == ConnState::Disconnected
    }
}

/// Client-state trap.
pub trait Client {
    fn client_state(&self) -> ClientState;
}
