//! Connection state.

use lib_utils::format::short_address;

/// Characters of the address kept on the wallet button.
pub const BUTTON_ADDRESS_LEN: usize = 6;

/// What a click on the wallet button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Connect,
    /// A request is in flight; the click is ignored.
    Wait,
    Disconnect,
}

/// Wallet connection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No address known
    #[default]
    Disconnected,
    /// Account request in flight
    Connecting,
    /// Connected with wallet address
    Connected { address: String },
}

impl ConnectionState {
    /// State for the first account of a provider account list.
    pub fn from_accounts(accounts: &[String]) -> Self {
        match accounts.first() {
            Some(address) => ConnectionState::Connected {
                address: address.clone(),
            },
            None => ConnectionState::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn button_action(&self) -> ButtonAction {
        match self {
            ConnectionState::Disconnected => ButtonAction::Connect,
            ConnectionState::Connecting => ButtonAction::Wait,
            ConnectionState::Connected { .. } => ButtonAction::Disconnect,
        }
    }

    /// Label for the header's wallet button.
    pub fn button_label(&self) -> String {
        match self {
            ConnectionState::Connected { address } => short_address(address, BUTTON_ADDRESS_LEN),
            ConnectionState::Connecting => "Connecting...".to_string(),
            ConnectionState::Disconnected => "Connect Wallet".to_string(),
        }
    }
}
