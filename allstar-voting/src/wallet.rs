use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque public key of a connected wallet. Only its presence matters here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WalletKey(String);

impl From<String> for WalletKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for WalletKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read side of the wallet connection, owned by whoever manages the wallet.
pub trait WalletState {
    fn public_key(&self) -> Option<WalletKey>;

    fn is_connected(&self) -> bool {
        self.public_key().is_some()
    }
}

impl WalletState for Option<WalletKey> {
    fn public_key(&self) -> Option<WalletKey> {
        self.clone()
    }
}

/// Shared wallet signal. Clones observe the same connection, so the wallet
/// collaborator can keep one handle and give another to the board.
#[derive(Clone, Debug, Default)]
pub struct WalletSignal {
    key: Rc<RefCell<Option<WalletKey>>>,
}

impl WalletSignal {
    pub fn connected(key: impl Into<WalletKey>) -> Self {
        let signal = Self::default();
        signal.connect(key);
        signal
    }

    pub fn connect(&self, key: impl Into<WalletKey>) {
        *self.key.borrow_mut() = Some(key.into());
    }

    pub fn disconnect(&self) {
        self.key.borrow_mut().take();
    }
}

impl WalletState for WalletSignal {
    fn public_key(&self) -> Option<WalletKey> {
        self.key.borrow().clone()
    }
}
