use serde::Serialize;

use crate::resolver::ProductResult;

/// Transient per-scan state. One session at a time; the result is replaced,
/// never patched, and intake stays closed while `scanned` is set.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanSession {
    scanned: bool,
    barcode: Option<String>,
    result: ProductResult,
    epoch: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a decoded barcode. Returns a generation token while the
    /// session is idle; `None` once a scan is already active, so a burst of
    /// decode events triggers exactly one resolution.
    pub fn accept(&mut self, barcode: &str) -> Option<u64> {
        if self.scanned {
            return None;
        }
        self.scanned = true;
        self.barcode = Some(barcode.to_string());
        Some(self.epoch)
    }

    /// Installs a resolved result. A token minted before the last reset is
    /// stale and its result is dropped, so an in-flight lookup can never
    /// overwrite a session that was reset under it.
    pub fn install(&mut self, token: u64, result: ProductResult) -> bool {
        if token != self.epoch {
            return false;
        }
        self.result = result;
        true
    }

    /// Unconditionally clears back to the empty initial state and re-opens
    /// intake. The epoch moves forward so outstanding tokens go stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.scanned = false;
        self.barcode = None;
        self.result = ProductResult::default();
    }

    pub fn scanned(&self) -> bool {
        self.scanned
    }

    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    pub fn result(&self) -> &ProductResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_result() -> ProductResult {
        ProductResult {
            name: "Nutella".to_string(),
            ecoscore: "e".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn accept_gates_while_scanned() {
        let mut session = ScanSession::new();

        assert!(session.accept("111").is_some());
        assert!(session.accept("222").is_none());
        assert_eq!(session.barcode(), Some("111"));
    }

    #[test]
    fn install_applies_matching_token() {
        let mut session = ScanSession::new();
        let token = session.accept("111").unwrap();

        assert!(session.install(token, some_result()));
        assert_eq!(session.result().name, "Nutella");
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = ScanSession::new();
        let token = session.accept("111").unwrap();
        session.install(token, some_result());

        session.reset();

        assert!(!session.scanned());
        assert_eq!(session.barcode(), None);
        assert_eq!(*session.result(), ProductResult::default());
    }

    #[test]
    fn reset_is_unconditional() {
        let mut session = ScanSession::new();
        session.reset();

        assert!(!session.scanned());
        assert!(session.accept("111").is_some());
    }

    #[test]
    fn stale_token_is_discarded_after_reset() {
        let mut session = ScanSession::new();
        let token = session.accept("111").unwrap();

        session.reset();

        assert!(!session.install(token, some_result()));
        assert_eq!(*session.result(), ProductResult::default());
        assert!(!session.scanned());
    }
}
