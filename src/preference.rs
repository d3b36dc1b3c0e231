use crate::storage::Storage;
use tracing::{debug, warn};

/// Clé historique, conservée pour relire les données existantes.
pub const SHIFT_SWAP_KEY: &str = "@MyApp:isShiftSwapped";

/// Confirmation oui/non demandée avant d'inverser les zmiany.
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

/// Accepte toujours (`--yes`, scripts).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

pub const SWAP_QUESTION: &str = "Zamienić kolory?";

/// Préférence « zmiany inversées », possédée par un seul conteneur d'état.
#[derive(Debug)]
pub struct ShiftPreference<S: Storage> {
    storage: S,
    inverted: bool,
}

impl<S: Storage> ShiftPreference<S> {
    /// Charge la préférence ; toute erreur de lecture retombe sur `false`.
    pub fn load(storage: S) -> Self {
        let inverted = match storage.get_bool(SHIFT_SWAP_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => false,
            Err(err) => {
                warn!(
                    error = %err,
                    key = SHIFT_SWAP_KEY,
                    "reading shift preference failed, using default"
                );
                false
            }
        };
        debug!(inverted, "shift preference loaded");
        Self { storage, inverted }
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Inverse en mémoire puis persiste. Un échec d'écriture est journalisé
    /// sans annuler la bascule : mémoire et disque peuvent alors diverger.
    pub fn toggle(&mut self) -> bool {
        self.inverted = !self.inverted;
        if let Err(err) = self.storage.set_bool(SHIFT_SWAP_KEY, self.inverted) {
            warn!(error = %err, key = SHIFT_SWAP_KEY, "storing shift preference failed");
        }
        debug!(inverted = self.inverted, "shift preference toggled");
        self.inverted
    }

    /// Demande confirmation puis bascule. `None` si l'utilisateur refuse.
    pub fn confirm_and_toggle(&mut self, prompt: &dyn Confirm) -> Option<bool> {
        if !prompt.confirm(SWAP_QUESTION) {
            debug!("shift swap cancelled");
            return None;
        }
        Some(self.toggle())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    struct Refuse;
    impl Confirm for Refuse {
        fn confirm(&self, _question: &str) -> bool {
            false
        }
    }

    struct Broken;
    impl Storage for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable(std::io::Error::other("down")))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable(std::io::Error::other("down")))
        }
    }

    #[test]
    fn defaults_to_false() {
        let pref = ShiftPreference::load(MemoryStorage::new());
        assert!(!pref.is_inverted());
    }

    #[test]
    fn toggle_persists_literal_string() {
        let store = MemoryStorage::new();
        let mut pref = ShiftPreference::load(&store);
        assert!(pref.toggle());
        assert_eq!(store.get(SHIFT_SWAP_KEY).unwrap().as_deref(), Some("true"));
        assert!(!pref.toggle());
        assert_eq!(store.get(SHIFT_SWAP_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn read_failure_uses_default() {
        let pref = ShiftPreference::load(Broken);
        assert!(!pref.is_inverted());
    }

    #[test]
    fn write_failure_keeps_in_memory_value() {
        let mut pref = ShiftPreference::load(Broken);
        assert!(pref.toggle());
        assert!(pref.is_inverted());
    }

    #[test]
    fn invalid_stored_value_uses_default() {
        let store = MemoryStorage::new();
        store.set(SHIFT_SWAP_KEY, "TRUE!").unwrap();
        assert!(!ShiftPreference::load(&store).is_inverted());
    }

    #[test]
    fn refusal_changes_nothing() {
        let store = MemoryStorage::new();
        let mut pref = ShiftPreference::load(&store);
        assert_eq!(pref.confirm_and_toggle(&Refuse), None);
        assert!(!pref.is_inverted());
        assert_eq!(store.get(SHIFT_SWAP_KEY).unwrap(), None);
        assert_eq!(pref.confirm_and_toggle(&AssumeYes), Some(true));
    }
}
