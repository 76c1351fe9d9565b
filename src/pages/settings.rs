// SPDX-License-Identifier: MIT
// Copyright 2026 IronPulse contributors

//! Notification preferences.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::notify::Notifier;
use crate::storage::{get_json, keys, set_json, KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            marketing: false,
        }
    }
}

pub struct SettingsPage {
    storage: Arc<dyn KeyValueStore>,
    notifier: Notifier,
    pub settings: NotificationSettings,
}

impl SettingsPage {
    /// Open with stored preferences, or the defaults.
    pub fn open(storage: Arc<dyn KeyValueStore>, notifier: Notifier) -> Self {
        let settings = get_json::<NotificationSettings>(storage.as_ref(), keys::SETTINGS)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unreadable settings");
                None
            })
            .unwrap_or_default();
        Self {
            storage,
            notifier,
            settings,
        }
    }

    pub fn save(&self) -> Result<(), StorageError> {
        set_json(self.storage.as_ref(), keys::SETTINGS, &self.settings)?;
        self.notifier.success(
            "Settings saved",
            "Your preferences have been updated successfully.",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_then_persist() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let notifier = Notifier::new();

        let mut page = SettingsPage::open(storage.clone(), notifier.clone());
        assert_eq!(page.settings, NotificationSettings::default());
        assert!(page.settings.email && !page.settings.marketing);

        page.settings.sms = true;
        page.save().unwrap();
        assert_eq!(notifier.last().unwrap().title, "Settings saved");

        let reopened = SettingsPage::open(storage, Notifier::new());
        assert!(reopened.settings.sms);
    }
}
