//! Connected-account registry and selection state
//!
//! Accounts are seeded once per session and never edited. The registry also
//! tracks the multi-select state used to scope the engagement view and the
//! planner, with one guarantee: the selection never becomes empty.

use crate::types::{Account, Platform};

/// Static account list plus the current selection set
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    selected: Vec<String>,
}

impl AccountRegistry {
    /// Create a registry with the first two accounts pre-selected,
    /// mirroring the dashboard's initial state
    pub fn new(accounts: Vec<Account>) -> Self {
        let selected = accounts.iter().take(2).map(|a| a.id.clone()).collect();
        Self { accounts, selected }
    }

    /// Create a registry with an explicit initial selection
    pub fn with_selection(accounts: Vec<Account>, selected: Vec<String>) -> Self {
        Self { accounts, selected }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Currently selected account ids, in insertion order
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn selected_accounts(&self) -> Vec<&Account> {
        self.selected
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Flip membership of `id` in the selection set
    ///
    /// Toggling off the last remaining selection is a silent no-op, and ids
    /// that do not resolve to a seeded account are ignored. Returns whether
    /// the selection changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            if self.selected.len() > 1 {
                self.selected.remove(pos);
                return true;
            }
            return false;
        }
        if self.get(id).is_some() {
            self.selected.push(id.to_string());
            return true;
        }
        false
    }

    /// Distinct platforms of the referenced accounts, in first-encounter
    /// order. Falls back to Instagram when nothing resolves.
    pub fn platforms_for(&self, ids: &[String]) -> Vec<Platform> {
        let mut platforms = Vec::new();
        for id in ids {
            if let Some(account) = self.get(id) {
                if !platforms.contains(&account.platform) {
                    platforms.push(account.platform);
                }
            }
        }
        if platforms.is_empty() {
            platforms.push(Platform::Instagram);
        }
        platforms
    }
}
