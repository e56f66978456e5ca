//! Browser navigation service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service for navigating the current page to another URL.
pub trait NavigationService {
    /// Navigates to `url`.
    fn navigate(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigation service for unsupported targets.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn navigate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory navigation recorder.
pub struct MemoryNavigationService {
    visited: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigationService {
    /// Returns every URL navigated to, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl NavigationService for MemoryNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}
