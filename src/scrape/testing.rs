//! Scripted in-memory implementation of the driver capability traits, for
//! exercising the live-page flow without a browser.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::driver::{Browse, DriverError, ElementHandle};

struct FakeElementState {
    text: String,
    attributes: Mutex<HashMap<String, String>>,
    clicks: AtomicUsize,
    /// How many clicks it takes for `aria-expanded` to flip to `"true"`;
    /// `None` means clicking never flips it.
    clicks_until_expanded: Option<usize>,
    interactable: bool,
}

#[derive(Clone)]
pub struct FakeElement(Arc<FakeElementState>);

impl FakeElement {
    pub fn with_text(text: &str) -> Self {
        Self(Arc::new(FakeElementState {
            text: text.to_string(),
            attributes: Mutex::new(HashMap::new()),
            clicks: AtomicUsize::new(0),
            clicks_until_expanded: None,
            interactable: true,
        }))
    }

    /// An accordion control reporting `expanded` through `aria-expanded`.
    pub fn accordion(expanded: &str, clicks_until_expanded: Option<usize>) -> Self {
        let attributes = HashMap::from([("aria-expanded".to_string(), expanded.to_string())]);
        Self(Arc::new(FakeElementState {
            text: String::new(),
            attributes: Mutex::new(attributes),
            clicks: AtomicUsize::new(0),
            clicks_until_expanded,
            interactable: true,
        }))
    }

    pub fn not_interactable(self) -> Self {
        let state = FakeElementState {
            text: self.0.text.clone(),
            attributes: Mutex::new(self.0.attributes.lock().unwrap().clone()),
            clicks: AtomicUsize::new(self.0.clicks.load(Ordering::SeqCst)),
            clicks_until_expanded: self.0.clicks_until_expanded,
            interactable: false,
        };
        Self(Arc::new(state))
    }

    pub fn clicks(&self) -> usize {
        self.0.clicks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ElementHandle for FakeElement {
    async fn click(&self) -> Result<(), DriverError> {
        let clicks = self.0.clicks.fetch_add(1, Ordering::SeqCst) + 1;
        if self.0.clicks_until_expanded.is_some_and(|needed| clicks >= needed) {
            self.0
                .attributes
                .lock()
                .unwrap()
                .insert("aria-expanded".to_string(), "true".to_string());
        }
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
        Ok(self.0.attributes.lock().unwrap().get(name).cloned())
    }

    async fn text(&self) -> Result<String, DriverError> {
        Ok(self.0.text.clone())
    }

    async fn scroll_into_view(&self) -> Result<(), DriverError> {
        Ok(())
    }

    async fn can_interact(&self) -> bool {
        self.0.interactable
    }
}

/// One fixed page: a selector → elements table and a markup snapshot.
pub struct FakeBrowser {
    elements: Mutex<HashMap<String, Vec<FakeElement>>>,
    html: String,
    visited: Mutex<Vec<String>>,
}

impl FakeBrowser {
    pub fn new(html: &str) -> Self {
        Self {
            elements: Mutex::new(HashMap::new()),
            html: html.to_string(),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, css: &str, elements: Vec<FakeElement>) {
        self.elements.lock().unwrap().insert(css.to_string(), elements);
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl Browse for FakeBrowser {
    type Handle = FakeElement;

    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn query_all(&self, css: &str) -> Result<Vec<FakeElement>, DriverError> {
        Ok(self
            .elements
            .lock()
            .unwrap()
            .get(css)
            .cloned()
            .unwrap_or_default())
    }

    async fn page_html(&self) -> Result<String, DriverError> {
        Ok(self.html.clone())
    }
}
