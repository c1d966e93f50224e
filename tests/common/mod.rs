//! Fake collaborators for skill tests
//!
//! In-memory stand-ins for the hub and the geocoder: canned responses per
//! path, `None` for anything unstubbed, call counters for asserting which
//! collaborators a path actually consulted.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use wherebus::geocode::Geocoder;
use wherebus::hub::HubApi;

/// In-memory hub: path -> canned JSON; unstubbed paths simulate failure
#[derive(Default)]
pub struct FakeHub {
    gets: HashMap<String, Value>,
    posts: HashMap<String, Value>,
    pub get_calls: AtomicUsize,
    pub post_calls: AtomicUsize,
}

impl FakeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stub_get(mut self, path: &str, value: Value) -> Self {
        self.gets.insert(path.to_string(), value);
        self
    }

    pub fn stub_post(mut self, path: &str, value: Value) -> Self {
        self.posts.insert(path.to_string(), value);
        self
    }

    pub fn gets_made(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HubApi for FakeHub {
    async fn get(&self, path: &str) -> Option<Value> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.gets.get(path).cloned()
    }

    async fn post(&self, path: &str, _body: Value) -> Option<Value> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        self.posts.get(path).cloned()
    }
}

/// Geocoder returning one canned address (or nothing) for any coordinates
#[derive(Default)]
pub struct FakeGeocoder {
    address: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_address(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls_made(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn reverse(&self, _lat: f64, _lon: f64) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.address.clone()
    }
}
