//! Mock contacts provider for testing
//!
//! Simulates grants, denials, fetch failures and slow stores without a real
//! contact file.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{ProviderError, Result};
use crate::providers::ContactsProvider;
use crate::types::{ContactRecord, PermissionStatus};

/// Configuration for mock provider behavior
#[derive(Debug, Clone)]
pub struct MockProviderConfig {
    pub granted: bool,

    /// Records returned by a successful fetch
    pub records: Vec<ContactRecord>,

    /// When set, fetch fails with this message
    pub fetch_error: Option<String>,

    /// Delay before each step completes
    pub delay: Duration,

    pub permission_call_count: Arc<Mutex<usize>>,
    pub fetch_call_count: Arc<Mutex<usize>>,
}

impl Default for MockProviderConfig {
    fn default() -> Self {
        Self {
            granted: true,
            records: Vec::new(),
            fetch_error: None,
            delay: Duration::from_millis(0),
            permission_call_count: Arc::new(Mutex::new(0)),
            fetch_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

pub struct MockProvider {
    config: MockProviderConfig,
}

impl MockProvider {
    pub fn new(config: MockProviderConfig) -> Self {
        Self { config }
    }

    /// Grants access and returns the given records
    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        Self::new(MockProviderConfig {
            records,
            ..Default::default()
        })
    }

    /// Refuses access
    pub fn denied() -> Self {
        Self::new(MockProviderConfig {
            granted: false,
            ..Default::default()
        })
    }

    /// Grants access but fails the fetch
    pub fn fetch_failure(error: &str) -> Self {
        Self::new(MockProviderConfig {
            fetch_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Grants access and returns records after a delay on each step
    pub fn with_delay(records: Vec<ContactRecord>, delay: Duration) -> Self {
        Self::new(MockProviderConfig {
            records,
            delay,
            ..Default::default()
        })
    }

    pub fn permission_call_count(&self) -> usize {
        *self.config.permission_call_count.lock().unwrap()
    }

    pub fn fetch_call_count(&self) -> usize {
        *self.config.fetch_call_count.lock().unwrap()
    }

    async fn simulate_latency(&self) {
        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }
    }
}

#[async_trait]
impl ContactsProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        *self.config.permission_call_count.lock().unwrap() += 1;
        self.simulate_latency().await;
        Ok(PermissionStatus::from_granted(self.config.granted))
    }

    async fn fetch_all(&self) -> Result<Vec<ContactRecord>> {
        *self.config.fetch_call_count.lock().unwrap() += 1;
        self.simulate_latency().await;

        if !self.config.granted {
            return Err(ProviderError::PermissionDenied("contacts".to_string()).into());
        }

        match &self.config.fetch_error {
            Some(error) => Err(ProviderError::Fetch(error.clone()).into()),
            None => Ok(self.config.records.clone()),
        }
    }
}
