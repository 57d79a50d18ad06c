//! Testing utilities for ordcoll workspace
//!
//! Shared test helpers, fixtures, and tracing setup.

#![allow(missing_docs)]

use ordcoll_keyed::{CollectionSection, ElementKey, KeyedCollection, TrustedAssembly};
use ordcoll_names::NameCollection;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber at TRACE level and return what it logged
pub fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    {
        let _guard = subscriber.set_default();
        f();
    }

    let bytes = logs.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn assembly(name: &str, version: &str) -> TrustedAssembly {
    TrustedAssembly::new(name, version)
}

pub fn assembly_key(name: &str, version: &str) -> ElementKey {
    ElementKey::pair(name, version)
}

pub fn create_test_assemblies() -> KeyedCollection<TrustedAssembly> {
    KeyedCollection::from_elements([
        assembly("System.Web", "2.0.0.0"),
        assembly("System.Data", "2.0.0.0"),
        assembly("Contoso.Reports", "1.4"),
    ])
    .unwrap()
}

pub fn create_test_names() -> NameCollection {
    ["foo", "bar", "baz"].into_iter().collect()
}

/// Machine-level section: two framework assemblies
pub fn machine_section() -> CollectionSection<TrustedAssembly> {
    CollectionSection::new()
        .add(assembly("System.Web", "2.0.0.0"))
        .add(assembly("System.Data", "2.0.0.0"))
}

pub fn assembly_names(collection: &KeyedCollection<TrustedAssembly>) -> Vec<String> {
    collection.iter().map(|a| a.assembly_name.clone()).collect()
}
