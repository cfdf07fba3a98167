//! Process-wide property source.
//!
//! Responsibilities:
//! - Hold "the current instance" for call sites that cannot take a
//!   `PropertySource` parameter.
//! - Let tests preempt the current instance with a provider function.
//!
//! Does NOT handle:
//! - Reloading: installing a new instance replaces the old one wholesale.
//!
//! Invariants:
//! - A provider, when set, takes priority over any installed instance.
//! - Without a provider or installed instance, `current()` builds and
//!   installs an unrestricted instance from the environment exactly once.
//! - Both slots sit behind `RwLock`s, so the accessors are safe to call from
//!   any thread; a poisoned lock is recovered instead of panicking.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::parrot::{Parrot, PropertySource};

/// Shared handle to whatever currently answers property lookups.
pub type SharedSource = Arc<dyn PropertySource + Send + Sync>;

type Provider = Arc<dyn Fn() -> SharedSource + Send + Sync>;

static CURRENT: RwLock<Option<Arc<Parrot>>> = RwLock::new(None);
static PROVIDER: RwLock<Option<Provider>> = RwLock::new(None);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Load from the environment with the given allow-list and install the
/// result as the current instance.
pub fn install<I, S>(allowed_files: I) -> Arc<Parrot>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    install_instance(Parrot::load(allowed_files))
}

/// Install an already-built instance as current.
pub fn install_instance(parrot: Parrot) -> Arc<Parrot> {
    let parrot = Arc::new(parrot);
    *write(&CURRENT) = Some(Arc::clone(&parrot));
    parrot
}

/// The current property source.
///
/// Resolution order: provider, installed instance, then a lazily loaded
/// unrestricted instance which is installed for subsequent calls.
pub fn current() -> SharedSource {
    let provider = read(&PROVIDER).clone();
    if let Some(provider) = provider {
        return provider();
    }

    if let Some(parrot) = read(&CURRENT).clone() {
        return parrot;
    }

    let mut slot = write(&CURRENT);
    let parrot = slot.get_or_insert_with(|| {
        tracing::debug!("No property source installed; loading defaults");
        Arc::new(Parrot::load_all())
    });
    Arc::clone(parrot) as SharedSource
}

/// Preempt `current()` with a provider function.
pub fn set_provider<F>(provider: F)
where
    F: Fn() -> SharedSource + Send + Sync + 'static,
{
    *write(&PROVIDER) = Some(Arc::new(provider));
}

/// Preempt `current()` with a fixed source.
pub fn set_override(source: SharedSource) {
    set_provider(move || Arc::clone(&source));
}

/// Remove any provider; `current()` falls back to the installed instance.
pub fn clear_provider() {
    *write(&PROVIDER) = None;
}

/// Clear both the provider and the installed instance.
pub fn reset() {
    clear_provider();
    *write(&CURRENT) = None;
}
