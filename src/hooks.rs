//! View Hooks
//!
//! Reactive wrappers that drive the core state machines from Leptos effects
//! and event handlers.

use std::fmt::Debug;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use pinboard_core::{
    ApiResult, CollectionFetcher, FormSubmitter, OptimisticToggle, Phase, ToggleRequest,
};

use crate::context::{use_services, Client};

/// Load a remote list whenever `key` changes.
///
/// One request per change; a `None` key loads nothing. The fetcher owns the
/// list, so each view gets its own copy.
pub fn use_remote_collection<K, T, F, Fut>(
    name: &'static str,
    key: impl Fn() -> Option<K> + 'static,
    fetch: F,
) -> RwSignal<CollectionFetcher<K, T>>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(Client, K) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let services = use_services();
    let fetcher = RwSignal::new(CollectionFetcher::new(name, services.config.fetch));

    Effect::new(move |_| {
        let next = key();
        let Some((ticket, key)) = fetcher.try_update(|f| f.observe(next)).flatten() else {
            return;
        };
        let request = fetch(services.client.clone(), key);
        spawn_local(async move {
            let result = request.await;
            // The view may have been unmounted meanwhile
            fetcher.try_update(|f| f.resolve(ticket, result));
        });
    });

    fetcher
}

/// Handle to an optimistic boolean (like, follow)
#[derive(Clone, Copy)]
pub struct ToggleHandle {
    state: RwSignal<OptimisticToggle>,
    click: Callback<()>,
}

impl ToggleHandle {
    pub fn is_active(&self) -> bool {
        self.state.with(OptimisticToggle::is_active)
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|t| t.phase() == Phase::Tentative)
    }

    pub fn click(&self) {
        self.click.run(());
    }

    /// May arrive after the owning view is gone
    pub fn load_confirmed(&self, active: bool) {
        self.state.try_update(|t| t.load_confirmed(active));
    }
}

pub fn collection_items<K, T>(fetcher: RwSignal<CollectionFetcher<K, T>>) -> Signal<Vec<T>>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || fetcher.with(|f| f.items().to_vec()))
}

pub fn collection_error<K, T>(fetcher: RwSignal<CollectionFetcher<K, T>>) -> Signal<Option<String>>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || fetcher.with(|f| f.error().map(str::to_string)))
}

/// True while a request for the current key is outstanding
pub fn collection_loading<K, T>(fetcher: RwSignal<CollectionFetcher<K, T>>) -> Signal<bool>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || fetcher.with(CollectionFetcher::is_loading))
}

pub fn form_error<F>(form: RwSignal<FormSubmitter<F>>) -> Signal<Option<String>>
where
    F: Clone + Default + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.error().map(str::to_string)))
}

/// Submit buttons stay disabled until the request settles
pub fn form_busy<F>(form: RwSignal<FormSubmitter<F>>) -> Signal<bool>
where
    F: Clone + Default + Send + Sync + 'static,
{
    Signal::derive(move || form.with(FormSubmitter::is_submitting))
}

/// Flip on click, then send whatever request the pre-click state called for
pub fn use_optimistic_toggle<F, Fut>(initial: bool, send: F) -> ToggleHandle
where
    F: Fn(Client, ToggleRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let services = use_services();
    let state = RwSignal::new(OptimisticToggle::new(initial, services.config.toggle));

    let click = Callback::new(move |_: ()| {
        let Some(intent) = state.try_update(|t| t.click()) else {
            return;
        };
        let request = send(services.client.clone(), intent.request);
        spawn_local(async move {
            let result = request.await;
            state.try_update(|t| t.settle(intent, result));
        });
    });

    ToggleHandle { state, click }
}
