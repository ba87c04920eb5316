use std::future::Future;
use std::sync::Arc;

use futures::future::{abortable, AbortHandle, Aborted};
use leptos::logging::log;
use leptos::*;
use tokio::sync::watch;

use crate::config::IDENTITY_SCRIPT_URL;

/// Name of the signal raised once the identity-service script has loaded.
pub const IDENTITY_LOADED_EVENT: &str = "google-identity-service-loaded";

/// Publishes the identity script's load completion to any number of subscribers.
///
/// Late subscribers still observe the load, since the channel keeps its latest value.
#[derive(Clone, Debug)]
pub struct IdentityChannel {
    loaded: Arc<watch::Sender<bool>>,
}

impl Default for IdentityChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityChannel {
    pub fn new() -> Self {
        let (loaded, _) = watch::channel(false);
        Self {
            loaded: Arc::new(loaded),
        }
    }

    /// Mark the script as loaded. Only the first call wakes subscribers.
    pub fn publish_loaded(&self) {
        let first = self.loaded.send_if_modified(|loaded| !std::mem::replace(loaded, true));
        if first {
            log!("[IDENTITY] {}", IDENTITY_LOADED_EVENT);
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loaded.subscribe()
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.loaded.receiver_count()
    }
}

/// Wait for the load signal. Aborting the handle drops the subscription and
/// resolves the future with `Err(Aborted)`.
pub fn wait_until_loaded(
    channel: &IdentityChannel,
) -> (impl Future<Output = Result<bool, Aborted>>, AbortHandle) {
    let mut loaded = channel.subscribe();
    abortable(async move { loaded.wait_for(|loaded| *loaded).await.is_ok() })
}

/// Script URL to inject, or `None` when no client id is configured.
pub fn identity_script_src(client_id: Option<&str>) -> Option<&'static str> {
    client_id
        .filter(|id| !id.trim().is_empty())
        .map(|_| IDENTITY_SCRIPT_URL)
}

/// Whether the identity script has already run in this page (`window.google.accounts`).
pub fn identity_service_ready() -> bool {
    let google = js_sys::Reflect::get(&js_sys::global(), &"google".into());
    match google {
        Ok(google) if google.is_object() => js_sys::Reflect::get(&google, &"accounts".into())
            .map(|accounts| accounts.is_object())
            .unwrap_or(false),
        _ => false,
    }
}

/// Publish immediately if the script ran before anyone listened for `load`.
pub fn publish_if_ready(channel: &IdentityChannel, ready: impl FnOnce() -> bool) -> bool {
    if ready() {
        log!("[IDENTITY] Script loaded before hydration");
        channel.publish_loaded();
        true
    } else {
        false
    }
}

#[component]
pub fn IdentityScript(client_id: Option<String>, channel: IdentityChannel) -> impl IntoView {
    let Some(src) = identity_script_src(client_id.as_deref()) else {
        return None::<View>;
    };

    // A deferred script usually finishes before hydration attaches `on:load`
    let pending = channel.clone();
    create_effect(move |_| {
        publish_if_ready(&pending, identity_service_ready);
    });

    Some(view! {
        <script
            src=src
            defer=true
            on:load=move |_| channel.publish_loaded()
        ></script>
    }
    .into_view())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_client_id_means_no_script() {
        assert_eq!(identity_script_src(None), None);
        assert_eq!(identity_script_src(Some("")), None);
    }

    #[test]
    fn client_id_selects_fixed_url() {
        assert_eq!(
            identity_script_src(Some("client-123")),
            Some("https://accounts.google.com/gsi/client")
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn unconfigured_renders_nothing() {
        let html = crate::components::render_html(|| {
            view! { <IdentityScript client_id=None channel=IdentityChannel::new()/> }
        });
        assert!(!html.contains("<script"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn configured_renders_exactly_one_script() {
        let html = crate::components::render_html(|| {
            view! {
                <IdentityScript
                    client_id=Some("client-123".to_string())
                    channel=IdentityChannel::new()
                />
            }
        });
        assert_eq!(html.matches("<script").count(), 1);
        assert!(html.contains(IDENTITY_SCRIPT_URL));
    }

    #[tokio::test]
    async fn subscribers_observe_load() {
        let channel = IdentityChannel::new();
        let mut early = channel.subscribe();
        assert!(!channel.is_loaded());

        channel.publish_loaded();

        early.changed().await.unwrap();
        assert!(*early.borrow());
        // subscribing after the fact still sees the loaded state
        assert!(*channel.subscribe().borrow());
    }

    #[test]
    fn publishes_when_script_ran_before_listener() {
        let channel = IdentityChannel::new();
        assert!(!publish_if_ready(&channel, || false));
        assert!(!channel.is_loaded());

        assert!(publish_if_ready(&channel, || true));
        assert!(channel.is_loaded());
        // a later `load` event is harmless
        channel.publish_loaded();
        assert!(channel.is_loaded());
    }

    #[tokio::test]
    async fn wait_resolves_on_load() {
        let channel = IdentityChannel::new();
        let (loaded, _handle) = wait_until_loaded(&channel);

        channel.publish_loaded();
        assert_eq!(loaded.await, Ok(true));
    }

    #[tokio::test]
    async fn wait_resolves_immediately_when_already_loaded() {
        let channel = IdentityChannel::new();
        channel.publish_loaded();

        let (loaded, _handle) = wait_until_loaded(&channel);
        assert_eq!(loaded.await, Ok(true));
    }

    #[tokio::test]
    async fn aborted_wait_releases_subscription() {
        let channel = IdentityChannel::new();
        let (loaded, handle) = wait_until_loaded(&channel);
        assert_eq!(channel.subscriber_count(), 1);

        handle.abort();
        assert_eq!(loaded.await, Err(Aborted));
        assert_eq!(channel.subscriber_count(), 0);
    }
}
