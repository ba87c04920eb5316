use leptos::*;

use crate::components::identity_script::{wait_until_loaded, IdentityChannel};

#[component]
pub fn Navbar() -> impl IntoView {
    let (identity_ready, set_identity_ready) = create_signal(false);

    // The channel is only provided when an identity client id is configured
    if let Some(channel) = use_context::<IdentityChannel>() {
        create_effect(move |_| {
            if channel.is_loaded() {
                set_identity_ready.set(true);
                return;
            }

            let (loaded, handle) = wait_until_loaded(&channel);
            spawn_local(async move {
                if let Ok(true) = loaded.await {
                    set_identity_ready.set(true);
                }
            });
            on_cleanup(move || handle.abort());
        });
    }

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">{ "Storefront" }</a>
            <nav class="navbar__links">
                <a href="/products">{ "Shop" }</a>
                <a href="/account">{ "Account" }</a>
                <a href="/account?tab=reviews">{ "My reviews" }</a>
            </nav>
            <Show when=move || identity_ready.get()>
                <div id="google-signin" class="navbar__signin"></div>
            </Show>
        </header>
    }
}
