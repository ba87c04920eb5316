/// Root of the storefront UI, shared by the server render and the hydrated client.
use leptos::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::identity_script::{IdentityChannel, IdentityScript};
use crate::config::IdentityConfig;
use crate::pages::{
    account::AccountPage, home::HomePage, not_found::NotFound, product::ProductPage,
    products::ProductsPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = IdentityConfig::from_build_env();
    let channel = IdentityChannel::new();
    if identity.client_id.is_some() {
        provide_context(channel.clone());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>
        <IdentityScript client_id=identity.client_id channel=channel/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/account" view=AccountPage/>
                <Route path="/products" view=ProductsPage/>
                <Route path="/products/:slug" view=ProductPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}
