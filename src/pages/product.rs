use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use crate::catalog::get_product;
use crate::components::navbar::Navbar;
use crate::models::product::Product;
use crate::pages::not_found::NotFound;

/// `/products/:slug`. Unknown slugs render the not-found view.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || params.with(|params| params.get("slug").and_then(|slug| get_product(slug)));

    move || match product() {
        Some(product) => view! { <ProductDetail product=product.clone()/> }.into_view(),
        None => view! { <NotFound/> }.into_view(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let price = product.formatted_price();
    let description = product.description.clone().unwrap_or_default();
    let images = product
        .images
        .iter()
        .map(|src| {
            let src = src.clone();
            let alt = product.name.clone();
            view! { <img src=src alt=alt/> }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=product.name.clone()/>
        <Navbar/>
        <main class="product">
            <div class="product__gallery">{ images }</div>
            <h1>{ product.name }</h1>
            <p class="product__price">{ price }</p>
            <p>{ description }</p>
        </main>
    }
}
