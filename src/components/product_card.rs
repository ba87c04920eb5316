use leptos::*;
use crate::models::product::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.href();
    let price = product.formatted_price();
    let image = product.cover_image().map(|src| {
        let src = src.to_string();
        let alt = product.name.clone();
        view! { <img src=src alt=alt loading="lazy"/> }
    });

    view! {
        <a class="product-card" href=href>
            { image }
            <h3>{ product.name }</h3>
            <p class="product-card__price">{ price }</p>
        </a>
    }
}
