use leptos::*;
use crate::catalog::list_products;
use crate::components::{navbar::Navbar, product_card::ProductCard};

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="products">
            <h1>{ "All products" }</h1>
            <div class="products__grid">
                {
                    list_products().iter().map(|product| {
                        view! { <ProductCard product=product.clone()/> }
                    }).collect::<Vec<_>>()
                }
            </div>
        </main>
    }
}
