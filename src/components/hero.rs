use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{ "Everyday goods, made to last" }</h1>
            <p>{ "Small-batch essentials for the home and wardrobe." }</p>
            <a class="hero__cta" href="/products">{ "Shop the collection" }</a>
        </section>
    }
}
