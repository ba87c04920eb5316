use leptos::*;
use crate::components::{hero::Hero, home_overlay::HomeOverlay, navbar::Navbar};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HomeOverlay/>
        <Navbar/>
        <Hero/>
    }
}
