pub mod account_tabs;
pub mod hero;
pub mod home_overlay;
pub mod identity_script;
pub mod navbar;
pub mod product_card;
pub mod reviews_list;

/// Render a view to HTML inside a throwaway reactive runtime.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<N: leptos::IntoView>(view: impl FnOnce() -> N) -> String {
    let runtime = leptos::create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}
