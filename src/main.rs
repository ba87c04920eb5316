#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::logging::log;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use storefront::app::*;

    // Load configuration from [package.metadata.leptos]
    let conf = get_configuration(None)
        .await
        .map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // client-side only, for `trunk serve --open --features csr`
    use storefront::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
