/// Backend base URL, baked in at build time via `BACKEND_URL`. Falls back to
/// the page origin so a same-host deployment needs no configuration.
pub fn get_backend_url() -> String {
    match option_env!("BACKEND_URL") {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default(),
    }
}
