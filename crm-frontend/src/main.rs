use crm_frontend::config::Config;
use crm_frontend::{Body, Error, init_tracing};
use leptos::mount::mount_to_body;

fn main() -> Result<(), Error> {
    console_error_panic_hook::set_once();

    let config = Config::load()?;
    init_tracing(&config.log)?;
    tracing::info!("{config:#?}");

    mount_to_body(move || Body(config));
    Ok(())
}
