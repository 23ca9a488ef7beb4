use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use super::header::Header;
use super::sidebar::Sidebar;
use crate::components::init;
use crate::config;
use crate::navigation::Navigation;
use crate::profile::ProfileState;
use crate::session::{self, CurrentUser};

/// Everything the shell depends on, handed over by whoever mounts it.
#[derive(Debug, Clone)]
pub struct ShellContext<S> {
    pub session: S,
    pub navigation: Arc<Navigation>,
    pub brand: config::Brand,
}

/// Sidebar and header around `child`.
///
/// Fetches the profile once per mount. The fetch is aborted when the owner of
/// the shell is disposed, so a late answer never touches a dropped signal.
pub fn Shell<S: CurrentUser, IV: IntoView + 'static>(
    context: ShellContext<S>,
    _page_name: Signal<Option<String>>,
    child: impl FnOnce() -> IV,
) -> impl IntoView {
    let ShellContext { session, navigation, brand } = context;

    let (profile, set_profile) = signal(ProfileState::default());
    let (task, handle) =
        session::load(session, move |profile| set_profile(ProfileState::Loaded(profile)));
    spawn_local(task);
    on_cleanup(move || handle.abort());

    let pathname = use_location().pathname;
    Effect::new(move |_| {
        pathname.track();
        init::flowbite();
    });

    html::div().class("antialiased min-h-screen flex w-full bg-gray-50").child((
        Sidebar(brand, navigation, pathname, profile),
        html::main().class("flex-1 flex flex-col min-w-0 md:ml-64").child((
            Header(),
            html::div().class("flex-1 overflow-auto").child(child()),
        )),
    ))
}
