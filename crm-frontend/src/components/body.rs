use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use super::pages;
use super::root::{Shell, ShellContext};
use crate::client::Client;
use crate::config::Config;
use crate::navigation::Navigation;

fn Pages() -> impl IntoView {
    Routes(
        component_props_builder(&Routes)
            .fallback(|| "Not found")
            .children(ToChildren::to_children(move || {
                (
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/"))
                            .view(pages::Dashboard)
                            .build(),
                    ),
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/dashboard"))
                            .view(pages::Dashboard)
                            .build(),
                    ),
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/newlead"))
                            .view(pages::NewLead)
                            .build(),
                    ),
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/leads"))
                            .view(pages::Leads)
                            .build(),
                    ),
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/calendar"))
                            .view(pages::Calendar)
                            .build(),
                    ),
                    Route(
                        component_props_builder(&Route)
                            .path(path!("/commission"))
                            .view(pages::Commission)
                            .build(),
                    ),
                )
            }))
            .build(),
    )
}

pub fn Body(config: Config) -> impl IntoView {
    let context = ShellContext {
        session: Client::new(&config.api),
        navigation: Arc::new(Navigation::default()),
        brand: config.brand,
    };

    Router(
        component_props_builder(&Router)
            .children(ToChildren::to_children(move || {
                let location = use_location();
                let navigation = context.navigation.clone();
                let page_name = Signal::derive(move || {
                    location.pathname.with(|pathname| {
                        navigation.active(pathname).map(|entry| entry.title.clone())
                    })
                });
                Shell(context, page_name, Pages)
            }))
            .build(),
    )
}
