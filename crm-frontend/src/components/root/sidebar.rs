use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::glyph::Glyph;
use crate::config;
use crate::navigation::{Entry, Icon, Navigation};
use crate::profile::{self, Identity, ProfileState};

pub const DRAWER_ID: &str = "drawer-navigation";

fn Brand(brand: config::Brand) -> impl IntoView {
    html::div().class("border-b border-gray-100 p-6").child(
        html::div().class("flex items-center gap-3").child((
            html::div()
                .class(
                    "w-10 h-10 bg-gradient-to-r from-amber-400 to-orange-500 rounded-xl flex \
                     items-center justify-center shadow-lg",
                )
                .child(Glyph(Icon::Sun, "w-6 h-6 text-white")),
            html::div().child((
                html::h2().class("font-bold text-gray-900 text-lg").child(brand.name),
                html::p().class("text-xs text-gray-500 font-medium").child(brand.tagline),
            )),
        )),
    )
}

fn Group(label: &'static str, content: impl IntoView) -> impl IntoView {
    html::div().class("mb-4").child((
        html::h3()
            .class("text-xs font-semibold text-gray-400 uppercase tracking-wider px-3 py-2")
            .child(label),
        content,
    ))
}

fn Item(entry: Entry, pathname: Memo<String>) -> impl IntoView {
    let Entry { title, url, icon } = entry.clone();
    html::li().child(
        A(component_props_builder(&A)
            .href(url)
            .children(Box::new(move || {
                (Glyph(icon, "w-5 h-5"), html::span().class("font-medium").child(title)).into_any()
            }))
            .build())
        .attr("class", move || {
            if pathname.with(|pathname| entry.is_active(pathname)) {
                "flex items-center gap-3 px-3 py-2.5 mb-1 rounded-lg transition-all duration-200 \
                 hover:bg-amber-50 hover:text-amber-900 bg-amber-50 text-amber-900 border-r-2 \
                 border-amber-400"
            } else {
                "flex items-center gap-3 px-3 py-2.5 mb-1 rounded-lg transition-all duration-200 \
                 hover:bg-amber-50 hover:text-amber-900 text-gray-600"
            }
        }),
    )
}

fn Stat(label: &'static str, value: impl IntoView) -> impl IntoView {
    html::div()
        .class("flex items-center justify-between text-sm")
        .child((html::span().class("text-gray-600").child(label), value))
}

fn QuickStats(stats: profile::QuickStats) -> impl IntoView {
    Group(
        "Quick Stats",
        html::div().class("px-3 py-2 space-y-3").child((
            Stat(
                "Role",
                html::span()
                    .class(
                        "px-2.5 py-0.5 text-xs font-medium rounded-full border text-amber-700 \
                         border-amber-200 bg-amber-50",
                    )
                    .child(stats.role),
            ),
            Stat(
                "Active Leads",
                html::span().class("font-semibold text-gray-900").child(stats.active_leads),
            ),
            Stat(
                "This Month",
                html::span().class("font-semibold text-green-600").child(stats.monthly_revenue),
            ),
        )),
    )
}

fn Footer(identity: Identity) -> impl IntoView {
    html::div().class("flex items-center gap-3").child((
        html::div()
            .class(
                "w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex \
                 items-center justify-center",
            )
            .child(html::span().class("text-white font-semibold text-sm").child(identity.initials)),
        html::div().class("flex-1 min-w-0").child((
            html::p().class("font-semibold text-gray-900 text-sm truncate").child(identity.name),
            html::p().class("text-xs text-gray-500 truncate capitalize").child(identity.role),
        )),
    ))
}

pub fn Sidebar(
    brand: config::Brand,
    navigation: Arc<Navigation>,
    pathname: Memo<String>,
    profile: ReadSignal<ProfileState>,
) -> impl IntoView {
    html::aside()
        .id(DRAWER_ID)
        .aria_label("Sidenav")
        .class(
            "fixed top-0 left-0 z-40 w-64 h-screen flex flex-col transition-transform \
             -translate-x-full bg-white border-r border-gray-200 md:translate-x-0",
        )
        .child((
            Brand(brand),
            html::div().class("flex-1 overflow-y-auto p-3").child((
                Group(
                    "Navigation",
                    html::ul().class("space-y-1").child(
                        navigation
                            .entries()
                            .iter()
                            .map(|entry| Item(entry.clone(), pathname))
                            .collect_view(),
                    ),
                ),
                move || profile.with(ProfileState::quick_stats).map(QuickStats),
            )),
            html::div()
                .class("border-t border-gray-100 p-4")
                .child(move || profile.with(ProfileState::identity).map(Footer)),
        ))
}
