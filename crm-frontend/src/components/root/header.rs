use leptos::html;
use leptos::prelude::*;

use super::sidebar::DRAWER_ID;
use crate::components::glyph::Glyph;
use crate::navigation::Icon;

pub const NOTIFICATION_COUNT: u8 = 3;
pub const SEARCH_PLACEHOLDER: &str = "Search leads...";

/// Text of the bell badge. It does not depend on the profile.
pub fn notification_badge() -> Option<String> {
    Some(NOTIFICATION_COUNT.to_string())
}

fn Search() -> impl IntoView {
    html::div().class("hidden md:flex items-center gap-3").child(
        html::div().class("relative").child((
            Glyph(Icon::Search, "w-4 h-4 absolute left-3 top-3 text-gray-400"),
            html::input()
                .r#type("search")
                .aria_label("Search leads")
                .placeholder(SEARCH_PLACEHOLDER)
                .class(
                    "pl-10 w-80 py-2 text-sm rounded-lg bg-gray-50 border border-gray-200 \
                     focus:bg-white",
                ),
        )),
    )
}

fn IconButton(icon: Icon, label: &'static str, badge: Option<String>) -> impl IntoView {
    html::button().r#type("button").class("relative p-2 rounded-lg hover:bg-gray-100").child((
        Glyph(icon, "w-5 h-5 text-gray-600"),
        badge.map(|badge| {
            html::span()
                .class(
                    "absolute -top-1 -right-1 h-5 w-5 flex items-center justify-center \
                     rounded-full bg-red-500 text-white text-xs",
                )
                .child(badge)
        }),
        html::span().class("sr-only").child(label),
    ))
}

pub fn Header() -> impl IntoView {
    html::header().class("bg-white border-b border-gray-200 px-6 py-4").child(
        html::div().class("flex items-center justify-between").child((
            html::div().class("flex items-center gap-4").child((
                html::button()
                    .r#type("button")
                    .attr("data-drawer-target", DRAWER_ID)
                    .attr("data-drawer-toggle", DRAWER_ID)
                    .aria_controls(DRAWER_ID)
                    .class("md:hidden hover:bg-gray-100 p-2 rounded-lg transition-colors duration-200")
                    .child((
                        Glyph(Icon::Menu, "w-5 h-5 text-gray-600"),
                        html::span().class("sr-only").child("Toggle sidebar"),
                    )),
                Search(),
            )),
            html::div().class("flex items-center gap-3").child((
                IconButton(Icon::Bell, "Notifications", notification_badge()),
                IconButton(Icon::Settings, "Settings", None),
            )),
        )),
    )
}
