use leptos::prelude::*;
use leptos::svg;

use crate::navigation::Icon;

pub fn Glyph(icon: Icon, class: &'static str) -> impl IntoView {
    svg::svg()
        .aria_hidden("true")
        .class(class)
        .attr("data-icon", icon.name())
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("viewBox", "0 0 24 24")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(icon.paths().iter().map(|d| svg::path().attr("d", *d)).collect_view())
}
