use leptos::html;
use leptos::prelude::*;

fn Placeholder(title: &'static str, description: &'static str) -> impl IntoView {
    html::section().class("p-6").child((
        html::h1().class("text-2xl font-bold text-gray-900").child(title),
        html::p().class("mt-2 text-sm text-gray-500").child(description),
    ))
}

pub fn Dashboard() -> impl IntoView {
    Placeholder("Dashboard", "Pipeline overview")
}

pub fn NewLead() -> impl IntoView {
    Placeholder("New Lead", "Capture a new prospect")
}

pub fn Leads() -> impl IntoView {
    Placeholder("Leads", "Every lead assigned to you")
}

pub fn Calendar() -> impl IntoView {
    Placeholder("Calendar", "Upcoming appointments")
}

pub fn Commission() -> impl IntoView {
    Placeholder("Commission", "Earnings for closed deals")
}
