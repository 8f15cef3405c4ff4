use leptos::prelude::*;

use crate::components::campus_map::{CampusMapCanvas, campus};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Static dataset; an Err here is a data-authoring bug surfaced at startup.
	let map = campus().inspect_err(|e| log::error!("campus map data invalid: {e}"));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			{map.map(|map| view! { <CampusMapCanvas map=map fullscreen=true /> })}
		</ErrorBoundary>
	}
}
