//! Destination guide: city description, photo gallery, places to see.

use leptos::prelude::*;

use crate::api::types::CityContent;

/// Background content for the resolved city.
#[component]
pub fn CityPanel(
	/// City guide section of the report.
	content: CityContent,
) -> impl IntoView {
	let heading = if content.name.is_empty() {
		"About this city".to_string()
	} else {
		format!("About {}", content.name)
	};
	let description =
		(!content.description.is_empty()).then(|| content.description.clone());

	let gallery = (!content.images.is_empty()).then(|| {
		let images = content
			.images
			.into_iter()
			.map(|image| {
				view! {
					<figure class="city-figure">
						<img class="city-image" src=image.url alt=image.alt loading="lazy" />
						<figcaption class="city-credit">{image.credit}</figcaption>
					</figure>
				}
			})
			.collect_view();
		view! { <div class="city-gallery">{images}</div> }
	});

	let spots = (!content.tourist_spots.is_empty()).then(|| {
		let chips = content
			.tourist_spots
			.into_iter()
			.map(|spot| view! { <li class="spot-chip">{spot}</li> })
			.collect_view();
		view! {
			<div class="city-spots">
				<h3>"Worth a visit"</h3>
				<ul class="spot-list">{chips}</ul>
			</div>
		}
	});

	view! {
		<section class="panel city-panel">
			<h2>{heading}</h2>
			{description.map(|text| view! { <p class="city-description">{text}</p> })}
			{gallery}
			{spots}
		</section>
	}
}
