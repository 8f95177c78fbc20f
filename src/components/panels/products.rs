//! Outfit product cards matched to the forecast.

use leptos::prelude::*;

use crate::api::types::Product;

/// Suggested products for the current conditions.
#[component]
pub fn ProductsPanel(
	/// Product entries from the report.
	products: Vec<Product>,
) -> impl IntoView {
	let cards = products
		.into_iter()
		.map(|product| {
			view! {
				<a
					class="product-card"
					href=product.link
					target="_blank"
					rel="noopener noreferrer"
				>
					<img class="product-image" src=product.image alt=product.name.clone() loading="lazy" />
					<span class="product-tag">{product.tag}</span>
					<span class="product-brand">{product.brand}</span>
					<span class="product-name">{product.name}</span>
					<span class="product-price">{product.price}</span>
				</a>
			}
		})
		.collect_view();

	view! {
		<section class="panel products-panel">
			<h2>"Outfit picks"</h2>
			<div class="product-grid">{cards}</div>
		</section>
	}
}
