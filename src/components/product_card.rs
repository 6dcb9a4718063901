//! Product recommendation card.

use leptos::prelude::*;

use crate::net::types::Product;

/// One product as a link card: optional image, title, optional price.
#[component]
pub fn ProductCard(product: Product, time: String) -> impl IntoView {
    let title = product.display_title().to_owned();
    let alt = title.clone();
    let href = product.link().map(str::to_owned);
    let image = product.image().map(str::to_owned);
    let price = product.price().map(str::to_owned);

    view! {
        <div class="chat-widget__message chat-widget__message--bot">
            <a class="product-card" href=href target="_blank" rel="noopener noreferrer">
                {image.map(|src| view! { <img class="product-card__image" src=src alt=alt loading="lazy"/> })}
                <span class="product-card__title">{title}</span>
                {price.map(|price| view! { <span class="product-card__price">{price}</span> })}
            </a>
            <span class="chat-widget__time">{time}</span>
        </div>
    }
}
