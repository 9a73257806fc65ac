//! Catalog card: image, title link, and the add-to-plan button.

use leptos::prelude::*;

use crate::net::types::RecipeSummary;

#[component]
pub fn RecipeCard(
    recipe: RecipeSummary,
    #[prop(into)] adding: Signal<bool>,
    on_add: Callback<RecipeSummary>,
) -> impl IntoView {
    let href = recipe.reference().map(|r| r.detail_href());
    let title = recipe.display_title().to_owned();
    let image = recipe.image.clone().filter(|src| !src.trim().is_empty());
    let alt = title.clone();

    view! {
        <article class="recipe-card">
            {image.map(|src| view! { <img class="recipe-card__image" src=src alt=alt/> })}
            {match href {
                Some(href) => view! { <a class="recipe-card__title" href=href>{title}</a> }.into_any(),
                None => view! { <span class="recipe-card__title">{title}</span> }.into_any(),
            }}
            <button
                class="btn recipe-card__add"
                disabled=move || adding.get()
                on:click=move |_| on_add.run(recipe.clone())
            >
                {move || if adding.get() { "Adding…" } else { "Add to Meal Plan" }}
            </button>
        </article>
    }
}
