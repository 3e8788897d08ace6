//! Facet sidebar and sort control shared by the listing pages.

use leptos::prelude::*;

use storefront::consts::{CATEGORIES, COLORS, SIZES};
use storefront::filter::{ProductFilter, SortOrder};

/// Which facet list a checkbox group edits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Brand,
    Color,
    Size,
}

fn facet_values(filter: &ProductFilter, facet: Facet) -> &Vec<String> {
    match facet {
        Facet::Category => &filter.categories,
        Facet::Brand => &filter.brands,
        Facet::Color => &filter.colors,
        Facet::Size => &filter.sizes,
    }
}

fn facet_values_mut(filter: &mut ProductFilter, facet: Facet) -> &mut Vec<String> {
    match facet {
        Facet::Category => &mut filter.categories,
        Facet::Brand => &mut filter.brands,
        Facet::Color => &mut filter.colors,
        Facet::Size => &mut filter.sizes,
    }
}

/// One titled group of facet checkboxes.
#[component]
pub fn FacetGroup(
    title: &'static str,
    options: Vec<String>,
    filter: RwSignal<ProductFilter>,
    facet: Facet,
) -> impl IntoView {
    view! {
        <div class="facet-group">
            <h4 class="facet-group__title">{title}</h4>
            {options
                .into_iter()
                .map(|option| {
                    let value = option.clone();
                    let checked =
                        move || filter.with(|f| facet_values(f, facet).contains(&value));
                    let toggled = option.clone();
                    let on_change = move |_| {
                        filter.update(|f| {
                            ProductFilter::toggle(facet_values_mut(f, facet), &toggled);
                        });
                    };
                    view! {
                        <label class="facet-group__option">
                            <input type="checkbox" prop:checked=checked on:change=on_change/>
                            <span>{option}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// The full sidebar: category/brand/color/size facets plus a price range.
/// Brand checkboxes are omitted on pages already scoped to one brand.
#[component]
pub fn FilterPanel(
    filter: RwSignal<ProductFilter>,
    #[prop(optional)] brand_options: Option<Vec<String>>,
) -> impl IntoView {
    let categories: Vec<String> = CATEGORIES.iter().map(|c| (*c).to_owned()).collect();
    let colors: Vec<String> = COLORS.iter().map(|c| (*c).to_owned()).collect();
    let sizes: Vec<String> = SIZES.iter().map(|s| (*s).to_owned()).collect();

    let on_clear = move |_| filter.set(ProductFilter::default());

    let on_min = move |ev| {
        let min = event_target_value(&ev).parse().unwrap_or(0);
        filter.update(|f| f.price_min = min);
    };
    let on_max = move |ev| {
        let max = event_target_value(&ev).parse().unwrap_or(u32::MAX);
        filter.update(|f| f.price_max = max);
    };

    view! {
        <aside class="filter-panel">
            <div class="filter-panel__header">
                <h3>"Filters"</h3>
                <button class="filter-panel__clear" on:click=on_clear>
                    "Clear all"
                </button>
            </div>
            <FacetGroup title="Category" options=categories filter=filter facet=Facet::Category/>
            {brand_options
                .map(|brands| {
                    view! {
                        <FacetGroup title="Brand" options=brands filter=filter facet=Facet::Brand/>
                    }
                })}
            <FacetGroup title="Color" options=colors filter=filter facet=Facet::Color/>
            <FacetGroup title="Size" options=sizes filter=filter facet=Facet::Size/>
            <div class="facet-group">
                <h4 class="facet-group__title">"Price"</h4>
                <div class="facet-group__range">
                    <input
                        type="number"
                        min="0"
                        placeholder="Min"
                        prop:value=move || filter.with(|f| f.price_min.to_string())
                        on:change=on_min
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Max"
                        prop:value=move || filter.with(|f| f.price_max.to_string())
                        on:change=on_max
                    />
                </div>
            </div>
        </aside>
    }
}

/// Sort dropdown bound to a [`SortOrder`] signal.
#[component]
pub fn SortSelect(sort: RwSignal<SortOrder>) -> impl IntoView {
    let on_change = move |ev| {
        sort.set(sort_order_from(&event_target_value(&ev)));
    };

    view! {
        <select class="sort-select" on:change=on_change>
            <option value="popularity">"Popularity"</option>
            <option value="price-low">"Price: Low to High"</option>
            <option value="price-high">"Price: High to Low"</option>
            <option value="name">"Name: A to Z"</option>
        </select>
    }
}

/// Map the dropdown's option value to a sort order; unknown values fall
/// back to popularity.
#[must_use]
pub fn sort_order_from(value: &str) -> SortOrder {
    match value {
        "price-low" => SortOrder::PriceLowToHigh,
        "price-high" => SortOrder::PriceHighToLow,
        "name" => SortOrder::NameAToZ,
        _ => SortOrder::Popularity,
    }
}
