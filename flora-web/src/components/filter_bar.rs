use crate::components::daisy_ui::foundation as f;
use crate::components::daisy_ui::{Badge, DaisyColor, SelectField, SelectOption, TextField};
use flora_core::{Category, Collection, PriceRange, ProductFilters};

const ALL: &str = "";

#[derive(f::Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub filters: ProductFilters,
    #[prop_or_default]
    pub categories: Vec<Category>,
    #[prop_or_default]
    pub collections: Vec<Collection>,
    pub on_change: f::Callback<ProductFilters>,
}

fn id_options(all_label: &str, rows: impl Iterator<Item = (u64, String)>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL, all_label.to_string()))
        .chain(rows.map(|(id, name)| SelectOption::new(id.to_string(), name)))
        .collect()
}

fn price_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL, "Tất cả mức giá"))
        .chain(
            PriceRange::ALL
                .into_iter()
                .map(|range| SelectOption::new(range.key(), range.label())),
        )
        .collect()
}

fn id_value(id: Option<u64>) -> f::AttrValue {
    id.map_or_else(|| ALL.into(), |id| id.to_string().into())
}

fn parse_amount(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|amount| *amount >= 0)
}

/// Search box and filter controls above the shop grid.
#[f::function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> f::Html {
    // Each control edits one field of the current filters.
    let edit = |apply: fn(&mut ProductFilters, String)| {
        let filters = props.filters.clone();
        let cb = props.on_change.clone();
        f::Callback::from(move |value: String| {
            let mut next = filters.clone();
            apply(&mut next, value);
            cb.emit(next);
        })
    };

    let on_search = edit(|filters, value| filters.search_query = value);
    let on_category = edit(|filters, value| filters.category_id = value.parse().ok());
    let on_collection = edit(|filters, value| filters.collection_id = value.parse().ok());
    let on_price = edit(|filters, value| match PriceRange::from_key(&value) {
        Some(range) => *filters = filters.clone().with_price_range(range),
        None => {
            filters.min_price = None;
            filters.max_price = None;
        }
    });
    let on_min = edit(|filters, value| filters.min_price = parse_amount(&value));
    let on_max = edit(|filters, value| filters.max_price = parse_amount(&value));
    let on_clear = {
        let cb = props.on_change.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(ProductFilters::default()))
    };

    let filters = &props.filters;
    let active = filters.active_filter_count();
    let price_value: f::AttrValue = filters
        .price_range()
        .map_or(ALL, PriceRange::key)
        .into();
    let category_name = filters
        .category_id
        .and_then(|id| props.categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone());
    let collection_name = filters
        .collection_id
        .and_then(|id| props.collections.iter().find(|c| c.id == id))
        .map(|c| c.name.clone());
    let chips: Vec<String> = [category_name, collection_name, filters.price_label()]
        .into_iter()
        .flatten()
        .collect();

    f::html! {
        <section class="card bg-base-100 shadow-sm p-4 gap-4" aria-label="Lọc sản phẩm">
            <div class="flex flex-col md:flex-row gap-3 items-end">
                <TextField
                    id="shop-search"
                    value={filters.search_query.clone()}
                    placeholder="Tìm kiếm sản phẩm..."
                    input_type="search"
                    oninput={on_search}
                />
                <div class="flex items-center gap-2 shrink-0">
                    <span class="font-medium">{ "Bộ lọc" }</span>
                    if active > 0 {
                        <Badge label={active.to_string()} variant={DaisyColor::Primary} />
                    }
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                <SelectField
                    id="shop-category"
                    label="Danh mục"
                    options={id_options("Tất cả danh mục", props.categories.iter().map(|c| (c.id, c.name.clone())))}
                    value={id_value(filters.category_id)}
                    on_change={on_category}
                />
                <SelectField
                    id="shop-collection"
                    label="Bộ sưu tập"
                    options={id_options("Tất cả bộ sưu tập", props.collections.iter().map(|c| (c.id, c.name.clone())))}
                    value={id_value(filters.collection_id)}
                    on_change={on_collection}
                />
                <SelectField
                    id="shop-price"
                    label="Khoảng giá"
                    options={price_options()}
                    value={price_value}
                    on_change={on_price}
                />
            </div>
            <div class="flex flex-col gap-2">
                <p class="text-sm text-base-content/60">{ "Hoặc nhập khoảng giá" }</p>
                <div class="grid grid-cols-2 gap-3">
                    <TextField
                        id="shop-min-price"
                        input_type="number"
                        placeholder="Từ"
                        value={filters.min_price.map(|v| v.to_string()).unwrap_or_default()}
                        oninput={on_min}
                    />
                    <TextField
                        id="shop-max-price"
                        input_type="number"
                        placeholder="Đến"
                        value={filters.max_price.map(|v| v.to_string()).unwrap_or_default()}
                        oninput={on_max}
                    />
                </div>
            </div>
            if !chips.is_empty() {
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-base-content/60">{ "Đang lọc:" }</span>
                    { for chips.into_iter().map(|chip| f::html! { <Badge label={chip} outline={true} /> }) }
                    <button type="button" class="btn btn-ghost btn-xs" onclick={on_clear}>{ "Xóa bộ lọc" }</button>
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_select_lists_every_preset() {
        let options = price_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value.as_str(), ALL);
        assert_eq!(options[4].label.as_str(), "Trên 1.000.000đ");
    }

    #[test]
    fn custom_amounts_reject_garbage() {
        assert_eq!(parse_amount(" 250000 "), Some(250_000));
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(id_value(None).as_str(), ALL);
        assert_eq!(id_value(Some(3)).as_str(), "3");
    }
}
