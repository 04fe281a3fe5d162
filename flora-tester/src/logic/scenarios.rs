//! Property checks run once per iteration with a freshly seeded RNG.
use anyhow::{Result, bail, ensure};
use flora_core::{
    Catalog, PageSize, PageToken, PagingSession, PriceRange, Product, ProductFilters,
    WindowShape, compute_window, derive, reconcile_page, total_pages,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

type Check = fn(&mut ChaCha8Rng) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    check: Check,
}

impl Scenario {
    const fn new(key: &'static str, description: &'static str, check: Check) -> Self {
        Self {
            key,
            description,
            check,
        }
    }

    /// # Errors
    ///
    /// Returns the first property violation found for this input.
    pub fn run(&self, rng: &mut ChaCha8Rng) -> Result<()> {
        (self.check)(rng)
    }
}

pub const ALL_SCENARIOS: [Scenario; 7] = [
    Scenario::new(
        "paging-partition",
        "Pages of a collection concatenate back to the collection",
        paging_partition,
    ),
    Scenario::new(
        "total-pages",
        "Page count is the ceiling of items over page size",
        total_pages_check,
    ),
    Scenario::new(
        "page-window",
        "Pager windows keep their shape, bounds and ordering",
        page_window,
    ),
    Scenario::new(
        "reconcile-shrink",
        "A shrinking collection snaps stale pages back to 1",
        reconcile_shrink,
    ),
    Scenario::new(
        "derive-idempotence",
        "Deriving the same page twice gives the same view",
        derive_idempotence,
    ),
    Scenario::new(
        "catalog-queries",
        "Search, category and related queries page the bundled catalog",
        catalog_queries,
    ),
    Scenario::new(
        "filters",
        "Filtered products satisfy every active shop filter",
        filters,
    ),
];

#[must_use]
pub fn find_scenario(key: &str) -> Option<&'static Scenario> {
    ALL_SCENARIOS.iter().find(|scenario| scenario.key == key)
}

fn page_size(rng: &mut ChaCha8Rng, max: usize) -> PageSize {
    PageSize::new(rng.gen_range(1..=max)).unwrap_or_default()
}

fn paging_partition(rng: &mut ChaCha8Rng) -> Result<()> {
    let len = rng.gen_range(0..=250);
    let items: Vec<usize> = (0..len).collect();
    let size = page_size(rng, 40);
    let pages = total_pages(len, size);

    let mut rebuilt = Vec::with_capacity(len);
    for page in 1..=pages {
        let result = derive(&items, size, page);
        ensure!(!result.is_empty(), "page {page}/{pages} of {len} is empty");
        ensure!(
            result.items.len() <= size.get(),
            "page {page} holds {} items, more than {size}",
            result.items.len()
        );
        if page < pages {
            ensure!(result.items.len() == size.get(), "short page {page} before the last");
        }
        rebuilt.extend_from_slice(result.items);
    }
    ensure!(rebuilt == items, "pages of {len} at size {size} do not rebuild the collection");
    ensure!(
        derive(&items, size, pages + 1).is_empty(),
        "page past the end is not empty"
    );
    ensure!(derive(&items, size, 0).is_empty(), "page 0 is not empty");
    Ok(())
}

fn total_pages_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let len = rng.gen_range(0..=10_000);
    let size = page_size(rng, 100);
    let pages = total_pages(len, size);
    let expected = len / size.get() + usize::from(len % size.get() != 0);
    ensure!(pages == expected, "{len} items at {size}: got {pages}, want {expected}");
    ensure!((len == 0) == (pages == 0), "empty/zero-page mismatch for {len}");
    if pages > 0 {
        ensure!(
            (pages - 1) * size.get() < len && len <= pages * size.get(),
            "{pages} pages do not bound {len} items"
        );
    }
    Ok(())
}

fn page_window(rng: &mut ChaCha8Rng) -> Result<()> {
    let total = rng.gen_range(0..=60);
    if total == 0 {
        ensure!(compute_window(1, 0).is_empty(), "hidden window has tokens");
        return Ok(());
    }
    let current = rng.gen_range(1..=total);
    let tokens = compute_window(current, total);
    let pages: Vec<usize> = tokens.iter().filter_map(|token| token.page()).collect();

    ensure!(pages.contains(&current), "window {tokens:?} misses current page {current}");
    ensure!(pages.windows(2).all(|w| w[0] < w[1]), "pages out of order: {tokens:?}");
    ensure!(
        pages.iter().all(|page| (1..=total).contains(page)),
        "page out of 1..={total}: {tokens:?}"
    );
    ensure!(
        !tokens
            .windows(2)
            .any(|w| w[0].is_ellipsis() && w[1].is_ellipsis()),
        "adjacent ellipses: {tokens:?}"
    );

    match WindowShape::for_total(total) {
        WindowShape::Flat => {
            ensure!(pages == (1..=total).collect::<Vec<_>>(), "flat window skips pages");
        }
        WindowShape::Windowed => {
            ensure!(tokens.len() <= 7, "window of {} tokens: {tokens:?}", tokens.len());
            ensure!(tokens.first() == Some(&PageToken::Page(1)), "first page not pinned");
            ensure!(tokens.last() == Some(&PageToken::Page(total)), "last page not pinned");
            for pair in tokens.windows(3) {
                if let [PageToken::Page(a), PageToken::Ellipsis, PageToken::Page(b)] = pair {
                    ensure!(b - a > 1, "ellipsis hides nothing between {a} and {b}");
                }
            }
            for pair in tokens.windows(2) {
                if let [PageToken::Page(a), PageToken::Page(b)] = pair {
                    ensure!(b - a == 1, "gap between {a} and {b} without ellipsis");
                }
            }
        }
        WindowShape::Hidden => bail!("{total} pages classified as hidden"),
    }
    Ok(())
}

fn reconcile_shrink(rng: &mut ChaCha8Rng) -> Result<()> {
    let size = page_size(rng, 25);
    let mut session = PagingSession::new(size);
    let before = rng.gen_range(1..=300);
    session.sync_len(before);
    let page = rng.gen_range(1..=session.total_pages().max(1));
    session.set_page(page);

    let after = rng.gen_range(0..=before);
    let reset = session.sync_len(after);
    let pages = total_pages(after, size);
    let expected = reconcile_page(page, pages);
    ensure!(
        session.current_page() == expected,
        "shrink {before}->{after} left page {} (want {expected})",
        session.current_page()
    );
    ensure!(reset == (expected != page), "reset flag {reset} for {page}->{expected}");
    if pages > 0 {
        ensure!(
            (1..=pages).contains(&session.current_page()),
            "page {} outside 1..={pages}",
            session.current_page()
        );
    }
    Ok(())
}

fn derive_idempotence(rng: &mut ChaCha8Rng) -> Result<()> {
    let len = rng.gen_range(0..=120);
    let items: Vec<u32> = (0..len).map(|_| rng.r#gen()).collect();
    let size = page_size(rng, 30);
    let page = rng.gen_range(0..=total_pages(len, size) + 1);

    let first = derive(&items, size, page);
    let second = derive(&items, size, page);
    ensure!(first == second, "derive({len}, {size}, {page}) is not stable");

    let mut session = PagingSession::new(size);
    session.set_page(page.max(1));
    let view = session.view(&items);
    let again = session.view(&items);
    ensure!(view == again, "session view changed without input changes");
    Ok(())
}

fn random_needle(rng: &mut ChaCha8Rng, products: &[Product]) -> String {
    let Some(product) = products.choose(rng) else {
        return String::new();
    };
    let chars: Vec<char> = product.name.chars().collect();
    let start = rng.gen_range(0..chars.len().max(1));
    let take = rng.gen_range(1..=4);
    chars.iter().skip(start).take(take).collect()
}

fn catalog_queries(rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Catalog::bundled();
    let size = page_size(rng, 12);

    let query = random_needle(rng, &catalog.products);
    let needle = query.trim().to_lowercase();
    let expected: Vec<u64> = catalog
        .products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .map(|product| product.id)
        .collect();
    let first = catalog.search_products(&query, 1, size);
    ensure!(first.total == expected.len(), "search {query:?} total {} != {}", first.total, expected.len());
    let mut found = Vec::new();
    for page in 1..=first.total_pages() {
        found.extend(catalog.search_products(&query, page, size).items.iter().map(|p| p.id));
    }
    ensure!(found == expected, "search {query:?} pages do not rebuild the matches");

    if let Some(category) = catalog.categories.choose(rng) {
        let listing = catalog.products_by_category(category.id, 1, size);
        let mut seen = 0;
        for page in 1..=listing.total_pages() {
            let rows = catalog.products_by_category(category.id, page, size).items;
            ensure!(
                rows.iter().all(|p| p.category.as_ref().is_some_and(|c| c.id == category.id)),
                "category {} page {page} leaks other categories",
                category.id
            );
            seen += rows.len();
        }
        ensure!(seen == listing.total, "category {} pages hold {seen} of {}", category.id, listing.total);
    }

    if let Some(product) = catalog.products.choose(rng) {
        let limit = rng.gen_range(0..=10);
        let related = catalog.related_products(product.id, limit);
        ensure!(
            related.iter().all(|r| r.id != product.id),
            "product {} is related to itself",
            product.id
        );
        let want = limit.min(catalog.products.len() - 1);
        ensure!(related.len() == want, "related to {}: {} of {want}", product.id, related.len());
    }
    Ok(())
}

fn random_filters(rng: &mut ChaCha8Rng, catalog: &Catalog) -> ProductFilters {
    let mut filters = ProductFilters::default();
    if rng.gen_bool(0.5) {
        filters = filters.with_query(random_needle(rng, &catalog.products));
    }
    if rng.gen_bool(0.5) {
        filters = filters.with_category(catalog.categories.choose(rng).map(|c| c.id));
    }
    if rng.gen_bool(0.4) {
        filters = filters.with_collection(catalog.collections.choose(rng).map(|c| c.id));
    }
    if rng.gen_bool(0.5)
        && let Some(range) = PriceRange::ALL.choose(rng)
    {
        filters = filters.with_price_range(*range);
    }
    filters
}

fn satisfies(filters: &ProductFilters, product: &Product) -> bool {
    let needle = filters.search_query.trim().to_lowercase();
    product.name.to_lowercase().contains(&needle)
        && filters
            .category_id
            .is_none_or(|id| product.category.as_ref().is_some_and(|c| c.id == id))
        && filters
            .collection_id
            .is_none_or(|id| product.collection.as_ref().is_some_and(|c| c.id == id))
        && filters.min_price.is_none_or(|min| product.price >= min)
        && filters.max_price.is_none_or(|max| product.price <= max)
}

fn filters(rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Catalog::bundled();
    let filters = random_filters(rng, catalog);
    let kept = filters.apply(&catalog.products);

    for product in &kept {
        ensure!(satisfies(&filters, product), "{} kept by {filters:?}", product.name);
    }
    let dropped = catalog
        .products
        .iter()
        .filter(|product| !kept.iter().any(|k| k.id == product.id));
    for product in dropped {
        ensure!(!satisfies(&filters, product), "{} dropped by {filters:?}", product.name);
    }

    let size = page_size(rng, 20);
    let mut session = PagingSession::new(size);
    session.set_page(rng.gen_range(1..=10));
    let view = session.view(&kept);
    if !kept.is_empty() {
        ensure!(
            (1..=view.total_pages).contains(&view.current_page),
            "filtered view stuck on page {} of {}",
            view.current_page,
            view.total_pages
        );
        ensure!(!view.is_empty(), "filtered view shows an empty page");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn keys_are_unique_and_findable() {
        for scenario in &ALL_SCENARIOS {
            assert_eq!(find_scenario(scenario.key).map(|s| s.key), Some(scenario.key));
        }
        assert!(find_scenario("smoke").is_none());
    }

    #[test]
    fn every_scenario_holds_for_a_spread_of_seeds() {
        for scenario in &ALL_SCENARIOS {
            for seed in 0..40 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                if let Err(err) = scenario.run(&mut rng) {
                    panic!("{} failed at seed {seed}: {err:#}", scenario.key);
                }
            }
        }
    }
}
